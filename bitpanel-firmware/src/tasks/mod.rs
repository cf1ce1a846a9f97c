//! Embassy async tasks

mod buttons;
mod serial;

pub use buttons::button_task;
pub use serial::serial_rx_task;
