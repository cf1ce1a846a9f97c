//! Inter-task communication
//!
//! Static embassy-sync primitives shared between the button and serial
//! tasks and the foreground loop in `main`. Nothing crosses the task
//! boundary outside of these.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use portable_atomic::AtomicBool;

/// Channel capacity for bytes arriving over the serial console
const SERIAL_CHANNEL_SIZE: usize = 8;

/// Bytes received by the serial task, drained by the main loop
pub static SERIAL_INPUT: Channel<CriticalSectionRawMutex, u8, SERIAL_CHANNEL_SIZE> = Channel::new();

/// Set by a button task after an accepted toggle; the main loop resets it
/// and refreshes the status display
pub static REDRAW: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// LED A state, stored only by button A's task, read by the main loop
pub static LED_A_ON: AtomicBool = AtomicBool::new(false);

/// LED B state, stored only by button B's task, read by the main loop
pub static LED_B_ON: AtomicBool = AtomicBool::new(false);
