//! Button toggle tasks
//!
//! One task instance per panel button. The GPIO edge interrupt only wakes
//! the task; debouncing, the LED write and the redraw signal all run in
//! task context, so nothing heavy happens inside the ISR.

use defmt::*;
use embassy_rp::gpio::{Input, Output};
use embassy_time::Instant;
use portable_atomic::{AtomicBool, Ordering};

use bitpanel_core::debounce::ButtonToggle;

use crate::channels::REDRAW;

/// Debounce falling edges on `button` and toggle `led`.
///
/// `state` is the shared atomic the main loop reads when rendering the
/// status display; only this task stores to it.
#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(
    mut button: Input<'static>,
    mut led: Output<'static>,
    state: &'static AtomicBool,
    name: &'static str,
) {
    info!("Button {} task started", name);

    let mut toggle = ButtonToggle::new();

    loop {
        button.wait_for_falling_edge().await;

        let now_us = Instant::now().as_micros() as u32;
        match toggle.on_falling_edge(now_us) {
            Some(on) => {
                if on {
                    led.set_high();
                } else {
                    led.set_low();
                }
                state.store(on, Ordering::Relaxed);
                info!("Button {}: LED {}", name, if on { "on" } else { "off" });
                REDRAW.signal(());
            }
            None => {
                trace!("Button {}: edge inside quiet interval, discarded", name);
            }
        }
    }
}
