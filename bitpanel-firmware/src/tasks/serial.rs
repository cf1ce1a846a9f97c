//! Serial console receive task
//!
//! Reads bytes from the buffered UART and forwards them to the main loop.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use crate::channels::SERIAL_INPUT;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Serial RX task - forwards received bytes to the input channel
#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: BufferedUartRx<'static>) {
    info!("Serial RX task started");

    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);
                for &byte in &buf[..n] {
                    // Drop input when the main loop falls behind
                    if SERIAL_INPUT.try_send(byte).is_err() {
                        warn!("Serial input channel full, dropping byte");
                    }
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
