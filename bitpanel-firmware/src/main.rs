//! BitPanel - interactive panel demo firmware
//!
//! Firmware binary for the BitDogLab (RP2040). Two debounced buttons
//! toggle the board's status LEDs, digits typed over the serial link are
//! drawn on the 5x5 WS2812 matrix, and a status summary is mirrored on
//! the 128x64 SSD1306 OLED.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C1, PIO0, UART0};
use embassy_rp::pio::Pio;
use embassy_rp::uart::{BufferedInterruptHandler, BufferedUartTx, Config as UartConfig, Uart};
use embassy_time::Timer;
use embedded_io_async::Write;
use portable_atomic::Ordering;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use bitpanel_core::glyphs;
use bitpanel_core::status::{self, StatusReport};
use bitpanel_core::surface::Surface;

use crate::channels::{LED_A_ON, LED_B_ON, REDRAW, SERIAL_INPUT};
use crate::ssd1306::Ssd1306;
use crate::ws2812::Ws2812;

mod channels;
mod ssd1306;
mod tasks;
mod ws2812;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Foreground poll period
const POLL_INTERVAL_MS: u64 = 50;

type Display = Ssd1306<I2c<'static, I2C1, i2c::Async>>;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("BitPanel firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Status LEDs. The red channel of the RGB LED is wired on GPIO13 but
    // unused by the demo; it is parked low.
    let led_a = Output::new(p.PIN_11, Level::Low);
    let led_b = Output::new(p.PIN_12, Level::Low);
    let _led_red = Output::new(p.PIN_13, Level::Low);

    let button_a = Input::new(p.PIN_5, Pull::Up);
    let button_b = Input::new(p.PIN_6, Pull::Up);

    // OLED on I2C1 at 400 kHz
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = 400_000;
    let i2c = I2c::new_async(p.I2C1, p.PIN_15, p.PIN_14, Irqs, i2c_config);
    let mut display = Ssd1306::new(i2c);

    let mut surface = Surface::new();
    let mut report = StatusReport::new();
    match display.init().await {
        Ok(()) => info!("OLED initialized"),
        Err(_) => warn!("OLED init failed, continuing without display"),
    }
    report.render(&mut surface);
    display.flush(&surface).await.ok();

    // WS2812 matrix on PIO0, blanked at startup
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let mut matrix = Ws2812::new(&mut common, sm0, p.PIN_7);
    matrix.blank().await;
    info!("Matrix initialized");

    // Serial console on UART0
    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, UartConfig::default());
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (mut tx, rx) = uart.split();
    info!("UART initialized");

    spawner
        .spawn(tasks::button_task(button_a, led_a, &LED_A_ON, "A"))
        .unwrap();
    spawner
        .spawn(tasks::button_task(button_b, led_b, &LED_B_ON, "B"))
        .unwrap();
    spawner.spawn(tasks::serial_rx_task(rx)).unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        if let Ok(byte) = SERIAL_INPUT.try_receive() {
            handle_serial_byte(byte, &mut matrix, &mut report, &mut tx).await;
            refresh_status(&mut report, &mut surface, &mut display, &mut tx).await;
        }

        if REDRAW.signaled() {
            REDRAW.reset();
            // The toggle path does not know the last typed character, so
            // the refreshed screen shows a blank in its place.
            report.last_char = ' ';
            refresh_status(&mut report, &mut surface, &mut display, &mut tx).await;
        }

        Timer::after_millis(POLL_INTERVAL_MS).await;
    }
}

/// Process one byte from the serial console.
async fn handle_serial_byte<'d, P, const S: usize>(
    byte: u8,
    matrix: &mut Ws2812<'d, P, S>,
    report: &mut StatusReport,
    tx: &mut BufferedUartTx<'static>,
) where
    P: embassy_rp::pio::Instance,
{
    let ch = byte as char;
    if ch.is_ascii_graphic() || ch == ' ' {
        info!("Received '{}'", ch);
        // Echo back to the console the user is typing on
        let line = status::echo_line(ch);
        tx.write_all(line.as_bytes()).await.ok();
        tx.write_all(b"\r\n").await.ok();
    } else {
        debug!("Received non-printable byte {:#x}", byte);
    }

    if ch.is_ascii_digit() {
        let digit = usize::from(byte - b'0');
        matrix.write_frame(&glyphs::digit_frame(digit)).await;
    }

    report.last_char = ch;
}

/// Redraw the status screen, flush it to the OLED and mirror the state
/// over the serial console.
async fn refresh_status(
    report: &mut StatusReport,
    surface: &mut Surface,
    display: &mut Display,
    tx: &mut BufferedUartTx<'static>,
) {
    report.led_a = LED_A_ON.load(Ordering::Relaxed);
    report.led_b = LED_B_ON.load(Ordering::Relaxed);

    report.render(surface);
    if display.flush(surface).await.is_err() {
        warn!("OLED flush failed");
    }

    // Human-readable mirror of the two status lines
    for (name, on) in [("A", report.led_a), ("B", report.led_b)] {
        let line = status::led_line(name, on);
        tx.write_all(line.as_bytes()).await.ok();
        tx.write_all(b"\r\n").await.ok();
    }
}
