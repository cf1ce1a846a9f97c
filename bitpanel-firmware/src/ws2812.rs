//! WS2812 matrix transport over PIO
//!
//! Drives the 5x5 WS2812 matrix with a PIO state machine running the
//! standard side-set bit pattern at 800 kHz. Autopull with a 24-bit
//! threshold and left shift means each packed `G|R|B` word from the pixel
//! encoder shifts out green byte first, exactly as the LEDs expect.

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pio::{
    Common, Config, FifoJoin, Instance, PioPin, ShiftConfig, ShiftDirection, StateMachine,
};
use fixed::types::U24F8;

use bitpanel_core::glyphs::CELL_COUNT;

// Bit timing in PIO cycles: T1 high lead-in, T2 data level, T3 tail.
const T1: u8 = 2;
const T2: u8 = 5;
const T3: u8 = 3;
const CYCLES_PER_BIT: u32 = (T1 + T2 + T3) as u32;

/// WS2812 bit rate in kHz
const WS2812_FREQ_KHZ: u32 = 800;

/// PIO-backed driver for the 25-cell WS2812 matrix
pub struct Ws2812<'d, P: Instance, const S: usize> {
    sm: StateMachine<'d, P, S>,
}

impl<'d, P: Instance, const S: usize> Ws2812<'d, P, S> {
    /// Load the WS2812 program and start the state machine on `pin`.
    pub fn new(pio: &mut Common<'d, P>, mut sm: StateMachine<'d, P, S>, pin: impl PioPin) -> Self {
        let side_set = pio::SideSet::new(false, 1, false);
        let mut a: pio::Assembler<32> = pio::Assembler::new_with_side_set(side_set);

        let mut wrap_target = a.label();
        let mut wrap_source = a.label();
        let mut do_zero = a.label();
        a.set_with_side_set(pio::SetDestination::PINDIRS, 1, 0);
        a.bind(&mut wrap_target);
        // Fetch the next bit, emit the T1 high pulse, then hold the data
        // level for T2 and return low for T3.
        a.out_with_delay_and_side_set(pio::OutDestination::X, 1, T3 - 1, 0);
        a.jmp_with_delay_and_side_set(pio::JmpCondition::XIsZero, &mut do_zero, T1 - 1, 1);
        a.bind(&mut wrap_source);
        a.nop_with_delay_and_side_set(T2 - 1, 1);
        a.bind(&mut do_zero);
        a.nop_with_delay_and_side_set(T2 - 1, 0);
        let prg = a.assemble_with_wrap(wrap_source, wrap_target);

        let mut cfg = Config::default();

        let out_pin = pio.make_pio_pin(pin);
        cfg.set_out_pins(&[&out_pin]);
        cfg.set_set_pins(&[&out_pin]);
        cfg.use_program(&pio.load_program(&prg), &[&out_pin]);

        // Clock divider, computed in kHz to stay within 24.8 fixed point
        let clock_freq = U24F8::from_num(clk_sys_freq() / 1000);
        let bit_freq = U24F8::from_num(WS2812_FREQ_KHZ * CYCLES_PER_BIT);
        cfg.clock_divider = clock_freq / bit_freq;

        // 24 bits per LED, green byte first out of the high end
        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: 24,
            direction: ShiftDirection::Left,
        };

        sm.set_config(&cfg);
        sm.set_enable(true);

        Self { sm }
    }

    /// Send a full frame, one packed word per cell in emission order.
    ///
    /// Each push blocks until the FIFO has room, so frame writes are paced
    /// by the matrix itself.
    pub async fn write_frame(&mut self, frame: &[u32; CELL_COUNT]) {
        for &word in frame {
            self.sm.tx().wait_push(word).await;
        }
    }

    /// Turn every cell off.
    pub async fn blank(&mut self) {
        self.write_frame(&[0u32; CELL_COUNT]).await;
    }
}
