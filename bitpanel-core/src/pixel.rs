//! WS2812 pixel packing
//!
//! The matrix transport shifts 24 bits per LED out of the high end of a
//! 32-bit word, green byte first. `pack` builds that word from three
//! normalized channels with the demo's fixed brightness applied.

/// Fixed brightness multiplier for the LED matrix (1%).
///
/// The WS2812 cells are painfully bright at close range; the demo runs
/// them at a fraction of full scale.
pub const BRIGHTNESS: f32 = 0.01;

/// Pack three color channels (intended range 0.0..=1.0) into the 32-bit
/// word the matrix transport shifts out: green in the highest byte, then
/// red, then blue, low byte zero.
///
/// Channels are scaled by [`BRIGHTNESS`] and converted with an `as` cast,
/// which truncates toward zero and saturates at the `u8` bounds. Inputs
/// outside 0.0..=1.0 therefore clamp rather than wrap; this is the defined
/// out-of-range behavior.
#[must_use]
pub fn pack(r: f32, g: f32, b: f32) -> u32 {
    let r = (r * 255.0 * BRIGHTNESS) as u8;
    let g = (g * 255.0 * BRIGHTNESS) as u8;
    let b = (b * 255.0 * BRIGHTNESS) as u8;
    (u32::from(g) << 24) | (u32::from(r) << 16) | (u32::from(b) << 8)
}
