//! Board-agnostic logic for the BitPanel demo
//!
//! This crate contains everything that does not need RP2040 hardware and
//! can therefore be tested on the host:
//!
//! - WS2812 pixel packing (brightness-scaled GRB words)
//! - The 5x5 digit glyph table and matrix frame construction
//! - Debounce state for the two panel buttons
//! - The off-screen display surface and the status screen renderer

#![no_std]
#![deny(unsafe_code)]

pub mod debounce;
pub mod font;
pub mod glyphs;
pub mod pixel;
pub mod status;
pub mod surface;
