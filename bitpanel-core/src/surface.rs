//! Off-screen surface for the 128x64 status display
//!
//! One bit per pixel, laid out the way the SSD1306 expects it: eight
//! horizontal pages of 128 column bytes, bit 0 of each byte at the top of
//! its page. The firmware draws a full frame here and flushes the buffer
//! over I2C in one transfer.

use crate::font;

/// Display width in pixels.
pub const WIDTH: usize = 128;

/// Display height in pixels.
pub const HEIGHT: usize = 64;

/// Number of 8-row pages.
pub const PAGES: usize = HEIGHT / 8;

/// Size of the raw frame buffer in bytes.
pub const BUFFER_LEN: usize = WIDTH * PAGES;

/// A monochrome frame buffer in SSD1306 page layout.
#[derive(Clone)]
pub struct Surface {
    buffer: [u8; BUFFER_LEN],
}

impl Surface {
    /// A fully dark surface.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: [0; BUFFER_LEN],
        }
    }

    /// Raw page-organized bytes, ready to send to the controller.
    #[must_use]
    pub fn buffer(&self) -> &[u8; BUFFER_LEN] {
        &self.buffer
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        self.buffer = [0; BUFFER_LEN];
    }

    /// Set or clear a single pixel. Out-of-bounds coordinates are ignored.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let index = (y / 8) * WIDTH + x;
        let mask = 1 << (y % 8);
        if on {
            self.buffer[index] |= mask;
        } else {
            self.buffer[index] &= !mask;
        }
    }

    /// Read a single pixel. Out-of-bounds reads as dark.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.buffer[(y / 8) * WIDTH + x] & (1 << (y % 8)) != 0
    }

    /// Horizontal line of `len` pixels starting at (x, y).
    pub fn hline(&mut self, x: usize, y: usize, len: usize, on: bool) {
        for dx in 0..len {
            self.set_pixel(x + dx, y, on);
        }
    }

    /// Vertical line of `len` pixels starting at (x, y).
    pub fn vline(&mut self, x: usize, y: usize, len: usize, on: bool) {
        for dy in 0..len {
            self.set_pixel(x, y + dy, on);
        }
    }

    /// Unfilled rectangle with its top-left corner at (x, y).
    pub fn rect(&mut self, x: usize, y: usize, width: usize, height: usize, on: bool) {
        if width == 0 || height == 0 {
            return;
        }
        self.hline(x, y, width, on);
        self.hline(x, y + height - 1, width, on);
        self.vline(x, y, height, on);
        self.vline(x + width - 1, y, height, on);
    }

    /// Draw one character with its top-left corner at (x, y), overwriting
    /// the full 8x8 cell.
    pub fn draw_char(&mut self, x: usize, y: usize, ch: char) {
        let glyph = font::glyph(ch);
        for (dy, row) in glyph.iter().enumerate() {
            for dx in 0..font::GLYPH_SIZE {
                self.set_pixel(x + dx, y + dy, row & (1 << dx) != 0);
            }
        }
    }

    /// Draw a string left to right starting at (x, y), advancing one glyph
    /// cell per character. Text past the right edge is clipped.
    pub fn draw_text(&mut self, x: usize, y: usize, text: &str) {
        for (offset, ch) in text.chars().enumerate() {
            self.draw_char(x + offset * font::GLYPH_SIZE, y, ch);
        }
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}
