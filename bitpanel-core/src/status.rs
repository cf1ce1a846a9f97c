//! Status screen renderer
//!
//! Lays out the fixed demo screen: a border, the last character received
//! over serial, and one line per status LED. Rendering is pure; flushing
//! the surface to the panel is the firmware's job.

use heapless::String;

use crate::surface::Surface;

/// Border position and size.
const BORDER: (usize, usize, usize, usize) = (3, 3, 122, 58);

/// Where the last received character is drawn.
const CHAR_POS: (usize, usize) = (10, 10);

/// Y positions of the two LED status lines.
const LED_A_LINE_Y: usize = 30;
const LED_B_LINE_Y: usize = 45;

/// Left margin of the status lines.
const LINE_X: usize = 10;

/// Snapshot of everything shown on the status display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusReport {
    /// Last character received over serial, space if none yet.
    pub last_char: char,
    /// Green LED state, toggled by button A.
    pub led_a: bool,
    /// Blue LED state, toggled by button B.
    pub led_b: bool,
}

impl StatusReport {
    /// The screen shown at power-on: no character, both LEDs off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_char: ' ',
            led_a: false,
            led_b: false,
        }
    }

    /// Draw the full status screen onto `surface`, replacing its previous
    /// contents.
    pub fn render(&self, surface: &mut Surface) {
        surface.clear();

        let (x, y, w, h) = BORDER;
        surface.rect(x, y, w, h, true);

        surface.draw_char(CHAR_POS.0, CHAR_POS.1, self.last_char);

        surface.draw_text(LINE_X, LED_A_LINE_Y, &led_line("A", self.led_a));
        surface.draw_text(LINE_X, LED_B_LINE_Y, &led_line("B", self.led_b));
    }
}

impl Default for StatusReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the echo line sent back over the serial console when a
/// character is received, e.g. `Received: 5`.
pub fn echo_line(ch: char) -> String<12> {
    let mut line = String::new();
    let _ = line.push_str("Received: ");
    let _ = line.push(ch);
    line
}

/// Build one fixed-width status line, e.g. `LED A: ON ` or `LED B: OFF`.
///
/// Also used by the firmware to mirror LED state over the serial console.
pub fn led_line(name: &str, on: bool) -> String<10> {
    let mut line = String::new();
    // The pieces always fit in 10 bytes.
    let _ = line.push_str("LED ");
    let _ = line.push_str(name);
    let _ = line.push_str(": ");
    let _ = line.push_str(if on { "ON " } else { "OFF" });
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font;

    /// True if the 8x8 cell at (x, y) matches the glyph for `ch`.
    fn cell_shows(surface: &Surface, x: usize, y: usize, ch: char) -> bool {
        let glyph = font::glyph(ch);
        for (dy, row) in glyph.iter().enumerate() {
            for dx in 0..font::GLYPH_SIZE {
                if surface.pixel(x + dx, y + dy) != (row & (1 << dx) != 0) {
                    return false;
                }
            }
        }
        true
    }

    fn text_at(surface: &Surface, x: usize, y: usize, text: &str) -> bool {
        text.chars()
            .enumerate()
            .all(|(i, ch)| cell_shows(surface, x + i * font::GLYPH_SIZE, y, ch))
    }

    #[test]
    fn echo_line_carries_the_character() {
        assert_eq!(echo_line('5').as_str(), "Received: 5");
        assert_eq!(echo_line(' ').as_str(), "Received:  ");
    }

    #[test]
    fn led_lines_are_fixed_width() {
        assert_eq!(led_line("A", true).as_str(), "LED A: ON ");
        assert_eq!(led_line("A", false).as_str(), "LED A: OFF");
        assert_eq!(led_line("B", true).as_str(), "LED B: ON ");
    }

    #[test]
    fn render_draws_the_border() {
        let mut surface = Surface::new();
        StatusReport::new().render(&mut surface);

        assert!(surface.pixel(3, 3));
        assert!(surface.pixel(124, 60));
        assert!(!surface.pixel(2, 2));
    }

    #[test]
    fn render_places_char_and_led_lines() {
        let report = StatusReport {
            last_char: '5',
            led_a: true,
            led_b: false,
        };
        let mut surface = Surface::new();
        report.render(&mut surface);

        assert!(cell_shows(&surface, 10, 10, '5'));
        assert!(text_at(&surface, 10, 30, "LED A: ON "));
        assert!(text_at(&surface, 10, 45, "LED B: OFF"));
    }

    #[test]
    fn render_replaces_previous_frame() {
        let mut surface = Surface::new();
        StatusReport {
            last_char: '8',
            led_a: true,
            led_b: true,
        }
        .render(&mut surface);

        // A later frame with the placeholder char must not show the '8'.
        StatusReport::new().render(&mut surface);
        assert!(cell_shows(&surface, 10, 10, ' '));
        assert!(text_at(&surface, 10, 30, "LED A: OFF"));
        assert!(text_at(&surface, 10, 45, "LED B: OFF"));
    }

    #[test]
    fn on_off_text_starts_after_the_label() {
        let report = StatusReport {
            last_char: ' ',
            led_a: true,
            led_b: true,
        };
        let mut surface = Surface::new();
        report.render(&mut surface);

        // "LED A: " is seven cells, so the state text begins at x = 66.
        assert!(text_at(&surface, 10 + 7 * font::GLYPH_SIZE, 30, "ON "));
    }
}
