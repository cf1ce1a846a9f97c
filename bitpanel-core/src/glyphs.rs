//! Digit glyphs for the 5x5 LED matrix
//!
//! A fixed lookup of ten 5x5 monochrome bitmaps, one per decimal digit,
//! stored row-major. The physical matrix is wired so that each row runs
//! right-to-left, so frames are emitted with a per-row horizontal mirror.

use crate::pixel;

/// Matrix dimensions.
pub const MATRIX_SIDE: usize = 5;

/// Number of cells in a full matrix frame.
pub const CELL_COUNT: usize = MATRIX_SIDE * MATRIX_SIDE;

/// 5x5 bitmaps for the digits 0-9, row-major, 1 = lit.
pub const DIGIT_GLYPHS: [[u8; CELL_COUNT]; 10] = [
    // 0
    [0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0],
    // 1
    [0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0],
    // 2
    [1, 1, 1, 1, 1, 0, 0, 0, 0, 1, 0, 1, 1, 1, 0, 1, 0, 0, 0, 0, 1, 1, 1, 1, 1],
    // 3
    [1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 1, 1, 1, 0, 1, 0, 0, 0, 0, 1, 1, 1, 1, 1],
    // 4
    [0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1],
    // 5
    [1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1],
    // 6
    [1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1],
    // 7
    [1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 1, 1],
    // 8
    [1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 1],
    // 9
    [1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 1],
];

/// Map an emission index to the glyph cell it displays, reversing each
/// row of five.
#[inline]
#[must_use]
pub const fn mirrored_index(index: usize) -> usize {
    (index / MATRIX_SIDE) * MATRIX_SIDE + (MATRIX_SIDE - 1 - index % MATRIX_SIDE)
}

/// Build the full-frame word sequence for a digit, in emission order.
///
/// Lit cells are white at the fixed matrix brightness, dark cells are off.
/// `digit` must be in 0..=9; the caller validates (the table index panics
/// on a contract violation).
#[must_use]
pub fn digit_frame(digit: usize) -> [u32; CELL_COUNT] {
    let glyph = &DIGIT_GLYPHS[digit];
    let mut frame = [0u32; CELL_COUNT];
    let mut index = 0;
    while index < CELL_COUNT {
        let value = f32::from(glyph[mirrored_index(index)]);
        frame[index] = pixel::pack(value, value, value);
        index += 1;
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_pattern(frame: &[u32; CELL_COUNT]) -> [u8; CELL_COUNT] {
        let mut out = [0u8; CELL_COUNT];
        for (cell, word) in out.iter_mut().zip(frame.iter()) {
            *cell = u8::from(*word != 0);
        }
        out
    }

    #[test]
    fn mirror_reverses_within_rows() {
        assert_eq!(mirrored_index(0), 4);
        assert_eq!(mirrored_index(4), 0);
        assert_eq!(mirrored_index(5), 9);
        assert_eq!(mirrored_index(12), 12); // row center is a fixed point
        assert_eq!(mirrored_index(24), 20);
    }

    #[test]
    fn every_digit_emits_a_full_frame() {
        for digit in 0..10 {
            let frame = digit_frame(digit);
            assert_eq!(frame.len(), CELL_COUNT);

            let expected: usize = DIGIT_GLYPHS[digit].iter().map(|&c| c as usize).sum();
            let lit = frame.iter().filter(|&&w| w != 0).count();
            assert_eq!(lit, expected, "digit {digit} lit-cell count");
        }
    }

    #[test]
    fn frame_matches_mirrored_table_row() {
        // Digit 7 is asymmetric in every row, so the mirror is visible.
        let frame = digit_frame(7);
        let pattern = lit_pattern(&frame);

        let mut expected = [0u8; CELL_COUNT];
        for (index, cell) in expected.iter_mut().enumerate() {
            *cell = DIGIT_GLYPHS[7][mirrored_index(index)];
        }
        assert_eq!(pattern, expected);

        // Spot-check the first row: table {1,0,0,0,0} emits as {0,0,0,0,1}.
        assert_eq!(&pattern[..5], &[0, 0, 0, 0, 1]);
    }

    #[test]
    fn symmetric_digit_is_unchanged_by_mirror() {
        let frame = digit_frame(0);
        let pattern = lit_pattern(&frame);
        let mut expected = [0u8; CELL_COUNT];
        expected.copy_from_slice(&DIGIT_GLYPHS[0]);
        assert_eq!(pattern, expected);
    }

    #[test]
    fn lit_cells_are_dim_white() {
        let frame = digit_frame(8);
        let white = crate::pixel::pack(1.0, 1.0, 1.0);
        for &word in frame.iter().filter(|&&w| w != 0) {
            assert_eq!(word, white);
        }
    }
}
