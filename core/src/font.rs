//! The base 8x8 font.
//!
//! Only the characters the clock actually prints are included. Anything else renders as a blank
//! cell, same as a space.
//!
//! Glyph rows are given top to bottom with bit 0 as the leftmost pixel (the usual layout of public
//! domain 8x8 fonts) and mirrored at compile time into the framebuffer's MSB-first layout.

/// A character cell is 8 pixels wide...
pub const GLYPH_WIDTH: usize = 8;
/// ...and 8 pixels tall
pub const GLYPH_HEIGHT: usize = 8;

/// One 8x8 glyph, a byte per row, most significant bit leftmost
pub type Glyph = [u8; GLYPH_HEIGHT];

const BLANK: Glyph = [0; GLYPH_HEIGHT];

const fn mirror(rows: [u8; GLYPH_HEIGHT]) -> Glyph {
    let mut out = [0; GLYPH_HEIGHT];
    let mut i = 0;
    while i < GLYPH_HEIGHT {
        out[i] = rows[i].reverse_bits();
        i += 1;
    }
    out
}

macro_rules! font {
    ($($c:literal => [$($row:literal),*]),* $(,)?) => {
        /// Every supported character, in glyph index order
        pub const CHARSET: &[char] = &[$($c),*];

        const GLYPHS: &[Glyph] = &[$(mirror([$($row),*])),*];
    };
}

font! {
    ' ' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    '-' => [0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00],
    '/' => [0x60, 0x30, 0x18, 0x0C, 0x06, 0x03, 0x01, 0x00],
    '0' => [0x3E, 0x63, 0x73, 0x7B, 0x6F, 0x67, 0x3E, 0x00],
    '1' => [0x0C, 0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x3F, 0x00],
    '2' => [0x1E, 0x33, 0x30, 0x1C, 0x06, 0x33, 0x3F, 0x00],
    '3' => [0x1E, 0x33, 0x30, 0x1C, 0x30, 0x33, 0x1E, 0x00],
    '4' => [0x38, 0x3C, 0x36, 0x33, 0x7F, 0x30, 0x78, 0x00],
    '5' => [0x3F, 0x03, 0x1F, 0x30, 0x30, 0x33, 0x1E, 0x00],
    '6' => [0x1C, 0x06, 0x03, 0x1F, 0x33, 0x33, 0x1E, 0x00],
    '7' => [0x3F, 0x33, 0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x00],
    '8' => [0x1E, 0x33, 0x33, 0x1E, 0x33, 0x33, 0x1E, 0x00],
    '9' => [0x1E, 0x33, 0x33, 0x3E, 0x30, 0x18, 0x0E, 0x00],
    ':' => [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x00],
    'A' => [0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x00],
    'E' => [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x46, 0x7F, 0x00],
    'H' => [0x33, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x33, 0x00],
    'M' => [0x63, 0x77, 0x7F, 0x7F, 0x6B, 0x63, 0x63, 0x00],
    'O' => [0x1C, 0x36, 0x63, 0x63, 0x63, 0x36, 0x1C, 0x00],
    'P' => [0x3F, 0x66, 0x66, 0x3E, 0x06, 0x06, 0x0F, 0x00],
    'S' => [0x1E, 0x33, 0x07, 0x0E, 0x38, 0x33, 0x1E, 0x00],
    'T' => [0x3F, 0x2D, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00],
    'a' => [0x00, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00],
    'b' => [0x07, 0x06, 0x06, 0x3E, 0x66, 0x66, 0x3B, 0x00],
    'e' => [0x00, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00],
    'f' => [0x1C, 0x36, 0x06, 0x0F, 0x06, 0x06, 0x0F, 0x00],
    'h' => [0x07, 0x06, 0x36, 0x6E, 0x66, 0x66, 0x67, 0x00],
    'i' => [0x0C, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00],
    'l' => [0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00],
    'm' => [0x00, 0x00, 0x33, 0x7F, 0x7F, 0x6B, 0x63, 0x00],
    'n' => [0x00, 0x00, 0x1F, 0x33, 0x33, 0x33, 0x33, 0x00],
    'r' => [0x00, 0x00, 0x3B, 0x6E, 0x66, 0x06, 0x0F, 0x00],
    't' => [0x08, 0x0C, 0x3E, 0x0C, 0x0C, 0x2C, 0x18, 0x00],
}

/// Position of `c` in [`CHARSET`], if the font has it
pub fn index(c: char) -> Option<usize> {
    CHARSET.iter().position(|&known| known == c)
}

/// The 8x8 glyph for `c`. Unsupported characters are blank.
pub fn glyph(c: char) -> &'static Glyph {
    match index(c) {
        Some(i) => &GLYPHS[i],
        None => &BLANK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_character_has_a_glyph() {
        assert_eq!(CHARSET.len(), GLYPHS.len());
    }

    #[test]
    fn rows_are_msb_first() {
        // The top row of '1' is 0x0C in LSB-first order: pixels 2 and 3 from the left
        assert_eq!(glyph('1')[0], 0b0011_0000);
    }

    #[test]
    fn unknown_characters_are_blank() {
        assert_eq!(index('~'), None);
        assert_eq!(glyph('~'), glyph(' '));
    }

    #[test]
    fn clock_text_is_covered() {
        for text in [
            "0123456789:",
            "AM",
            "PM",
            "24 hr",
            "Set",
            "Time",
            "Alarm",
            "Enable",
            "On",
            "Off",
            "AM-PM/24 Hr",
            "AM/PM",
            "24 Hr",
        ] {
            for c in text.chars() {
                assert!(index(c).is_some(), "missing glyph for {:?}", c);
            }
        }
    }
}
