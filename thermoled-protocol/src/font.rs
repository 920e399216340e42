//! 5x8 ASCII font
//!
//! One glyph per character from `' '` (0x20) to `'_'` (0x5F), five columns
//! each. A column byte is a vertical strip of 8 pixels, bit 0 at the top,
//! matching the controller's page layout. Lower-case letters are not in the
//! table; callers upper-case text before printing.

/// Columns per glyph
pub const GLYPH_WIDTH: usize = 5;

/// First character in the table
pub const FIRST_CHAR: u8 = b' ';

/// Last character in the table
pub const LAST_CHAR: u8 = b'_';

/// Number of glyphs in the table
pub const GLYPH_COUNT: usize = (LAST_CHAR - FIRST_CHAR) as usize + 1;

/// Column pattern of one character
pub type Glyph = [u8; GLYPH_WIDTH];

/// Glyph columns, laid out back to back
pub static FONT_5X8: [u8; GLYPH_COUNT * GLYPH_WIDTH] = [
    0x00, 0x00, 0x00, 0x00, 0x00, // ' '
    0x00, 0x00, 0x2F, 0x00, 0x00, // '!'
    0x00, 0x07, 0x00, 0x07, 0x00, // '"'
    0x14, 0x7F, 0x14, 0x7F, 0x14, // '#'
    0x24, 0x2A, 0x7F, 0x2A, 0x12, // '$'
    0x62, 0x64, 0x08, 0x13, 0x23, // '%'
    0x36, 0x49, 0x55, 0x22, 0x50, // '&'
    0x00, 0x05, 0x03, 0x00, 0x00, // '\''
    0x00, 0x1C, 0x22, 0x41, 0x00, // '('
    0x00, 0x41, 0x22, 0x1C, 0x00, // ')'
    0x14, 0x08, 0x3E, 0x08, 0x14, // '*'
    0x08, 0x08, 0x3E, 0x08, 0x08, // '+'
    0x00, 0x00, 0xA0, 0x60, 0x00, // ','
    0x08, 0x08, 0x08, 0x08, 0x08, // '-'
    0x00, 0x60, 0x60, 0x00, 0x00, // '.'
    0x20, 0x10, 0x08, 0x04, 0x02, // '/'
    0x3E, 0x51, 0x49, 0x45, 0x3E, // '0'
    0x00, 0x42, 0x7F, 0x40, 0x00, // '1'
    0x42, 0x61, 0x51, 0x49, 0x46, // '2'
    0x21, 0x41, 0x45, 0x4B, 0x31, // '3'
    0x18, 0x14, 0x12, 0x7F, 0x10, // '4'
    0x27, 0x45, 0x45, 0x45, 0x39, // '5'
    0x3C, 0x4A, 0x49, 0x49, 0x30, // '6'
    0x01, 0x71, 0x09, 0x05, 0x03, // '7'
    0x36, 0x49, 0x49, 0x49, 0x36, // '8'
    0x06, 0x49, 0x49, 0x29, 0x1E, // '9'
    0x00, 0x36, 0x36, 0x00, 0x00, // ':'
    0x00, 0x56, 0x36, 0x00, 0x00, // ';'
    0x08, 0x14, 0x22, 0x41, 0x00, // '<'
    0x14, 0x14, 0x14, 0x14, 0x14, // '='
    0x00, 0x41, 0x22, 0x14, 0x08, // '>'
    0x02, 0x01, 0x51, 0x09, 0x06, // '?'
    0x32, 0x49, 0x59, 0x51, 0x3E, // '@'
    0x7C, 0x12, 0x11, 0x12, 0x7C, // 'A'
    0x7F, 0x49, 0x49, 0x49, 0x36, // 'B'
    0x3E, 0x41, 0x41, 0x41, 0x22, // 'C'
    0x7F, 0x41, 0x41, 0x22, 0x1C, // 'D'
    0x7F, 0x49, 0x49, 0x49, 0x41, // 'E'
    0x7F, 0x09, 0x09, 0x09, 0x01, // 'F'
    0x3E, 0x41, 0x49, 0x49, 0x7A, // 'G'
    0x7F, 0x08, 0x08, 0x08, 0x7F, // 'H'
    0x00, 0x41, 0x7F, 0x41, 0x00, // 'I'
    0x20, 0x40, 0x41, 0x3F, 0x01, // 'J'
    0x7F, 0x08, 0x14, 0x22, 0x41, // 'K'
    0x7F, 0x40, 0x40, 0x40, 0x40, // 'L'
    0x7F, 0x02, 0x0C, 0x02, 0x7F, // 'M'
    0x7F, 0x04, 0x08, 0x10, 0x7F, // 'N'
    0x3E, 0x41, 0x41, 0x41, 0x3E, // 'O'
    0x7F, 0x09, 0x09, 0x09, 0x06, // 'P'
    0x3E, 0x41, 0x51, 0x21, 0x5E, // 'Q'
    0x7F, 0x09, 0x19, 0x29, 0x46, // 'R'
    0x46, 0x49, 0x49, 0x49, 0x31, // 'S'
    0x01, 0x01, 0x7F, 0x01, 0x01, // 'T'
    0x3F, 0x40, 0x40, 0x40, 0x3F, // 'U'
    0x1F, 0x20, 0x40, 0x20, 0x1F, // 'V'
    0x3F, 0x40, 0x38, 0x40, 0x3F, // 'W'
    0x63, 0x14, 0x08, 0x14, 0x63, // 'X'
    0x07, 0x08, 0x70, 0x08, 0x07, // 'Y'
    0x61, 0x51, 0x49, 0x45, 0x43, // 'Z'
    0x00, 0x7F, 0x41, 0x41, 0x00, // '['
    0x02, 0x04, 0x08, 0x10, 0x20, // '\\'
    0x00, 0x41, 0x41, 0x7F, 0x00, // ']'
    0x04, 0x02, 0x01, 0x02, 0x04, // '^'
    0x40, 0x40, 0x40, 0x40, 0x40, // '_'
];

/// Whether `ch` has a glyph
pub const fn is_supported(ch: u8) -> bool {
    ch >= FIRST_CHAR && ch <= LAST_CHAR
}

/// Offset of the first column of `ch` in [`FONT_5X8`]
///
/// Only meaningful for supported characters.
pub const fn glyph_offset(ch: u8) -> usize {
    (ch.wrapping_sub(FIRST_CHAR) as usize) * GLYPH_WIDTH
}

/// Look up the glyph for `ch`
///
/// Returns `None` for characters outside `' '..='_'` instead of reading past
/// the table.
pub fn glyph(ch: u8) -> Option<&'static Glyph> {
    if !is_supported(ch) {
        return None;
    }
    let start = glyph_offset(ch);
    FONT_5X8[start..start + GLYPH_WIDTH].try_into().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_table_len() {
        assert_eq!(GLYPH_COUNT, 64);
        assert_eq!(FONT_5X8.len(), 320);
    }

    #[test]
    fn test_space_is_blank() {
        assert_eq!(glyph(b' '), Some(&[0x00; 5]));
    }

    #[test]
    fn test_letters() {
        assert_eq!(glyph(b'A'), Some(&[0x7C, 0x12, 0x11, 0x12, 0x7C]));
        assert_eq!(glyph(b'B'), Some(&[0x7F, 0x49, 0x49, 0x49, 0x36]));
        assert_eq!(glyph(b'_'), Some(&[0x40; 5]));
    }

    #[test]
    fn test_digits_and_point() {
        assert_eq!(glyph(b'0'), Some(&[0x3E, 0x51, 0x49, 0x45, 0x3E]));
        assert_eq!(glyph(b'.'), Some(&[0x00, 0x60, 0x60, 0x00, 0x00]));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(glyph(b'a'), None);
        assert_eq!(glyph(0x1F), None);
        assert_eq!(glyph(0x00), None);
        assert_eq!(glyph(0xFF), None);
    }

    proptest! {
        #[test]
        fn prop_glyph_matches_offset(ch in FIRST_CHAR..=LAST_CHAR) {
            let g = glyph(ch).unwrap();
            let start = (ch as usize - 32) * 5;
            prop_assert_eq!(&g[..], &FONT_5X8[start..start + 5]);
        }

        #[test]
        fn prop_unsupported_has_no_glyph(ch in any::<u8>()) {
            prop_assert_eq!(glyph(ch).is_some(), (32..=95).contains(&ch));
        }
    }
}
