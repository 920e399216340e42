//! Text display trait for the OLED panel

use core::fmt::Write;

use heapless::String;
use thermoled_hal::BusError;

/// Errors that can occur while writing to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Clock line held low past the stretch limit
    BusTimeout,
    /// Controller did not acknowledge a byte
    Nack,
    /// Character has no glyph in the font
    OutOfRangeCharacter(u8),
}

impl From<BusError> for DisplayError {
    fn from(e: BusError) -> Self {
        match e {
            BusError::Timeout => DisplayError::BusTimeout,
            BusError::Nack => DisplayError::Nack,
        }
    }
}

/// Character-cell display driven through explicit cursor moves
///
/// The display keeps no cursor of its own on the host side: callers set the
/// cursor before every positioned write.
pub trait TextDisplay {
    /// Send the controller configuration; call once after power-up
    fn initialize(&mut self) -> Result<(), DisplayError>;

    /// Move the write pointer
    ///
    /// - `column`: pixel column (0-127), wraps through the controller mask
    /// - `page`: 8-row band (0-3 or 0-7), wraps through the controller mask
    fn set_cursor(&mut self, column: u8, page: u8) -> Result<(), DisplayError>;

    /// Print one ASCII character at the cursor
    fn print_character(&mut self, ch: u8) -> Result<(), DisplayError>;

    /// Print text at the cursor in a single transfer
    ///
    /// Output stops at the end of `text` or at the first NUL.
    fn print_string(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Set the vertical display offset (0 resets it)
    fn shift(&mut self, offset: u8) -> Result<(), DisplayError>;

    /// Blank the whole panel and reset cursor and offset
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Number of pages on the panel
    fn pages(&self) -> u8;
}

/// Pixel columns taken by one character cell (spacing column + glyph)
pub const CELL_WIDTH: u8 = 6;

/// Character cells that fit across the panel
pub const CELLS_PER_LINE: usize = 21;

/// Longest string [`format_tenths`] produces
pub const TENTHS_LEN: usize = 8;

/// Format a value in tenths as `[-]whole.tenth`, right-aligned to `width`
///
/// `width` is capped at [`TENTHS_LEN`].
pub fn format_tenths(value_x10: i16, width: usize) -> String<TENTHS_LEN> {
    let abs = value_x10.unsigned_abs();
    let sign = if value_x10 < 0 { "-" } else { "" };

    let mut digits: String<TENTHS_LEN> = String::new();
    // i16::MIN renders as "-3276.8", which fits
    let _ = write!(digits, "{}{}.{}", sign, abs / 10, abs % 10);

    let mut out = String::new();
    let _ = write!(out, "{:>w$}", digits.as_str(), w = width.min(TENTHS_LEN));
    out
}

/// Helpers built from the primitive display operations
pub trait TextDisplayExt: TextDisplay {
    /// Move the cursor and print `text`
    fn print_at(&mut self, column: u8, page: u8, text: &str) -> Result<(), DisplayError> {
        self.set_cursor(column, page)?;
        self.print_string(text)
    }

    /// Print a tenths value such as `725` as `72.5`, one character at a time
    fn print_tenths(&mut self, value_x10: i16, width: usize) -> Result<(), DisplayError> {
        for ch in format_tenths(value_x10, width).bytes() {
            self.print_character(ch)?;
        }
        Ok(())
    }

    /// Print `value` as decimal, zero padded to `digits`
    fn print_number(&mut self, value: u32, digits: usize) -> Result<(), DisplayError> {
        let mut buf: String<10> = String::new();
        let _ = write!(buf, "{:0d$}", value, d = digits.min(10));
        self.print_string(&buf)
    }

    /// Overwrite a whole page with blanks
    fn clear_line(&mut self, page: u8) -> Result<(), DisplayError> {
        let mut blanks: String<CELLS_PER_LINE> = String::new();
        for _ in 0..CELLS_PER_LINE {
            let _ = blanks.push(' ');
        }
        self.print_at(0, page, &blanks)
    }
}

// Blanket implementation for all TextDisplay types
impl<T: TextDisplay + ?Sized> TextDisplayExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Call {
        Cursor(u8, u8),
        Char(u8),
        Text(std::string::String),
    }

    #[derive(Default)]
    struct MockDisplay {
        calls: std::vec::Vec<Call>,
    }

    impl TextDisplay for MockDisplay {
        fn initialize(&mut self) -> Result<(), DisplayError> {
            Ok(())
        }

        fn set_cursor(&mut self, column: u8, page: u8) -> Result<(), DisplayError> {
            self.calls.push(Call::Cursor(column, page));
            Ok(())
        }

        fn print_character(&mut self, ch: u8) -> Result<(), DisplayError> {
            self.calls.push(Call::Char(ch));
            Ok(())
        }

        fn print_string(&mut self, text: &str) -> Result<(), DisplayError> {
            self.calls.push(Call::Text(text.into()));
            Ok(())
        }

        fn shift(&mut self, _offset: u8) -> Result<(), DisplayError> {
            Ok(())
        }

        fn clear(&mut self) -> Result<(), DisplayError> {
            Ok(())
        }

        fn pages(&self) -> u8 {
            4
        }
    }

    #[test]
    fn test_format_tenths() {
        assert_eq!(format_tenths(725, 0).as_str(), "72.5");
        assert_eq!(format_tenths(3, 0).as_str(), "0.3");
        assert_eq!(format_tenths(-125, 0).as_str(), "-12.5");
        assert_eq!(format_tenths(-5, 0).as_str(), "-0.5");
        assert_eq!(format_tenths(1000, 0).as_str(), "100.0");
        assert_eq!(format_tenths(i16::MIN, 0).as_str(), "-3276.8");
    }

    #[test]
    fn test_format_tenths_padding() {
        assert_eq!(format_tenths(50, 5).as_str(), "  5.0");
        assert_eq!(format_tenths(1234, 5).as_str(), "123.4");
        assert_eq!(format_tenths(12345, 5).as_str(), "1234.5");
        assert_eq!(format_tenths(0, 20).len(), TENTHS_LEN);
    }

    #[test]
    fn test_print_tenths_per_character() {
        let mut display = MockDisplay::default();
        display.print_tenths(725, 0).unwrap();
        assert_eq!(
            display.calls,
            vec![
                Call::Char(b'7'),
                Call::Char(b'2'),
                Call::Char(b'.'),
                Call::Char(b'5')
            ]
        );
    }

    #[test]
    fn test_print_at_and_number() {
        let mut display = MockDisplay::default();
        display.print_at(45, 1, " DEG F").unwrap();
        display.print_number(42, 4).unwrap();
        assert_eq!(
            display.calls,
            vec![
                Call::Cursor(45, 1),
                Call::Text(" DEG F".into()),
                Call::Text("0042".into())
            ]
        );
    }

    #[test]
    fn test_clear_line() {
        let mut display = MockDisplay::default();
        display.clear_line(2).unwrap();
        assert_eq!(display.calls[0], Call::Cursor(0, 2));
        assert_eq!(display.calls[1], Call::Text(" ".repeat(CELLS_PER_LINE)));
    }

    #[test]
    fn test_bus_error_mapping() {
        assert_eq!(DisplayError::from(BusError::Timeout), DisplayError::BusTimeout);
        assert_eq!(DisplayError::from(BusError::Nack), DisplayError::Nack);
    }
}
