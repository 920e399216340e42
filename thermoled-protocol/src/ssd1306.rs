//! SSD1306 OLED controller command set
//!
//! Only the subset needed for text output is modelled. Every transaction is
//! `ADDRESS, control byte, payload...`; the control byte picks whether the
//! payload is interpreted as commands or as display RAM columns.

/// Bus address byte (7-bit address 0x3C shifted left, write direction)
pub const OLED_ADDRESS: u8 = 0x78;

/// Panel width in pixel columns
pub const WIDTH: usize = 128;

/// Highest column the controller addresses
pub const MAX_COLUMN: u8 = (WIDTH - 1) as u8;

/// SSD1306 commands
pub mod cmd {
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_PAGE_RANGE: u8 = 0x22;
    pub const SET_ADDRESSING_MODE: u8 = 0x20;
    pub const HORIZONTAL_ADDRESSING: u8 = 0x00;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const CHARGE_PUMP_ON: u8 = 0x14;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_START: u8 = 0xB0;
}

/// Interpretation of the bytes following the control byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Payload configures the controller
    Command,
    /// Payload is written to display RAM at the cursor
    Data,
}

impl Mode {
    /// Control byte sent right after the address
    pub const fn control_byte(self) -> u8 {
        match self {
            Mode::Command => 0x00,
            Mode::Data => 0x40,
        }
    }
}

/// Supported panel geometries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelSize {
    /// 0.91" panels, 4 pages
    #[default]
    Size128x32,
    /// 0.96" panels, 8 pages
    Size128x64,
}

/// Configuration for 128x32 panels
static INIT_128X32: [u8; 14] = [
    cmd::SET_MUX_RATIO, 0x1F, // height - 1
    cmd::SET_PAGE_RANGE, 0x00, 0x03,
    cmd::SET_ADDRESSING_MODE, cmd::HORIZONTAL_ADDRESSING,
    cmd::SET_COM_PINS, 0x02, // sequential
    cmd::SET_CHARGE_PUMP, cmd::CHARGE_PUMP_ON,
    cmd::DISPLAY_ON,
    cmd::SET_SEG_REMAP,
    cmd::SET_COM_SCAN_DEC,
];

/// Configuration for 128x64 panels
static INIT_128X64: [u8; 14] = [
    cmd::SET_MUX_RATIO, 0x3F,
    cmd::SET_PAGE_RANGE, 0x00, 0x07,
    cmd::SET_ADDRESSING_MODE, cmd::HORIZONTAL_ADDRESSING,
    cmd::SET_COM_PINS, 0x12, // alternative
    cmd::SET_CHARGE_PUMP, cmd::CHARGE_PUMP_ON,
    cmd::DISPLAY_ON,
    cmd::SET_SEG_REMAP,
    cmd::SET_COM_SCAN_DEC,
];

impl PanelSize {
    /// Width in pixel columns
    pub const fn width(self) -> usize {
        WIDTH
    }

    /// Number of 8-row pages
    pub const fn pages(self) -> usize {
        match self {
            PanelSize::Size128x32 => 4,
            PanelSize::Size128x64 => 8,
        }
    }

    /// Bytes in the controller's display RAM for this panel
    pub const fn buffer_len(self) -> usize {
        self.width() * self.pages()
    }

    /// Initialization command sequence
    ///
    /// The order is significant; the controller stays dark or shows noise
    /// if any byte is missing or moved.
    pub fn init_sequence(self) -> &'static [u8] {
        match self {
            PanelSize::Size128x32 => &INIT_128X32,
            PanelSize::Size128x64 => &INIT_128X64,
        }
    }
}

/// Commands that move the write pointer to `column`, `page`
///
/// Out-of-range values wrap through the field masks instead of failing.
pub const fn cursor_commands(column: u8, page: u8) -> [u8; 3] {
    [
        cmd::SET_LOW_COLUMN | (column & 0x0F),
        cmd::SET_HIGH_COLUMN | ((column >> 4) & 0x0F),
        cmd::SET_PAGE_START | (page & 0x07),
    ]
}

/// Commands that set the vertical display offset
pub const fn shift_commands(offset: u8) -> [u8; 2] {
    [cmd::SET_DISPLAY_OFFSET, offset]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_control_bytes() {
        assert_eq!(Mode::Command.control_byte(), 0x00);
        assert_eq!(Mode::Data.control_byte(), 0x40);
    }

    #[test]
    fn test_init_sequence_128x32() {
        assert_eq!(
            PanelSize::Size128x32.init_sequence(),
            &[0xA8, 0x1F, 0x22, 0x00, 0x03, 0x20, 0x00, 0xDA, 0x02, 0x8D, 0x14, 0xAF, 0xA1, 0xC8]
        );
    }

    #[test]
    fn test_init_sequence_128x64() {
        assert_eq!(
            PanelSize::Size128x64.init_sequence(),
            &[0xA8, 0x3F, 0x22, 0x00, 0x07, 0x20, 0x00, 0xDA, 0x12, 0x8D, 0x14, 0xAF, 0xA1, 0xC8]
        );
    }

    #[test]
    fn test_buffer_len() {
        assert_eq!(PanelSize::Size128x32.buffer_len(), 512);
        assert_eq!(PanelSize::Size128x64.buffer_len(), 1024);
        assert_eq!(PanelSize::default(), PanelSize::Size128x32);
    }

    #[test]
    fn test_cursor_origin() {
        assert_eq!(cursor_commands(0, 0), [0x00, 0x10, 0xB0]);
    }

    #[test]
    fn test_cursor_last_column() {
        assert_eq!(cursor_commands(MAX_COLUMN, 3), [0x0F, 0x17, 0xB3]);
    }

    #[test]
    fn test_cursor_over_range_wraps() {
        assert_eq!(cursor_commands(200, 9), [0x08, 0x1C, 0xB1]);
    }

    #[test]
    fn test_shift() {
        assert_eq!(shift_commands(0), [0xD3, 0x00]);
        assert_eq!(shift_commands(8), [0xD3, 0x08]);
    }

    proptest! {
        #[test]
        fn prop_cursor_fields(column in any::<u8>(), page in any::<u8>()) {
            let [low, high, page_cmd] = cursor_commands(column, page);
            prop_assert_eq!(low & 0xF0, 0x00);
            prop_assert_eq!(high & 0xF0, 0x10);
            prop_assert_eq!(page_cmd & 0xF8, 0xB0);
            prop_assert_eq!(((high & 0x0F) << 4) | low, column);
            prop_assert_eq!(page_cmd & 0x07, page % 8);
        }
    }
}
