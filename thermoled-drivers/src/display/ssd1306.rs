//! SSD1306 OLED text driver
//!
//! Writes glyphs straight into display RAM at the controller's cursor; there
//! is no frame buffer. Every operation is one or more complete bus sessions:
//! address byte, control byte, payload, stop.

use thermoled_core::traits::{DisplayError, TextDisplay};
use thermoled_hal::BusTransport;
use thermoled_protocol::font::{glyph, is_supported};
use thermoled_protocol::ssd1306::{cursor_commands, shift_commands, Mode, PanelSize, OLED_ADDRESS};

use crate::bus::Session;

/// SSD1306 driver over any [`BusTransport`]
pub struct Ssd1306<B> {
    bus: B,
    panel: PanelSize,
}

impl<B: BusTransport> Ssd1306<B> {
    /// Create a new driver; the panel is not touched until `initialize`
    pub fn new(bus: B, panel: PanelSize) -> Self {
        Self { bus, panel }
    }

    /// Panel geometry
    pub fn panel(&self) -> PanelSize {
        self.panel
    }

    /// Take the bus back
    pub fn release(self) -> B {
        self.bus
    }

    /// Open a session and select command or data mode
    fn session(&mut self, mode: Mode) -> Result<Session<'_, B>, DisplayError> {
        let mut session = Session::open(&mut self.bus, OLED_ADDRESS)?;
        session.write(mode.control_byte())?;
        Ok(session)
    }

    /// Send a command list in one session
    fn commands(&mut self, commands: &[u8]) -> Result<(), DisplayError> {
        let mut session = self.session(Mode::Command)?;
        session.write_all(commands)?;
        session.close()?;
        Ok(())
    }

    /// Print raw characters in one data session
    ///
    /// Stops at the end of `text` or at the first NUL. Every character is
    /// checked before the session is opened, so an unsupported one leaves
    /// the bus untouched.
    pub fn print_bytes(&mut self, text: &[u8]) -> Result<(), DisplayError> {
        let len = text.iter().position(|&b| b == 0).unwrap_or(text.len());
        let text = &text[..len];

        if let Some(&bad) = text.iter().find(|&&b| !is_supported(b)) {
            #[cfg(feature = "defmt")]
            defmt::warn!("SSD1306: no glyph for {=u8:#x}", bad);
            return Err(DisplayError::OutOfRangeCharacter(bad));
        }

        let mut session = self.session(Mode::Data)?;
        for &ch in text {
            let columns = glyph(ch).ok_or(DisplayError::OutOfRangeCharacter(ch))?;
            // Spacing column, then the glyph
            session.write(0x00)?;
            session.write_all(columns)?;
        }
        session.close()?;
        Ok(())
    }
}

impl<B: BusTransport> TextDisplay for Ssd1306<B> {
    fn initialize(&mut self) -> Result<(), DisplayError> {
        #[cfg(feature = "defmt")]
        defmt::debug!("SSD1306: init {}", self.panel);
        self.commands(self.panel.init_sequence())
    }

    fn set_cursor(&mut self, column: u8, page: u8) -> Result<(), DisplayError> {
        self.commands(&cursor_commands(column, page))
    }

    fn print_character(&mut self, ch: u8) -> Result<(), DisplayError> {
        // NUL is only a terminator inside strings
        if ch == 0 {
            return Err(DisplayError::OutOfRangeCharacter(ch));
        }
        self.print_bytes(&[ch])
    }

    fn print_string(&mut self, text: &str) -> Result<(), DisplayError> {
        self.print_bytes(text.as_bytes())
    }

    fn shift(&mut self, offset: u8) -> Result<(), DisplayError> {
        self.commands(&shift_commands(offset))
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.set_cursor(0, 0)?;

        let len = self.panel.buffer_len();
        let mut session = self.session(Mode::Data)?;
        for _ in 0..len {
            session.write(0x00)?;
        }
        session.close()?;

        self.shift(0)
    }

    fn pages(&self) -> u8 {
        self.panel.pages() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use thermoled_hal::BusError;
    use thermoled_protocol::font::{glyph_offset, FONT_5X8, GLYPH_WIDTH};
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Event {
        Open(u8),
        Byte(u8),
        Close,
    }

    #[derive(Default)]
    struct RecordingBus {
        events: Vec<Event>,
        open: bool,
        fail_on_byte: Option<u8>,
    }

    impl BusTransport for RecordingBus {
        fn open(&mut self, address: u8) -> Result<(), BusError> {
            assert!(!self.open, "nested session");
            self.open = true;
            self.events.push(Event::Open(address));
            Ok(())
        }

        fn write_byte(&mut self, value: u8) -> Result<(), BusError> {
            assert!(self.open, "byte outside a session");
            self.events.push(Event::Byte(value));
            if self.fail_on_byte == Some(value) {
                return Err(BusError::Nack);
            }
            Ok(())
        }

        fn close(&mut self) -> Result<(), BusError> {
            assert!(self.open, "stop without start");
            self.open = false;
            self.events.push(Event::Close);
            Ok(())
        }
    }

    impl RecordingBus {
        /// Payload of every session, address and control byte included
        fn sessions(&self) -> Vec<Vec<u8>> {
            let mut out = Vec::new();
            let mut current = Vec::new();
            for event in &self.events {
                match event {
                    Event::Open(addr) => current = vec![*addr],
                    Event::Byte(b) => current.push(*b),
                    Event::Close => out.push(core::mem::take(&mut current)),
                }
            }
            assert!(!self.open);
            out
        }
    }

    fn display() -> Ssd1306<RecordingBus> {
        Ssd1306::new(RecordingBus::default(), PanelSize::Size128x32)
    }

    #[test]
    fn test_initialize_one_command_session() {
        let mut oled = display();
        oled.initialize().unwrap();

        let sessions = oled.bus.sessions();
        assert_eq!(sessions.len(), 1);
        assert_eq!(
            sessions[0],
            [
                0x78, 0x00, 0xA8, 0x1F, 0x22, 0x00, 0x03, 0x20, 0x00, 0xDA, 0x02, 0x8D, 0x14,
                0xAF, 0xA1, 0xC8
            ]
        );
    }

    #[test]
    fn test_initialize_tall_panel() {
        let mut oled = Ssd1306::new(RecordingBus::default(), PanelSize::Size128x64);
        oled.initialize().unwrap();

        let sessions = oled.bus.sessions();
        assert_eq!(&sessions[0][2..4], &[0xA8, 0x3F]);
        assert_eq!(oled.pages(), 8);
    }

    #[test]
    fn test_set_cursor() {
        let mut oled = display();
        oled.set_cursor(0, 0).unwrap();
        oled.set_cursor(200, 9).unwrap();

        let sessions = oled.bus.sessions();
        assert_eq!(sessions[0], [0x78, 0x00, 0x00, 0x10, 0xB0]);
        assert_eq!(sessions[1], [0x78, 0x00, 0x08, 0x1C, 0xB1]);
    }

    #[test]
    fn test_shift() {
        let mut oled = display();
        oled.shift(5).unwrap();
        assert_eq!(oled.bus.sessions(), [vec![0x78, 0x00, 0xD3, 0x05]]);
    }

    #[test]
    fn test_print_character() {
        let mut oled = display();
        oled.print_character(b'A').unwrap();
        assert_eq!(
            oled.bus.sessions(),
            [vec![0x78, 0x40, 0x00, 0x7C, 0x12, 0x11, 0x12, 0x7C]]
        );
    }

    #[test]
    fn test_print_string_stops_at_nul() {
        let mut oled = display();
        oled.print_string("AB\0CD").unwrap();

        let sessions = oled.bus.sessions();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].len(), 2 + 2 * (1 + GLYPH_WIDTH));
    }

    #[test]
    fn test_empty_string_is_empty_session() {
        let mut oled = display();
        oled.print_string("").unwrap();
        assert_eq!(oled.bus.sessions(), [vec![0x78, 0x40]]);
    }

    #[test]
    fn test_out_of_range_character_sends_nothing() {
        let mut oled = display();
        assert_eq!(
            oled.print_string("OK a"),
            Err(DisplayError::OutOfRangeCharacter(b'a'))
        );
        assert_eq!(
            oled.print_character(0x7F),
            Err(DisplayError::OutOfRangeCharacter(0x7F))
        );
        assert!(oled.bus.events.is_empty());
    }

    #[test]
    fn test_nul_character_rejected() {
        let mut oled = display();
        assert_eq!(
            oled.print_character(0x00),
            Err(DisplayError::OutOfRangeCharacter(0x00))
        );
        assert!(oled.bus.events.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut oled = display();
        oled.clear().unwrap();

        let sessions = oled.bus.sessions();
        assert_eq!(sessions.len(), 3);
        assert_eq!(sessions[0], [0x78, 0x00, 0x00, 0x10, 0xB0]);
        assert_eq!(&sessions[1][..2], &[0x78, 0x40]);
        assert_eq!(sessions[1].len(), 2 + 512);
        assert!(sessions[1][2..].iter().all(|&b| b == 0));
        assert_eq!(sessions[2], [0x78, 0x00, 0xD3, 0x00]);
    }

    #[test]
    fn test_clear_tall_panel() {
        let mut oled = Ssd1306::new(RecordingBus::default(), PanelSize::Size128x64);
        oled.clear().unwrap();
        assert_eq!(oled.bus.sessions()[1].len(), 2 + 1024);
    }

    #[test]
    fn test_init_cursor_print() {
        let mut oled = display();
        oled.initialize().unwrap();
        oled.set_cursor(0, 0).unwrap();
        oled.print_string("AB").unwrap();

        let sessions = oled.release().sessions();
        assert_eq!(sessions.len(), 3);
        assert_eq!(sessions[0][1], 0x00);
        assert_eq!(sessions[1], [0x78, 0x00, 0x00, 0x10, 0xB0]);
        assert_eq!(
            sessions[2],
            [
                0x78, 0x40, 0x00, 0x7C, 0x12, 0x11, 0x12, 0x7C, 0x00, 0x7F, 0x49, 0x49, 0x49,
                0x36
            ]
        );
    }

    #[test]
    fn test_bus_error_closes_session() {
        let mut oled = Ssd1306::new(
            RecordingBus {
                fail_on_byte: Some(0x1F),
                ..Default::default()
            },
            PanelSize::Size128x32,
        );

        assert_eq!(oled.initialize(), Err(DisplayError::Nack));
        // Stopped right after the failing byte
        let bus = oled.release();
        assert_eq!(&bus.events[bus.events.len() - 2..], &[Event::Byte(0x1F), Event::Close]);
        assert!(!bus.open);
    }

    proptest! {
        #[test]
        fn prop_character_is_spacer_plus_glyph(ch in 0x20u8..=0x5F) {
            let mut oled = display();
            oled.print_character(ch).unwrap();

            let sessions = oled.bus.sessions();
            prop_assert_eq!(sessions.len(), 1);
            let offset = glyph_offset(ch);
            prop_assert_eq!(&sessions[0][..3], &[0x78, 0x40, 0x00]);
            prop_assert_eq!(&sessions[0][3..], &FONT_5X8[offset..offset + GLYPH_WIDTH]);
        }

        #[test]
        fn prop_string_is_one_session(text in "[ -_]{0,40}") {
            let mut oled = display();
            oled.print_string(&text).unwrap();

            let sessions = oled.bus.sessions();
            prop_assert_eq!(sessions.len(), 1);
            prop_assert_eq!(sessions[0].len() - 2, (1 + GLYPH_WIDTH) * text.len());
        }

        #[test]
        fn prop_cursor_is_three_commands(column in any::<u8>(), page in any::<u8>()) {
            let mut oled = display();
            oled.set_cursor(column, page).unwrap();

            let sessions = oled.bus.sessions();
            prop_assert_eq!(sessions[0].len(), 2 + 3);
        }
    }
}
