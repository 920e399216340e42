//! Thermoled display protocol
//!
//! Everything in this crate is pure data: no hardware is touched. It defines
//! three layers of the path from a character to the OLED panel:
//!
//! ```text
//! 'A' ──font──▶ [7C 12 11 12 7C] ──ssd1306──▶ 78 40 00 7C .. ──line──▶ SDA/SCL edges
//! ```
//!
//! - [`font`]: 5x8 glyph table for ASCII `' '..='_'`
//! - [`ssd1306`]: controller address, control bytes and command sequences
//! - [`line`]: the open-drain transitions that frame a two-wire session
//!
//! Keeping the sequences as data lets the drivers execute them verbatim and
//! lets tests check them without a bus.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod font;
pub mod line;
pub mod ssd1306;

pub use font::{glyph, Glyph, GLYPH_WIDTH};
pub use line::{byte_ops, Line, LineOp, START_CONDITION, STOP_CONDITION};
pub use ssd1306::{Mode, PanelSize, OLED_ADDRESS};
