//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in thermoled-core and thermoled-hal:
//!
//! - Bit-banged two-wire bus master over open-drain lines
//! - SSD1306 text driver for 128x32 and 128x64 panels
//! - TMP36 analog temperature sensor with sample averaging
//! - GPIO indicator LED

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bus;
pub mod display;
pub mod indicator;
pub mod sensor;
