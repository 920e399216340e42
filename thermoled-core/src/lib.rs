//! Board-agnostic core logic for the thermometer firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (text display, temperature sensor, indicator)
//! - Configuration types and presets for the firmware variants
//! - Over-temperature monitoring
//! - The sample / convert / render loop

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod safety;
pub mod thermometer;
pub mod traits;

pub use config::{Layout, SensorConfig, Threshold, ThermometerConfig, Unit};
pub use thermometer::{Reading, Thermometer, ThermometerError};
