//! Thermoled Hardware Abstraction Layer
//!
//! This crate defines the hardware seams of the thermometer firmware. Chip
//! specific code implements these traits; everything above them is portable
//! and can be exercised on the host with mock implementations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Thermometer loop (thermoled-core)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  Drivers (thermoled-drivers)            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  thermoled-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!        embedded-hal pins / chip registers
//! ```
//!
//! # Traits
//!
//! - [`gpio::OpenDrainLine`] - One wire of a two-wire bus (drive low / release)
//! - [`gpio::OutputPin`] - Push-pull digital output (indicator LED)
//! - [`i2c::BusTransport`] - Byte-level two-wire master sessions
//! - [`adc::AdcReader`] - Raw analog conversions
//! - [`delay::NoDelay`] - Zero-length `DelayNs` for instruction-paced timing

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod delay;
pub mod gpio;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use adc::AdcReader;
pub use delay::NoDelay;
pub use gpio::{EhLine, EhOutput, OpenDrainLine, OutputPin};
pub use i2c::{AckPolicy, BusError, BusTransport, SoftI2cConfig};
