//! Configuration types
//!
//! Board-agnostic configuration structures and presets for the firmware
//! variants.

pub mod types;

pub use types::*;
