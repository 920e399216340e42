//! Safety monitoring
//!
//! Tracks the over-temperature alert and sensor health.

pub mod monitor;

pub use monitor::{AlertChange, SafetyMonitor, SafetyStatus};
