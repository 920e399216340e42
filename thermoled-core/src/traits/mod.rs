//! Hardware abstraction traits
//!
//! These traits define the interface between the thermometer logic
//! and hardware-specific implementations.

pub mod display;
pub mod indicator;
pub mod sensor;

pub use display::{format_tenths, DisplayError, TextDisplay, TextDisplayExt};
pub use indicator::{Indicator, NoIndicator};
pub use sensor::{SensorError, TemperatureSensor};
