//! Temperature sensor trait

/// Errors that can occur with temperature sensing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor output at ground, below anything the sensor can produce
    ShortCircuit,
    /// Reading or configuration out of expected range
    OutOfRange,
    /// ADC conversion error
    ConversionError,
}

/// Trait for temperature sensors
///
/// Implementations handle the specific sensor type (TMP36, thermistor, ...)
/// including any averaging over several conversions.
pub trait TemperatureSensor {
    /// Read the current temperature in degrees Celsius
    ///
    /// Returns a fixed-point value with 0.1°C resolution.
    /// For example, 22.5°C is returned as 225.
    ///
    /// Takes `&mut self` because ADC reads typically require mutable access.
    fn read_celsius_x10(&mut self) -> Result<i16, SensorError>;

    /// Sensor output voltage behind the most recent reading, if known
    fn last_millivolts(&self) -> Option<u16> {
        None
    }
}
