//! Configuration type definitions
//!
//! The firmware variants differ only in these values; each has a preset on
//! [`ThermometerConfig`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Temperature unit shown on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Unit {
    Celsius,
    #[default]
    Fahrenheit,
}

impl Unit {
    /// Convert a Celsius tenths value into this unit (tenths)
    pub fn from_celsius_x10(self, celsius_x10: i16) -> i16 {
        match self {
            Unit::Celsius => celsius_x10,
            Unit::Fahrenheit => celsius_to_fahrenheit_x10(celsius_x10),
        }
    }

    /// Single-letter suffix
    pub const fn symbol(self) -> char {
        match self {
            Unit::Celsius => 'C',
            Unit::Fahrenheit => 'F',
        }
    }

    /// Label printed after the value
    pub const fn label(self) -> &'static str {
        match self {
            Unit::Celsius => " DEG C",
            Unit::Fahrenheit => " DEG F",
        }
    }
}

/// °C × 10 to °F × 10, saturating at the `i16` range
pub fn celsius_to_fahrenheit_x10(celsius_x10: i16) -> i16 {
    let f = celsius_x10 as i32 * 9 / 5 + 320;
    f.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}

/// Over-temperature limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Threshold {
    /// Limit in tenths of `unit`; the alert is on strictly above it
    pub limit_x10: i16,
    /// Unit the limit is expressed in, independent of the displayed unit
    pub unit: Unit,
}

impl Threshold {
    /// Whole-degree Fahrenheit limit
    pub const fn fahrenheit(degrees: i16) -> Self {
        Self {
            limit_x10: degrees * 10,
            unit: Unit::Fahrenheit,
        }
    }

    /// Whole-degree Celsius limit
    pub const fn celsius(degrees: i16) -> Self {
        Self {
            limit_x10: degrees * 10,
            unit: Unit::Celsius,
        }
    }

    /// Whether a Celsius reading is above the limit
    pub fn exceeded_by(&self, celsius_x10: i16) -> bool {
        self.unit.from_celsius_x10(celsius_x10) > self.limit_x10
    }
}

/// Analog front-end settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorConfig {
    /// Conversions averaged per reading
    pub samples: u8,
    /// Pause between conversions
    pub sample_interval_ms: u32,
    /// ADC reference voltage in millivolts
    pub vref_mv: u16,
    /// Full-scale divisor of the ADC (1024 or 1023 for 10-bit)
    pub adc_max: u16,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            samples: 25,
            sample_interval_ms: 5,
            vref_mv: 1100, // internal 1.1V reference
            adc_max: 1024,
        }
    }
}

/// Screen arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Layout {
    /// One value in the configured unit followed by a unit label
    #[default]
    Single,
    /// `TEMP:` label, then Fahrenheit and Celsius side by side
    Dual,
}

/// Thermometer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThermometerConfig {
    pub sensor: SensorConfig,
    /// Displayed unit (ignored by [`Layout::Dual`])
    pub unit: Unit,
    /// Over-temperature alert, if the board has one
    pub high_temp: Option<Threshold>,
    pub layout: Layout,
    /// Also show the sensor voltage
    pub show_millivolts: bool,
}

impl Default for ThermometerConfig {
    fn default() -> Self {
        Self::one_shot()
    }
}

impl ThermometerConfig {
    /// ATtiny85 board: one Fahrenheit reading then power-down sleep,
    /// LED above 75°F
    pub fn one_shot() -> Self {
        Self {
            sensor: SensorConfig::default(),
            unit: Unit::Fahrenheit,
            high_temp: Some(Threshold::fahrenheit(75)),
            layout: Layout::Single,
            show_millivolts: false,
        }
    }

    /// Bench test board: 3.3V reference, both units, no alert
    pub fn dual_readout() -> Self {
        Self {
            sensor: SensorConfig {
                samples: 25,
                sample_interval_ms: 10,
                vref_mv: 3300,
                adc_max: 1023,
            },
            unit: Unit::Fahrenheit,
            high_temp: None,
            layout: Layout::Dual,
            show_millivolts: false,
        }
    }

    /// ATmega328P board: switch-selected unit, sensor voltage, alert
    /// above 70°F
    pub fn switched() -> Self {
        Self {
            sensor: SensorConfig {
                sample_interval_ms: 0,
                ..SensorConfig::default()
            },
            unit: Unit::Fahrenheit,
            high_temp: Some(Threshold::fahrenheit(70)),
            layout: Layout::Single,
            show_millivolts: true,
        }
    }
}
