//! TMP36 analog temperature sensor
//!
//! The TMP36 outputs 10 mV/°C with a 500 mV offset, so 0°C reads 500 mV and
//! 25°C reads 750 mV. The driver averages several conversions to smooth out
//! ADC noise before converting.
//!
//! The sensor never drives its output to ground (100 mV at -40°C), so an
//! average of zero counts means the output is shorted.

use embedded_hal::delay::DelayNs;
use thermoled_core::config::SensorConfig;
use thermoled_core::traits::{SensorError, TemperatureSensor};
use thermoled_hal::{AdcReader, NoDelay};

/// Sensor output at 0°C
const OFFSET_MV: i32 = 500;

/// TMP36 on one ADC channel
pub struct Tmp36Sensor<ADC, D = NoDelay> {
    adc: ADC,
    delay: D,
    config: SensorConfig,
    last_mv: Option<u16>,
}

impl<ADC: AdcReader> Tmp36Sensor<ADC, NoDelay> {
    /// Create a sensor that samples back to back
    pub fn new(adc: ADC, config: SensorConfig) -> Self {
        Self::with_delay(adc, NoDelay, config)
    }
}

impl<ADC: AdcReader, D: DelayNs> Tmp36Sensor<ADC, D> {
    /// Create a sensor that pauses `sample_interval_ms` after each conversion
    pub fn with_delay(adc: ADC, delay: D, config: SensorConfig) -> Self {
        Self {
            adc,
            delay,
            config,
            last_mv: None,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Average of `samples` raw conversions
    ///
    /// A conversion above `adc_max` is rejected as out of range.
    pub fn read_average(&mut self) -> Result<u16, SensorError> {
        let samples = self.config.samples;
        if samples == 0 {
            return Err(SensorError::OutOfRange);
        }

        let mut total: u32 = 0;
        for _ in 0..samples {
            let raw = self.adc.read().map_err(|_| SensorError::ConversionError)?;
            if raw > self.config.adc_max {
                return Err(SensorError::OutOfRange);
            }
            total += raw as u32;
            if self.config.sample_interval_ms > 0 {
                self.delay.delay_ms(self.config.sample_interval_ms);
            }
        }

        Ok((total / samples as u32) as u16)
    }

    /// Convert raw counts to millivolts at the sensor pin
    pub fn counts_to_millivolts(&self, counts: u16) -> Result<u16, SensorError> {
        if self.config.adc_max == 0 {
            return Err(SensorError::OutOfRange);
        }
        let mv = counts as u32 * self.config.vref_mv as u32 / self.config.adc_max as u32;
        u16::try_from(mv).map_err(|_| SensorError::OutOfRange)
    }

    /// Convert sensor millivolts to 0.1°C units
    pub fn millivolts_to_celsius_x10(mv: u16) -> Result<i16, SensorError> {
        // 10 mV per degree, so one millivolt is one tenth
        i16::try_from(mv as i32 - OFFSET_MV).map_err(|_| SensorError::OutOfRange)
    }
}

impl<ADC: AdcReader, D: DelayNs> TemperatureSensor for Tmp36Sensor<ADC, D> {
    fn read_celsius_x10(&mut self) -> Result<i16, SensorError> {
        let counts = self.read_average()?;
        if counts == 0 {
            #[cfg(feature = "defmt")]
            defmt::warn!("TMP36: output at ground");
            return Err(SensorError::ShortCircuit);
        }
        let mv = self.counts_to_millivolts(counts)?;
        let celsius_x10 = Self::millivolts_to_celsius_x10(mv)?;
        self.last_mv = Some(mv);
        Ok(celsius_x10)
    }

    fn last_millivolts(&self) -> Option<u16> {
        self.last_mv
    }
}
