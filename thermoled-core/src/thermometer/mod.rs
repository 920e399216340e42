//! Thermometer application loop
//!
//! One [`Thermometer::update`] is one pass of the firmware loop: average the
//! sensor, convert, drive the over-temperature indicator and redraw the
//! values. Sleeping or delaying between passes is left to the caller, since
//! that is where the board variants differ.
//!
//! Screen positions (pixel column, page):
//!
//! ```text
//! page 0   (10)  "1234MV"                  show_millivolts only
//! page 1   (14)  " 72.5" (45) " DEG F"     Layout::Single
//!          (0)   "TEMP:" (40) "72.5F / 22.5C"   Layout::Dual
//! page 3   (10)  "TOO HOT!"                when a threshold is set
//! ```

use core::fmt::Write;

use heapless::String;

use crate::config::{Layout, ThermometerConfig, Unit};
use crate::safety::{AlertChange, SafetyMonitor};
use crate::traits::display::{format_tenths, CELL_WIDTH};
use crate::traits::{
    DisplayError, Indicator, SensorError, TemperatureSensor, TextDisplay, TextDisplayExt,
};

/// Page holding the temperature line
pub const VALUE_PAGE: u8 = 1;
/// First column of the right-aligned value
pub const VALUE_COLUMN: u8 = 14;
/// Characters reserved for the value
pub const VALUE_WIDTH: usize = 5;
/// Column of the unit label, one pixel after the value
pub const LABEL_COLUMN: u8 = VALUE_COLUMN + VALUE_WIDTH as u8 * CELL_WIDTH + 1;

/// Dual layout label and value columns
pub const DUAL_LABEL: &str = "TEMP:";
pub const DUAL_VALUE_COLUMN: u8 = 40;
/// Characters the dual readout is padded to
const DUAL_WIDTH: usize = 14;
const DUAL_CAPACITY: usize = 20;

/// Sensor voltage position
pub const MV_PAGE: u8 = 0;
pub const MV_COLUMN: u8 = 10;

/// Alert text position
pub const ALERT_PAGE: u8 = 3;
pub const ALERT_COLUMN: u8 = 10;
pub const ALERT_TEXT: &str = "TOO HOT!";
const ALERT_BLANK: &str = "        ";

/// Errors from one pass of the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ThermometerError {
    Sensor(SensorError),
    Display(DisplayError),
}

impl From<SensorError> for ThermometerError {
    fn from(e: SensorError) -> Self {
        ThermometerError::Sensor(e)
    }
}

impl From<DisplayError> for ThermometerError {
    fn from(e: DisplayError) -> Self {
        ThermometerError::Display(e)
    }
}

/// One averaged measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Temperature in 0.1°C units
    pub celsius_x10: i16,
    /// Sensor voltage, when the sensor reports it
    pub millivolts: Option<u16>,
    /// Above the configured threshold
    pub too_hot: bool,
}

impl Reading {
    /// Temperature in 0.1°F units
    pub fn fahrenheit_x10(&self) -> i16 {
        Unit::Fahrenheit.from_celsius_x10(self.celsius_x10)
    }

    /// Temperature in tenths of `unit`
    pub fn in_unit(&self, unit: Unit) -> i16 {
        unit.from_celsius_x10(self.celsius_x10)
    }
}

/// Sensor, display and indicator wired together
pub struct Thermometer<S, D, I> {
    sensor: S,
    display: D,
    indicator: I,
    config: ThermometerConfig,
    monitor: SafetyMonitor,
    last: Option<Reading>,
}

impl<S, D, I> Thermometer<S, D, I>
where
    S: TemperatureSensor,
    D: TextDisplay,
    I: Indicator,
{
    /// Create a new thermometer; the indicator is switched off
    pub fn new(sensor: S, display: D, mut indicator: I, config: ThermometerConfig) -> Self {
        indicator.set_on(false);
        Self {
            sensor,
            display,
            indicator,
            monitor: SafetyMonitor::new(config.high_temp),
            config,
            last: None,
        }
    }

    /// Initialize and blank the display
    pub fn start(&mut self) -> Result<(), ThermometerError> {
        self.display.initialize()?;
        self.display.clear()?;
        Ok(())
    }

    /// Change the displayed unit (unit switch on the switched board)
    pub fn set_unit(&mut self, unit: Unit) {
        self.config.unit = unit;
    }

    /// Sample the sensor and update the indicator without drawing
    pub fn measure(&mut self) -> Result<Reading, ThermometerError> {
        let celsius_x10 = match self.sensor.read_celsius_x10() {
            Ok(t) => t,
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Sensor read failed: {:?}", e);
                self.monitor.update_temperature(None);
                return Err(e.into());
            }
        };

        let change = self.monitor.update_temperature(Some(celsius_x10));
        self.indicator.set_on(self.monitor.is_alert());

        #[cfg(feature = "defmt")]
        {
            match change {
                AlertChange::Raised => defmt::warn!("Over temperature: {} (x0.1 C)", celsius_x10),
                AlertChange::Cleared => defmt::info!("Temperature back below limit"),
                AlertChange::Unchanged => {}
            }
        }
        #[cfg(not(feature = "defmt"))]
        let _: AlertChange = change;

        let reading = Reading {
            celsius_x10,
            millivolts: self.sensor.last_millivolts(),
            too_hot: self.monitor.is_alert(),
        };
        self.last = Some(reading);
        Ok(reading)
    }

    /// Draw a reading according to the configured layout
    pub fn render(&mut self, reading: &Reading) -> Result<(), DisplayError> {
        if self.config.show_millivolts {
            if let Some(mv) = reading.millivolts {
                let mut text: String<8> = String::new();
                let _ = write!(text, "{:>4}MV", mv);
                self.display.print_at(MV_COLUMN, MV_PAGE, &text)?;
            }
        }

        match self.config.layout {
            Layout::Single => {
                let unit = self.config.unit;
                self.display.set_cursor(VALUE_COLUMN, VALUE_PAGE)?;
                self.display.print_tenths(reading.in_unit(unit), VALUE_WIDTH)?;
                self.display.print_at(LABEL_COLUMN, VALUE_PAGE, unit.label())?;
            }
            Layout::Dual => {
                let mut text: String<DUAL_CAPACITY> = String::new();
                let _ = write!(
                    text,
                    "{}F / {}C",
                    format_tenths(reading.fahrenheit_x10(), 4).as_str(),
                    format_tenths(reading.celsius_x10, 4).as_str(),
                );
                while text.len() < DUAL_WIDTH {
                    let _ = text.push(' ');
                }
                self.display.print_at(0, VALUE_PAGE, DUAL_LABEL)?;
                self.display.print_at(DUAL_VALUE_COLUMN, VALUE_PAGE, &text)?;
            }
        }

        if self.config.high_temp.is_some() {
            let text = if reading.too_hot { ALERT_TEXT } else { ALERT_BLANK };
            self.display.print_at(ALERT_COLUMN, ALERT_PAGE, text)?;
        }

        Ok(())
    }

    /// One pass of the loop: measure, then draw
    pub fn update(&mut self) -> Result<Reading, ThermometerError> {
        let reading = self.measure()?;
        self.render(&reading)?;
        Ok(reading)
    }

    /// Most recent successful reading
    pub fn last_reading(&self) -> Option<Reading> {
        self.last
    }

    /// Active configuration
    pub fn config(&self) -> &ThermometerConfig {
        &self.config
    }

    /// Get access to the underlying sensor
    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    /// Get access to the underlying display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Get access to the underlying indicator
    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    /// Take the parts back
    pub fn release(self) -> (S, D, I) {
        (self.sensor, self.display, self.indicator)
    }
}
