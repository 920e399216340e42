//! Over-temperature monitor
//!
//! Decides whether the alert should be shown and reports transitions so the
//! caller only touches the indicator and the alert text when they change.

use crate::config::Threshold;

/// Monitor verdict for the latest reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SafetyStatus {
    /// No reading yet
    Unknown,
    /// Temperature at or below the limit (or no limit configured)
    Ok,
    /// Temperature strictly above the limit
    TooHot,
    /// Last sensor read failed
    SensorFault,
}

/// Alert state transition caused by an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertChange {
    Unchanged,
    Raised,
    Cleared,
}

/// Over-temperature monitor
#[derive(Debug, Clone)]
pub struct SafetyMonitor {
    threshold: Option<Threshold>,
    /// Last temperature reading (×10 for 0.1°C resolution)
    last_temp_x10: Option<i16>,
    sensor_valid: bool,
    alert: bool,
}

impl SafetyMonitor {
    /// Create a monitor; `None` disables the alert entirely
    pub fn new(threshold: Option<Threshold>) -> Self {
        Self {
            threshold,
            last_temp_x10: None,
            sensor_valid: true,
            alert: false,
        }
    }

    /// Update temperature reading
    ///
    /// # Arguments
    /// - `temp_x10`: Temperature in 0.1°C units, or None if sensor fault
    ///
    /// A sensor fault leaves the alert as it was.
    pub fn update_temperature(&mut self, temp_x10: Option<i16>) -> AlertChange {
        self.sensor_valid = temp_x10.is_some();
        let Some(temp_x10) = temp_x10 else {
            return AlertChange::Unchanged;
        };
        self.last_temp_x10 = Some(temp_x10);

        let too_hot = self
            .threshold
            .map(|t| t.exceeded_by(temp_x10))
            .unwrap_or(false);

        match (self.alert, too_hot) {
            (false, true) => {
                self.alert = true;
                AlertChange::Raised
            }
            (true, false) => {
                self.alert = false;
                AlertChange::Cleared
            }
            _ => AlertChange::Unchanged,
        }
    }

    /// Check the current condition
    pub fn check(&self) -> SafetyStatus {
        if !self.sensor_valid {
            return SafetyStatus::SensorFault;
        }
        match self.last_temp_x10 {
            None => SafetyStatus::Unknown,
            Some(_) if self.alert => SafetyStatus::TooHot,
            Some(_) => SafetyStatus::Ok,
        }
    }

    /// Whether the alert is active
    pub fn is_alert(&self) -> bool {
        self.alert
    }

    /// Last valid temperature in 0.1°C units
    pub fn last_temperature_x10(&self) -> Option<i16> {
        self.last_temp_x10
    }

    /// Replace the limit; takes effect on the next update
    pub fn set_threshold(&mut self, threshold: Option<Threshold>) {
        self.threshold = threshold;
    }
}
