//! Over-temperature indicator output

/// On/off indicator such as an LED
pub trait Indicator {
    /// Turn the indicator on or off
    fn set_on(&mut self, on: bool);

    /// Check if the indicator is currently on
    fn is_on(&self) -> bool;
}

/// Indicator for boards without one
#[derive(Debug, Default, Clone, Copy)]
pub struct NoIndicator;

impl Indicator for NoIndicator {
    fn set_on(&mut self, _on: bool) {}

    fn is_on(&self) -> bool {
        false
    }
}
