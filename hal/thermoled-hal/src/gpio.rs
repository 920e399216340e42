//! GPIO pin abstractions
//!
//! The two-wire bus is open-drain: a line is either pulled low by the master
//! or released and pulled high by the external resistor. [`OpenDrainLine`]
//! therefore has no "set high" operation at all.

use core::convert::Infallible;

use embedded_hal::digital::{InputPin as EhInputPin, OutputPin as EhOutputPin};

/// One line of an open-drain bus
pub trait OpenDrainLine {
    /// Actively pull the line low
    fn drive_low(&mut self);

    /// Stop driving the line; the pull-up takes it high unless another
    /// device holds it low
    fn release(&mut self);

    /// Sample the current line level
    ///
    /// Only used for clock-stretch waits and acknowledgement checks.
    fn is_high(&mut self) -> bool;
}

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// [`OpenDrainLine`] over an `embedded-hal` pin configured as open-drain
///
/// Setting an open-drain pin high releases it, so `release` maps to
/// `set_high`. GPIO on most HALs cannot fail, hence the `Infallible` bound.
pub struct EhLine<P> {
    pin: P,
}

impl<P> EhLine<P>
where
    P: EhOutputPin<Error = Infallible> + EhInputPin<Error = Infallible>,
{
    /// Wrap an open-drain pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Give the pin back
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> OpenDrainLine for EhLine<P>
where
    P: EhOutputPin<Error = Infallible> + EhInputPin<Error = Infallible>,
{
    fn drive_low(&mut self) {
        match self.pin.set_low() {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    fn release(&mut self) {
        match self.pin.set_high() {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    fn is_high(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(high) => high,
            Err(never) => match never {},
        }
    }
}

/// [`OutputPin`] over an `embedded-hal` push-pull pin
pub struct EhOutput<P> {
    pin: P,
    high: bool,
}

impl<P> EhOutput<P>
where
    P: EhOutputPin<Error = Infallible>,
{
    /// Wrap a push-pull pin; its level is assumed low until first set
    pub fn new(pin: P) -> Self {
        Self { pin, high: false }
    }
}

impl<P> OutputPin for EhOutput<P>
where
    P: EhOutputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        match self.pin.set_high() {
            Ok(()) => self.high = true,
            Err(never) => match never {},
        }
    }

    fn set_low(&mut self) {
        match self.pin.set_low() {
            Ok(()) => self.high = false,
            Err(never) => match never {},
        }
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
