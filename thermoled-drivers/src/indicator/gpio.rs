//! Over-temperature LED on a GPIO
//!
//! Boards wire the LED either pin-to-ground (lit when the pin is high) or
//! supply-to-pin (lit when the pin is low). [`Polarity`] captures which.

use thermoled_core::traits::Indicator;
use thermoled_hal::OutputPin;

/// Pin level that lights the LED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    #[default]
    ActiveHigh,
    ActiveLow,
}

impl Polarity {
    /// Pin level for the requested LED state
    const fn level(self, lit: bool) -> bool {
        match self {
            Polarity::ActiveHigh => lit,
            Polarity::ActiveLow => !lit,
        }
    }
}

/// LED indicator on a push-pull pin
pub struct GpioIndicator<P> {
    pin: P,
    polarity: Polarity,
    lit: bool,
}

impl<P: OutputPin> GpioIndicator<P> {
    /// Take ownership of `pin` and switch the LED off
    pub fn new(pin: P, polarity: Polarity) -> Self {
        let mut led = Self {
            pin,
            polarity,
            lit: false,
        };
        led.set_on(false);
        led
    }

    /// LED between pin and ground
    pub fn active_high(pin: P) -> Self {
        Self::new(pin, Polarity::ActiveHigh)
    }

    /// LED between supply and pin
    pub fn active_low(pin: P) -> Self {
        Self::new(pin, Polarity::ActiveLow)
    }

    /// Configured polarity
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Give the pin back
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> Indicator for GpioIndicator<P> {
    fn set_on(&mut self, on: bool) {
        self.lit = on;
        self.pin.set_state(self.polarity.level(on));
    }

    fn is_on(&self) -> bool {
        self.lit
    }
}
