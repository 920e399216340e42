//! Two-wire bus abstractions
//!
//! [`BusTransport`] is the byte-level master interface the display driver is
//! written against. A session is `open` (start condition + address byte),
//! any number of `write_byte` calls, then `close` (stop condition). Sessions
//! never nest.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors from a bus transaction
///
/// The default configuration never produces either; both are opt-in
/// hardening through [`SoftI2cConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// The clock line stayed low past the stretch limit
    Timeout,
    /// The peripheral did not pull the data line low on the ninth clock
    Nack,
}

/// Byte-level two-wire bus master
pub trait BusTransport {
    /// Issue a start condition and transmit the address byte
    ///
    /// Must not be called while a session is open.
    fn open(&mut self, address: u8) -> Result<(), BusError>;

    /// Transmit one byte, most significant bit first
    fn write_byte(&mut self, value: u8) -> Result<(), BusError>;

    /// Issue a stop condition, ending the session
    fn close(&mut self) -> Result<(), BusError>;

    /// Transmit several bytes inside the open session
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), BusError> {
        for &b in bytes {
            self.write_byte(b)?;
        }
        Ok(())
    }
}

impl<T: BusTransport + ?Sized> BusTransport for &mut T {
    fn open(&mut self, address: u8) -> Result<(), BusError> {
        (**self).open(address)
    }

    fn write_byte(&mut self, value: u8) -> Result<(), BusError> {
        (**self).write_byte(value)
    }

    fn close(&mut self) -> Result<(), BusError> {
        (**self).close()
    }
}

/// What to do with the acknowledgement bit after each byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AckPolicy {
    /// Clock the bit but never look at it
    #[default]
    Ignore,
    /// Sample the data line while the ninth clock is high; high means NACK
    Check,
}

/// Software bus configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SoftI2cConfig {
    /// Delay after every line transition in nanoseconds (0 = none)
    pub half_period_ns: u32,
    /// Polls of a released clock line before giving up (`None` = never read back)
    pub stretch_limit: Option<u32>,
    /// Acknowledgement handling
    pub ack: AckPolicy,
}

impl Default for SoftI2cConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl SoftI2cConfig {
    /// Instruction-paced timing, no read-back, ACK ignored
    pub const STANDARD: Self = Self {
        half_period_ns: 0,
        stretch_limit: None,
        ack: AckPolicy::Ignore,
    };

    /// Standard-mode timing (100 kHz) with clock stretching and ACK checks
    pub const HARDENED: Self = Self {
        half_period_ns: 5_000,
        stretch_limit: Some(1_000),
        ack: AckPolicy::Check,
    };
}
