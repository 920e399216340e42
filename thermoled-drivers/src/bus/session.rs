//! Scoped bus session
//!
//! A [`Session`] borrows the bus mutably for its whole lifetime, so a second
//! session cannot be opened until the first one is gone. Dropping a session
//! that was not closed explicitly still sends the stop condition.

use thermoled_hal::{BusError, BusTransport};

/// One open transaction on a [`BusTransport`]
pub struct Session<'a, B: BusTransport> {
    bus: &'a mut B,
    open: bool,
}

impl<'a, B: BusTransport> Session<'a, B> {
    /// Send the start condition and address byte
    ///
    /// If the address byte fails, the stop condition is still sent.
    pub fn open(bus: &'a mut B, address: u8) -> Result<Self, BusError> {
        let session = Self { bus, open: true };
        session.bus.open(address)?;
        Ok(session)
    }

    /// Transmit one byte
    pub fn write(&mut self, value: u8) -> Result<(), BusError> {
        self.bus.write_byte(value)
    }

    /// Transmit several bytes
    pub fn write_all(&mut self, bytes: &[u8]) -> Result<(), BusError> {
        self.bus.write_all(bytes)
    }

    /// Send the stop condition
    pub fn close(mut self) -> Result<(), BusError> {
        self.open = false;
        self.bus.close()
    }
}

impl<B: BusTransport> Drop for Session<'_, B> {
    fn drop(&mut self) {
        if self.open {
            // Only reached on an error path; the first error wins
            let _ = self.bus.close();
        }
    }
}
