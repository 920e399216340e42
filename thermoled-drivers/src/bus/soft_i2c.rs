//! Bit-banged two-wire bus master
//!
//! Executes the line sequences from [`thermoled_protocol::line`] on two
//! open-drain lines. With [`SoftI2cConfig::STANDARD`] the lines are never
//! read back and timing comes from instruction speed alone, which the
//! SSD1306 tolerates. [`SoftI2cConfig::HARDENED`] adds a half-period delay,
//! waits for clock stretching and checks every acknowledgement.

use embedded_hal::delay::DelayNs;
use thermoled_hal::{AckPolicy, BusError, BusTransport, NoDelay, OpenDrainLine, SoftI2cConfig};
use thermoled_protocol::line::{byte_ops, Line, LineOp, START_CONDITION, STOP_CONDITION};

/// Software two-wire master
pub struct SoftI2c<SCL, SDA, D = NoDelay> {
    scl: SCL,
    sda: SDA,
    delay: D,
    config: SoftI2cConfig,
}

impl<SCL: OpenDrainLine, SDA: OpenDrainLine> SoftI2c<SCL, SDA, NoDelay> {
    /// Create a bus with the standard configuration
    ///
    /// Both lines are released, leaving the bus idle.
    pub fn new(scl: SCL, sda: SDA) -> Self {
        Self::with_config(scl, sda, NoDelay, SoftI2cConfig::STANDARD)
    }
}

impl<SCL, SDA, D> SoftI2c<SCL, SDA, D>
where
    SCL: OpenDrainLine,
    SDA: OpenDrainLine,
    D: DelayNs,
{
    /// Create a bus with explicit timing and read-back settings
    pub fn with_config(mut scl: SCL, mut sda: SDA, delay: D, config: SoftI2cConfig) -> Self {
        scl.release();
        sda.release();
        Self {
            scl,
            sda,
            delay,
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &SoftI2cConfig {
        &self.config
    }

    /// Take the lines and delay back
    pub fn release(self) -> (SCL, SDA, D) {
        (self.scl, self.sda, self.delay)
    }

    /// Run a sequence of line operations
    ///
    /// A missing acknowledgement does not abort the sequence: the ninth
    /// clock is completed first so the bus is left with SCL low, then the
    /// NACK is reported.
    fn execute<I>(&mut self, ops: I) -> Result<(), BusError>
    where
        I: IntoIterator<Item = LineOp>,
    {
        let mut acked = true;
        for op in ops {
            match op {
                LineOp::Low(Line::Scl) => self.scl.drive_low(),
                LineOp::Low(Line::Sda) => self.sda.drive_low(),
                LineOp::Release(Line::Scl) => {
                    self.scl.release();
                    self.wait_for_clock()?;
                }
                LineOp::Release(Line::Sda) => self.sda.release(),
                LineOp::SampleAck => {
                    if self.config.ack == AckPolicy::Check && self.sda.is_high() {
                        acked = false;
                    }
                }
            }
            if self.config.half_period_ns > 0 {
                self.delay.delay_ns(self.config.half_period_ns);
            }
        }

        if acked {
            Ok(())
        } else {
            #[cfg(feature = "defmt")]
            defmt::warn!("Bus: no acknowledgement");
            Err(BusError::Nack)
        }
    }

    /// Wait for a released clock line to actually go high
    fn wait_for_clock(&mut self) -> Result<(), BusError> {
        let Some(limit) = self.config.stretch_limit else {
            return Ok(());
        };

        for _ in 0..limit {
            if self.scl.is_high() {
                return Ok(());
            }
            if self.config.half_period_ns > 0 {
                self.delay.delay_ns(self.config.half_period_ns);
            }
        }

        #[cfg(feature = "defmt")]
        defmt::warn!("Bus: clock held low after {} polls", limit);
        Err(BusError::Timeout)
    }
}

impl<SCL, SDA, D> BusTransport for SoftI2c<SCL, SDA, D>
where
    SCL: OpenDrainLine,
    SDA: OpenDrainLine,
    D: DelayNs,
{
    fn open(&mut self, address: u8) -> Result<(), BusError> {
        self.execute(START_CONDITION)?;
        self.write_byte(address)
    }

    fn write_byte(&mut self, value: u8) -> Result<(), BusError> {
        self.execute(byte_ops(value))
    }

    fn close(&mut self) -> Result<(), BusError> {
        self.execute(STOP_CONDITION)
    }
}
