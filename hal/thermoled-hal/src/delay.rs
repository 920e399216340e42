//! Delay provider for instruction-paced timing

use embedded_hal::delay::DelayNs;

/// Delay that returns immediately
///
/// Used where timing comes from the instruction sequence alone.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}
