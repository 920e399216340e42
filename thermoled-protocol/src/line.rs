//! Line-level sequencing for the two-wire bus.
//!
//! Both lines are open-drain, so the only operations are "pull low" and
//! "release". Timing comes entirely from the order of operations:
//!
//! - START: SDA falls while SCL is high, then SCL falls
//! - bit: SDA set up while SCL is low, peripheral samples on SCL rising
//! - STOP: SDA low, SCL released, then SDA released (rising SDA with SCL high)
//!
//! Each byte is followed by a ninth clock for the acknowledgement bit.

use heapless::Vec;

/// One of the two bus wires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Clock
    Scl,
    /// Data
    Sda,
}

/// A single step of the bus sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineOp {
    /// Pull the line low
    Low(Line),
    /// Release the line to the pull-up
    Release(Line),
    /// SCL is high on the ninth clock; the peripheral's ACK is on SDA now
    SampleAck,
}

use Line::{Scl, Sda};
use LineOp::{Low, Release, SampleAck};

/// Start condition (SDA falls first, then SCL)
pub const START_CONDITION: [LineOp; 2] = [Low(Sda), Low(Scl)];

/// Stop condition; SCL must rise before SDA
pub const STOP_CONDITION: [LineOp; 3] = [Low(Sda), Release(Scl), Release(Sda)];

/// Acknowledgement clock appended to every byte
pub const ACK_CLOCK: [LineOp; 4] = [Release(Sda), Release(Scl), SampleAck, Low(Scl)];

/// Upper bound of operations for one byte (all ones + ACK clock)
pub const MAX_BYTE_OPS: usize = 8 * 4 + ACK_CLOCK.len();

/// Operations for one byte
pub type ByteOps = Vec<LineOp, MAX_BYTE_OPS>;

/// Encode one byte, MSB first, followed by the acknowledgement clock
pub fn byte_ops(value: u8) -> ByteOps {
    let mut ops = ByteOps::new();
    let mut data = value;

    for _ in 0..8 {
        // Capacity is sized for the worst case, pushes cannot fail
        let _ = ops.push(Low(Sda));
        if data & 0x80 != 0 {
            let _ = ops.push(Release(Sda));
        }
        let _ = ops.push(Release(Scl));
        data <<= 1;
        let _ = ops.push(Low(Scl));
    }

    let _ = ops.extend_from_slice(&ACK_CLOCK);
    ops
}

/// Full line sequence of one session: start, address, payload, stop
pub fn session_ops(address: u8, payload: &[u8]) -> impl Iterator<Item = LineOp> + '_ {
    START_CONDITION
        .into_iter()
        .chain(byte_ops(address))
        .chain(payload.iter().flat_map(|&b| byte_ops(b)))
        .chain(STOP_CONDITION)
}
