//! Two-wire bus master and session guard

pub mod session;
pub mod soft_i2c;

pub use session::Session;
pub use soft_i2c::SoftI2c;
