//! Temperature sensor drivers

pub mod tmp36;

pub use tmp36::Tmp36Sensor;
