//! Temperature sensing
//!
//! raw ADC samples → [`filter`] → [`interpolate`] over a [`lut`] table.

pub mod filter;
pub mod interpolate;
pub mod lut;
pub mod probe;

pub use filter::{filter, in_range, AdcFilter, FILTER_POWER_ON};
pub use interpolate::interpolate;
pub use lut::{LookupTable, CELSIUS, FAHRENHEIT, LUT_SIZE};
pub use probe::Probe;
