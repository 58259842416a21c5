//! Relay output implementations

pub mod eh;
pub mod gpio;

pub use eh::EhPin;
pub use gpio::{GpioRelay, Polarity};
