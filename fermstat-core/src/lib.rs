//! Board-agnostic core logic for the Fermstat thermostat firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - ADC filtering and lookup-table interpolation
//! - Dual-stage (heat/cool) control loop with anti-short-cycle delays
//! - Fermentation profile scheduler
//! - Safety monitoring (probe faults, setpoint alarm)
//! - Configuration slot layout and defaults
//! - Output collaborator traits (relays, display)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod controller;
pub mod fixed;
pub mod safety;
pub mod scheduler;
pub mod sensor;
pub mod traits;

#[cfg(test)]
mod testing;

pub use controller::{Controller, CycleReport};
