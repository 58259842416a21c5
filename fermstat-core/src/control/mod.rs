//! Thermostat control loop

pub mod strategy;
pub mod thermostat;

pub use strategy::ControlStrategy;
pub use thermostat::{
    ControlInputs, ControlOutcome, ControlState, Pending, SAFE_DELAY_S,
};
