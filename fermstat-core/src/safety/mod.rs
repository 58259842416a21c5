//! Safety monitoring
//!
//! Detects probe faults and evaluates the setpoint alarm.

pub mod monitor;

pub use monitor::{setpoint_alarm, FaultSource, SafetyMonitor, SafetyStatus};
