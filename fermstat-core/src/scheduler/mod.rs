//! Profile scheduler
//!
//! Steps through fermentation profiles once per scheduling interval,
//! holding or ramping the setpoint, and drops to thermostat mode when a
//! profile ends.

pub mod executor;
pub mod profile;

pub use executor::{tick, ScheduleOutcome};
pub use profile::{start_profile, stop, Profile, ProfileError, ProfileStep};
