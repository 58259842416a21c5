//! Profile read model and run-mode helpers
//!
//! A profile is nine (setpoint, duration) steps followed by a final
//! setpoint, stored flat in the configuration store. The scheduler walks it
//! in place; this module gives the menu collaborator a typed view.

use fermstat_hal::ConfigStore;
use heapless::Vec;

use crate::config::{
    profile_duration, profile_setpoint, RunMode, Slot, NUM_PROFILES, STEPS_PER_PROFILE,
};

/// Errors from profile operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProfileError {
    /// Profile number is not 0-5
    NoSuchProfile(u8),
}

/// One step of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProfileStep {
    /// Setpoint held (or ramped from) during the step
    pub setpoint: i16,
    /// Step length in scheduling intervals
    pub duration: u16,
}

/// A profile as the scheduler will run it
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Profile {
    /// Profile number (0-5)
    pub number: u8,
    /// Steps up to the first zero duration
    pub steps: Vec<ProfileStep, { STEPS_PER_PROFILE as usize }>,
    /// Setpoint kept in thermostat mode once the profile ends
    pub final_setpoint: i16,
}

impl Profile {
    /// Read profile `number` from the store
    pub fn load<S: ConfigStore>(store: &mut S, number: u8) -> Result<Self, ProfileError> {
        if number >= NUM_PROFILES {
            return Err(ProfileError::NoSuchProfile(number));
        }

        let mut steps = Vec::new();
        for step in 0..STEPS_PER_PROFILE {
            let duration = store.read(profile_duration(number, step));
            if duration == 0 {
                break;
            }
            let setpoint = store.read_i16(profile_setpoint(number, step));
            // Capacity equals the loop bound
            let _ = steps.push(ProfileStep { setpoint, duration });
        }

        let final_setpoint = store.read_i16(profile_setpoint(number, steps.len() as u8));

        Ok(Self {
            number,
            steps,
            final_setpoint,
        })
    }

    /// Sum of all step durations
    pub fn total_duration(&self) -> u32 {
        self.steps.iter().map(|s| s.duration as u32).sum()
    }

    /// Number of timed steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if the profile ends immediately
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Start running profile `number` from its first step
pub fn start_profile<S: ConfigStore>(store: &mut S, number: u8) -> Result<(), ProfileError> {
    if number >= NUM_PROFILES {
        return Err(ProfileError::NoSuchProfile(number));
    }

    let setpoint = store.read_i16(profile_setpoint(number, 0));
    store.update_i16(Slot::Setpoint.address(), setpoint);
    store.update(Slot::CurrentStep.address(), 0);
    store.update(Slot::CurrentDuration.address(), 0);
    store.update(Slot::RunMode.address(), RunMode::Profile(number).to_raw());
    Ok(())
}

/// Leave profile mode, keeping the current setpoint
pub fn stop<S: ConfigStore>(store: &mut S) {
    store.update(Slot::RunMode.address(), RunMode::THERMOSTAT);
}
