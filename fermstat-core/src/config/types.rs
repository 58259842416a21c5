//! Configuration type definitions
//!
//! Values are stored in the configuration store as raw 16-bit slots. The
//! types here give them meaning and clamp them into their valid domain;
//! the menu collaborator is expected to keep them in range, but the core
//! never trusts stored state blindly.

use fermstat_hal::ConfigStore;

use super::layout::{Slot, LAST_STEP, NUM_PROFILES};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Longest configurable step duration (hours or minutes)
pub const MAX_DURATION: u16 = 999;

/// Longest configurable relay delay (minutes)
pub const MAX_DELAY_MIN: u16 = 60;

/// Display and storage unit of all temperatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Value limits for this unit
    pub const fn limits(self) -> Limits {
        match self {
            TemperatureUnit::Celsius => Limits {
                temp_min: -400,
                temp_max: 1400,
                correction_min: -50,
                correction_max: 50,
                hysteresis_max: 50,
                hysteresis2_max: 250,
                alarm_min: -400,
                alarm_max: 400,
            },
            TemperatureUnit::Fahrenheit => Limits {
                temp_min: -400,
                temp_max: 2500,
                correction_min: -100,
                correction_max: 100,
                hysteresis_max: 100,
                hysteresis2_max: 500,
                alarm_min: -800,
                alarm_max: 800,
            },
        }
    }
}

/// Valid ranges for temperature-typed settings (tenths of a degree)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Limits {
    pub temp_min: i16,
    pub temp_max: i16,
    pub correction_min: i16,
    pub correction_max: i16,
    pub hysteresis_max: i16,
    pub hysteresis2_max: i16,
    pub alarm_min: i16,
    pub alarm_max: i16,
}

impl Limits {
    /// Clamp a raw value for the given named slot
    pub fn clamp(&self, slot: Slot, raw: u16) -> u16 {
        let signed = raw as i16;
        match slot {
            Slot::Setpoint => signed.clamp(self.temp_min, self.temp_max) as u16,
            Slot::Hysteresis => signed.clamp(0, self.hysteresis_max) as u16,
            Slot::Hysteresis2 => signed.clamp(0, self.hysteresis2_max) as u16,
            Slot::TempCorrection | Slot::TempCorrection2 => {
                signed.clamp(self.correction_min, self.correction_max) as u16
            }
            Slot::SetpointAlarm => signed.clamp(self.alarm_min, self.alarm_max) as u16,
            Slot::CurrentStep => raw.min(LAST_STEP as u16),
            Slot::CurrentDuration => raw.min(MAX_DURATION),
            Slot::CoolingDelay | Slot::HeatingDelay => raw.min(MAX_DELAY_MIN),
            Slot::Ramping | Slot::SecondProbe => raw.min(1),
            Slot::RunMode => raw.min(NUM_PROFILES as u16),
        }
    }
}

/// What the thermostat is following
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RunMode {
    /// Running profile 0-5
    Profile(u8),
    /// Static setpoint
    Thermostat,
}

impl RunMode {
    /// Stored value of thermostat mode
    pub const THERMOSTAT: u16 = NUM_PROFILES as u16;

    /// Decode a stored run mode; anything out of range is thermostat mode
    pub fn from_raw(raw: u16) -> Self {
        if raw < Self::THERMOSTAT {
            RunMode::Profile(raw as u8)
        } else {
            RunMode::Thermostat
        }
    }

    /// Encode for storage
    pub fn to_raw(self) -> u16 {
        match self {
            RunMode::Profile(n) => (n as u16).min(Self::THERMOSTAT),
            RunMode::Thermostat => Self::THERMOSTAT,
        }
    }

    /// Profile number, if running one
    pub fn profile(self) -> Option<u8> {
        match self {
            RunMode::Profile(n) => Some(n),
            RunMode::Thermostat => None,
        }
    }
}

/// Granularity of profile step durations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ProfileInterval {
    /// Durations in hours
    #[default]
    Hour,
    /// Durations in minutes
    Minute,
}

impl ProfileInterval {
    /// Sample ticks (~60 ms each) per scheduling interval
    pub const fn sample_ticks(self) -> u16 {
        match self {
            ProfileInterval::Hour => 60_000,
            ProfileInterval::Minute => 1_000,
        }
    }
}

/// Snapshot of the control-related settings
///
/// Loaded once per control cycle; every field is already clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settings {
    /// Setpoint (tenths of a degree)
    pub setpoint: i16,
    /// Hysteresis (tenths of a degree)
    pub hysteresis: i16,
    /// Second probe hysteresis (tenths of a degree)
    pub hysteresis2: i16,
    /// Primary probe correction (tenths of a degree)
    pub correction: i16,
    /// Secondary probe correction (tenths of a degree)
    pub correction2: i16,
    /// Setpoint alarm band (0 = off)
    pub setpoint_alarm: i16,
    /// Minimum cooling off-time (minutes)
    pub cooling_delay_min: u16,
    /// Minimum heating off-time (minutes)
    pub heating_delay_min: u16,
    /// Ramp setpoint between profile steps
    pub ramping: bool,
    /// Second probe participates in control
    pub second_probe: bool,
    /// Current run mode
    pub run_mode: RunMode,
}

impl Settings {
    /// Load and clamp all settings from the store
    pub fn load<S: ConfigStore>(store: &mut S, unit: TemperatureUnit) -> Self {
        let limits = unit.limits();
        let mut get = |slot: Slot| limits.clamp(slot, store.read(slot.address()));

        Self {
            setpoint: get(Slot::Setpoint) as i16,
            hysteresis: get(Slot::Hysteresis) as i16,
            hysteresis2: get(Slot::Hysteresis2) as i16,
            correction: get(Slot::TempCorrection) as i16,
            correction2: get(Slot::TempCorrection2) as i16,
            setpoint_alarm: get(Slot::SetpointAlarm) as i16,
            cooling_delay_min: get(Slot::CoolingDelay),
            heating_delay_min: get(Slot::HeatingDelay),
            ramping: get(Slot::Ramping) != 0,
            second_probe: get(Slot::SecondProbe) != 0,
            run_mode: RunMode::from_raw(get(Slot::RunMode)),
        }
    }

    /// Cooling minimum off-time in control cycles (seconds)
    pub fn cooling_delay_s(&self) -> u16 {
        self.cooling_delay_min * 60
    }

    /// Heating minimum off-time in control cycles (seconds)
    pub fn heating_delay_s(&self) -> u16 {
        self.heating_delay_min * 60
    }
}
