//! Configuration slot layout
//!
//! Slot map of the 128-slot configuration store:
//!
//! ```text
//!   0..=113   profiles 0-5, 19 slots each: SP0 dh0 SP1 dh1 ... SP8 dh8 SP9
//! 114..=126   menu items (see [`Slot`])
//!       127   power-on flag
//! ```

/// Number of profiles
pub const NUM_PROFILES: u8 = 6;

/// Steps per profile
pub const STEPS_PER_PROFILE: u8 = 9;

/// Index of the last step
pub const LAST_STEP: u8 = STEPS_PER_PROFILE - 1;

/// Slots occupied by one profile (10 setpoints, 9 durations)
pub const PROFILE_SLOTS: u8 = 2 * STEPS_PER_PROFILE + 1;

/// First slot after the profile area
pub const MENU_BASE: u8 = NUM_PROFILES * PROFILE_SLOTS;

/// Power-on flag slot
pub const POWER_ON: u8 = 127;

/// Address of the setpoint of `step` in `profile`
///
/// `step` may be 9, which addresses the final setpoint applied when the
/// last step ends.
pub const fn profile_setpoint(profile: u8, step: u8) -> u8 {
    profile * PROFILE_SLOTS + (step << 1)
}

/// Address of the duration of `step` in `profile`
pub const fn profile_duration(profile: u8, step: u8) -> u8 {
    profile_setpoint(profile, step) + 1
}

/// Named configuration slots following the profile area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Slot {
    /// Setpoint (SP)
    Setpoint = 0,
    /// Hysteresis (hy)
    Hysteresis = 1,
    /// Second probe hysteresis (hy2)
    Hysteresis2 = 2,
    /// Primary probe correction (tc)
    TempCorrection = 3,
    /// Secondary probe correction (tc2)
    TempCorrection2 = 4,
    /// Setpoint alarm (SA)
    SetpointAlarm = 5,
    /// Current profile step (St)
    CurrentStep = 6,
    /// Elapsed duration of current step (dh)
    CurrentDuration = 7,
    /// Cooling delay in minutes (cd)
    CoolingDelay = 8,
    /// Heating delay in minutes (hd)
    HeatingDelay = 9,
    /// Ramping enable (rP)
    Ramping = 10,
    /// Second probe enable (Pb)
    SecondProbe = 11,
    /// Run mode (rn)
    RunMode = 12,
}

impl Slot {
    /// All named slots in menu order
    pub const ALL: [Slot; 13] = [
        Slot::Setpoint,
        Slot::Hysteresis,
        Slot::Hysteresis2,
        Slot::TempCorrection,
        Slot::TempCorrection2,
        Slot::SetpointAlarm,
        Slot::CurrentStep,
        Slot::CurrentDuration,
        Slot::CoolingDelay,
        Slot::HeatingDelay,
        Slot::Ramping,
        Slot::SecondProbe,
        Slot::RunMode,
    ];

    /// Store address of this slot
    pub const fn address(self) -> u8 {
        MENU_BASE + self as u8
    }

    /// Look up a named slot by store address
    pub fn from_address(address: u8) -> Option<Self> {
        address
            .checked_sub(MENU_BASE)
            .and_then(|i| Self::ALL.get(i as usize).copied())
    }
}

/// Where a store address points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlotKind {
    /// A profile setpoint (`step` 0..=9)
    ProfileSetpoint { profile: u8, step: u8 },
    /// A profile step duration (`step` 0..=8)
    ProfileDuration { profile: u8, step: u8 },
    /// A named menu slot
    Menu(Slot),
    /// Power-on flag
    PowerOn,
    /// Unused address
    Unused,
}

impl SlotKind {
    /// Classify a store address
    pub fn of(address: u8) -> Self {
        if address < MENU_BASE {
            let profile = address / PROFILE_SLOTS;
            let offset = address % PROFILE_SLOTS;
            let step = offset >> 1;
            if offset & 1 == 0 {
                SlotKind::ProfileSetpoint { profile, step }
            } else {
                SlotKind::ProfileDuration { profile, step }
            }
        } else if address == POWER_ON {
            SlotKind::PowerOn
        } else {
            Slot::from_address(address).map_or(SlotKind::Unused, SlotKind::Menu)
        }
    }
}
