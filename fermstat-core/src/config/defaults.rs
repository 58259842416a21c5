//! Factory configuration image
//!
//! The image is what a blank store is initialised with: six identical
//! fermentation profiles followed by the menu defaults.

use fermstat_hal::SLOT_COUNT;

use super::layout::{Slot, MENU_BASE, NUM_PROFILES, POWER_ON, PROFILE_SLOTS};
use super::types::TemperatureUnit;

/// Default profile, Celsius: SP0 dh0 ... SP8 dh8 SP9
const PROFILE_C: [i16; PROFILE_SLOTS as usize] = [
    160, 24, 170, 24, 180, 24, 190, 24, 200, 144, 250, 48, 40, 0, 0, 0, 0, 0, 0,
];

/// Default profile, Fahrenheit
const PROFILE_F: [i16; PROFILE_SLOTS as usize] = [
    600, 24, 620, 24, 640, 24, 660, 24, 680, 144, 770, 48, 400, 0, 0, 0, 0, 0, 0,
];

/// Default value of a named slot
pub const fn menu_default(slot: Slot, unit: TemperatureUnit) -> i16 {
    let fahrenheit = matches!(unit, TemperatureUnit::Fahrenheit);
    match slot {
        Slot::Setpoint => {
            if fahrenheit {
                680
            } else {
                200
            }
        }
        Slot::Hysteresis => {
            if fahrenheit {
                10
            } else {
                5
            }
        }
        Slot::Hysteresis2 => {
            if fahrenheit {
                100
            } else {
                50
            }
        }
        Slot::CoolingDelay => 5,
        Slot::HeatingDelay => 2,
        Slot::RunMode => NUM_PROFILES as i16,
        Slot::TempCorrection
        | Slot::TempCorrection2
        | Slot::SetpointAlarm
        | Slot::CurrentStep
        | Slot::CurrentDuration
        | Slot::Ramping
        | Slot::SecondProbe => 0,
    }
}

/// Build the full factory image for `unit`
pub fn default_image(unit: TemperatureUnit) -> [u16; SLOT_COUNT] {
    let profile = match unit {
        TemperatureUnit::Celsius => &PROFILE_C,
        TemperatureUnit::Fahrenheit => &PROFILE_F,
    };

    let mut image = [0u16; SLOT_COUNT];
    for p in 0..NUM_PROFILES as usize {
        let base = p * PROFILE_SLOTS as usize;
        for (slot, value) in image[base..base + PROFILE_SLOTS as usize]
            .iter_mut()
            .zip(profile.iter())
        {
            *slot = *value as u16;
        }
    }

    for slot in Slot::ALL {
        image[slot.address() as usize] = menu_default(slot, unit) as u16;
    }
    image[POWER_ON as usize] = 1;

    debug_assert!(MENU_BASE as usize + Slot::ALL.len() <= POWER_ON as usize);
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::layout::{profile_duration, profile_setpoint};

    #[test]
    fn test_default_profiles() {
        let image = default_image(TemperatureUnit::Celsius);
        for p in 0..NUM_PROFILES {
            assert_eq!(image[profile_setpoint(p, 0) as usize], 160);
            assert_eq!(image[profile_duration(p, 4) as usize], 144);
            assert_eq!(image[profile_setpoint(p, 6) as usize], 40);
            assert_eq!(image[profile_duration(p, 6) as usize], 0);
        }
    }

    #[test]
    fn test_default_menu() {
        let image = default_image(TemperatureUnit::Fahrenheit);
        assert_eq!(image[Slot::Setpoint.address() as usize], 680);
        assert_eq!(image[Slot::Hysteresis.address() as usize], 10);
        assert_eq!(image[Slot::CoolingDelay.address() as usize], 5);
        assert_eq!(image[Slot::RunMode.address() as usize], 6);
        assert_eq!(image[POWER_ON as usize], 1);
    }
}
