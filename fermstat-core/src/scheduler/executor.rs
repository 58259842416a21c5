//! Profile step executor
//!
//! Advances the running profile by one scheduling interval. All progress
//! lives in the configuration store (current step, elapsed duration,
//! setpoint, run mode), so a profile survives power loss and resumes where
//! it was. Every write goes through [`ConfigStore::update`].

use fermstat_hal::ConfigStore;

use crate::config::{
    profile_duration, profile_setpoint, RunMode, Slot, TemperatureUnit, LAST_STEP,
};
use crate::fixed::{lerp64, ramp_weight};

/// What one scheduler tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScheduleOutcome {
    /// Thermostat mode, nothing to do
    Inactive,
    /// Still inside the current step
    Holding {
        step: u8,
        elapsed: u16,
    },
    /// Inside the current step, setpoint moved along the ramp
    Ramping {
        step: u8,
        elapsed: u16,
        setpoint: i16,
    },
    /// Moved on to the next step
    Advanced {
        step: u8,
        setpoint: i16,
    },
    /// Last step done, switched to thermostat mode
    Finished {
        setpoint: i16,
    },
}

/// Advance the running profile by one interval
///
/// `unit` selects the clamping limits for values read back from the store.
pub fn tick<S: ConfigStore>(store: &mut S, unit: TemperatureUnit) -> ScheduleOutcome {
    let limits = unit.limits();

    let profile = match RunMode::from_raw(store.read(Slot::RunMode.address())) {
        RunMode::Profile(n) => n,
        RunMode::Thermostat => return ScheduleOutcome::Inactive,
    };

    let step = limits.clamp(Slot::CurrentStep, store.read(Slot::CurrentStep.address())) as u8;
    let elapsed = store
        .read(Slot::CurrentDuration.address())
        .saturating_add(1);
    let duration = store.read(profile_duration(profile, step));

    if elapsed >= duration {
        let next = step + 1;
        let setpoint = store.read_i16(profile_setpoint(profile, next));
        store.update_i16(Slot::Setpoint.address(), setpoint);

        if step == LAST_STEP || store.read(profile_duration(profile, next)) == 0 {
            store.update(Slot::RunMode.address(), RunMode::THERMOSTAT);
            return ScheduleOutcome::Finished { setpoint };
        }

        store.update(Slot::CurrentStep.address(), next as u16);
        store.update(Slot::CurrentDuration.address(), 0);
        return ScheduleOutcome::Advanced {
            step: next,
            setpoint,
        };
    }

    let outcome = if store.read(Slot::Ramping.address()) != 0 {
        let from = store.read_i16(profile_setpoint(profile, step));
        let to = store.read_i16(profile_setpoint(profile, step + 1));
        let setpoint = lerp64(from, to, ramp_weight(elapsed, duration));
        store.update_i16(Slot::Setpoint.address(), setpoint);
        ScheduleOutcome::Ramping {
            step,
            elapsed,
            setpoint,
        }
    } else {
        ScheduleOutcome::Holding { step, elapsed }
    };

    store.update(Slot::CurrentDuration.address(), elapsed);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::start_profile;
    use crate::testing::MockStore;

    const C: TemperatureUnit = TemperatureUnit::Celsius;

    fn two_step_store() -> MockStore {
        let mut store = MockStore::new();
        store.set(profile_setpoint(0, 0), 200);
        store.set(profile_duration(0, 0), 1);
        store.set(profile_setpoint(0, 1), 250);
        store.set(profile_duration(0, 1), 0);
        start_profile(&mut store, 0).unwrap();
        store
    }

    #[test]
    fn test_single_step_profile_finishes_after_one_tick() {
        let mut store = two_step_store();
        assert_eq!(store.get(Slot::Setpoint.address()), 200);

        assert_eq!(tick(&mut store, C), ScheduleOutcome::Finished { setpoint: 250 });
        assert_eq!(store.get(Slot::RunMode.address()), 6);
        assert_eq!(store.get(Slot::Setpoint.address()), 250);

        assert_eq!(tick(&mut store, C), ScheduleOutcome::Inactive);
    }

    #[test]
    fn test_inactive_in_thermostat_mode() {
        let mut store = MockStore::new();
        let writes = store.writes;
        assert_eq!(tick(&mut store, C), ScheduleOutcome::Inactive);
        assert_eq!(store.writes, writes);
    }

    #[test]
    fn test_holds_then_advances() {
        let mut store = MockStore::new();
        start_profile(&mut store, 1).unwrap();

        for hour in 1..24 {
            assert_eq!(
                tick(&mut store, C),
                ScheduleOutcome::Holding {
                    step: 0,
                    elapsed: hour
                }
            );
            assert_eq!(store.get(Slot::Setpoint.address()), 160);
        }

        assert_eq!(
            tick(&mut store, C),
            ScheduleOutcome::Advanced {
                step: 1,
                setpoint: 170
            }
        );
        assert_eq!(store.get(Slot::CurrentStep.address()), 1);
        assert_eq!(store.get(Slot::CurrentDuration.address()), 0);
    }

    #[test]
    fn test_default_profile_runs_to_completion() {
        let mut store = MockStore::new();
        start_profile(&mut store, 5).unwrap();

        let mut ticks = 0u32;
        loop {
            ticks += 1;
            if let ScheduleOutcome::Finished { setpoint } = tick(&mut store, C) {
                assert_eq!(setpoint, 40);
                break;
            }
            assert!(ticks < 1000);
        }
        assert_eq!(ticks, 4 * 24 + 144 + 48);
        assert_eq!(store.get(Slot::RunMode.address()), 6);
    }

    #[test]
    fn test_ramping_moves_setpoint() {
        let mut store = MockStore::new();
        store.set(profile_setpoint(0, 0), 100);
        store.set(profile_duration(0, 0), 4);
        store.set(profile_setpoint(0, 1), 200);
        store.set(Slot::Ramping.address(), 1);
        start_profile(&mut store, 0).unwrap();

        let expected = [125, 150, 175];
        for (i, sp) in expected.iter().enumerate() {
            assert_eq!(
                tick(&mut store, C),
                ScheduleOutcome::Ramping {
                    step: 0,
                    elapsed: i as u16 + 1,
                    setpoint: *sp
                }
            );
            assert_eq!(store.get(Slot::Setpoint.address()), *sp);
        }

        assert_eq!(
            tick(&mut store, C),
            ScheduleOutcome::Advanced {
                step: 1,
                setpoint: 200
            }
        );
    }

    #[test]
    fn test_last_step_finishes() {
        let mut store = MockStore::new();
        for step in 0..=LAST_STEP {
            store.set(profile_duration(4, step), 1);
        }
        store.set(profile_setpoint(4, 9), 99);
        start_profile(&mut store, 4).unwrap();

        for step in 1..=LAST_STEP {
            assert!(matches!(
                tick(&mut store, C),
                ScheduleOutcome::Advanced { step: s, .. } if s == step
            ));
        }
        assert_eq!(tick(&mut store, C), ScheduleOutcome::Finished { setpoint: 99 });
    }

    #[test]
    fn test_corrupt_step_is_clamped() {
        let mut store = MockStore::new();
        start_profile(&mut store, 0).unwrap();
        store.set(profile_duration(0, LAST_STEP), 1);
        store.set(profile_setpoint(0, 9), 77);
        store.set(Slot::CurrentStep.address(), 200);

        assert_eq!(tick(&mut store, C), ScheduleOutcome::Finished { setpoint: 77 });
    }

    #[test]
    fn test_skips_unchanged_writes() {
        let mut store = MockStore::new();
        start_profile(&mut store, 0).unwrap();
        let before = store.writes;

        // Holding step only bumps the elapsed counter
        tick(&mut store, C);
        assert_eq!(store.writes, before + 1);
    }
}
