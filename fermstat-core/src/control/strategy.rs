//! Control strategies
//!
//! The plain thermostat looks at one probe. With a second probe (e.g. one
//! in the fermenter, one in the chamber air) the second reading can end a
//! cycle early and hold off starting one, so the chamber never swings far
//! past the setpoint while the wort catches up.

use crate::config::Settings;

/// How relay decisions are made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlStrategy {
    /// Decisions on the primary probe only
    SingleProbe,
    /// Secondary probe limits the swing by `hysteresis2`
    DualProbe {
        /// Allowed secondary deviation from setpoint (tenths of a degree)
        hysteresis2: i16,
    },
}

impl ControlStrategy {
    /// Select the strategy configured in `settings`
    pub fn from_settings(settings: &Settings) -> Self {
        if settings.second_probe {
            ControlStrategy::DualProbe {
                hysteresis2: settings.hysteresis2,
            }
        } else {
            ControlStrategy::SingleProbe
        }
    }

    /// Cooling must stop
    pub fn stop_cooling(&self, temperature: i16, temperature2: i16, setpoint: i16) -> bool {
        if temperature <= setpoint {
            return true;
        }
        match *self {
            ControlStrategy::SingleProbe => false,
            ControlStrategy::DualProbe { hysteresis2 } => {
                temperature2 < setpoint.saturating_sub(hysteresis2)
            }
        }
    }

    /// Heating must stop
    pub fn stop_heating(&self, temperature: i16, temperature2: i16, setpoint: i16) -> bool {
        if temperature >= setpoint {
            return true;
        }
        match *self {
            ControlStrategy::SingleProbe => false,
            ControlStrategy::DualProbe { hysteresis2 } => {
                temperature2 > setpoint.saturating_add(hysteresis2)
            }
        }
    }

    /// Secondary probe permits starting to cool
    ///
    /// The start band is a quarter of `hysteresis2`.
    pub fn may_cool(&self, temperature2: i16, setpoint: i16) -> bool {
        match *self {
            ControlStrategy::SingleProbe => true,
            ControlStrategy::DualProbe { hysteresis2 } => {
                temperature2 >= setpoint.saturating_sub(hysteresis2 >> 2)
            }
        }
    }

    /// Secondary probe permits starting to heat
    pub fn may_heat(&self, temperature2: i16, setpoint: i16) -> bool {
        match *self {
            ControlStrategy::SingleProbe => true,
            ControlStrategy::DualProbe { hysteresis2 } => {
                temperature2 <= setpoint.saturating_add(hysteresis2 >> 2)
            }
        }
    }
}
