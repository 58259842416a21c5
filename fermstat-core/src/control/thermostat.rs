//! Dual-stage thermostat loop
//!
//! Runs once per second. Heating and cooling are mutually exclusive, each
//! guarded by a minimum off-time so a compressor is never short-cycled.

use super::strategy::ControlStrategy;
use crate::config::Settings;
use crate::traits::RelayState;

/// Delay applied at power-on and after a sensor fault (cycles)
pub const SAFE_DELAY_S: u16 = 60;

/// Per-cycle inputs of the control loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlInputs {
    /// Primary probe (tenths of a degree)
    pub temperature: i16,
    /// Secondary probe (tenths of a degree), ignored by single-probe control
    pub temperature2: i16,
    /// Target (tenths of a degree)
    pub setpoint: i16,
    /// Dead band on either side of the setpoint
    pub hysteresis: i16,
    /// Minimum cooling off-time (cycles)
    pub cooling_delay_s: u16,
    /// Minimum heating off-time (cycles)
    pub heating_delay_s: u16,
}

impl ControlInputs {
    /// Build inputs from the settings snapshot and current readings
    pub fn new(settings: &Settings, temperature: i16, temperature2: i16) -> Self {
        Self {
            temperature,
            temperature2,
            setpoint: settings.setpoint,
            hysteresis: settings.hysteresis,
            cooling_delay_s: settings.cooling_delay_s(),
            heating_delay_s: settings.heating_delay_s(),
        }
    }
}

/// A relay the loop wanted to energise but could not yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pending {
    /// Requested state (heating or cooling)
    pub state: RelayState,
    /// Cycles left before it may switch on
    pub remaining_s: u16,
}

/// Result of one control cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlOutcome {
    /// Relay state to apply
    pub relay: RelayState,
    /// The relay state differs from the previous cycle
    pub changed: bool,
    /// Demand held back by an off-time delay
    pub pending: Option<Pending>,
}

/// Mutable state of the control loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlState {
    cooling_delay: u16,
    heating_delay: u16,
    relay: RelayState,
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlState {
    /// Power-on state: idle with both delays at [`SAFE_DELAY_S`]
    pub const fn new() -> Self {
        Self {
            cooling_delay: SAFE_DELAY_S,
            heating_delay: SAFE_DELAY_S,
            relay: RelayState::Idle,
        }
    }

    /// Idle state with both delays already expired
    pub const fn expired() -> Self {
        Self {
            cooling_delay: 0,
            heating_delay: 0,
            relay: RelayState::Idle,
        }
    }

    /// Current relay state
    pub fn relay(&self) -> RelayState {
        self.relay
    }

    /// Cycles until cooling may start
    pub fn cooling_delay(&self) -> u16 {
        self.cooling_delay
    }

    /// Cycles until heating may start
    pub fn heating_delay(&self) -> u16 {
        self.heating_delay
    }

    /// Run one control cycle
    pub fn tick(&mut self, strategy: ControlStrategy, inputs: &ControlInputs) -> ControlOutcome {
        let previous = self.relay;
        let t = inputs.temperature;
        let t2 = inputs.temperature2;
        let sp = inputs.setpoint;
        let mut pending = None;

        self.cooling_delay = self.cooling_delay.saturating_sub(1);
        self.heating_delay = self.heating_delay.saturating_sub(1);

        let stop = match self.relay {
            RelayState::Cooling => strategy.stop_cooling(t, t2, sp),
            RelayState::Heating => strategy.stop_heating(t, t2, sp),
            RelayState::Idle => false,
        };

        if stop {
            self.cooling_delay = inputs.cooling_delay_s;
            self.heating_delay = inputs.heating_delay_s;
            self.relay = RelayState::Idle;
        } else if self.relay == RelayState::Idle {
            let hy = inputs.hysteresis;
            if t > sp.saturating_add(hy) && strategy.may_cool(t2, sp) {
                if self.cooling_delay == 0 {
                    self.relay = RelayState::Cooling;
                } else {
                    pending = Some(Pending {
                        state: RelayState::Cooling,
                        remaining_s: self.cooling_delay,
                    });
                }
            } else if t < sp.saturating_sub(hy) && strategy.may_heat(t2, sp) {
                if self.heating_delay == 0 {
                    self.relay = RelayState::Heating;
                } else {
                    pending = Some(Pending {
                        state: RelayState::Heating,
                        remaining_s: self.heating_delay,
                    });
                }
            }
        }

        ControlOutcome {
            relay: self.relay,
            changed: self.relay != previous,
            pending,
        }
    }

    /// Fail safe on a sensor fault: release both relays and rearm delays
    pub fn fault(&mut self) -> ControlOutcome {
        self.release()
    }

    /// Soft power-off: outputs stay released and the delays stay armed,
    /// so control resumes with the power-on delay
    pub fn standby(&mut self) -> ControlOutcome {
        self.release()
    }

    fn release(&mut self) -> ControlOutcome {
        let previous = self.relay;
        self.relay = RelayState::Idle;
        self.cooling_delay = SAFE_DELAY_S;
        self.heating_delay = SAFE_DELAY_S;
        ControlOutcome {
            relay: RelayState::Idle,
            changed: previous != RelayState::Idle,
            pending: None,
        }
    }
}
