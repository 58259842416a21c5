//! Safety monitor implementation
//!
//! Tracks probe faults and the setpoint alarm. A fault forces both relays
//! off for the cycle; the alarm only sounds the buzzer.

/// Which probe is out of range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultSource {
    /// Primary (control) probe
    Primary,
    /// Secondary probe, only checked when it takes part in control
    Secondary,
}

/// Safety condition status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SafetyStatus {
    /// All conditions normal
    Ok,
    /// Probe reading out of range (open or shorted)
    SensorFault(FaultSource),
}

/// Evaluate the setpoint alarm band
///
/// `band` is the configured alarm value: 0 disables it, a positive band
/// alarms once the temperature strays at least that far from the setpoint,
/// and a negative band alarms while the temperature is within `|band|` of
/// the setpoint.
pub fn setpoint_alarm(band: i16, temperature: i16, setpoint: i16) -> bool {
    let deviation = (temperature as i32 - setpoint as i32).abs();
    let band = band as i32;
    match band.signum() {
        0 => false,
        1 => deviation >= band,
        _ => deviation <= -band,
    }
}

/// Safety monitor for fault detection
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SafetyMonitor {
    /// Fault found in the current cycle
    fault: Option<FaultSource>,
    /// Setpoint alarm active
    alarm: bool,
    /// Cycles lost to sensor faults since power-on
    fault_cycles: u32,
}

impl SafetyMonitor {
    /// Create a new safety monitor
    pub const fn new() -> Self {
        Self {
            fault: None,
            alarm: false,
            fault_cycles: 0,
        }
    }

    /// Record this cycle's probe fault flags
    ///
    /// The secondary flag is ignored unless `second_probe` is enabled.
    pub fn update_faults(&mut self, primary: bool, secondary: bool, second_probe: bool) {
        self.fault = if primary {
            Some(FaultSource::Primary)
        } else if secondary && second_probe {
            Some(FaultSource::Secondary)
        } else {
            None
        };

        if self.fault.is_some() {
            self.fault_cycles = self.fault_cycles.saturating_add(1);
            self.alarm = false;
        }
    }

    /// Re-evaluate the setpoint alarm
    pub fn update_alarm(&mut self, band: i16, temperature: i16, setpoint: i16) {
        self.alarm = self.fault.is_none() && setpoint_alarm(band, temperature, setpoint);
    }

    /// Check all safety conditions
    pub fn check(&self) -> SafetyStatus {
        match self.fault {
            Some(source) => SafetyStatus::SensorFault(source),
            None => SafetyStatus::Ok,
        }
    }

    /// Setpoint alarm active
    pub fn alarm_active(&self) -> bool {
        self.alarm
    }

    /// Buzzer should sound (fault or setpoint alarm)
    pub fn buzzer(&self) -> bool {
        self.alarm || self.fault.is_some()
    }

    /// Cycles lost to sensor faults since power-on
    pub fn fault_cycles(&self) -> u32 {
        self.fault_cycles
    }
}
