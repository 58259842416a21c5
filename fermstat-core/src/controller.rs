//! Runtime orchestration
//!
//! The board loop calls [`Controller::sample`] every ~60 ms. Probes are
//! sampled alternately, so each filter sees a new conversion every 120 ms.
//! Every 16th tick (~1 s) a control cycle is due and the loop calls
//! [`Controller::run_cycle`] with its collaborators.
//!
//! With the power-on flag cleared the unit is in soft standby: probes are
//! not converted, outputs and buzzer are off and the scheduler is frozen.
//!
//! ```text
//!   sample ─► filter ─► interpolate ─► safety ─┬─► scheduler (hourly)
//!                                              └─► control loop ─► relays
//! ```

use fermstat_hal::{AdcChannel, ConfigStore};

use crate::config::{ProfileInterval, RunMode, Settings, TemperatureUnit, POWER_ON};
use crate::control::{ControlInputs, ControlOutcome, ControlState, ControlStrategy, Pending};
use crate::safety::{FaultSource, SafetyMonitor, SafetyStatus};
use crate::scheduler::{self, ScheduleOutcome};
use crate::sensor::{LookupTable, Probe};
use crate::traits::{Display, Indicators, RelayOutput, RelayState, Relays};

/// Sample ticks per control cycle
pub const TICKS_PER_CYCLE: u16 = 16;

/// Summary of one control cycle, for logging and the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Primary probe temperature incl. correction
    pub temperature: i16,
    /// Secondary probe temperature incl. correction
    pub temperature2: i16,
    /// Relay state after the cycle
    pub relay: RelayState,
    /// Demand held back by an off-time delay
    pub pending: Option<Pending>,
    /// Probe fault that forced the outputs off
    pub fault: Option<FaultSource>,
    /// Setpoint alarm active
    pub alarm: bool,
    /// Scheduler result, if it ran this cycle
    pub schedule: Option<ScheduleOutcome>,
    /// Soft power-off, outputs held off
    pub standby: bool,
}

/// Thermostat runtime state
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Controller {
    unit: TemperatureUnit,
    interval: ProfileInterval,
    probe: Probe,
    probe2: Probe,
    control: ControlState,
    safety: SafetyMonitor,
    /// 60 ms ticks, reset by the scheduler
    ticks: u16,
    adc_errors: u16,
    menu_active: bool,
    show_second: bool,
    standby: bool,
}

impl Controller {
    /// Create a controller in its power-on state
    pub fn new(unit: TemperatureUnit, interval: ProfileInterval) -> Self {
        let table = *LookupTable::for_unit(unit);
        Self {
            unit,
            interval,
            probe: Probe::new(table),
            probe2: Probe::new(table),
            control: ControlState::new(),
            safety: SafetyMonitor::new(),
            ticks: 0,
            adc_errors: 0,
            menu_active: false,
            show_second: false,
            standby: false,
        }
    }

    /// Feed one 60 ms tick
    ///
    /// Odd ticks convert the primary probe, even ticks the secondary.
    /// A failed conversion is skipped and counted. Nothing is converted in
    /// standby. Returns `true` when a control cycle is due.
    pub fn sample<A: AdcChannel>(&mut self, adc: &mut A) -> bool {
        self.ticks = self.ticks.wrapping_add(1);
        if self.standby {
            return self.ticks % TICKS_PER_CYCLE == 0;
        }

        let (channel, probe) = if self.ticks & 1 == 1 {
            (0, &mut self.probe)
        } else {
            (1, &mut self.probe2)
        };

        match adc.convert(channel) {
            Ok(raw) => probe.sample(raw),
            Err(_e) => {
                self.adc_errors = self.adc_errors.saturating_add(1);
                #[cfg(feature = "defmt")]
                defmt::warn!("ADC probe {} failed: {}", channel, _e);
            }
        }

        self.ticks % TICKS_PER_CYCLE == 0
    }

    /// Run one control cycle
    pub fn run_cycle<S, H, C, B, D>(
        &mut self,
        store: &mut S,
        relays: &mut Relays<H, C>,
        buzzer: &mut B,
        display: &mut D,
    ) -> CycleReport
    where
        S: ConfigStore,
        H: RelayOutput,
        C: RelayOutput,
        B: RelayOutput,
        D: Display,
    {
        let mut settings = Settings::load(store, self.unit);
        if store.read(POWER_ON) == 0 {
            return self.standby_cycle(&settings, relays, buzzer, display);
        }
        if self.standby {
            self.standby = false;
            #[cfg(feature = "defmt")]
            defmt::info!("leaving standby");
        }

        let temperature = self.probe.temperature(settings.correction);
        let temperature2 = self.probe2.temperature(settings.correction2);
        let fault1 = self.probe.take_fault();
        let fault2 = self.probe2.take_fault();
        self.safety
            .update_faults(fault1, fault2, settings.second_probe);

        let mut schedule = None;
        let outcome = match self.safety.check() {
            SafetyStatus::SensorFault(_source) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("sensor fault on {}, outputs off", _source);
                display.show_fault();
                display.show_indicators(Indicators::default());
                self.control.fault()
            }
            SafetyStatus::Ok => {
                if settings.run_mode == RunMode::Thermostat {
                    self.ticks = 0;
                } else if self.ticks >= self.interval.sample_ticks() {
                    self.ticks = 0;
                    let result = scheduler::tick(store, self.unit);
                    #[cfg(feature = "defmt")]
                    defmt::info!("profile: {}", result);
                    schedule = Some(result);
                    settings = Settings::load(store, self.unit);
                }

                self.safety
                    .update_alarm(settings.setpoint_alarm, temperature, settings.setpoint);

                let strategy = ControlStrategy::from_settings(&settings);
                let inputs = ControlInputs::new(&settings, temperature, temperature2);
                let outcome = self.control.tick(strategy, &inputs);

                if !self.menu_active {
                    let shown = if self.show_second {
                        temperature2
                    } else {
                        temperature
                    };
                    display.show_temperature(shown);
                    display.show_indicators(self.indicators(&outcome, &settings));
                }
                outcome
            }
        };

        if outcome.changed {
            #[cfg(feature = "defmt")]
            defmt::info!("relay {} at {}", outcome.relay, temperature);
        }
        relays.apply(outcome.relay);
        buzzer.set_on(self.safety.buzzer());

        CycleReport {
            temperature,
            temperature2,
            relay: outcome.relay,
            pending: outcome.pending,
            fault: match self.safety.check() {
                SafetyStatus::SensorFault(source) => Some(source),
                SafetyStatus::Ok => None,
            },
            alarm: self.safety.alarm_active(),
            schedule,
            standby: false,
        }
    }

    fn standby_cycle<H, C, B, D>(
        &mut self,
        settings: &Settings,
        relays: &mut Relays<H, C>,
        buzzer: &mut B,
        display: &mut D,
    ) -> CycleReport
    where
        H: RelayOutput,
        C: RelayOutput,
        B: RelayOutput,
        D: Display,
    {
        if !self.standby {
            self.standby = true;
            #[cfg(feature = "defmt")]
            defmt::info!("entering standby");
        }
        // Scheduler time does not advance while off
        self.ticks = self.ticks.saturating_sub(TICKS_PER_CYCLE);

        self.probe.take_fault();
        self.probe2.take_fault();
        self.safety.update_faults(false, false, false);
        self.safety.update_alarm(0, 0, 0);
        let outcome = self.control.standby();

        if !self.menu_active {
            display.show_standby();
            display.show_indicators(Indicators::default());
        }
        relays.apply(outcome.relay);
        buzzer.set_on(false);

        CycleReport {
            temperature: self.probe.temperature(settings.correction),
            temperature2: self.probe2.temperature(settings.correction2),
            relay: outcome.relay,
            pending: None,
            fault: None,
            alarm: false,
            schedule: None,
            standby: true,
        }
    }

    fn indicators(&self, outcome: &ControlOutcome, settings: &Settings) -> Indicators {
        // A pending relay blinks with the parity of its remaining delay
        let blink = |state: RelayState| {
            outcome
                .pending
                .is_some_and(|p| p.state == state && p.remaining_s & 1 == 1)
        };

        Indicators {
            heating: outcome.relay == RelayState::Heating || blink(RelayState::Heating),
            cooling: outcome.relay == RelayState::Cooling || blink(RelayState::Cooling),
            profile: settings.run_mode != RunMode::Thermostat,
            second_probe: self.show_second,
        }
    }

    /// Suspend display updates while the menu owns the display
    pub fn set_menu_active(&mut self, active: bool) {
        self.menu_active = active;
    }

    /// Show the secondary probe instead of the primary
    pub fn set_show_second(&mut self, second: bool) {
        self.show_second = second;
    }

    /// Current control-loop state
    pub fn control_state(&self) -> &ControlState {
        &self.control
    }

    /// Current safety monitor state
    pub fn safety(&self) -> &SafetyMonitor {
        &self.safety
    }

    /// Raw filter accumulators of both probes
    pub fn adfilters(&self) -> (u16, u16) {
        (self.probe.adfilter(), self.probe2.adfilter())
    }

    /// Failed conversions since power-on
    pub fn adc_errors(&self) -> u16 {
        self.adc_errors
    }

    /// Soft power-off seen on the last cycle
    pub fn is_standby(&self) -> bool {
        self.standby
    }

    /// Ticks counted toward the next scheduling interval
    pub fn ticks(&self) -> u16 {
        self.ticks
    }
}
