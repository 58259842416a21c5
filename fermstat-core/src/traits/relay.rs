//! Relay output traits

/// Trait for a relay-driven output (compressor, heater, buzzer)
///
/// Implementations control the load via GPIO, SSR or a mechanical relay.
pub trait RelayOutput {
    /// Energise or release the relay
    fn set_on(&mut self, on: bool);

    /// Check if the relay is currently energised
    fn is_on(&self) -> bool;
}

/// Logical state of the heat/cool relay pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RelayState {
    /// Both relays released
    #[default]
    Idle,
    /// Heating relay energised
    Heating,
    /// Cooling relay energised
    Cooling,
}

/// The heating and cooling relays of one thermostat
///
/// Never energises both at once: the relay being released is always
/// switched before the one being energised.
pub struct Relays<H, C> {
    heat: H,
    cool: C,
}

impl<H: RelayOutput, C: RelayOutput> Relays<H, C> {
    /// Take ownership of both relays and release them
    pub fn new(heat: H, cool: C) -> Self {
        let mut relays = Self { heat, cool };
        relays.apply(RelayState::Idle);
        relays
    }

    /// Drive the relays to `state`
    pub fn apply(&mut self, state: RelayState) {
        match state {
            RelayState::Idle => {
                self.heat.set_on(false);
                self.cool.set_on(false);
            }
            RelayState::Heating => {
                self.cool.set_on(false);
                self.heat.set_on(true);
            }
            RelayState::Cooling => {
                self.heat.set_on(false);
                self.cool.set_on(true);
            }
        }
    }

    /// Current state as read back from the outputs
    pub fn state(&self) -> RelayState {
        match (self.heat.is_on(), self.cool.is_on()) {
            (true, false) => RelayState::Heating,
            (false, true) => RelayState::Cooling,
            _ => RelayState::Idle,
        }
    }

    /// Get access to the heating relay
    pub fn heat(&self) -> &H {
        &self.heat
    }

    /// Get access to the cooling relay
    pub fn cool(&self) -> &C {
        &self.cool
    }
}
