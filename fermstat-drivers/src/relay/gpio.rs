//! Relay, SSR or buzzer on a single output pin

use fermstat_core::traits::RelayOutput;
use fermstat_hal::OutputPin;

/// Pin level that energises the load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Energised when high (transistor-driven coil)
    #[default]
    ActiveHigh,
    /// Energised when low (most opto-isolated relay boards)
    ActiveLow,
}

impl Polarity {
    const fn level(self, on: bool) -> bool {
        match self {
            Polarity::ActiveHigh => on,
            Polarity::ActiveLow => !on,
        }
    }
}

/// Relay output on a hal pin
///
/// The logical state is read back from the pin, so a board that shares
/// the pin with another driver still reports what is really applied.
pub struct GpioRelay<P> {
    pin: P,
    polarity: Polarity,
}

impl<P: OutputPin> GpioRelay<P> {
    /// Take over `pin`, driving it to the released level
    pub fn new(mut pin: P, polarity: Polarity) -> Self {
        pin.set_state(polarity.level(false));
        Self { pin, polarity }
    }

    /// Configured polarity
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Release the load and hand the pin back
    pub fn release(mut self) -> P {
        self.set_on(false);
        self.pin
    }
}

impl<P: OutputPin> RelayOutput for GpioRelay<P> {
    fn set_on(&mut self, on: bool) {
        self.pin.set_state(self.polarity.level(on));
    }

    fn is_on(&self) -> bool {
        self.pin.is_set_high() == self.polarity.level(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fermstat_core::traits::{RelayState, Relays};

    #[derive(Default)]
    struct LatchPin {
        high: bool,
        writes: u8,
    }

    impl OutputPin for LatchPin {
        fn set_high(&mut self) {
            self.high = true;
            self.writes += 1;
        }

        fn set_low(&mut self) {
            self.high = false;
            self.writes += 1;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_starts_released() {
        let coil = GpioRelay::new(LatchPin { high: true, writes: 0 }, Polarity::ActiveHigh);
        assert!(!coil.is_on());
        assert!(!coil.pin.high);

        let board = GpioRelay::new(LatchPin::default(), Polarity::ActiveLow);
        assert!(!board.is_on());
        assert!(board.pin.high);
    }

    #[test]
    fn test_active_low_levels() {
        let mut relay = GpioRelay::new(LatchPin::default(), Polarity::ActiveLow);
        relay.set_on(true);
        assert!(relay.is_on());
        assert!(!relay.pin.high);

        let pin = relay.release();
        assert!(pin.high);
        assert_eq!(pin.writes, 3);
    }

    #[test]
    fn test_state_follows_pin() {
        let mut relay = GpioRelay::new(LatchPin::default(), Polarity::default());
        relay.pin.set_high();
        assert!(relay.is_on());
        assert_eq!(relay.polarity(), Polarity::ActiveHigh);
    }

    #[test]
    fn test_mixed_polarity_pair() {
        let heat = GpioRelay::new(LatchPin::default(), Polarity::ActiveHigh);
        let cool = GpioRelay::new(LatchPin::default(), Polarity::ActiveLow);
        let mut relays = Relays::new(heat, cool);

        relays.apply(RelayState::Cooling);
        assert_eq!(relays.state(), RelayState::Cooling);
        assert!(!relays.cool().pin.high);
        assert!(!relays.heat().pin.high);

        relays.apply(RelayState::Heating);
        assert_eq!(relays.state(), RelayState::Heating);
        assert!(relays.cool().pin.high);
        assert!(relays.heat().pin.high);
    }
}
