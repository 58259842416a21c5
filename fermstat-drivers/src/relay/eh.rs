//! `embedded-hal` pin adapter
//!
//! Lets any `embedded_hal::digital::OutputPin` drive a [`GpioRelay`].
//!
//! [`GpioRelay`]: super::GpioRelay

use embedded_hal::digital::OutputPin as EhOutputPin;
use fermstat_hal::OutputPin;

/// Wraps an `embedded-hal` output pin
///
/// The commanded level is cached since reading back a stateful pin needs
/// `&mut self`. Failed writes keep the previous level and are counted.
pub struct EhPin<P> {
    pin: P,
    high: bool,
    errors: u16,
}

impl<P: EhOutputPin> EhPin<P> {
    /// Wrap `pin`, driving it low
    pub fn new(pin: P) -> Self {
        let mut wrapped = Self {
            pin,
            high: true,
            errors: 0,
        };
        wrapped.set_low();
        wrapped
    }

    /// Failed pin writes since creation
    pub fn errors(&self) -> u16 {
        self.errors
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: EhOutputPin> OutputPin for EhPin<P> {
    fn set_high(&mut self) {
        match self.pin.set_high() {
            Ok(()) => self.high = true,
            Err(_) => self.errors = self.errors.saturating_add(1),
        }
    }

    fn set_low(&mut self) {
        match self.pin.set_low() {
            Ok(()) => self.high = false,
            Err(_) => self.errors = self.errors.saturating_add(1),
        }
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
