//! Digital outputs
//!
//! Relay coils, SSR inputs and the piezo buzzer are plain push-pull outputs.

/// Push-pull output pin
///
/// Board crates implement this on their pin type, or wrap an `embedded-hal`
/// pin with `fermstat_drivers::relay::EhPin`.
pub trait OutputPin {
    /// Drive logic 1
    fn set_high(&mut self);

    /// Drive logic 0
    fn set_low(&mut self);

    /// Drive `high`
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Level last driven
    fn is_set_high(&self) -> bool;

    /// Inverse of [`OutputPin::is_set_high`]
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}
