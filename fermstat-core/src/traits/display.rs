//! Display collaborator trait
//!
//! The core only pushes values; rendering and multiplexing of the
//! 7-segment digits belong to the display driver.

/// Indicator LEDs next to the digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Indicators {
    /// Heating indicator lit
    pub heating: bool,
    /// Cooling indicator lit
    pub cooling: bool,
    /// A profile is running
    pub profile: bool,
    /// Showing the secondary probe
    pub second_probe: bool,
}

/// Trait for the 3-digit display
pub trait Display {
    /// Show a temperature in tenths of a degree
    fn show_temperature(&mut self, value: i16);

    /// Show a plain integer
    fn show_integer(&mut self, value: i16);

    /// Show the sensor alarm ("AL")
    fn show_fault(&mut self);

    /// Show the soft power-off state ("OFF")
    fn show_standby(&mut self);

    /// Update the indicator LEDs
    fn show_indicators(&mut self, _indicators: Indicators) {}
}
