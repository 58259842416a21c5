//! ADC channel abstraction
//!
//! The thermistor sits in a voltage divider with a reference resistor; the
//! core expects right-justified 10-bit conversions (0..=1023), which is what
//! the lookup tables are generated for.

/// Full-scale count of the conversions the core works with (10-bit)
pub const ADC_MAX: u16 = 1024;

/// Errors from an ADC conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Conversion did not complete
    Timeout,
    /// Channel not available on this board
    NoChannel,
}

/// A multiplexed ADC with one input per thermistor probe
pub trait AdcChannel {
    /// Run one blocking conversion on `probe` (0 = primary, 1 = secondary)
    ///
    /// Returns a right-justified 10-bit result.
    fn convert(&mut self, probe: u8) -> Result<u16, AdcError>;
}
