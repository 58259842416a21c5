//! Resolution adapter
//!
//! The lookup tables are generated for 10-bit conversions. Boards with a
//! wider converter (12-bit on most Cortex-M parts) wrap it in a
//! [`ScaledAdc`] so the filter keeps its 64× headroom.

use fermstat_hal::{AdcChannel, AdcError, ADC_MAX};

/// Native resolution the core expects
const TARGET_BITS: u8 = 10;

/// Wraps a converter of `bits` resolution and rescales it to 10 bits
pub struct ScaledAdc<A> {
    inner: A,
    shift: u8,
}

impl<A: AdcChannel> ScaledAdc<A> {
    /// Wrap `inner`, which returns right-justified `bits`-bit results
    ///
    /// Resolutions at or below 10 bits pass through unchanged.
    pub fn new(inner: A, bits: u8) -> Self {
        Self {
            inner,
            shift: bits.saturating_sub(TARGET_BITS).min(15),
        }
    }

    /// Release the wrapped converter
    pub fn into_inner(self) -> A {
        self.inner
    }
}

impl<A: AdcChannel> AdcChannel for ScaledAdc<A> {
    fn convert(&mut self, probe: u8) -> Result<u16, AdcError> {
        let raw = self.inner.convert(probe)?;
        Ok((raw >> self.shift).min(ADC_MAX - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(u16);

    impl AdcChannel for Fixed {
        fn convert(&mut self, probe: u8) -> Result<u16, AdcError> {
            if probe > 1 {
                return Err(AdcError::NoChannel);
            }
            Ok(self.0)
        }
    }

    #[test]
    fn test_twelve_bit_scaled() {
        let mut adc = ScaledAdc::new(Fixed(4095), 12);
        assert_eq!(adc.convert(0), Ok(1023));

        let mut adc = ScaledAdc::new(Fixed(2048), 12);
        assert_eq!(adc.convert(1), Ok(512));
    }

    #[test]
    fn test_ten_bit_passthrough() {
        let mut adc = ScaledAdc::new(Fixed(700), 10);
        assert_eq!(adc.convert(0), Ok(700));
    }

    #[test]
    fn test_out_of_range_clamped() {
        let mut adc = ScaledAdc::new(Fixed(5000), 10);
        assert_eq!(adc.convert(0), Ok(1023));
    }

    #[test]
    fn test_errors_propagate() {
        let mut adc = ScaledAdc::new(Fixed(0), 12);
        assert_eq!(adc.convert(2), Err(AdcError::NoChannel));
    }
}
