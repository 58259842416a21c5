//! ADC leaky-integrator filter
//!
//! Each probe keeps a 16-bit accumulator updated per conversion with
//! `acc - (acc >> 6) + raw`. In steady state the accumulator holds 64× the
//! 10-bit reading, which is exactly the bit layout the interpolator expects:
//! the table index in bits 11-15 and the 6-bit fraction in bits 5-10.

/// Accumulator value at power-on (mid-scale)
pub const FILTER_POWER_ON: u16 = 0x7fff;

/// Highest accumulator high byte still considered a valid reading
pub const HIGH_BYTE_MAX: u8 = 247;

/// Lowest accumulator high byte still considered a valid reading
pub const HIGH_BYTE_MIN: u8 = 9;

/// One filter step
///
/// Saturates instead of wrapping so a misbehaving converter reads as
/// "open probe" rather than a plausible temperature.
pub const fn filter(adfilter: u16, raw_sample: u16) -> u16 {
    (adfilter - (adfilter >> 6)).saturating_add(raw_sample)
}

/// Check the accumulator against the safe operating window
pub const fn in_range(adfilter: u16) -> bool {
    let high = (adfilter >> 8) as u8;
    high >= HIGH_BYTE_MIN && high <= HIGH_BYTE_MAX
}

/// Filter state for one probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcFilter {
    value: u16,
    fault: bool,
}

impl Default for AdcFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl AdcFilter {
    /// Create a filter at the power-on value
    pub const fn new() -> Self {
        Self {
            value: FILTER_POWER_ON,
            fault: false,
        }
    }

    /// Create a filter already settled on `raw`
    pub const fn settled(raw: u16) -> Self {
        Self {
            value: raw << 6,
            fault: false,
        }
    }

    /// Feed one conversion result
    pub fn push(&mut self, raw_sample: u16) {
        self.value = filter(self.value, raw_sample);
        if !in_range(self.value) {
            self.fault = true;
        }
    }

    /// Current accumulator value
    pub const fn value(&self) -> u16 {
        self.value
    }

    /// Consume the fault flag
    ///
    /// Returns `true` if any sample since the last call left the window or
    /// the accumulator is outside it right now. Called once per control
    /// cycle.
    pub fn take_fault(&mut self) -> bool {
        let fault = self.fault || !in_range(self.value);
        self.fault = false;
        fault
    }
}
