//! Thermistor probe
//!
//! Ties a filter accumulator to a lookup table. The configured correction
//! is applied by the caller per cycle since it lives in the config store.

use super::filter::AdcFilter;
use super::interpolate::interpolate;
use super::lut::LookupTable;

/// One thermistor input
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Probe {
    filter: AdcFilter,
    table: LookupTable,
}

impl Probe {
    /// Create a probe at the power-on filter value
    pub const fn new(table: LookupTable) -> Self {
        Self {
            filter: AdcFilter::new(),
            table,
        }
    }

    /// Create a probe already settled on a raw reading
    pub const fn settled(table: LookupTable, raw: u16) -> Self {
        Self {
            filter: AdcFilter::settled(raw),
            table,
        }
    }

    /// Feed one conversion result
    pub fn sample(&mut self, raw: u16) {
        self.filter.push(raw);
    }

    /// Temperature in tenths of a degree, including `correction`
    pub fn temperature(&self, correction: i16) -> i16 {
        interpolate(&self.table, self.filter.value()).saturating_add(correction)
    }

    /// Consume the sensor fault flag (see [`AdcFilter::take_fault`])
    pub fn take_fault(&mut self) -> bool {
        self.filter.take_fault()
    }

    /// Raw filter accumulator
    pub fn adfilter(&self) -> u16 {
        self.filter.value()
    }
}
