//! ADC-to-temperature lookup tables
//!
//! Tables are produced offline by `fermstat-lut` for a 10 kΩ NTC against a
//! 10 kΩ reference resistor and a 10-bit ADC sampled every 32 counts. Entry
//! `i` is the temperature at ADC value `i * 32`; entry 0 is unused (the
//! divider inversion is undefined there).

use crate::config::TemperatureUnit;

/// Number of table entries
pub const LUT_SIZE: usize = 32;

/// Piecewise-linear ADC-to-temperature table (tenths of a degree)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LookupTable {
    entries: [i16; LUT_SIZE],
}

/// Built-in Celsius table
pub const CELSIUS: LookupTable = LookupTable::new([
    0, -486, -355, -270, -205, -151, -104, -61, -21, 16, 51, 85, 119, 152, 184, 217, 250, 284, 318,
    354, 391, 431, 473, 519, 569, 624, 688, 763, 856, 977, 1154, 1482,
]);

/// Built-in Fahrenheit table
pub const FAHRENHEIT: LookupTable = LookupTable::new([
    0, -555, -319, -167, -49, 48, 134, 211, 282, 348, 412, 474, 534, 593, 652, 711, 770, 831, 893,
    957, 1025, 1096, 1172, 1253, 1343, 1444, 1559, 1694, 1860, 2078, 2397, 2987,
]);

impl LookupTable {
    /// Wrap a generated table
    pub const fn new(entries: [i16; LUT_SIZE]) -> Self {
        Self { entries }
    }

    /// Built-in table for `unit`
    pub const fn for_unit(unit: TemperatureUnit) -> &'static Self {
        match unit {
            TemperatureUnit::Celsius => &CELSIUS,
            TemperatureUnit::Fahrenheit => &FAHRENHEIT,
        }
    }

    /// Entry at `index`, saturating at the last entry
    pub fn get(&self, index: usize) -> i16 {
        self.entries[index.min(LUT_SIZE - 1)]
    }

    /// All entries
    pub fn entries(&self) -> &[i16; LUT_SIZE] {
        &self.entries
    }

    /// Check that entries 1.. never decrease
    pub fn is_monotonic(&self) -> bool {
        self.entries[1..].windows(2).all(|w| w[0] <= w[1])
    }
}
