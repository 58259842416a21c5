//! Piecewise-linear interpolation of the filtered ADC value

use super::lut::LookupTable;
use crate::fixed::lerp64;

/// Table index (bits 11-15 of the filter accumulator)
pub const fn table_index(adfilter: u16) -> usize {
    (adfilter >> 11) as usize
}

/// Position between `index` and `index + 1` in 64ths (bits 5-10)
pub const fn fraction(adfilter: u16) -> u8 {
    ((adfilter >> 5) & 0x3f) as u8
}

/// Convert a filter accumulator to tenths of a degree
///
/// Blends `table[i]` and `table[i + 1]` by the 6-bit fraction with
/// round-to-nearest. Index 31 has no upper neighbour and uses itself.
pub fn interpolate(table: &LookupTable, adfilter: u16) -> i16 {
    let index = table_index(adfilter);
    lerp64(table.get(index), table.get(index + 1), fraction(adfilter))
}
