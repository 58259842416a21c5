//! Fixed-point interpolation helpers
//!
//! Both the ADC interpolator and the setpoint ramp blend two values with a
//! 6-bit weight. On parts without a hardware multiplier this is usually
//! written as 64 additions of one endpoint or the other; the direct form
//! here yields the same result for every input (see the property tests).

/// Number of sub-steps between two endpoints
pub const SUBSTEPS: i32 = 64;

/// Blend `from` and `to` with `weight`/64 towards `to`, rounding to nearest
///
/// `weight` is clamped to 64.
pub const fn lerp64(from: i16, to: i16, weight: u8) -> i16 {
    let w = if weight as i32 > SUBSTEPS {
        SUBSTEPS
    } else {
        weight as i32
    };
    let acc = from as i32 * (SUBSTEPS - w) + to as i32 * w + SUBSTEPS / 2;
    (acc >> 6) as i16
}

/// Weight of `elapsed` out of `duration`, in 64ths, saturating at 64
///
/// A zero `duration` counts as fully elapsed.
pub const fn ramp_weight(elapsed: u16, duration: u16) -> u8 {
    if duration == 0 {
        return SUBSTEPS as u8;
    }
    let w = (elapsed as u32 * SUBSTEPS as u32) / duration as u32;
    if w > SUBSTEPS as u32 {
        SUBSTEPS as u8
    } else {
        w as u8
    }
}
