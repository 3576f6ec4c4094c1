//! Saturating conversions used by the transform kernels.
//!
//! Kernels do their arithmetic in a wider type (`i32` or `f32`) and narrow the
//! result back into a sample here. Both conversions clamp to `[0, 255]` on
//! both ends; the float conversion truncates toward zero after clamping.

/// Largest value a sample can hold.
pub const SAMPLE_MAX: u8 = u8::MAX;

/// Mid-grey pivot used by contrast adjustment.
pub const SAMPLE_MIDPOINT: f32 = 128.0;

/// Clamps an integer intermediate into a sample.
#[inline(always)]
pub fn saturate_i32(value: i32) -> u8 {
    value.clamp(0, SAMPLE_MAX as i32) as u8
}

/// Clamps a float intermediate into a sample, truncating the fraction.
///
/// NaN maps to 0.
#[inline(always)]
pub fn saturate_f32(value: f32) -> u8 {
    // `as` already saturates for out of range floats; the clamp keeps the
    // bounds explicit and identical to `saturate_i32`.
    value.clamp(0.0, SAMPLE_MAX as f32) as u8
}
