//! Scalar helpers shared by the vector and matrix layers.
//!
//! Every whole-value equality in the crate goes through [`equal`]; the
//! component-wise vector functions in [`crate::vector::functions`] apply the
//! remaining helpers to each component independently.

use crate::core::traits::Real;

/// `true` when `|a - b| <= threshold`.
#[inline]
pub fn equal<T: Real>(a: T, b: T, threshold: T) -> bool {
    (a - b).abs() <= threshold
}

/// Linear interpolation, `a + t * (b - a)`.
#[inline]
pub fn lerp<T: Real>(a: T, b: T, t: T) -> T {
    a + t * (b - a)
}

#[inline]
pub fn clamp<T: Real>(t: T, min: T, max: T) -> T {
    if t < min {
        min
    } else if t > max {
        max
    } else {
        t
    }
}

/// Fractional part, `t - floor(t)`; always in `[0, 1)` for finite `t`.
#[inline]
pub fn frac<T: Real>(t: T) -> T {
    t - t.floor()
}

/// Floating-point remainder with the sign of the dividend (C `fmod`).
#[inline]
pub fn modulo<T: Real>(a: T, b: T) -> T {
    a % b
}

/// Smoothstep of `t` between the edges `a` and `b`.
///
/// Returns 0 below `a`, 1 above `b`, and `s²(3 - 2s)` in between where `s` is
/// the relative position of `t`.
#[inline]
pub fn smooth_interpolation<T: Real>(a: T, b: T, t: T) -> T {
    let s = clamp((t - a) / (b - a), T::ZERO, T::ONE);
    s * s * (T::lit(3.0) - T::lit(2.0) * s)
}

#[inline]
pub fn radian_to_degree<T: Real>(radian: T) -> T {
    radian.to_degrees()
}

#[inline]
pub fn degree_to_radian<T: Real>(degree: T) -> T {
    degree.to_radians()
}
