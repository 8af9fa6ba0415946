//! Free-function forms of the vector operations.
//!
//! Each component-wise function applies the scalar helper of the same name from
//! [`crate::core::scalar`] to every component independently, so they work for
//! `Vec2`, `Vec3` and `Vec4` alike.

use num_traits::Float;

use crate::core::scalar;
use crate::core::traits::{Components, InnerProduct, Real};
use crate::vector::Vec3;

#[inline]
pub fn dot<V: InnerProduct>(a: V, b: V) -> V::Scalar {
    a.dot(b)
}

#[inline]
pub fn cross<T: Real>(a: Vec3<T>, b: Vec3<T>) -> Vec3<T> {
    a.cross(b)
}

#[inline]
pub fn length<V: InnerProduct>(v: V) -> V::Scalar {
    v.length()
}

#[inline]
pub fn sqr_length<V: InnerProduct>(v: V) -> V::Scalar {
    v.sqr_length()
}

/// Unit-length copy of `v`; non-finite for a zero vector.
#[inline]
pub fn normalize<V: InnerProduct>(v: V) -> V {
    v.normal()
}

#[inline]
pub fn is_normal<V: InnerProduct>(v: V) -> bool {
    v.is_normal()
}

#[inline]
pub fn min<V: Components>(a: V, b: V) -> V {
    a.zip_map(b, |x, y| x.min(y))
}

#[inline]
pub fn max<V: Components>(a: V, b: V) -> V {
    a.zip_map(b, |x, y| x.max(y))
}

#[inline]
pub fn abs<V: Components>(v: V) -> V {
    v.map(|x| x.abs())
}

#[inline]
pub fn lerp<V: Components>(a: V, b: V, t: V::Scalar) -> V {
    a.zip_map(b, |x, y| scalar::lerp(x, y, t))
}

/// Clamp every component into `[min, max]`.
#[inline]
pub fn clamp<V: Components>(v: V, min: V::Scalar, max: V::Scalar) -> V {
    v.map(|x| scalar::clamp(x, min, max))
}

#[inline]
pub fn floor<V: Components>(v: V) -> V {
    v.map(|x| x.floor())
}

#[inline]
pub fn ceil<V: Components>(v: V) -> V {
    v.map(|x| x.ceil())
}

#[inline]
pub fn frac<V: Components>(v: V) -> V {
    v.map(scalar::frac)
}

/// Component-wise `fmod`.
#[inline]
pub fn modulo<V: Components>(a: V, b: V) -> V {
    a.zip_map(b, scalar::modulo)
}

/// Smoothstep of `t` between the edges `a` and `b`, per component.
#[inline]
pub fn smooth_interpolation<V: Components>(a: V, b: V, t: V::Scalar) -> V {
    a.zip_map(b, |lo, hi| scalar::smooth_interpolation(lo, hi, t))
}
