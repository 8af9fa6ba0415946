//! Core numeric traits for linmat.

use std::fmt;
use std::ops::Mul;

use num_traits::{Float, FloatConst};

use crate::config::Tolerances;
use crate::error::{LinAlgError, Result};
use crate::matrix::Inverse;

/// Floating-point element type of every vector and matrix.
///
/// Only `f32` and `f64` implement it, so a non-float element type is rejected
/// at compile time.
pub trait Real:
    Float + FloatConst + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    const ZERO: Self;
    const ONE: Self;
    /// Default tolerance for `equal` and for the singularity test (1e-6).
    const THRESHOLD: Self;

    /// Convert an `f64` literal into this type.
    fn lit(v: f64) -> Self;

    /// Widen to `f64` for error reporting.
    fn as_f64(self) -> f64;
}

impl Real for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const THRESHOLD: Self = 1e-6;

    #[inline]
    fn lit(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Real for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const THRESHOLD: Self = 1e-6;

    #[inline]
    fn lit(v: f64) -> Self {
        v
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

/// Epsilon-tolerant comparison of whole values.
pub trait ApproxEq {
    type Scalar: Real;

    /// `true` when every component differs by at most `threshold`.
    fn approx_eq(&self, other: &Self, threshold: Self::Scalar) -> bool;

    fn approx_eq_within(&self, other: &Self, tol: &Tolerances<Self::Scalar>) -> bool {
        self.approx_eq(other, tol.equality)
    }
}

/// Component-wise access shared by the fixed-size vectors.
pub trait Components: Copy {
    type Scalar: Real;

    /// Apply `f` to every component.
    fn map(self, f: impl Fn(Self::Scalar) -> Self::Scalar) -> Self;

    /// Apply `f` to each pair of matching components.
    fn zip_map(self, other: Self, f: impl Fn(Self::Scalar, Self::Scalar) -> Self::Scalar) -> Self;
}

/// Inner products, lengths and normalization for fixed-size vectors.
pub trait InnerProduct: Components {
    /// Compute dot(self, other).
    fn dot(self, other: Self) -> Self::Scalar;

    /// Squared Euclidean length, without the square root.
    fn sqr_length(self) -> Self::Scalar {
        self.dot(self)
    }

    /// Compute ‖self‖₂.
    fn length(self) -> Self::Scalar {
        self.sqr_length().sqrt()
    }

    /// Unit-length copy. A zero vector yields non-finite components.
    fn normal(self) -> Self {
        let len = self.length();
        self.map(|c| c / len)
    }

    /// Normalize in place. A zero vector yields non-finite components.
    fn normalize(&mut self) {
        *self = self.normal();
    }

    /// Unit-length copy, rejecting vectors whose length is zero or not finite.
    fn try_normal(self) -> Result<Self> {
        let len = self.length();
        if len > Self::Scalar::ZERO && len.is_finite() {
            Ok(self.map(|c| c / len))
        } else {
            Err(LinAlgError::DegenerateInput("cannot normalize a zero-length vector"))
        }
    }

    fn try_normalize(&mut self) -> Result<()> {
        *self = self.try_normal()?;
        Ok(())
    }

    /// Whether the length equals one within the default threshold.
    fn is_normal(self) -> bool {
        crate::core::scalar::equal(self.length(), Self::Scalar::ONE, Self::Scalar::THRESHOLD)
    }
}

/// Fixed-size square matrix with a closed-form determinant and inverse.
pub trait SquareMatrix: Copy + Mul<Output = Self> + ApproxEq {
    /// Number of rows (and columns).
    const DIM: usize;

    fn identity() -> Self;
    fn zero() -> Self;

    /// Bounds-checked element read.
    fn get(&self, row: usize, col: usize) -> Result<Self::Scalar>;
    /// Bounds-checked element write.
    fn set(&mut self, row: usize, col: usize, value: Self::Scalar) -> Result<()>;

    fn det(&self) -> Self::Scalar;

    /// Adjugate inverse; fails when `|det| <= threshold`.
    fn inverse_with(&self, threshold: Self::Scalar) -> Inverse<Self>;

    fn transpose(&self) -> Self;

    fn inverse(&self) -> Inverse<Self> {
        self.inverse_with(Self::Scalar::THRESHOLD)
    }

    fn inverse_within(&self, tol: &Tolerances<Self::Scalar>) -> Inverse<Self> {
        self.inverse_with(tol.singularity)
    }

    /// Like [`SquareMatrix::inverse_with`], reporting singularity as an error.
    fn try_inverse(&self, threshold: Self::Scalar) -> Result<Self> {
        self.inverse_with(threshold).into_result()
    }
}
