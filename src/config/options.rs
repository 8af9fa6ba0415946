//! Tolerance options for comparisons and inversions.
//!
//! This module provides the `Tolerances` struct, which bundles the two
//! thresholds the kernel uses: the epsilon for whole-value equality and the
//! determinant magnitude at or below which a matrix is treated as singular.
//! Both default to 1e-6.

use crate::core::traits::Real;

/// Equality & singularity thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances<T> {
    /// Maximum absolute difference for two components to compare equal
    pub equality: T,

    /// Largest |det| still treated as singular by the inverse
    pub singularity: T,
}

impl<T: Real> Tolerances<T> {
    pub fn new() -> Self {
        Self { equality: T::THRESHOLD, singularity: T::THRESHOLD }
    }

    pub fn with_equality(mut self, equality: T) -> Self {
        self.equality = equality;
        self
    }

    pub fn with_singularity(mut self, singularity: T) -> Self {
        self.singularity = singularity;
        self
    }
}

impl<T: Real> Default for Tolerances<T> {
    fn default() -> Self {
        Self::new()
    }
}
