//! linmat: fixed-size vectors and 3x3/4x4 matrices
//!
//! This crate provides allocation-free floating-point value types (`Vec2`,
//! `Vec3`, `Vec4`, `Mat3`, `Mat4`) generic over `f32`/`f64`, closed-form
//! determinants and adjugate inverses with an explicit singularity flag,
//! row-/column-major buffer conversion, and affine transform composition under
//! an explicit row-vector or column-vector convention.

pub mod parallel;

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod transform;
pub mod vector;

// Re-exports for convenience
pub use crate::config::*;
pub use crate::core::*;
pub use crate::error::*;
pub use crate::matrix::{Inverse, Layout, Mat3, Mat4, det, inverse, transpose};
pub use crate::transform::*;
pub use crate::vector::{Vec2, Vec3, Vec4};

/// Types and traits needed for method-call syntax on vectors and matrices.
pub mod prelude {
    pub use crate::core::traits::{ApproxEq, Components, InnerProduct, Real, SquareMatrix};
    pub use crate::matrix::{Inverse, Layout, Mat3, Mat4};
    pub use crate::transform::{Affine, Convention};
    pub use crate::vector::{Vec2, Vec3, Vec4};
}
