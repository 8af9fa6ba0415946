//! Core numeric traits and scalar helpers.

pub mod scalar;
pub mod traits;

pub use scalar::{
    clamp, degree_to_radian, equal, frac, lerp, modulo, radian_to_degree, smooth_interpolation,
};
pub use traits::{ApproxEq, Components, InnerProduct, Real, SquareMatrix};
