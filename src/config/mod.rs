//! Configuration: tolerance options shared by comparisons and inversions.

pub mod options;
pub use options::Tolerances;
