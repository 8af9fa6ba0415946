use thiserror::Error;

// Unified error type for linmat

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinAlgError {
    #[error("index {index} out of range for dimension {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("singular matrix (|det| = {determinant:e} at or below threshold)")]
    SingularMatrix { determinant: f64 },
    #[error("degenerate input: {0}")]
    DegenerateInput(&'static str),
    #[error("dimension mismatch: expected {expected} elements, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("cannot compose transforms built for different vector conventions")]
    ConventionMismatch,
}

pub type Result<T> = std::result::Result<T, LinAlgError>;

/// Bounds check shared by every indexed accessor.
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(LinAlgError::IndexOutOfRange { index, len })
    }
}
