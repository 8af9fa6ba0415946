//! Interop with Faer dense matrices.
//!
//! Converts `Mat3`/`Mat4` to and from `faer::Mat` so the fixed-size kernel
//! can hand its results to general dense solvers. Only available with the
//! `faer` feature.

use faer::Mat;

use super::{Mat3, Mat4};
use crate::error::{LinAlgError, Result};

macro_rules! faer_impl {
    ($m: ident, $n: literal, $t: ty) => {
        impl $m<$t> {
            /// Copy into an owned Faer matrix.
            pub fn to_faer(&self) -> Mat<$t> {
                Mat::from_fn($n, $n, |i, j| self.elements[i][j])
            }

            /// Copy out of a Faer matrix, which must be exactly N x N.
            pub fn from_faer(m: &Mat<$t>) -> Result<$m<$t>> {
                if m.nrows() != $n || m.ncols() != $n {
                    return Err(LinAlgError::DimensionMismatch {
                        expected: $n * $n,
                        found: m.nrows() * m.ncols(),
                    });
                }
                Ok($m {
                    elements: std::array::from_fn(|i| std::array::from_fn(|j| m[(i, j)])),
                })
            }
        }
    };
}

faer_impl!(Mat3, 3, f32);
faer_impl!(Mat3, 3, f64);
faer_impl!(Mat4, 4, f32);
faer_impl!(Mat4, 4, f64);
