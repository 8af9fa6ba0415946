//! 3x3 matrices.

use std::ops;

use super::{Inverse, Layout, finish_inverse};
use crate::core::scalar::equal;
use crate::core::traits::{ApproxEq, Real, SquareMatrix};
use crate::error::{LinAlgError, Result};
use crate::vector::Vec3;

mat_impl!(Mat3, Vec3, 3, 9);

impl<T: Real> Mat3<T> {
    pub const IDENTITY: Self = Mat3 {
        elements: [
            [T::ONE, T::ZERO, T::ZERO],
            [T::ZERO, T::ONE, T::ZERO],
            [T::ZERO, T::ZERO, T::ONE],
        ],
    };

    pub const ZERO: Self = Mat3 { elements: [[T::ZERO; 3]; 3] };

    /// Elements listed row by row.
    #[allow(clippy::too_many_arguments)]
    pub fn new(e00: T, e01: T, e02: T, e10: T, e11: T, e12: T, e20: T, e21: T, e22: T) -> Self {
        Mat3 { elements: [[e00, e01, e02], [e10, e11, e12], [e20, e21, e22]] }
    }

    /// Cofactor expansion along the first row.
    pub fn det(&self) -> T {
        let e = &self.elements;
        let cofactor00 = e[1][1] * e[2][2] - e[1][2] * e[2][1];
        let cofactor01 = e[1][2] * e[2][0] - e[1][0] * e[2][2];
        let cofactor02 = e[1][0] * e[2][1] - e[1][1] * e[2][0];

        e[0][0] * cofactor00 + e[0][1] * cofactor01 + e[0][2] * cofactor02
    }

    /// Transposed cofactor matrix.
    fn adjugate(&self) -> [[T; 3]; 3] {
        let e = &self.elements;
        [
            [
                e[1][1] * e[2][2] - e[1][2] * e[2][1],
                e[0][2] * e[2][1] - e[0][1] * e[2][2],
                e[0][1] * e[1][2] - e[0][2] * e[1][1],
            ],
            [
                e[1][2] * e[2][0] - e[1][0] * e[2][2],
                e[0][0] * e[2][2] - e[0][2] * e[2][0],
                e[0][2] * e[1][0] - e[0][0] * e[1][2],
            ],
            [
                e[1][0] * e[2][1] - e[1][1] * e[2][0],
                e[0][1] * e[2][0] - e[0][0] * e[2][1],
                e[0][0] * e[1][1] - e[0][1] * e[1][0],
            ],
        ]
    }
}
