//! 4x4 matrices.
//!
//! The determinant expands the first row against four 3x3 minors of rows 1-3.
//! The adjugate is assembled from the 2x2 sub-determinants of row pairs
//! (2,3), (1,3) and (1,2), so each pair is formed once and shared by the
//! cofactors of two rows.

use std::ops;

use super::{Inverse, Layout, Mat3, finish_inverse};
use crate::core::scalar::equal;
use crate::core::traits::{ApproxEq, Real, SquareMatrix};
use crate::error::{LinAlgError, Result};
use crate::vector::Vec4;

mat_impl!(Mat4, Vec4, 4, 16);

impl<T: Real> Mat4<T> {
    pub const IDENTITY: Self = Mat4 {
        elements: [
            [T::ONE, T::ZERO, T::ZERO, T::ZERO],
            [T::ZERO, T::ONE, T::ZERO, T::ZERO],
            [T::ZERO, T::ZERO, T::ONE, T::ZERO],
            [T::ZERO, T::ZERO, T::ZERO, T::ONE],
        ],
    };

    pub const ZERO: Self = Mat4 { elements: [[T::ZERO; 4]; 4] };

    /// Elements listed row by row.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        e00: T, e01: T, e02: T, e03: T,
        e10: T, e11: T, e12: T, e13: T,
        e20: T, e21: T, e22: T, e23: T,
        e30: T, e31: T, e32: T, e33: T,
    ) -> Self {
        Mat4 {
            elements: [
                [e00, e01, e02, e03],
                [e10, e11, e12, e13],
                [e20, e21, e22, e23],
                [e30, e31, e32, e33],
            ],
        }
    }

    /// Embed a 3x3 block in the upper-left corner of the identity.
    pub fn from_mat3(m: Mat3<T>) -> Self {
        let mut out = Mat4::IDENTITY;
        for row in 0..3 {
            out.elements[row][..3].copy_from_slice(&m.elements[row]);
        }
        out
    }

    /// Upper-left 3x3 block (the linear part of an affine transform).
    pub fn upper_left(&self) -> Mat3<T> {
        Mat3 {
            elements: std::array::from_fn(|row| std::array::from_fn(|col| self.elements[row][col])),
        }
    }

    /// Cofactor expansion along the first row.
    pub fn det(&self) -> T {
        let e = &self.elements;
        e[0][0] * self.minor(1, 2, 3) - e[0][1] * self.minor(0, 2, 3)
            + e[0][2] * self.minor(0, 1, 3)
            - e[0][3] * self.minor(0, 1, 2)
    }

    /// Determinant of rows 1-3 restricted to the given columns.
    fn minor(&self, col0: usize, col1: usize, col2: usize) -> T {
        let e = &self.elements;
        e[1][col0] * (e[2][col1] * e[3][col2] - e[3][col1] * e[2][col2])
            - e[1][col1] * (e[2][col0] * e[3][col2] - e[3][col0] * e[2][col2])
            + e[1][col2] * (e[2][col0] * e[3][col1] - e[3][col0] * e[2][col1])
    }

    /// Transposed cofactor matrix.
    fn adjugate(&self) -> [[T; 4]; 4] {
        let [
            [e00, e01, e02, e03],
            [e10, e11, e12, e13],
            [e20, e21, e22, e23],
            [e30, e31, e32, e33],
        ] = self.elements;

        // rows 2 and 3: cofactors of rows 0 and 1
        let v0 = e20 * e31 - e21 * e30;
        let v1 = e20 * e32 - e22 * e30;
        let v2 = e20 * e33 - e23 * e30;
        let v3 = e21 * e32 - e22 * e31;
        let v4 = e21 * e33 - e23 * e31;
        let v5 = e22 * e33 - e23 * e32;

        let a00 = v5 * e11 - v4 * e12 + v3 * e13;
        let a10 = -(v5 * e10 - v2 * e12 + v1 * e13);
        let a20 = v4 * e10 - v2 * e11 + v0 * e13;
        let a30 = -(v3 * e10 - v1 * e11 + v0 * e12);

        let a01 = -(v5 * e01 - v4 * e02 + v3 * e03);
        let a11 = v5 * e00 - v2 * e02 + v1 * e03;
        let a21 = -(v4 * e00 - v2 * e01 + v0 * e03);
        let a31 = v3 * e00 - v1 * e01 + v0 * e02;

        // rows 1 and 3: cofactors of row 2
        let v0 = e10 * e31 - e11 * e30;
        let v1 = e10 * e32 - e12 * e30;
        let v2 = e10 * e33 - e13 * e30;
        let v3 = e11 * e32 - e12 * e31;
        let v4 = e11 * e33 - e13 * e31;
        let v5 = e12 * e33 - e13 * e32;

        let a02 = v5 * e01 - v4 * e02 + v3 * e03;
        let a12 = -(v5 * e00 - v2 * e02 + v1 * e03);
        let a22 = v4 * e00 - v2 * e01 + v0 * e03;
        let a32 = -(v3 * e00 - v1 * e01 + v0 * e02);

        // rows 1 and 2: cofactors of row 3
        let v0 = e21 * e10 - e20 * e11;
        let v1 = e22 * e10 - e20 * e12;
        let v2 = e23 * e10 - e20 * e13;
        let v3 = e22 * e11 - e21 * e12;
        let v4 = e23 * e11 - e21 * e13;
        let v5 = e23 * e12 - e22 * e13;

        let a03 = -(v5 * e01 - v4 * e02 + v3 * e03);
        let a13 = v5 * e00 - v2 * e02 + v1 * e03;
        let a23 = -(v4 * e00 - v2 * e01 + v0 * e03);
        let a33 = v3 * e00 - v1 * e01 + v0 * e02;

        [
            [a00, a01, a02, a03],
            [a10, a11, a12, a13],
            [a20, a21, a22, a23],
            [a30, a31, a32, a33],
        ]
    }
}
