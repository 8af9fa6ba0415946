//! Affine transform construction and application on `Mat4`.
//!
//! Every function that builds or applies a transform takes a [`Convention`]:
//!
//! - `RowVector`: vectors multiply from the left, `v' = v·M`; translation
//!   lives in the last row.
//! - `ColumnVector`: the matrix multiplies from the left, `v' = M·v`;
//!   translation lives in the last column.
//!
//! A matrix built for one convention is the transpose of the matrix built for
//! the other, and both move a given vector to the same place when applied with
//! the matching convention. [`Affine`] carries the convention with the matrix
//! so the two cannot be mixed by accident.

use crate::core::traits::{InnerProduct, Real};
use crate::error::{LinAlgError, Result};
use crate::matrix::Mat4;
use crate::vector::{Vec3, Vec4};

pub mod affine;
pub use affine::Affine;

/// Which side of the matrix a vector multiplies from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Convention {
    /// `v' = v·M`
    RowVector,
    /// `v' = M·v`
    ColumnVector,
}

/// Translation by `(x, y, z)`.
pub fn translate<T: Real>(x: T, y: T, z: T, convention: Convention) -> Mat4<T> {
    let mut m = Mat4::IDENTITY;
    match convention {
        Convention::RowVector => {
            m.elements[3][0] = x;
            m.elements[3][1] = y;
            m.elements[3][2] = z;
        }
        Convention::ColumnVector => {
            m.elements[0][3] = x;
            m.elements[1][3] = y;
            m.elements[2][3] = z;
        }
    }
    m
}

#[inline]
pub fn translate_vec<T: Real>(v: Vec3<T>, convention: Convention) -> Mat4<T> {
    translate(v.x, v.y, v.z, convention)
}

/// Axis-aligned scale; identical under both conventions.
pub fn scale<T: Real>(x: T, y: T, z: T) -> Mat4<T> {
    let mut m = Mat4::IDENTITY;
    m.elements[0][0] = x;
    m.elements[1][1] = y;
    m.elements[2][2] = z;
    m
}

#[inline]
pub fn scale_vec<T: Real>(v: Vec3<T>) -> Mat4<T> {
    scale(v.x, v.y, v.z)
}

/// Right-handed rotation of `radian` about `axis`.
///
/// The axis is normalized first, then expanded through the half-angle unit
/// quaternion. A zero-length or non-finite axis is rejected with
/// `DegenerateInput`.
pub fn rotate<T: Real>(radian: T, axis: Vec3<T>, convention: Convention) -> Result<Mat4<T>> {
    let axis = axis.try_normal().map_err(|_| {
        log::warn!("rejecting rotation about degenerate axis {}", axis);
        LinAlgError::DegenerateInput("rotation axis must have non-zero finite length")
    })?;

    let half_radian = radian * T::lit(0.5);
    let half_sin = half_radian.sin();
    let half_cos = half_radian.cos();

    let x = axis.x * half_sin;
    let y = axis.y * half_sin;
    let z = axis.z * half_sin;
    let w = half_cos;

    let x2 = x * x;
    let y2 = y * y;
    let z2 = z * z;
    let xy = x * y;
    let xz = x * z;
    let yz = y * z;
    let xw = x * w;
    let yw = y * w;
    let zw = z * w;

    let one = T::ONE;
    let two = T::lit(2.0);

    // column-vector form; the row-vector matrix is its transpose
    let r = [
        [one - two * (y2 + z2), two * (xy - zw), two * (xz + yw)],
        [two * (xy + zw), one - two * (x2 + z2), two * (yz - xw)],
        [two * (xz - yw), two * (yz + xw), one - two * (x2 + y2)],
    ];

    let mut m = Mat4::IDENTITY;
    for row in 0..3 {
        for col in 0..3 {
            m.elements[row][col] = match convention {
                Convention::ColumnVector => r[row][col],
                Convention::RowVector => r[col][row],
            };
        }
    }
    Ok(m)
}

/// Apply `m` to `v` under the given convention.
#[inline]
pub fn transform<T: Real>(v: Vec4<T>, m: &Mat4<T>, convention: Convention) -> Vec4<T> {
    match convention {
        Convention::RowVector => v * *m,
        Convention::ColumnVector => *m * v,
    }
}

/// Transform a point (`w = 1`) and drop `w`; exact for affine matrices.
#[inline]
pub fn transform_point<T: Real>(p: Vec3<T>, m: &Mat4<T>, convention: Convention) -> Vec3<T> {
    transform(Vec4::from_point(p), m, convention).xyz()
}

/// Transform a direction (`w = 0`), ignoring any translation.
#[inline]
pub fn transform_direction<T: Real>(d: Vec3<T>, m: &Mat4<T>, convention: Convention) -> Vec3<T> {
    transform(Vec4::from_direction(d), m, convention).xyz()
}
