//! `Affine`: a `Mat4` tagged with the vector convention it was built for.

use crate::config::Tolerances;
use crate::core::traits::{Real, SquareMatrix};
use crate::error::{LinAlgError, Result};
use crate::matrix::Mat4;
use crate::transform::{self, Convention};
use crate::vector::{Vec3, Vec4};

/// Affine transform that remembers its [`Convention`].
///
/// Composition and application always use the stored convention, and
/// composing two transforms of different conventions is an error rather than a
/// silently wrong product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine<T: Real> {
    matrix: Mat4<T>,
    convention: Convention,
}

impl<T: Real> Affine<T> {
    pub fn identity(convention: Convention) -> Self {
        Self { matrix: Mat4::IDENTITY, convention }
    }

    /// Wrap a matrix that was built for `convention`.
    pub fn from_matrix(matrix: Mat4<T>, convention: Convention) -> Self {
        Self { matrix, convention }
    }

    pub fn translation(offset: Vec3<T>, convention: Convention) -> Self {
        Self::from_matrix(transform::translate_vec(offset, convention), convention)
    }

    pub fn scaling(factors: Vec3<T>, convention: Convention) -> Self {
        Self::from_matrix(transform::scale_vec(factors), convention)
    }

    pub fn rotation(radian: T, axis: Vec3<T>, convention: Convention) -> Result<Self> {
        Ok(Self::from_matrix(transform::rotate(radian, axis, convention)?, convention))
    }

    pub fn matrix(&self) -> &Mat4<T> {
        &self.matrix
    }

    pub fn convention(&self) -> Convention {
        self.convention
    }

    /// The transform that applies `self` first and `next` second.
    ///
    /// Row vectors compose as `self·next`, column vectors as `next·self`.
    pub fn then(&self, next: &Affine<T>) -> Result<Affine<T>> {
        if self.convention != next.convention {
            return Err(LinAlgError::ConventionMismatch);
        }
        let matrix = match self.convention {
            Convention::RowVector => self.matrix * next.matrix,
            Convention::ColumnVector => next.matrix * self.matrix,
        };
        Ok(Self { matrix, convention: self.convention })
    }

    /// The same transform expressed for the other convention.
    pub fn to_convention(&self, convention: Convention) -> Affine<T> {
        if convention == self.convention {
            *self
        } else {
            Self { matrix: self.matrix.transpose(), convention }
        }
    }

    pub fn apply(&self, v: Vec4<T>) -> Vec4<T> {
        transform::transform(v, &self.matrix, self.convention)
    }

    pub fn apply_point(&self, p: Vec3<T>) -> Vec3<T> {
        transform::transform_point(p, &self.matrix, self.convention)
    }

    pub fn apply_direction(&self, d: Vec3<T>) -> Vec3<T> {
        transform::transform_direction(d, &self.matrix, self.convention)
    }

    /// Transform a batch of vectors in place.
    pub fn apply_batch(&self, vectors: &mut [Vec4<T>]) {
        crate::parallel::transform_batch(vectors, &self.matrix, self.convention);
    }

    /// Inverse transform, failing with `SingularMatrix` for a degenerate scale.
    pub fn inverse(&self) -> Result<Affine<T>> {
        self.inverse_within(&Tolerances::default())
    }

    pub fn inverse_within(&self, tol: &Tolerances<T>) -> Result<Affine<T>> {
        let matrix = self.matrix.inverse_within(tol).into_result()?;
        Ok(Self { matrix, convention: self.convention })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn pipeline(conv: Convention) -> Affine<f64> {
        let s = Affine::scaling(Vec3::new(2.0, 2.0, 2.0), conv);
        let r = Affine::rotation(FRAC_PI_2, Vec3::new(0.0, 0.0, 1.0), conv).unwrap();
        let t = Affine::translation(Vec3::new(10.0, 0.0, 0.0), conv);
        s.then(&r).unwrap().then(&t).unwrap()
    }

    #[test]
    fn composition_order_is_first_to_last() {
        for conv in [Convention::RowVector, Convention::ColumnVector] {
            // scale (2,0,0), rotate to (0,2,0), translate to (10,2,0)
            let p = pipeline(conv).apply_point(Vec3::new(1.0, 0.0, 0.0));
            assert_eq!(p, Vec3::new(10.0, 2.0, 0.0));
        }
    }

    #[test]
    fn mixing_conventions_is_an_error() {
        let a = Affine::<f64>::identity(Convention::RowVector);
        let b = Affine::<f64>::identity(Convention::ColumnVector);
        assert_eq!(a.then(&b), Err(LinAlgError::ConventionMismatch));
        assert!(a.then(&b.to_convention(Convention::RowVector)).is_ok());
    }

    #[test]
    fn converting_convention_preserves_action() {
        let row = pipeline(Convention::RowVector);
        let col = row.to_convention(Convention::ColumnVector);
        assert_eq!(col.convention(), Convention::ColumnVector);
        assert_eq!(*col.matrix(), *pipeline(Convention::ColumnVector).matrix());
        let v = Vec4::new(0.5, -1.0, 2.0, 1.0);
        assert_eq!(row.apply(v), col.apply(v));
    }

    #[test]
    fn inverse_undoes_the_transform() {
        let t = pipeline(Convention::ColumnVector);
        let inv = t.inverse().unwrap();
        let p = Vec3::new(3.0, -4.0, 5.0);
        assert_eq!(inv.apply_point(t.apply_point(p)), p);
        assert_eq!(*t.then(&inv).unwrap().matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn collapsed_scale_has_no_inverse() {
        let flat = Affine::scaling(Vec3::new(1.0_f64, 1.0, 0.0), Convention::RowVector);
        assert!(matches!(flat.inverse(), Err(LinAlgError::SingularMatrix { .. })));
    }
}
