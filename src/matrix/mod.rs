//! Matrix module: fixed-size square matrices `Mat3<T>` and `Mat4<T>`.
//!
//! Storage is always row-major (`elements[row][col]`). Every flat import and
//! export takes a [`Layout`] so callers can hand over or receive column-major
//! buffers, e.g. for graphics APIs, without the internal representation
//! changing.
//!
//! Inverses are computed from the adjugate, never by elimination:
//! 1. every cofactor of the adjugate is computed,
//! 2. the determinant is the first row dotted with its cofactors (reused from
//!    the adjugate),
//! 3. `|det| <= threshold` (or a NaN determinant) yields an unsuccessful
//!    [`Inverse`] carrying the identity,
//! 4. otherwise the adjugate is scaled by `1 / det`.

use crate::core::traits::{Real, SquareMatrix};
use crate::error::{LinAlgError, Result};

/// Ordering of a flat `N*N` buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// A row's elements are contiguous.
    #[default]
    RowMajor,
    /// A column's elements are contiguous.
    ColumnMajor,
}

impl Layout {
    /// Position of `(row, col)` inside a flat buffer of an `n x n` matrix.
    #[inline]
    pub fn offset(self, row: usize, col: usize, n: usize) -> usize {
        match self {
            Layout::RowMajor => row * n + col,
            Layout::ColumnMajor => col * n + row,
        }
    }
}

/// Outcome of an adjugate inversion.
///
/// `value` is only meaningful when `success` is set; a singular matrix yields
/// the identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inverse<M: SquareMatrix> {
    pub success: bool,
    pub value: M,
    pub determinant: M::Scalar,
}

impl<M: SquareMatrix> Inverse<M> {
    /// `Ok(value)` on success, `SingularMatrix` otherwise.
    pub fn into_result(self) -> Result<M> {
        if self.success {
            Ok(self.value)
        } else {
            Err(LinAlgError::SingularMatrix {
                determinant: self.determinant.as_f64(),
            })
        }
    }
}

/// Determinant of any supported square matrix.
#[inline]
pub fn det<M: SquareMatrix>(m: &M) -> M::Scalar {
    m.det()
}

/// Inverse with the default singularity threshold.
#[inline]
pub fn inverse<M: SquareMatrix>(m: &M) -> Inverse<M> {
    m.inverse()
}

#[inline]
pub fn transpose<M: SquareMatrix>(m: &M) -> M {
    m.transpose()
}

/// Shared finish of both adjugate inversions: determinant from the first row
/// and its cofactors, singularity test, scaling.
pub(crate) fn finish_inverse<T: Real, const N: usize>(
    first_row: &[T; N],
    adjugate: [[T; N]; N],
    threshold: T,
) -> (bool, [[T; N]; N], T) {
    let det = (0..N).fold(T::ZERO, |acc, col| acc + first_row[col] * adjugate[col][0]);
    if !(det.abs() > threshold) {
        log::debug!("rejecting {}x{} inverse: |det| = {} <= {}", N, N, det.abs(), threshold);
        return (false, adjugate, det);
    }
    let det_inv = T::ONE / det;
    (true, adjugate.map(|row| row.map(|e| e * det_inv)), det)
}

macro_rules! mat_impl {
    ($m: ident, $v: ident, $n: literal, $nn: literal) => {

        #[derive(Debug, Copy, Clone)]
        #[repr(C)]
        pub struct $m<T> {
            //[row][col] indexed
            pub(crate) elements: [[T; $n]; $n],
        }

        impl<T: Real> Default for $m<T> {
            /// The identity, not zero.
            fn default() -> $m<T> {
                $m::IDENTITY
            }
        }

        impl<T: Real> $m<T> {
            #[inline]
            pub fn identity() -> $m<T> {
                $m::IDENTITY
            }

            #[inline]
            pub fn zero() -> $m<T> {
                $m::ZERO
            }

            /// Build from per-row arrays; with `Layout::ColumnMajor` each array
            /// is a column instead.
            #[inline]
            pub fn from_rows(rows: [[T; $n]; $n], layout: Layout) -> $m<T> {
                let m = $m { elements: rows };
                match layout {
                    Layout::RowMajor => m,
                    Layout::ColumnMajor => m.transpose(),
                }
            }

            /// Build from a flat buffer of `N*N` elements in the given layout.
            #[inline]
            pub fn from_array(data: &[T; $nn], layout: Layout) -> $m<T> {
                $m {
                    elements: std::array::from_fn(|row| {
                        std::array::from_fn(|col| data[layout.offset(row, col, $n)])
                    }),
                }
            }

            /// Like [`Self::from_array`], checking the buffer length.
            pub fn from_slice(data: &[T], layout: Layout) -> Result<$m<T>> {
                let data: &[T; $nn] = data.try_into().map_err(|_| LinAlgError::DimensionMismatch {
                    expected: $nn,
                    found: data.len(),
                })?;
                Ok($m::from_array(data, layout))
            }

            /// Export as a flat buffer in the given layout.
            #[inline]
            pub fn copy(&self, layout: Layout) -> [T; $nn] {
                let mut out = [T::ZERO; $nn];
                for row in 0..$n {
                    for col in 0..$n {
                        out[layout.offset(row, col, $n)] = self.elements[row][col];
                    }
                }
                out
            }

            /// Read-only view of the row-major grid.
            #[inline]
            pub fn elements(&self) -> &[[T; $n]; $n] {
                &self.elements
            }

            #[inline]
            pub fn get(&self, row: usize, col: usize) -> Result<T> {
                crate::error::check_index(row, $n)?;
                crate::error::check_index(col, $n)?;
                Ok(self.elements[row][col])
            }

            #[inline]
            pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
                crate::error::check_index(row, $n)?;
                crate::error::check_index(col, $n)?;
                self.elements[row][col] = value;
                Ok(())
            }

            #[inline]
            pub fn row(&self, index: usize) -> Result<$v<T>> {
                crate::error::check_index(index, $n)?;
                Ok($v::from(self.elements[index]))
            }

            #[inline]
            pub fn col(&self, index: usize) -> Result<$v<T>> {
                crate::error::check_index(index, $n)?;
                Ok($v::from(std::array::from_fn(|row| self.elements[row][index])))
            }

            #[inline]
            pub fn set_row(&mut self, index: usize, row: $v<T>) -> Result<()> {
                crate::error::check_index(index, $n)?;
                self.elements[index] = row.into();
                Ok(())
            }

            #[inline]
            pub fn set_col(&mut self, index: usize, col: $v<T>) -> Result<()> {
                crate::error::check_index(index, $n)?;
                for row in 0..$n {
                    self.elements[row][index] = col[row];
                }
                Ok(())
            }

            /// Swap every `(row, col)` with `(col, row)`.
            #[inline]
            pub fn transpose(&self) -> $m<T> {
                $m {
                    elements: std::array::from_fn(|row| {
                        std::array::from_fn(|col| self.elements[col][row])
                    }),
                }
            }

            /// Adjugate inverse with a caller-supplied singularity threshold.
            pub fn inverse_with(&self, threshold: T) -> Inverse<$m<T>> {
                let (success, value, determinant) =
                    finish_inverse(&self.elements[0], self.adjugate(), threshold);
                Inverse {
                    success,
                    value: if success { $m { elements: value } } else { $m::IDENTITY },
                    determinant,
                }
            }

            /// Adjugate inverse with the default threshold (1e-6).
            #[inline]
            pub fn inverse(&self) -> Inverse<$m<T>> {
                self.inverse_with(T::THRESHOLD)
            }

            #[inline]
            pub fn try_inverse(&self, threshold: T) -> Result<$m<T>> {
                self.inverse_with(threshold).into_result()
            }

            fn zip_map(self, rhs: $m<T>, f: impl Fn(T, T) -> T) -> $m<T> {
                $m {
                    elements: std::array::from_fn(|row| {
                        std::array::from_fn(|col| f(self.elements[row][col], rhs.elements[row][col]))
                    }),
                }
            }

            fn map(self, f: impl Fn(T) -> T) -> $m<T> {
                $m { elements: self.elements.map(|row| row.map(&f)) }
            }
        }

        impl<T: Real> ApproxEq for $m<T> {
            type Scalar = T;

            fn approx_eq(&self, other: &$m<T>, threshold: T) -> bool {
                self.elements
                    .iter()
                    .flatten()
                    .zip(other.elements.iter().flatten())
                    .all(|(a, b)| equal(*a, *b, threshold))
            }
        }

        impl<T: Real> PartialEq for $m<T> {
            #[inline]
            fn eq(&self, other: &$m<T>) -> bool {
                self.approx_eq(other, T::THRESHOLD)
            }
        }

        impl<T: Real> SquareMatrix for $m<T> {
            const DIM: usize = $n;

            fn identity() -> $m<T> {
                $m::IDENTITY
            }

            fn zero() -> $m<T> {
                $m::ZERO
            }

            fn get(&self, row: usize, col: usize) -> Result<T> {
                $m::get(self, row, col)
            }

            fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
                $m::set(self, row, col, value)
            }

            fn det(&self) -> T {
                $m::det(self)
            }

            fn inverse_with(&self, threshold: T) -> Inverse<$m<T>> {
                $m::inverse_with(self, threshold)
            }

            fn transpose(&self) -> $m<T> {
                $m::transpose(self)
            }
        }

        impl<T> ops::Index<(usize, usize)> for $m<T> {
            type Output = T;

            #[inline]
            fn index(&self, (row, col): (usize, usize)) -> &T {
                if row >= $n || col >= $n {
                    panic!("{} index ({}, {}) out of range", stringify!($m), row, col);
                }
                &self.elements[row][col]
            }
        }

        impl<T> ops::IndexMut<(usize, usize)> for $m<T> {
            #[inline]
            fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
                if row >= $n || col >= $n {
                    panic!("{} index ({}, {}) out of range", stringify!($m), row, col);
                }
                &mut self.elements[row][col]
            }
        }

        impl<T: Real> ops::Neg for $m<T> {
            type Output = $m<T>;

            #[inline]
            fn neg(self) -> $m<T> {
                self.map(|e| -e)
            }
        }

        impl<T: Real> ops::Add<$m<T>> for $m<T> {
            type Output = $m<T>;

            #[inline]
            fn add(self, rhs: $m<T>) -> $m<T> {
                self.zip_map(rhs, |a, b| a + b)
            }
        }

        impl<T: Real> ops::Sub<$m<T>> for $m<T> {
            type Output = $m<T>;

            #[inline]
            fn sub(self, rhs: $m<T>) -> $m<T> {
                self.zip_map(rhs, |a, b| a - b)
            }
        }

        impl<T: Real> ops::Mul<$m<T>> for $m<T> {
            type Output = $m<T>;

            #[inline]
            fn mul(self, rhs: $m<T>) -> $m<T> {
                $m {
                    elements: std::array::from_fn(|row| {
                        std::array::from_fn(|col| {
                            (0..$n).fold(T::ZERO, |acc, k| {
                                acc + self.elements[row][k] * rhs.elements[k][col]
                            })
                        })
                    }),
                }
            }
        }

        impl<T: Real> ops::Add<T> for $m<T> {
            type Output = $m<T>;

            #[inline]
            fn add(self, rhs: T) -> $m<T> {
                self.map(|e| e + rhs)
            }
        }

        impl<T: Real> ops::Sub<T> for $m<T> {
            type Output = $m<T>;

            #[inline]
            fn sub(self, rhs: T) -> $m<T> {
                self.map(|e| e - rhs)
            }
        }

        impl<T: Real> ops::Mul<T> for $m<T> {
            type Output = $m<T>;

            #[inline]
            fn mul(self, rhs: T) -> $m<T> {
                self.map(|e| e * rhs)
            }
        }

        /// Column-vector product, `M·v`.
        impl<T: Real> ops::Mul<$v<T>> for $m<T> {
            type Output = $v<T>;

            #[inline]
            fn mul(self, v: $v<T>) -> $v<T> {
                $v::from(std::array::from_fn(|row| {
                    (0..$n).fold(T::ZERO, |acc, k| acc + self.elements[row][k] * v[k])
                }))
            }
        }

        /// Row-vector product, `v·M`.
        impl<T: Real> ops::Mul<$m<T>> for $v<T> {
            type Output = $v<T>;

            #[inline]
            fn mul(self, m: $m<T>) -> $v<T> {
                $v::from(std::array::from_fn(|col| {
                    (0..$n).fold(T::ZERO, |acc, k| acc + self[k] * m.elements[k][col])
                }))
            }
        }

        mat_assign_op_impl!(AddAssign, add_assign, Add, add, $m);
        mat_assign_op_impl!(SubAssign, sub_assign, Sub, sub, $m);
        mat_assign_op_impl!(MulAssign, mul_assign, Mul, mul, $m);

        mat_scalar_lhs_impl!($m, f32);
        mat_scalar_lhs_impl!($m, f64);
    }
}

macro_rules! mat_assign_op_impl {
    ($trait: ident, $func: ident, $base: ident, $base_func: ident, $m: ident) => {
        impl<T: Real> ops::$trait<$m<T>> for $m<T> {
            #[inline]
            fn $func(&mut self, rhs: $m<T>) {
                *self = ops::$base::$base_func(*self, rhs);
            }
        }

        impl<T: Real> ops::$trait<T> for $m<T> {
            #[inline]
            fn $func(&mut self, rhs: T) {
                *self = ops::$base::$base_func(*self, rhs);
            }
        }
    }
}

macro_rules! mat_scalar_lhs_impl {
    ($m: ident, $t: ident) => {
        impl ops::Add<$m<$t>> for $t {
            type Output = $m<$t>;

            #[inline]
            fn add(self, rhs: $m<$t>) -> $m<$t> {
                rhs + self
            }
        }

        /// `t - M`, subtracting every element from the scalar.
        impl ops::Sub<$m<$t>> for $t {
            type Output = $m<$t>;

            #[inline]
            fn sub(self, rhs: $m<$t>) -> $m<$t> {
                rhs.map(|e| self - e)
            }
        }

        impl ops::Mul<$m<$t>> for $t {
            type Output = $m<$t>;

            #[inline]
            fn mul(self, rhs: $m<$t>) -> $m<$t> {
                rhs * self
            }
        }
    }
}

// Declared after the macros so the size-specific modules can expand them.
pub mod mat3;
pub mod mat4;
#[cfg(feature = "faer")]
pub mod dense;

pub use mat3::Mat3;
pub use mat4::Mat4;
