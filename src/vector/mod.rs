//! Fixed-size vectors: `Vec2<T>`, `Vec3<T>` and `Vec4<T>`.
//!
//! All three types are generated by [`vec_impl!`] and share the same surface:
//! component-wise arithmetic with vectors and scalars, bounds-checked indexing,
//! epsilon-tolerant `==`, and the [`Components`]/[`InnerProduct`] traits.
//! `Vec3` additionally has the right-handed [`Vec3::cross`].

use std::fmt;
use std::ops;

use crate::core::scalar::equal;
use crate::core::traits::{ApproxEq, Components, InnerProduct, Real};
use crate::error::{Result, check_index};

pub mod functions;

macro_rules! vec_op_impl {
    ($trait: ident, $func: ident, $v: ident, $($e: ident),*) => {
        impl<T: Real> ops::$trait<$v<T>> for $v<T> {
            type Output = $v<T>;

            #[inline]
            fn $func(self, rhs: $v<T>) -> $v<T> {
                $v { $( $e: ops::$trait::$func(self.$e, rhs.$e), )* }
            }
        }
    }
}

macro_rules! vec_assign_op_impl {
    ($trait: ident, $func: ident, $base: ident, $base_func: ident, $v: ident) => {
        impl<T: Real> ops::$trait<$v<T>> for $v<T> {
            #[inline]
            fn $func(&mut self, rhs: $v<T>) {
                *self = ops::$base::$base_func(*self, rhs);
            }
        }

        impl<T: Real> ops::$trait<T> for $v<T> {
            #[inline]
            fn $func(&mut self, rhs: T) {
                *self = ops::$base::$base_func(*self, rhs);
            }
        }
    }
}

macro_rules! scalar_op_impl {
    ($trait: ident, $func: ident, $v: ident, $($e: ident),*) => {
        impl<T: Real> ops::$trait<T> for $v<T> {
            type Output = $v<T>;

            #[inline]
            fn $func(self, rhs: T) -> $v<T> {
                $v { $( $e: ops::$trait::$func(self.$e, rhs), )* }
            }
        }
    }
}

// Scalar on the left can only be implemented for concrete element types.
macro_rules! scalar_lhs_op_impl {
    ($trait: ident, $func: ident, $v: ident, $t: ident, $($e: ident),*) => {
        impl ops::$trait<$v<$t>> for $t {
            type Output = $v<$t>;

            #[inline]
            fn $func(self, rhs: $v<$t>) -> $v<$t> {
                $v { $( $e: ops::$trait::$func(self, rhs.$e), )* }
            }
        }
    }
}

macro_rules! vec_impl {
    ($v: ident, $n: literal, $($e: ident = $i: literal),*) => {

        #[derive(Debug, Default, Copy, Clone)]
        #[repr(C)]
        pub struct $v<T> {
            $( pub $e: T, )*
        }

        impl<T: Real> $v<T> {
            pub const ZERO: Self = $v { $( $e: T::ZERO, )* };
            pub const ONE: Self = $v { $( $e: T::ONE, )* };

            #[inline]
            pub fn new($( $e: T, )*) -> $v<T> {
                $v { $( $e, )* }
            }

            /// Every component set to `value`.
            #[inline]
            pub fn splat(value: T) -> $v<T> {
                $v { $( $e: value, )* }
            }

            #[inline]
            pub fn to_array(self) -> [T; $n] {
                [$( self.$e, )*]
            }

            /// Bounds-checked component read.
            #[inline]
            pub fn get(&self, index: usize) -> Result<T> {
                check_index(index, $n)?;
                Ok(self[index])
            }

            /// Bounds-checked component write.
            #[inline]
            pub fn set(&mut self, index: usize, value: T) -> Result<()> {
                check_index(index, $n)?;
                self[index] = value;
                Ok(())
            }
        }

        impl<T: Real> Components for $v<T> {
            type Scalar = T;

            #[inline]
            fn map(self, f: impl Fn(T) -> T) -> $v<T> {
                $v { $( $e: f(self.$e), )* }
            }

            #[inline]
            fn zip_map(self, other: $v<T>, f: impl Fn(T, T) -> T) -> $v<T> {
                $v { $( $e: f(self.$e, other.$e), )* }
            }
        }

        impl<T: Real> InnerProduct for $v<T> {
            #[inline]
            fn dot(self, other: $v<T>) -> T {
                T::ZERO $( + self.$e * other.$e )*
            }
        }

        impl<T: Real> ApproxEq for $v<T> {
            type Scalar = T;

            #[inline]
            fn approx_eq(&self, other: &$v<T>, threshold: T) -> bool {
                $( equal(self.$e, other.$e, threshold) )&&*
            }
        }

        impl<T: Real> PartialEq for $v<T> {
            #[inline]
            fn eq(&self, other: &$v<T>) -> bool {
                self.approx_eq(other, T::THRESHOLD)
            }
        }

        impl<T> ops::Index<usize> for $v<T> {
            type Output = T;

            #[inline]
            fn index(&self, index: usize) -> &T {
                match index {
                    $( $i => &self.$e, )*
                    _ => panic!("{} index {} out of range", stringify!($v), index),
                }
            }
        }

        impl<T> ops::IndexMut<usize> for $v<T> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut T {
                match index {
                    $( $i => &mut self.$e, )*
                    _ => panic!("{} index {} out of range", stringify!($v), index),
                }
            }
        }

        impl<T> From<[T; $n]> for $v<T> {
            #[inline]
            fn from(a: [T; $n]) -> $v<T> {
                let [$( $e, )*] = a;
                $v { $( $e, )* }
            }
        }

        impl<T> From<$v<T>> for [T; $n] {
            #[inline]
            fn from(v: $v<T>) -> [T; $n] {
                [$( v.$e, )*]
            }
        }

        impl<T: Real> fmt::Display for $v<T> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}({})", stringify!($v),
                        [$(
                           format!("{:.prec$}", self.$e, prec = f.precision().unwrap_or(3)),
                        )*].join(", "))
            }
        }

        impl<T: Real> ops::Neg for $v<T> {
            type Output = $v<T>;

            #[inline]
            fn neg(self) -> $v<T> {
                $v { $( $e: -self.$e, )* }
            }
        }

        vec_op_impl!(Add, add, $v, $($e),*);
        vec_op_impl!(Sub, sub, $v, $($e),*);
        vec_op_impl!(Mul, mul, $v, $($e),*);
        vec_op_impl!(Div, div, $v, $($e),*);

        scalar_op_impl!(Add, add, $v, $($e),*);
        scalar_op_impl!(Sub, sub, $v, $($e),*);
        scalar_op_impl!(Mul, mul, $v, $($e),*);
        scalar_op_impl!(Div, div, $v, $($e),*);

        vec_assign_op_impl!(AddAssign, add_assign, Add, add, $v);
        vec_assign_op_impl!(SubAssign, sub_assign, Sub, sub, $v);
        vec_assign_op_impl!(MulAssign, mul_assign, Mul, mul, $v);
        vec_assign_op_impl!(DivAssign, div_assign, Div, div, $v);

        scalar_lhs_op_impl!(Add, add, $v, f32, $($e),*);
        scalar_lhs_op_impl!(Sub, sub, $v, f32, $($e),*);
        scalar_lhs_op_impl!(Mul, mul, $v, f32, $($e),*);
        scalar_lhs_op_impl!(Div, div, $v, f32, $($e),*);
        scalar_lhs_op_impl!(Add, add, $v, f64, $($e),*);
        scalar_lhs_op_impl!(Sub, sub, $v, f64, $($e),*);
        scalar_lhs_op_impl!(Mul, mul, $v, f64, $($e),*);
        scalar_lhs_op_impl!(Div, div, $v, f64, $($e),*);
    }
}

vec_impl!(Vec2, 2, x = 0, y = 1);
vec_impl!(Vec3, 3, x = 0, y = 1, z = 2);
vec_impl!(Vec4, 4, x = 0, y = 1, z = 2, w = 3);

impl<T: Real> Vec2<T> {
    #[inline]
    pub fn extend(self, z: T) -> Vec3<T> {
        Vec3::new(self.x, self.y, z)
    }
}

impl<T: Real> Vec3<T> {
    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, b: Vec3<T>) -> Vec3<T> {
        Vec3 {
            x: self.y * b.z - self.z * b.y,
            y: self.z * b.x - self.x * b.z,
            z: self.x * b.y - self.y * b.x,
        }
    }

    #[inline]
    pub fn extend(self, w: T) -> Vec4<T> {
        Vec4::new(self.x, self.y, self.z, w)
    }
}

impl<T: Real> Vec4<T> {
    /// Homogeneous point: `w = 1`, so translations apply.
    #[inline]
    pub fn from_point(p: Vec3<T>) -> Vec4<T> {
        p.extend(T::ONE)
    }

    /// Homogeneous direction: `w = 0`, so translations are ignored.
    #[inline]
    pub fn from_direction(d: Vec3<T>) -> Vec4<T> {
        d.extend(T::ZERO)
    }

    #[inline]
    pub fn xyz(self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }
}
