//! Batch transforms over slices of vectors.
//!
//! With the `rayon` feature (on by default) the slice is split across the
//! global Rayon pool; without it the same loop runs serially. Either way each
//! vector is transformed independently and in place, so no buffer is
//! allocated.

use crate::core::traits::Real;
use crate::matrix::Mat4;
use crate::transform::{Convention, transform};
use crate::vector::Vec4;

/// Transform every vector of `vectors` in place by `m` under `convention`.
pub fn transform_batch<T: Real>(vectors: &mut [Vec4<T>], m: &Mat4<T>, convention: Convention) {
    log::trace!("transforming {} vectors ({:?})", vectors.len(), convention);
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        vectors
            .par_iter_mut()
            .for_each(|v| *v = transform(*v, m, convention));
    }
    #[cfg(not(feature = "rayon"))]
    {
        vectors
            .iter_mut()
            .for_each(|v| *v = transform(*v, m, convention));
    }
}
