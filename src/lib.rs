//! Small helpers for dense matrices and vectors: display formatting,
//! argmax, element-wise means, row means, in-place apply, clipping and
//! floor division.
//!
//! The helpers are written against the traits in [`matrix`], so any backend
//! that exposes dims, checked get/set and (for row reductions) row slices can
//! be used. [`Dense`] and [`VecDense`] are the bundled row-major backends.

mod dense;
mod error;
pub mod format;
pub mod matrix;
mod op;

use std::fmt;

use num_traits::Float;

pub use dense::{Dense, VecDense};
pub use error::{MResult, MatError};
pub use format::{format, FormatOptions, Formatted};
pub use matrix::{Matrix, Mutable, MutableVector, RawRowView, Vector};
pub use op::{
    apply_elementwise, clip_vector, floor_divide_vector, index_of_max, mean_of_matrices,
    mean_of_vectors, ones_vector, row_means,
};

pub trait Element: Float + fmt::Display + fmt::Debug {}

impl<T> Element for T where T: Float + fmt::Display + fmt::Debug {}

#[macro_export]
macro_rules! dense {
    ($([$($x:expr),* $(,)*]),+ $(,)*) => {{
        $crate::Dense::from_rows(&[$([$($x,)*],)*])
    }};
}

#[macro_export]
macro_rules! vec_dense {
    ($($x:expr),* $(,)*) => {{
        $crate::VecDense::from_vec(vec![$($x,)*])
    }};
}

pub fn mat<T: Element, const N: usize>(xs: &[[T; N]]) -> Dense<T> {
    Dense::from_rows(xs)
}

pub fn arr<T: Element>(xs: &[T]) -> VecDense<T> {
    VecDense::from_vec(xs.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macros() {
        let m = dense![[1.0, 2.0], [3.0, 4.0]];
        assert_eq!(m, mat(&[[1.0, 2.0], [3.0, 4.0]]));

        let v = vec_dense![1.0f32, 2.0, 3.0];
        assert_eq!(v, arr(&[1.0f32, 2.0, 3.0]));
    }

    #[test]
    fn test_workflow() {
        let ms = vec![
            dense![[1.0, 2.0], [3.0, 4.0]],
            dense![[3.0, 4.0], [5.0, 6.0]],
        ];
        let mut mean = mean_of_matrices(&ms).unwrap();
        apply_elementwise(|x: f64| x * 10.0, &mut mean).unwrap();

        let rm = row_means(&mean).unwrap();
        assert_eq!(rm.as_slice(), &[25.0, 45.0]);
        assert_eq!(index_of_max(&rm).unwrap(), 1);
        assert_eq!(format(&mean), "⎡20  30⎤\n⎣40  50⎦");
    }
}
