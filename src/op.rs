use log::{debug, trace};

use crate::dense::{Dense, VecDense};
use crate::error::{MResult, MatError};
use crate::matrix::{Matrix, Mutable, MutableVector, RawRowView, Vector};
use crate::Element;

#[inline]
fn count_as<T: Element>(n: usize) -> MResult<T> {
    T::from(n).ok_or_else(|| MatError::Unexpected(format!("count {} not representable", n)))
}

/// Index of the first maximum of `v`.
///
/// The scan starts from position 0 and only moves on a strictly greater
/// value, so ties resolve to the earliest index and NaN never wins.
pub fn index_of_max<T, V>(v: &V) -> MResult<usize>
where
    T: Element,
    V: Vector<T> + ?Sized,
{
    if v.is_empty() {
        debug!("index_of_max: empty vector");
        return Err(MatError::IndexOutOfRange {
            index: 0,
            len: 0,
            op: "index_of_max",
        });
    }
    let (mut max, mut idx) = (v.at_vec(0)?, 0);
    for i in 1..v.len() {
        let x = v.at_vec(i)?;
        if x > max {
            max = x;
            idx = i;
        }
    }
    Ok(idx)
}

/// Element-wise arithmetic mean of a non-empty slice of equal-length
/// vectors: the sum scaled by `1 / n`.
pub fn mean_of_vectors<T, V>(vectors: &[V]) -> MResult<VecDense<T>>
where
    T: Element,
    V: Vector<T>,
{
    const OP: &str = "mean_of_vectors";
    let first = vectors.first().ok_or_else(|| {
        debug!("{}: no vectors", OP);
        MatError::EmptyInput { op: OP }
    })?;
    let n = first.len();
    trace!("{}: {} vectors of length {}", OP, vectors.len(), n);

    if let Some(v) = vectors.iter().find(|v| v.len() != n) {
        debug!("{}: length {} does not match {}", OP, v.len(), n);
        return Err(MatError::ShapeMismatch {
            expected: (n, 1),
            got: (v.len(), 1),
            op: OP,
        });
    }

    let mut mean = VecDense::zeros(n);
    for v in vectors {
        mean.add_vec(v)?;
    }
    let count = count_as::<T>(vectors.len())?;
    mean.scale_vec(T::one() / count);
    Ok(mean)
}

/// Element-wise arithmetic mean of a non-empty slice of equally shaped
/// matrices.
pub fn mean_of_matrices<T, M>(matrices: &[M]) -> MResult<Dense<T>>
where
    T: Element,
    M: Matrix<T>,
{
    const OP: &str = "mean_of_matrices";
    let first = matrices.first().ok_or_else(|| {
        debug!("{}: no matrices", OP);
        MatError::EmptyInput { op: OP }
    })?;
    let (r, c) = first.dims();
    trace!("{}: {} matrices of {}x{}", OP, matrices.len(), r, c);

    if let Some(m) = matrices.iter().find(|m| m.dims() != (r, c)) {
        debug!("{}: shape {:?} does not match {:?}", OP, m.dims(), (r, c));
        return Err(MatError::ShapeMismatch {
            expected: (r, c),
            got: m.dims(),
            op: OP,
        });
    }

    let mut mean = Dense::zeros(r, c);
    for m in matrices {
        mean.add(m)?;
    }
    let count = count_as::<T>(matrices.len())?;
    mean.scale(T::one() / count)?;
    Ok(mean)
}

/// Replaces every cell of `m` with `f(cell)`, row by row.
pub fn apply_elementwise<T, M, F>(mut f: F, m: &mut M) -> MResult<()>
where
    T: Element,
    M: Mutable<T> + ?Sized,
    F: FnMut(T) -> T,
{
    let (r, c) = m.dims();
    for i in 0..r {
        for j in 0..c {
            let v = f(m.at(i, j)?);
            m.set(i, j, v)?;
        }
    }
    Ok(())
}

/// Arithmetic mean of each row. A matrix with rows but no columns has no
/// defined row mean and is rejected.
pub fn row_means<T, M>(m: &M) -> MResult<VecDense<T>>
where
    T: Element,
    M: RawRowView<T> + ?Sized,
{
    let (r, c) = m.dims();
    if r > 0 && c == 0 {
        debug!("row_means: {}x0 matrix", r);
        return Err(MatError::DegenerateInput {
            op: "row_means",
            msg: "mean of zero columns",
        });
    }
    let mut means = Vec::with_capacity(r);
    if r > 0 {
        let count = count_as::<T>(c)?;
        for i in 0..r {
            let sum = m
                .raw_row_view(i)?
                .iter()
                .fold(T::zero(), |acc, &x| acc + x);
            means.push(sum / count);
        }
    }
    Ok(VecDense::from_vec(means))
}

/// Clamps every element of `v` into `[lower, upper]` in place.
///
/// Fails without touching `v` when `lower > upper` or either bound is NaN.
pub fn clip_vector<T, V>(v: &mut V, lower: T, upper: T) -> MResult<()>
where
    T: Element,
    V: MutableVector<T> + ?Sized,
{
    if !(lower <= upper) {
        debug!("clip_vector: rejected bounds [{}, {}]", lower, upper);
        return Err(MatError::InvalidBounds {
            lower: lower.to_string(),
            upper: upper.to_string(),
        });
    }
    for x in v.raw_vector_mut() {
        if *x < lower {
            *x = lower;
        } else if *x > upper {
            *x = upper;
        }
    }
    Ok(())
}

/// `x = floor(x / divisor)` for every element of `v`, in place.
///
/// Fails without touching `v` when `divisor` is zero.
pub fn floor_divide_vector<T, V>(v: &mut V, divisor: T) -> MResult<()>
where
    T: Element,
    V: MutableVector<T> + ?Sized,
{
    if divisor == T::zero() {
        debug!("floor_divide_vector: zero divisor");
        return Err(MatError::DegenerateInput {
            op: "floor_divide_vector",
            msg: "division by zero",
        });
    }
    v.raw_vector_mut()
        .iter_mut()
        .for_each(|x| *x = (*x / divisor).floor());
    Ok(())
}

pub fn ones_vector<T: Element>(len: usize) -> VecDense<T> {
    VecDense::from_elem(len, T::one())
}
