//! Capability traits the helpers are written against.
//!
//! A backend only has to expose dimensions, checked get/set and, for
//! row reductions, a contiguous view of each row. Element-wise add and
//! scale have default implementations on top of get/set.

use crate::error::{MResult, MatError};
use crate::Element;

pub trait Matrix<T: Element> {
    /// `(rows, cols)`
    fn dims(&self) -> (usize, usize);

    fn at(&self, i: usize, j: usize) -> MResult<T>;
}

pub trait Mutable<T: Element>: Matrix<T> {
    fn set(&mut self, i: usize, j: usize, v: T) -> MResult<()>;

    /// `self += other`, element-wise. Shapes must match; `self` is left
    /// untouched when they don't.
    fn add<M>(&mut self, other: &M) -> MResult<()>
    where
        M: Matrix<T> + ?Sized,
        Self: Sized,
    {
        let (r, c) = check_same_dims(self.dims(), other.dims(), "add")?;
        for i in 0..r {
            for j in 0..c {
                let v = self.at(i, j)? + other.at(i, j)?;
                self.set(i, j, v)?;
            }
        }
        Ok(())
    }

    fn scale(&mut self, f: T) -> MResult<()> {
        let (r, c) = self.dims();
        for i in 0..r {
            for j in 0..c {
                let v = self.at(i, j)? * f;
                self.set(i, j, v)?;
            }
        }
        Ok(())
    }
}

/// Row-major backends that can hand out a row without copying.
pub trait RawRowView<T: Element>: Matrix<T> {
    fn raw_row_view(&self, i: usize) -> MResult<&[T]>;
}

pub trait Vector<T: Element> {
    fn len(&self) -> usize;

    fn at_vec(&self, i: usize) -> MResult<T>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait MutableVector<T: Element>: Vector<T> {
    fn set_vec(&mut self, i: usize, v: T) -> MResult<()>;

    fn raw_vector_mut(&mut self) -> &mut [T];

    /// `self += other`, element-wise. Lengths must match; `self` is left
    /// untouched when they don't.
    fn add_vec<V>(&mut self, other: &V) -> MResult<()>
    where
        V: Vector<T> + ?Sized,
        Self: Sized,
    {
        check_same_dims((self.len(), 1), (other.len(), 1), "add_vec")?;
        for (i, x) in self.raw_vector_mut().iter_mut().enumerate() {
            *x = *x + other.at_vec(i)?;
        }
        Ok(())
    }

    fn scale_vec(&mut self, f: T) {
        self.raw_vector_mut().iter_mut().for_each(|x| *x = *x * f);
    }
}

#[inline]
pub(crate) fn check_index(index: usize, len: usize, op: &'static str) -> MResult<()> {
    if index >= len {
        return Err(MatError::IndexOutOfRange { index, len, op });
    }
    Ok(())
}

#[inline]
pub(crate) fn check_same_dims(
    expected: (usize, usize),
    got: (usize, usize),
    op: &'static str,
) -> MResult<(usize, usize)> {
    if expected != got {
        return Err(MatError::ShapeMismatch { expected, got, op });
    }
    Ok(expected)
}

impl<T: Element> Vector<T> for Vec<T> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn at_vec(&self, i: usize) -> MResult<T> {
        check_index(i, self.as_slice().len(), "at_vec")?;
        Ok(self[i])
    }
}

impl<T: Element> MutableVector<T> for Vec<T> {
    fn set_vec(&mut self, i: usize, v: T) -> MResult<()> {
        check_index(i, self.as_slice().len(), "set_vec")?;
        self[i] = v;
        Ok(())
    }

    fn raw_vector_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
