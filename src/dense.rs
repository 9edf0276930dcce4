use std::fmt;

use crate::error::{MResult, MatError};
use crate::format::{FormatOptions, Formatted};
use crate::matrix::{
    check_index, check_same_dims, Matrix, Mutable, MutableVector, RawRowView, Vector,
};
use crate::Element;

/// Row-major dense matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Dense<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Element> Dense<T> {
    pub fn from_elem(rows: usize, cols: usize, s: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![s; rows * cols],
        }
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, T::zero())
    }

    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> MResult<Self> {
        if data.len() != rows * cols {
            return Err(MatError::LengthMismatch {
                expected: rows * cols,
                got: data.len(),
                op: "from_vec",
            });
        }
        Ok(Self { rows, cols, data })
    }

    pub fn from_rows<const N: usize>(xs: &[[T; N]]) -> Self {
        let data = xs.iter().flat_map(|r| r.iter().copied()).collect();
        Self {
            rows: xs.len(),
            cols: N,
            data,
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> MResult<usize> {
        check_index(i, self.rows, "row")?;
        check_index(j, self.cols, "col")?;
        Ok(i * self.cols + j)
    }
}

impl<T: Element> Matrix<T> for Dense<T> {
    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn at(&self, i: usize, j: usize) -> MResult<T> {
        Ok(self.data[self.offset(i, j)?])
    }
}

impl<T: Element> Mutable<T> for Dense<T> {
    fn set(&mut self, i: usize, j: usize, v: T) -> MResult<()> {
        let off = self.offset(i, j)?;
        self.data[off] = v;
        Ok(())
    }

    fn add<M>(&mut self, other: &M) -> MResult<()>
    where
        M: Matrix<T> + ?Sized,
        Self: Sized,
    {
        check_same_dims((self.rows, self.cols), other.dims(), "add")?;
        for i in 0..self.rows {
            let row = &mut self.data[i * self.cols..(i + 1) * self.cols];
            for (j, x) in row.iter_mut().enumerate() {
                *x = *x + other.at(i, j)?;
            }
        }
        Ok(())
    }

    fn scale(&mut self, f: T) -> MResult<()> {
        self.data.iter_mut().for_each(|x| *x = *x * f);
        Ok(())
    }
}

impl<T: Element> RawRowView<T> for Dense<T> {
    fn raw_row_view(&self, i: usize) -> MResult<&[T]> {
        check_index(i, self.rows, "raw_row_view")?;
        let idx = i * self.cols;
        Ok(&self.data[idx..(idx + self.cols)])
    }
}

impl<T: Element> fmt::Display for Dense<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Formatted::new(self, FormatOptions::default()))
    }
}

/// Dense column vector.
#[derive(Clone, Debug, PartialEq)]
pub struct VecDense<T> {
    data: Vec<T>,
}

impl<T: Element> VecDense<T> {
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn from_elem(n: usize, s: T) -> Self {
        Self::from_vec(vec![s; n])
    }

    pub fn zeros(n: usize) -> Self {
        Self::from_elem(n, T::zero())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Element> From<Vec<T>> for VecDense<T> {
    fn from(v: Vec<T>) -> Self {
        Self::from_vec(v)
    }
}

impl<T: Element> Vector<T> for VecDense<T> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn at_vec(&self, i: usize) -> MResult<T> {
        check_index(i, self.data.len(), "at_vec")?;
        Ok(self.data[i])
    }
}

impl<T: Element> MutableVector<T> for VecDense<T> {
    fn set_vec(&mut self, i: usize, v: T) -> MResult<()> {
        check_index(i, self.data.len(), "set_vec")?;
        self.data[i] = v;
        Ok(())
    }

    fn raw_vector_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

// A vector formats as a single column.
impl<T: Element> Matrix<T> for VecDense<T> {
    fn dims(&self) -> (usize, usize) {
        (self.data.len(), 1)
    }

    fn at(&self, i: usize, j: usize) -> MResult<T> {
        check_index(j, 1, "col")?;
        self.at_vec(i)
    }
}

impl<T: Element> fmt::Display for VecDense<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Formatted::new(self, FormatOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{arr, mat};

    #[test]
    fn test_from_vec_len() {
        let m = Dense::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m, mat(&[[1.0, 2.0], [3.0, 4.0]]));
        assert_eq!(
            Dense::<f64>::from_vec(2, 2, vec![1.0]).unwrap_err(),
            MatError::LengthMismatch {
                expected: 4,
                got: 1,
                op: "from_vec"
            }
        );
    }

    #[test]
    fn test_at_set() {
        let mut m = Dense::<f64>::zeros(2, 3);
        m.set(1, 2, 7.0).unwrap();
        assert_eq!(m.at(1, 2).unwrap(), 7.0);
        assert_eq!(m.as_slice(), &[0.0, 0.0, 0.0, 0.0, 0.0, 7.0]);
        assert_eq!(
            m.at(2, 0),
            Err(MatError::IndexOutOfRange {
                index: 2,
                len: 2,
                op: "row"
            })
        );
        assert!(m.set(0, 3, 1.0).is_err());
    }

    #[test]
    fn test_add_scale() {
        let mut m = mat(&[[1.0, 2.0], [3.0, 4.0]]);
        m.add(&mat(&[[1.0, 1.0], [1.0, 1.0]])).unwrap();
        m.scale(2.0).unwrap();
        assert_eq!(m, mat(&[[4.0, 6.0], [8.0, 10.0]]));

        let err = m.add(&Dense::zeros(2, 3)).unwrap_err();
        assert_eq!(
            err,
            MatError::ShapeMismatch {
                expected: (2, 2),
                got: (2, 3),
                op: "add"
            }
        );
        // untouched on mismatch
        assert_eq!(m, mat(&[[4.0, 6.0], [8.0, 10.0]]));
    }

    #[test]
    fn test_raw_row_view() {
        let m = mat(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(m.raw_row_view(1).unwrap(), &[4.0, 5.0, 6.0]);
        assert!(m.raw_row_view(2).is_err());
    }

    #[test]
    fn test_vec_add_scale() {
        let mut v = arr(&[1.0, 2.0]);
        v.add_vec(&vec![0.5, 0.5]).unwrap();
        v.scale_vec(2.0);
        assert_eq!(v.as_slice(), &[3.0, 5.0]);
        assert!(v.add_vec(&arr(&[1.0])).is_err());
    }

    #[test]
    fn test_vec_as_matrix() {
        let v = arr(&[1.0f32, 2.0]);
        assert_eq!(Matrix::dims(&v), (2, 1));
        assert_eq!(v.at(1, 0).unwrap(), 2.0);
        assert!(v.at(0, 1).is_err());
    }
}
