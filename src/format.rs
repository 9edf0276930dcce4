use std::fmt;
use std::marker::PhantomData;

use log::debug;

use crate::matrix::Matrix;
use crate::Element;

const COL_SEP: &str = "  ";

/// Layout knobs for [`Formatted`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    prefix: String,
    squeeze: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            squeeze: true,
        }
    }
}

impl FormatOptions {
    /// Written at the start of every line but the first.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Size each column to its own widest entry instead of the widest entry
    /// of the whole matrix.
    pub fn squeeze(mut self, squeeze: bool) -> Self {
        self.squeeze = squeeze;
        self
    }
}

/// Display adapter that renders a matrix as a bracketed grid:
///
/// ```text
/// ⎡1  2⎤
/// ⎣3  4⎦
/// ```
pub struct Formatted<'a, T, M: ?Sized> {
    m: &'a M,
    opts: FormatOptions,
    _elem: PhantomData<fn() -> T>,
}

impl<'a, T, M> Formatted<'a, T, M>
where
    T: Element,
    M: Matrix<T> + ?Sized,
{
    pub fn new(m: &'a M, opts: FormatOptions) -> Self {
        Self {
            m,
            opts,
            _elem: PhantomData,
        }
    }
}

impl<'a, T, M> fmt::Display for Formatted<'a, T, M>
where
    T: Element,
    M: Matrix<T> + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.m.dims();
        if rows == 0 || cols == 0 {
            return f.write_str("[]");
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                let v = self.m.at(i, j).map_err(|e| {
                    debug!("format: {}", e);
                    fmt::Error
                })?;
                cells.push(v.to_string());
            }
        }

        let mut widths = vec![0usize; cols];
        for (k, s) in cells.iter().enumerate() {
            let w = &mut widths[k % cols];
            *w = (*w).max(s.chars().count());
        }
        if !self.opts.squeeze {
            let max = widths.iter().copied().max().unwrap_or(0);
            widths.iter_mut().for_each(|w| *w = max);
        }

        for (i, row) in cells.chunks(cols).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
                f.write_str(&self.opts.prefix)?;
            }
            let (open, close) = brackets(i, rows);
            f.write_str(open)?;
            for (j, s) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(COL_SEP)?;
                }
                write!(f, "{:>w$}", s, w = widths[j])?;
            }
            f.write_str(close)?;
        }
        Ok(())
    }
}

fn brackets(i: usize, rows: usize) -> (&'static str, &'static str) {
    match i {
        _ if rows == 1 => ("[", "]"),
        0 => ("⎡", "⎤"),
        i if i == rows - 1 => ("⎣", "⎦"),
        _ => ("⎢", "⎥"),
    }
}

/// Renders `m` with no prefix and squeezed columns.
pub fn format<T, M>(m: &M) -> String
where
    T: Element,
    M: Matrix<T> + ?Sized,
{
    Formatted::new(m, FormatOptions::default()).to_string()
}
