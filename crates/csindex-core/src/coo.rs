//! Coordinate-format index list and its layout-agnostic axis view

use crate::cs::Layout;

/// A coordinate list of `(row, col, value)` triples.
///
/// Used as the index list driving the kernels: `data` is read by the
/// overwrite/accumulate operators and written by the read operator.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Coo<T, I> {
    pub row: Vec<I>, // length nnz
    pub col: Vec<I>, // length nnz
    pub data: Vec<T>,
    pub nrows: usize,
    pub ncols: usize,
}

impl<T, I> Coo<T, I> {
    #[inline]
    #[must_use]
    pub const fn nnz(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// `(major, minor)` slices for the given matrix layout.
    ///
    /// Zero-copy projection over `row`/`col`: `(row, col)` when the matrix
    /// is row-major, `(col, row)` when it is column-major, so the kernels
    /// are written once against the major/minor pair.
    #[inline]
    #[must_use]
    pub fn axes(&self, layout: Layout) -> (&[I], &[I]) {
        match layout {
            Layout::RowMajor => (&self.row, &self.col),
            Layout::ColMajor => (&self.col, &self.row),
        }
    }
}

impl Coo<f64, i64> {
    #[inline]
    pub fn from_parts(
        nrows: usize,
        ncols: usize,
        row: Vec<i64>,
        col: Vec<i64>,
        data: Vec<f64>,
        check: bool,
    ) -> Result<Self, String> {
        if row.len() != data.len() || col.len() != data.len() {
            return Err("row/col/data must have equal length".into());
        }
        if check {
            let nnz = data.len();
            for k in 0..nnz {
                let i = row[k];
                let j = col[k];
                if i < 0 || j < 0 {
                    return Err("indices must be non-negative".into());
                }
                let ok_i = usize::try_from(i).is_ok_and(|ii| ii < nrows);
                let ok_j = usize::try_from(j).is_ok_and(|jj| jj < ncols);
                if !ok_i || !ok_j {
                    return Err("indices out of bounds".into());
                }
            }
        }
        Ok(Self {
            row,
            col,
            data,
            nrows,
            ncols,
        })
    }

    #[inline]
    #[must_use]
    pub const fn from_parts_unchecked(
        nrows: usize,
        ncols: usize,
        row: Vec<i64>,
        col: Vec<i64>,
        data: Vec<f64>,
    ) -> Self {
        Self {
            row,
            col,
            data,
            nrows,
            ncols,
        }
    }
}
