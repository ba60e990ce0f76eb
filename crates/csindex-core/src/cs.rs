//! Compressed sparse matrix storage, row- or column-major

/// Which axis the offset table compresses.
///
/// `RowMajor` is CSR (offsets per row, `indices` holds columns),
/// `ColMajor` is CSC (offsets per column, `indices` holds rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    RowMajor,
    ColMajor,
}

/// A compressed sparse matrix in either CSR or CSC form.
///
/// `indptr` has length `n_major() + 1`; `indptr[i]..indptr[i + 1]` windows
/// `indices`/`data` for major-axis index `i`. Within each window the minor
/// indices are sorted ascending and may repeat. The kernels never resize
/// these arrays; `data` is only mutated in place through operators.
#[derive(Debug, Clone)]
pub struct Cs<T, I> {
    pub layout: Layout,
    pub nrows: usize,
    pub ncols: usize,
    pub indptr: Vec<I>,
    pub indices: Vec<I>,
    pub data: Vec<T>,
}

impl<T, I> Cs<T, I> {
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    #[inline]
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    /// Extent of the compressed (offset-table) axis.
    #[inline]
    #[must_use]
    pub const fn n_major(&self) -> usize {
        match self.layout {
            Layout::RowMajor => self.nrows,
            Layout::ColMajor => self.ncols,
        }
    }

    /// Extent of the per-entry (`indices`) axis.
    #[inline]
    #[must_use]
    pub const fn n_minor(&self) -> usize {
        match self.layout {
            Layout::RowMajor => self.ncols,
            Layout::ColMajor => self.nrows,
        }
    }
}

impl Cs<f64, i64> {
    pub fn from_parts(
        layout: Layout,
        nrows: usize,
        ncols: usize,
        indptr: Vec<i64>,
        indices: Vec<i64>,
        data: Vec<f64>,
        check: bool,
    ) -> Result<Self, String> {
        let n_major = match layout {
            Layout::RowMajor => nrows,
            Layout::ColMajor => ncols,
        };
        let n_minor = match layout {
            Layout::RowMajor => ncols,
            Layout::ColMajor => nrows,
        };
        if indptr.len() != n_major + 1 {
            return Err("indptr length must be n_major + 1".into());
        }
        if indices.len() != data.len() {
            return Err("indices and data must have equal length".into());
        }
        let nnz = indices.len();
        if indptr.first().copied().unwrap_or(0) != 0 {
            return Err("indptr first element must be 0".into());
        }
        if indptr.last().copied().unwrap_or(0) as usize != nnz {
            return Err("indptr last element must equal nnz".into());
        }
        if check {
            for w in indptr.windows(2) {
                if w[0] < 0 || w[1] < 0 {
                    return Err("indptr must be non-negative".into());
                }
                if w[0] > w[1] {
                    return Err("indptr must be non-decreasing".into());
                }
            }
            for i in 0..n_major {
                let start = indptr[i] as usize;
                let end = indptr[i + 1] as usize;
                if start > nnz || end > nnz {
                    return Err("indptr elements must be within [0, nnz]".into());
                }
                let mut prev = -1i64;
                for &j in &indices[start..end] {
                    if j < 0 || j as usize >= n_minor {
                        return Err("minor index out of bounds".into());
                    }
                    // Duplicates are allowed; only strict decreases are malformed.
                    if j < prev {
                        return Err("minor indices must be non-decreasing within each segment".into());
                    }
                    prev = j;
                }
            }
        }
        Ok(Self {
            layout,
            nrows,
            ncols,
            indptr,
            indices,
            data,
        })
    }

    #[inline]
    #[must_use]
    pub const fn from_parts_unchecked(
        layout: Layout,
        nrows: usize,
        ncols: usize,
        indptr: Vec<i64>,
        indices: Vec<i64>,
        data: Vec<f64>,
    ) -> Self {
        Self {
            layout,
            nrows,
            ncols,
            indptr,
            indices,
            data,
        }
    }
}
