//! Error types for the indexing kernels

use thiserror::Error;

/// Result type alias using [`IndexError`].
pub type Result<T> = std::result::Result<T, IndexError>;

/// Failures surfaced by the indexers.
///
/// All of these are data-integrity conditions, not transient ones; the
/// kernels never retry, and effects already applied to other coordinates
/// before a failure are left in place.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// A requested `(row, col)` has no stored entry in the matrix.
    #[error("no stored entry at ({row}, {col})")]
    CoordinateNotFound { row: i64, col: i64 },

    /// The merge-mode index list is not grouped non-decreasing by the
    /// matrix's major axis (detected by the debug-build precondition scan).
    #[error("index list not sorted by major axis at entry {at}")]
    UnsortedIndexList { at: usize },

    /// The requested worker pool could not be built.
    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),
}
