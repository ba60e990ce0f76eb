//! Segment location, index casts, and worker-pool plumbing

use crate::error::{IndexError, Result};

/// Below this many index-list entries the indexers run sequentially;
/// pool overhead dominates on small batches.
pub const SMALL_NNZ_LIMIT: usize = 32 * 1024;

/// Convert i64 to usize, asserting non-negativity.
#[inline]
#[must_use]
pub fn i64_to_usize(x: i64) -> usize {
    debug_assert!(x >= 0);
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    {
        x as usize
    }
}

/// The `[start, end)` window of `indices`/`data` belonging to one
/// major-axis index, or `None` when `major` has no segment in the offset
/// table (callers report the coordinate as missing rather than indexing
/// out of bounds).
#[inline]
#[must_use]
pub fn segment_bounds(indptr: &[i64], major: usize) -> Option<(usize, usize)> {
    if major + 1 >= indptr.len() {
        return None;
    }
    Some((i64_to_usize(indptr[major]), i64_to_usize(indptr[major + 1])))
}

/// Run `f` on the global rayon pool (`workers = None`, the "use default"
/// sentinel) or inside a freshly built pool of `n` threads.
pub fn run_with_workers<T: Send>(
    workers: Option<usize>,
    f: impl FnOnce() -> T + Send,
) -> Result<T> {
    match workers {
        None => Ok(f()),
        Some(n) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| IndexError::WorkerPool(e.to_string()))?;
            Ok(pool.install(f))
        }
    }
}
