//! Operators applied between a stored matrix cell and an index-list slot
//!
//! The operator is the only code path touching shared storage, so the
//! atomic-access contract lives here. Two coordinates may resolve to the
//! same stored cell (duplicate minors within a segment, or duplicate
//! coordinates in the index list):
//!
//! - `Get` reads the shared cell and writes a private index-list slot, so
//!   it needs no synchronization.
//! - `Set` stores atomically; whichever concurrent writer lands last wins.
//! - `Add` is a compare-exchange loop over the cell's bits; contributions
//!   commute, so the final value is deterministic up to floating-point
//!   summation order (which varies with worker count).

use std::sync::atomic::{AtomicU64, Ordering};

/// The closed set of operators, replacing raw callable dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// stored -> external (read)
    Get,
    /// external -> stored (overwrite, last writer wins)
    Set,
    /// stored += external (accumulate, commutative)
    Add,
}

impl Op {
    /// Apply between one stored cell and one index-list slot from a
    /// parallel loop.
    ///
    /// # Safety
    ///
    /// `stored` and `external` must be valid, 8-aligned, and in bounds for
    /// the duration of the call; `external` must not be aliased by any
    /// other concurrent access. `stored` may be shared across workers.
    #[inline]
    pub(crate) unsafe fn apply_shared(self, stored: *mut f64, external: *mut f64) {
        match self {
            // No concurrent writer touches `data` during a Get call.
            Self::Get => *external = *stored,
            Self::Set => atomic_view(stored).store((*external).to_bits(), Ordering::Relaxed),
            Self::Add => atomic_add_f64(atomic_view(stored), *external),
        }
    }
}

/// Reinterpret an f64 cell as its atomic bit pattern.
///
/// # Safety
///
/// `p` must be valid and 8-aligned; all concurrent accesses to the cell
/// for the lifetime of the reference must go through atomics.
#[inline]
unsafe fn atomic_view<'a>(p: *mut f64) -> &'a AtomicU64 {
    &*p.cast::<AtomicU64>()
}

#[inline]
fn atomic_add_f64(cell: &AtomicU64, v: f64) {
    let mut cur = cell.load(Ordering::Relaxed);
    loop {
        let next = (f64::from_bits(cur) + v).to_bits();
        match cell.compare_exchange_weak(cur, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return,
            Err(now) => cur = now,
        }
    }
}
