//! Coordinate-driven and sorted-merge indexing into a compressed matrix
//!
//! Both entry points mutate `m.data` / `ix.data` in place through the
//! operator and allocate nothing beyond per-call bookkeeping. A missing
//! coordinate aborts the call; effects already applied to other
//! coordinates are not rolled back.

use std::cmp::Ordering;

use csindex_core::{Coo, Cs, Layout};
use rayon::prelude::*;

use crate::error::{IndexError, Result};
use crate::ops::Op;
use crate::search::{first_occurrence, SearchKind};
use crate::util::{i64_to_usize, run_with_workers, segment_bounds, SMALL_NNZ_LIMIT};

#[inline]
fn not_found(layout: Layout, major: i64, minor: i64) -> IndexError {
    let (row, col) = match layout {
        Layout::RowMajor => (major, minor),
        Layout::ColMajor => (minor, major),
    };
    IndexError::CoordinateNotFound { row, col }
}

/// Apply `op` at every coordinate of `ix` by searching the matching
/// segment of `m`, one independent lookup per coordinate.
///
/// Accepts any index-list ordering. Coordinates are distributed across
/// workers with work stealing since search cost is data-dependent and
/// uneven; small batches run sequentially. `workers = None` uses the
/// runtime default parallelism.
pub fn index_by_search(
    m: &mut Cs<f64, i64>,
    ix: &mut Coo<f64, i64>,
    op: Op,
    kind: SearchKind,
    workers: Option<usize>,
) -> Result<()> {
    let nnz = ix.nnz();
    if nnz == 0 {
        return Ok(());
    }
    let layout = m.layout;
    let data_addr = m.data.as_mut_ptr() as usize;
    let indptr: &[i64] = &m.indptr;
    let indices: &[i64] = &m.indices;
    let vals_addr = ix.data.as_mut_ptr() as usize;
    let (axis0, axis1) = match layout {
        Layout::RowMajor => (&ix.row[..], &ix.col[..]),
        Layout::ColMajor => (&ix.col[..], &ix.row[..]),
    };

    let step = |k: usize| -> Result<()> {
        let major = axis0[k];
        let minor = axis1[k];
        if major < 0 || minor < 0 {
            return Err(not_found(layout, major, minor));
        }
        let (s, e) = segment_bounds(indptr, i64_to_usize(major))
            .ok_or_else(|| not_found(layout, major, minor))?;
        let seg = &indices[s..e];
        let (hit, _probes) = kind.search(seg, minor);
        let pos = hit.ok_or_else(|| not_found(layout, major, minor))?;
        let pos = first_occurrence(seg, pos);
        // Disjoint `ix.data[k]` slots; shared `m.data` cells go through
        // the operator's atomic contract.
        unsafe {
            let stored = (data_addr as *mut f64).add(s + pos);
            let external = (vals_addr as *mut f64).add(k);
            op.apply_shared(stored, external);
        }
        Ok(())
    };

    if nnz <= SMALL_NNZ_LIMIT {
        for k in 0..nnz {
            step(k)?;
        }
        return Ok(());
    }
    run_with_workers(workers, || (0..nnz).into_par_iter().try_for_each(step))?
}

/// Apply `op` at every coordinate of `ix` by merging each major-axis
/// group against its matrix segment with two cursors.
///
/// Precondition: `ix` is grouped non-decreasing by the major axis matching
/// `m.layout`, with minors non-decreasing within each group. Debug builds
/// fail fast on a decreasing major transition; release builds skip the
/// scan, and a violation then surfaces as `CoordinateNotFound` (the merge
/// cannot backtrack). Groups are independent parallel units; cost per
/// group is O(segment + run) rather than O(run * log segment).
pub fn index_by_merge(
    m: &mut Cs<f64, i64>,
    ix: &mut Coo<f64, i64>,
    op: Op,
    workers: Option<usize>,
) -> Result<()> {
    let nnz = ix.nnz();
    if nnz == 0 {
        return Ok(());
    }
    let layout = m.layout;
    let data_addr = m.data.as_mut_ptr() as usize;
    let indptr: &[i64] = &m.indptr;
    let indices: &[i64] = &m.indices;
    let vals_addr = ix.data.as_mut_ptr() as usize;
    let (axis0, axis1) = match layout {
        Layout::RowMajor => (&ix.row[..], &ix.col[..]),
        Layout::ColMajor => (&ix.col[..], &ix.row[..]),
    };

    if cfg!(debug_assertions) {
        for k in 1..nnz {
            if axis0[k] < axis0[k - 1] {
                return Err(IndexError::UnsortedIndexList { at: k });
            }
        }
    }

    // One pass to record where each major-axis group begins; read-only
    // during the parallel phase.
    let mut group_starts = Vec::new();
    for k in 0..nnz {
        if k == 0 || axis0[k] != axis0[k - 1] {
            group_starts.push(k);
        }
    }
    let ngroups = group_starts.len();
    let group_starts = &group_starts[..];

    let merge_group = |g: usize| -> Result<()> {
        let gs = group_starts[g];
        let ge = group_starts.get(g + 1).copied().unwrap_or(nnz);
        let major = axis0[gs];
        if major < 0 {
            return Err(not_found(layout, major, axis1[gs]));
        }
        let (s, e) = segment_bounds(indptr, i64_to_usize(major))
            .ok_or_else(|| not_found(layout, major, axis1[gs]))?;
        let mut sp = s; // matrix cursor
        let mut kp = gs; // index-list cursor
        while kp < ge && sp < e {
            match indices[sp].cmp(&axis1[kp]) {
                Ordering::Less => sp += 1,
                // The segment has moved past this minor: no stored entry.
                Ordering::Greater => return Err(not_found(layout, major, axis1[kp])),
                Ordering::Equal => {
                    // Matrix cursor stays put: one stored entry may satisfy
                    // several duplicate coordinates.
                    unsafe {
                        let stored = (data_addr as *mut f64).add(sp);
                        let external = (vals_addr as *mut f64).add(kp);
                        op.apply_shared(stored, external);
                    }
                    kp += 1;
                }
            }
        }
        if kp < ge {
            return Err(not_found(layout, major, axis1[kp]));
        }
        Ok(())
    };

    if nnz <= SMALL_NNZ_LIMIT {
        for g in 0..ngroups {
            merge_group(g)?;
        }
        return Ok(());
    }
    run_with_workers(workers, || {
        (0..ngroups).into_par_iter().try_for_each(merge_group)
    })?
}
