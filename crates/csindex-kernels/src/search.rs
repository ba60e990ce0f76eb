//! Scalar search engines over one sorted minor-axis segment
//!
//! All three engines share the contract
//! `search(seg, target) -> (Option<position>, probes)`: `seg` is sorted
//! ascending (duplicates permitted), the position is any index holding
//! `target`, and the probe count is telemetry only. Callers wanting the
//! leftmost duplicate run the hit through [`first_occurrence`]; the
//! weighted engine already rewinds on its own.

use std::cmp::Ordering;

/// Which search engine the per-coordinate indexer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Binary,
    Interpolation,
    Weighted,
}

impl SearchKind {
    #[inline]
    #[must_use]
    pub fn search(self, seg: &[i64], target: i64) -> (Option<usize>, u32) {
        match self {
            Self::Binary => binary_search(seg, target),
            Self::Interpolation => interpolation_search(seg, target),
            Self::Weighted => weighted_search(seg, target),
        }
    }
}

/// Classic iterative halving, O(log n) probes.
#[must_use]
pub fn binary_search(seg: &[i64], target: i64) -> (Option<usize>, u32) {
    if seg.is_empty() {
        return (None, 0);
    }
    let mut lo = 0usize;
    let mut hi = seg.len() - 1;
    let mut probes = 0u32;
    while lo <= hi {
        probes += 1;
        let mid = lo + (hi - lo) / 2;
        match seg[mid].cmp(&target) {
            Ordering::Equal => return (Some(mid), probes),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    return (None, probes);
                }
                hi = mid - 1;
            }
        }
    }
    (None, probes)
}

/// Probes where a uniformly distributed key would sit, O(log log n)
/// expected on uniform data, degrading toward O(n) on skewed segments.
#[must_use]
pub fn interpolation_search(seg: &[i64], target: i64) -> (Option<usize>, u32) {
    if seg.is_empty() {
        return (None, 0);
    }
    let mut lo = 0usize;
    let mut hi = seg.len() - 1;
    let mut probes = 0u32;
    while lo <= hi && target >= seg[lo] && target <= seg[hi] {
        probes += 1;
        let pos = if seg[hi] == seg[lo] {
            // Constant run; probing lo avoids the zero denominator.
            lo
        } else {
            let frac = (hi - lo) as f64 / (seg[hi] - seg[lo]) as f64;
            (lo + (frac * (target - seg[lo]) as f64) as usize).min(hi)
        };
        match seg[pos].cmp(&target) {
            Ordering::Equal => return (Some(pos), probes),
            Ordering::Less => lo = pos + 1,
            Ordering::Greater => {
                if pos == 0 {
                    return (None, probes);
                }
                hi = pos - 1;
            }
        }
    }
    (None, probes)
}

/// Weighted split: the interpolation probe point, recursed with explicit
/// `(start_limit, start, end)` bounds so an exact hit can rewind to the
/// first occurrence without rescanning from the segment head.
#[must_use]
pub fn weighted_search(seg: &[i64], target: i64) -> (Option<usize>, u32) {
    if seg.is_empty() {
        return (None, 0);
    }
    weighted_probe(seg, 0, 0, seg.len() - 1, target)
}

/// One weighted probe over `seg[start..=end]`.
///
/// `start_limit` is the leftmost index the first-occurrence rewind may
/// reach; it stays fixed across the recursion while `start` tightens.
#[must_use]
pub fn weighted_probe(
    seg: &[i64],
    start_limit: usize,
    start: usize,
    end: usize,
    target: i64,
) -> (Option<usize>, u32) {
    let s = seg[start];
    let e = seg[end];
    if target < s || target > e {
        return (None, 1);
    }
    if target == s {
        return (Some(rewind(seg, start, start_limit)), 1);
    }
    // target > s from here on, so a constant segment (e == s) cannot reach
    // this point and the denominator below is nonzero.
    if end - start == 1 {
        return if target == e {
            (Some(rewind(seg, end, start_limit)), 1)
        } else {
            (None, 1)
        };
    }
    let n = (end - start + 1) as i128;
    let num = (n - 1) * i128::from(target - s);
    let den = i128::from(e - s);
    let mut idx = start + (num / den) as usize;
    if idx == start {
        idx += 1;
    }
    match seg[idx].cmp(&target) {
        Ordering::Greater => {
            let (hit, probes) = weighted_probe(seg, start_limit, start, idx, target);
            (hit, probes + 1)
        }
        Ordering::Less => {
            let (hit, probes) = weighted_probe(seg, start_limit, idx, end, target);
            (hit, probes + 1)
        }
        Ordering::Equal => (Some(rewind(seg, idx, start_limit)), 1),
    }
}

/// Resolve a hit to the smallest index holding the same value.
#[inline]
#[must_use]
pub fn first_occurrence(seg: &[i64], pos: usize) -> usize {
    rewind(seg, pos, 0)
}

#[inline]
fn rewind(seg: &[i64], mut pos: usize, floor: usize) -> usize {
    while pos > floor && seg[pos - 1] == seg[pos] {
        pos -= 1;
    }
    pos
}
