//! Internal helpers shared by the lattice and arithmetic transfer
//! modules: converting any shape to a flat list of `(lo, hi)` pairs,
//! and canonicalizing a list of pairs back into the smallest shape
//! that denotes their union.

use alloc::vec;
use alloc::vec::Vec;

use super::shape::IntSet;

/// Flatten any shape into its `(lo, hi)` pairs, ascending, disjoint,
/// non-adjacent -- the canonical form's own invariants, just unpacked.
pub(crate) fn to_pairs(s: &IntSet) -> Vec<(i64, i64)> {
    match s {
        IntSet::Empty => Vec::new(),
        IntSet::Point(v) => vec![(*v, *v)],
        IntSet::Range(from, to) => vec![(*from, *to)],
        IntSet::RangeSet(r) => r.chunks_exact(2).map(|c| (c[0], c[1])).collect(),
    }
}

/// Canonicalize an arbitrary (possibly unsorted, possibly overlapping
/// or adjacent) collection of closed intervals into the smallest
/// shape denoting their union.
///
/// This is the one place merging/coalescing happens; every lattice
/// and arithmetic operation that needs to reduce a working set of
/// intervals funnels through here, which is what keeps [`IntSet::unite`]
/// a plain sorted merge instead of the complement-based round trip the
/// naive lattice definition would suggest (see DESIGN.md).
pub(crate) fn from_pairs(mut pairs: Vec<(i64, i64)>) -> IntSet {
    pairs.retain(|&(lo, hi)| lo <= hi);
    if pairs.is_empty() {
        return IntSet::Empty;
    }
    pairs.sort_unstable_by_key(|p| p.0);
    let mut merged: Vec<(i64, i64)> = Vec::with_capacity(pairs.len());
    for (lo, hi) in pairs {
        if let Some(last) = merged.last_mut() {
            let adjacent = last.1 != i64::MAX && last.1 + 1 == lo;
            if lo <= last.1 || adjacent {
                if hi > last.1 {
                    last.1 = hi;
                }
                continue;
            }
        }
        merged.push((lo, hi));
    }
    match merged.len() {
        0 => IntSet::Empty,
        1 => IntSet::mk_range(merged[0].0, merged[0].1),
        _ => {
            let mut flat = Vec::with_capacity(merged.len() * 2);
            for (lo, hi) in merged {
                flat.push(lo);
                flat.push(hi);
            }
            IntSet::RangeSet(flat.into_boxed_slice())
        }
    }
}

/// Split every pair crossing zero into a non-positive and a
/// non-negative half. Used by every transfer whose formula is
/// sign-asymmetric (division, shifts, bitwise AND).
pub(crate) fn split_at_zero(pairs: Vec<(i64, i64)>) -> Vec<(i64, i64)> {
    let mut out = Vec::with_capacity(pairs.len() + 1);
    for (lo, hi) in pairs {
        if lo < 0 && hi > 0 {
            out.push((lo, -1));
            out.push((0, hi));
        } else {
            out.push((lo, hi));
        }
    }
    out
}

/// The smallest single interval containing every pair -- a sound but
/// lossy stand-in used when an operand has grown too many disjoint
/// pieces to multiply out pairwise.
pub(crate) fn envelope(pairs: &[(i64, i64)]) -> (i64, i64) {
    let mut lo = pairs[0].0;
    let mut hi = pairs[0].1;
    for &(l, h) in &pairs[1..] {
        if l < lo {
            lo = l;
        }
        if h > hi {
            hi = h;
        }
    }
    (lo, hi)
}

/// Collapse to the envelope once an operand holds more than three
/// disjoint intervals, trading precision for bounded work in the
/// pairwise distribution used by `plus`, `div`, `bitwise_and`, etc.
pub(crate) fn collapse_if_many(pairs: Vec<(i64, i64)>) -> Vec<(i64, i64)> {
    if pairs.len() > 3 {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            intervals = pairs.len(),
            "collapsing RangeSet operand to its envelope before distributing"
        );
        vec![envelope(&pairs)]
    } else {
        pairs
    }
}

/// Reduce an infinite-precision contiguous interval `[lo, hi]` to its
/// wrapped image at `width`.
///
/// Every corner-quotient/product/sum computation in the arithmetic
/// transfers produces a single contiguous infinite-precision interval;
/// this is the one place that interval gets folded back into
/// two's-complement range. When the interval's span already meets or
/// exceeds the modulus, wrapping has gone all the way around and every
/// representable value is reachable, so the sound answer is the full
/// width. Otherwise the interval wraps at most once, and an inverted
/// pair of truncated endpoints (`tlo > thi`) means it split into a high
/// piece and a low piece, which is represented precisely rather than
/// widened to the full range.
pub(crate) fn wrap_interval(width: crate::width::Width, lo: i128, hi: i128) -> Vec<(i64, i64)> {
    debug_assert!(lo <= hi);
    let span = hi - lo + 1;
    if span >= width.modulus() {
        return vec![(width.min(), width.max())];
    }
    let tlo = width.truncate(lo);
    let thi = width.truncate(hi);
    if tlo <= thi {
        vec![(tlo, thi)]
    } else {
        vec![(width.min(), thi), (tlo, width.max())]
    }
}

/// Split an unsigned `[lo, hi]` bound (both in `[0, width.modulus())`)
/// back into one or two signed pieces, the same way a value wraps
/// across the width's sign bit when reinterpreted as two's complement.
pub(crate) fn unsigned_range_to_pairs(
    width: crate::width::Width,
    lo: i128,
    hi: i128,
) -> Vec<(i64, i64)> {
    let half = width.modulus() / 2;
    if hi < half || lo >= half {
        vec![(width.truncate(lo), width.truncate(hi))]
    } else {
        vec![(width.truncate(lo), width.max()), (width.min(), width.truncate(hi))]
    }
}
