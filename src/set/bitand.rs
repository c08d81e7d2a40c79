//! The abstract transfer function for bitwise AND, via a three-valued
//! (0 / 1 / unknown) bit-vector approximation of each operand.
//!
//! Bitwise operators don't respect interval monotonicity the way
//! arithmetic does, so instead of reasoning about endpoints directly
//! this summarizes each contiguous piece as a per-bit "known zero" /
//! "known one" mask, intersects those masks the way a hardware AND
//! gate would, and reconstructs the tightest interval that contains
//! every value consistent with the result.

use alloc::vec::Vec;

use super::intervals::{collapse_if_many, from_pairs, split_at_zero, to_pairs, unsigned_range_to_pairs};
use super::shape::IntSet;
use crate::width::Width;

/// Which bits of an interval are provably fixed.
///
/// `ones` and `zeros` are always disjoint; any bit set in neither is
/// unknown and free to take either value within the interval.
#[derive(Clone, Copy, Debug)]
struct TriVec {
    ones: u64,
    zeros: u64,
}

/// Summarize a single contiguous, single-sign interval as known bits.
///
/// The two endpoints' unsigned bit patterns agree above their highest
/// differing bit (every value strictly between them shares that
/// prefix too, since the interval is contiguous) and are fully
/// unconstrained at and below it, since a contiguous range spanning a
/// differing high bit necessarily takes on every combination of the
/// lower bits.
fn interval_to_trivec(width: Width, lo: i64, hi: i64) -> TriVec {
    let mask = width.bit_mask();
    let ulo = width.to_unsigned(lo) as u64 & mask;
    let uhi = width.to_unsigned(hi) as u64 & mask;
    let diff = (ulo ^ uhi) & mask;
    if diff == 0 {
        return TriVec {
            ones: ulo & mask,
            zeros: !ulo & mask,
        };
    }
    let msb = 63 - diff.leading_zeros();
    let known_mask = if msb >= 63 { 0 } else { (!0u64 << (msb + 1)) & mask };
    TriVec {
        ones: ulo & known_mask,
        zeros: !ulo & known_mask & mask,
    }
}

fn and_trivec(a: TriVec, b: TriVec) -> TriVec {
    TriVec {
        ones: a.ones & b.ones,
        zeros: a.zeros | b.zeros,
    }
}

/// Expand known bits back to the tightest `[min, max]` unsigned
/// bounds consistent with them: unknown bits cleared for the minimum,
/// set for the maximum.
fn trivec_to_unsigned_range(width: Width, t: TriVec) -> (i128, i128) {
    let mask = width.bit_mask();
    let min = t.ones & mask;
    let max = (!t.zeros) & mask;
    (min as i128, max as i128)
}

impl IntSet {
    /// The abstract transfer for bitwise AND (`x & y`) at `width`.
    pub fn bitwise_and(&self, other: &IntSet, width: Width) -> IntSet {
        if self.is_empty() || other.is_empty() {
            return IntSet::Empty;
        }
        let a = collapse_if_many(split_at_zero(to_pairs(self)));
        let b = collapse_if_many(split_at_zero(to_pairs(other)));
        let mut out = Vec::with_capacity(a.len() * b.len());
        for &(alo, ahi) in &a {
            let ta = interval_to_trivec(width, alo, ahi);
            for &(blo, bhi) in &b {
                let tb = interval_to_trivec(width, blo, bhi);
                let (lo, hi) = trivec_to_unsigned_range(width, and_trivec(ta, tb));
                out.extend(unsigned_range_to_pairs(width, lo, hi));
            }
        }
        from_pairs(out)
    }
}
