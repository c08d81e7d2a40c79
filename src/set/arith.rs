//! Abstract transfer functions for unary negation, absolute value,
//! addition, subtraction, and multiplication, each sound for
//! two's-complement wraparound at the given [`Width`].

use alloc::vec::Vec;

use super::intervals::{collapse_if_many, from_pairs, split_at_zero, to_pairs, wrap_interval};
use super::shape::IntSet;
use crate::width::Width;

impl IntSet {
    /// The abstract transfer for unary negation (`-x`) at `width`.
    ///
    /// Negating `width.min()` wraps back to itself in two's
    /// complement (there is no positive counterpart to the most
    /// negative representable value); this falls out of
    /// [`wrap_interval`] rather than needing a special case.
    pub fn negate(&self, width: Width) -> IntSet {
        let mut out = Vec::new();
        for (lo, hi) in to_pairs(self) {
            out.extend(wrap_interval(width, -(hi as i128), -(lo as i128)));
        }
        from_pairs(out)
    }

    /// The abstract transfer for absolute value (`abs(x)`) at `width`.
    pub fn abs(&self, width: Width) -> IntSet {
        let mut out = Vec::new();
        for (lo, hi) in split_at_zero(to_pairs(self)) {
            if lo >= 0 {
                out.extend(wrap_interval(width, lo as i128, hi as i128));
            } else {
                out.extend(wrap_interval(width, -(hi as i128), -(lo as i128)));
            }
        }
        from_pairs(out)
    }

    /// The abstract transfer for addition (`x + y`) at `width`.
    pub fn plus(&self, other: &IntSet, width: Width) -> IntSet {
        if self.is_empty() || other.is_empty() {
            return IntSet::Empty;
        }
        let a = collapse_if_many(to_pairs(self));
        let b = collapse_if_many(to_pairs(other));
        let mut out = Vec::with_capacity(a.len() * b.len());
        for &(alo, ahi) in &a {
            for &(blo, bhi) in &b {
                let lo = alo as i128 + blo as i128;
                let hi = ahi as i128 + bhi as i128;
                out.extend(wrap_interval(width, lo, hi));
            }
        }
        from_pairs(out)
    }

    /// The abstract transfer for subtraction (`x - y`) at `width`.
    ///
    /// Expressed as `x + (-y)`: negation and addition both already
    /// wrap at `width`, and their composition wraps exactly the same
    /// way a native subtraction would.
    pub fn minus(&self, other: &IntSet, width: Width) -> IntSet {
        self.plus(&other.negate(width), width)
    }

    /// The abstract transfer for multiplication (`x * y`) at `width`.
    ///
    /// Precise only when at least one operand is a single point:
    /// `0 * X = {0}`, `1 * X = X`, `-1 * X = -X`, and `k * X` for any
    /// other constant `k` scales every interval of `X` with a checked
    /// multiply that falls back to the full width on overflow rather
    /// than wrapping. Two non-point operands (Range*Range, anything
    /// involving a RangeSet on both sides) have no such fixed scale to
    /// reason about per-interval, so the transfer gives up precision
    /// entirely and returns the full width.
    pub fn mul(&self, other: &IntSet, width: Width) -> IntSet {
        if self.is_empty() || other.is_empty() {
            return IntSet::Empty;
        }
        match (self, other) {
            (IntSet::Point(k), _) => mul_point(*k, other, width),
            (_, IntSet::Point(k)) => mul_point(*k, self, width),
            _ => IntSet::mk_range(width.min(), width.max()),
        }
    }
}

/// `k * x` for a constant `k` and arbitrary-shaped `x`, per-interval.
fn mul_point(k: i64, x: &IntSet, width: Width) -> IntSet {
    match k {
        0 => IntSet::Point(0),
        1 => x.clone(),
        -1 => x.negate(width),
        _ => {
            let mut out = Vec::new();
            for (lo, hi) in to_pairs(x) {
                let p1 = k as i128 * lo as i128;
                let p2 = k as i128 * hi as i128;
                let (plo, phi) = if p1 <= p2 { (p1, p2) } else { (p2, p1) };
                if plo < width.min() as i128 || phi > width.max() as i128 {
                    return IntSet::mk_range(width.min(), width.max());
                }
                out.push((plo as i64, phi as i64));
            }
            from_pairs(out)
        }
    }
}
