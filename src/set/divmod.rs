//! Abstract transfer functions for truncating integer division and
//! remainder.
//!
//! Division by a divisor interval that can be exactly zero is left
//! unmodeled here: a host data-flow engine routes an operand known to
//! include zero to a separate "may raise" control-flow edge before
//! ever calling [`IntSet::div`] or [`IntSet::rem`], the same way it
//! would for a null dereference. Passing a divisor set containing
//! zero simply has the zero value ignored for the purpose of bounding
//! the result; it contributes no output interval of its own.

use alloc::vec::Vec;

use super::intervals::{collapse_if_many, from_pairs, split_at_zero, to_pairs, wrap_interval};
use super::shape::IntSet;
use crate::width::Width;

/// The largest magnitude representable by `[lo, hi]`, as `i128` to
/// sidestep `i64::MIN` having no positive counterpart.
fn max_abs_pair(lo: i64, hi: i64) -> i128 {
    core::cmp::max((lo as i128).abs(), (hi as i128).abs())
}

impl IntSet {
    /// The abstract transfer for truncating division (`x / y`) at `width`.
    pub fn div(&self, other: &IntSet, width: Width) -> IntSet {
        if self.is_empty() || other.is_empty() {
            return IntSet::Empty;
        }
        let a = collapse_if_many(to_pairs(self));
        let b: Vec<(i64, i64)> = collapse_if_many(
            split_at_zero(to_pairs(other))
                .into_iter()
                .filter_map(|(lo, hi)| {
                    if lo > 0 || hi < 0 {
                        Some((lo, hi))
                    } else if hi > 0 {
                        // Touches zero from the non-negative side: treat
                        // the divisor as starting at 1 rather than 0.
                        Some((1, hi))
                    } else if lo < 0 {
                        Some((lo, -1))
                    } else {
                        None
                    }
                })
                .collect(),
        );
        if b.is_empty() {
            return IntSet::Empty;
        }
        let mut out = Vec::with_capacity(a.len() * b.len());
        for &(alo, ahi) in &a {
            for &(blo, bhi) in &b {
                // `blo`/`bhi` share a sign and exclude zero after the
                // `split_at_zero` + zero-filter above, so division is
                // monotone on this box and the corner quotients bound
                // the true quotient interval. The only corner that can
                // escape `width`'s representable range is `MIN / -1`,
                // which `wrap_interval` folds back precisely instead of
                // letting independently-truncated endpoints invert.
                let c0 = alo as i128 / blo as i128;
                let c1 = alo as i128 / bhi as i128;
                let c2 = ahi as i128 / blo as i128;
                let c3 = ahi as i128 / bhi as i128;
                let lo = c0.min(c1).min(c2).min(c3);
                let hi = c0.max(c1).max(c2).max(c3);
                out.extend(wrap_interval(width, lo, hi));
            }
        }
        from_pairs(out)
    }

    /// The abstract transfer for truncating remainder (`x % y`) at `width`.
    ///
    /// The result always has the dividend's sign and a magnitude
    /// strictly less than the divisor's. A dividend piece entirely
    /// smaller in magnitude than the smallest possible divisor passes
    /// through untouched (`a % b == a` whenever `|a| < |b|`); only a
    /// piece that can reach or exceed that magnitude gets bounded down
    /// to the divisor's own envelope.
    pub fn rem(&self, other: &IntSet, width: Width) -> IntSet {
        if self.is_empty() || other.is_empty() {
            return IntSet::Empty;
        }
        // Nonzero magnitude range of each divisor piece: for a piece
        // that straddles zero only at its boundary (after splitting),
        // 0 itself is excluded from consideration.
        let divisor_abs: Vec<(i128, i128)> = split_at_zero(to_pairs(other))
            .into_iter()
            .filter_map(|(lo, hi)| {
                if lo >= 0 {
                    let nz_lo = lo.max(1);
                    (nz_lo <= hi).then_some((nz_lo as i128, hi as i128))
                } else {
                    Some((-(hi as i128), -(lo as i128)))
                }
            })
            .collect();
        if divisor_abs.is_empty() {
            return IntSet::Empty;
        }
        let m_min = divisor_abs.iter().map(|&(lo, _)| lo).min().unwrap_or(1);
        let m_max = divisor_abs.iter().map(|&(_, hi)| hi).max().unwrap_or(1);
        let bound = m_max - 1;

        let mut out = Vec::new();
        for (lo, hi) in split_at_zero(collapse_if_many(to_pairs(self))) {
            let piece_abs_max = if lo >= 0 { hi as i128 } else { -(lo as i128) };
            if piece_abs_max < m_min {
                out.push((lo, hi));
            } else if lo >= 0 {
                let hi_bound = (hi as i128).min(bound).max(0);
                out.push((width.truncate(0), width.truncate(hi_bound)));
            } else {
                let lo_bound = (lo as i128).max(-bound).min(0);
                out.push((width.truncate(lo_bound), width.truncate(0)));
            }
        }
        from_pairs(out)
    }
}
