//! Abstract transfer functions for the arithmetic (sign-extending) and
//! logical (zero-filling) right shifts. Left shift is not modeled as
//! a distinct operation: it is sound and exact to express as a
//! multiplication by a power of two, so callers compose
//! [`IntSet::mul`] with a `Point` operand instead.

use alloc::vec::Vec;

use super::intervals::{collapse_if_many, from_pairs, split_at_zero, to_pairs, unsigned_range_to_pairs};
use super::shape::IntSet;
use crate::width::Width;

/// Reduce an arbitrary shift-amount operand to the `[lo, hi]` bounds
/// that actually reach the shift hardware, i.e. after masking to
/// `width.bits() - 1`.
///
/// Masking a single value (`v & mask`) is not monotonic in `v`, so an
/// operand whose own range already spans outside `[0, mask]` is
/// widened to the full masked range rather than tracked precisely;
/// this is a deliberate precision-for-simplicity trade (see
/// DESIGN.md), not a soundness gap.
fn mask_shift_bounds(width: Width, amount: &IntSet) -> (u32, u32) {
    let mask = width.bits() - 1;
    if amount.is_empty() {
        return (0, 0);
    }
    let lo = amount.min();
    let hi = amount.max();
    if lo >= 0 && hi <= mask as i64 {
        (lo as u32, hi as u32)
    } else {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            lo,
            hi,
            mask,
            "shift amount escapes the masked range; widening to full mask"
        );
        (0, mask)
    }
}

impl IntSet {
    /// The abstract transfer for the arithmetic right shift (`x >> n`,
    /// sign-extending) at `width`.
    pub fn shift_right(&self, amount: &IntSet, width: Width) -> IntSet {
        if self.is_empty() || amount.is_empty() {
            return IntSet::Empty;
        }
        let (slo, shi) = mask_shift_bounds(width, amount);
        let mut out = Vec::new();
        for (lo, hi) in collapse_if_many(split_at_zero(to_pairs(self))) {
            let (rlo, rhi) = if lo >= 0 {
                (lo as i128 >> shi, hi as i128 >> slo)
            } else {
                (lo as i128 >> slo, hi as i128 >> shi)
            };
            out.push((width.truncate(rlo), width.truncate(rhi)));
        }
        from_pairs(out)
    }

    /// The abstract transfer for the logical right shift (`x >>> n`,
    /// zero-filling) at `width`.
    ///
    /// Shifting a negative value's unsigned bit pattern can bring it
    /// down across the sign-bit boundary (e.g. `-1 >>> 1` lands back
    /// in positive territory), so the shifted unsigned bound is split
    /// back into signed pieces the same way [`super::bitand`] does
    /// rather than truncated endpoint-by-endpoint.
    pub fn unsigned_shift_right(&self, amount: &IntSet, width: Width) -> IntSet {
        if self.is_empty() || amount.is_empty() {
            return IntSet::Empty;
        }
        let (slo, shi) = mask_shift_bounds(width, amount);
        let mut out = Vec::new();
        for (lo, hi) in collapse_if_many(split_at_zero(to_pairs(self))) {
            let ulo = width.to_unsigned(lo);
            let uhi = width.to_unsigned(hi);
            let rlo = ulo >> shi;
            let rhi = uhi >> slo;
            out.extend(unsigned_range_to_pairs(width, rlo, rhi));
        }
        from_pairs(out)
    }
}
