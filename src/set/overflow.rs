//! Standalone overflow predicate, used by callers that want to flag a
//! risky subtraction (e.g. for a diagnostic) without needing the
//! wrapped result itself.

use super::intervals::to_pairs;
use super::shape::IntSet;
use crate::width::Width;

impl IntSet {
    /// Whether any pair of values drawn from `self` and `other` could
    /// make `self - other` overflow `width`.
    ///
    /// Answers conservatively: it reports `true` as soon as a single
    /// combination can overflow, even if most combinations can't, since
    /// the question this answers is "can this subtraction ever trap",
    /// not "does it always".
    pub fn subtraction_may_overflow(&self, other: &IntSet, width: Width) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let b = to_pairs(other);
        for (alo, ahi) in to_pairs(self) {
            for &(blo, bhi) in &b {
                let lo = alo as i128 - bhi as i128;
                let hi = ahi as i128 - blo as i128;
                if lo < width.min() as i128 || hi > width.max() as i128 {
                    return true;
                }
            }
        }
        false
    }
}
