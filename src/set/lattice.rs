//! Set-theoretic lattice operations: containment, intersection,
//! union, difference, and the relational narrowing used to derive one
//! variable's possible values from a comparison against another.

use alloc::vec::Vec;

use super::intervals::{from_pairs, to_pairs};
use super::shape::IntSet;

/// A relational operator a branch condition tests a value against.
///
/// Paired with [`IntSet::from_relation`]: if a comparison `x REL y` is
/// known to hold and `y`'s possible values are `self`, this answers
/// "what values can `x` take".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    /// `x == y`
    Eq,
    /// `x != y`
    Ne,
    /// `x > y`
    Gt,
    /// `x >= y`
    Ge,
    /// `x < y`
    Lt,
    /// `x <= y`
    Le,
}

impl IntSet {
    /// Whether `value` is a member of this set. Alias retained for
    /// symmetry with [`IntSet::contains_set`]; delegates to
    /// [`IntSet::contains_value`].
    pub fn contains(&self, value: i64) -> bool {
        self.contains_value(value)
    }

    /// Whether every value in `other` is also in `self`.
    pub fn contains_set(&self, other: &IntSet) -> bool {
        if other.is_empty() {
            return true;
        }
        if self.is_empty() {
            return false;
        }
        to_pairs(other)
            .into_iter()
            .all(|(lo, hi)| self.covers_interval(lo, hi))
    }

    /// Whether `self` has at least one value in common with `other`.
    pub fn intersects(&self, other: &IntSet) -> bool {
        !self.intersect(other).is_empty()
    }

    /// The set of values in both `self` and `other`.
    pub fn intersect(&self, other: &IntSet) -> IntSet {
        if self.is_empty() || other.is_empty() {
            return IntSet::Empty;
        }
        let a = to_pairs(self);
        let b = to_pairs(other);
        let mut out = Vec::new();
        let (mut i, mut j) = (0usize, 0usize);
        while i < a.len() && j < b.len() {
            let (alo, ahi) = a[i];
            let (blo, bhi) = b[j];
            let lo = alo.max(blo);
            let hi = ahi.min(bhi);
            if lo <= hi {
                out.push((lo, hi));
            }
            if ahi < bhi {
                i += 1;
            } else {
                j += 1;
            }
        }
        from_pairs(out)
    }

    /// The set of values in `self`, `other`, or both.
    pub fn unite(&self, other: &IntSet) -> IntSet {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        let mut pairs = to_pairs(self);
        pairs.extend(to_pairs(other));
        from_pairs(pairs)
    }

    /// The set of values in `self` but not in `other`.
    pub fn subtract(&self, other: &IntSet) -> IntSet {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }
        let a = to_pairs(self);
        let b = to_pairs(other);
        let mut out = Vec::new();
        for (alo, ahi) in a {
            let mut cur_lo = alo;
            for &(blo, bhi) in &b {
                if bhi < cur_lo || blo > ahi {
                    continue;
                }
                if blo > cur_lo {
                    out.push((cur_lo, blo - 1));
                }
                if bhi >= cur_lo {
                    if bhi == i64::MAX {
                        cur_lo = i64::MAX;
                        break;
                    }
                    cur_lo = bhi + 1;
                }
                if cur_lo > ahi {
                    break;
                }
            }
            if cur_lo <= ahi {
                out.push((cur_lo, ahi));
            }
        }
        from_pairs(out)
    }

    /// The set of values in `self` excluding `value`. A convenience
    /// over [`IntSet::subtract`] for the common single-value case.
    pub fn without(&self, value: i64) -> IntSet {
        self.subtract(&IntSet::point(value))
    }

    /// The set of values some variable could take given that it is
    /// known to stand in relation `rel` to an element of `self`.
    ///
    /// An empty `self` means there is no element to compare against,
    /// so every relation is vacuously unsatisfiable and the result is
    /// empty rather than a panic from reading `min`/`max` of nothing.
    pub fn from_relation(&self, rel: Relation) -> IntSet {
        if self.is_empty() {
            return IntSet::Empty;
        }
        match rel {
            Relation::Eq => self.clone(),
            Relation::Ne => match self {
                IntSet::Point(v) => IntSet::all().without(*v),
                _ => IntSet::all(),
            },
            Relation::Gt => {
                let m = self.min();
                if m == i64::MAX {
                    IntSet::Empty
                } else {
                    IntSet::mk_range(m + 1, i64::MAX)
                }
            }
            Relation::Ge => IntSet::mk_range(self.min(), i64::MAX),
            Relation::Lt => {
                let m = self.max();
                if m == i64::MIN {
                    IntSet::Empty
                } else {
                    IntSet::mk_range(i64::MIN, m - 1)
                }
            }
            Relation::Le => IntSet::mk_range(i64::MIN, self.max()),
        }
    }

    /// Whether `[lo, hi]` is fully covered by this set. Internal
    /// helper backing [`IntSet::contains_set`].
    fn covers_interval(&self, lo: i64, hi: i64) -> bool {
        match self {
            IntSet::Empty => false,
            IntSet::Point(v) => lo == hi && *v == lo,
            IntSet::Range(from, to) => *from <= lo && hi <= *to,
            IntSet::RangeSet(r) => {
                let mut idx = 0usize;
                let mut count = r.len() / 2;
                while count > 0 {
                    let step = count / 2;
                    let mid = idx + step;
                    if r[mid * 2] <= lo {
                        idx = mid + 1;
                        count -= step + 1;
                    } else {
                        count = step;
                    }
                }
                idx > 0 && r[(idx - 1) * 2] <= lo && hi <= r[(idx - 1) * 2 + 1]
            }
        }
    }
}
