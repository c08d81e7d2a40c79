use alloc::boxed::Box;
use core::fmt;

use crate::error::DomainError;

/// An immutable, canonical set of 64-bit signed integers.
///
/// A value denotes one of four shapes: the empty set, a single point,
/// a contiguous closed range, or a sorted, disjoint, non-adjacent
/// sequence of two or more ranges. Every public operation returns a
/// value already reduced to the smallest shape that denotes it: a
/// `Range` is never equal in denotation to a `Point`, and a
/// `RangeSet` never holds fewer than two intervals. This makes
/// structural equality coincide with set equality.
///
/// # Example
/// ```
/// use longrange_set::IntSet;
///
/// let a = IntSet::range(0, 10).unwrap();
/// let b = IntSet::range(5, 20).unwrap();
/// assert_eq!(a.intersect(&b), IntSet::range(5, 10).unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum IntSet {
    /// The empty set.
    Empty,
    /// A single integer.
    Point(i64),
    /// A closed interval `[from, to]` with `from < to`.
    Range(i64, i64),
    /// Two or more disjoint, non-adjacent, ascending closed intervals,
    /// flattened as `[lo0, hi0, lo1, hi1, ...]`.
    RangeSet(Box<[i64]>),
}

const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<IntSet>();
};

impl IntSet {
    /// The empty set.
    pub const fn empty() -> Self {
        IntSet::Empty
    }

    /// A set containing exactly `value`.
    pub const fn point(value: i64) -> Self {
        IntSet::Point(value)
    }

    /// A closed interval `[from, to]`.
    ///
    /// Collapses to [`IntSet::point`] when `from == to`. Fails when
    /// `from > to`, which is never a valid interval.
    pub fn range(from: i64, to: i64) -> Result<Self, DomainError> {
        if from > to {
            Err(DomainError::InvalidRange { from, to })
        } else if from == to {
            Ok(IntSet::Point(from))
        } else {
            Ok(IntSet::Range(from, to))
        }
    }

    /// The full 64-bit signed range, the top element of the lattice.
    pub const fn all() -> Self {
        IntSet::Range(i64::MIN, i64::MAX)
    }

    /// The non-negative 32-bit range `[0, i32::MAX]`, commonly used to
    /// seed array/collection index expressions.
    pub const fn index_range() -> Self {
        IntSet::Range(0, i32::MAX as i64)
    }

    /// Build a set from the first `n` entries of an already-sorted,
    /// disjoint, non-adjacent flattened interval array.
    ///
    /// `n` must be even. `n == 0` yields [`IntSet::empty`], `n == 2`
    /// yields a single interval (collapsed to a point if degenerate),
    /// and any larger even `n` yields a `RangeSet` over `arr[..n]`.
    ///
    /// # Errors
    /// Returns [`DomainError::NonCanonicalRanges`] if `arr[..n]` is
    /// not sorted, contains an inverted pair (`lo > hi`), or contains
    /// two intervals that overlap or touch.
    pub fn from_ranges(arr: &[i64], n: usize) -> Result<Self, DomainError> {
        assert!(n <= arr.len(), "n exceeds the provided array length");
        assert!(n % 2 == 0, "interval array length must be even");
        if n == 0 {
            return Ok(IntSet::Empty);
        }
        for i in (0..n).step_by(2) {
            let (lo, hi) = (arr[i], arr[i + 1]);
            if lo > hi {
                return Err(DomainError::NonCanonicalRanges { index: i });
            }
            if i > 0 {
                let prev_hi = arr[i - 1];
                if prev_hi == i64::MAX || prev_hi + 1 >= lo {
                    return Err(DomainError::NonCanonicalRanges { index: i });
                }
            }
        }
        if n == 2 {
            return IntSet::range(arr[0], arr[1]);
        }
        Ok(IntSet::RangeSet(arr[..n].into()))
    }

    /// Whether this set denotes the empty set.
    pub const fn is_empty(&self) -> bool {
        matches!(self, IntSet::Empty)
    }

    /// The smallest value in this set.
    ///
    /// # Panics
    /// Panics if the set is empty; an empty set has no minimum.
    pub fn min(&self) -> i64 {
        match self {
            IntSet::Empty => panic!("min() called on an empty integer set"),
            IntSet::Point(v) => *v,
            IntSet::Range(from, _) => *from,
            IntSet::RangeSet(r) => r[0],
        }
    }

    /// The largest value in this set.
    ///
    /// # Panics
    /// Panics if the set is empty; an empty set has no maximum.
    pub fn max(&self) -> i64 {
        match self {
            IntSet::Empty => panic!("max() called on an empty integer set"),
            IntSet::Point(v) => *v,
            IntSet::Range(_, to) => *to,
            IntSet::RangeSet(r) => r[r.len() - 1],
        }
    }

    /// Whether `value` is a member of this set.
    pub fn contains_value(&self, value: i64) -> bool {
        match self {
            IntSet::Empty => false,
            IntSet::Point(v) => *v == value,
            IntSet::Range(from, to) => *from <= value && value <= *to,
            IntSet::RangeSet(r) => {
                // Binary search for the interval whose `lo` is the
                // greatest one not exceeding `value`.
                let mut lo_idx = 0usize;
                let mut hi_idx = r.len() / 2;
                while lo_idx < hi_idx {
                    let mid = (lo_idx + hi_idx) / 2;
                    if r[mid * 2] <= value {
                        lo_idx = mid + 1;
                    } else {
                        hi_idx = mid;
                    }
                }
                lo_idx > 0 && value <= r[(lo_idx - 1) * 2 + 1]
            }
        }
    }

    /// Construct the canonical shape for a single interval, collapsing
    /// to a [`IntSet::point`] when degenerate.
    ///
    /// Internal helper: callers outside this crate always go through
    /// [`IntSet::range`], which additionally rejects `from > to`.
    pub(crate) fn mk_range(from: i64, to: i64) -> Self {
        debug_assert!(from <= to, "mk_range requires from <= to");
        if from == to {
            IntSet::Point(from)
        } else {
            IntSet::Range(from, to)
        }
    }
}

impl Default for IntSet {
    /// The empty set, consistent with other value types in this crate
    /// defaulting to their "nothing here yet" state.
    fn default() -> Self {
        IntSet::Empty
    }
}

impl fmt::Display for IntSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntSet::Empty => write!(f, "{{}}"),
            IntSet::Point(v) => write!(f, "{{{v}}}"),
            IntSet::Range(from, to) => fmt_interval(f, *from, *to),
            IntSet::RangeSet(r) => {
                write!(f, "{{")?;
                for (i, pair) in r.chunks_exact(2).enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    fmt_interval_bare(f, pair[0], pair[1])?;
                }
                write!(f, "}}")
            }
        }
    }
}

fn fmt_interval(f: &mut fmt::Formatter<'_>, from: i64, to: i64) -> fmt::Result {
    write!(f, "{{")?;
    fmt_interval_bare(f, from, to)?;
    write!(f, "}}")
}

fn fmt_interval_bare(f: &mut fmt::Formatter<'_>, from: i64, to: i64) -> fmt::Result {
    if from == to {
        write!(f, "{from}")
    } else if to == from + 1 {
        write!(f, "{from}, {to}")
    } else {
        write!(f, "{from}..{to}")
    }
}
