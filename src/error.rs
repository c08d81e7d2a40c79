//! Errors for the handful of constructors that can be misused with
//! data a caller does not fully control (annotation literals,
//! deserialized facts). Internal bookkeeping invariants are instead
//! enforced with `assert!` and never produce a [`DomainError`]: a
//! violated internal invariant is a bug in this crate, not in the
//! caller.

use thiserror::Error;

/// Domain-misuse conditions reported by fallible constructors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// `range(from, to)` was called with `from > to`.
    #[error("invalid range: from ({from}) is greater than to ({to})")]
    InvalidRange {
        /// The requested lower bound.
        from: i64,
        /// The requested upper bound.
        to: i64,
    },

    /// `from_ranges` received an array that is not sorted, not
    /// disjoint, or not non-adjacent at the given flattened index.
    #[error("interval array is not canonical at flattened index {index}")]
    NonCanonicalRanges {
        /// Index of the first offending entry in the flattened array.
        index: usize,
    },
}
