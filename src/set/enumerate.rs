//! Lazy enumeration of every value denoted by a set.
//!
//! A `RangeSet` can denote far more values than fit in memory (up to
//! `2^64`), so this walks the flattened interval list with a pair of
//! cursors instead of materializing anything, and supports iterating
//! from either end.

use alloc::vec::Vec;

use super::intervals::to_pairs;
use super::shape::IntSet;

/// Iterator over every value in an [`IntSet`], ascending from the
/// front or descending from the back.
///
/// Built with [`IntSet::enumerate`].
#[derive(Clone, Debug)]
pub struct Enumerate {
    pairs: Vec<(i64, i64)>,
    front_idx: usize,
    front_val: i64,
    back_idx: usize,
    back_val: i64,
    done: bool,
}

impl Enumerate {
    fn new(pairs: Vec<(i64, i64)>) -> Self {
        if pairs.is_empty() {
            return Enumerate {
                pairs,
                front_idx: 0,
                front_val: 0,
                back_idx: 0,
                back_val: 0,
                done: true,
            };
        }
        let front_val = pairs[0].0;
        let back_idx = pairs.len() - 1;
        let back_val = pairs[back_idx].1;
        Enumerate {
            pairs,
            front_idx: 0,
            front_val,
            back_idx,
            back_val,
            done: false,
        }
    }

    fn cursors_met(&self) -> bool {
        self.front_idx == self.back_idx && self.front_val == self.back_val
    }
}

impl Iterator for Enumerate {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.done {
            return None;
        }
        let val = self.front_val;
        if self.cursors_met() {
            self.done = true;
        } else if self.front_val == self.pairs[self.front_idx].1 {
            self.front_idx += 1;
            self.front_val = self.pairs[self.front_idx].0;
        } else {
            self.front_val += 1;
        }
        Some(val)
    }
}

impl DoubleEndedIterator for Enumerate {
    fn next_back(&mut self) -> Option<i64> {
        if self.done {
            return None;
        }
        let val = self.back_val;
        if self.cursors_met() {
            self.done = true;
        } else if self.back_val == self.pairs[self.back_idx].0 {
            self.back_idx -= 1;
            self.back_val = self.pairs[self.back_idx].1;
        } else {
            self.back_val -= 1;
        }
        Some(val)
    }
}

impl core::iter::FusedIterator for Enumerate {}

impl IntSet {
    /// Enumerate every value in this set, ascending. The iterator is
    /// also a [`DoubleEndedIterator`], so `.rev()` or `.next_back()`
    /// walk from the top down instead.
    ///
    /// # Example
    /// ```
    /// use longrange_set::IntSet;
    ///
    /// let s = IntSet::range(3, 6).unwrap();
    /// assert_eq!(s.enumerate().collect::<Vec<_>>(), vec![3, 4, 5, 6]);
    /// assert_eq!(s.enumerate().next_back(), Some(6));
    /// ```
    pub fn enumerate(&self) -> Enumerate {
        Enumerate::new(to_pairs(self))
    }
}
