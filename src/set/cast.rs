//! Narrowing and widening casts between this crate's signed 64-bit
//! domain and the smaller integer widths a host type system exposes.

use alloc::vec::Vec;

use super::adapters::IntegerTypeLike;
use super::intervals::{collapse_if_many, from_pairs, to_pairs};
use super::shape::IntSet;
use crate::width::IntegerWidth;

impl IntSet {
    /// Cast every value in this set to `target`'s width, truncating
    /// (and, for `Char16`, reinterpreting as unsigned) the way a
    /// narrowing primitive cast would.
    ///
    /// Values already inside `target`'s range pass through unchanged;
    /// a `Range` spanning more values than `target` can hold truncates
    /// to every representable value, since truncation of an interval
    /// wider than the target width touches every bit pattern.
    ///
    /// A `target` this domain doesn't track (`integer_width` returning
    /// `None`) falls back to this set's own envelope rather than
    /// attempting a cast with no defined width, the same "contribute
    /// no information" posture [`IntSet::from_type`] takes.
    pub fn cast_to<T: IntegerTypeLike>(&self, target: &T) -> IntSet {
        let Some(target) = target.integer_width() else {
            return self.clone();
        };
        let (tmin, tmax) = target.full_range();
        let bits = match target {
            IntegerWidth::Byte => 8u32,
            IntegerWidth::Short | IntegerWidth::Char16 => 16,
            IntegerWidth::Int => 32,
            IntegerWidth::Long => return self.clone(),
        };
        let modulus = 1i128 << bits;
        let mut out = Vec::new();
        for (lo, hi) in collapse_if_many(to_pairs(self)) {
            let span = hi as i128 - lo as i128 + 1;
            if span >= modulus {
                out.push((tmin, tmax));
                continue;
            }
            let (tlo, thi) = (
                truncate_to(lo as i128, modulus, target),
                truncate_to(hi as i128, modulus, target),
            );
            if tlo <= thi {
                out.push((tlo, thi));
            } else {
                out.push((tmin, thi));
                out.push((tlo, tmax));
            }
        }
        from_pairs(out)
    }
}

fn truncate_to(value: i128, modulus: i128, target: IntegerWidth) -> i64 {
    let mut r = value % modulus;
    if r < 0 {
        r += modulus;
    }
    match target {
        IntegerWidth::Byte => (r as u8 as i8) as i64,
        IntegerWidth::Short => (r as u16 as i16) as i64,
        IntegerWidth::Char16 => r as u16 as i64,
        IntegerWidth::Int => (r as u32 as i32) as i64,
        IntegerWidth::Long => value as i64,
    }
}
