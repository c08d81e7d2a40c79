use crate::set::IntSet;
use crate::width::Width;

#[test]
fn bitwise_and_of_points_matches_native_and() {
    let a = IntSet::point(0b1010);
    let b = IntSet::point(0b1100);
    assert_eq!(a.bitwise_and(&b, Width::W32), IntSet::point(0b1000));
}

#[test]
fn bitwise_and_with_a_mask_clears_high_bits() {
    let a = IntSet::range(0, 255).unwrap();
    let mask = IntSet::point(0x0F);
    let r = a.bitwise_and(&mask, Width::W32);
    assert_eq!(r, IntSet::range(0, 0x0F).unwrap());
}

#[test]
fn bitwise_and_with_zero_is_zero() {
    let a = IntSet::range(-1000, 1000).unwrap();
    let z = IntSet::point(0);
    assert_eq!(a.bitwise_and(&z, Width::W32), IntSet::point(0));
}

#[test]
fn bitwise_and_is_sound_over_a_wide_range() {
    let a = IntSet::range(100, 4000).unwrap();
    let b = IntSet::range(1, 3000).unwrap();
    // Every native `x & y` for x, y drawn from these ranges must be
    // contained in the abstract result.
    let r = a.bitwise_and(&b, Width::W32);
    for x in [100i64, 2000, 4000] {
        for y in [1i64, 1500, 3000] {
            assert!(r.contains_value(x & y), "missing {} & {} = {}", x, y, x & y);
        }
    }
}
