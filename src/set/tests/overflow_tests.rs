use crate::set::IntSet;
use crate::width::Width;

#[test]
fn no_overflow_when_every_combination_fits() {
    let a = IntSet::range(10, 20).unwrap();
    let b = IntSet::range(1, 5).unwrap();
    assert!(!a.subtraction_may_overflow(&b, Width::W32));
}

#[test]
fn overflow_possible_at_width_boundary() {
    let a = IntSet::point(i32::MIN as i64);
    let b = IntSet::point(1);
    assert!(a.subtraction_may_overflow(&b, Width::W32));
}

#[test]
fn empty_operand_never_overflows() {
    let a = IntSet::empty();
    let b = IntSet::point(1);
    assert!(!a.subtraction_may_overflow(&b, Width::W32));
    assert!(!b.subtraction_may_overflow(&a, Width::W32));
}
