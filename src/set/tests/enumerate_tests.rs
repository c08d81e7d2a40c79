use crate::set::IntSet;
use std::vec;

#[test]
fn enumerate_walks_a_single_range() {
    let s = IntSet::range(3, 7).unwrap();
    assert_eq!(s.enumerate().collect::<std::vec::Vec<_>>(), vec![3, 4, 5, 6, 7]);
}

#[test]
fn enumerate_walks_a_range_set_in_order() {
    let s = IntSet::from_ranges(&[0, 1, 10, 12], 4).unwrap();
    assert_eq!(
        s.enumerate().collect::<std::vec::Vec<_>>(),
        vec![0, 1, 10, 11, 12]
    );
}

#[test]
fn enumerate_reversed_matches_forward_reversed() {
    let s = IntSet::from_ranges(&[0, 1, 10, 12], 4).unwrap();
    let fwd: std::vec::Vec<_> = s.enumerate().collect();
    let mut rev: std::vec::Vec<_> = s.enumerate().rev().collect();
    rev.reverse();
    assert_eq!(fwd, rev);
}

#[test]
fn enumerate_from_both_ends_meets_in_the_middle() {
    let s = IntSet::range(1, 4).unwrap();
    let mut it = s.enumerate();
    assert_eq!(it.next(), Some(1));
    assert_eq!(it.next_back(), Some(4));
    assert_eq!(it.next(), Some(2));
    assert_eq!(it.next_back(), Some(3));
    assert_eq!(it.next(), None);
    assert_eq!(it.next_back(), None);
}

#[test]
fn enumerate_of_empty_set_yields_nothing() {
    assert_eq!(IntSet::empty().enumerate().next(), None);
}
