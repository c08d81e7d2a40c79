#![doc = include_str!("../README.md")]
#![no_std]
#![deny(clippy::all)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::result_unit_err)]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod error;
pub mod set;
pub mod width;

pub use error::DomainError;
pub use set::{
    bin_op, AnnotationKind, BinOpToken, BoxedScalar, DataFlowValue, Enumerate, IntSet,
    IntegerTypeLike, Relation,
};
#[cfg(feature = "annotations")]
pub use set::AnnotatedOwner;
pub use width::{IntegerWidth, Width};
