//! The integer value-set domain itself: canonical shapes, lattice
//! operations, and abstract transfer functions, split one concern per
//! file.

mod adapters;
mod arith;
mod bitand;
mod cast;
mod dispatch;
mod divmod;
mod enumerate;
mod intervals;
mod lattice;
mod overflow;
mod shape;
mod shift;

pub use adapters::{AnnotationKind, BoxedScalar, DataFlowValue, IntegerTypeLike};
#[cfg(feature = "annotations")]
pub use adapters::AnnotatedOwner;
pub use dispatch::{bin_op, BinOpToken};
pub use enumerate::Enumerate;
pub use lattice::Relation;
pub use shape::IntSet;

#[cfg(test)]
mod tests;
