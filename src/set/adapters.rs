//! Bridges from a host data-flow engine's own types and facts into
//! this crate's domain: declared variable types, literal constants,
//! an existing value from another analysis pass, and (optionally)
//! programmer-supplied range annotations.

#[cfg(feature = "annotations")]
use alloc::vec::Vec;

use crate::width::IntegerWidth;

use super::shape::IntSet;

/// A host type the engine can ask for the integer width of.
///
/// Implemented by the embedder against its own type representation;
/// this crate never constructs one itself.
pub trait IntegerTypeLike {
    /// The width this type denotes, or `None` if it isn't an integer
    /// type the engine tracks with this domain.
    fn integer_width(&self) -> Option<IntegerWidth>;
}

impl IntegerTypeLike for IntegerWidth {
    fn integer_width(&self) -> Option<IntegerWidth> {
        Some(*self)
    }
}

/// A literal scalar constant from the host's parse tree or bytecode
/// constant pool, tagged with its declared width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxedScalar {
    /// A signed 8-bit literal.
    I8(i8),
    /// A signed 16-bit literal.
    I16(i16),
    /// An unsigned 16-bit character literal.
    Char16(u16),
    /// A signed 32-bit literal.
    I32(i32),
    /// A signed 64-bit literal.
    I64(i64),
}

/// A value as produced by another pass of a host data-flow engine,
/// asked only whether it has already resolved to a single constant.
pub trait DataFlowValue {
    /// The constant this value has statically resolved to, if any.
    fn known_constant(&self) -> Option<i64>;
}

/// A range-declaring annotation recognized by [`IntSet::from_annotations`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnnotationKind {
    /// `[from, to]`, ignored if `to < from`.
    Range(i64, i64),
    /// `[value, MAX]`.
    Min(i64),
    /// `[MIN, value]`.
    Max(i64),
    /// `[-1, MAX]`.
    GteNegativeOne,
    /// `[0, MAX]`.
    NonNegative,
    /// `[1, MAX]`.
    Positive,
}

impl AnnotationKind {
    fn contribution(self) -> IntSet {
        match self {
            AnnotationKind::Range(from, to) if from <= to => IntSet::mk_range(from, to),
            AnnotationKind::Range(_, _) => IntSet::all(),
            AnnotationKind::Min(v) => IntSet::mk_range(v, i64::MAX),
            AnnotationKind::Max(v) => IntSet::mk_range(i64::MIN, v),
            AnnotationKind::GteNegativeOne => IntSet::mk_range(-1, i64::MAX),
            AnnotationKind::NonNegative => IntSet::mk_range(0, i64::MAX),
            AnnotationKind::Positive => IntSet::mk_range(1, i64::MAX),
        }
    }
}

/// A declaration site (field, parameter, local) the host engine can
/// check for range-declaring annotations.
#[cfg(feature = "annotations")]
pub trait AnnotatedOwner {
    /// Every recognized range-declaring annotation present on this
    /// declaration. Unrecognized annotation names are the host's
    /// concern to filter out before calling in; this trait only ever
    /// sees ones already mapped to an [`AnnotationKind`].
    fn annotations(&self) -> Vec<AnnotationKind>;
}

impl IntSet {
    /// Seed a set from a host type's declared integer width.
    ///
    /// Returns [`IntSet::empty`] for a type this domain doesn't track
    /// (e.g. a floating-point or reference type): such a type
    /// contributes no integer values, rather than standing in for
    /// "any integer value" the way an unconstrained integer type
    /// would.
    pub fn from_type<T: IntegerTypeLike>(ty: &T) -> IntSet {
        match ty.integer_width() {
            Some(width) => {
                let (lo, hi) = width.full_range();
                IntSet::mk_range(lo, hi)
            }
            None => IntSet::Empty,
        }
    }

    /// Seed a set from a single literal constant.
    pub fn from_constant(value: BoxedScalar) -> IntSet {
        let v = match value {
            BoxedScalar::I8(v) => v as i64,
            BoxedScalar::I16(v) => v as i64,
            BoxedScalar::Char16(v) => v as i64,
            BoxedScalar::I32(v) => v as i64,
            BoxedScalar::I64(v) => v,
        };
        IntSet::point(v)
    }

    /// Narrow an upstream [`DataFlowValue`] into this domain: a point
    /// if it has already resolved to a constant, the full range
    /// otherwise.
    pub fn from_data_flow_value<V: DataFlowValue>(value: &V) -> IntSet {
        match value.known_constant() {
            Some(c) => IntSet::point(c),
            None => IntSet::all(),
        }
    }

    /// Seed a set from a declaration's range-declaring annotations,
    /// intersecting every recognized contribution together. A
    /// declaration with no recognized annotations is unconstrained.
    ///
    /// # Errors
    /// Never fails: a malformed `Range(from, to)` with `to < from`
    /// contributes nothing rather than erroring, since an annotation
    /// the embedder already accepted at compile time shouldn't make a
    /// downstream analysis bail out.
    #[cfg(feature = "annotations")]
    pub fn from_annotations<T: AnnotatedOwner>(owner: &T) -> IntSet {
        owner
            .annotations()
            .into_iter()
            .fold(IntSet::all(), |acc, a| acc.intersect(&a.contribution()))
    }
}
