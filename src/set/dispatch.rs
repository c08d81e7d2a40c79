//! A token-dispatched entry point for callers that hold an operator
//! as data (e.g. decoded from a bytecode instruction or an AST node)
//! rather than as a direct method call.

use super::shape::IntSet;
use crate::width::Width;

/// A binary operator this domain has a transfer function for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOpToken {
    /// `x + y`
    Add,
    /// `x - y`
    Sub,
    /// `x * y`
    Mul,
    /// `x / y`, truncating
    Div,
    /// `x % y`, truncating
    Rem,
    /// `x >> y`, sign-extending
    ShiftRight,
    /// `x >>> y`, zero-filling
    UnsignedShiftRight,
    /// `x & y`
    BitAnd,
    /// An operator token the host decoded that this domain has no
    /// transfer function for (e.g. a bitwise `|`/`^` the caller's
    /// opcode set exposes but this domain doesn't model).
    Unsupported,
}

/// Apply `op` to `lhs` and `rhs` at `width`, delegating to the
/// matching transfer function.
///
/// [`BinOpToken::Unsupported`] contributes no information: it returns
/// [`IntSet::all`] rather than panicking, so a host dispatching on a
/// wider opcode set than this domain models degrades gracefully
/// instead of failing to analyze the rest of the program.
pub fn bin_op(op: BinOpToken, lhs: &IntSet, rhs: &IntSet, width: Width) -> IntSet {
    match op {
        BinOpToken::Add => lhs.plus(rhs, width),
        BinOpToken::Sub => lhs.minus(rhs, width),
        BinOpToken::Mul => lhs.mul(rhs, width),
        BinOpToken::Div => lhs.div(rhs, width),
        BinOpToken::Rem => lhs.rem(rhs, width),
        BinOpToken::ShiftRight => lhs.shift_right(rhs, width),
        BinOpToken::UnsignedShiftRight => lhs.unsigned_shift_right(rhs, width),
        BinOpToken::BitAnd => lhs.bitwise_and(rhs, width),
        BinOpToken::Unsupported => {
            #[cfg(feature = "tracing")]
            tracing::debug!("bin_op called with an unsupported operator token");
            IntSet::all()
        }
    }
}
