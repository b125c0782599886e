//! Error types
//!
//! Construction from literals and checked arithmetic report failures
//! through `IntError`. Text parsing reports through `ParseIntError`, which is
//! surfaced directly by `FromStr` and wrapped by literal parsing.
//!
//! Parsing by radix and exact narrowing do not use these types at their
//! public boundary: they return `Option` and leave the decision to the
//! caller.

use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::primitives::width::IntKind;

/// The arithmetic operation that failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Neg,
}

impl Display for ArithOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArithOp::Add => "addition",
            ArithOp::Sub => "subtraction",
            ArithOp::Mul => "multiplication",
            ArithOp::Div => "division",
            ArithOp::Rem => "remainder",
            ArithOp::Neg => "negation",
        })
    }
}

/// Errors raised by construction and checked arithmetic.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum IntError {
    /// A literal value does not fit in the target type. Values beyond the
    /// `i128` range are reported saturated.
    #[error("literal {value} out of range for {kind}")]
    Range { value: i128, kind: IntKind },
    #[error("{op} overflowed {kind}")]
    Overflow { op: ArithOp, kind: IntKind },
    #[error("{op} by zero in {kind}")]
    DivisionByZero { op: ArithOp, kind: IntKind },
    #[error("{value} cannot be represented as {kind}")]
    NotRepresentable { value: f64, kind: IntKind },
    #[error("malformed integer literal: {0}")]
    Literal(#[from] ParseIntError),
}

/// Why a piece of text could not be read as an integer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseIntError {
    #[error("no digits")]
    Empty,
    /// Byte offset of the offending character.
    #[error("invalid digit at byte {position}")]
    InvalidDigit { position: usize },
    #[error("value out of range")]
    OutOfRange,
}
