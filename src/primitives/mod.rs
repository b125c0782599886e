//! Primitive types
//!
//! This module defines the fixed-width integer primitives of the crate.
//!
//! - `width`: the closed set of widths and the `IntKind` descriptor that
//!   owns all range logic
//! - `fixed`: the `FixedInt` value type and its ten aliases
//! - `error`: failures reported by construction and checked arithmetic
//!
//! Everything here is a pure function over `Copy` values.

mod error;
mod fixed;
mod width;

pub use error::{ArithOp, IntError, ParseIntError};
pub use fixed::{FixedInt, I8, I16, I32, I64, Isize, U8, U16, U32, U64, Usize};
pub use width::{BitWidth, IntKind, W8, W16, W32, W64, WORD_BITS, Width, Word};
