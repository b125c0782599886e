//! Fixed-width integer types
//!
//! This module defines `FixedInt`, the generic value type behind all ten
//! integer types, and the aliases callers normally use:
//!
//! | alias   | width | signed |
//! |---------|-------|--------|
//! | `I8`    | 8     | yes    |
//! | `U8`    | 8     | no     |
//! | `I16`   | 16    | yes    |
//! | `U16`   | 16    | no     |
//! | `I32`   | 32    | yes    |
//! | `U32`   | 32    | no     |
//! | `I64`   | 64    | yes    |
//! | `U64`   | 64    | no     |
//! | `Isize` | word  | yes    |
//! | `Usize` | word  | no     |
//!
//! Each alias is a distinct type. Operations only combine values of the
//! same type; conversions are explicit calls.

mod bits;
mod conv;
mod core;
mod ops;
mod parse;

pub use self::core::FixedInt;

use crate::primitives::width::{W8, W16, W32, W64, Word};

pub type I8 = FixedInt<W8, true>;
pub type U8 = FixedInt<W8, false>;
pub type I16 = FixedInt<W16, true>;
pub type U16 = FixedInt<W16, false>;
pub type I32 = FixedInt<W32, true>;
pub type U32 = FixedInt<W32, false>;
pub type I64 = FixedInt<W64, true>;
pub type U64 = FixedInt<W64, false>;
pub type Isize = FixedInt<Word, true>;
pub type Usize = FixedInt<Word, false>;
