//! Fixed-width integer arithmetic
//!
//! This crate provides a closed set of fixed-width integer types, 8, 16, 32
//! and 64 bits plus the platform word, each signed and unsigned, with
//! explicit semantics for everything that can go wrong at a fixed width.
//!
//! # Module overview
//!
//! - `primitives`
//!   The `FixedInt` value type and its aliases (`I8` .. `U64`, `Isize`,
//!   `Usize`), the `IntKind` range descriptor, and the error types.
//!
//! # What the types provide
//!
//! - construction from literals, text in any radix 2..=36, source-literal
//!   syntax, other integer types, raw bit patterns, and floats
//! - addition, subtraction, multiplication, division, remainder and
//!   negation in checked, wrapping, and overflow-reporting forms
//! - bitwise operators, logical and arithmetic shifts, rotations, byte
//!   swapping and endianness conversion
//!
//! # Design goals
//!
//! - One value type per width and signedness; no implicit conversions
//! - Range logic defined once, in `IntKind`
//! - `Result` for construction and checked arithmetic, `Option` for parsing
//!   and exact narrowing
//! - No heap allocations, no shared state; every operation is a pure
//!   function of its inputs
//!
//! Failure paths emit `log` records at `trace` level. The crate never
//! installs a logger.

pub mod primitives;
