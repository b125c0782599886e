//! Reading integers from text
//!
//! Two grammars are supported:
//! - plain digits in a caller-chosen radix (`from_str_radix`, `FromStr`),
//!   with an optional leading sign
//! - source-literal syntax (`parse_literal`): an optional sign, an optional
//!   `0b` / `0o` / `0x` prefix, and `_` separators after the first digit
//!
//! Digits above 9 are case-insensitive. Magnitudes are accumulated in
//! `u128`, saturating, so arbitrarily long input is range-checked without
//! overflow.

use std::str::FromStr;

use log::trace;

use crate::primitives::error::{IntError, ParseIntError};
use crate::primitives::fixed::FixedInt;
use crate::primitives::width::BitWidth;

/// Splits a leading `-` or `+` off `text`.
///
/// Returns whether the value is negative, the remaining text, and the byte
/// offset of the remaining text within `text`.
fn split_sign(text: &str) -> (bool, &str, usize) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..], 1),
        Some(b'+') => (false, &text[1..], 1),
        _ => (false, text, 0),
    }
}

/// Splits a radix prefix off a literal.
fn split_prefix(text: &str) -> (u32, &str, usize) {
    match text.get(..2) {
        Some("0b") => (2, &text[2..], 2),
        Some("0o") => (8, &text[2..], 2),
        Some("0x") => (16, &text[2..], 2),
        _ => (10, text, 0),
    }
}

/// Accumulates the digits of `text` in `radix`.
///
/// `offset` is added to reported error positions. With `separators`, an
/// `_` is skipped anywhere after the first digit.
fn magnitude(text: &str, radix: u32, offset: usize, separators: bool) -> Result<u128, ParseIntError> {
    if text.is_empty() {
        return Err(ParseIntError::Empty);
    }

    let mut value = 0u128;
    let mut seen_digit = false;

    for (i, c) in text.char_indices() {
        if separators && seen_digit && c == '_' {
            continue;
        }

        let digit = c
            .to_digit(radix)
            .ok_or(ParseIntError::InvalidDigit { position: offset + i })?;

        seen_digit = true;
        value = value
            .saturating_mul(radix as u128)
            .saturating_add(digit as u128);
    }

    Ok(value)
}

/// Applies a sign to a magnitude, saturating at the `i128` bounds.
fn apply_sign(negative: bool, magnitude: u128) -> i128 {
    if negative {
        0i128.checked_sub_unsigned(magnitude).unwrap_or(i128::MIN)
    } else {
        i128::try_from(magnitude).unwrap_or(i128::MAX)
    }
}

impl<W: BitWidth, const SIGNED: bool> FixedInt<W, SIGNED> {
    /// Parses `text` as digits in `radix`, with an optional leading `-` or
    /// `+`.
    ///
    /// Returns `None` if the text is empty, contains a character that is not
    /// a digit in `radix`, or denotes a value outside the type's range.
    ///
    /// # Panics
    /// If `radix` is not in `2..=36`.
    pub fn from_str_radix(text: &str, radix: u32) -> Option<Self> {
        Self::parse_radix(text, radix).ok()
    }

    fn parse_radix(text: &str, radix: u32) -> Result<Self, ParseIntError> {
        assert!(
            (2..=36).contains(&radix),
            "radix must be in 2..=36, got {}",
            radix
        );

        let (negative, digits, offset) = split_sign(text);

        let value = magnitude(digits, radix, offset, false)
            .map(|m| apply_sign(negative, m))
            .and_then(|v| Self::exactly_from_i128(v).ok_or(ParseIntError::OutOfRange));

        value.inspect_err(|err| {
            trace!("{:?} rejected for {} (radix {}): {}", text, Self::KIND, radix, err)
        })
    }

    /// Parses source-literal syntax: `42`, `-42`, `0b101010`, `0o52`,
    /// `0x2A`, `0x00_ff`, `1_000_000_000`.
    ///
    /// # Errors
    /// `IntError::Literal` if the text is malformed, `IntError::Range` if
    /// the value does not fit.
    pub fn parse_literal(text: &str) -> Result<Self, IntError> {
        let (negative, rest, sign_len) = split_sign(text);
        let (radix, digits, prefix_len) = split_prefix(rest);

        let magnitude = magnitude(digits, radix, sign_len + prefix_len, true)
            .inspect_err(|err| trace!("literal {:?} is malformed: {}", text, err))?;

        Self::from_literal(apply_sign(negative, magnitude))
    }
}

impl<W: BitWidth, const SIGNED: bool> FromStr for FixedInt<W, SIGNED> {
    type Err = ParseIntError;

    /// Parses decimal digits; see `from_str_radix`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_radix(s, 10)
    }
}
