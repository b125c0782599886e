//! Range-checked and truncating construction.

use log::trace;

use crate::primitives::error::IntError;
use crate::primitives::fixed::FixedInt;
use crate::primitives::width::BitWidth;

impl<W: BitWidth, const SIGNED: bool> FixedInt<W, SIGNED> {
    /// Creates a value from a literal.
    ///
    /// # Errors
    /// Returns `IntError::Range` if `value` is outside `[MIN, MAX]`.
    pub fn from_literal(value: i128) -> Result<Self, IntError> {
        if !Self::KIND.contains(value) {
            trace!("literal {} rejected for {}", value, Self::KIND);

            return Err(IntError::Range {
                value,
                kind: Self::KIND,
            });
        }

        Ok(Self::wrap_i128(value))
    }

    /// Converts `source` if its value fits exactly, `None` otherwise.
    ///
    /// Works across widths and signedness, in either direction.
    pub fn exactly<V: BitWidth, const S: bool>(source: FixedInt<V, S>) -> Option<Self> {
        Self::exactly_from_i128(source.to_i128())
    }

    /// Converts a native value if it fits exactly, `None` otherwise.
    pub fn exactly_from_i128(value: i128) -> Option<Self> {
        Self::KIND.contains(value).then(|| Self::wrap_i128(value))
    }

    /// Keeps the low `W::BITS` bits of `source`, read in this type's
    /// signedness.
    ///
    /// A narrower signed source is sign-extended first, so widening a
    /// negative value keeps it negative. Never fails.
    pub fn truncating<V: BitWidth, const S: bool>(source: FixedInt<V, S>) -> Self {
        Self::wrap_i128(source.to_i128())
    }

    /// Keeps the low `W::BITS` bits of a native value's two's-complement
    /// pattern. Never fails.
    pub fn truncating_from_i128(value: i128) -> Self {
        Self::wrap_i128(value)
    }

    /// Converts a float, truncating toward zero.
    ///
    /// # Errors
    /// Returns `IntError::NotRepresentable` for NaN, infinities, and values
    /// whose integral part is out of range.
    pub fn from_f64(value: f64) -> Result<Self, IntError> {
        // `as` saturates, and a saturated i128 is never in range.
        let truncated = value.trunc() as i128;

        if !value.is_finite() || !Self::KIND.contains(truncated) {
            trace!("float {} rejected for {}", value, Self::KIND);

            return Err(IntError::NotRepresentable {
                value,
                kind: Self::KIND,
            });
        }

        Ok(Self::wrap_i128(truncated))
    }
}
