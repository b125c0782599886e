//! Same-width reinterpretation between signed and unsigned types.
//!
//! Every `n`-bit pattern has exactly one reading in each signedness, so both
//! directions are total.

use crate::primitives::fixed::FixedInt;
use crate::primitives::width::BitWidth;

impl<W: BitWidth> FixedInt<W, true> {
    /// Reads the unsigned value's bits as a two's-complement signed value.
    pub const fn from_bit_pattern(bits: FixedInt<W, false>) -> Self {
        Self::from_raw(bits.0)
    }

    /// Returns the unsigned value with the same bits.
    pub const fn to_bit_pattern(self) -> FixedInt<W, false> {
        FixedInt::<W, false>::from_raw(self.0)
    }
}

impl<W: BitWidth> FixedInt<W, false> {
    /// Reads the signed value's two's-complement bits as an unsigned value.
    pub const fn from_bit_pattern(bits: FixedInt<W, true>) -> Self {
        Self::from_raw(bits.0)
    }

    /// Returns the signed value with the same bits.
    pub const fn to_bit_pattern(self) -> FixedInt<W, true> {
        FixedInt::<W, true>::from_raw(self.0)
    }
}
