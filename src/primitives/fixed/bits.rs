//! Bit-level operations for `FixedInt`
//!
//! Bitwise operators, shifts, rotations, byte order, and bit counting. None
//! of these can overflow; all of them work on the two's-complement pattern
//! of the value within its width.
//!
//! Shift semantics:
//! - `<<` is logical for both signednesses and may change the sign bit
//! - `>>` is logical for unsigned values and arithmetic (sign-filling) for
//!   signed ones
//! - shifting by the width or more leaves only fill bits: zero, or `-1` for
//!   a negative value shifted right

use std::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

use crate::primitives::fixed::FixedInt;
use crate::primitives::width::BitWidth;

impl<W: BitWidth, const SIGNED: bool> Not for FixedInt<W, SIGNED> {
    type Output = Self;

    fn not(self) -> Self {
        Self::from_raw(!self.0)
    }
}

impl<W: BitWidth, const SIGNED: bool> BitAnd for FixedInt<W, SIGNED> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self::from_raw(self.0 & rhs.0)
    }
}

impl<W: BitWidth, const SIGNED: bool> BitOr for FixedInt<W, SIGNED> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::from_raw(self.0 | rhs.0)
    }
}

impl<W: BitWidth, const SIGNED: bool> BitXor for FixedInt<W, SIGNED> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self::from_raw(self.0 ^ rhs.0)
    }
}

/// Logical left shift.
impl<W: BitWidth, const SIGNED: bool> Shl<u32> for FixedInt<W, SIGNED> {
    type Output = Self;

    fn shl(self, rhs: u32) -> Self {
        if rhs >= Self::BITS {
            return Self::ZERO;
        }

        Self::from_raw(self.0 << rhs)
    }
}

/// Right shift: arithmetic for signed types, logical for unsigned.
impl<W: BitWidth, const SIGNED: bool> Shr<u32> for FixedInt<W, SIGNED> {
    type Output = Self;

    fn shr(self, rhs: u32) -> Self {
        if SIGNED {
            // Capping at the width leaves only sign bits.
            return Self::wrap_i128(self.to_i128() >> rhs.min(Self::BITS));
        }

        if rhs >= Self::BITS {
            return Self::ZERO;
        }

        Self::from_raw(self.0 >> rhs)
    }
}

impl<W: BitWidth, const SIGNED: bool> FixedInt<W, SIGNED> {
    /// Rotates the bit pattern left by `k` bits, modulo the width.
    ///
    /// Signed values rotate their raw pattern; the sign bit is just another
    /// bit here.
    pub const fn rotate_left(self, k: u32) -> Self {
        let k = k % Self::BITS;

        if k == 0 {
            return self;
        }

        Self::from_raw((self.0 << k) | (self.0 >> (Self::BITS - k)))
    }

    /// Rotates the bit pattern right by `k` bits, modulo the width.
    pub const fn rotate_right(self, k: u32) -> Self {
        let k = k % Self::BITS;

        if k == 0 {
            return self;
        }

        Self::from_raw((self.0 >> k) | (self.0 << (Self::BITS - k)))
    }

    /// Reverses the byte order within the width. A no-op for 8-bit types.
    pub const fn byte_swapped(self) -> Self {
        Self::from_raw(self.0.swap_bytes() >> (64 - Self::BITS))
    }

    /// Reads `raw` as a value stored in big-endian byte order.
    pub const fn from_big_endian(raw: Self) -> Self {
        if cfg!(target_endian = "big") {
            raw
        } else {
            raw.byte_swapped()
        }
    }

    /// Reads `raw` as a value stored in little-endian byte order.
    pub const fn from_little_endian(raw: Self) -> Self {
        if cfg!(target_endian = "little") {
            raw
        } else {
            raw.byte_swapped()
        }
    }

    /// Returns the value with its bytes in big-endian order.
    pub const fn to_big_endian(self) -> Self {
        Self::from_big_endian(self)
    }

    /// Returns the value with its bytes in little-endian order.
    pub const fn to_little_endian(self) -> Self {
        Self::from_little_endian(self)
    }

    /// Counts the zero bits above the highest set bit, within the width.
    ///
    /// # Returns
    /// A number in `0..=W::BITS`.
    pub const fn leading_zeros(self) -> u32 {
        self.0.leading_zeros() - (64 - Self::BITS)
    }

    /// Counts the zero bits below the lowest set bit; `W::BITS` for zero.
    pub const fn trailing_zeros(self) -> u32 {
        if self.0 == 0 {
            return Self::BITS;
        }

        self.0.trailing_zeros()
    }

    pub const fn count_ones(self) -> u32 {
        self.0.count_ones()
    }
}
