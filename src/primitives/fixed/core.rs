//! Fixed-width integer value type
//!
//! `FixedInt<W, SIGNED>` is a single generic value type standing in for all
//! ten integer types. The width marker `W` and the `SIGNED` flag select an
//! `IntKind`, and every range decision is delegated to it.
//!
//! The value is stored as its raw two's-complement bit pattern in the low
//! `W::BITS` bits of a `u64`. Bits above the width are always zero; every
//! constructor goes through `from_raw`, which masks them off.

use std::cmp::Ordering;
use std::fmt::{Binary, Debug, Display, Formatter, LowerHex, Octal, Result, UpperHex};
use std::marker::PhantomData;

use crate::primitives::width::{BitWidth, IntKind};

/// Fixed-width integer of width `W`, signed when `SIGNED` is `true`.
///
/// Values are immutable and `Copy`. Two values can only be combined when
/// they have the same width and signedness; moving between types always
/// goes through one of the explicit constructors.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct FixedInt<W: BitWidth, const SIGNED: bool>(pub(crate) u64, PhantomData<W>);

impl<W: BitWidth, const SIGNED: bool> FixedInt<W, SIGNED> {
    /// The width and signedness of this type.
    pub const KIND: IntKind = IntKind::new(W::WIDTH, SIGNED);

    /// Number of bits.
    pub const BITS: u32 = W::BITS;

    pub(crate) const MASK: u64 = Self::KIND.mask();

    /// The value zero.
    pub const ZERO: Self = Self::from_raw(0);

    /// The value one.
    pub const ONE: Self = Self::from_raw(1);

    /// Smallest representable value.
    pub const MIN: Self = Self::wrap_i128(Self::KIND.min());

    /// Largest representable value.
    pub const MAX: Self = Self::wrap_i128(Self::KIND.max());

    /// Builds a value from a raw pattern, discarding bits above the width.
    pub(crate) const fn from_raw(bits: u64) -> Self {
        FixedInt(bits & Self::MASK, PhantomData)
    }

    /// Builds a value from the low `W::BITS` bits of `value`'s
    /// two's-complement representation.
    pub(crate) const fn wrap_i128(value: i128) -> Self {
        Self::from_raw(value as u64)
    }

    /// Returns the raw bit pattern, zero-extended to 64 bits.
    pub const fn to_bits(self) -> u64 {
        self.0
    }

    /// Returns the numeric value.
    ///
    /// Signed values are sign-extended from their width.
    pub const fn to_i128(self) -> i128 {
        if SIGNED {
            let shift = 64 - Self::BITS;

            (((self.0 << shift) as i64) >> shift) as i128
        } else {
            self.0 as i128
        }
    }

    pub const fn is_negative(self) -> bool {
        SIGNED && self.0 & Self::KIND.sign_bit() != 0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl<W: BitWidth, const SIGNED: bool> Ord for FixedInt<W, SIGNED> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_i128().cmp(&other.to_i128())
    }
}

impl<W: BitWidth, const SIGNED: bool> PartialOrd for FixedInt<W, SIGNED> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: BitWidth, const SIGNED: bool> Display for FixedInt<W, SIGNED> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(&self.to_i128(), f)
    }
}

impl<W: BitWidth, const SIGNED: bool> Debug for FixedInt<W, SIGNED> {
    /// Formats as `kind(value)`, e.g. `i8(-128)`.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}({})", Self::KIND, self.to_i128())
    }
}

// Radix formats print the two's-complement pattern, as the primitives do.

impl<W: BitWidth, const SIGNED: bool> Binary for FixedInt<W, SIGNED> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Binary::fmt(&self.0, f)
    }
}

impl<W: BitWidth, const SIGNED: bool> Octal for FixedInt<W, SIGNED> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Octal::fmt(&self.0, f)
    }
}

impl<W: BitWidth, const SIGNED: bool> LowerHex for FixedInt<W, SIGNED> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        LowerHex::fmt(&self.0, f)
    }
}

impl<W: BitWidth, const SIGNED: bool> UpperHex for FixedInt<W, SIGNED> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        UpperHex::fmt(&self.0, f)
    }
}
