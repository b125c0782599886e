//! Width descriptors
//!
//! This module defines the closed set of integer widths supported by the
//! crate and the `IntKind` descriptor that pairs a width with a signedness.
//!
//! All range logic lives here. A `FixedInt` never computes its own bounds;
//! it asks its `IntKind`, so the ten integer types share one definition of
//! what "fits" means.
//!
//! The platform word size is resolved once, at build time, from
//! `target_pointer_width`.

use std::fmt::{Debug, Display, Formatter, Result};
use std::hash::Hash;

/// Number of bits in the platform word.
#[cfg(target_pointer_width = "64")]
pub const WORD_BITS: u32 = 64;

/// Number of bits in the platform word.
#[cfg(target_pointer_width = "32")]
pub const WORD_BITS: u32 = 32;

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("fixwidth only supports 32-bit and 64-bit targets");

/// One of the supported bit widths.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    W8,
    W16,
    W32,
    W64,
    /// Platform word, 32 or 64 bits depending on the target.
    Word,
}

impl Width {
    /// All widths, narrowest first. `Word` comes last.
    pub const ALL: [Width; 5] = [Width::W8, Width::W16, Width::W32, Width::W64, Width::Word];

    /// Returns the number of bits for this width.
    pub const fn bits(self) -> u32 {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W64 => 64,
            Width::Word => WORD_BITS,
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            Width::W8 => "8",
            Width::W16 => "16",
            Width::W32 => "32",
            Width::W64 => "64",
            Width::Word => "size",
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Type-level width marker.
///
/// Each marker is a distinct zero-sized type, which keeps `Isize` and `I64`
/// apart even on targets where both are 64 bits wide. The trait is sealed:
/// the set of widths is closed.
pub trait BitWidth:
    sealed::Sealed + Copy + Clone + Debug + Default + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// The runtime descriptor for this marker.
    const WIDTH: Width;

    /// Number of bits.
    const BITS: u32 = Self::WIDTH.bits();
}

macro_rules! width_marker {
    ($(#[$attr:meta])* $name:ident => $width:expr) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl sealed::Sealed for $name {}

        impl BitWidth for $name {
            const WIDTH: Width = $width;
        }
    };
}

width_marker!(
    /// 8-bit width marker.
    W8 => Width::W8
);
width_marker!(
    /// 16-bit width marker.
    W16 => Width::W16
);
width_marker!(
    /// 32-bit width marker.
    W32 => Width::W32
);
width_marker!(
    /// 64-bit width marker.
    W64 => Width::W64
);
width_marker!(
    /// Platform word width marker.
    Word => Width::Word
);

/// A width paired with a signedness: one of the ten integer type identities.
///
/// # Ranges
/// - signed:   `[-2^(n-1), 2^(n-1) - 1]`
/// - unsigned: `[0, 2^n - 1]`
///
/// Bounds are reported as `i128`, which holds every bound of every kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IntKind {
    pub width: Width,
    pub signed: bool,
}

impl IntKind {
    pub const I8: IntKind = IntKind::new(Width::W8, true);
    pub const U8: IntKind = IntKind::new(Width::W8, false);
    pub const I16: IntKind = IntKind::new(Width::W16, true);
    pub const U16: IntKind = IntKind::new(Width::W16, false);
    pub const I32: IntKind = IntKind::new(Width::W32, true);
    pub const U32: IntKind = IntKind::new(Width::W32, false);
    pub const I64: IntKind = IntKind::new(Width::W64, true);
    pub const U64: IntKind = IntKind::new(Width::W64, false);
    pub const ISIZE: IntKind = IntKind::new(Width::Word, true);
    pub const USIZE: IntKind = IntKind::new(Width::Word, false);

    /// Every kind, signed before unsigned for each width.
    pub const ALL: [IntKind; 10] = [
        IntKind::I8,
        IntKind::U8,
        IntKind::I16,
        IntKind::U16,
        IntKind::I32,
        IntKind::U32,
        IntKind::I64,
        IntKind::U64,
        IntKind::ISIZE,
        IntKind::USIZE,
    ];

    pub const fn new(width: Width, signed: bool) -> Self {
        IntKind { width, signed }
    }

    pub const fn bits(self) -> u32 {
        self.width.bits()
    }

    /// Mask covering the low `bits()` bits of a `u64`.
    pub const fn mask(self) -> u64 {
        if self.bits() == 64 {
            u64::MAX
        } else {
            (1u64 << self.bits()) - 1
        }
    }

    /// Smallest representable value.
    pub const fn min(self) -> i128 {
        if self.signed {
            -(1i128 << (self.bits() - 1))
        } else {
            0
        }
    }

    /// Largest representable value.
    pub const fn max(self) -> i128 {
        if self.signed {
            (1i128 << (self.bits() - 1)) - 1
        } else {
            (1i128 << self.bits()) - 1
        }
    }

    /// Number of distinct values, `2^n`.
    pub const fn capacity(self) -> u128 {
        1u128 << self.bits()
    }

    /// Returns `true` if `value` lies in `[min, max]`.
    pub const fn contains(self, value: i128) -> bool {
        value >= self.min() && value <= self.max()
    }

    /// Raw pattern of the sign bit for this width.
    pub const fn sign_bit(self) -> u64 {
        1u64 << (self.bits() - 1)
    }
}

impl Display for IntKind {
    /// Formats the kind the way Rust spells the matching primitive, e.g.
    /// `i8`, `u64`, `isize`.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let prefix = if self.signed { "i" } else { "u" };

        write!(f, "{}{}", prefix, self.width.suffix())
    }
}
