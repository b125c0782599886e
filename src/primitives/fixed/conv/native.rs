//! Conversions between each fixed type and its matching primitive.
//!
//! The pairs have identical ranges, so both directions are `From`.

use crate::primitives::fixed::{I8, I16, I32, I64, Isize, U8, U16, U32, U64, Usize};

macro_rules! native_pair {
    ($fixed:ty, $native:ty) => {
        impl From<$native> for $fixed {
            fn from(value: $native) -> Self {
                <$fixed>::wrap_i128(value as i128)
            }
        }

        impl From<$fixed> for $native {
            fn from(value: $fixed) -> Self {
                // Same width and signedness: the cast only reinterprets.
                value.to_i128() as $native
            }
        }

        impl $fixed {
            /// Returns the value as its matching primitive.
            pub const fn get(self) -> $native {
                self.to_i128() as $native
            }
        }
    };
}

native_pair!(I8, i8);
native_pair!(U8, u8);
native_pair!(I16, i16);
native_pair!(U16, u16);
native_pair!(I32, i32);
native_pair!(U32, u32);
native_pair!(I64, i64);
native_pair!(U64, u64);
native_pair!(Isize, isize);
native_pair!(Usize, usize);

