//! Lossless widening between fixed types.
//!
//! `From` is only provided where every source value fits in the target.
//! The word-sized types are left out since their width depends on the
//! target; go through `exactly` or `truncating` for those.

use crate::primitives::fixed::{I8, I16, I32, I64, U8, U16, U32, U64};

macro_rules! widen {
    ($from:ty => $($to:ty),+) => {
        $(
            impl From<$from> for $to {
                fn from(value: $from) -> Self {
                    <$to>::wrap_i128(value.to_i128())
                }
            }
        )+
    };
}

widen!(I8 => I16, I32, I64);
widen!(I16 => I32, I64);
widen!(I32 => I64);

widen!(U8 => U16, U32, U64, I16, I32, I64);
widen!(U16 => U32, U64, I32, I64);
widen!(U32 => U64, I64);
