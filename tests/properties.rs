use fixwidth::primitives::{I8, I16, I32, I64, U8, U16, U64};

use proptest::prelude::*;

fn non_zero_i64() -> impl Strategy<Value = i64> {
    any::<i64>().prop_filter("non-zero divisor", |v| *v != 0)
}

proptest! {
    #[test]
    fn bit_pattern_round_trips(v in any::<i32>()) {
        let value = I32::from(v);

        prop_assert_eq!(I32::from_bit_pattern(value.to_bit_pattern()), value);
        prop_assert_eq!(value.to_bit_pattern().get(), v as u32);
    }

    #[test]
    fn byte_swap_is_an_involution(v in any::<u64>(), w in any::<i16>()) {
        prop_assert_eq!(U64::from(v).byte_swapped().byte_swapped(), U64::from(v));
        prop_assert_eq!(U64::from(v).byte_swapped().get(), v.swap_bytes());
        prop_assert_eq!(I16::from(w).byte_swapped().byte_swapped(), I16::from(w));
        prop_assert_eq!(I16::from(w).byte_swapped().get(), w.swap_bytes());
    }

    #[test]
    fn reporting_agrees_with_checked(a in any::<i8>(), b in any::<i8>()) {
        let (x, y) = (I8::from(a), I8::from(b));

        for (reported, checked, wrapped) in [
            (x.overflowing_add(y), x.checked_add(y), x.wrapping_add(y)),
            (x.overflowing_sub(y), x.checked_sub(y), x.wrapping_sub(y)),
            (x.overflowing_mul(y), x.checked_mul(y), x.wrapping_mul(y)),
        ] {
            prop_assert_eq!(reported.0, wrapped);
            prop_assert_eq!(reported.1, checked.is_err());

            if !reported.1 {
                prop_assert_eq!(checked, Ok(wrapped));
            }
        }
    }

    #[test]
    fn small_arithmetic_matches_primitives(a in any::<i8>(), b in any::<i8>(), c in any::<u16>(), d in any::<u16>()) {
        let (x, y) = (I8::from(a), I8::from(b));
        let (u, w) = (U16::from(c), U16::from(d));

        let (v, o) = a.overflowing_add(b);
        prop_assert_eq!(x.overflowing_add(y), (I8::from(v), o));
        let (v, o) = a.overflowing_mul(b);
        prop_assert_eq!(x.overflowing_mul(y), (I8::from(v), o));
        let (v, o) = c.overflowing_sub(d);
        prop_assert_eq!(u.overflowing_sub(w), (U16::from(v), o));
        let (v, o) = c.overflowing_mul(d);
        prop_assert_eq!(u.overflowing_mul(w), (U16::from(v), o));
    }

    #[test]
    fn wide_arithmetic_matches_primitives(a in any::<i64>(), b in any::<i64>(), c in any::<u64>(), d in any::<u64>()) {
        let (x, y) = (I64::from(a), I64::from(b));
        let (u, w) = (U64::from(c), U64::from(d));

        let (v, o) = a.overflowing_add(b);
        prop_assert_eq!(x.overflowing_add(y), (I64::from(v), o));
        let (v, o) = a.overflowing_sub(b);
        prop_assert_eq!(x.overflowing_sub(y), (I64::from(v), o));
        let (v, o) = a.overflowing_mul(b);
        prop_assert_eq!(x.overflowing_mul(y), (I64::from(v), o));
        let (v, o) = c.overflowing_mul(d);
        prop_assert_eq!(u.overflowing_mul(w), (U64::from(v), o));
    }

    #[test]
    fn division_matches_primitives(a in any::<i64>(), b in non_zero_i64()) {
        let (x, y) = (I64::from(a), I64::from(b));

        let (q, o) = a.overflowing_div(b);
        prop_assert_eq!(x.overflowing_div(y), (I64::from(q), o));
        let (r, o) = a.overflowing_rem(b);
        prop_assert_eq!(x.overflowing_rem(y), (I64::from(r), o));
        prop_assert_eq!(x.checked_div(y).ok(), a.checked_div(b).map(I64::from));
    }

    #[test]
    fn shifts_and_rotates_match_primitives(v in any::<i32>(), k in 0u32..32) {
        let value = I32::from(v);

        prop_assert_eq!((value << k).get(), v << k);
        prop_assert_eq!((value >> k).get(), v >> k);
        prop_assert_eq!(value.rotate_left(k).get(), v.rotate_left(k));
        prop_assert_eq!(value.rotate_right(k).get(), v.rotate_right(k));
        prop_assert_eq!((value.to_bit_pattern() >> k).get(), (v as u32) >> k);
    }

    #[test]
    fn exactly_matches_try_from(v in any::<i64>()) {
        let source = I64::from(v);

        prop_assert_eq!(I8::exactly(source).map(I8::get), i8::try_from(v).ok());
        prop_assert_eq!(U8::exactly(source).map(U8::get), u8::try_from(v).ok());
        prop_assert_eq!(U64::exactly(source).map(U64::get), u64::try_from(v).ok());
    }

    #[test]
    fn truncating_matches_as_casts(v in any::<i64>()) {
        let source = I64::from(v);

        prop_assert_eq!(U8::truncating(source).get(), v as u8);
        prop_assert_eq!(I16::truncating(source).get(), v as i16);
        prop_assert_eq!(U64::truncating(source).get(), v as u64);
    }

    #[test]
    fn radix_parse_matches_primitives(text in "[-+]?[0-9a-fA-F]{0,6}", radix in 2u32..=16) {
        prop_assert_eq!(
            I16::from_str_radix(&text, radix).map(I16::get),
            i16::from_str_radix(&text, radix).ok()
        );
    }

    #[test]
    fn display_parses_back(v in any::<i64>()) {
        let value = I64::from(v);

        prop_assert_eq!(value.to_string().parse::<I64>(), Ok(value));
        prop_assert_eq!(value.to_string(), v.to_string());
    }
}
