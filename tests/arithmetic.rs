use fixwidth::primitives::{ArithOp, I8, I32, I64, IntError, IntKind, Isize, U8, U64};

#[test]
fn wrapping_operators_wrap_around() {
    let max = I32::MAX;
    let min = I32::MIN;

    assert_eq!(max.wrapping_add(I32::ONE), min);
    assert_eq!(min.wrapping_sub(I32::ONE), max);
    assert_eq!(max.wrapping_mul(I32::from(2i32)), I32::from(-2i32));
}

#[test]
fn reporting_forms() {
    assert_eq!(I32::MAX.overflowing_add(I32::MAX), (I32::from(-2i32), true));
    assert_eq!(
        I8::from(-127i8).overflowing_sub(I8::from(2i8)),
        (I8::from(127i8), true)
    );
    assert_eq!(U8::from(128u8).overflowing_mul(U8::from(2u8)), (U8::ZERO, true));
    assert_eq!(
        Isize::from(127isize).overflowing_rem(Isize::from(10isize)),
        (Isize::from(7isize), false)
    );
    assert_eq!(I32::ONE.overflowing_add(I32::ONE), (I32::from(2i32), false));
}

#[test]
fn checked_forms_raise() {
    assert_eq!(
        I32::MAX.checked_add(I32::ONE),
        Err(IntError::Overflow {
            op: ArithOp::Add,
            kind: IntKind::I32,
        })
    );
    assert!(I32::MIN.checked_sub(I32::ONE).is_err());
    assert!(I32::MAX.checked_mul(I32::from(2i32)).is_err());
    assert!(U64::MAX.checked_add(U64::ONE).is_err());
    assert_eq!(U8::from(10u8).checked_mul(U8::from(25u8)), Ok(U8::from(250u8)));
}

#[test]
fn division_by_zero_is_distinct_from_overflow() {
    assert_eq!(
        I32::ONE.checked_div(I32::ZERO),
        Err(IntError::DivisionByZero {
            op: ArithOp::Div,
            kind: IntKind::I32,
        })
    );
    assert_eq!(
        U8::ONE.checked_rem(U8::ZERO),
        Err(IntError::DivisionByZero {
            op: ArithOp::Rem,
            kind: IntKind::U8,
        })
    );
}

#[test]
fn signed_minimum_by_minus_one() {
    let minus_one = I8::from(-1i8);

    assert_eq!(I8::MIN.overflowing_div(minus_one), (I8::MIN, true));
    assert_eq!(I8::MIN.overflowing_rem(minus_one), (I8::ZERO, true));
    assert_eq!(I8::MIN.wrapping_mul(minus_one), I8::MIN);
    assert_eq!(I8::MIN.wrapping_div(minus_one), I8::MIN);
    assert_eq!(I8::MIN.wrapping_rem(minus_one), I8::ZERO);
    assert!(matches!(
        I8::MIN.checked_div(minus_one),
        Err(IntError::Overflow { op: ArithOp::Div, .. })
    ));
    assert!(matches!(
        I8::MIN.checked_rem(minus_one),
        Err(IntError::Overflow { op: ArithOp::Rem, .. })
    ));
}

#[test]
fn division_truncates_toward_zero() {
    let a = I8::from(-7i8);
    let b = I8::from(2i8);

    assert_eq!(a / b, I8::from(-3i8));
    assert_eq!(a % b, I8::from(-1i8));
    assert_eq!(I8::from(7i8) % I8::from(-2i8), I8::ONE);
}

#[test]
fn sixty_four_bit_products() {
    assert_eq!(U64::MAX.overflowing_mul(U64::MAX), (U64::ONE, true));
    assert_eq!(I64::MIN.overflowing_mul(I64::MIN), (I64::ZERO, true));
    assert_eq!(
        I64::from(-3i64).overflowing_mul(I64::from(5i64)),
        (I64::from(-15i64), false)
    );
}

#[test]
fn negation() {
    assert!(I8::MIN.checked_neg().is_err());
    assert_eq!(I8::MIN.overflowing_neg(), (I8::MIN, true));
    assert_eq!(U8::ONE.overflowing_neg(), (U8::MAX, true));
    assert_eq!(U8::ZERO.checked_neg(), Ok(U8::ZERO));
    assert_eq!(-I32::from(5i32), I32::from(-5i32));
}

#[test]
fn overflow_message_names_the_operation() {
    let err = I32::MAX.checked_add(I32::ONE).unwrap_err();

    assert_eq!(err.to_string(), "addition overflowed i32");
}

#[test]
#[should_panic(expected = "multiplication overflowed u8")]
fn operator_traps_on_overflow() {
    let h = U8::from(25u8);
    let _ = U8::from(100u8) * h;
}

#[test]
#[should_panic(expected = "division by zero")]
fn wrapping_division_by_zero_panics() {
    let _ = I32::ONE.wrapping_div(I32::ZERO);
}

#[test]
#[should_panic(expected = "division by zero")]
fn reporting_remainder_by_zero_panics() {
    let _ = U8::ONE.overflowing_rem(U8::ZERO);
}
