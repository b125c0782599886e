//! Arithmetic for `FixedInt`
//!
//! Each operation comes in three forms:
//! - checked (`checked_*`): `Err` when the true result is out of range or
//!   the divisor is zero
//! - wrapping (`wrapping_*`): the result modulo `2^n`, read in the type's
//!   signedness
//! - reporting (`overflowing_*`): the wrapping result plus a flag that is
//!   `true` exactly when the checked form reports `Overflow`
//!
//! The exact result is computed in `i128`, which holds the sum, difference
//! and quotient of any two 64-bit values. Products can exceed it; a product
//! that does not fit in `i128` is out of range for every kind anyway, and the
//! wrapped product is taken from the bit patterns directly.
//!
//! The operator traits (`+`, `-`, `*`, `/`, `%`, unary `-`) panic on
//! overflow and on division by zero.

use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use log::trace;

use crate::primitives::error::{ArithOp, IntError};
use crate::primitives::fixed::FixedInt;
use crate::primitives::width::BitWidth;

impl<W: BitWidth, const SIGNED: bool> FixedInt<W, SIGNED> {
    fn overflow(op: ArithOp) -> IntError {
        trace!("{} overflowed {}", op, Self::KIND);

        IntError::Overflow {
            op,
            kind: Self::KIND,
        }
    }

    fn check(op: ArithOp, (value, overflow): (Self, bool)) -> Result<Self, IntError> {
        if overflow {
            Err(Self::overflow(op))
        } else {
            Ok(value)
        }
    }

    fn nonzero_divisor(op: ArithOp, rhs: Self) -> Result<(), IntError> {
        if rhs.is_zero() {
            trace!("{} by zero in {}", op, Self::KIND);

            return Err(IntError::DivisionByZero {
                op,
                kind: Self::KIND,
            });
        }

        Ok(())
    }

    /* Addition */

    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let exact = self.to_i128() + rhs.to_i128();

        (Self::wrap_i128(exact), !Self::KIND.contains(exact))
    }

    pub fn wrapping_add(self, rhs: Self) -> Self {
        self.overflowing_add(rhs).0
    }

    /// # Errors
    /// `IntError::Overflow` if the sum is out of range.
    pub fn checked_add(self, rhs: Self) -> Result<Self, IntError> {
        Self::check(ArithOp::Add, self.overflowing_add(rhs))
    }

    /* Subtraction */

    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let exact = self.to_i128() - rhs.to_i128();

        (Self::wrap_i128(exact), !Self::KIND.contains(exact))
    }

    pub fn wrapping_sub(self, rhs: Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    /// # Errors
    /// `IntError::Overflow` if the difference is out of range.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, IntError> {
        Self::check(ArithOp::Sub, self.overflowing_sub(rhs))
    }

    /* Multiplication */

    pub fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
        // Low n bits of the product depend only on the low n bits of the
        // operands, whatever their signedness.
        let wrapped = Self::from_raw(self.0.wrapping_mul(rhs.0));

        let overflow = match self.to_i128().checked_mul(rhs.to_i128()) {
            Some(exact) => !Self::KIND.contains(exact),
            None => true,
        };

        (wrapped, overflow)
    }

    pub fn wrapping_mul(self, rhs: Self) -> Self {
        self.overflowing_mul(rhs).0
    }

    /// # Errors
    /// `IntError::Overflow` if the product is out of range.
    pub fn checked_mul(self, rhs: Self) -> Result<Self, IntError> {
        Self::check(ArithOp::Mul, self.overflowing_mul(rhs))
    }

    /* Division */

    /// Truncating division, reporting overflow.
    ///
    /// Only `MIN / -1` overflows; it wraps to `MIN`.
    ///
    /// # Panics
    /// If `rhs` is zero.
    pub fn overflowing_div(self, rhs: Self) -> (Self, bool) {
        assert!(!rhs.is_zero(), "division by zero");

        let exact = self.to_i128() / rhs.to_i128();

        (Self::wrap_i128(exact), !Self::KIND.contains(exact))
    }

    /// # Panics
    /// If `rhs` is zero.
    pub fn wrapping_div(self, rhs: Self) -> Self {
        self.overflowing_div(rhs).0
    }

    /// # Errors
    /// `IntError::DivisionByZero` if `rhs` is zero, `IntError::Overflow`
    /// for `MIN / -1`.
    pub fn checked_div(self, rhs: Self) -> Result<Self, IntError> {
        Self::nonzero_divisor(ArithOp::Div, rhs)?;

        Self::check(ArithOp::Div, self.overflowing_div(rhs))
    }

    /* Remainder */

    /// Remainder of truncating division, reporting overflow.
    ///
    /// The remainder has the sign of the dividend. `MIN % -1` reports
    /// overflow, because the matching division does, and yields zero.
    ///
    /// # Panics
    /// If `rhs` is zero.
    pub fn overflowing_rem(self, rhs: Self) -> (Self, bool) {
        let (_, overflow) = self.overflowing_div(rhs);

        if overflow {
            return (Self::ZERO, true);
        }

        (Self::wrap_i128(self.to_i128() % rhs.to_i128()), false)
    }

    /// # Panics
    /// If `rhs` is zero.
    pub fn wrapping_rem(self, rhs: Self) -> Self {
        self.overflowing_rem(rhs).0
    }

    /// # Errors
    /// `IntError::DivisionByZero` if `rhs` is zero, `IntError::Overflow`
    /// for `MIN % -1`.
    pub fn checked_rem(self, rhs: Self) -> Result<Self, IntError> {
        Self::nonzero_divisor(ArithOp::Rem, rhs)?;

        Self::check(ArithOp::Rem, self.overflowing_rem(rhs))
    }

    /* Negation */

    /// Overflows for `MIN` of signed types and for every non-zero unsigned
    /// value.
    pub fn overflowing_neg(self) -> (Self, bool) {
        let exact = -self.to_i128();

        (Self::wrap_i128(exact), !Self::KIND.contains(exact))
    }

    pub fn wrapping_neg(self) -> Self {
        self.overflowing_neg().0
    }

    /// # Errors
    /// `IntError::Overflow` if the negated value is out of range.
    pub fn checked_neg(self) -> Result<Self, IntError> {
        Self::check(ArithOp::Neg, self.overflowing_neg())
    }
}

#[track_caller]
fn trap<T>(result: Result<T, IntError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

macro_rules! trapping_binop {
    ($($trait:ident :: $method:ident => $checked:ident),+ $(,)?) => {
        $(
            impl<W: BitWidth, const SIGNED: bool> $trait for FixedInt<W, SIGNED> {
                type Output = Self;

                #[track_caller]
                fn $method(self, rhs: Self) -> Self {
                    trap(self.$checked(rhs))
                }
            }
        )+
    };
}

trapping_binop! {
    Add::add => checked_add,
    Sub::sub => checked_sub,
    Mul::mul => checked_mul,
    Div::div => checked_div,
    Rem::rem => checked_rem,
}

impl<W: BitWidth, const SIGNED: bool> Neg for FixedInt<W, SIGNED> {
    type Output = Self;

    #[track_caller]
    fn neg(self) -> Self {
        trap(self.checked_neg())
    }
}
