//! # Numeric Sign Checks
//!
//! [`non_negative`] and [`positive`] over a closed set of numeric
//! representations: machine integers, floats, [`BigInt`], and
//! [`BigDecimal`]. Dispatch goes through the sealed [`Magnitude`] trait so
//! the set cannot grow behind the crate's back.
//!
//! ## Exactness
//!
//! Arbitrary-precision values compare against zero through their own `Ord`
//! implementations — never through a float conversion, which would silently
//! round values like `1e-400` to zero. Machine integers and floats use
//! ordinary comparison against zero.
//!
//! ## Float Edge Cases
//!
//! `-0.0` compares equal to zero: it passes [`non_negative`] and fails
//! [`positive`]. `NaN` is unordered with zero, so neither comparison can
//! prove a violation and `NaN` passes both checks; callers that must reject
//! `NaN` should test `is_nan` before the sign check.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::{ContractViolation, Rule};

mod sealed {
    pub trait Sealed {}
}

/// Comparison against zero for the closed set of numeric representations
/// the sign checks accept.
///
/// Sealed: implemented for `i8`–`i128`, `isize`, `u8`–`u128`, `usize`,
/// `f32`, `f64`, [`BigInt`], and [`BigDecimal`], and not implementable
/// outside this crate.
pub trait Magnitude: sealed::Sealed {
    /// `true` when the value compares strictly below zero.
    fn is_below_zero(&self) -> bool;

    /// `true` when the value compares below or equal to zero.
    fn is_at_most_zero(&self) -> bool;
}

macro_rules! signed_int_magnitude {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Magnitude for $ty {
                fn is_below_zero(&self) -> bool {
                    *self < 0
                }

                fn is_at_most_zero(&self) -> bool {
                    *self <= 0
                }
            }
        )*
    };
}

macro_rules! unsigned_int_magnitude {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Magnitude for $ty {
                fn is_below_zero(&self) -> bool {
                    false
                }

                fn is_at_most_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

macro_rules! float_magnitude {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Magnitude for $ty {
                fn is_below_zero(&self) -> bool {
                    *self < 0.0
                }

                fn is_at_most_zero(&self) -> bool {
                    *self <= 0.0
                }
            }
        )*
    };
}

signed_int_magnitude!(i8, i16, i32, i64, i128, isize);
unsigned_int_magnitude!(u8, u16, u32, u64, u128, usize);
float_magnitude!(f32, f64);

impl sealed::Sealed for BigInt {}

impl Magnitude for BigInt {
    fn is_below_zero(&self) -> bool {
        *self < BigInt::zero()
    }

    fn is_at_most_zero(&self) -> bool {
        *self <= BigInt::zero()
    }
}

impl sealed::Sealed for BigDecimal {}

impl Magnitude for BigDecimal {
    fn is_below_zero(&self) -> bool {
        *self < BigDecimal::zero()
    }

    fn is_at_most_zero(&self) -> bool {
        *self <= BigDecimal::zero()
    }
}

/// Fail with `message` if `value` is `None` or negative; otherwise return
/// the number unchanged.
///
/// Zero is accepted. See the module docs for `-0.0` and `NaN` behavior.
///
/// # Errors
///
/// Returns a [`ContractViolation`] for [`Rule::NonNegative`] carrying
/// `message` if `value` is `None` or compares strictly below zero.
pub fn non_negative<N: Magnitude>(
    value: Option<N>,
    message: impl Into<String>,
) -> Result<N, ContractViolation> {
    match value {
        Some(number) if !number.is_below_zero() => Ok(number),
        _ => Err(ContractViolation::new(Rule::NonNegative, message)),
    }
}

/// Fail with `message` if `value` is `None` or not strictly greater than
/// zero; otherwise return the number unchanged.
///
/// Zero is rejected. See the module docs for `-0.0` and `NaN` behavior.
///
/// # Errors
///
/// Returns a [`ContractViolation`] for [`Rule::Positive`] carrying
/// `message` if `value` is `None` or compares below or equal to zero.
pub fn positive<N: Magnitude>(
    value: Option<N>,
    message: impl Into<String>,
) -> Result<N, ContractViolation> {
    match value {
        Some(number) if !number.is_at_most_zero() => Ok(number),
        _ => Err(ContractViolation::new(Rule::Positive, message)),
    }
}
