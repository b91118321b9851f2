//! # Presence and Condition Checks
//!
//! The two most general checks: a value must be present, or a boolean
//! condition must hold. Everything else in the crate is a specialization
//! of these for text, numbers, and collections.

use crate::error::{ContractViolation, Rule};

/// Fail with `message` if `value` is `None`; otherwise return the inner
/// value.
///
/// The value is returned by move, so the caller binds it in the same
/// expression that validates it. For references this preserves identity:
/// `required(Some(&x), ..)` returns the same `&x`.
///
/// # Errors
///
/// Returns a [`ContractViolation`] for [`Rule::Required`] carrying
/// `message` if `value` is `None`.
pub fn required<T>(value: Option<T>, message: impl Into<String>) -> Result<T, ContractViolation> {
    match value {
        Some(value) => Ok(value),
        None => Err(ContractViolation::new(Rule::Required, message)),
    }
}

/// Fail with `message` if `condition` is `false`; otherwise return `()`.
///
/// # Errors
///
/// Returns a [`ContractViolation`] for [`Rule::Holds`] carrying `message`
/// if `condition` is `false`.
pub fn holds(condition: bool, message: impl Into<String>) -> Result<(), ContractViolation> {
    if condition {
        Ok(())
    } else {
        Err(ContractViolation::new(Rule::Holds, message))
    }
}
