//! # Text Checks
//!
//! Two levels of strictness for text arguments:
//!
//! - [`non_empty`] — the text must exist and have length ≥ 1. A single
//!   space passes: non-empty says nothing about content.
//! - [`has_text`] — the text must contain at least one non-whitespace
//!   character. Empty and all-whitespace strings are equally invalid.
//!
//! ## Whitespace Definition
//!
//! `has_text` classifies whitespace with [`char::is_whitespace`], i.e. the
//! Unicode `White_Space` property. This covers ASCII space, tab, and line
//! breaks as well as Unicode spaces such as U+00A0 and U+2028.

use crate::error::{ContractViolation, Rule};

/// Fail with `message` if `value` is `None` or empty; otherwise return the
/// text unchanged.
///
/// Being non-empty only means there is at least one character, which could
/// itself be whitespace. Use [`has_text`] when the argument must carry
/// actual content.
///
/// # Errors
///
/// Returns a [`ContractViolation`] for [`Rule::NonEmptyText`] carrying
/// `message` if `value` is `None` or zero-length.
pub fn non_empty<S: AsRef<str>>(
    value: Option<S>,
    message: impl Into<String>,
) -> Result<S, ContractViolation> {
    match value {
        Some(text) if !text.as_ref().is_empty() => Ok(text),
        _ => Err(ContractViolation::new(Rule::NonEmptyText, message)),
    }
}

/// Fail with `message` if `value` is `None`, empty, or made up entirely of
/// whitespace; otherwise return the text unchanged.
///
/// # Errors
///
/// Returns a [`ContractViolation`] for [`Rule::HasText`] carrying `message`
/// if `value` does not contain at least one non-whitespace character.
pub fn has_text<S: AsRef<str>>(
    value: Option<S>,
    message: impl Into<String>,
) -> Result<S, ContractViolation> {
    match value {
        Some(text) if text.as_ref().chars().any(|c| !c.is_whitespace()) => Ok(text),
        _ => Err(ContractViolation::new(Rule::HasText, message)),
    }
}
