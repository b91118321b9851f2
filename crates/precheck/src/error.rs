//! # Contract-Violation Failure Type
//!
//! One failure kind for every check in the crate, built with `thiserror`.
//! The `Display` output is exactly the caller-supplied diagnostic message,
//! byte-for-byte — the checker neither formats nor localizes it. The
//! violated rule travels alongside the message so that a violation caught
//! far from its origin still identifies which contract was broken.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The contract rule a check enforces.
///
/// Carried inside every [`ContractViolation`] so diagnostics can name the
/// violated rule without parsing the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// The value must be present ([`required`](crate::required)).
    Required,
    /// The text must have length ≥ 1 ([`non_empty`](crate::non_empty)).
    NonEmptyText,
    /// The text must contain at least one non-whitespace character
    /// ([`has_text`](crate::has_text)).
    HasText,
    /// The number must be ≥ 0 ([`non_negative`](crate::non_negative)).
    NonNegative,
    /// The number must be > 0 ([`positive`](crate::positive)).
    Positive,
    /// The collection must contain no `None` element
    /// ([`no_none_elements`](crate::no_none_elements),
    /// [`no_none_members`](crate::no_none_members)).
    NoNoneElements,
    /// The condition must be `true` ([`holds`](crate::holds)).
    Holds,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Required => "required",
            Self::NonEmptyText => "non_empty_text",
            Self::HasText => "has_text",
            Self::NonNegative => "non_negative",
            Self::Positive => "positive",
            Self::NoNoneElements => "no_none_elements",
            Self::Holds => "holds",
        };
        write!(f, "{s}")
    }
}

/// A violated argument contract.
///
/// Constructed at the point of violation and returned immediately to the
/// direct caller. `Display` prints the caller's message unmodified; the
/// violated [`Rule`] is available through [`ContractViolation::rule`].
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct ContractViolation {
    rule: Rule,
    message: String,
}

impl ContractViolation {
    /// Create a violation for `rule` carrying `message` verbatim.
    ///
    /// Public so that consumers can raise the same failure kind from
    /// bespoke checks alongside the built-in ones.
    pub fn new(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }

    /// The contract rule that was violated.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// The caller-supplied diagnostic message, unmodified.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_exactly_the_message() {
        let violation = ContractViolation::new(Rule::Required, "value1 cannot be null");
        assert_eq!(format!("{violation}"), "value1 cannot be null");
    }

    #[test]
    fn message_accessor_is_verbatim() {
        let violation = ContractViolation::new(Rule::HasText, "  spaced  message  ");
        assert_eq!(violation.message(), "  spaced  message  ");
    }

    #[test]
    fn rule_accessor() {
        let violation = ContractViolation::new(Rule::Positive, "count must be positive");
        assert_eq!(violation.rule(), Rule::Positive);
    }

    #[test]
    fn implements_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        let violation = ContractViolation::new(Rule::Holds, "condition must hold");
        assert_error(&violation);
    }

    #[test]
    fn rule_display_names() {
        assert_eq!(Rule::Required.to_string(), "required");
        assert_eq!(Rule::NonEmptyText.to_string(), "non_empty_text");
        assert_eq!(Rule::HasText.to_string(), "has_text");
        assert_eq!(Rule::NonNegative.to_string(), "non_negative");
        assert_eq!(Rule::Positive.to_string(), "positive");
        assert_eq!(Rule::NoNoneElements.to_string(), "no_none_elements");
        assert_eq!(Rule::Holds.to_string(), "holds");
    }

    #[test]
    fn rule_serde_snake_case() {
        let json = serde_json::to_string(&Rule::NoNoneElements).unwrap();
        assert_eq!(json, "\"no_none_elements\"");
        let back: Rule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rule::NoNoneElements);
    }

    #[test]
    fn violation_serializes_rule_and_message() {
        let violation = ContractViolation::new(Rule::NonNegative, "replicas cannot be negative");
        let json: serde_json::Value = serde_json::to_value(&violation).unwrap();
        assert_eq!(json["rule"], "non_negative");
        assert_eq!(json["message"], "replicas cannot be negative");
    }
}
