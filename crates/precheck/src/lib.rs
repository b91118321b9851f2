#![deny(missing_docs)]

//! # precheck — Precondition Checks for Argument Contracts
//!
//! This crate provides a small set of pure validation functions that assert
//! argument contracts in one expression. Each check takes a candidate value
//! and a caller-supplied diagnostic message, returns the value unchanged on
//! success, and fails with a uniform [`ContractViolation`] on violation.
//!
//! It replaces long-winded code such as
//!
//! ```
//! # use precheck::{ContractViolation, Rule};
//! # fn configure(name: Option<String>) -> Result<String, ContractViolation> {
//! let name = match name {
//!     Some(name) if name.chars().any(|c| !c.is_whitespace()) => name,
//!     _ => return Err(ContractViolation::new(Rule::HasText, "name must contain text")),
//! };
//! # Ok(name) }
//! # assert!(configure(Some("primary".into())).is_ok());
//! # assert!(configure(Some("   ".into())).is_err());
//! ```
//!
//! with shorter code such as
//!
//! ```
//! use precheck::{has_text, non_negative, ContractViolation};
//!
//! struct ShardConfig {
//!     name: String,
//!     replicas: u32,
//! }
//!
//! impl ShardConfig {
//!     fn new(name: Option<String>, replicas: Option<u32>) -> Result<Self, ContractViolation> {
//!         Ok(Self {
//!             name: has_text(name, "name must contain text")?,
//!             replicas: non_negative(replicas, "replicas cannot be negative")?,
//!         })
//!     }
//! }
//!
//! let config = ShardConfig::new(Some("primary".into()), Some(2)).unwrap();
//! assert_eq!(config.name, "primary");
//! assert_eq!(config.replicas, 2);
//!
//! assert!(ShardConfig::new(Some("  ".into()), Some(2)).is_err());
//! assert!(ShardConfig::new(Some("primary".into()), None).is_err());
//! ```
//!
//! ## Design Principles
//!
//! 1. **One failure kind.** Every check fails with [`ContractViolation`],
//!    which carries the caller's message verbatim plus a [`Rule`]
//!    discriminant naming the violated rule. Nothing is caught, wrapped,
//!    retried, or suppressed inside the checker.
//!
//! 2. **Values pass through untouched.** On success the candidate value is
//!    returned by move, so call sites bind it in the same expression that
//!    validates it. The checker never stores or clones the value.
//!
//! 3. **Closed numeric dispatch.** The [`Magnitude`] trait is sealed over
//!    machine integers, floats, [`num_bigint::BigInt`], and
//!    [`bigdecimal::BigDecimal`]. Arbitrary-precision comparison is exact,
//!    never routed through a float conversion.
//!
//! 4. **Stateless and reentrant.** No shared state, no locks, no I/O, no
//!    logging. Every operation is a single-step decision, safe to call from
//!    any number of threads concurrently.

pub mod collection;
pub mod error;
pub mod numeric;
pub mod text;
pub mod value;

// Re-export the full check surface at the crate root for ergonomic imports.
pub use collection::{no_none_elements, no_none_members, NoneMembership};
pub use error::{ContractViolation, Rule};
pub use numeric::{non_negative, positive, Magnitude};
pub use text::{has_text, non_empty};
pub use value::{holds, required};
