//! # Collection Element Checks
//!
//! Two deliberately distinct ways to require that a container holds no
//! `None` element:
//!
//! - [`no_none_elements`] visits every element by explicit iteration. It
//!   assumes nothing about the container beyond being iterable, so it is
//!   the safe choice when the container's own membership test cannot be
//!   trusted with a `None` probe (the original motivation: containers that
//!   forbid null membership and raise their own error when queried for it).
//! - [`no_none_members`] delegates to the container's native membership
//!   test through [`NoneMembership`]. Set-backed containers answer in
//!   sublinear time, which the scanning variant cannot.
//!
//! Both share the same failure type and message contract. They are kept as
//! separate, independently named operations so the trust-level choice stays
//! visible at the call site.

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::Hash;

use crate::error::{ContractViolation, Rule};

/// Native membership test for `None` inside a container of `Option`s.
///
/// Implemented for the standard containers; open for user containers whose
/// own membership query is trusted to tolerate a `None` probe.
pub trait NoneMembership {
    /// `true` when the container's own membership test reports a `None`
    /// element present.
    fn contains_none(&self) -> bool;
}

impl<T: PartialEq> NoneMembership for Vec<Option<T>> {
    fn contains_none(&self) -> bool {
        self.contains(&None)
    }
}

impl<T: PartialEq> NoneMembership for VecDeque<Option<T>> {
    fn contains_none(&self) -> bool {
        self.contains(&None)
    }
}

impl<T: Eq + Hash> NoneMembership for HashSet<Option<T>> {
    fn contains_none(&self) -> bool {
        self.contains(&None)
    }
}

impl<T: Ord> NoneMembership for BTreeSet<Option<T>> {
    fn contains_none(&self) -> bool {
        self.contains(&None)
    }
}

/// Fail with `message` if `collection` is `None` or any element is `None`,
/// scanning by explicit iteration; otherwise return the collection
/// unchanged.
///
/// The scan visits elements in iteration order and stops at the first
/// `None` found. Use [`no_none_members`] when the container's native
/// membership test is trusted and cheaper.
///
/// # Errors
///
/// Returns a [`ContractViolation`] for [`Rule::NoNoneElements`] carrying
/// `message` if the collection is absent or contains a `None` element.
pub fn no_none_elements<T, C>(
    collection: Option<C>,
    message: impl Into<String>,
) -> Result<C, ContractViolation>
where
    for<'c> &'c C: IntoIterator<Item = &'c Option<T>>,
{
    let Some(collection) = collection else {
        return Err(ContractViolation::new(Rule::NoNoneElements, message));
    };

    for element in &collection {
        if element.is_none() {
            return Err(ContractViolation::new(Rule::NoNoneElements, message));
        }
    }

    Ok(collection)
}

/// Fail with `message` if `collection` is `None` or its own membership
/// test reports a `None` element; otherwise return the collection
/// unchanged.
///
/// Prefer this variant for set-backed containers, where the native lookup
/// is sublinear. Use [`no_none_elements`] when the container cannot be
/// trusted with a `None` membership probe.
///
/// # Errors
///
/// Returns a [`ContractViolation`] for [`Rule::NoNoneElements`] carrying
/// `message` if the collection is absent or reports a `None` member.
pub fn no_none_members<C: NoneMembership>(
    collection: Option<C>,
    message: impl Into<String>,
) -> Result<C, ContractViolation> {
    match collection {
        Some(collection) if !collection.contains_none() => Ok(collection),
        _ => Err(ContractViolation::new(Rule::NoNoneElements, message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSAGE: &str = "message";
    const UNEXPECTED: &str = "not expected";

    // -- no_none_elements (explicit scan) --

    #[test]
    fn scan_none_container_fails_with_message() {
        let err = no_none_elements(None::<Vec<Option<u32>>>, MESSAGE).unwrap_err();
        assert_eq!(err.message(), MESSAGE);
        assert_eq!(err.rule(), Rule::NoNoneElements);
    }

    #[test]
    fn scan_clean_vec_passes_unchanged() {
        let values = vec![Some(1), Some(2), Some(3)];
        let validated = no_none_elements(Some(values.clone()), UNEXPECTED).unwrap();
        assert_eq!(validated, values);
    }

    #[test]
    fn scan_empty_vec_passes() {
        let validated = no_none_elements(Some(Vec::<Option<u32>>::new()), UNEXPECTED).unwrap();
        assert!(validated.is_empty());
    }

    #[test]
    fn scan_vec_with_none_fails() {
        let values = vec![Some(1), None, Some(3)];
        let err = no_none_elements(Some(values), MESSAGE).unwrap_err();
        assert_eq!(err.message(), MESSAGE);
    }

    #[test]
    fn scan_none_in_last_position_is_found() {
        let values = vec![Some(1), Some(2), None];
        assert!(no_none_elements(Some(values), MESSAGE).is_err());
    }

    #[test]
    fn scan_works_for_sets_too() {
        let mut set = BTreeSet::new();
        set.insert(Some(1));
        set.insert(Some(2));
        let validated = no_none_elements(Some(set), UNEXPECTED).unwrap();
        assert_eq!(validated.len(), 2);

        let mut tainted = BTreeSet::new();
        tainted.insert(Some(1));
        tainted.insert(None);
        assert!(no_none_elements(Some(tainted), MESSAGE).is_err());
    }

    #[test]
    fn scan_does_not_consume_elements() {
        // Elements that are not None are never unwrapped or cloned; the
        // container comes back intact.
        let values = vec![Some(String::from("a")), Some(String::from("b"))];
        let validated = no_none_elements(Some(values), UNEXPECTED).unwrap();
        assert_eq!(validated[0].as_deref(), Some("a"));
        assert_eq!(validated[1].as_deref(), Some("b"));
    }

    // -- no_none_members (native containment) --

    #[test]
    fn members_none_container_fails_with_message() {
        let err = no_none_members(None::<HashSet<Option<u32>>>, MESSAGE).unwrap_err();
        assert_eq!(err.message(), MESSAGE);
        assert_eq!(err.rule(), Rule::NoNoneElements);
    }

    #[test]
    fn members_clean_containers_pass_unchanged() {
        let vec = vec![Some(1), Some(2)];
        assert_eq!(no_none_members(Some(vec.clone()), UNEXPECTED).unwrap(), vec);

        let mut hash_set = HashSet::new();
        hash_set.insert(Some("a"));
        hash_set.insert(Some("b"));
        let validated = no_none_members(Some(hash_set), UNEXPECTED).unwrap();
        assert_eq!(validated.len(), 2);

        let mut deque = VecDeque::new();
        deque.push_back(Some(1));
        deque.push_back(Some(2));
        assert!(no_none_members(Some(deque), UNEXPECTED).is_ok());
    }

    #[test]
    fn members_tainted_containers_fail() {
        let vec = vec![Some(1), None];
        assert!(no_none_members(Some(vec), MESSAGE).is_err());

        let mut hash_set = HashSet::new();
        hash_set.insert(Some(1));
        hash_set.insert(None);
        assert!(no_none_members(Some(hash_set), MESSAGE).is_err());

        let mut tree_set = BTreeSet::new();
        tree_set.insert(None::<i32>);
        assert!(no_none_members(Some(tree_set), MESSAGE).is_err());
    }

    // -- variant agreement --

    #[test]
    fn both_variants_agree_on_vec_verdicts() {
        let clean = vec![Some(1), Some(2), Some(3)];
        assert!(no_none_elements(Some(clean.clone()), MESSAGE).is_ok());
        assert!(no_none_members(Some(clean), MESSAGE).is_ok());

        let tainted = vec![Some(1), None, Some(3)];
        assert!(no_none_elements(Some(tainted.clone()), MESSAGE).is_err());
        assert!(no_none_members(Some(tainted), MESSAGE).is_err());

        assert!(no_none_elements(None::<Vec<Option<i32>>>, MESSAGE).is_err());
        assert!(no_none_members(None::<Vec<Option<i32>>>, MESSAGE).is_err());
    }

    #[test]
    fn checks_are_idempotent() {
        let values = vec![Some(1), Some(2)];
        let once = no_none_elements(Some(values), UNEXPECTED).unwrap();
        let twice = no_none_elements(Some(once), UNEXPECTED).unwrap();
        assert_eq!(twice, vec![Some(1), Some(2)]);
    }

    // -- user containers --

    #[test]
    fn membership_trait_is_open_for_user_containers() {
        struct Roster(Vec<Option<&'static str>>);

        impl NoneMembership for Roster {
            fn contains_none(&self) -> bool {
                self.0.contains(&None)
            }
        }

        let clean = Roster(vec![Some("a"), Some("b")]);
        assert!(no_none_members(Some(clean), UNEXPECTED).is_ok());

        let tainted = Roster(vec![Some("a"), None]);
        assert!(no_none_members(Some(tainted), MESSAGE).is_err());
    }
}
