//! Leftover-placeholder scanning against a decider chain.

use std::fmt;

use crate::deciders::{self, Decider};
use crate::placeholder;

/// Scans resolved text for placeholders no decider allows.
///
/// Deciders are evaluated most-recently-added first, so a later, more
/// specific decider takes precedence over an earlier broad one. The chain
/// always terminates at a built-in disallow-all base, giving a
/// deterministic `false` default.
pub struct UnresolvedVariableFinder {
    deciders: Vec<Decider>,
}

impl UnresolvedVariableFinder {
    /// Creates a finder that disallows every leftover placeholder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            deciders: vec![deciders::disallow_all()],
        }
    }

    /// Creates a finder with `deciders` stacked on the disallow-all base,
    /// in registration order.
    #[must_use]
    pub fn with_deciders(deciders: Vec<Decider>) -> Self {
        let mut finder = Self::new();
        finder.deciders.extend(deciders);
        finder
    }

    /// Appends a decider; the newest decider is consulted first.
    pub fn add_decider(&mut self, decider: Decider) {
        self.deciders.push(decider);
    }

    /// Returns the first leftover placeholder name no decider allows,
    /// scanning left to right.
    #[must_use]
    pub fn find_first(&self, resolved_template: &str) -> Option<String> {
        placeholder::leftover_variables(resolved_template)
            .find(|variable| !self.is_allowed(variable))
            .map(ToString::to_string)
    }

    /// Returns true if any decider allows `variable` to remain unresolved.
    ///
    /// The chain is evaluated in reverse registration order; the first
    /// decider returning true wins.
    #[must_use]
    pub fn is_allowed(&self, variable: &str) -> bool {
        self.deciders.iter().rev().any(|decider| decider(variable))
    }
}

impl Default for UnresolvedVariableFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for UnresolvedVariableFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnresolvedVariableFinder")
            .field("deciders", &self.deciders.len())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::deciders::{allow_all, decider};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_find_first_empty_text() {
        assert_eq!(UnresolvedVariableFinder::new().find_first(""), None);
    }

    #[test]
    fn test_find_first_no_placeholders() {
        assert_eq!(
            UnresolvedVariableFinder::new().find_first("No unresolved variables"),
            None
        );
    }

    #[test]
    fn test_find_first_single() {
        assert_eq!(
            UnresolvedVariableFinder::new().find_first("Hello Jon, welcome to {{ place }}."),
            Some("place".to_string())
        );
    }

    #[test]
    fn test_find_first_returns_first_in_scan_order() {
        assert_eq!(
            UnresolvedVariableFinder::new().find_first("Hello {{ name }}, welcome to {{ place }}."),
            Some("name".to_string())
        );
    }

    #[test]
    fn test_find_first_skips_allowed() {
        let finder =
            UnresolvedVariableFinder::with_deciders(vec![decider(|variable| variable == "name")]);
        assert_eq!(
            finder.find_first("Hello {{ name }}, welcome to {{ place }}."),
            Some("place".to_string())
        );
    }

    #[test]
    fn test_find_first_all_allowed() {
        let finder = UnresolvedVariableFinder::with_deciders(vec![
            decider(|variable| variable == "name"),
            decider(|variable| variable == "place"),
        ]);
        assert_eq!(
            finder.find_first("Hello {{ name }}, welcome to {{ place }}."),
            None
        );
    }

    #[test]
    fn test_is_allowed_defaults_to_false() {
        assert!(!UnresolvedVariableFinder::new().is_allowed("anything"));
    }

    #[test]
    fn test_specific_decider_after_allow_all_keeps_acceptance() {
        // The later, narrower decider is consulted first; when it declines,
        // evaluation falls through to the earlier allow-all.
        let mut finder = UnresolvedVariableFinder::with_deciders(vec![allow_all()]);
        finder.add_decider(decider(|variable| variable == "name"));

        assert!(finder.is_allowed("name"));
        assert!(finder.is_allowed("place"));
    }

    #[test]
    fn test_add_decider() {
        let mut finder = UnresolvedVariableFinder::new();
        assert!(!finder.is_allowed("name"));

        finder.add_decider(decider(|variable| variable == "name"));
        assert!(finder.is_allowed("name"));
        assert!(!finder.is_allowed("place"));
    }
}
