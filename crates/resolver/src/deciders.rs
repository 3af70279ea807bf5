//! Decider predicates for tolerated unresolved variables.

use std::sync::Arc;

use regex::Regex;

/// A predicate deciding whether a named placeholder may remain unresolved.
pub type Decider = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Wraps a plain closure as a [`Decider`].
#[must_use]
pub fn decider(f: impl Fn(&str) -> bool + Send + Sync + 'static) -> Decider {
    Arc::new(f)
}

/// Allows nothing; the base of every decider chain.
#[must_use]
pub fn disallow_all() -> Decider {
    Arc::new(|_| false)
}

/// Allows every unresolved variable.
#[must_use]
pub fn allow_all() -> Decider {
    Arc::new(|_| true)
}

/// Allows variables whose names match `pattern`.
#[must_use]
pub fn allow_by_pattern(pattern: Regex) -> Decider {
    Arc::new(move |variable| pattern.is_match(variable))
}
