//! Placeholder matching for `{{ variable }}` syntax.
//!
//! Substitution accepts exactly four spacing variants per key: `{{key}}`,
//! `{{key }}`, `{{ key}}`, and `{{ key }}`. Multiple spaces are not
//! normalized and never match. The leftover scan is broader: it re-parses
//! any `{{ ... }}` sequence remaining in resolved text, whatever its
//! interior.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

// The pattern is a constant; compilation cannot fail.
#[allow(clippy::unwrap_used)]
static LEFTOVER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{ ?[^{]+ ?\}\}").unwrap());

/// Replaces every placeholder occurrence of `key` with `replacement`.
///
/// The key is matched literally, with one optional space tolerated on each
/// side. The replacement is spliced literally; `$` sequences in the value
/// are never expanded.
#[must_use]
pub fn substitute(template: &str, key: &str, replacement: &str) -> String {
    let pattern = format!(r"\{{\{{ ?{} ?\}}\}}", regex::escape(key));
    match Regex::new(&pattern) {
        Ok(matcher) => matcher
            .replace_all(template, NoExpand(replacement))
            .into_owned(),
        Err(_) => template.to_string(),
    }
}

/// Extracts the variable name from a matched placeholder.
///
/// Trims `{`, `}`, and space characters from both ends.
#[must_use]
pub fn variable_name(placeholder: &str) -> &str {
    placeholder.trim_matches(|c| c == '{' || c == '}' || c == ' ')
}

/// Iterates over the names of leftover placeholders in scan order.
pub fn leftover_variables(text: &str) -> impl Iterator<Item = &str> {
    LEFTOVER
        .find_iter(text)
        .map(|placeholder| variable_name(placeholder.as_str()))
}
