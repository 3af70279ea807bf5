//! Resolver error types

use thiserror::Error;

/// A placeholder remained in the resolved output and no decider allowed it.
///
/// Carries the offending variable name and the original top-level template,
/// trimmed of leading and trailing whitespace, for diagnostics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unresolved variable \"{variable}\" in template \"{template}\"")]
pub struct UnresolvedVariableError {
    variable: String,
    template: String,
}

impl UnresolvedVariableError {
    /// Creates an error for `variable` left unresolved in `template`.
    #[must_use]
    pub fn new(variable: impl Into<String>, template: &str) -> Self {
        Self {
            variable: variable.into(),
            template: template.trim().to_string(),
        }
    }

    /// The offending variable name.
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// The trimmed original top-level template.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }
}

/// Result type alias for resolution operations.
pub type ResolveResult<T> = Result<T, UnresolvedVariableError>;
