//! Context values for template resolution.

use std::fmt;
use std::sync::Arc;

use crate::resolvable::Resolvable;

/// A single context entry: plain text, a string-like object rendered at
/// substitution time, or a nested resolvable.
#[derive(Clone)]
pub enum Value {
    /// Literal text, spliced into the template as-is.
    Text(String),

    /// An object rendered through [`fmt::Display`] when substituted.
    Stringable(Arc<dyn fmt::Display + Send + Sync>),

    /// A nested resolvable, fully resolved before substitution.
    Resolvable(Arc<Resolvable>),
}

impl Value {
    /// Creates a plain text value.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates a value rendered through `Display` at substitution time.
    #[must_use]
    pub fn stringable(source: impl fmt::Display + Send + Sync + 'static) -> Self {
        Self::Stringable(Arc::new(source))
    }

    /// Creates a nested resolvable value.
    #[must_use]
    pub fn resolvable(resolvable: Resolvable) -> Self {
        Self::Resolvable(Arc::new(resolvable))
    }

    /// Returns true if this value is plain text.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns the nested resolvable, if this value is one.
    #[must_use]
    pub fn as_resolvable(&self) -> Option<&Arc<Resolvable>> {
        match self {
            Self::Resolvable(resolvable) => Some(resolvable),
            Self::Text(_) | Self::Stringable(_) => None,
        }
    }

    /// Renders text and stringable values to a plain string.
    ///
    /// Returns `None` for nested resolvables, which must be resolved
    /// recursively instead of rendered directly.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Stringable(source) => Some(source.to_string()),
            Self::Resolvable(_) => None,
        }
    }

    /// Compares values the way collections look up their items: text by
    /// string equality, stringables and resolvables by object identity.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Stringable(a), Self::Stringable(b)) => Arc::ptr_eq(a, b),
            (Self::Resolvable(a), Self::Resolvable(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Stringable(source) => {
                f.debug_tuple("Stringable").field(&source.to_string()).finish()
            }
            Self::Resolvable(resolvable) => {
                f.debug_tuple("Resolvable").field(resolvable).finish()
            }
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Resolvable> for Value {
    fn from(resolvable: Resolvable) -> Self {
        Self::resolvable(resolvable)
    }
}
