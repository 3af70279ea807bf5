//! The resolvable variant set and its capability surface.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::collection::{Collection, CollectionItemContext};
use crate::mutator::Mutator;
use crate::value::Value;

/// Mapping from placeholder name to substitution value.
///
/// Insertion order is preserved so substitution order is deterministic.
pub type Context = IndexMap<String, Value>;

/// A template paired with the context it resolves against.
///
/// The variant set is closed: a plain template with a context, pre-resolved
/// content, an ordered collection, or a mutator wrapper around another
/// resolvable. All variants expose the same capability surface so the
/// resolver never needs to know which one it is walking.
#[derive(Clone)]
pub enum Resolvable {
    /// A template string resolved against a context mapping.
    Template {
        /// Literal text containing zero or more placeholders.
        template: String,
        /// Values substituted for matching placeholders.
        context: Context,
    },

    /// Pre-resolved content with nothing left to substitute.
    Content(String),

    /// An ordered sequence of items resolved and concatenated.
    Collection(Collection),

    /// A resolvable with a post-resolution mutator attached.
    Mutating {
        /// The wrapped resolvable.
        inner: Arc<Resolvable>,
        /// Applied to the resolved text after any inner mutators.
        mutator: Mutator,
    },
}

impl Resolvable {
    /// Creates a plain template resolvable.
    #[must_use]
    pub fn new(template: impl Into<String>, context: Context) -> Self {
        Self::Template {
            template: template.into(),
            context,
        }
    }

    /// Creates a resolvable holding pre-resolved content.
    #[must_use]
    pub fn content(content: impl Into<String>) -> Self {
        Self::Content(content.into())
    }

    /// Wraps this resolvable with a post-resolution mutator.
    ///
    /// Wrappers stack: the innermost mutator runs first, the outermost
    /// last.
    #[must_use]
    pub fn with_mutator(
        self,
        mutator: impl Fn(String, Option<CollectionItemContext>) -> String + Send + Sync + 'static,
    ) -> Self {
        Self::Mutating {
            inner: Arc::new(self),
            mutator: Arc::new(mutator),
        }
    }

    /// The template text, synthesized for collections.
    #[must_use]
    pub fn template(&self) -> String {
        match self {
            Self::Template { template, .. } => template.clone(),
            Self::Content(content) => content.clone(),
            Self::Collection(collection) => collection.template(),
            Self::Mutating { inner, .. } => inner.template(),
        }
    }

    /// The context mapping, synthesized for collections.
    #[must_use]
    pub fn context(&self) -> Context {
        match self {
            Self::Template { context, .. } => context.clone(),
            Self::Content(_) => Context::new(),
            Self::Collection(collection) => collection.context(),
            Self::Mutating { inner, .. } => inner.context(),
        }
    }

    /// The ordered mutator chain, innermost wrapper first.
    ///
    /// Empty for anything that is not a mutator wrapper.
    #[must_use]
    pub fn mutators(&self) -> Vec<Mutator> {
        match self {
            Self::Mutating { inner, mutator } => {
                let mut mutators = inner.mutators();
                mutators.push(Arc::clone(mutator));
                mutators
            }
            Self::Template { .. } | Self::Content(_) | Self::Collection(_) => Vec::new(),
        }
    }

    /// Returns true if any mutator is attached.
    #[must_use]
    pub fn has_mutators(&self) -> bool {
        matches!(self, Self::Mutating { .. })
    }

    /// Returns true for collections, seen through any mutator wrappers.
    #[must_use]
    pub fn is_collection(&self) -> bool {
        match self {
            Self::Collection(_) => true,
            Self::Mutating { inner, .. } => inner.is_collection(),
            Self::Template { .. } | Self::Content(_) => false,
        }
    }

    /// Number of collection items, or 1 for non-collection resolvables.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::Collection(collection) => collection.len(),
            Self::Mutating { inner, .. } => inner.count(),
            Self::Template { .. } | Self::Content(_) => 1,
        }
    }

    /// Position of `item` among collection items.
    ///
    /// `None` for non-collection resolvables and for absent items.
    #[must_use]
    pub fn index_for_item(&self, item: &Value) -> Option<usize> {
        match self {
            Self::Collection(collection) => collection.index_for_item(item),
            Self::Mutating { inner, .. } => inner.index_for_item(item),
            Self::Template { .. } | Self::Content(_) => None,
        }
    }

    /// The wrapped resolvable, for mutator wrappers.
    #[must_use]
    pub fn inner(&self) -> Option<&Arc<Self>> {
        match self {
            Self::Mutating { inner, .. } => Some(inner),
            Self::Template { .. } | Self::Content(_) | Self::Collection(_) => None,
        }
    }
}

impl From<Collection> for Resolvable {
    fn from(collection: Collection) -> Self {
        Self::Collection(collection)
    }
}

impl fmt::Debug for Resolvable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template { template, context } => f
                .debug_struct("Template")
                .field("template", template)
                .field("context", context)
                .finish(),
            Self::Content(content) => f.debug_tuple("Content").field(content).finish(),
            Self::Collection(collection) => f.debug_tuple("Collection").field(collection).finish(),
            Self::Mutating { inner, .. } => f
                .debug_struct("Mutating")
                .field("inner", inner)
                .finish_non_exhaustive(),
        }
    }
}
