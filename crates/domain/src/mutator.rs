//! Post-resolution text mutation hooks.

use std::sync::Arc;

use crate::collection::CollectionItemContext;

/// A post-resolution text transform.
///
/// Receives the resolved text and, when the owning resolvable is an item of
/// an enclosing collection, its position among the siblings. Mutators are
/// expected to be pure with respect to their inputs.
pub type Mutator = Arc<dyn Fn(String, Option<CollectionItemContext>) -> String + Send + Sync>;

/// Wraps a plain closure as a [`Mutator`].
#[must_use]
pub fn mutator(
    f: impl Fn(String, Option<CollectionItemContext>) -> String + Send + Sync + 'static,
) -> Mutator {
    Arc::new(f)
}
