//! Ordered item collections resolved and concatenated as one resolvable.

use crate::identifier::{IdentifierGenerator, RandomIdentifierGenerator};
use crate::resolvable::Context;
use crate::value::Value;

/// Position of an item within its enclosing collection.
///
/// Constructed fresh for each descent into a collection item and handed to
/// that item's mutators; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionItemContext {
    index: usize,
    count: usize,
}

impl CollectionItemContext {
    /// Creates a context for the item at `index` among `count` siblings.
    #[must_use]
    pub fn new(index: usize, count: usize) -> Self {
        Self { index, count }
    }

    /// Zero-based position of the item.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Total number of items in the collection.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns true for the first item.
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// Returns true for the last item.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.count
    }
}

/// An ordered sequence of items rendered and concatenated.
///
/// The collection synthesizes its own template and context: text items are
/// inlined literally, while stringable and resolvable items are referenced
/// through `{{ <identifier><k> }}` placeholders, where `k` counts non-text
/// items only. Text items never enter the context.
#[derive(Debug, Clone)]
pub struct Collection {
    items: Vec<Value>,
    identifier: String,
}

impl Collection {
    /// Length of identifiers produced by [`Collection::create`].
    pub const GENERATED_IDENTIFIER_LENGTH: usize = 16;

    /// Creates a collection with an explicit identifier prefix.
    ///
    /// The identifier may be empty, in which case synthesized keys are the
    /// bare occurrence indices.
    #[must_use]
    pub fn new(items: Vec<Value>, identifier: impl Into<String>) -> Self {
        Self {
            items,
            identifier: identifier.into(),
        }
    }

    /// Creates a collection with a random identifier prefix.
    #[must_use]
    pub fn create(items: Vec<Value>) -> Self {
        Self::create_with_generator(
            items,
            Self::GENERATED_IDENTIFIER_LENGTH,
            &RandomIdentifierGenerator,
        )
    }

    /// Creates a collection with an identifier produced by `generator`.
    #[must_use]
    pub fn create_with_generator(
        items: Vec<Value>,
        length: usize,
        generator: &dyn IdentifierGenerator,
    ) -> Self {
        let identifier = generator.generate(length);
        Self::new(items, identifier)
    }

    /// The key prefix for synthesized placeholders.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Number of items, text items included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the collection has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items in their original order.
    #[must_use]
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Iterates over the items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Synthesizes the collection template.
    ///
    /// Concatenates text items literally and emits a placeholder for every
    /// other item.
    #[must_use]
    pub fn template(&self) -> String {
        let mut template = String::new();
        let mut placeholder_index = 0usize;

        for item in &self.items {
            match item {
                Value::Text(text) => template.push_str(text),
                Value::Stringable(_) | Value::Resolvable(_) => {
                    template.push_str("{{ ");
                    template.push_str(&self.identifier);
                    template.push_str(&placeholder_index.to_string());
                    template.push_str(" }}");
                    placeholder_index += 1;
                }
            }
        }

        template
    }

    /// Synthesizes the collection context.
    ///
    /// Maps each synthesized placeholder key to the corresponding non-text
    /// item, preserving item order.
    #[must_use]
    pub fn context(&self) -> Context {
        let mut context = Context::new();
        let mut placeholder_index = 0usize;

        for item in &self.items {
            if !item.is_text() {
                let key = format!("{}{placeholder_index}", self.identifier);
                context.insert(key, item.clone());
                placeholder_index += 1;
            }
        }

        context
    }

    /// Position of `item` within the original item sequence.
    ///
    /// Text items match by string equality, stringable and resolvable items
    /// by object identity. Returns `None` if the item is absent.
    #[must_use]
    pub fn index_for_item(&self, item: &Value) -> Option<usize> {
        self.items.iter().position(|candidate| candidate.same_as(item))
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
