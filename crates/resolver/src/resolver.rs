//! Recursive variable resolution.

use stencil_domain::{CollectionItemContext, Context, Resolvable, Value};

use crate::deciders::Decider;
use crate::error::{ResolveResult, UnresolvedVariableError};
use crate::finder::UnresolvedVariableFinder;
use crate::placeholder;

/// Resolves resolvable trees into flat strings.
///
/// Resolution is depth-first: a nested resolvable is fully resolved,
/// substitution then mutation, before its output is spliced into the parent
/// template. After the walk completes, the bound
/// [`UnresolvedVariableFinder`] checks the final text for disallowed
/// leftover placeholders.
#[derive(Debug, Default)]
pub struct VariableResolver {
    finder: UnresolvedVariableFinder,
}

impl VariableResolver {
    /// Creates a resolver that fails on any leftover placeholder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            finder: UnresolvedVariableFinder::new(),
        }
    }

    /// Creates a resolver bound to an existing finder.
    #[must_use]
    pub fn with_finder(finder: UnresolvedVariableFinder) -> Self {
        Self { finder }
    }

    /// Appends a decider to the bound finder.
    pub fn add_unresolved_variable_decider(&mut self, decider: Decider) {
        self.finder.add_decider(decider);
    }

    /// Resolves `resolvable` and verifies no disallowed placeholder
    /// remains.
    ///
    /// # Errors
    ///
    /// Returns [`UnresolvedVariableError`] naming the first disallowed
    /// leftover placeholder in left-to-right scan order, together with the
    /// trimmed original top-level template.
    pub fn resolve(&self, resolvable: &Resolvable) -> ResolveResult<String> {
        let resolved = self.do_resolve(resolvable, None);

        match self.finder.find_first(&resolved) {
            Some(variable) => Err(UnresolvedVariableError::new(
                variable,
                &resolvable.template(),
            )),
            None => Ok(resolved),
        }
    }

    /// Resolves `resolvable`, keeping any leftover placeholders as-is.
    #[must_use]
    pub fn resolve_ignoring_unresolved(&self, resolvable: &Resolvable) -> String {
        self.do_resolve(resolvable, None)
    }

    /// One-shot resolution of a template and context pair.
    ///
    /// `deciders` are appended to a fresh disallow-all chain, in order.
    ///
    /// # Errors
    ///
    /// Returns [`UnresolvedVariableError`] under the same conditions as
    /// [`VariableResolver::resolve`].
    pub fn resolve_template(
        template: impl Into<String>,
        context: Context,
        deciders: Vec<Decider>,
    ) -> ResolveResult<String> {
        let mut resolver = Self::new();
        for decider in deciders {
            resolver.add_unresolved_variable_decider(decider);
        }

        resolver.resolve(&Resolvable::new(template, context))
    }

    /// One-shot resolution that keeps leftover placeholders as-is.
    #[must_use]
    pub fn resolve_template_ignoring_unresolved(
        template: impl Into<String>,
        context: Context,
    ) -> String {
        Self::new().resolve_ignoring_unresolved(&Resolvable::new(template, context))
    }

    /// Resolves one node: substitutes every context entry into the node
    /// template, then applies the node's mutator chain.
    fn do_resolve(
        &self,
        resolvable: &Resolvable,
        item_context: Option<CollectionItemContext>,
    ) -> String {
        let mut resolved = resolvable.template();

        for (key, value) in &resolvable.context() {
            let replacement = match value {
                Value::Resolvable(child) => {
                    self.do_resolve(child, Self::child_item_context(resolvable, value))
                }
                Value::Text(_) | Value::Stringable(_) => match value.render() {
                    Some(text) => text,
                    None => continue,
                },
            };

            resolved = placeholder::substitute(&resolved, key, &replacement);
        }

        for mutator in resolvable.mutators() {
            resolved = mutator(resolved, item_context);
        }

        resolved
    }

    /// Position context for a nested value, when the parent is a
    /// collection that knows the value as one of its items.
    fn child_item_context(
        parent: &Resolvable,
        value: &Value,
    ) -> Option<CollectionItemContext> {
        if !parent.is_collection() {
            return None;
        }

        parent
            .index_for_item(value)
            .map(|index| CollectionItemContext::new(index, parent.count()))
    }
}
