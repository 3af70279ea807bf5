//! Stencil resolver - recursive `{{ variable }}` substitution
//!
//! Resolves [`Resolvable`](stencil_domain::Resolvable) trees into flat
//! strings: nested resolvables depth-first, collection items concatenated in
//! order, mutators applied to resolved output, and leftover placeholders
//! checked against a decider chain.
//!
//! # Usage
//!
//! ```
//! use stencil_domain::{Context, Resolvable, Value};
//! use stencil_resolver::VariableResolver;
//!
//! let mut context = Context::new();
//! context.insert("name".to_string(), Value::text("Jon"));
//!
//! let resolvable = Resolvable::new("Hello {{ name }}.", context);
//! let resolver = VariableResolver::new();
//!
//! assert_eq!(resolver.resolve(&resolvable).unwrap(), "Hello Jon.");
//! ```

pub mod deciders;
pub mod error;
pub mod finder;
pub mod placeholder;
pub mod resolver;

pub use deciders::{Decider, allow_all, allow_by_pattern, decider, disallow_all};
pub use error::{ResolveResult, UnresolvedVariableError};
pub use finder::UnresolvedVariableFinder;
pub use placeholder::{leftover_variables, substitute, variable_name};
pub use resolver::VariableResolver;
