//! Stencil domain - resolvable value types
//!
//! This crate defines the value model for the Stencil template resolver:
//! resolvable trees, item collections, post-resolution mutation hooks, and
//! collection identifier generation. All types here are pure Rust with no
//! I/O dependencies; the resolution engine lives in `stencil-resolver`.

pub mod collection;
pub mod identifier;
pub mod mutator;
pub mod resolvable;
pub mod value;

pub use collection::{Collection, CollectionItemContext};
pub use identifier::{IdentifierGenerator, RandomIdentifierGenerator};
pub use mutator::{Mutator, mutator};
pub use resolvable::{Context, Resolvable};
pub use value::Value;
