//! Collection identifier generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Produces identifier prefixes for synthesized collection keys.
///
/// Implementations only need to honour the requested length; the resolver
/// places no further constraints on the generated text beyond it containing
/// no `{` or `}` characters.
pub trait IdentifierGenerator {
    /// Generates an identifier of exactly `length` characters.
    fn generate(&self, length: usize) -> String;
}

/// Default generator sampling random alphanumeric characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdentifierGenerator;

impl IdentifierGenerator for RandomIdentifierGenerator {
    fn generate(&self, length: usize) -> String {
        let mut rng = rand::rng();
        (0..length).map(|_| char::from(rng.sample(Alphanumeric))).collect()
    }
}
