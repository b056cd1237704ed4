//! Generate command
//!
//! Prints random identifiers, optionally from a fixed seed.

use crate::core::{Identifier, generate_with, seeded_rng};

/// Generate `count` identifiers
///
/// The same seed always yields the same sequence.
#[must_use]
pub fn generate_identifiers(count: usize, seed: Option<u64>) -> Vec<Identifier> {
    let mut rng = seeded_rng(seed);
    (0..count).map(|_| generate_with(&mut rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_count() {
        assert_eq!(generate_identifiers(3, None).len(), 3);
        assert!(generate_identifiers(0, None).is_empty());
    }

    #[test]
    fn seeded_sequence_is_reproducible() {
        assert_eq!(
            generate_identifiers(4, Some(99)),
            generate_identifiers(4, Some(99))
        );
    }
}
