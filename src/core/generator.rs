//! Random target generation

use super::identifier::{HEX_DIGITS, IDENTIFIER_LENGTH, Identifier, is_hyphen_position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate a uniformly random identifier from the thread-local RNG
///
/// # Examples
/// ```
/// use uuidle::core::{generate, HYPHEN_POSITIONS};
///
/// let id = generate();
/// assert_eq!(id.as_str().len(), 36);
/// for pos in HYPHEN_POSITIONS {
///     assert_eq!(id.char_at(pos), b'-');
/// }
/// ```
#[must_use]
pub fn generate() -> Identifier {
    generate_with(&mut rand::rng())
}

/// Generate a random identifier from the given RNG
///
/// Every non-hyphen slot is drawn independently from `0-9a-f`.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Identifier {
    let mut chars = [b'-'; IDENTIFIER_LENGTH];
    for (i, slot) in chars.iter_mut().enumerate() {
        if !is_hyphen_position(i) {
            *slot = HEX_DIGITS[rng.random_range(0..HEX_DIGITS.len())];
        }
    }
    Identifier::from_validated(chars)
}

/// RNG for target generation, seeded when reproducible games are wanted
#[must_use]
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}
