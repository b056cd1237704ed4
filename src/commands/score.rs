//! Score command
//!
//! Scores one guess against a given target without playing a game.

use crate::core::{GuessResult, Identifier, IdentifierError, score};

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: Identifier,
    pub target: Identifier,
    pub result: GuessResult,
}

/// Parse both identifiers and score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either string is not a well-formed identifier.
pub fn score_guess(guess: &str, target: &str) -> Result<ScoreResult, IdentifierError> {
    let guess = Identifier::parse(guess)?;
    let target = Identifier::parse(target)?;
    let result = score(&guess, &target);

    Ok(ScoreResult {
        guess,
        target,
        result,
    })
}
