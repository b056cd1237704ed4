//! Game session state machine

use super::error::{GameError, Result};
use super::key::Key;
use super::keyboard::KeyboardStatus;
use crate::core::{
    GuessResult, IDENTIFIER_LENGTH, Identifier, generate_with, pop_digit, push_digit,
};
use rand::Rng;
use std::fmt;
use tracing::{debug, info};

/// Attempts allowed per game unless configured otherwise
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Settings captured when a session starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
}

impl GameConfig {
    /// # Panics
    /// Panics in debug mode if `max_attempts` is zero
    #[must_use]
    pub const fn new(max_attempts: usize) -> Self {
        debug_assert!(max_attempts > 0, "a game needs at least one attempt");
        Self { max_attempts }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(text)
    }
}

/// One submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub guess: Identifier,
    pub result: GuessResult,
}

/// What a key press did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A digit (and possibly a hyphen) was appended
    Typed,
    /// The last typed digit was removed
    Erased,
    /// A guess was scored; carries the status afterwards
    Submitted(GameStatus),
    /// The key had no effect
    Ignored,
}

/// A single game from target generation until win, loss or reset
///
/// All mutation goes through [`Session::press_key`], [`Session::submit`] and
/// [`Session::reset`]. Once the game is won or lost only `reset` changes anything.
#[derive(Debug, Clone)]
pub struct Session {
    target: Identifier,
    history: Vec<HistoryEntry>,
    current_guess: String,
    status: GameStatus,
    config: GameConfig,
}

impl Session {
    /// Start a session with a random target
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, &mut rand::rng())
    }

    /// Start a session with a target drawn from `rng`
    pub fn with_rng<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        Self::with_target(generate_with(rng), config)
    }

    /// Start a session with a known target
    #[must_use]
    pub fn with_target(target: Identifier, config: GameConfig) -> Self {
        info!(max_attempts = config.max_attempts, "Starting new session");
        debug!(target = %target, "Target generated");
        Self {
            target,
            history: Vec::with_capacity(config.max_attempts),
            current_guess: String::with_capacity(IDENTIFIER_LENGTH),
            status: GameStatus::Playing,
            config,
        }
    }

    /// Route a key by name: `"0"`-`"9"`, `"a"`-`"f"`, `"Enter"`, `"Backspace"`
    ///
    /// Unknown keys are ignored without error.
    ///
    /// # Errors
    /// - `GameError::GameOver` if the game has already ended
    /// - `GameError::IncompleteGuess` if Enter is pressed before the guess is complete
    pub fn press_key(&mut self, key: &str) -> Result<KeyOutcome> {
        match Key::parse(key) {
            Some(key) => self.handle_key(key),
            None => Ok(KeyOutcome::Ignored),
        }
    }

    /// Apply an already-parsed key
    ///
    /// # Errors
    /// Same as [`Session::press_key`].
    pub fn handle_key(&mut self, key: Key) -> Result<KeyOutcome> {
        self.ensure_playing()?;

        let outcome = match key {
            Key::Digit(ch) => {
                if push_digit(&mut self.current_guess, ch) {
                    KeyOutcome::Typed
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Backspace => {
                if pop_digit(&mut self.current_guess) {
                    KeyOutcome::Erased
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Enter => KeyOutcome::Submitted(self.submit()?),
        };
        Ok(outcome)
    }

    /// Score the in-progress guess and advance the game
    ///
    /// # Errors
    /// - `GameError::GameOver` if the game has already ended
    /// - `GameError::IncompleteGuess` if fewer than 36 characters have been entered;
    ///   the session is left unchanged
    pub fn submit(&mut self) -> Result<GameStatus> {
        self.ensure_playing()?;

        let length = self.current_guess.len();
        if length != IDENTIFIER_LENGTH {
            debug!(length, "Rejected incomplete guess");
            return Err(GameError::IncompleteGuess { length });
        }

        // push_digit only ever builds lowercase hex with hyphens in their slots
        let mut chars = [0u8; IDENTIFIER_LENGTH];
        chars.copy_from_slice(self.current_guess.as_bytes());
        let guess = Identifier::from_validated(chars);
        let result = GuessResult::calculate(&guess, &self.target);
        let won = guess == self.target;

        debug!(
            guess = %guess,
            correct = result.count_correct(),
            present = result.count_present(),
            "Scored guess"
        );

        self.history.push(HistoryEntry { guess, result });
        self.current_guess.clear();

        if won {
            self.status = GameStatus::Won;
            info!(attempts = self.history.len(), "Game won");
        } else if self.history.len() >= self.config.max_attempts {
            self.status = GameStatus::Lost;
            info!(attempts = self.history.len(), "Game lost");
        }

        Ok(self.status)
    }

    /// Discard everything and start over with a fresh random target
    pub fn reset(&mut self) {
        self.reset_with(&mut rand::rng());
    }

    /// Like [`Session::reset`], drawing the new target from `rng`
    pub fn reset_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::with_rng(self.config, rng);
    }

    fn ensure_playing(&self) -> Result<()> {
        if self.status.is_finished() {
            return Err(GameError::GameOver(self.status));
        }
        Ok(())
    }

    #[must_use]
    pub const fn target(&self) -> &Identifier {
        &self.target
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.history.len())
    }

    /// Best-known status of each hex key across all guesses so far
    #[must_use]
    pub fn keyboard_statuses(&self) -> KeyboardStatus {
        KeyboardStatus::from_history(
            self.history
                .iter()
                .map(|entry| (&entry.guess, &entry.result)),
        )
    }
}
