//! Errors raised by the game engine

use super::GameStatus;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("UUID must be complete")]
    IncompleteGuess { length: usize },
    #[error("Game already ended ({0}), start a new game to keep playing")]
    GameOver(GameStatus),
}

pub type Result<T> = core::result::Result<T, GameError>;
