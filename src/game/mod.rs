//! Game engine
//!
//! A [`Session`] owns the target, guess history, in-progress input and status.
//! Presentation layers feed it keys and read back feedback.

mod error;
mod key;
mod keyboard;
mod session;
mod stats;

pub use error::{GameError, Result};
pub use key::Key;
pub use keyboard::KeyboardStatus;
pub use session::{
    DEFAULT_MAX_ATTEMPTS, GameConfig, GameStatus, HistoryEntry, KeyOutcome, Session,
};
pub use stats::Statistics;
