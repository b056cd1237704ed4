//! UUIDle
//!
//! Wordle for UUIDs: guess a random 8-4-4-4-12 hex identifier in five tries, with
//! duplicate-aware per-character feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use uuidle::core::{Identifier, score};
//! use uuidle::game::{GameConfig, GameStatus, Session};
//!
//! // Score a guess directly
//! let target = Identifier::parse("0123abcd-4567-89ab-cdef-0123456789ab").unwrap();
//! assert!(score(&target, &target).is_perfect());
//!
//! // Or play through the engine, one key at a time
//! let mut session = Session::with_target(target.clone(), GameConfig::default());
//! for ch in target.as_str().chars() {
//!     session.press_key(&ch.to_string()).unwrap();
//! }
//! assert_eq!(session.press_key("Enter").unwrap(),
//!            uuidle::game::KeyOutcome::Submitted(GameStatus::Won));
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
