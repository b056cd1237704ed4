//! Command implementations

pub mod generate;
pub mod score;
pub mod simple;

pub use generate::generate_identifiers;
pub use score::{ScoreResult, score_guess};
pub use simple::{run_simple, run_simple_with};
