//! Terminal output formatting
//!
//! Display utilities for CLI results and the line-based board.

pub mod display;
pub mod formatters;

pub use display::{print_identifiers, print_score_result, render_board};
