//! Core domain types for UUIDle
//!
//! Identifiers, guess scoring, target generation and guess assembly. Everything here
//! is pure except the generator, which only consumes randomness.

mod feedback;
mod generator;
mod identifier;
mod input;

pub use feedback::{CharStatus, GuessResult, score};
pub use generator::{generate, generate_with, seeded_rng};
pub use identifier::{
    HEX_DIGIT_COUNT, HEX_DIGITS, HYPHEN_POSITIONS, IDENTIFIER_LENGTH, Identifier, IdentifierError,
    SEGMENT_LENGTHS, is_hex_digit, is_hyphen_position,
};
pub use input::{append_char, backspace, normalize_hex_key, pop_digit, push_digit};
