//! Identifier representation
//!
//! An Identifier is a 36-character hyphenated hex string in the 8-4-4-4-12 layout,
//! used both as the hidden target and as every submitted guess.

use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Total length of an identifier, hyphens included
pub const IDENTIFIER_LENGTH: usize = 36;

/// Lengths of the five hex-digit segments
pub const SEGMENT_LENGTHS: [usize; 5] = [8, 4, 4, 4, 12];

/// Positions (0-indexed) that always hold a hyphen
pub const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// Number of hex digits a player types to complete an identifier
pub const HEX_DIGIT_COUNT: usize = IDENTIFIER_LENGTH - HYPHEN_POSITIONS.len();

/// The accepted alphabet, in keyboard order of value
pub const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Check whether `position` is one of the fixed hyphen slots
#[inline]
#[must_use]
pub const fn is_hyphen_position(position: usize) -> bool {
    matches!(position, 8 | 13 | 18 | 23)
}

/// Check whether `ch` is a lowercase hex digit
#[inline]
#[must_use]
pub const fn is_hex_digit(ch: u8) -> bool {
    matches!(ch, b'0'..=b'9' | b'a'..=b'f')
}

/// A well-formed 36-character identifier
///
/// Always lowercase. Hyphens sit exactly at [`HYPHEN_POSITIONS`]; every other
/// position is a hex digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    text: String,
    chars: [u8; IDENTIFIER_LENGTH],
}

/// Error type for malformed identifiers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Identifier must be exactly {IDENTIFIER_LENGTH} characters, got {0}")]
    InvalidLength(usize),
    #[error("Identifier must contain only ASCII characters")]
    NonAscii,
    #[error("Expected '-' at position {0}")]
    MissingHyphen(usize),
    #[error("Invalid character {ch:?} at position {position}")]
    InvalidCharacter { position: usize, ch: char },
}

impl Identifier {
    /// Parse an identifier from text
    ///
    /// Input is case-insensitive and normalized to lowercase.
    ///
    /// # Errors
    /// Returns `IdentifierError` if:
    /// - Length is not exactly 36
    /// - Contains non-ASCII characters
    /// - A hyphen slot holds something other than `-`
    /// - A digit slot holds something other than `0-9a-f`
    ///
    /// # Examples
    /// ```
    /// use uuidle::core::Identifier;
    ///
    /// let id = Identifier::parse("0123ABCD-4567-89ab-cdef-0123456789ab").unwrap();
    /// assert_eq!(id.as_str(), "0123abcd-4567-89ab-cdef-0123456789ab");
    ///
    /// assert!(Identifier::parse("0123abcd").is_err());
    /// assert!(Identifier::parse("0123abcd-4567-89ab-cdef-0123456789ag").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, IdentifierError> {
        let text = text.to_lowercase();

        let len = text.chars().count();
        if len != IDENTIFIER_LENGTH {
            return Err(IdentifierError::InvalidLength(len));
        }

        if !text.is_ascii() {
            return Err(IdentifierError::NonAscii);
        }

        let mut chars = [0u8; IDENTIFIER_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        for (position, &ch) in chars.iter().enumerate() {
            if is_hyphen_position(position) {
                if ch != b'-' {
                    return Err(IdentifierError::MissingHyphen(position));
                }
            } else if !is_hex_digit(ch) {
                return Err(IdentifierError::InvalidCharacter {
                    position,
                    ch: char::from(ch),
                });
            }
        }

        Ok(Self { text, chars })
    }

    /// Build from bytes the caller has already laid out correctly
    pub(crate) fn from_validated(chars: [u8; IDENTIFIER_LENGTH]) -> Self {
        debug_assert!(
            chars.iter().enumerate().all(|(i, &ch)| if is_hyphen_position(i) {
                ch == b'-'
            } else {
                is_hex_digit(ch)
            }),
            "identifier bytes must be well-formed"
        );
        let text = chars.iter().map(|&ch| char::from(ch)).collect();
        Self { text, chars }
    }

    /// Get the identifier as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Get the identifier as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; IDENTIFIER_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-35)
    ///
    /// # Panics
    /// Panics if position >= 36
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Iterate over the hex digits only, skipping hyphens
    pub fn hex_digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.chars
            .iter()
            .enumerate()
            .filter(|(i, _)| !is_hyphen_position(*i))
            .map(|(_, &ch)| ch)
    }

    /// Check if the identifier contains a specific hex digit
    #[inline]
    #[must_use]
    pub fn has_digit(&self, digit: u8) -> bool {
        self.hex_digits().any(|ch| ch == digit)
    }

    /// Count each hex digit in the identifier
    ///
    /// Hyphens are not counted. Used by scoring to handle duplicates.
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for ch in self.hex_digits() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "0123abcd-4567-89ab-cdef-0123456789ab";

    #[test]
    fn identifier_parse_valid() {
        let id = Identifier::parse(SAMPLE).unwrap();
        assert_eq!(id.as_str(), SAMPLE);
        assert_eq!(id.chars(), SAMPLE.as_bytes());
    }

    #[test]
    fn identifier_parse_uppercase_normalized() {
        let id = Identifier::parse("0123ABCD-4567-89AB-CDEF-0123456789AB").unwrap();
        assert_eq!(id.as_str(), SAMPLE);
        assert_eq!(id, Identifier::parse(SAMPLE).unwrap());
    }

    #[test]
    fn identifier_parse_invalid_length() {
        assert_eq!(
            Identifier::parse("0123abcd"),
            Err(IdentifierError::InvalidLength(8))
        );
        assert_eq!(Identifier::parse(""), Err(IdentifierError::InvalidLength(0)));
        assert!(matches!(
            Identifier::parse(&format!("{SAMPLE}0")),
            Err(IdentifierError::InvalidLength(37))
        ));
    }

    #[test]
    fn identifier_parse_non_ascii() {
        let text = "0123abcd-4567-89ab-cdef-0123456789aé";
        assert_eq!(Identifier::parse(text), Err(IdentifierError::NonAscii));
    }

    #[test]
    fn identifier_parse_missing_hyphen() {
        // Hyphen shifted one slot left
        let text = "0123abc-d4567-89ab-cdef-0123456789ab";
        assert_eq!(
            Identifier::parse(text),
            Err(IdentifierError::InvalidCharacter {
                position: 7,
                ch: '-'
            })
        );

        let text = "0123abcd04567-89ab-cdef-0123456789ab";
        assert_eq!(
            Identifier::parse(text),
            Err(IdentifierError::MissingHyphen(8))
        );
    }

    #[test]
    fn identifier_parse_non_hex_digit() {
        let text = "0123abcd-4567-89ab-cdef-0123456789ag";
        assert_eq!(
            Identifier::parse(text),
            Err(IdentifierError::InvalidCharacter {
                position: 35,
                ch: 'g'
            })
        );
    }

    #[test]
    fn identifier_from_str() {
        let id: Identifier = SAMPLE.parse().unwrap();
        assert_eq!(id.to_string(), SAMPLE);
    }

    #[test]
    fn hyphen_positions_match_segments() {
        let mut position = 0;
        let mut expected = Vec::new();
        for len in &SEGMENT_LENGTHS[..4] {
            position += len;
            expected.push(position);
            position += 1;
        }
        assert_eq!(expected, HYPHEN_POSITIONS);
        assert_eq!(SEGMENT_LENGTHS.iter().sum::<usize>(), HEX_DIGIT_COUNT);
        for i in 0..IDENTIFIER_LENGTH {
            assert_eq!(is_hyphen_position(i), HYPHEN_POSITIONS.contains(&i));
        }
    }

    #[test]
    fn identifier_hex_digits_skip_hyphens() {
        let id = Identifier::parse(SAMPLE).unwrap();
        let digits: Vec<u8> = id.hex_digits().collect();
        assert_eq!(digits.len(), HEX_DIGIT_COUNT);
        assert!(!digits.contains(&b'-'));
    }

    #[test]
    fn identifier_has_digit() {
        let id = Identifier::parse("00000000-0000-0000-0000-00000000000a").unwrap();
        assert!(id.has_digit(b'0'));
        assert!(id.has_digit(b'a'));
        assert!(!id.has_digit(b'f'));
        assert!(!id.has_digit(b'-'));
    }

    #[test]
    fn identifier_char_counts() {
        let id = Identifier::parse("aa000000-0000-0000-0000-0000000000bf").unwrap();
        let counts = id.char_counts();
        assert_eq!(counts.get(&b'a'), Some(&2));
        assert_eq!(counts.get(&b'b'), Some(&1));
        assert_eq!(counts.get(&b'f'), Some(&1));
        assert_eq!(counts.get(&b'0'), Some(&28));
        assert_eq!(counts.get(&b'-'), None);
    }
}
