//! Key routing for the game engine

use crate::core::normalize_hex_key;

/// A key the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A lowercase hex digit
    Digit(char),
    Enter,
    Backspace,
}

impl Key {
    /// Parse a key name as the presentation layer reports it
    ///
    /// Accepts `"0"`-`"9"`, `"a"`-`"f"` (either case), `"Enter"` and `"Backspace"`.
    /// Everything else is `None` and should be ignored.
    ///
    /// # Examples
    /// ```
    /// use uuidle::game::Key;
    ///
    /// assert_eq!(Key::parse("B"), Some(Key::Digit('b')));
    /// assert_eq!(Key::parse("Enter"), Some(Key::Enter));
    /// assert_eq!(Key::parse("g"), None);
    /// ```
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Enter),
            "Backspace" => Some(Self::Backspace),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::from_char(ch),
                    _ => None,
                }
            }
        }
    }

    /// Map a single typed character to a digit key
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        normalize_hex_key(ch).map(Self::Digit)
    }
}
