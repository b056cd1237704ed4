//! Guess assembly from key presses
//!
//! The player only ever types hex digits. Hyphens are inserted automatically when a
//! digit lands on a hyphen slot and removed together with the digit that follows them.

use super::identifier::{IDENTIFIER_LENGTH, is_hyphen_position};

/// Normalize a key to a lowercase hex digit
///
/// Returns `None` for anything outside `[0-9a-fA-F]`.
#[inline]
#[must_use]
pub const fn normalize_hex_key(key: char) -> Option<char> {
    match key {
        '0'..='9' | 'a'..='f' => Some(key),
        'A'..='F' => Some(key.to_ascii_lowercase()),
        _ => None,
    }
}

/// Append a digit to the in-progress guess, in place
///
/// Returns `false` if the key was not a hex digit or the guess is already full.
pub fn push_digit(current: &mut String, key: char) -> bool {
    let Some(digit) = normalize_hex_key(key) else {
        return false;
    };
    if current.len() >= IDENTIFIER_LENGTH {
        return false;
    }

    if is_hyphen_position(current.len()) {
        current.push('-');
    }
    current.push(digit);
    true
}

/// Remove the last typed digit, in place
///
/// A hyphen left dangling at the end is removed with it. Returns `false` if there
/// was nothing to remove.
pub fn pop_digit(current: &mut String) -> bool {
    let len = current.len();
    if len == 0 {
        return false;
    }

    if len >= 2 && is_hyphen_position(len - 2) {
        current.truncate(len - 2);
    } else {
        current.truncate(len - 1);
    }
    true
}

/// Return `current` with `key` appended
///
/// # Examples
/// ```
/// use uuidle::core::append_char;
///
/// assert_eq!(append_char("0123456", '7'), "01234567");
/// assert_eq!(append_char("01234567", 'A'), "01234567-a");
/// assert_eq!(append_char("01234567", 'x'), "01234567");
/// ```
#[must_use]
pub fn append_char(current: &str, key: char) -> String {
    let mut next = current.to_string();
    push_digit(&mut next, key);
    next
}

/// Return `current` with its last typed digit removed
///
/// # Examples
/// ```
/// use uuidle::core::backspace;
///
/// assert_eq!(backspace("01234567-a"), "01234567");
/// assert_eq!(backspace("0123"), "012");
/// assert_eq!(backspace(""), "");
/// ```
#[must_use]
pub fn backspace(current: &str) -> String {
    let mut next = current.to_string();
    pop_digit(&mut next);
    next
}
