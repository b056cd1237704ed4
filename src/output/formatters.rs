//! Formatting utilities for terminal output

use crate::core::{
    CharStatus, GuessResult, HEX_DIGITS, IDENTIFIER_LENGTH, Identifier, is_hyphen_position,
};
use crate::game::KeyboardStatus;
use colored::{ColoredString, Colorize};

/// Placeholder shown for untyped slots
const EMPTY_SLOT: char = '·';

/// Color one character by its feedback
fn paint(text: &str, status: Option<CharStatus>) -> ColoredString {
    match status {
        Some(CharStatus::Correct) => text.black().on_green().bold(),
        Some(CharStatus::Present) => text.black().on_yellow().bold(),
        Some(CharStatus::Absent) => text.bright_black(),
        None => text.normal(),
    }
}

/// Render a scored guess with a colored tile per character
#[must_use]
pub fn colorize_guess(guess: &Identifier, result: &GuessResult) -> String {
    guess
        .as_str()
        .chars()
        .zip(result.statuses())
        .map(|(ch, &status)| paint(&ch.to_string(), Some(status)).to_string())
        .collect()
}

/// Pad an in-progress guess out to full width, keeping hyphen slots visible
///
/// # Examples
/// ```
/// use uuidle::output::formatters::pad_guess;
///
/// assert_eq!(pad_guess("0123"), "0123····-····-····-····-············");
/// ```
#[must_use]
pub fn pad_guess(current: &str) -> String {
    (0..IDENTIFIER_LENGTH)
        .map(|i| {
            let blank = if is_hyphen_position(i) { '-' } else { EMPTY_SLOT };
            current.chars().nth(i).unwrap_or(blank)
        })
        .collect()
}

/// Render the hex keyboard, each key colored by its best-known status
#[must_use]
pub fn colorize_keyboard(keys: &KeyboardStatus) -> String {
    HEX_DIGITS
        .iter()
        .map(|&digit| {
            let key = char::from(digit);
            paint(&key.to_string(), keys.status_of(key)).to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shareable emoji grid for a finished game
#[must_use]
pub fn share_grid<'a, I>(results: I, max_attempts: usize, won: bool) -> String
where
    I: IntoIterator<Item = &'a GuessResult>,
{
    let rows: Vec<String> = results.into_iter().map(GuessResult::to_emoji).collect();
    let score = if won {
        rows.len().to_string()
    } else {
        "X".to_string()
    };

    let mut grid = format!("UUIDle {score}/{max_attempts}");
    for row in rows {
        grid.push('\n');
        grid.push_str(&row);
    }
    grid
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    #[test]
    fn pad_guess_empty() {
        assert_eq!(pad_guess(""), "········-····-····-····-············");
    }

    #[test]
    fn pad_guess_full_is_unchanged() {
        let full = "0123abcd-4567-89ab-cdef-0123456789ab";
        assert_eq!(pad_guess(full), full);
    }

    #[test]
    fn share_grid_won() {
        let target = Identifier::parse("0123abcd-4567-89ab-cdef-0123456789ab").unwrap();
        let result = score(&target, &target);
        let grid = share_grid([&result], 5, true);

        let mut lines = grid.lines();
        assert_eq!(lines.next(), Some("UUIDle 1/5"));
        assert_eq!(lines.next(), Some(result.to_emoji().as_str()));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn share_grid_lost() {
        let grid = share_grid(&Vec::<GuessResult>::new(), 5, false);
        assert_eq!(grid, "UUIDle X/5");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 5, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(5, 5, 10), "██████████");
    }

    #[test]
    fn progress_bar_partial() {
        assert_eq!(create_progress_bar(2, 5, 10), "████░░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }
}
