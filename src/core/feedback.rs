//! Guess scoring and per-character feedback
//!
//! Each position of a guess is classified as:
//! - Absent (digit not in the target, or every occurrence already accounted for)
//! - Present (digit in the target, wrong position)
//! - Correct (digit in the right position; hyphen slots are always correct)

use super::identifier::{IDENTIFIER_LENGTH, Identifier, is_hyphen_position};

/// Feedback for a single character
///
/// Ordered by strength: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharStatus {
    Absent,
    Present,
    Correct,
}

impl CharStatus {
    /// Emoji tile for this status
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, one status per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessResult([CharStatus; IDENTIFIER_LENGTH]);

impl GuessResult {
    /// Every position correct
    pub const PERFECT: Self = Self([CharStatus::Correct; IDENTIFIER_LENGTH]);

    /// Score `guess` against `target`
    ///
    /// Duplicate digits are handled the way Wordle does: exact matches claim their
    /// occurrence first, then misplaced digits claim whatever is left, left to right.
    ///
    /// # Algorithm
    /// 1. Hyphen slots are correct
    /// 2. First pass: mark exact matches and remove them from the available pool
    /// 3. Second pass: mark present digits from the remaining pool, in position order
    ///
    /// # Examples
    /// ```
    /// use uuidle::core::{CharStatus, GuessResult, Identifier};
    ///
    /// let target = Identifier::parse("a0000000-0000-0000-0000-000000000000").unwrap();
    /// let guess = Identifier::parse("1a000000-0000-0000-0000-00000000000a").unwrap();
    /// let result = GuessResult::calculate(&guess, &target);
    ///
    /// assert_eq!(result.status_at(0), CharStatus::Absent);
    /// assert_eq!(result.status_at(1), CharStatus::Present);
    /// assert_eq!(result.status_at(35), CharStatus::Absent);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Identifier, target: &Identifier) -> Self {
        let mut result = [CharStatus::Absent; IDENTIFIER_LENGTH];
        let mut target_available = target.char_counts();

        // First pass: hyphens and exact matches
        // Allow: Index needed to read both identifiers and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..IDENTIFIER_LENGTH {
            if is_hyphen_position(i) {
                result[i] = CharStatus::Correct;
                continue;
            }

            let digit = guess.char_at(i);
            if digit == target.char_at(i) {
                result[i] = CharStatus::Correct;
                if let Some(count) = target_available.get_mut(&digit) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced digits, left to right
        #[allow(clippy::needless_range_loop)]
        for i in 0..IDENTIFIER_LENGTH {
            if result[i] == CharStatus::Absent {
                let digit = guess.char_at(i);
                if let Some(count) = target_available.get_mut(&digit)
                    && *count > 0
                {
                    result[i] = CharStatus::Present;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    /// All statuses in position order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[CharStatus; IDENTIFIER_LENGTH] {
        &self.0
    }

    /// Status at a specific position (0-35)
    ///
    /// # Panics
    /// Panics if position >= 36
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> CharStatus {
        self.0[position]
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count correct hex-digit positions (hyphens excluded)
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count_digits_with(CharStatus::Correct)
    }

    /// Count present hex-digit positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count_digits_with(CharStatus::Present)
    }

    fn count_digits_with(&self, status: CharStatus) -> usize {
        self.0
            .iter()
            .enumerate()
            .filter(|&(i, &s)| !is_hyphen_position(i) && s == status)
            .count()
    }

    /// Render as an emoji row, keeping hyphens as separators
    ///
    /// # Examples
    /// ```
    /// use uuidle::core::GuessResult;
    ///
    /// let row = GuessResult::PERFECT.to_emoji();
    /// assert!(row.starts_with("🟩🟩🟩🟩🟩🟩🟩🟩-🟩"));
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        let mut row = String::with_capacity(IDENTIFIER_LENGTH * 4);
        for (i, status) in self.0.iter().enumerate() {
            if is_hyphen_position(i) {
                row.push('-');
            } else {
                row.push(status.emoji());
            }
        }
        row
    }
}

/// Score `guess` against `target`
///
/// Shorthand for [`GuessResult::calculate`].
#[must_use]
pub fn score(guess: &Identifier, target: &Identifier) -> GuessResult {
    GuessResult::calculate(guess, target)
}
