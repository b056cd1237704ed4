//! Best-known status per hex key, folded from guess history

use crate::core::{CharStatus, GuessResult, HEX_DIGITS, Identifier, is_hyphen_position};

/// Status of every hex key on the on-screen keyboard
///
/// A key takes the strongest status it has received in any scored guess
/// (`Correct > Present > Absent`); keys never guessed have no status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardStatus([Option<CharStatus>; 16]);

impl KeyboardStatus {
    /// Fold a guess history into key statuses
    ///
    /// # Examples
    /// ```
    /// use uuidle::core::{score, CharStatus, Identifier};
    /// use uuidle::game::KeyboardStatus;
    ///
    /// let target = Identifier::parse("a0000000-0000-0000-0000-000000000000").unwrap();
    /// let guess = Identifier::parse("0a000000-0000-0000-0000-00000000000f").unwrap();
    /// let result = score(&guess, &target);
    ///
    /// let keys = KeyboardStatus::from_history([(&guess, &result)]);
    /// assert_eq!(keys.status_of('0'), Some(CharStatus::Correct));
    /// assert_eq!(keys.status_of('a'), Some(CharStatus::Present));
    /// assert_eq!(keys.status_of('f'), Some(CharStatus::Absent));
    /// assert_eq!(keys.status_of('b'), None);
    /// ```
    pub fn from_history<'a, I>(history: I) -> Self
    where
        I: IntoIterator<Item = (&'a Identifier, &'a GuessResult)>,
    {
        history
            .into_iter()
            .fold(Self::default(), |keys, (guess, result)| {
                keys.with_guess(guess, result)
            })
    }

    /// Merge one scored guess into the statuses
    #[must_use]
    pub fn with_guess(mut self, guess: &Identifier, result: &GuessResult) -> Self {
        for (i, (&digit, &status)) in guess.chars().iter().zip(result.statuses()).enumerate() {
            if is_hyphen_position(i) {
                continue;
            }
            if let Some(slot) = digit_index(digit).map(|idx| &mut self.0[idx]) {
                *slot = Some(slot.map_or(status, |known| known.max(status)));
            }
        }
        self
    }

    /// Best-known status of a key, `None` if never guessed or not a hex key
    #[must_use]
    pub fn status_of(&self, key: char) -> Option<CharStatus> {
        u8::try_from(key)
            .ok()
            .and_then(|byte| digit_index(byte.to_ascii_lowercase()))
            .and_then(|idx| self.0[idx])
    }
}

fn digit_index(digit: u8) -> Option<usize> {
    HEX_DIGITS.iter().position(|&d| d == digit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    fn id(text: &str) -> Identifier {
        Identifier::parse(text).unwrap()
    }

    #[test]
    fn empty_history_has_no_statuses() {
        let keys = KeyboardStatus::default();
        for key in "0123456789abcdef".chars() {
            assert_eq!(keys.status_of(key), None);
        }
    }

    #[test]
    fn correct_is_never_downgraded() {
        let target = id("a0000000-0000-0000-0000-000000000000");
        let first = id("a1111111-1111-1111-1111-111111111111");
        let second = id("1111111a-1111-1111-1111-111111111111");
        let r1 = score(&first, &target);
        let r2 = score(&second, &target);

        let keys = KeyboardStatus::from_history([(&first, &r1), (&second, &r2)]);
        assert_eq!(keys.status_of('a'), Some(CharStatus::Correct));
        assert_eq!(keys.status_of('1'), Some(CharStatus::Absent));
    }

    #[test]
    fn present_upgrades_to_correct() {
        let target = id("a0000000-0000-0000-0000-000000000000");
        let first = id("1a111111-1111-1111-1111-111111111111");
        let second = id("a1111111-1111-1111-1111-111111111111");
        let r1 = score(&first, &target);
        let r2 = score(&second, &target);

        let after_first = KeyboardStatus::from_history([(&first, &r1)]);
        assert_eq!(after_first.status_of('a'), Some(CharStatus::Present));

        let after_both = after_first.with_guess(&second, &r2);
        assert_eq!(after_both.status_of('a'), Some(CharStatus::Correct));
    }

    #[test]
    fn surplus_duplicate_does_not_mark_key_absent() {
        // Second 'b' is absent, but the first was present; the key stays present
        let target = id("0000000b-0000-0000-0000-000000000000");
        let guess = id("bb000000-0000-0000-0000-000000000000");
        let result = score(&guess, &target);

        let keys = KeyboardStatus::from_history([(&guess, &result)]);
        assert_eq!(keys.status_of('b'), Some(CharStatus::Present));
    }

    #[test]
    fn status_of_is_case_insensitive() {
        let target = id("f0000000-0000-0000-0000-000000000000");
        let guess = target.clone();
        let result = score(&guess, &target);

        let keys = KeyboardStatus::from_history([(&guess, &result)]);
        assert_eq!(keys.status_of('F'), Some(CharStatus::Correct));
        assert_eq!(keys.status_of('-'), None);
        assert_eq!(keys.status_of('🟩'), None);
    }
}
