//! Win/loss tallies across games

use super::{GameStatus, Session};

/// Running totals across the games of one program run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// `guess_distribution[n]` counts wins that took `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Record a finished session; sessions still in play are not counted
    pub fn record(&mut self, session: &Session) {
        match session.status() {
            GameStatus::Playing => {}
            GameStatus::Lost => self.total_games += 1,
            GameStatus::Won => {
                self.total_games += 1;
                self.games_won += 1;
                let guesses = session.attempts_used();
                if self.guess_distribution.len() <= guesses {
                    self.guess_distribution.resize(guesses + 1, 0);
                }
                self.guess_distribution[guesses] += 1;
            }
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Identifier;
    use crate::game::GameConfig;

    const TARGET: &str = "0123abcd-4567-89ab-cdef-0123456789ab";

    fn play(session: &mut Session, guess: &str) {
        for ch in guess.chars() {
            session.press_key(&ch.to_string()).unwrap();
        }
        session.submit().unwrap();
    }

    #[test]
    fn record_ignores_unfinished() {
        let session = Session::new(GameConfig::default());
        let mut stats = Statistics::default();
        stats.record(&session);
        assert_eq!(stats, Statistics::default());
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn record_win_and_loss() {
        let target = Identifier::parse(TARGET).unwrap();
        let mut stats = Statistics::default();

        let mut won = Session::with_target(target.clone(), GameConfig::default());
        play(&mut won, "ffffffff-ffff-ffff-ffff-ffffffffffff");
        play(&mut won, TARGET);
        stats.record(&won);

        let mut lost = Session::with_target(target, GameConfig::new(1));
        play(&mut lost, "ffffffff-ffff-ffff-ffff-ffffffffffff");
        stats.record(&lost);

        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution, vec![0, 0, 1]);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }
}
