//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Each line is typed into the session key by key,
//! then submitted.

use crate::core::seeded_rng;
use crate::game::{GameConfig, GameError, GameStatus, KeyOutcome, Session, Statistics};
use crate::output::display::{celebration, format_statistics, game_over_message, render_board};
use crate::output::formatters::share_grid;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(config: GameConfig, seed: Option<u64>) -> Result<Statistics> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_simple_with(config, &mut seeded_rng(seed), stdin.lock(), &mut stdout)
}

/// Run the line-based game over arbitrary input and output
///
/// Ends on `quit` or end of input, returning the statistics of finished games.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<R, I, W>(
    config: GameConfig,
    rng: &mut R,
    input: I,
    output: &mut W,
) -> Result<Statistics>
where
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    print_banner(output, config)?;

    let mut lines = input.lines();
    let mut session = Session::with_rng(config, rng);
    let mut stats = Statistics::default();

    loop {
        writeln!(output)?;
        for line in render_board(&session) {
            writeln!(output, "{line}")?;
        }

        if session.status().is_finished() {
            stats.record(&session);
            print_game_end(output, &session, &stats)?;

            write!(output, "\nPlay again? (yes/no): ")?;
            output.flush()?;
            match lines.next().transpose()? {
                Some(answer) if matches!(answer.trim().to_lowercase().as_str(), "yes" | "y") => {
                    session.reset_with(rng);
                    writeln!(output, "\n🔄 New game started!")?;
                    continue;
                }
                _ => break,
            }
        }

        write!(
            output,
            "\nGuess {} of {}: ",
            session.attempts_used() + 1,
            config.max_attempts
        )?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim().to_lowercase();

        match line.as_str() {
            "" => {}
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                stats.record(&session);
                session.reset_with(rng);
                writeln!(output, "\n🔄 New game started!")?;
            }
            guess => {
                if let Err(e) = type_guess(&mut session, guess) {
                    writeln!(output, "{} {e}", "❌".red())?;
                }
            }
        }
    }

    writeln!(output, "\n👋 Thanks for playing!")?;
    writeln!(output, "{}", format_statistics(&stats))?;
    Ok(stats)
}

/// Type a whole line into the session and press Enter
///
/// Any previous partial input is erased first; characters outside the hex
/// alphabet (hyphens included) are skipped.
fn type_guess(session: &mut Session, guess: &str) -> Result<GameStatus, GameError> {
    while session.press_key("Backspace")? == KeyOutcome::Erased {}

    for ch in guess.chars() {
        session.press_key(&ch.to_string())?;
    }
    debug!(typed = session.current_guess(), "Submitting line");

    match session.press_key("Enter") {
        Ok(KeyOutcome::Submitted(status)) => Ok(status),
        Ok(_) => Ok(session.status()),
        Err(e) => {
            while session.press_key("Backspace")? == KeyOutcome::Erased {}
            Err(e)
        }
    }
}

fn print_banner<W: Write>(output: &mut W, config: GameConfig) -> io::Result<()> {
    writeln!(
        output,
        "\n╔══════════════════════════════════════════════════════════════╗"
    )?;
    writeln!(
        output,
        "║                   UUIDle - Interactive Mode                  ║"
    )?;
    writeln!(
        output,
        "╚══════════════════════════════════════════════════════════════╝\n"
    )?;
    writeln!(
        output,
        "Guess the UUID in {} tries. Type the 32 hex digits; hyphens are added for you.",
        config.max_attempts
    )?;
    writeln!(
        output,
        "  - {} correct character in the correct position",
        " a ".black().on_green()
    )?;
    writeln!(
        output,
        "  - {} correct character in the wrong position",
        " b ".black().on_yellow()
    )?;
    writeln!(
        output,
        "  - {} character not in the UUID",
        " c ".bright_black()
    )?;
    writeln!(output, "\nCommands: 'quit' to exit, 'new' for new game")
}

fn print_game_end<W: Write>(
    output: &mut W,
    session: &Session,
    stats: &Statistics,
) -> io::Result<()> {
    writeln!(output, "\n{}", "═".repeat(70).bright_cyan())?;
    if session.status() == GameStatus::Won {
        writeln!(
            output,
            "  {}",
            celebration(session.attempts_used()).bright_green().bold()
        )?;
    }
    writeln!(output, "  {}", game_over_message(session).bright_white())?;
    writeln!(output, "{}", "═".repeat(70).bright_cyan())?;

    let grid = share_grid(
        session.history().iter().map(|entry| &entry.result),
        session.config().max_attempts,
        session.status() == GameStatus::Won,
    );
    writeln!(output, "\n{grid}\n")?;
    writeln!(output, "{}", format_statistics(stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Identifier, generate_with};
    use std::io::Cursor;

    fn run(config: GameConfig, seed: u64, input: &str) -> (Statistics, String) {
        let mut rng = seeded_rng(Some(seed));
        let mut output = Vec::new();
        let stats = run_simple_with(config, &mut rng, Cursor::new(input), &mut output).unwrap();
        (stats, String::from_utf8(output).unwrap())
    }

    fn target_for(seed: u64) -> Identifier {
        generate_with(&mut seeded_rng(Some(seed)))
    }

    #[test]
    fn quit_immediately() {
        let (stats, output) = run(GameConfig::default(), 1, "quit\n");
        assert_eq!(stats.total_games, 0);
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn end_of_input_stops() {
        let (stats, _) = run(GameConfig::default(), 1, "");
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn incomplete_guess_is_reported() {
        let (_, output) = run(GameConfig::default(), 1, "0123\nquit\n");
        assert!(output.contains("UUID must be complete"));
        assert!(output.contains("Guess 1 of 5"));
    }

    #[test]
    fn winning_line_is_recorded() {
        let target = target_for(5);
        let input = format!("{target}\nno\n");
        let (stats, output) = run(GameConfig::default(), 5, &input);

        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 1);
        assert!(output.contains("You won!"));
        assert!(output.contains("UUIDle 1/5"));
    }

    #[test]
    fn hyphenless_input_is_accepted() {
        let target = target_for(8);
        let digits: String = target.as_str().chars().filter(|&c| c != '-').collect();
        let input = format!("{}\nno\n", digits.to_uppercase());
        let (stats, _) = run(GameConfig::default(), 8, &input);
        assert_eq!(stats.games_won, 1);
    }

    #[test]
    fn losing_reveals_target() {
        let target = target_for(3);
        let wrong = if target.as_str() == "00000000-0000-0000-0000-000000000000" {
            "11111111-1111-1111-1111-111111111111"
        } else {
            "00000000-0000-0000-0000-000000000000"
        };
        let input = format!("{wrong}\n{wrong}\nno\n");
        let (stats, output) = run(GameConfig::new(2), 3, &input);

        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 0);
        assert!(output.contains(&format!("Game over! The UUID was: {target}")));
        assert!(output.contains("UUIDle X/2"));
    }

    #[test]
    fn play_again_starts_fresh_game() {
        let mut rng = seeded_rng(Some(11));
        let first = generate_with(&mut rng);
        let second = generate_with(&mut rng);
        let input = format!("{first}\nyes\n{second}\nno\n");

        let (stats, output) = run(GameConfig::default(), 11, &input);
        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.guess_distribution, vec![0, 2]);
        assert!(output.contains("New game started"));
    }
}
