//! Display functions for command results and the line-based game board

use super::formatters::{colorize_guess, colorize_keyboard, create_progress_bar, pad_guess};
use crate::commands::ScoreResult;
use crate::core::Identifier;
use crate::game::{GameStatus, Session, Statistics};
use colored::Colorize;

/// Celebration line for a win after `attempts` guesses
#[must_use]
pub const fn celebration(attempts: usize) -> &'static str {
    match attempts {
        1 => "🎯 HOLE IN ONE! Did you peek? 🌟",
        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
        3 => "✨ SPLENDID! Three guesses! ✨",
        4 => "👏 GREAT JOB! Four guesses! 👏",
        5 => "😅 PHEW! Got it in five! 😅",
        _ => "🎊 SOLVED! 🎊",
    }
}

/// Advisory line shown once a game ends
#[must_use]
pub fn game_over_message(session: &Session) -> String {
    match session.status() {
        GameStatus::Won => "You won! 🎉".to_string(),
        GameStatus::Lost => format!("Game over! The UUID was: {}", session.target()),
        GameStatus::Playing => format!(
            "{} of {} guesses",
            session.attempts_used(),
            session.config().max_attempts
        ),
    }
}

/// Render the board: scored rows, the row being typed, then empty rows
#[must_use]
pub fn render_board(session: &Session) -> Vec<String> {
    let max_attempts = session.config().max_attempts;
    let mut lines = Vec::with_capacity(max_attempts + 2);

    for (i, entry) in session.history().iter().enumerate() {
        lines.push(format!(
            "  {}. {}",
            i + 1,
            colorize_guess(&entry.guess, &entry.result)
        ));
    }

    let mut row = session.history().len();
    if session.status() == GameStatus::Playing && row < max_attempts {
        row += 1;
        lines.push(format!(
            "  {}. {}",
            row,
            pad_guess(session.current_guess()).bright_white()
        ));
    }

    for i in row..max_attempts {
        lines.push(format!("  {}. {}", i + 1, pad_guess("").bright_black()));
    }

    lines.push(String::new());
    lines.push(format!(
        "  Keys: {}   [{}] {}",
        colorize_keyboard(&session.keyboard_statuses()),
        create_progress_bar(
            session.attempts_used(),
            max_attempts,
            max_attempts.saturating_mul(2).min(20)
        ),
        game_over_message(session)
    ));
    lines
}

/// Render running statistics in one line
#[must_use]
pub fn format_statistics(stats: &Statistics) -> String {
    format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    )
}

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(48).cyan());
    println!("Target: {}", result.target.as_str().bright_yellow().bold());
    println!("Guess:  {}", colorize_guess(&result.guess, &result.result));
    println!("        {}", result.result.to_emoji());
    println!("{}", "─".repeat(48).cyan());

    if result.result.is_perfect() {
        println!("{}", "✅ Exact match!".green().bold());
    } else {
        println!(
            "{} correct, {} present",
            result.result.count_correct().to_string().green().bold(),
            result.result.count_present().to_string().yellow().bold()
        );
    }
}

/// Print generated identifiers, one per line
pub fn print_identifiers(ids: &[Identifier]) {
    for id in ids {
        println!("{id}");
    }
}
