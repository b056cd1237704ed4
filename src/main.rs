//! UUIDle - CLI
//!
//! Guess a random UUID in five tries, in a TUI or a plain line-based mode.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use uuidle::{
    commands::{generate_identifiers, run_simple, score_guess},
    game::{DEFAULT_MAX_ATTEMPTS, GameConfig},
    output::{display::format_statistics, print_identifiers, print_score_result},
};

#[derive(Parser)]
#[command(
    name = "uuidle",
    about = "Wordle for UUIDs: guess the random identifier in five tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of guesses allowed per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// Seed for target generation (reproducible games)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log file for TUI mode (other modes log to stderr)
    #[arg(long, global = true, default_value = "uuidle.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Score a guess against a target
    Score {
        /// The guessed UUID
        guess: String,

        /// The target UUID
        target: String,
    },

    /// Print random UUIDs in game format
    Generate {
        /// How many to print
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.attempts == 0 {
        bail!("--attempts must be at least 1");
    }
    let config = GameConfig::new(cli.attempts);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            init_file_logging(&cli.log_file)?;
            run_play_command(config, cli.seed)
        }
        Commands::Simple => {
            init_stderr_logging();
            let stats = run_simple(config, cli.seed)?;
            tracing::info!(summary = %format_statistics(&stats), "Simple mode finished");
            Ok(())
        }
        Commands::Score { guess, target } => {
            init_stderr_logging();
            run_score_command(&guess, &target)
        }
        Commands::Generate { count } => {
            init_stderr_logging();
            print_identifiers(&generate_identifiers(count, cli.seed));
            Ok(())
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Log to stderr, quiet unless RUST_LOG says otherwise
fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log to a file so the alternate screen is left alone
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn run_score_command(guess: &str, target: &str) -> Result<()> {
    let result = score_guess(guess, target)?;
    print_score_result(&result);
    Ok(())
}

fn run_play_command(config: GameConfig, seed: Option<u64>) -> Result<()> {
    use uuidle::interactive::{App, run_tui};

    let app = App::new(config, seed);
    run_tui(app)
}
