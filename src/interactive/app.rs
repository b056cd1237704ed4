//! TUI application state and logic

use crate::core::seeded_rng;
use crate::game::{GameConfig, GameError, GameStatus, Key, KeyOutcome, Session, Statistics};
use crate::output::display::{celebration, game_over_message};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How long advisory messages stay on screen
pub const ADVISORY_TIMEOUT: Duration = Duration::from_secs(2);

/// Poll interval so expired messages disappear without a key press
const TICK_RATE: Duration = Duration::from_millis(250);

/// Application state
pub struct App {
    pub session: Session,
    pub rng: StdRng,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub show_help: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
    /// Advisory messages vanish at this instant; `None` stays until cleared
    pub expires_at: Option<Instant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let mut rng = seeded_rng(seed);
        let session = Session::with_rng(config, &mut rng);

        Self {
            session,
            rng,
            messages: vec![Message {
                text: "Type hex digits to guess the UUID. Press '?' for help.".to_string(),
                style: MessageStyle::Info,
                expires_at: None,
            }],
            stats: Statistics::default(),
            should_quit: false,
            show_help: false,
        }
    }

    /// Dispatch one key event
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.show_help {
            // Any key closes the help overlay
            self.show_help = false;
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('n') => {
                self.new_game();
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Char(c) => {
                if let Some(key) = Key::from_char(c) {
                    self.apply(key);
                }
            }
            KeyCode::Backspace => self.apply(Key::Backspace),
            KeyCode::Enter => self.apply(Key::Enter),
            _ => {}
        }
    }

    fn apply(&mut self, key: Key) {
        match self.session.handle_key(key) {
            Ok(KeyOutcome::Submitted(status)) => self.on_submitted(status),
            Ok(_) => {}
            Err(GameError::GameOver(_)) => {
                self.add_advisory("Press 'n' for a new game", MessageStyle::Info);
            }
            Err(e) => {
                debug!(error = %e, "Guess rejected");
                self.add_advisory(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    fn on_submitted(&mut self, status: GameStatus) {
        match status {
            GameStatus::Playing => {}
            GameStatus::Won => {
                self.stats.record(&self.session);
                let attempts = self.session.attempts_used();
                self.add_message(celebration(attempts), MessageStyle::Success);
                self.add_message(&game_over_message(&self.session), MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::Lost => {
                self.stats.record(&self.session);
                self.add_message(&game_over_message(&self.session), MessageStyle::Error);
                self.add_message("Press 'n' to try again or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    pub fn new_game(&mut self) {
        self.session.reset_with(&mut self.rng);
        self.messages.clear();
        info!("New game started from TUI");
        self.add_message("New game started! Good luck.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.push_message(Message {
            text: text.to_string(),
            style,
            expires_at: None,
        });
    }

    /// Add a message that disappears after [`ADVISORY_TIMEOUT`]
    pub fn add_advisory(&mut self, text: &str, style: MessageStyle) {
        self.push_message(Message {
            text: text.to_string(),
            style,
            expires_at: Some(Instant::now() + ADVISORY_TIMEOUT),
        });
    }

    fn push_message(&mut self, message: Message) {
        self.messages.push(message);

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Drop advisory messages that have expired by `now`
    pub fn expire_messages(&mut self, now: Instant) {
        self.messages
            .retain(|msg| msg.expires_at.is_none_or(|deadline| deadline > now));
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "TUI exited with error");
    }
    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.expire_messages(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key_event(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
