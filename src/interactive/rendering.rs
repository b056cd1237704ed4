//! TUI rendering with ratatui
//!
//! Guess grid, hex keyboard and status panels for the game.

use super::app::{App, MessageStyle};
use crate::core::{CharStatus, IDENTIFIER_LENGTH, is_hyphen_position};
use crate::game::{GameStatus, KeyboardStatus};
use crate::output::formatters::create_progress_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Widest progress bar drawn in the status line
const PROGRESS_WIDTH: usize = 10;

/// Tallest the guess grid gets; later rows are clipped
const MAX_BOARD_ROWS: u16 = 12;

/// On-screen keyboard layout
const KEYBOARD_ROWS: [&[&str]; 3] = [
    &["1", "2", "3", "4", "5", "6", "7", "8", "9", "0"],
    &["a", "b", "c", "d", "e", "f", "⌫"],
    &["Enter"],
];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let board_height = u16::try_from(app.session.config().max_attempts)
        .unwrap_or(u16::MAX)
        .min(MAX_BOARD_ROWS)
        + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Length(board_height), // Guess grid
            Constraint::Length(5),            // Keyboard
            Constraint::Min(4),               // Messages
            Constraint::Length(3),            // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, &app.session.keyboard_statuses(), chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);

    if app.show_help {
        render_help(f, f.area(), app.session.config().max_attempts);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔑 UUIDle - Guess the UUID")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn status_style(status: Option<CharStatus>) -> Style {
    match status {
        Some(CharStatus::Correct) => Style::new().fg(Color::Black).bg(Color::Green),
        Some(CharStatus::Present) => Style::new().fg(Color::Black).bg(Color::Yellow),
        Some(CharStatus::Absent) => Style::new().fg(Color::Gray).bg(Color::DarkGray),
        None => Style::new().fg(Color::White),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let max_attempts = session.config().max_attempts;
    let mut lines: Vec<Line> = Vec::with_capacity(max_attempts);

    for entry in session.history() {
        let spans = entry
            .guess
            .as_str()
            .chars()
            .zip(entry.result.statuses())
            .map(|(ch, &status)| Span::styled(ch.to_string(), status_style(Some(status))))
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
    }

    if session.status() == GameStatus::Playing && lines.len() < max_attempts {
        lines.push(input_row(session.current_guess()));
    }

    // Rows below the bottom border would be clipped anyway
    let visible_rows = max_attempts.min(usize::from(area.height.saturating_sub(2)));
    while lines.len() < visible_rows {
        lines.push(input_row(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

/// A row being typed (or still empty), hyphen slots pre-placed
fn input_row(current: &str) -> Line<'static> {
    let typed: Vec<char> = current.chars().collect();
    let spans = (0..IDENTIFIER_LENGTH)
        .map(|i| match typed.get(i) {
            Some(&ch) => Span::styled(
                ch.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            None if is_hyphen_position(i) => {
                Span::styled("-", Style::default().fg(Color::DarkGray))
            }
            None => Span::styled("_", Style::default().fg(Color::DarkGray)),
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

fn render_keyboard(f: &mut Frame, keys: &KeyboardStatus, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for &label in *row {
                let status = label.chars().next().and_then(|ch| {
                    if label.len() == 1 {
                        keys.status_of(ch)
                    } else {
                        None
                    }
                });
                spans.push(Span::styled(format!(" {label} "), status_style(status)));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let session = &app.session;
    let max_attempts = session.config().max_attempts;
    let attempts_text = match session.status() {
        GameStatus::Playing => format!(
            "{} {} of {} guesses",
            create_progress_bar(
                session.attempts_used(),
                max_attempts,
                max_attempts.min(PROGRESS_WIDTH)
            ),
            session.attempts_used(),
            max_attempts
        ),
        GameStatus::Won => "Solved!".to_string(),
        GameStatus::Lost => "Out of guesses".to_string(),
    };
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if session.status().is_finished() {
        "q: Quit | n: New Game | ?: Help"
    } else {
        "q: Quit | n: New Game | Enter: Submit | ?: Help"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_help(f: &mut Frame, area: Rect, max_attempts: usize) {
    let popup = centered_rect(60, 60, area);

    let content = vec![
        Line::from(Span::styled(
            "How to Play UUIDle",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Guess the UUID in {max_attempts} tries. Each guess must be a complete UUID."
        )),
        Line::from("After each guess, the tiles show how close you were:"),
        Line::from(vec![
            Span::styled(" a ", status_style(Some(CharStatus::Correct))),
            Span::raw(" Correct character in the correct position"),
        ]),
        Line::from(vec![
            Span::styled(" b ", status_style(Some(CharStatus::Present))),
            Span::raw(" Correct character in the wrong position"),
        ]),
        Line::from(vec![
            Span::styled(" c ", status_style(Some(CharStatus::Absent))),
            Span::raw(" Character not in the UUID"),
        ]),
        Line::from(""),
        Line::from("The hyphens (-) are pre-placed for you. Focus on the hex characters."),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let help = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(help, popup);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_typed_guess_and_keyboard() {
        let mut app = App::new(GameConfig::default(), Some(1));
        for ch in "0123".chars() {
            app.session.press_key(&ch.to_string()).unwrap();
        }

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("UUIDle"));
        assert!(text.contains("0123____-____"));
        assert!(text.contains("Enter"));
        assert!(text.contains("0 of 5 guesses"));
    }

    #[test]
    fn renders_huge_attempt_limit() {
        let app = App::new(GameConfig::new(usize::from(u16::MAX)), Some(1));

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        assert!(buffer_text(&terminal).contains("of 65535 guesses"));
    }

    #[test]
    fn renders_help_overlay() {
        let mut app = App::new(GameConfig::default(), Some(1));
        app.show_help = true;

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        assert!(buffer_text(&terminal).contains("How to Play UUIDle"));
    }

    #[test]
    fn input_row_prefills_hyphens() {
        let row = input_row("");
        let text: String = row.spans.iter().map(|s| &*s.content).collect();
        assert_eq!(text, "________-____-____-____-____________");
    }
}
