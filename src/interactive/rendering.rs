//! TUI rendering with ratatui
//!
//! Board, keyboard, and stats visualizations for the game interface.

use super::app::{App, Message, MessageStyle};
use crate::engine::{LetterStatus, MAX_GUESSES, WORD_LENGTH};
use crate::core::LetterScore;
use crate::storage::Storage;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui<S: Storage>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Main content
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    // Main content area - board left, info right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Board
            Constraint::Percentage(55), // Keyboard + messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header<S: Storage>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let title = format!(
        "🟩 WORDGET - {} - Round {}",
        app.engine.today(),
        app.engine.round().round_number()
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

fn render_board<S: Storage>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let round = app.engine.round();
    let mut lines: Vec<Line> = vec![Line::from("")];

    for row in 0..MAX_GUESSES {
        let spans: Vec<Span> = if let Some(feedback) = app.engine.row_feedback(row) {
            let guess = &round.guesses()[row];
            guess
                .letters()
                .zip(feedback.scores())
                .flat_map(|(letter, score)| {
                    [tile(letter, score_style(score)), Span::raw(" ")]
                })
                .collect()
        } else if row == round.current_row() && !round.is_over() {
            let typed: Vec<char> = round.current_guess().chars().collect();
            (0..WORD_LENGTH)
                .flat_map(|i| {
                    let span = typed.get(i).map_or_else(empty_tile, |&letter| {
                        tile(letter, Style::default().fg(Color::White).bg(Color::DarkGray))
                    });
                    [span, Span::raw(" ")]
                })
                .collect()
        } else {
            (0..WORD_LENGTH)
                .flat_map(|_| [empty_tile(), Span::raw(" ")])
                .collect()
        };

        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn tile(letter: char, style: Style) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        style.add_modifier(Modifier::BOLD),
    )
}

fn empty_tile() -> Span<'static> {
    Span::styled(" · ", Style::default().fg(Color::DarkGray))
}

fn score_style(score: LetterScore) -> Style {
    match score {
        LetterScore::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        LetterScore::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterScore::Absent => Style::default().fg(Color::White).bg(Color::Black),
    }
}

fn render_info_panel<S: Storage>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),  // Keyboard
            Constraint::Length(4),  // Stats
            Constraint::Min(4),     // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_stats(f, app, chunks[1]);
    render_messages(f, &app.messages, chunks[2]);
}

fn render_keyboard<S: Storage>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let mut lines: Vec<Line> = vec![Line::from("")];

    for row in KEYBOARD_ROWS {
        let spans: Vec<Span> = row
            .chars()
            .flat_map(|letter| {
                let style = match app.engine.letter_status(letter) {
                    LetterStatus::Correct => Style::default().fg(Color::Black).bg(Color::Green),
                    LetterStatus::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
                    LetterStatus::Absent => Style::default().fg(Color::DarkGray),
                    LetterStatus::Unknown => Style::default().fg(Color::White),
                };
                [
                    Span::styled(
                        letter.to_ascii_uppercase().to_string(),
                        style.add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect();

        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::from(""));
    }

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(keyboard, area);
}

fn render_stats<S: Storage>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let stats = app.engine.stats();
    let content = vec![
        Line::from(vec![
            Span::raw("Wins: "),
            Span::styled(
                stats.win_count.to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   Streak: "),
            Span::styled(
                stats.streak_count.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Guess {} of {}",
            (app.engine.round().current_row() + 1).min(MAX_GUESSES),
            MAX_GUESSES
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Stats ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, messages: &[Message], area: Rect) {
    let items: Vec<ListItem> = messages
        .iter()
        .rev()
        .take(10)
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
        List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<S: Storage>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let help_text = if app.engine.round().is_over() {
        "n: Play Again | q: Quit"
    } else {
        "Type letters | Enter: Submit | Backspace: Erase | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
