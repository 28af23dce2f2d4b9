//! TUI application state and logic

use crate::engine::{Engine, SubmitOutcome};
use crate::storage::Storage;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, S: Storage> {
    pub engine: Engine<'a, S>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, S: Storage> App<'a, S> {
    #[must_use]
    pub fn new(engine: Engine<'a, S>) -> Self {
        let mut app = Self {
            engine,
            messages: Vec::new(),
            should_quit: false,
        };

        app.add_message(
            "Guess the 5-letter word! Type letters, Enter to submit.",
            MessageStyle::Info,
        );

        // A restored session may already be finished
        if app.engine.round().is_over() {
            app.announce_terminal();
        }

        app
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    pub fn type_letter(&mut self, letter: char) {
        self.engine.add_letter(letter);
    }

    pub fn erase_letter(&mut self) {
        self.engine.delete_letter();
    }

    pub fn submit(&mut self) {
        match self.engine.submit_guess() {
            SubmitOutcome::Ignored => {
                if !self.engine.round().is_over() {
                    self.add_message("Not enough letters!", MessageStyle::Error);
                }
            }
            SubmitOutcome::Rejected(rejection) => {
                self.add_message(&rejection.to_string(), MessageStyle::Error);
            }
            SubmitOutcome::Accepted(_) => {
                let remaining =
                    crate::engine::MAX_GUESSES - self.engine.round().current_row();
                self.add_message(
                    &format!(
                        "{remaining} {} left",
                        if remaining == 1 { "guess" } else { "guesses" }
                    ),
                    MessageStyle::Info,
                );
            }
            SubmitOutcome::Won(_) | SubmitOutcome::Lost { .. } => {
                self.announce_terminal();
            }
        }
    }

    pub fn play_again(&mut self) {
        if !self.engine.round().is_over() {
            return;
        }

        self.engine.reset_round();
        self.messages.clear();
        self.add_message(
            &format!("Round {} started. Good luck!", self.engine.round().round_number()),
            MessageStyle::Info,
        );
    }

    fn announce_terminal(&mut self) {
        if self.engine.round().is_won() {
            self.add_message("Congratulations! You won!", MessageStyle::Success);
        } else {
            let answer = self.engine.round().target().text().to_uppercase();
            self.add_message(
                &format!("Game over! The word was: {answer}"),
                MessageStyle::Error,
            );
        }
        self.add_message("Press 'n' to play again or 'q' to quit.", MessageStyle::Info);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: Storage>(app: App<'_, S>) -> Result<()> {
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: Storage>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let game_over = app.engine.round().is_over();

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') if game_over => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') if game_over => {
                    app.play_again();
                }
                KeyCode::Char(c) if !game_over => {
                    app.type_letter(c);
                }
                KeyCode::Backspace if !game_over => {
                    app.erase_letter();
                }
                KeyCode::Enter if !game_over => {
                    app.submit();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
