//! TUI application state and logic

use crate::dictionary::Dictionary;
use crate::game::WordValidator;
use crate::wordlists::loader::random_root;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: WordValidator<Dictionary>,
    pub root_pool: Vec<String>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: ThreadRng,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub words_accepted: usize,
    pub total_score: u32,
    pub best_round_score: u32,
}

impl App {
    #[must_use]
    pub fn new(root_pool: Vec<String>, dictionary: Dictionary) -> Self {
        let mut rng = rand::rng();
        let root = random_root(&root_pool, &mut rng);
        let session = WordValidator::new(root, dictionary);

        Self {
            session,
            root_pool,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Spell words from the letters of the root word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "At least 3 letters, no repeats, real words only.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics {
                rounds_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
            rng,
        }
    }

    /// Submit whatever is in the input buffer
    pub fn submit_input(&mut self) {
        let input = self.input_buffer.clone();
        if input.trim().is_empty() {
            return;
        }

        match self.session.submit(&input) {
            Ok(accepted) => {
                self.stats.words_accepted += 1;
                self.stats.total_score += accepted.score_delta;
                self.stats.best_round_score = self.stats.best_round_score.max(self.session.score());

                self.add_message(
                    &format!(
                        "{} accepted, +{} points!",
                        accepted.word.to_uppercase(),
                        accepted.score_delta
                    ),
                    MessageStyle::Success,
                );
            }
            Err(rejection) => {
                let message = rejection.message(self.session.root_word().text());
                self.add_message(
                    &format!("{} {message}", rejection.title()),
                    MessageStyle::Error,
                );
            }
        }

        self.input_buffer.clear();
    }

    /// Start a new round with a fresh random root word
    pub fn new_round(&mut self) {
        let root = random_root(&self.root_pool, &mut self.rng);
        self.session.start_round(root);
        self.stats.rounds_played += 1;
        self.input_buffer.clear();

        let root_text = self.session.root_word().text().to_uppercase();
        self.add_message(
            &format!("New round! Root word: {root_text}"),
            MessageStyle::Info,
        );
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
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    // Ctrl-N so plain 'n' stays usable in words
                    app.new_round();
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char(c) => {
                    app.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => {
                    app.submit_input();
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
