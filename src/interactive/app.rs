//! TUI application state and logic

use crate::core::Dictionary;
use crate::game::{LadderSession, MAX_ROWS, Outcome, Rarity, Status};
use crate::ladder::GeneratorConfig;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Redraw interval; keeps the timer ticking and lets error toasts expire
const TICK_RATE: Duration = Duration::from_millis(100);

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub config: GeneratorConfig,
    pub session: LadderSession<'a>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of moves
    pub moves_distribution: [usize; MAX_ROWS + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, config: GeneratorConfig, mut rng: StdRng) -> Self {
        let session = LadderSession::generate(dictionary, &mut rng, &config);

        Self {
            dictionary,
            config,
            session,
            messages: vec![
                Message {
                    text: "Change one letter at a time to reach the target word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Tab for a hint, Esc to clear the ladder.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            rng,
        }
    }

    pub fn new_game(&mut self) {
        self.session = LadderSession::generate(self.dictionary, &mut self.rng, &self.config);
        self.messages.clear();
        self.add_message("New puzzle! Good luck.", MessageStyle::Info);
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            }
            return;
        }

        if self.session.status() != Status::Playing {
            match key.code {
                KeyCode::Enter => self.new_game(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char(c) => self.session.push_letter(c),
            KeyCode::Backspace => self.session.pop_letter(),
            KeyCode::Enter => self.submit(),
            KeyCode::Tab => self.hint(),
            KeyCode::Esc => {
                self.session.clear();
                self.add_message("Ladder cleared.", MessageStyle::Info);
            }
            _ => {}
        }
    }

    fn submit(&mut self) {
        match self.session.submit_row() {
            Ok(Outcome::Advanced { .. }) => {}
            Ok(Outcome::Won) => {
                let moves = self.session.moves();
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                if let Some(slot) = self.stats.moves_distribution.get_mut(moves) {
                    *slot += 1;
                }

                let optimal = self.session.optimal_steps();
                let celebration = if moves <= optimal {
                    "🌟 PERFECT LADDER! 🌟"
                } else {
                    "🎉 SPLENDID! 🎉"
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message(
                    &format!("{moves} moves (optimal {optimal}). Enter for next puzzle."),
                    MessageStyle::Info,
                );
            }
            Ok(Outcome::Lost) => {
                self.stats.total_games += 1;
                let target = &self.session.puzzle().target;
                let rarity = Rarity::of(target);
                let reveal = format!(
                    "Out of hearts! The word was {} ({rarity} {})",
                    target.text().to_uppercase(),
                    rarity.emoji()
                );
                self.add_message(&reveal, MessageStyle::Error);
                self.add_message("Enter for next puzzle.", MessageStyle::Info);
            }
            // The board shows the toast
            Err(e) => debug!("Submission rejected: {e}"),
        }
    }

    fn hint(&mut self) {
        if let Ok(word) = self.session.hint() {
            self.add_message(
                &format!("💡 Try {}", word.text().to_uppercase()),
                MessageStyle::Info,
            );
        }
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
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
