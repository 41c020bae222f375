//! TUI application state and logic

use crate::engine::TowerEngine;
use crate::game::{GameState, GameSummary};
use crate::hints::HintKind;
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

/// Longest word the input box accepts
const MAX_INPUT: usize = 24;

/// Application state
pub struct App<'a> {
    pub engine: &'a TowerEngine,
    pub session_id: String,
    pub state: GameState,
    /// Legal next words for the current tower
    pub next_count: usize,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub hint_style: HintKind,
    pub last_hint: Option<String>,
    pub summary: Option<GameSummary>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Building,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub towers_finished: usize,
    pub best_height: usize,
    pub best_score: u32,
}

impl<'a> App<'a> {
    /// Start a session on `engine`
    ///
    /// # Errors
    ///
    /// Returns an error if `starting_word` is not a well-formed word.
    pub fn new(engine: &'a TowerEngine, starting_word: Option<&str>) -> Result<Self> {
        let session_id = engine.create_session(starting_word)?;
        let state = engine.get_state(&session_id)?;
        let next_count = engine.next_word_count(&session_id)?;

        let mut app = Self {
            engine,
            session_id,
            state,
            next_count,
            input_buffer: String::new(),
            messages: Vec::new(),
            hint_style: HintKind::default(),
            last_hint: None,
            summary: None,
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Building,
        };
        app.add_message(
            "Welcome! Build a tower: each word uses every letter below plus one.",
            MessageStyle::Info,
        );
        app.announce_start();
        Ok(app)
    }

    fn announce_start(&mut self) {
        let start = self.state.starting_word.text().to_uppercase();
        self.add_message(&format!("Starting word: {start}"), MessageStyle::Info);
    }

    fn refresh(&mut self) -> Result<()> {
        self.state = self.engine.get_state(&self.session_id)?;
        self.next_count = self.engine.next_word_count(&self.session_id)?;
        Ok(())
    }

    /// Try the word in the input buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the session has been lost.
    pub fn submit_word(&mut self) -> Result<()> {
        let word = self.input_buffer.trim().to_lowercase();
        if word.is_empty() {
            return Ok(());
        }

        let response = self.engine.add_word(&self.session_id, &word)?;
        if response.success {
            self.input_buffer.clear();
            self.last_hint = None;
            self.add_message(&response.message, MessageStyle::Success);
            self.refresh()?;
            if self.next_count == 0 {
                self.add_message(
                    &format!(
                        "You've reached the top! Nothing can be built on '{}'. Ctrl-E to finish.",
                        word.to_uppercase()
                    ),
                    MessageStyle::Success,
                );
            }
        } else {
            self.add_message(&response.message, MessageStyle::Error);
        }
        Ok(())
    }

    /// Ask for a hint in the selected style
    ///
    /// # Errors
    ///
    /// Returns an error if the session has been lost.
    pub fn request_hint(&mut self) -> Result<()> {
        let response = self.engine.hint(&self.session_id, self.hint_style.name())?;
        let text = response
            .hint_text
            .or(response.message)
            .unwrap_or_default();

        if response.no_moves_available {
            self.last_hint = None;
            self.add_message(&text, MessageStyle::Success);
        } else {
            self.last_hint = Some(text.clone());
            self.add_message(&text, MessageStyle::Info);
        }
        self.refresh()
    }

    /// Move to the next hint style
    pub fn cycle_hint_style(&mut self) {
        let all = HintKind::all();
        let index = all
            .iter()
            .position(|k| k.name() == self.hint_style.name())
            .map_or(0, |i| (i + 1) % all.len());
        self.hint_style = all[index];
        self.add_message(
            &format!("Hint style: {}", self.hint_style.name()),
            MessageStyle::Info,
        );
    }

    /// Take the top word off the tower
    ///
    /// # Errors
    ///
    /// Returns an error if the session has been lost.
    pub fn undo(&mut self) -> Result<()> {
        let response = self.engine.undo(&self.session_id)?;
        let style = if response.success {
            MessageStyle::Info
        } else {
            MessageStyle::Error
        };
        self.add_message(&response.message, style);
        self.refresh()
    }

    /// Rebuild from the same starting word
    ///
    /// # Errors
    ///
    /// Returns an error if the session has been lost.
    pub fn reset(&mut self) -> Result<()> {
        self.engine.reset(&self.session_id)?;
        self.summary = None;
        self.last_hint = None;
        self.input_buffer.clear();
        self.input_mode = InputMode::Building;
        self.add_message("Tower reset", MessageStyle::Info);
        self.refresh()
    }

    /// Replace the session with a fresh one
    ///
    /// # Errors
    ///
    /// Returns an error if no starting word can be drawn.
    pub fn new_game(&mut self) -> Result<()> {
        self.engine.close_session(&self.session_id);
        self.session_id = self.engine.create_session(None)?;
        self.summary = None;
        self.last_hint = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Building;
        self.refresh()?;
        self.add_message("New game started!", MessageStyle::Info);
        self.announce_start();
        Ok(())
    }

    /// Finish the tower and show its score
    ///
    /// # Errors
    ///
    /// Returns an error if the session has been lost.
    pub fn end_game(&mut self) -> Result<()> {
        match self.engine.end(&self.session_id) {
            Ok(summary) => {
                self.stats.towers_finished += 1;
                self.stats.best_height = self.stats.best_height.max(summary.height);
                self.stats.best_score = self.stats.best_score.max(summary.score.total_score);
                self.add_message(
                    &format!(
                        "Tower of {} complete: {} points",
                        summary.height, summary.score.total_score
                    ),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for new game, 'r' to replay or 'q' to quit.", MessageStyle::Info);
                self.summary = Some(summary);
                self.input_mode = InputMode::GameOver;
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
        self.refresh()
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }

    /// Close the session when leaving the TUI
    pub fn close(&self) {
        self.engine.close_session(&self.session_id);
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Result<()> {
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);
        match self.input_mode {
            InputMode::GameOver => match code {
                KeyCode::Char('c') if ctrl => self.should_quit = true,
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game()?,
                KeyCode::Char('r') => self.reset()?,
                _ => {}
            },
            InputMode::Building => match code {
                KeyCode::Char('c') if ctrl => self.should_quit = true,
                KeyCode::Char('z' | 'u') if ctrl => self.undo()?,
                KeyCode::Char('r') if ctrl => self.reset()?,
                KeyCode::Char('n') if ctrl => self.new_game()?,
                KeyCode::Char('e') if ctrl => self.end_game()?,
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.request_hint()?,
                KeyCode::BackTab => self.cycle_hint_style(),
                KeyCode::Char(c) if c.is_alphabetic() && !ctrl => {
                    if self.input_buffer.chars().count() < MAX_INPUT {
                        self.input_buffer.extend(c.to_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_word()?,
                _ => {}
            },
        }
        Ok(())
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
            app.handle_key(key.code, key.modifiers)?;
        }

        if app.should_quit {
            break;
        }
    }

    app.close();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::lexicon::Lexicon;
    use std::sync::Arc;

    fn engine() -> TowerEngine {
        let lexicon = Lexicon::from_words(["art", "tart", "start", "cat"]).unwrap();
        TowerEngine::new(
            Arc::new(lexicon),
            EngineConfig {
                seed: Some(7),
                ..EngineConfig::default()
            },
        )
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE).unwrap();
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    }

    #[test]
    fn typing_builds_the_tower() {
        let engine = engine();
        let mut app = App::new(&engine, Some("art")).unwrap();
        assert_eq!(app.next_count, 1);

        type_word(&mut app, "TART");
        assert_eq!(app.state.height, 2);
        assert!(app.input_buffer.is_empty());

        type_word(&mut app, "start");
        assert_eq!(app.state.height, 3);
        assert_eq!(app.next_count, 0);
    }

    #[test]
    fn rejected_word_stays_in_buffer() {
        let engine = engine();
        let mut app = App::new(&engine, Some("art")).unwrap();

        type_word(&mut app, "cat");
        assert_eq!(app.state.height, 1);
        assert_eq!(app.input_buffer, "cat");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn undo_and_end_through_keys() {
        let engine = engine();
        let mut app = App::new(&engine, Some("art")).unwrap();
        type_word(&mut app, "tart");

        app.handle_key(KeyCode::Char('z'), KeyModifiers::CONTROL).unwrap();
        assert_eq!(app.state.height, 1);

        type_word(&mut app, "tart");
        app.handle_key(KeyCode::Char('e'), KeyModifiers::CONTROL).unwrap();
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.towers_finished, 1);
        assert_eq!(app.stats.best_height, 2);
        assert!(!app.state.is_active);

        app.handle_key(KeyCode::Char('r'), KeyModifiers::NONE).unwrap();
        assert_eq!(app.input_mode, InputMode::Building);
        assert!(app.state.is_active);
        assert_eq!(app.state.height, 1);
    }

    #[test]
    fn hints_are_counted_and_styles_cycle() {
        let engine = engine();
        let mut app = App::new(&engine, Some("art")).unwrap();

        app.handle_key(KeyCode::Tab, KeyModifiers::NONE).unwrap();
        assert!(app.last_hint.is_some());
        assert_eq!(app.state.hints_used, 1);

        let before = app.hint_style.name();
        app.handle_key(KeyCode::BackTab, KeyModifiers::SHIFT).unwrap();
        assert_ne!(app.hint_style.name(), before);
    }

    #[test]
    fn quit_keys() {
        let engine = engine();
        let mut app = App::new(&engine, Some("art")).unwrap();
        app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE).unwrap();
        assert!(!app.should_quit);
        assert_eq!(app.input_buffer, "q");

        app.handle_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();
        assert!(app.should_quit);
    }
}
