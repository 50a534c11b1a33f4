//! TUI application state and logic

use crate::core::Outcome;
use crate::game::{GameController, ViewState};
use crate::history::KeyValueStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<S> {
    pub controller: GameController<S>,
    pub view: ViewState,
    pub messages: Vec<Message>,
    pub should_quit: bool,
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

impl<S: KeyValueStore> App<S> {
    #[must_use]
    pub fn new(controller: GameController<S>) -> Self {
        let view = controller.view();
        Self {
            controller,
            view,
            messages: vec![
                Message {
                    text: "Welcome! Type letters to guess the hidden word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Ten wrong letters and you hang.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    /// Dispatch one key press
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::F(10) => {
                self.should_quit = true;
            }
            KeyCode::F(2) => self.new_round(),
            KeyCode::Enter if self.view.is_over() => self.new_round(),
            KeyCode::Esc => self.give_up(),
            KeyCode::F(5) => self.clear_history(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.guess(&c.to_string());
            }
            _ => {}
        }
    }

    /// Handle composed or pasted text
    pub fn handle_text(&mut self, text: &str) {
        self.guess(text.trim());
    }

    fn guess(&mut self, raw: &str) {
        if self.view.is_over() {
            return;
        }

        let before = self.view.guessed.len();
        let after = self.controller.handle_letter_input(raw);
        let accepted = after.guessed.len() > before;
        self.view = after;

        if !accepted {
            if let Some(letter) = crate::core::normalize_letter(raw) {
                self.add_message(&format!("Already tried {letter}"), MessageStyle::Error);
            }
            return;
        }

        match self.view.outcome {
            Outcome::Won => {
                self.add_message("🎉 You won! Press Enter for a new round.", MessageStyle::Success);
            }
            Outcome::Lost => {
                let word = self.controller.word().text().to_string();
                self.add_message(&format!("💀 You lost! The word was {word}."), MessageStyle::Error);
                self.add_message("Press Enter for a new round.", MessageStyle::Info);
            }
            Outcome::InProgress => {}
        }
    }

    pub fn new_round(&mut self) {
        self.view = self.controller.start_new_round();
        self.messages.clear();
        self.add_message("New round started!", MessageStyle::Info);
    }

    pub fn give_up(&mut self) {
        if self.view.is_over() {
            return;
        }
        let word = self.controller.word().text().to_string();
        self.view = self.controller.give_up();
        self.add_message(
            &format!("🏳 You gave up. The word was {word}."),
            MessageStyle::Error,
        );
        self.add_message("Press Enter for a new round.", MessageStyle::Info);
    }

    pub fn clear_history(&mut self) {
        self.view = self.controller.clear_history();
        self.add_message("History cleared.", MessageStyle::Info);
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
pub fn run_tui<S: KeyValueStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "tui loop failed");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: KeyValueStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key_event(key),
            Event::Paste(text) => app.handle_text(&text),
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Phase;
    use crate::history::{HistoryStore, MemoryStore};
    use crate::wordlists::WordPool;
    use crate::wordlists::loader::words_from_slice;

    fn app() -> App<MemoryStore> {
        let pool = WordPool::new(words_from_slice(&["gato"])).unwrap();
        App::new(GameController::new(pool, HistoryStore::new(MemoryStore::new())))
    }

    fn press(app: &mut App<MemoryStore>, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<MemoryStore>, letters: &str) {
        for c in letters.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn letters_are_guessed() {
        let mut app = app();
        type_word(&mut app, "ga");
        assert_eq!(app.view.guessed, vec!['G', 'A']);
        assert_eq!(app.view.masked_text(), "G A _ _");
    }

    #[test]
    fn repeated_letter_reports_error() {
        let mut app = app();
        type_word(&mut app, "xx");
        assert_eq!(app.view.guessed, vec!['X']);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn digits_and_punctuation_ignored() {
        let mut app = app();
        type_word(&mut app, "1!? ");
        assert!(app.view.guessed.is_empty());
    }

    #[test]
    fn win_then_enter_starts_new_round() {
        let mut app = app();
        type_word(&mut app, "gato");
        assert_eq!(app.view.outcome, Outcome::Won);
        assert_eq!(app.view.history.len(), 1);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view.phase, Phase::Playing);
        assert!(app.view.guessed.is_empty());
        assert_eq!(app.view.history.len(), 1);
    }

    #[test]
    fn enter_while_playing_does_nothing() {
        let mut app = app();
        type_word(&mut app, "g");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view.guessed, vec!['G']);
    }

    #[test]
    fn escape_gives_up_without_history() {
        let mut app = app();
        type_word(&mut app, "z");
        press(&mut app, KeyCode::Esc);
        assert!(app.view.forfeited);
        assert_eq!(app.view.phase, Phase::RoundOver);
        assert!(app.view.history.is_empty());

        // Letters after forfeiting are ignored
        type_word(&mut app, "g");
        assert_eq!(app.view.guessed, vec!['Z']);
    }

    #[test]
    fn f5_clears_history() {
        let mut app = app();
        type_word(&mut app, "gato");
        press(&mut app, KeyCode::F(5));
        assert!(app.view.history.is_empty());
    }

    #[test]
    fn pasted_single_letter_is_guessed() {
        let mut app = app();
        app.handle_text("t");
        app.handle_text("oops");
        assert_eq!(app.view.guessed, vec!['T']);
    }

    #[test]
    fn quit_keys() {
        let mut ctrl_c = app();
        ctrl_c.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(ctrl_c.should_quit);
        assert!(ctrl_c.view.guessed.is_empty());

        let mut f10 = app();
        press(&mut f10, KeyCode::F(10));
        assert!(f10.should_quit);
    }

    #[test]
    fn messages_capped_at_five() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "m5");
    }
}
