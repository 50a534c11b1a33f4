//! Round orchestration
//!
//! `GameController` owns the word pool, the current round and the history store.
//! Every input event is a method call that runs to completion and returns the new
//! `ViewState`.

use super::view::{Phase, ViewState};
use crate::config::is_valid_date_format;
use crate::core::{GuessState, Outcome, Word, normalize_letter};
use crate::history::{GameResult, HistoryEntry, HistoryStore, KeyValueStore};
use crate::wordlists::WordPool;
use tracing::{debug, info, warn};

/// Timestamp pattern used for history entries unless configured otherwise
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

type Clock = Box<dyn Fn() -> String>;

fn local_clock(format: String) -> Clock {
    Box::new(move || chrono::Local::now().format(&format).to_string())
}

/// Hangman state machine: `Playing` until the round is won, lost or forfeited
pub struct GameController<S> {
    pool: WordPool,
    round: GuessState,
    phase: Phase,
    // Set once the finished round has been written to history
    recorded: bool,
    forfeited: bool,
    next_word: Option<Word>,
    history: HistoryStore<S>,
    entries: Vec<HistoryEntry>,
    clock: Clock,
}

impl<S: KeyValueStore> GameController<S> {
    /// Load the history and start the first round
    #[must_use]
    pub fn new(pool: WordPool, history: HistoryStore<S>) -> Self {
        let entries = history.load();
        let round = GuessState::new(pool.pick_random());
        info!(
            pool = pool.len(),
            history = entries.len(),
            "game controller ready"
        );

        Self {
            pool,
            round,
            phase: Phase::Playing,
            recorded: false,
            forfeited: false,
            next_word: None,
            history,
            entries,
            clock: local_clock(DEFAULT_DATE_FORMAT.to_string()),
        }
    }

    /// Format history timestamps with a chrono `strftime` pattern
    ///
    /// An invalid pattern is logged and replaced by [`DEFAULT_DATE_FORMAT`].
    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        let mut format = format.into();
        if !is_valid_date_format(&format) {
            warn!(%format, "invalid date format, using default");
            format = DEFAULT_DATE_FORMAT.to_string();
        }
        self.clock = local_clock(format);
        self
    }

    /// Replace the timestamp source
    #[must_use]
    pub fn with_clock(mut self, clock: impl Fn() -> String + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Begin a new round with the pre-selected word, or a random one
    pub fn start_new_round(&mut self) -> ViewState {
        let word = self
            .next_word
            .take()
            .unwrap_or_else(|| self.pool.pick_random());
        debug!(letters = word.len(), "round started");

        self.round = GuessState::new(word);
        self.phase = Phase::Playing;
        self.recorded = false;
        self.forfeited = false;
        self.view()
    }

    /// Handle typed or composed text
    ///
    /// Only a single ASCII letter while playing has any effect; everything else is
    /// ignored.
    pub fn handle_letter_input(&mut self, raw: &str) -> ViewState {
        if let Some(letter) = normalize_letter(raw) {
            self.guess(letter);
        }
        self.view()
    }

    /// Handle a single key press
    pub fn handle_key(&mut self, key: char) -> ViewState {
        if key.is_ascii_alphabetic() {
            self.guess(key.to_ascii_uppercase());
        }
        self.view()
    }

    /// Forfeit the current round
    ///
    /// Ends the round without recording it and pre-selects the next word. Has no
    /// effect once the round is already over.
    pub fn give_up(&mut self) -> ViewState {
        if self.phase == Phase::Playing {
            info!(guesses = self.round.guessed().len(), "round forfeited");
            self.phase = Phase::RoundOver;
            self.forfeited = true;
            self.next_word = Some(self.pool.pick_random());
        }
        self.view()
    }

    /// Erase the persisted history and the in-memory copy
    pub fn clear_history(&mut self) -> ViewState {
        if let Err(e) = self.history.clear() {
            warn!(error = %e, "failed to clear persisted history");
        }
        self.entries.clear();
        info!("history cleared");
        self.view()
    }

    /// Current observable state; the word is revealed once the round is lost
    #[must_use]
    pub fn view(&self) -> ViewState {
        let outcome = self.round.outcome();
        ViewState {
            masked: self.round.masked(outcome == Outcome::Lost),
            incorrect: self.round.incorrect_letters(),
            guessed: self.round.guessed().to_vec(),
            outcome,
            phase: self.phase,
            remaining_attempts: self.round.remaining_attempts(),
            forfeited: self.forfeited,
            history: self.entries.clone(),
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Secret word of the current round
    #[must_use]
    pub const fn word(&self) -> &Word {
        self.round.word()
    }

    /// Word prepared by `give_up` for the next round, if any
    #[must_use]
    pub const fn next_word(&self) -> Option<&Word> {
        self.next_word.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub const fn pool(&self) -> &WordPool {
        &self.pool
    }

    fn guess(&mut self, letter: char) {
        if self.phase != Phase::Playing {
            return;
        }
        if self.round.submit_letter(letter) {
            debug!(
                letter = %letter,
                hit = self.round.word().has_letter(letter),
                "letter guessed"
            );
            self.settle();
        }
    }

    /// Close the round once the outcome turns terminal, recording it exactly once
    fn settle(&mut self) {
        let result = match self.round.outcome() {
            Outcome::InProgress => return,
            Outcome::Won => GameResult::Won,
            Outcome::Lost => GameResult::Lost,
        };

        self.phase = Phase::RoundOver;
        if self.recorded {
            return;
        }
        self.recorded = true;

        let entry = HistoryEntry::new(self.round.word().text(), (self.clock)(), result);
        info!(%result, misses = self.round.incorrect_count(), "round finished");

        if let Err(e) = self.history.append(entry.clone()) {
            warn!(error = %e, "failed to persist history entry");
        }
        self.entries.push(entry);
    }
}
