//! Guess tracking and round outcome
//!
//! `GuessState` owns the secret word of a round and the ordered set of letters the
//! player has submitted. The outcome is never stored: it is recomputed from the word
//! and the guessed letters every time it is asked for.

use super::Word;
use std::fmt;

/// Number of incorrect letters that hangs the player
pub const MAX_INCORRECT: usize = 10;

/// Classification of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    /// Won and Lost are terminal: no further guesses are accepted
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InProgress => "In progress",
            Self::Won => "Won",
            Self::Lost => "Lost",
        };
        f.write_str(label)
    }
}

/// Normalize raw player input to a guessable letter
///
/// Accepts exactly one ASCII letter in either case. Anything else (empty input,
/// several characters, digits, punctuation, accented letters) yields `None`.
///
/// # Examples
/// ```
/// use hangman::core::normalize_letter;
///
/// assert_eq!(normalize_letter("g"), Some('G'));
/// assert_eq!(normalize_letter("G"), Some('G'));
/// assert_eq!(normalize_letter("go"), None);
/// assert_eq!(normalize_letter("7"), None);
/// ```
#[must_use]
pub fn normalize_letter(raw: &str) -> Option<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}

/// Letters guessed against one secret word
#[derive(Debug, Clone)]
pub struct GuessState {
    word: Word,
    guessed: Vec<char>,
}

impl GuessState {
    /// Start tracking a fresh round for `word`
    #[must_use]
    pub const fn new(word: Word) -> Self {
        Self {
            word,
            guessed: Vec::new(),
        }
    }

    /// The secret word of this round
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Every guessed letter, in guess order
    #[inline]
    #[must_use]
    pub fn guessed(&self) -> &[char] {
        &self.guessed
    }

    /// Check whether a letter has already been guessed (case-insensitive)
    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter.to_ascii_uppercase())
    }

    /// Submit a letter guess
    ///
    /// Returns `true` if the letter was recorded. The guess is ignored when the round
    /// is already over, the letter was guessed before, or it is not an ASCII letter.
    pub fn submit_letter(&mut self, letter: char) -> bool {
        if self.outcome().is_terminal() || !letter.is_ascii_alphabetic() {
            return false;
        }

        let letter = letter.to_ascii_uppercase();
        if self.guessed.contains(&letter) {
            return false;
        }

        self.guessed.push(letter);
        true
    }

    /// Guessed letters that are not in the word, in guess order
    #[must_use]
    pub fn incorrect_letters(&self) -> Vec<char> {
        self.guessed
            .iter()
            .copied()
            .filter(|&c| !self.word.has_letter(c))
            .collect()
    }

    /// Number of incorrect guesses so far
    #[must_use]
    pub fn incorrect_count(&self) -> usize {
        self.guessed
            .iter()
            .filter(|&&c| !self.word.has_letter(c))
            .count()
    }

    /// How many more incorrect guesses the player can afford
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_INCORRECT.saturating_sub(self.incorrect_count())
    }

    /// True iff every letter of the word has been guessed
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.word.chars().all(|c| self.guessed.contains(&c))
    }

    /// True iff the incorrect guesses reached `MAX_INCORRECT`
    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.incorrect_count() >= MAX_INCORRECT
    }

    /// Current outcome; a win takes precedence over a loss
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.is_won() {
            Outcome::Won
        } else if self.is_lost() {
            Outcome::Lost
        } else {
            Outcome::InProgress
        }
    }

    /// Per-letter view of the word
    ///
    /// A position is `Some` when its letter was guessed or `reveal` is set.
    #[must_use]
    pub fn masked(&self, reveal: bool) -> Vec<Option<char>> {
        self.word
            .chars()
            .map(|c| (reveal || self.guessed.contains(&c)).then_some(c))
            .collect()
    }
}
