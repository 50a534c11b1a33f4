//! Observable state handed to the presentation layer

use crate::core::Outcome;
use crate::history::HistoryEntry;

/// Controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    RoundOver,
}

/// Snapshot of everything a front-end needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// One slot per letter of the word; `None` while still hidden
    pub masked: Vec<Option<char>>,
    /// Guessed letters not in the word, in guess order
    pub incorrect: Vec<char>,
    /// Every guessed letter, in guess order
    pub guessed: Vec<char>,
    pub outcome: Outcome,
    pub phase: Phase,
    pub remaining_attempts: usize,
    /// The round ended because the player gave up
    pub forfeited: bool,
    pub history: Vec<HistoryEntry>,
}

impl ViewState {
    /// Render the masked word as `G _ T _`
    #[must_use]
    pub fn masked_text(&self) -> String {
        self.masked
            .iter()
            .map(|slot| slot.unwrap_or('_').to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn incorrect_count(&self) -> usize {
        self.incorrect.len()
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.phase, Phase::RoundOver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masked_text_joins_slots() {
        let view = ViewState {
            masked: vec![Some('G'), None, Some('T'), None],
            incorrect: vec!['X'],
            guessed: vec!['G', 'T', 'X'],
            outcome: Outcome::InProgress,
            phase: Phase::Playing,
            remaining_attempts: 9,
            forfeited: false,
            history: Vec::new(),
        };
        assert_eq!(view.masked_text(), "G _ T _");
        assert_eq!(view.incorrect_count(), 1);
        assert!(!view.is_over());
    }
}
