//! Candidate pool for secret words

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use thiserror::Error;
use tracing::debug;

/// Error type for pool construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("Word pool is empty; at least one word is required to start a game")]
    Empty,
}

/// The set of words a round's secret word is drawn from
///
/// Read-only once built. Never empty, so selection cannot fail.
#[derive(Debug, Clone)]
pub struct WordPool {
    words: Vec<Word>,
}

impl WordPool {
    /// Build a pool from candidate words, collapsing duplicates
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Empty` if no words are given.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, PoolError> {
        let mut unique: Vec<Word> = Vec::new();
        for word in words {
            if !unique.contains(&word) {
                unique.push(word);
            }
        }

        if unique.is_empty() {
            return Err(PoolError::Empty);
        }

        debug!(count = unique.len(), "word pool ready");
        Ok(Self { words: unique })
    }

    /// Pick a uniformly random word
    #[must_use]
    pub fn pick_random(&self) -> Word {
        self.pick_with(&mut rand::rng())
    }

    /// Pick a uniformly random word using the given RNG
    #[must_use]
    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        self.words
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| unreachable!("word pool is never empty"))
    }

    /// Number of distinct words in the pool
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the pool is empty; never true for a constructed pool
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}
