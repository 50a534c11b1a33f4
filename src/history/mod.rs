//! Persistent log of finished games
//!
//! The whole history is stored as one JSON array under [`HISTORY_KEY`]:
//!
//! ```json
//! [{"word": "GATO", "date": "19/10/2026 18:02:11", "result": "Won"}]
//! ```
//!
//! Loading fails soft. A missing key, an unreadable backend, or a document that is
//! not a valid array of entries all read as an empty history.

pub mod store;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

/// Storage key holding the serialized history
pub const HISTORY_KEY: &str = "gameHistory";

/// Result of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    #[serde(alias = "Ganhou")]
    Won,
    #[serde(alias = "Perdeu")]
    Lost,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won => f.write_str("Won"),
            Self::Lost => f.write_str("Lost"),
        }
    }
}

/// One finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub word: String,
    pub date: String,
    pub result: GameResult,
}

impl HistoryEntry {
    pub fn new(word: impl Into<String>, date: impl Into<String>, result: GameResult) -> Self {
        Self {
            word: word.into(),
            date: date.into(),
            result,
        }
    }
}

/// Load/append/clear access to the persisted history
#[derive(Debug, Clone)]
pub struct HistoryStore<S> {
    store: S,
}

impl<S: KeyValueStore> HistoryStore<S> {
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the persisted history, oldest first
    ///
    /// Never fails: absent or malformed data yields an empty list.
    #[must_use]
    pub fn load(&self) -> Vec<HistoryEntry> {
        let raw = match self.store.get(HISTORY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "history unreadable, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "history malformed, treating as empty");
                Vec::new()
            }
        }
    }

    /// Append one entry and write the whole list back
    ///
    /// Not transactional; the last writer wins.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend rejects the write.
    pub fn append(&mut self, entry: HistoryEntry) -> Result<(), StoreError> {
        let mut entries = self.load();
        entries.push(entry);
        self.write(&entries)?;
        debug!(count = entries.len(), "history appended");
        Ok(())
    }

    /// Remove the persisted history entirely
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend rejects the removal.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.store.remove(HISTORY_KEY)?;
        debug!("history cleared");
        Ok(())
    }

    /// Access the underlying backend
    #[must_use]
    pub const fn backend(&self) -> &S {
        &self.store
    }

    fn write(&mut self, entries: &[HistoryEntry]) -> Result<(), StoreError> {
        let json = serde_json::to_string(entries)?;
        self.store.set(HISTORY_KEY, &json)
    }
}
