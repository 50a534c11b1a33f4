//! History listing command

use crate::history::{HistoryStore, KeyValueStore};
use crate::output::print_history;
use anyhow::{Context, Result};

/// Print the stored history, or clear it when `clear` is set
///
/// # Errors
///
/// Returns an error if clearing fails. Reading never fails.
pub fn run_history<S: KeyValueStore>(store: &mut HistoryStore<S>, clear: bool) -> Result<()> {
    if clear {
        store.clear().context("Failed to clear game history")?;
        println!("✓ History cleared.");
        return Ok(());
    }

    print_history(&store.load());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{GameResult, HistoryEntry, MemoryStore};

    #[test]
    fn clear_flag_removes_entries() {
        let mut store = HistoryStore::new(MemoryStore::new());
        store
            .append(HistoryEntry::new("GATO", "d", GameResult::Won))
            .unwrap();

        run_history(&mut store, false).unwrap();
        assert_eq!(store.load().len(), 1);

        run_history(&mut store, true).unwrap();
        assert!(store.load().is_empty());
    }
}
