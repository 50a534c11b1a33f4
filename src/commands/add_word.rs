//! Add words to the player's word file

use crate::core::Word;
use crate::wordlists::loader::{append_to_file, parse_words};
use anyhow::{Context, Result, anyhow};
use std::path::Path;
use tracing::info;

/// Validate `raw` words and append the new ones to `path`
///
/// Nothing is written if any word is invalid. Returns the words that were added;
/// words already in the file are skipped.
///
/// # Errors
///
/// Returns an error for an invalid word or if the file cannot be written.
pub fn run_add_word<S: AsRef<str>>(path: &Path, raw: &[S]) -> Result<Vec<Word>> {
    let words =
        parse_words(raw).map_err(|(entry, e)| anyhow!("Cannot add {entry:?}: {e}"))?;

    let added = append_to_file(path, &words)
        .with_context(|| format!("Failed to update word file {}", path.display()))?;

    info!(added = added.len(), path = %path.display(), "words added");
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::load_from_file;

    #[test]
    fn invalid_word_writes_nothing() {
        let dir = std::env::temp_dir().join(format!("hangman-add-{}-invalid", std::process::id()));
        let path = dir.join("words.txt");
        let _ = std::fs::remove_dir_all(&dir);

        let err = run_add_word(&path, &["gato", "p4to"]).unwrap_err();
        assert!(err.to_string().contains("p4to"));
        assert!(!path.exists());
    }

    #[test]
    fn valid_words_appended_once() {
        let dir = std::env::temp_dir().join(format!("hangman-add-{}-valid", std::process::id()));
        let path = dir.join("words.txt");
        let _ = std::fs::remove_dir_all(&dir);

        assert_eq!(run_add_word(&path, &["gato", "Pato"]).unwrap().len(), 2);
        assert_eq!(run_add_word(&path, &["GATO"]).unwrap().len(), 0);

        let texts: Vec<String> = load_from_file(&path)
            .unwrap()
            .iter()
            .map(|w| w.text().to_string())
            .collect();
        assert_eq!(texts, vec!["GATO", "PATO"]);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
