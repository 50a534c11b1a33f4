//! Word list loading utilities
//!
//! Provides functions to load word lists from files, use the embedded constants,
//! and append player-supplied words to a word file.

use crate::core::{Word, WordError};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Load words from a file
///
/// One word per line. Blank lines and lines starting with `#` are skipped, as are
/// entries that are not valid words.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_lines(&content);
    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Parse a word-per-line document, skipping blanks, comments and invalid entries
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!(entry = line, error = %e, "skipping invalid word list entry");
                None
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Validate player-supplied words
///
/// # Errors
///
/// Returns the first invalid entry together with the reason it was rejected.
pub fn parse_words<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Word>, (String, WordError)> {
    raw.iter()
        .map(|s| Word::new(s.as_ref()).map_err(|e| (s.as_ref().to_string(), e)))
        .collect()
}

/// Append words to a word file, creating it (and its directory) if needed
///
/// Words already present in the file are not written again. Returns the words that
/// were actually added.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, created or written.
pub fn append_to_file<P: AsRef<Path>>(path: P, words: &[Word]) -> io::Result<Vec<Word>> {
    let path = path.as_ref();

    let existing = match fs::read_to_string(path) {
        Ok(content) => words_from_lines(&content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
        Err(e) => return Err(e),
    };

    let mut added: Vec<Word> = Vec::new();
    for word in words {
        if !existing.contains(word) && !added.contains(word) {
            added.push(word.clone());
        }
    }

    if added.is_empty() {
        return Ok(added);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    for word in &added {
        writeln!(file, "{word}")?;
    }

    debug!(path = %path.display(), count = added.len(), "appended words");
    Ok(added)
}
