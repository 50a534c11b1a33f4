//! Word lists for Hangman
//!
//! Provides the embedded default list compiled into the binary, file loading for
//! custom and player-added lists, and the `WordPool` rounds draw from.

mod embedded;
pub mod loader;
pub mod pool;

pub use embedded::{WORDS, WORDS_COUNT};
pub use pool::{PoolError, WordPool};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn default_list_not_empty() {
        assert!(WORDS_COUNT > 0);
    }

    #[test]
    fn words_are_valid() {
        // All embedded words should be uppercase ASCII letters
        for &word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn default_pool_builds() {
        let pool = WordPool::new(loader::words_from_slice(WORDS)).unwrap();
        assert_eq!(pool.len(), WORDS_COUNT);
    }
}
