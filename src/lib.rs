//! Hangman
//!
//! A Hangman word-guessing game: guess the hidden word one letter at a time before
//! ten incorrect guesses complete the gallows. Finished games are kept in a local
//! history that survives restarts.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::game::{GameController, Phase};
//! use hangman::history::{HistoryStore, MemoryStore};
//! use hangman::wordlists::{WordPool, loader::words_from_slice};
//!
//! let pool = WordPool::new(words_from_slice(&["gato"])).unwrap();
//! let mut game = GameController::new(pool, HistoryStore::new(MemoryStore::new()));
//!
//! for letter in ["g", "a", "t", "o"] {
//!     game.handle_letter_input(letter);
//! }
//!
//! let view = game.view();
//! assert_eq!(view.phase, Phase::RoundOver);
//! assert_eq!(view.history.len(), 1);
//! ```

// Core domain types
pub mod core;

// Word lists and the word pool
pub mod wordlists;

// Persistent game history
pub mod history;

// Round orchestration
pub mod game;

// Configuration file
pub mod config;

// Diagnostic log file
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
