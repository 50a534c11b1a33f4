//! Core domain types for Hangman
//!
//! This module contains the round-level domain types with no I/O.
//! Everything here is pure and deterministic given its inputs.

mod guess;
mod word;

pub use guess::{GuessState, MAX_INCORRECT, Outcome, normalize_letter};
pub use word::{Word, WordError};
