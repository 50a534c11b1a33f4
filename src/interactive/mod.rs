//! Interactive TUI mode
//!
//! Full-screen Hangman front-end built on ratatui.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
