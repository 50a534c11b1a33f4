//! Command implementations

pub mod add_word;
pub mod history;
pub mod simple;

pub use add_word::run_add_word;
pub use history::run_history;
pub use simple::{LineCommand, parse_line, run_simple};
