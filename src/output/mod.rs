//! Terminal output formatting
//!
//! Gallows drawing and pretty-printing shared by the front-ends.

pub mod display;
pub mod formatters;

pub use display::{print_history, print_round, print_round_over};
