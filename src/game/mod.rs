//! Game orchestration
//!
//! Ties the word pool, the current round and the history store together behind
//! the event methods a front-end calls.

mod controller;
mod view;

pub use controller::{DEFAULT_DATE_FORMAT, GameController};
pub use view::{Phase, ViewState};
