//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: each line is one letter or a command.

use crate::game::{GameController, ViewState};
use crate::history::KeyValueStore;
use crate::output::{print_history, print_round, print_round_over};
use anyhow::{Context, Result};
use std::io::{self, Write};

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Guess(String),
    NewRound,
    GiveUp,
    History,
    ClearHistory,
    Help,
    Quit,
}

/// Interpret one input line
///
/// Commands are whole words, so single letters such as `n` or `q` are always guesses.
#[must_use]
pub fn parse_line(input: &str) -> LineCommand {
    let trimmed = input.trim();
    match trimmed.to_lowercase().as_str() {
        "quit" | "exit" => LineCommand::Quit,
        "new" | "next" => LineCommand::NewRound,
        "giveup" | "give up" | "forfeit" => LineCommand::GiveUp,
        "history" => LineCommand::History,
        "clear" => LineCommand::ClearHistory,
        "help" => LineCommand::Help,
        _ => LineCommand::Guess(trimmed.to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: KeyValueStore>(controller: &mut GameController<S>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Hangman - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let mut view = controller.view();
    print_round(&view);

    loop {
        let Some(input) = get_user_input("Letter")? else {
            // EOF
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match parse_line(&input) {
            LineCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineCommand::Help => print_help(),
            LineCommand::History => print_history(&view.history),
            LineCommand::ClearHistory => {
                view = controller.clear_history();
                println!("✓ History cleared.");
            }
            LineCommand::NewRound => {
                view = controller.start_new_round();
                println!("\n🔄 New round started!");
                print_round(&view);
            }
            LineCommand::GiveUp => {
                if view.is_over() {
                    println!("The round is already over. Type 'new' to play again.");
                } else {
                    view = controller.give_up();
                    print_round_over(&view, controller.word().text());
                    println!("Type 'new' to play again.");
                }
            }
            LineCommand::Guess(raw) => {
                view = apply_guess(controller, &view, &raw);
            }
        }
    }
}

fn apply_guess<S: KeyValueStore>(
    controller: &mut GameController<S>,
    before: &ViewState,
    raw: &str,
) -> ViewState {
    if before.is_over() {
        println!("The round is over. Type 'new' to play again.");
        return before.clone();
    }

    let after = controller.handle_letter_input(raw);
    if after.guessed.len() == before.guessed.len() {
        if raw.chars().count() == 1 && raw.chars().all(|c| c.is_ascii_alphabetic()) {
            println!("You already tried {}.", raw.to_uppercase());
        } else {
            println!("Type a single letter (A-Z) or 'help'.");
        }
        return after;
    }

    print_round(&after);
    if after.is_over() {
        print_round_over(&after, controller.word().text());
        println!("Type 'new' to play again or 'quit' to exit.");
    }
    after
}

fn print_help() {
    println!("Guess the word one letter at a time. Ten misses and you hang!");
    println!("Commands: 'new' next round, 'give up', 'history', 'clear' history, 'quit'\n");
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
