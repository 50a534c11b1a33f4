//! Display functions for the line-based front-end

use super::formatters::{gallows, letter_list};
use crate::core::Outcome;
use crate::game::ViewState;
use crate::history::{GameResult, HistoryEntry};
use colored::Colorize;

/// Print the gallows, masked word and guesses of the current round
pub fn print_round(view: &ViewState) {
    println!();
    for row in gallows(view.incorrect_count()) {
        println!("   {}", row.bright_black());
    }

    println!("\n   {}", view.masked_text().bright_yellow().bold());
    println!(
        "\n   Incorrect: {}   ({} attempts left)",
        letter_list(&view.incorrect).red(),
        view.remaining_attempts
    );
}

/// Print the closing banner of a finished or forfeited round
pub fn print_round_over(view: &ViewState, word: &str) {
    println!("\n{}", "─".repeat(60).cyan());
    if view.forfeited {
        println!(
            "{} The word was {}.",
            "🏳  You gave up.".yellow().bold(),
            word.bright_white().bold()
        );
    } else {
        match view.outcome {
            Outcome::Won => println!("{}", "🎉 You won!".green().bold()),
            Outcome::Lost => println!(
                "{} The word was {}.",
                "💀 You lost!".red().bold(),
                word.bright_white().bold()
            ),
            Outcome::InProgress => {}
        }
    }
    println!("{}", "─".repeat(60).cyan());
}

/// Print the game history, oldest first
pub fn print_history(entries: &[HistoryEntry]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GAME HISTORY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if entries.is_empty() {
        println!("\n   No games played yet.");
        return;
    }

    println!();
    for entry in entries {
        let result = match entry.result {
            GameResult::Won => entry.result.to_string().green(),
            GameResult::Lost => entry.result.to_string().red(),
        };
        println!("   {} - {} - {}", entry.date.bright_black(), entry.word.bold(), result);
    }

    let won = entries
        .iter()
        .filter(|e| e.result == GameResult::Won)
        .count();
    let pct = won as f64 / entries.len() as f64 * 100.0;
    println!(
        "\n   Games: {}   Won: {}   Win rate: {}",
        entries.len(),
        won,
        format!("{pct:.0}%").bright_yellow()
    );
}
