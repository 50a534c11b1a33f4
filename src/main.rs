//! Hangman - CLI
//!
//! Hangman with TUI and line-based modes and a persistent game history.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{run_add_word, run_history, run_simple},
    config::{self, AppConfig},
    core::Word,
    game::GameController,
    history::{FileStore, HistoryStore, KeyValueStore, MemoryStore},
    logging,
    wordlists::{WORDS, WordPool, loader},
};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman word-guessing game with a persistent game history",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'user' (default list plus added words), 'default', or path to file
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Config file (default: <config dir>/hangman/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Keep history in memory only and skip the log file
    #[arg(long, global = true)]
    ephemeral: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, without TUI)
    Simple,

    /// Show the game history
    History {
        /// Delete the stored history instead of showing it
        #[arg(long)]
        clear: bool,
    },

    /// Add words to your personal word list
    AddWord {
        /// Words to add (ASCII letters only)
        #[arg(required = true)]
        words: Vec<String>,
    },
}

/// Load the word list selected by `-w` or the config
///
/// - "default": the embedded list
/// - "user": the embedded list plus words added with `add-word`
/// - "<path>": a custom word file
fn load_wordlist(mode: &str, user_words: &Path) -> Result<Vec<Word>> {
    match mode {
        "default" => Ok(loader::words_from_slice(WORDS)),
        "user" => {
            let mut words = loader::words_from_slice(WORDS);
            match loader::load_from_file(user_words) {
                Ok(extra) => words.extend(extra),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => {
                    warn!(path = %user_words.display(), error = %e, "user word list unreadable");
                }
            }
            Ok(words)
        }
        path => loader::load_from_file(path)
            .with_context(|| format!("Failed to read word list {path}")),
    }
}

fn open_store(cfg: &AppConfig, ephemeral: bool) -> Box<dyn KeyValueStore> {
    if ephemeral {
        Box::new(MemoryStore::new())
    } else {
        Box::new(FileStore::new(cfg.data_dir()))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = config::load_config(cli.config.as_deref())?;
    if cli.ephemeral {
        cfg = cfg.ephemeral();
    }

    if let Err(e) = logging::init(&cfg.logging, &cfg.log_path()) {
        eprintln!("Warning: logging disabled: {e:#}");
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let wordlist = cli.wordlist.as_deref().unwrap_or(&cfg.game.wordlist);

    match command {
        Commands::Play => run_play_command(build_controller(&cfg, wordlist, cli.ephemeral)?),
        Commands::Simple => run_simple_command(build_controller(&cfg, wordlist, cli.ephemeral)?),
        Commands::History { clear } => {
            let mut store = HistoryStore::new(open_store(&cfg, cli.ephemeral));
            run_history(&mut store, clear)
        }
        Commands::AddWord { words } => run_add_word_command(&cfg, &words),
    }
}

fn build_controller(
    cfg: &AppConfig,
    wordlist: &str,
    ephemeral: bool,
) -> Result<GameController<Box<dyn KeyValueStore>>> {
    let words = load_wordlist(wordlist, &cfg.user_words_path())?;
    let pool = WordPool::new(words).with_context(|| format!("Word list '{wordlist}' is unusable"))?;
    info!(wordlist, words = pool.len(), ephemeral, "starting game");

    let history = HistoryStore::new(open_store(cfg, ephemeral));
    Ok(GameController::new(pool, history).with_date_format(cfg.history.date_format.as_str()))
}

fn run_add_word_command(cfg: &AppConfig, words: &[String]) -> Result<()> {
    let path = cfg.user_words_path();
    let added = run_add_word(&path, words)?;

    if added.is_empty() {
        println!("All words were already in {}", path.display());
    } else {
        let list: Vec<&str> = added.iter().map(Word::text).collect();
        println!("Added {} to {}", list.join(", "), path.display());
    }
    Ok(())
}

fn run_simple_command(mut controller: GameController<Box<dyn KeyValueStore>>) -> Result<()> {
    run_simple(&mut controller)
}

fn run_play_command(controller: GameController<Box<dyn KeyValueStore>>) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(controller);
    run_tui(app)
}
