//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the game works without a config file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::game::DEFAULT_DATE_FORMAT;

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where secret words come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// `default` (embedded list), `user` (embedded plus added words) or a file path
    #[serde(default = "default_wordlist")]
    pub wordlist: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            wordlist: default_wordlist(),
        }
    }
}

/// History persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Directory holding `gameHistory.json` and the user word file
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// chrono `strftime` pattern for entry timestamps
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            date_format: default_date_format(),
        }
    }
}

/// Diagnostic log file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// One of `error`, `warn`, `info`, `debug`, `trace`
    #[serde(default = "default_level")]
    pub level: String,
    /// Log file; defaults to `hangman.log` in the data directory
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_level(),
            file: None,
        }
    }
}

fn default_wordlist() -> String {
    "user".into()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.into()
}

fn default_level() -> String {
    "info".into()
}

const fn default_true() -> bool {
    true
}
