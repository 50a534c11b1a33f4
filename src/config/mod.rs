//! Configuration loading
//!
//! Reads `<config_dir>/hangman/config.toml` (or an explicit path). A missing file
//! means defaults; a file that exists but does not parse is an error.

pub mod model;

use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, GameConfig, HistoryConfig, LoggingConfig};

const APP_DIR: &str = "hangman";

/// Default location of the config file
#[must_use]
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("config.toml")
}

/// Default directory for history, added words and logs
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Load the config from `path`, or from the default location
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let path = path.map_or_else(config_path, Path::to_path_buf);
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    parse_config(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// Parse a TOML config document
///
/// # Errors
///
/// Returns an error if the document is not valid TOML for `AppConfig`.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    Ok(toml::from_str(contents)?)
}

impl AppConfig {
    /// Data directory, falling back to the platform default
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.history
            .data_dir
            .clone()
            .unwrap_or_else(default_data_dir)
    }

    /// File that `add-word` appends to
    #[must_use]
    pub fn user_words_path(&self) -> PathBuf {
        self.data_dir().join("words.txt")
    }

    /// Disable everything that writes to disk outside the history store
    #[must_use]
    pub fn ephemeral(mut self) -> Self {
        self.logging.enabled = false;
        self
    }

    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.logging
            .file
            .clone()
            .unwrap_or_else(|| self.data_dir().join("hangman.log"))
    }
}

/// Check that a chrono `strftime` pattern has no invalid specifiers
#[must_use]
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}
