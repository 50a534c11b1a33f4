//! Diagnostic logging to disk.
//!
//! The terminal belongs to the game, so `tracing` output goes to a plain-text
//! log file (default: `<data_dir>/hangman/hangman.log`) without ANSI colours.

use crate::config::LoggingConfig;
use anyhow::{Context, Result, anyhow};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;

/// Parse a level name, accepting `off` as well as the usual levels
///
/// # Errors
///
/// Returns an error for unknown level names.
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(level.trim()).map_err(|_| anyhow!("Unknown log level {level:?}"))
}

/// Install the global subscriber writing to `path`
///
/// Returns `Ok(false)` when logging is disabled in the config.
///
/// # Errors
///
/// Returns an error if the level is unknown, the log file cannot be opened, or a
/// global subscriber is already installed.
pub fn init(config: &LoggingConfig, path: &Path) -> Result<bool> {
    if !config.enabled {
        return Ok(false);
    }

    let level = parse_level(&config.level)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!("Failed to install logger: {e}"))?;

    tracing::info!(path = %path.display(), %level, "logging started");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_levels() {
        assert_eq!(parse_level("info").unwrap(), LevelFilter::INFO);
        assert_eq!(parse_level("DEBUG").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_level(" warn ").unwrap(), LevelFilter::WARN);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::OFF);
    }

    #[test]
    fn parse_unknown_level_fails() {
        assert!(parse_level("loud").is_err());
    }

    #[test]
    fn disabled_logging_is_noop() {
        let config = LoggingConfig {
            enabled: false,
            ..LoggingConfig::default()
        };
        let path = std::env::temp_dir().join("hangman-disabled.log");
        assert!(!init(&config, &path).unwrap());
    }
}
