//! Settings file for the terminal front end.

use arena_engine::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Front-end settings, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Default tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    log_level: String,

    /// Display name for player A.
    #[serde(default = "default_player_a_name")]
    player_a_name: String,

    /// Display name for player B.
    #[serde(default = "default_player_b_name")]
    player_b_name: String,

    /// Print the board after every accepted move.
    #[serde(default = "default_show_board")]
    show_board: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_player_a_name() -> String {
    "Player A".to_string()
}

fn default_player_b_name() -> String {
    "Player B".to_string()
}

fn default_show_board() -> bool {
    true
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            player_a_name: default_player_a_name(),
            player_b_name: default_player_b_name(),
            show_board: default_show_board(),
        }
    }
}

impl ArenaConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(log_level = %config.log_level, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration, falling back to defaults if the file is missing.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            warn!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Display name for `player`.
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::A => &self.player_a_name,
            Player::B => &self.player_b_name,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = ArenaConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, ArenaConfig::default());
        assert_eq!(config.name_of(Player::B), "Player B");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("arena.toml");
        fs::write(&path, "player_a_name = \"Ada\"\nshow_board = false\n").unwrap();

        let config = ArenaConfig::load_or_default(&path).unwrap();
        assert_eq!(config.name_of(Player::A), "Ada");
        assert_eq!(config.player_b_name(), "Player B");
        assert!(!config.show_board());
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("arena.toml");
        fs::write(&path, "show_board = \"sometimes\"").unwrap();

        let err = ArenaConfig::from_file(&path).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.to_string().contains("config.rs"));
    }
}
