//! Game configuration loaded from TOML.
//!
//! Holds the menu session state (difficulty, racer count, randomizer,
//! pause key) that the race screen is constructed from. Loading is
//! forgiving: a missing or unparsable file falls back to defaults with a
//! warning rather than refusing to start.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::input::Key;
use crate::race::bot::BotDifficulty;

/// Maximum total racers, including the player.
pub const MAX_PLAYER_COUNT: u32 = 3;

/// Errors raised when loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine a config directory for this platform")]
    NoConfigDir,

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Session settings handed to the race screen at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Bot difficulty tier; also selects the text pools.
    pub difficulty: BotDifficulty,
    /// Total racers including the player (1-3).
    pub player_count: u32,
    /// Generate sentences from the word pool instead of the stock pool.
    pub randomizer: bool,
    /// Key that toggles the pause menu.
    pub pause_key: Key,
    /// Directory holding the sentence/word pool files.
    pub assets_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: BotDifficulty::Medium,
            player_count: 3,
            randomizer: false,
            pause_key: Key::Tab,
            assets_dir: PathBuf::from("assets"),
        }
    }
}

impl GameConfig {
    /// Load from the platform config directory, falling back to defaults.
    pub fn load_or_default() -> Self {
        let path = match Self::config_path() {
            Ok(path) => path,
            Err(err) => {
                warn!(%err, "no config directory, using default config");
                return Self::default();
            }
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %path.display(), %err, "invalid config, using defaults");
                Self::default()
            }
        }
    }

    /// Load and validate a config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: GameConfig = toml::from_str(&contents)?;
        Ok(config.clamped())
    }

    /// Write the config, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Save to the platform config directory.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Path of the config file in the platform config directory.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dirs = ProjectDirs::from("", "", "typeracer").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Whether this session races against bots.
    pub fn is_multiplayer(&self) -> bool {
        self.player_count > 1
    }

    /// Clamp out-of-range values instead of rejecting the file.
    fn clamped(mut self) -> Self {
        if self.player_count < 1 || self.player_count > MAX_PLAYER_COUNT {
            warn!(
                player_count = self.player_count,
                "player_count out of range, clamping"
            );
            self.player_count = self.player_count.clamp(1, MAX_PLAYER_COUNT);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.difficulty, BotDifficulty::Medium);
        assert_eq!(config.player_count, 3);
        assert!(!config.randomizer);
        assert_eq!(config.pause_key, Key::Tab);
        assert!(config.is_multiplayer());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");

        let config = GameConfig {
            difficulty: BotDifficulty::Hard,
            player_count: 2,
            randomizer: true,
            ..GameConfig::default()
        };

        config.save_to(&path).expect("save");
        let loaded = GameConfig::load_from(&path).expect("load");

        assert_eq!(loaded.difficulty, BotDifficulty::Hard);
        assert_eq!(loaded.player_count, 2);
        assert!(loaded.randomizer);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "difficulty = \"easy\"\n").expect("write");

        let loaded = GameConfig::load_from(&path).expect("load");
        assert_eq!(loaded.difficulty, BotDifficulty::Easy);
        assert_eq!(loaded.player_count, 3);
    }

    #[test]
    fn test_player_count_clamped() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "player_count = 9\n").expect("write");

        let loaded = GameConfig::load_from(&path).expect("load");
        assert_eq!(loaded.player_count, MAX_PLAYER_COUNT);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "difficulty = [broken\n").expect("write");

        assert!(GameConfig::load_from(&path).is_err());
    }
}
