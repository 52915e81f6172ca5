//! Tunable scoring rules.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Scoring rules a board applies to every accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct RulesConfig {
    /// Flat bonus for placing a full rack in one move.
    #[serde(default = "default_bingo_bonus")]
    bingo_bonus: u32,

    /// Tiles a move must place to earn the bonus.
    #[serde(default = "default_bingo_tiles")]
    bingo_tiles: usize,
}

fn default_bingo_bonus() -> u32 {
    50
}

fn default_bingo_tiles() -> usize {
    crate::MAX_TILES
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            bingo_bonus: default_bingo_bonus(),
            bingo_tiles: default_bingo_tiles(),
        }
    }
}

impl RulesConfig {
    /// Loads rules from a TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading rules from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read rules file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(bingo_bonus = config.bingo_bonus, bingo_tiles = config.bingo_tiles, "Rules loaded");
        Ok(config)
    }

    /// Parses rules from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse rules: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=crate::MAX_TILES).contains(&self.bingo_tiles) {
            return Err(ConfigError::new(format!(
                "bingo_tiles must be between 1 and {}, got {}",
                crate::MAX_TILES,
                self.bingo_tiles
            )));
        }
        Ok(())
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
