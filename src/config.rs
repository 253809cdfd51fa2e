//! Match configuration, loadable from TOML.

use crate::games::tictactoe::{ConfigError, Difficulty, Layout, OrderMode, Variant};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Points needed to win a match.
pub const WINNING_POINTS: u32 = 5;

/// Settings for one match.
///
/// Every field has a default, so an empty TOML file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct MatchConfig {
    /// Board preset.
    variant: Variant,

    /// Who leads each round.
    order: OrderMode,

    /// Heuristic steps the computer uses.
    difficulty: Difficulty,

    /// Round wins needed to become champion.
    winning_points: u32,

    /// Upper bound on rounds when no champion emerges.
    max_rounds: u32,

    /// Seed for the random source; `None` draws from the OS.
    seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            order: OrderMode::default(),
            difficulty: Difficulty::default(),
            winning_points: WINNING_POINTS,
            max_rounds: 100,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(variant = %config.variant, order = %config.order, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings no match could be played with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.winning_points == 0 {
            return Err(ConfigError::new("winning_points must be at least 1"));
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::new("max_rounds must be at least 1"));
        }
        Ok(())
    }

    /// Board geometry for the configured variant.
    pub fn layout(&self) -> Layout {
        self.variant.layout()
    }
}
