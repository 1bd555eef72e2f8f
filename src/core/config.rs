//! Static game configuration.
//!
//! The embedding application supplies the board geometry once per match:
//! - Per-column finish heights
//! - Per-column two-dice ways counts
//! - Claimed columns needed to win
//! - Maximum concurrently active lanes per turn
//!
//! `GameConfig::default()` is the standard board. Configuration read from
//! disk goes through `load`/`from_toml_str`, which also run `validate`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::column::{Column, COLUMN_COUNT};
use super::error::ConfigError;

/// Standard finish heights for columns 2-12.
pub const STANDARD_HEIGHTS: [u8; COLUMN_COUNT] = [3, 5, 7, 9, 11, 13, 11, 9, 7, 5, 3];

/// Number of ordered two-dice rolls producing each sum 2-12.
pub const TWO_DICE_WAYS: [u8; COLUMN_COUNT] = [1, 2, 3, 4, 5, 6, 5, 4, 3, 2, 1];

/// Claimed columns needed to win a standard match.
pub const COLUMNS_TO_WIN: u8 = 3;

/// Lanes a player may have in play during one turn.
pub const MAX_ACTIVE_LANES: usize = 3;

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Finish height per column, indexed by `Column::index()`.
    pub heights: [u8; COLUMN_COUNT],

    /// Two-dice ways count per column, indexed by `Column::index()`.
    pub ways: [u8; COLUMN_COUNT],

    /// Claimed columns needed to win.
    pub columns_to_win: u8,

    /// Maximum distinct lanes with temporary progress in one turn.
    pub max_active_lanes: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            heights: STANDARD_HEIGHTS,
            ways: TWO_DICE_WAYS,
            columns_to_win: COLUMNS_TO_WIN,
            max_active_lanes: MAX_ACTIVE_LANES,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the win threshold.
    #[must_use]
    pub fn with_columns_to_win(mut self, count: u8) -> Self {
        self.columns_to_win = count;
        self
    }

    /// Set the active lane cap.
    #[must_use]
    pub fn with_max_active_lanes(mut self, count: usize) -> Self {
        self.max_active_lanes = count;
        self
    }

    /// Override one column's finish height.
    #[must_use]
    pub fn with_height(mut self, column: Column, height: u8) -> Self {
        self.heights[column.index()] = height;
        self
    }

    /// Finish height of a column.
    #[must_use]
    pub fn height(&self, column: Column) -> u8 {
        self.heights[column.index()]
    }

    /// Two-dice ways count of a column.
    #[must_use]
    pub fn ways(&self, column: Column) -> u8 {
        self.ways[column.index()]
    }

    /// Parse a TOML document. Missing keys keep their standard values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(index) = self.heights.iter().position(|&h| h == 0) {
            return Err(ConfigError::Validation(format!(
                "height of column {} must be > 0",
                Column::from_index(index)
            )));
        }
        let total_ways: u32 = self.ways.iter().map(|&w| u32::from(w)).sum();
        if total_ways != 36 {
            return Err(ConfigError::Validation(format!(
                "ways must sum to 36, got {total_ways}"
            )));
        }
        if !(1..=COLUMN_COUNT as u8).contains(&self.columns_to_win) {
            return Err(ConfigError::Validation(
                "columns_to_win must be in 1..=11".into(),
            ));
        }
        if !(1..=COLUMN_COUNT).contains(&self.max_active_lanes) {
            return Err(ConfigError::Validation(
                "max_active_lanes must be in 1..=11".into(),
            ));
        }
        Ok(())
    }
}
