//! Core engine types: columns, players, RNG, configuration, errors.
//!
//! Everything here is board-agnostic plumbing; game rules live in
//! `board` and `rules`.

pub mod column;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use column::{Column, ColumnSet, COLUMN_COUNT};
pub use config::{GameConfig, COLUMNS_TO_WIN, MAX_ACTIVE_LANES, STANDARD_HEIGHTS, TWO_DICE_WAYS};
pub use error::ConfigError;
pub use player::{Player, PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
