//! # cant-stop
//!
//! Rules engine, exact risk model and computer player for the push-your-luck
//! dice game played on eleven columns (2-12).
//!
//! ## Design Principles
//!
//! 1. **One source of eligibility**: the AI, the hints and the match driver
//!    all ask `GameState::can_place_runner`; nobody re-derives the jump rule
//!    or the lane cap.
//!
//! 2. **Exact risk**: bust chances come from enumerating all 1296 rolls,
//!    memoized by an 11-bit column mask.
//!
//! 3. **Injected randomness**: dice and AI noise draw from a seeded
//!    `GameRng`, so a seed replays a whole match.
//!
//! ## Architecture
//!
//! - **Arena storage**: board and turn progress are fixed arrays indexed by
//!   `[player][column]`; no string keys, no hashing on the hot path.
//!
//! - **Synchronous core**: every operation completes before returning.
//!   Rendering, pacing and persistence belong to the embedding application.
//!
//! ## Modules
//!
//! - `core`: columns, players, RNG, configuration, errors
//! - `dice`: rolling and column-pair combinations
//! - `board`: banked positions, ownership, the jump rule
//! - `rules`: the turn state machine
//! - `probability`: bust probability, per-column odds, hints
//! - `ai`: difficulty tiers, move scoring, the computer policy
//! - `game`: move choices, the match driver, statistics

pub mod ai;
pub mod board;
pub mod core;
pub mod dice;
pub mod game;
pub mod probability;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Column, ColumnSet, ConfigError, GameConfig, GameRng, GameRngState, Player, PlayerId, PlayerMap,
};

pub use crate::dice::{combinations, roll, Combination, Combinations, Dice};

pub use crate::board::Board;

pub use crate::rules::{Claims, GameState, TurnSnapshot};

pub use crate::probability::{
    bust_probability, column_probability, current_bust_probability, generate_hint, Hint,
    HintContext, Recommendation, RiskBand,
};

pub use crate::ai::{AiOpponent, Difficulty, TurnPolicy};

pub use crate::game::{
    legal_choices, LifetimeStats, Match, MatchCheckpoint, MatchStats, MatchSummary, MoveChoice,
    Roll, TurnEnd,
};
