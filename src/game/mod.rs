//! Match orchestration on top of the rules core.
//!
//! - `choices`: the move options shown after a roll
//! - `runner`: the `Match` driver for human and computer turns
//! - `stats`: per-match and lifetime statistics

pub mod choices;
pub mod runner;
pub mod stats;

pub use choices::{legal_choices, preferred_single, split_columns, MoveChoice};
pub use runner::{Match, MatchCheckpoint, Roll, TurnEnd};
pub use stats::{LifetimeStats, MatchStats, MatchSummary};
