//! Computer player.
//!
//! - `difficulty`: the easy / medium / hard tiers
//! - `scoring`: combination scoring shared with player hints
//! - `policy`: the `TurnPolicy` trait and the heuristic `AiOpponent`

pub mod difficulty;
pub mod policy;
pub mod scoring;

pub use difficulty::Difficulty;
pub use policy::{AiOpponent, TurnPolicy};
pub use scoring::{projected_usable, rank_combinations, score_combination, ScoredCombination};
