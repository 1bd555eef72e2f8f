//! Permanent board state.
//!
//! The `Board` stores banked marker positions per (player, column) and the
//! first claimer of each column. Temporary per-turn progress never touches
//! it; see `rules::TurnSnapshot`.

mod grid;

pub use grid::{step_forward, Board};
