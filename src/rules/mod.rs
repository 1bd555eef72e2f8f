//! Turn state machine.
//!
//! `GameState` owns the board, both seats and the current `TurnSnapshot`.
//! Every legality check used by the probability model and the AI policy
//! goes through `GameState::can_place_runner`, so all consumers share the
//! same positional and eligibility math.

pub mod state;
pub mod turn;

pub use state::{Claims, GameState};
pub use turn::TurnSnapshot;
