//! Risk model.
//!
//! - `bust`: exact, memoized bust probability over any usable-column set,
//!   static per-column likelihood, and risk bands
//! - `hint`: advisory explanations built on the bust model and AI scoring

pub mod bust;
pub mod hint;

pub use bust::{
    bust_probability, cached_entries, column_probability, current_bust_probability,
    enumerate_bust_probability, RiskBand, OUTCOMES,
};
pub use hint::{
    generate_hint, would_claim, ComboAnalysis, ComboHint, ContinueHint, Hint, HintContext,
    Recommendation,
};
