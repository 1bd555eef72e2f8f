//! Dice rolling and column-pair combinations.
//!
//! Four dice are split into two pairs in one of three ways; each pairing
//! names two columns. Pairings that name the same two columns collapse,
//! so a roll yields one to three distinct combinations.

mod roller;

pub use roller::{combinations, roll, Combination, Combinations, Dice};
