//! Per-turn temporary progress.

use serde::{Deserialize, Serialize};

use crate::core::{Column, ColumnSet, COLUMN_COUNT};

/// Unbanked progress of the player whose turn it is.
///
/// Cleared at turn start, mutated by each accepted move, and consumed on
/// commit or discarded on bust.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSnapshot {
    /// Lanes touched this turn.
    active: ColumnSet,
    /// Temporary steps per lane, indexed by `Column::index()`.
    steps: [u32; COLUMN_COUNT],
    /// Accepted rolls this turn.
    rolls: u32,
}

impl TurnSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to the empty turn.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// `true` when nothing has happened this turn.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.active.is_empty() && self.rolls == 0
    }

    #[must_use]
    pub fn active(&self) -> ColumnSet {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, column: Column) -> bool {
        self.active.contains(column)
    }

    /// Temporary steps accumulated in a lane this turn.
    #[must_use]
    pub fn steps(&self, column: Column) -> u32 {
        self.steps[column.index()]
    }

    /// Total temporary steps across all lanes (progress at risk).
    #[must_use]
    pub fn total_steps(&self) -> u32 {
        self.steps.iter().sum()
    }

    #[must_use]
    pub fn rolls(&self) -> u32 {
        self.rolls
    }

    /// Lanes with temporary steps and their counts, ascending by column.
    pub fn progress(&self) -> impl Iterator<Item = (Column, u32)> + '_ {
        self.active
            .iter()
            .map(|c| (c, self.steps(c)))
            .filter(|&(_, s)| s > 0)
    }

    pub(crate) fn advance(&mut self, column: Column, steps: u32) {
        self.active.insert(column);
        self.steps[column.index()] += steps;
    }

    pub(crate) fn count_roll(&mut self) {
        self.rolls += 1;
    }
}
