//! Match and lifetime statistics.
//!
//! `MatchStats` accumulates during play; `MatchSummary` is the end-of-match
//! record handed to whatever keeps long-term statistics. `LifetimeStats` is
//! that long-term record in pure form; storing it is up to the embedder.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

/// Per-match counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    /// Rolls that produced at least one legal move.
    pub rolls: PlayerMap<u32>,
    /// Rolls that busted.
    pub busts: PlayerMap<u32>,
}

impl MatchStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_roll(&mut self, player: PlayerId) {
        self.rolls[player] += 1;
    }

    pub fn record_bust(&mut self, player: PlayerId) {
        self.busts[player] += 1;
    }
}

/// Final record of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// `None` if the match was abandoned before anyone won.
    pub winner: Option<PlayerId>,
    /// Rounds played.
    pub turns: u32,
    pub rolls: PlayerMap<u32>,
    pub busts: PlayerMap<u32>,
    pub columns_claimed: PlayerMap<u8>,
}

/// Running totals across matches, from one player's point of view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifetimeStats {
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub total_busts: u32,
    pub columns_won: u32,
    pub win_streak: u32,
    pub best_streak: u32,
}

impl LifetimeStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished match into the totals.
    pub fn record_game_end(&mut self, won: bool, busts: u32, columns_won: u32) {
        self.games_played += 1;
        if won {
            self.wins += 1;
            self.win_streak += 1;
            self.best_streak = self.best_streak.max(self.win_streak);
        } else {
            self.losses += 1;
            self.win_streak = 0;
        }
        self.total_busts += busts;
        self.columns_won += columns_won;
    }

    /// Fold a match summary in for the given seat.
    pub fn record_summary(&mut self, summary: &MatchSummary, seat: PlayerId) {
        self.record_game_end(
            summary.winner == Some(seat),
            summary.busts[seat],
            u32::from(summary.columns_claimed[seat]),
        );
    }

    /// Fraction of games won, 0 before any game.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.games_played)
        }
    }
}
