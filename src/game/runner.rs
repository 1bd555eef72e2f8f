//! Match driver.
//!
//! Sequences the rules for an orchestrator: roll, detect busts, apply a
//! chosen move, bank, check for a winner and pass the turn. Presentation
//! and pacing stay outside; the driver is synchronous and deterministic
//! for a given seed.
//!
//! Dice and computer decisions draw from separate streams derived from the
//! match seed, so swapping a seat's policy never changes the dice that seat
//! rolls. Between turns a match can be captured as a [`MatchCheckpoint`]
//! and resumed later.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use super::choices::{preferred_single, split_columns, MoveChoice};
use super::stats::{MatchStats, MatchSummary};
use crate::ai::TurnPolicy;
use crate::core::{GameConfig, GameRng, GameRngState, Player, PlayerId, PlayerMap};
use crate::dice::{self, Combinations, Dice};
use crate::rules::{Claims, GameState};

/// One roll and which of its combinations can be played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roll {
    pub dice: Dice,
    pub combos: Combinations,
    pub legal: SmallVec<[bool; 3]>,
}

impl Roll {
    /// `true` when no combination can be played.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        !self.legal.iter().any(|&l| l)
    }
}

/// How a turn ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnEnd {
    /// Progress banked; lists newly claimed columns.
    Banked(Claims),
    /// Progress lost.
    Busted,
    /// The player banked into the win.
    Won(PlayerId),
}

/// Everything needed to resume a match between turns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCheckpoint {
    pub seed: u64,
    pub state: GameState,
    pub stats: MatchStats,
    pub winner: Option<PlayerId>,
    pub dice: GameRngState,
    pub ai: GameRngState,
}

/// A match in progress.
#[derive(Clone, Debug)]
pub struct Match {
    seed: u64,
    state: GameState,
    dice: GameRng,
    ai: GameRng,
    stats: MatchStats,
    last_roll: Option<Roll>,
    winner: Option<PlayerId>,
}

impl Match {
    /// Create a match; `seed` drives both the dice and AI randomness.
    #[must_use]
    pub fn new(config: GameConfig, players: PlayerMap<Player>, seed: u64) -> Self {
        let root = GameRng::new(seed);
        Self {
            seed,
            state: GameState::new(config, players),
            dice: root.for_context("dice"),
            ai: root.for_context("ai"),
            stats: MatchStats::new(),
            last_roll: None,
            winner: None,
        }
    }

    /// Create a match seeded from OS entropy. The seed stays readable
    /// through [`Match::seed`] so the match can be replayed.
    #[must_use]
    pub fn from_entropy(config: GameConfig, players: PlayerMap<Player>) -> Self {
        Self::new(config, players, GameRng::from_entropy().seed())
    }

    /// Resume a match captured with [`Match::checkpoint`].
    #[must_use]
    pub fn from_checkpoint(checkpoint: &MatchCheckpoint) -> Self {
        Self {
            seed: checkpoint.seed,
            state: checkpoint.state.clone(),
            dice: GameRng::from_state(&checkpoint.dice),
            ai: GameRng::from_state(&checkpoint.ai),
            stats: checkpoint.stats,
            last_roll: None,
            winner: checkpoint.winner,
        }
    }

    /// Two computer seats, for simulation.
    #[must_use]
    pub fn computer_vs_computer(config: GameConfig, seed: u64) -> Self {
        let players = PlayerMap::from_array([
            Player::computer(PlayerId::FIRST, "Computer 1"),
            Player::computer(PlayerId::SECOND, "Computer 2"),
        ]);
        Self::new(config, players, seed)
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn stats(&self) -> &MatchStats {
        &self.stats
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Capture the match for later resumption.
    ///
    /// Returns `None` while a roll is waiting for a choice; checkpoints are
    /// taken between moves.
    #[must_use]
    pub fn checkpoint(&self) -> Option<MatchCheckpoint> {
        if self.last_roll.is_some() {
            return None;
        }
        Some(MatchCheckpoint {
            seed: self.seed,
            state: self.state.clone(),
            stats: self.stats,
            winner: self.winner,
            dice: self.dice.state(),
            ai: self.ai.state(),
        })
    }

    /// The most recent roll awaiting a choice.
    #[must_use]
    pub fn last_roll(&self) -> Option<&Roll> {
        self.last_roll.as_ref()
    }

    /// Roll for the current player.
    ///
    /// A bust is applied immediately (temporary progress discarded); the
    /// caller then ends the turn.
    pub fn roll(&mut self) -> Roll {
        let dice = dice::roll(&mut self.dice);
        let combos = dice::combinations(&dice);
        let legal = combos.iter().map(|c| self.state.can_make_move(c)).collect();
        let roll = Roll { dice, combos, legal };

        let player = self.state.current_id();
        if roll.is_bust() {
            self.stats.record_bust(player);
            self.state.bust();
            self.last_roll = None;
        } else {
            self.stats.record_roll(player);
            self.last_roll = Some(roll.clone());
        }
        roll
    }

    /// Apply a choice against the pending roll. Returns `false` (and leaves
    /// the roll pending) if the choice does not belong to it or cannot move.
    ///
    /// A `Single` choice is only accepted for a combination that must be
    /// split (see [`split_columns`]); otherwise both columns move together.
    pub fn choose(&mut self, choice: &MoveChoice) -> bool {
        let Some(roll) = &self.last_roll else {
            return false;
        };
        let Some(combo) = roll.combos.get(choice.index()).copied() else {
            return false;
        };

        let moved = match choice {
            MoveChoice::Combination { .. } => self.state.apply_combination(&combo),
            MoveChoice::Single { column, .. } => {
                split_columns(&self.state, &combo).is_some_and(|cols| cols.contains(column))
                    && self.state.apply_single(*column)
            }
        };
        if moved {
            self.last_roll = None;
        }
        moved
    }

    /// Bank the current player's progress. Records the winner if this
    /// commit reaches the threshold.
    pub fn stop(&mut self) -> Claims {
        let claimed = self.state.commit_progress();
        self.last_roll = None;
        if self.winner.is_none() {
            self.winner = self.state.check_winner();
        }
        claimed
    }

    /// Pass play to the other seat unless the match is over.
    pub fn end_turn(&mut self) {
        if self.winner.is_some() {
            return;
        }
        self.state.next_turn();
        self.state.start_turn();
    }

    /// Play the current player's whole turn with `policy`, then pass play.
    pub fn play_ai_turn(&mut self, policy: &impl TurnPolicy) -> TurnEnd {
        let player = self.state.current_id();
        loop {
            let roll = self.roll();
            if roll.is_bust() {
                self.end_turn();
                return TurnEnd::Busted;
            }

            let index = policy.choose_combination(&self.state, &roll.combos, &mut self.ai);
            let combo = match roll.legal.get(index) {
                Some(true) => roll.combos[index],
                _ => {
                    let fallback = roll.legal.iter().position(|&l| l).unwrap_or(0);
                    warn!(index, fallback, "policy chose an unplayable combination");
                    roll.combos[fallback]
                }
            };
            match preferred_single(&self.state, &combo) {
                Some(column) => self.state.apply_single(column),
                None => self.state.apply_combination(&combo),
            };
            self.last_roll = None;

            if !policy.should_continue(&self.state, &mut self.ai) {
                let claimed = self.stop();
                if let Some(winner) = self.winner {
                    return TurnEnd::Won(winner);
                }
                debug!(player = %player, claimed = ?claimed, "AI banked");
                self.end_turn();
                return TurnEnd::Banked(claimed);
            }
        }
    }

    /// Play computer seats against each other until someone wins or
    /// `max_turns` rounds have been played.
    pub fn play_out<P: TurnPolicy>(&mut self, policies: &PlayerMap<P>, max_turns: u32) -> MatchSummary {
        while !self.is_over() && self.state.turn_number() <= max_turns {
            let seat = self.state.current_id();
            self.play_ai_turn(&policies[seat]);
        }

        let summary = self.summary();
        info!(
            winner = ?summary.winner,
            turns = summary.turns,
            "match finished"
        );
        summary
    }

    /// Snapshot of the match for statistics consumers.
    #[must_use]
    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            winner: self.winner,
            turns: self.state.turn_number(),
            rolls: self.stats.rolls,
            busts: self.stats.busts,
            columns_claimed: PlayerMap::new(|p| self.state.player(p).columns_claimed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{AiOpponent, Difficulty};
    use crate::game::choices::legal_choices;

    #[test]
    fn test_roll_records_stats() {
        let mut game = Match::computer_vs_computer(GameConfig::default(), 5);
        let roll = game.roll();
        // Nothing can bust on a fresh turn.
        assert!(!roll.is_bust());
        assert_eq!(game.stats().rolls[PlayerId::FIRST], 1);
        assert!(game.last_roll().is_some());
    }

    #[test]
    fn test_choose_and_stop() {
        let mut game = Match::computer_vs_computer(GameConfig::default(), 8);
        let roll = game.roll();
        let choices = legal_choices(game.state(), &roll.combos);
        assert!(game.choose(&choices[0]));
        assert!(game.last_roll().is_none());
        assert!(!game.choose(&choices[0]), "roll already consumed");

        assert_eq!(game.state().rolls_this_turn(), 1);
        game.stop();
        game.end_turn();
        assert_eq!(game.state().current_id(), PlayerId::SECOND);
        assert!(game.state().turn().is_fresh());
    }

    #[test]
    fn test_play_out_is_deterministic() {
        let policies = PlayerMap::from_array([
            AiOpponent::new(Difficulty::Hard),
            AiOpponent::new(Difficulty::Medium),
        ]);
        let a = Match::computer_vs_computer(GameConfig::default(), 99).play_out(&policies, 500);
        let b = Match::computer_vs_computer(GameConfig::default(), 99).play_out(&policies, 500);
        assert_eq!(a, b);
        assert!(a.winner.is_some());
    }
}
