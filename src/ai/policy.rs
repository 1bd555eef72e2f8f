//! Computer player decisions.
//!
//! Policies are trait-based so an orchestrator can seat different players:
//! - `choose_combination`: which legal combination to play after a roll
//! - `should_continue`: roll again or bank
//!
//! Policies never mutate the game state; every random branch draws from the
//! caller's `GameRng`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::difficulty::Difficulty;
use super::scoring::rank_combinations;
use crate::core::GameRng;
use crate::dice::Combination;
use crate::rules::GameState;

/// Chance that medium difficulty plays its second-ranked option.
pub const MEDIUM_SECOND_CHOICE: f64 = 0.3;

/// Chance of pressing on when stopping would claim a column (but not win).
pub const CONTINUE_PAST_CLAIM: f64 = 0.2;

/// Chance of pressing on once the roll budget is spent.
pub const CONTINUE_PAST_BUDGET: f64 = 0.15;

/// Decision-making for one seat.
pub trait TurnPolicy {
    /// Pick the index of the combination to play.
    ///
    /// Returns 0 when nothing is legal; callers treat that roll as a bust
    /// before asking.
    fn choose_combination(
        &self,
        state: &GameState,
        combos: &[Combination],
        rng: &mut GameRng,
    ) -> usize;

    /// `true` to roll again, `false` to bank.
    fn should_continue(&self, state: &GameState, rng: &mut GameRng) -> bool;
}

/// Heuristic computer opponent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiOpponent {
    difficulty: Difficulty,
}

impl AiOpponent {
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Rolls a medium/hard AI allows itself this turn.
    ///
    /// Fewer lanes leave more ways to survive, so the budget shrinks as
    /// lanes open (1: 4 rolls, 2: 3 rolls, otherwise 2), plus two rolls for
    /// each active lane within two rows of the top.
    #[must_use]
    pub fn roll_budget(state: &GameState) -> u32 {
        let active = state.active_lanes();
        let mut budget = match active.len() {
            1 => 4,
            2 => 3,
            _ => 2,
        };

        for column in active.iter() {
            let effective = state.effective_position(column, state.turn().steps(column));
            let remaining = state.board().height(column).saturating_sub(effective);
            if remaining <= 2 {
                budget += 2;
            }
        }
        budget
    }
}

impl TurnPolicy for AiOpponent {
    fn choose_combination(
        &self,
        state: &GameState,
        combos: &[Combination],
        rng: &mut GameRng,
    ) -> usize {
        if self.difficulty == Difficulty::Easy {
            let legal: Vec<usize> = combos
                .iter()
                .enumerate()
                .filter(|(_, c)| state.can_make_move(c))
                .map(|(i, _)| i)
                .collect();
            if legal.is_empty() {
                return 0;
            }
            let choice = legal[rng.gen_index(legal.len())];
            debug!(difficulty = %self.difficulty, choice, "combination chosen");
            return choice;
        }

        let ranked = rank_combinations(state, combos, self.difficulty.weighs_risk());
        let Some(best) = ranked.first() else {
            return 0;
        };

        let choice = if self.difficulty == Difficulty::Medium
            && ranked.len() > 1
            && rng.gen_bool(MEDIUM_SECOND_CHOICE)
        {
            ranked[1].index
        } else {
            best.index
        };

        debug!(
            difficulty = %self.difficulty,
            choice,
            score = best.score,
            options = ranked.len(),
            "combination chosen"
        );
        choice
    }

    fn should_continue(&self, state: &GameState, rng: &mut GameRng) -> bool {
        let rolls = state.rolls_this_turn();
        if rolls == 0 {
            return true;
        }

        let pending = state.pending_claims().len();
        let claimed = usize::from(state.current_player().columns_claimed);
        if claimed + pending >= usize::from(state.config().columns_to_win) {
            debug!(pending, "stopping to win");
            return false;
        }
        if pending > 0 {
            return rng.gen_bool(CONTINUE_PAST_CLAIM);
        }

        let keep_going = match self.difficulty {
            Difficulty::Easy => {
                let threshold = 2 + rng.gen_index(2) as u32;
                rolls < threshold
            }
            Difficulty::Medium | Difficulty::Hard => {
                let budget = Self::roll_budget(state);
                if rolls >= budget {
                    rng.gen_bool(CONTINUE_PAST_BUDGET)
                } else {
                    true
                }
            }
        };

        debug!(difficulty = %self.difficulty, rolls, keep_going, "continue decision");
        keep_going
    }
}
