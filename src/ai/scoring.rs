//! Heuristic combination scoring.
//!
//! Shared by the AI policy and by player hints so both rank moves the same
//! way. Scores are additive:
//!
//! | Term | Points |
//! |---|---|
//! | column already an active lane | +15 each |
//! | column ways count | +ways each |
//! | both columns identical | +5 |
//! | one more step reaches the top | +40 each |
//! | (risk-aware) chance the next roll survives | +(1 - p) * 30 |

use serde::{Deserialize, Serialize};

use crate::core::{Column, ColumnSet};
use crate::dice::Combination;
use crate::probability::bust_probability;
use crate::rules::GameState;

const ACTIVE_LANE_BONUS: f64 = 15.0;
const DOUBLE_BONUS: f64 = 5.0;
const CLAIM_BONUS: f64 = 40.0;
const SURVIVAL_WEIGHT: f64 = 30.0;

/// One legal combination and its score.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredCombination {
    /// Position in the roll's combination list.
    pub index: usize,
    pub combo: Combination,
    pub score: f64,
    /// Bust probability after the move; present when risk was weighed.
    pub bust_prob_after: Option<f64>,
}

/// Usable columns after tentatively playing `combo`.
///
/// Placeable combination columns join the active lanes. Once that reaches
/// the lane cap only those lanes count; below it every column that is still
/// placeable counts too.
#[must_use]
pub fn projected_usable(state: &GameState, combo: &Combination) -> ColumnSet {
    let mut lanes = state.active_lanes();
    for column in combo.columns() {
        if state.can_place_runner(column) {
            lanes.insert(column);
        }
    }

    if lanes.len() >= state.config().max_active_lanes {
        lanes
    } else {
        lanes.union(state.placeable_columns())
    }
}

/// Whether one more step in `column` would reach the top.
///
/// Owned columns never earn the claim bonus, even for their owner: the
/// column cannot be claimed again.
fn one_step_from_claim(state: &GameState, column: Column) -> bool {
    if !state.board().is_column_available(column) {
        return false;
    }
    let temp = state.turn().steps(column);
    state.effective_position(column, temp + 1) >= state.board().height(column)
}

/// Score one combination. Returns the score and, when `weigh_risk` is set,
/// the projected bust probability.
#[must_use]
pub fn score_combination(
    state: &GameState,
    combo: &Combination,
    weigh_risk: bool,
) -> (f64, Option<f64>) {
    let active = state.active_lanes();
    let mut score = 0.0;

    for column in combo.columns() {
        if active.contains(column) {
            score += ACTIVE_LANE_BONUS;
        }
        score += f64::from(state.config().ways(column));
        if one_step_from_claim(state, column) {
            score += CLAIM_BONUS;
        }
    }
    if combo.is_double() {
        score += DOUBLE_BONUS;
    }

    let bust_prob = weigh_risk.then(|| bust_probability(projected_usable(state, combo)));
    if let Some(p) = bust_prob {
        score += (1.0 - p) * SURVIVAL_WEIGHT;
    }
    (score, bust_prob)
}

/// Score every legal combination, best first. Ties keep roll order.
#[must_use]
pub fn rank_combinations(
    state: &GameState,
    combos: &[Combination],
    weigh_risk: bool,
) -> Vec<ScoredCombination> {
    let mut ranked: Vec<ScoredCombination> = combos
        .iter()
        .enumerate()
        .filter(|(_, combo)| state.can_make_move(combo))
        .map(|(index, combo)| {
            let (score, bust_prob_after) = score_combination(state, combo, weigh_risk);
            ScoredCombination {
                index,
                combo: *combo,
                score,
                bust_prob_after,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    fn state() -> GameState {
        GameState::human_vs_computer(GameConfig::default(), "Player")
    }

    #[test]
    fn test_fresh_turn_scores_ways_and_double() {
        let state = state();
        let (score, risk) = score_combination(&state, &Combination::new(8, 8), false);
        assert_eq!(score, 5.0 + 5.0 + 5.0);
        assert!(risk.is_none());

        let (score, _) = score_combination(&state, &Combination::new(5, 11), false);
        assert_eq!(score, 4.0 + 2.0);
    }

    #[test]
    fn test_active_and_claim_bonus() {
        let mut state = state();
        state.advance_runner(Column::new(2), 2);

        // Column 2 is active (+15), ways 1, and one step from the top (+40).
        let (score, _) = score_combination(&state, &Combination::new(2, 7), false);
        assert_eq!(score, 15.0 + 1.0 + 40.0 + 6.0);
    }

    #[test]
    fn test_owned_column_earns_no_claim_bonus() {
        let mut state = state();
        state.advance_runner(Column::new(2), 3);
        state.commit_progress();
        state.next_turn();
        state.next_turn();
        assert_eq!(state.board().owner(Column::new(2)), Some(state.current_id()));

        // Column 2 is the player's own and at the top: ways only.
        let (score, _) = score_combination(&state, &Combination::new(2, 7), false);
        assert_eq!(score, 1.0 + 6.0);
    }

    #[test]
    fn test_projected_usable_below_cap_includes_placeable() {
        let state = state();
        assert_eq!(projected_usable(&state, &Combination::new(6, 8)), ColumnSet::all());
    }

    #[test]
    fn test_projected_usable_at_cap_is_exact() {
        let mut state = state();
        state.advance_runner(Column::new(4), 1);
        state.advance_runner(Column::new(5), 1);

        let usable = projected_usable(&state, &Combination::new(6, 9));
        // 6 joins as the third lane; 9 can still be placed before the move.
        let expected: ColumnSet = [4, 5, 6, 9].into_iter().map(Column::new).collect();
        assert_eq!(usable, expected);

        let mut state = state;
        state.advance_runner(Column::new(6), 1);
        let usable = projected_usable(&state, &Combination::new(4, 12));
        let expected: ColumnSet = [4, 5, 6].into_iter().map(Column::new).collect();
        assert_eq!(usable, expected);
    }

    #[test]
    fn test_risk_term_is_bounded() {
        let state = state();
        let (plain, _) = score_combination(&state, &Combination::new(6, 8), false);
        let (risky, p) = score_combination(&state, &Combination::new(6, 8), true);
        let p = p.unwrap();
        assert!((risky - plain - (1.0 - p) * 30.0).abs() < 1e-9);
        assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn test_rank_filters_illegal_and_is_stable() {
        let mut state = state();
        state.advance_runner(Column::new(4), 1);
        state.advance_runner(Column::new(5), 1);
        state.advance_runner(Column::new(6), 1);

        let combos = [
            Combination::new(2, 12),
            Combination::new(4, 10),
            Combination::new(10, 4),
        ];
        let ranked = rank_combinations(&state, &combos, false);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].index, 1);
        assert_eq!(ranked[1].index, 2);
        assert_eq!(ranked[0].score, ranked[1].score);
    }
}
