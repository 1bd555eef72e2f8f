//! Move choices offered after a roll.
//!
//! Usually each legal combination is one choice. When a player is one lane
//! short of the cap and a combination names two different new columns that
//! are both placeable, only one of them can start, so the combination is
//! offered as two single-lane choices instead.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Column;
use crate::dice::Combination;
use crate::probability::would_claim;
use crate::rules::GameState;

/// One selectable move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveChoice {
    /// Play a whole combination.
    Combination {
        /// Position in the roll's combination list.
        index: usize,
        /// Columns that will actually move (a double lists its column once).
        advanceable: SmallVec<[Column; 2]>,
        /// Whether the move tops out a column.
        would_claim: bool,
    },
    /// Start one new lane from a split combination.
    Single {
        /// Position of the source combination in the roll.
        index: usize,
        column: Column,
    },
}

impl MoveChoice {
    /// Index of the combination this choice comes from.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            MoveChoice::Combination { index, .. } | MoveChoice::Single { index, .. } => *index,
        }
    }
}

/// The two columns a combination splits into, if it must be split.
#[must_use]
pub fn split_columns(state: &GameState, combo: &Combination) -> Option<[Column; 2]> {
    let [first, second] = combo.columns();
    let one_lane_left = state.active_lanes().len() + 1 == state.config().max_active_lanes;
    let both_new = !state.turn().is_active(first) && !state.turn().is_active(second);

    (first != second
        && one_lane_left
        && both_new
        && state.can_place_runner(first)
        && state.can_place_runner(second))
    .then_some([first, second])
}

/// For a split combination, the column with more ways to roll it
/// (the first on ties). Used by the computer player.
#[must_use]
pub fn preferred_single(state: &GameState, combo: &Combination) -> Option<Column> {
    let [first, second] = split_columns(state, combo)?;
    let config = state.config();
    Some(if config.ways(first) >= config.ways(second) {
        first
    } else {
        second
    })
}

/// All choices for a roll, in roll order.
#[must_use]
pub fn legal_choices(state: &GameState, combos: &[Combination]) -> Vec<MoveChoice> {
    let mut choices = Vec::new();

    for (index, combo) in combos.iter().enumerate() {
        if !state.can_make_move(combo) {
            continue;
        }

        if let Some(columns) = split_columns(state, combo) {
            choices.extend(columns.map(|column| MoveChoice::Single { index, column }));
            continue;
        }

        let mut advanceable = SmallVec::new();
        for column in combo.columns() {
            if state.can_place_runner(column) && !advanceable.contains(&column) {
                advanceable.push(column);
            }
        }
        choices.push(MoveChoice::Combination {
            index,
            advanceable,
            would_claim: !would_claim(state, combo).is_empty(),
        });
    }
    choices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    fn state() -> GameState {
        GameState::human_vs_computer(GameConfig::default(), "Player")
    }

    #[test]
    fn test_fresh_turn_no_split() {
        let state = state();
        let combos = [Combination::new(5, 11), Combination::new(8, 8)];
        let choices = legal_choices(&state, &combos);

        assert_eq!(choices.len(), 2);
        let MoveChoice::Combination { advanceable, .. } = &choices[1] else {
            panic!("expected combination");
        };
        assert_eq!(advanceable.as_slice(), &[Column::new(8)]);
    }

    #[test]
    fn test_split_with_two_active_lanes() {
        let mut state = state();
        state.advance_runner(Column::new(6), 1);
        state.advance_runner(Column::new(8), 1);

        let combos = [Combination::new(4, 9), Combination::new(6, 10)];
        let choices = legal_choices(&state, &combos);

        assert_eq!(
            choices[..2],
            [
                MoveChoice::Single { index: 0, column: Column::new(4) },
                MoveChoice::Single { index: 0, column: Column::new(9) },
            ]
        );
        assert!(matches!(choices[2], MoveChoice::Combination { index: 1, .. }));
        assert_eq!(preferred_single(&state, &combos[0]), Some(Column::new(9)));
        assert_eq!(preferred_single(&state, &combos[1]), None);
    }

    #[test]
    fn test_preferred_single_tie_takes_first() {
        let mut state = state();
        state.advance_runner(Column::new(6), 1);
        state.advance_runner(Column::new(8), 1);
        assert_eq!(
            preferred_single(&state, &Combination::new(5, 9)),
            Some(Column::new(5))
        );
    }

    #[test]
    fn test_partial_combination_lists_movable_column() {
        let mut state = state();
        for c in [4, 5, 6] {
            state.advance_runner(Column::new(c), 1);
        }
        let choices = legal_choices(&state, &[Combination::new(5, 10), Combination::new(2, 12)]);

        assert_eq!(choices.len(), 1);
        let MoveChoice::Combination { advanceable, would_claim, .. } = &choices[0] else {
            panic!("expected combination");
        };
        assert_eq!(advanceable.as_slice(), &[Column::new(5)]);
        assert!(!would_claim);
    }
}
