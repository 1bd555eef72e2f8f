//! Property-based tests for dice, board and turn invariants.

use proptest::prelude::*;

use cant_stop::board::step_forward;
use cant_stop::core::{Column, ColumnSet, GameConfig, PlayerId};
use cant_stop::dice::{combinations, Combination, Dice};
use cant_stop::probability::bust_probability;
use cant_stop::rules::GameState;

/// Strategy: four dice, each 1-6.
fn dice_strategy() -> impl Strategy<Value = [u8; 4]> {
    prop::array::uniform4(1..=6u8)
}

/// Strategy: any subset of the eleven columns.
fn column_set_strategy() -> impl Strategy<Value = ColumnSet> {
    (0u16..(1 << 11)).prop_map(ColumnSet::from_bits)
}

/// Strategy: a column height with a start row and an opponent row below it.
fn walk_strategy() -> impl Strategy<Value = (u8, u8, u8)> {
    (3..=13u8).prop_flat_map(|height| (Just(height), 0..height, 1..height))
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Play(u8, u8),
    Stop,
    Bust,
}

/// Strategy: a turn script, weighted toward moves.
fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        6 => (2..=12u8, 2..=12u8).prop_map(|(a, b)| Action::Play(a, b)),
        2 => Just(Action::Stop),
        1 => Just(Action::Bust),
    ]
}

proptest! {
    // 1. Combinations: one to three distinct pairs, each using all four dice
    #[test]
    fn combinations_use_all_dice(dice in dice_strategy()) {
        let dice = Dice::new(dice);
        let combos = combinations(&dice);
        prop_assert!((1..=3).contains(&combos.len()));

        for (i, combo) in combos.iter().enumerate() {
            prop_assert_eq!(u32::from(combo.first().sum() + combo.second().sum()), u32::from(dice.total()));
            for other in &combos[i + 1..] {
                prop_assert!(!combo.same_columns(other), "duplicate {combo} in {dice:?}");
            }
        }
    }

    // 2. Bust probability is a probability and adding columns never raises it
    #[test]
    fn bust_probability_monotone(a in column_set_strategy(), b in column_set_strategy()) {
        let p_a = bust_probability(a);
        let p_union = bust_probability(a.union(b));
        prop_assert!((0.0..=1.0).contains(&p_a));
        prop_assert!(p_union <= p_a, "{a} -> {p_a}, {} -> {p_union}", a.union(b));
    }

    // 3. The jump rule never lands on the opponent and never overshoots
    #[test]
    fn step_forward_skips_opponent(
        (height, start, opponent) in walk_strategy(),
        steps in 0..16u32,
    ) {
        prop_assume!(start != opponent);
        let end = step_forward(start, opponent, height, steps);
        prop_assert!(end <= height);
        prop_assert!(end >= start);
        if steps > 0 {
            prop_assert_ne!(end, opponent);
        }
    }

    // 4. Random turn scripts keep every board and turn invariant
    #[test]
    fn turn_scripts_keep_invariants(script in prop::collection::vec(action_strategy(), 0..120)) {
        let mut state = GameState::human_vs_computer(GameConfig::default(), "Player");
        let mut winner: Option<PlayerId> = None;

        for action in script {
            let owners_before: Vec<_> = Column::all().map(|c| state.board().owner(c)).collect();

            match action {
                Action::Play(a, b) => {
                    let combo = Combination::new(a, b);
                    let legal = state.can_make_move(&combo);
                    prop_assert_eq!(state.apply_combination(&combo), legal);
                }
                Action::Stop => {
                    state.commit_progress();
                    prop_assert!(state.turn().is_fresh());
                    state.next_turn();
                }
                Action::Bust => {
                    let board = state.board().clone();
                    state.bust();
                    prop_assert!(state.turn().is_fresh());
                    prop_assert_eq!(state.board(), &board);
                    state.next_turn();
                }
            }

            prop_assert!(state.active_lanes().len() <= state.config().max_active_lanes);
            for (column, before) in Column::all().zip(owners_before) {
                if before.is_some() {
                    prop_assert_eq!(state.board().owner(column), before);
                }
                for seat in PlayerId::all() {
                    prop_assert!(state.board().position(seat, column) <= state.board().height(column));
                }
            }
            for seat in PlayerId::all() {
                prop_assert_eq!(
                    usize::from(state.player(seat).columns_claimed),
                    state.board().claimed_columns(seat).len()
                );
            }

            // Claims never shrink, so a winner stays a winner.
            if let Some(seat) = winner {
                prop_assert!(state.player(seat).columns_claimed >= state.config().columns_to_win);
                prop_assert!(state.check_winner().is_some());
            } else {
                winner = state.check_winner();
            }
        }
    }
}
