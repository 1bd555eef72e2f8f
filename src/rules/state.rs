//! Turn state machine.
//!
//! A turn moves through three behavioural phases:
//! - **Fresh**: no active lanes, no rolls taken
//! - **In progress**: at least one accepted move
//! - **Committed** or **busted**: temporary progress is banked or discarded,
//!   and the snapshot is fresh again for the next player
//!
//! Illegal moves are reported through `false` returns, never panics.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::turn::TurnSnapshot;
use crate::board::Board;
use crate::core::{Column, ColumnSet, GameConfig, Player, PlayerId, PlayerMap};
use crate::dice::Combination;

/// Columns claimed by one commit, in ascending column order.
pub type Claims = SmallVec<[Column; 3]>;

/// Complete match state: players, board, turn order and the current turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    players: PlayerMap<Player>,
    current: PlayerId,
    turn_number: u32,
    turn: TurnSnapshot,
}

impl GameState {
    /// Create a match with the given seats. The first seat moves first.
    #[must_use]
    pub fn new(config: GameConfig, players: PlayerMap<Player>) -> Self {
        Self {
            board: Board::new(&config),
            config,
            players,
            current: PlayerId::FIRST,
            turn_number: 1,
            turn: TurnSnapshot::new(),
        }
    }

    /// Create a human-versus-computer match; the human moves first.
    #[must_use]
    pub fn human_vs_computer(config: GameConfig, human_name: impl Into<String>) -> Self {
        let players = PlayerMap::from_array([
            Player::human(PlayerId::FIRST, human_name),
            Player::computer(PlayerId::SECOND, "Computer"),
        ]);
        Self::new(config, players)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn turn(&self) -> &TurnSnapshot {
        &self.turn
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn current_id(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    #[must_use]
    pub fn opponent(&self) -> &Player {
        &self.players[self.current.other()]
    }

    /// Round counter, starting at 1; bumps when play returns to the first seat.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn rolls_this_turn(&self) -> u32 {
        self.turn.rolls()
    }

    #[must_use]
    pub fn active_lanes(&self) -> ColumnSet {
        self.turn.active()
    }

    // === Placement ===

    /// Where the current player's marker would sit after `temp_steps`
    /// steps from their banked position, jumping the opponent.
    #[must_use]
    pub fn effective_position(&self, column: Column, temp_steps: u32) -> u8 {
        self.board.project(self.current, column, temp_steps)
    }

    /// Whether the current player may move a runner in `column` now.
    #[must_use]
    pub fn can_place_runner(&self, column: Column) -> bool {
        if !self.board.is_column_available(column) {
            return false;
        }
        let effective = self.effective_position(column, self.turn.steps(column));
        if effective >= self.board.height(column) {
            return false;
        }
        if self.turn.is_active(column) {
            return true;
        }
        self.turn.active().len() < self.config.max_active_lanes
    }

    /// Every column the current player could move in right now.
    #[must_use]
    pub fn placeable_columns(&self) -> ColumnSet {
        Column::all().filter(|&c| self.can_place_runner(c)).collect()
    }

    /// Add `steps` temporary steps to a lane. No-op returning `false` if the
    /// lane is not placeable.
    pub fn advance_runner(&mut self, column: Column, steps: u32) -> bool {
        if !self.can_place_runner(column) {
            return false;
        }
        self.turn.advance(column, steps);
        trace!(player = %self.current, column = %column, steps, "runner advanced");
        true
    }

    /// Whether either column of the combination is placeable.
    #[must_use]
    pub fn can_make_move(&self, combo: &Combination) -> bool {
        self.can_place_runner(combo.first()) || self.can_place_runner(combo.second())
    }

    /// A roll busts when none of its combinations can be played.
    #[must_use]
    pub fn is_bust(&self, combos: &[Combination]) -> bool {
        !combos.iter().any(|c| self.can_make_move(c))
    }

    /// Advance each column of the combination independently by one step
    /// (a double advances its column twice). Counts the roll if anything moved.
    pub fn apply_combination(&mut self, combo: &Combination) -> bool {
        let first = self.advance_runner(combo.first(), 1);
        let second = self.advance_runner(combo.second(), 1);
        let moved = first || second;
        if moved {
            self.turn.count_roll();
        }
        moved
    }

    /// Advance a single lane by one step and count the roll.
    ///
    /// Used when a combination is split so that only one of its columns
    /// starts a new lane.
    pub fn apply_single(&mut self, column: Column) -> bool {
        let moved = self.advance_runner(column, 1);
        if moved {
            self.turn.count_roll();
        }
        moved
    }

    // === Risk Queries ===

    /// Active lanes whose projected position already reaches the top, i.e.
    /// the columns stopping now would claim.
    #[must_use]
    pub fn pending_claims(&self) -> ColumnSet {
        self.turn
            .active()
            .iter()
            .filter(|&c| self.effective_position(c, self.turn.steps(c)) >= self.board.height(c))
            .collect()
    }

    /// Columns that keep the next roll alive: the active lanes once the lane
    /// cap is reached, otherwise every placeable column.
    #[must_use]
    pub fn usable_columns(&self) -> ColumnSet {
        let placeable = self.placeable_columns();
        if self.turn.active().len() >= self.config.max_active_lanes {
            ColumnSet::from_bits(placeable.bits() & self.turn.active().bits())
        } else {
            placeable
        }
    }

    // === Turn Transitions ===

    /// Reset the turn snapshot.
    pub fn start_turn(&mut self) {
        self.turn.clear();
    }

    /// Bank all temporary progress for the current player.
    ///
    /// Each claim bumps the player's claim count and erases the opponent's
    /// banked marker in that column. Returns the claimed columns.
    pub fn commit_progress(&mut self) -> Claims {
        let player = self.current;
        let opponent = player.other();
        let mut claimed = Claims::new();

        let progress: SmallVec<[(Column, u32); 3]> = self.turn.progress().collect();
        for (column, steps) in progress {
            if self.board.advance_position(player, column, steps, opponent) {
                self.players[player].columns_claimed += 1;
                self.board.clear_position(opponent, column);
                claimed.push(column);
            }
        }

        debug!(
            player = %player,
            banked = self.turn.total_steps(),
            claimed = ?claimed,
            "progress committed"
        );
        self.start_turn();
        claimed
    }

    /// Discard all temporary progress; the board is untouched.
    pub fn bust(&mut self) {
        debug!(
            player = %self.current,
            lost = self.turn.total_steps(),
            rolls = self.turn.rolls(),
            "bust"
        );
        self.start_turn();
    }

    /// Pass control to the other seat.
    pub fn next_turn(&mut self) {
        self.current = self.current.other();
        if self.current == PlayerId::FIRST {
            self.turn_number += 1;
        }
    }

    /// The first player (in seat order) whose claims reached the threshold.
    #[must_use]
    pub fn check_winner(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, p)| p.columns_claimed >= self.config.columns_to_win)
            .map(|(id, _)| id)
    }
}
