//! Arena-style board storage indexed by `[player][column]`.

use serde::{Deserialize, Serialize};

use crate::core::{Column, ColumnSet, GameConfig, PlayerId, PlayerMap, COLUMN_COUNT};

/// Walk a marker `steps` rows up a column of the given `height`.
///
/// After each step, a marker landing on the opponent's row (below the top)
/// jumps one further. The walk stops at the top.
#[must_use]
pub fn step_forward(start: u8, opponent: u8, height: u8, steps: u32) -> u8 {
    let mut pos = start;
    for _ in 0..steps {
        if pos >= height {
            return height;
        }
        pos += 1;
        if pos == opponent && pos < height {
            pos += 1;
        }
    }
    pos.min(height)
}

/// Banked positions and column ownership.
///
/// ## Invariants
///
/// - A position never exceeds its column's height.
/// - An owned column keeps its owner for the rest of the match.
///
/// ```
/// use cant_stop::board::Board;
/// use cant_stop::core::{Column, GameConfig, PlayerId};
///
/// let mut board = Board::new(&GameConfig::default());
/// let col = Column::new(2);
///
/// // Height 3: three steps claim the column.
/// assert!(board.advance_position(PlayerId::FIRST, col, 3, PlayerId::SECOND));
/// assert!(!board.is_column_available(col));
/// assert_eq!(board.owner(col), Some(PlayerId::FIRST));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    heights: [u8; COLUMN_COUNT],
    positions: PlayerMap<[u8; COLUMN_COUNT]>,
    owners: [Option<PlayerId>; COLUMN_COUNT],
}

impl Board {
    /// Create an empty board for the given configuration.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            heights: config.heights,
            positions: PlayerMap::default(),
            owners: [None; COLUMN_COUNT],
        }
    }

    /// Finish height of a column.
    #[must_use]
    pub fn height(&self, column: Column) -> u8 {
        self.heights[column.index()]
    }

    /// Banked position of a player's marker (0 = not started).
    #[must_use]
    pub fn position(&self, player: PlayerId, column: Column) -> u8 {
        self.positions[player][column.index()]
    }

    /// Set a banked position, clamped to the column height.
    ///
    /// Returns `true` if this placement claims the column: the clamped
    /// position reaches the height and nobody owned it yet.
    pub fn set_position(&mut self, player: PlayerId, column: Column, pos: u8) -> bool {
        let height = self.height(column);
        let pos = pos.min(height);
        self.positions[player][column.index()] = pos;

        let owner = &mut self.owners[column.index()];
        if pos >= height && owner.is_none() {
            *owner = Some(player);
            true
        } else {
            false
        }
    }

    /// Where `player` would land after `steps` more rows, jumping the
    /// opponent's banked marker. Non-destructive.
    #[must_use]
    pub fn project(&self, player: PlayerId, column: Column, steps: u32) -> u8 {
        step_forward(
            self.position(player, column),
            self.position(player.other(), column),
            self.height(column),
            steps,
        )
    }

    /// Advance a banked marker by `steps`, applying the jump rule against
    /// `opponent`. Returns `true` if the column was claimed.
    pub fn advance_position(
        &mut self,
        player: PlayerId,
        column: Column,
        steps: u32,
        opponent: PlayerId,
    ) -> bool {
        let target = step_forward(
            self.position(player, column),
            self.position(opponent, column),
            self.height(column),
            steps,
        );
        self.set_position(player, column, target)
    }

    /// Erase a player's banked progress in one column.
    pub fn clear_position(&mut self, player: PlayerId, column: Column) {
        self.positions[player][column.index()] = 0;
    }

    /// `true` until some player claims the column.
    #[must_use]
    pub fn is_column_available(&self, column: Column) -> bool {
        self.owners[column.index()].is_none()
    }

    /// Owner of a claimed column.
    #[must_use]
    pub fn owner(&self, column: Column) -> Option<PlayerId> {
        self.owners[column.index()]
    }

    /// Columns owned by a player.
    #[must_use]
    pub fn claimed_columns(&self, player: PlayerId) -> ColumnSet {
        Column::all()
            .filter(|&c| self.owner(c) == Some(player))
            .collect()
    }
}
