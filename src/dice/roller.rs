//! Dice roller.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Column, GameRng};

/// Four die faces, each 1-6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dice(pub [u8; 4]);

impl Dice {
    /// Wrap four die faces. Faces outside 1-6 are a caller contract violation.
    #[must_use]
    pub fn new(faces: [u8; 4]) -> Self {
        debug_assert!(
            faces.iter().all(|f| (1..=6).contains(f)),
            "die faces must be 1-6, got {faces:?}"
        );
        Self(faces)
    }

    /// Sum of all four faces.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.0.iter().sum()
    }

    /// Column sums of the three pairings, in pairing order
    /// (d1+d2|d3+d4, d1+d3|d2+d4, d1+d4|d2+d3).
    #[must_use]
    pub fn pairings(&self) -> [(u8, u8); 3] {
        let [d1, d2, d3, d4] = self.0;
        [(d1 + d2, d3 + d4), (d1 + d3, d2 + d4), (d1 + d4, d2 + d3)]
    }
}

/// A pair of columns obtained from one pairing of the dice.
///
/// Order is preserved as rolled; equality between combinations for
/// de-duplication ignores it (see [`Combination::same_columns`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combination(pub Column, pub Column);

impl Combination {
    /// Create a combination from two column sums.
    #[must_use]
    pub fn new(first: u8, second: u8) -> Self {
        Self(Column::new(first), Column::new(second))
    }

    #[must_use]
    pub fn first(&self) -> Column {
        self.0
    }

    #[must_use]
    pub fn second(&self) -> Column {
        self.1
    }

    /// Both entries name the same column.
    #[must_use]
    pub fn is_double(&self) -> bool {
        self.0 == self.1
    }

    /// Both columns as an array.
    #[must_use]
    pub fn columns(&self) -> [Column; 2] {
        [self.0, self.1]
    }

    /// Order-insensitive equality.
    #[must_use]
    pub fn same_columns(&self, other: &Combination) -> bool {
        (self.0 == other.0 && self.1 == other.1) || (self.0 == other.1 && self.1 == other.0)
    }
}

impl std::fmt::Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.0, self.1)
    }
}

/// The distinct combinations of one roll (never more than three).
pub type Combinations = SmallVec<[Combination; 3]>;

/// Roll four independent dice.
pub fn roll(rng: &mut GameRng) -> Dice {
    Dice([rng.roll_die(), rng.roll_die(), rng.roll_die(), rng.roll_die()])
}

/// Derive the distinct column-pair combinations of a roll, first occurrence first.
///
/// ```
/// use cant_stop::dice::{combinations, Combination, Dice};
///
/// let combos = combinations(&Dice::new([3, 2, 5, 6]));
/// assert_eq!(
///     combos.as_slice(),
///     &[Combination::new(5, 11), Combination::new(8, 8), Combination::new(9, 7)]
/// );
/// ```
#[must_use]
pub fn combinations(dice: &Dice) -> Combinations {
    let mut unique = Combinations::new();
    for (a, b) in dice.pairings() {
        let combo = Combination::new(a, b);
        if !unique.iter().any(|c| c.same_columns(&combo)) {
            unique.push(combo);
        }
    }
    unique
}
