//! Column identifiers and compact column sets.
//!
//! ## Column
//!
//! The eleven lanes are named by the two-dice sum that advances them (2-12).
//! `Column::index()` maps them onto `0..11` for arena-style storage.
//!
//! ## ColumnSet
//!
//! An 11-bit mask over the columns. Sets built in any insertion order compare
//! and hash identically, which makes the raw mask a canonical cache key.

use serde::{Deserialize, Serialize};

/// Number of columns on the board.
pub const COLUMN_COUNT: usize = 11;

/// Lowest column number.
pub const MIN_COLUMN: u8 = 2;

/// Highest column number.
pub const MAX_COLUMN: u8 = 12;

/// A board column, identified by its dice sum (2-12).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Column(u8);

impl Column {
    /// Create a column from its dice sum.
    ///
    /// Sums outside 2-12 are a caller contract violation.
    #[must_use]
    pub fn new(sum: u8) -> Self {
        debug_assert!(
            (MIN_COLUMN..=MAX_COLUMN).contains(&sum),
            "column {sum} outside {MIN_COLUMN}-{MAX_COLUMN}"
        );
        Self(sum)
    }

    /// Create a column, returning `None` for sums outside 2-12.
    #[must_use]
    pub fn try_new(sum: u8) -> Option<Self> {
        (MIN_COLUMN..=MAX_COLUMN).contains(&sum).then_some(Self(sum))
    }

    /// Create a column from its 0-based storage index.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < COLUMN_COUNT, "column index {index} out of range");
        Self(index as u8 + MIN_COLUMN)
    }

    /// The dice sum naming this column.
    #[must_use]
    pub const fn sum(self) -> u8 {
        self.0
    }

    /// 0-based storage index (column 2 is index 0).
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - MIN_COLUMN) as usize
    }

    /// Iterate over all eleven columns in ascending order.
    pub fn all() -> impl Iterator<Item = Column> {
        (MIN_COLUMN..=MAX_COLUMN).map(Column)
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A set of columns stored as an 11-bit mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnSet(u16);

impl ColumnSet {
    const FULL: u16 = (1 << COLUMN_COUNT) - 1;

    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// The set of all eleven columns.
    #[must_use]
    pub const fn all() -> Self {
        Self(Self::FULL)
    }

    /// Build a set from a raw mask; bits above column 12 are dropped.
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & Self::FULL)
    }

    /// The raw mask (bit 0 = column 2).
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Add a column. Returns `true` if it was not already present.
    pub fn insert(&mut self, column: Column) -> bool {
        let bit = 1 << column.index();
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    /// Remove a column.
    pub fn remove(&mut self, column: Column) {
        self.0 &= !(1 << column.index());
    }

    /// Check membership.
    #[must_use]
    pub const fn contains(self, column: Column) -> bool {
        self.0 & (1 << column.index()) != 0
    }

    /// Check membership by dice sum; sums outside 2-12 are never members.
    #[must_use]
    pub fn contains_sum(self, sum: u8) -> bool {
        Column::try_new(sum).is_some_and(|c| self.contains(c))
    }

    /// Number of columns in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Iterate over member columns in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Column> {
        Column::all().filter(move |&c| self.contains(c))
    }
}

impl FromIterator<Column> for ColumnSet {
    fn from_iter<I: IntoIterator<Item = Column>>(iter: I) -> Self {
        let mut set = Self::empty();
        for column in iter {
            set.insert(column);
        }
        set
    }
}

impl std::fmt::Display for ColumnSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self.iter().map(|c| c.to_string()).collect();
        write!(f, "{{{}}}", names.join(","))
    }
}
