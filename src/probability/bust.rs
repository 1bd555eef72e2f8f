//! Exact bust probability by exhaustive enumeration.
//!
//! A roll busts when none of the six pair sums of its three pairings lands
//! on a usable column. All 6^4 = 1296 outcomes are equally likely, so the
//! probability is an exact ratio. Results are pure in the usable set and
//! cached for the life of the process, keyed by the column mask.

use std::sync::{OnceLock, RwLock};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Column, ColumnSet, GameConfig};
use crate::dice::Dice;
use crate::rules::GameState;

/// Number of equally likely four-dice outcomes.
pub const OUTCOMES: u32 = 6 * 6 * 6 * 6;

static BUST_CACHE: OnceLock<RwLock<FxHashMap<ColumnSet, f64>>> = OnceLock::new();

fn cache() -> &'static RwLock<FxHashMap<ColumnSet, f64>> {
    BUST_CACHE.get_or_init(|| RwLock::new(FxHashMap::default()))
}

/// Probability that the next roll offers no usable column.
///
/// An empty set is a certain bust and skips enumeration.
///
/// ```
/// use cant_stop::core::ColumnSet;
/// use cant_stop::probability::bust_probability;
///
/// assert_eq!(bust_probability(ColumnSet::empty()), 1.0);
/// assert_eq!(bust_probability(ColumnSet::all()), 0.0);
/// ```
pub fn bust_probability(usable: ColumnSet) -> f64 {
    if usable.is_empty() {
        return 1.0;
    }

    if let Ok(cached) = cache().read() {
        if let Some(&p) = cached.get(&usable) {
            return p;
        }
    }

    let p = enumerate_bust_probability(usable);
    trace!(columns = %usable, probability = p, "bust probability computed");
    // A poisoned lock only costs us the memo.
    if let Ok(mut cached) = cache().write() {
        cached.insert(usable, p);
    }
    p
}

/// Uncached enumeration over all 1296 outcomes.
#[must_use]
pub fn enumerate_bust_probability(usable: ColumnSet) -> f64 {
    if usable.is_empty() {
        return 1.0;
    }

    let mut busts = 0u32;
    for d1 in 1..=6 {
        for d2 in 1..=6 {
            for d3 in 1..=6 {
                for d4 in 1..=6 {
                    let live = Dice([d1, d2, d3, d4])
                        .pairings()
                        .iter()
                        .any(|&(a, b)| usable.contains_sum(a) || usable.contains_sum(b));
                    if !live {
                        busts += 1;
                    }
                }
            }
        }
    }
    f64::from(busts) / f64::from(OUTCOMES)
}

/// Number of memoized column sets.
#[must_use]
pub fn cached_entries() -> usize {
    cache().read().map(|c| c.len()).unwrap_or(0)
}

/// Static per-roll likelihood of one pair summing to `column`.
#[must_use]
pub fn column_probability(config: &GameConfig, column: Column) -> f64 {
    f64::from(config.ways(column)) / 36.0
}

/// Bust probability of the current player's next roll.
#[must_use]
pub fn current_bust_probability(state: &GameState) -> f64 {
    bust_probability(state.usable_columns())
}

/// Coarse risk classification shown to players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    /// Below 15%.
    Low,
    /// 15% up to 35%.
    Moderate,
    /// 35% and above.
    High,
}

impl RiskBand {
    #[must_use]
    pub fn from_probability(p: f64) -> Self {
        if p < 0.15 {
            RiskBand::Low
        } else if p < 0.35 {
            RiskBand::Moderate
        } else {
            RiskBand::High
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RiskBand::Low => "Low",
            RiskBand::Moderate => "Moderate",
            RiskBand::High => "High",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(cols: &[u8]) -> ColumnSet {
        cols.iter().map(|&c| Column::new(c)).collect()
    }

    #[test]
    fn test_empty_and_full() {
        assert_eq!(bust_probability(ColumnSet::empty()), 1.0);
        assert_eq!(enumerate_bust_probability(ColumnSet::empty()), 1.0);
        assert_eq!(bust_probability(ColumnSet::all()), 0.0);
    }

    #[test]
    fn test_single_column_two() {
        // P(no pair of four dice sums to 2) = 1 - P(at least two 1s) = 1 - 171/1296
        let p = enumerate_bust_probability(set(&[2]));
        assert!((p - 1125.0 / 1296.0).abs() < 1e-12);
    }

    #[test]
    fn test_six_seven_eight() {
        // The classic 6-7-8 choice busts 104 times in 1296.
        let p = bust_probability(set(&[6, 7, 8]));
        assert!((p - 104.0 / 1296.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_three_twelve() {
        // The worst three-column choice busts 728 times in 1296.
        let p = bust_probability(set(&[2, 3, 12]));
        assert!((p - 728.0 / 1296.0).abs() < 1e-12);
    }

    #[test]
    fn test_cache_matches_enumeration() {
        let usable = set(&[4, 7, 10]);
        let first = bust_probability(usable);
        let second = bust_probability(set(&[10, 4, 7]));
        assert_eq!(first, second);
        assert_eq!(first, enumerate_bust_probability(usable));
        assert!(cached_entries() >= 1);
    }

    #[test]
    fn test_more_columns_never_riskier() {
        let narrow = bust_probability(set(&[5, 9]));
        let wide = bust_probability(set(&[5, 9, 7]));
        assert!(wide <= narrow);
    }

    #[test]
    fn test_column_probability() {
        let config = GameConfig::default();
        assert!((column_probability(&config, Column::new(7)) - 6.0 / 36.0).abs() < 1e-12);
        assert!((column_probability(&config, Column::new(2)) - 1.0 / 36.0).abs() < 1e-12);
    }

    #[test]
    fn test_risk_bands() {
        assert_eq!(RiskBand::from_probability(0.0), RiskBand::Low);
        assert_eq!(RiskBand::from_probability(0.149), RiskBand::Low);
        assert_eq!(RiskBand::from_probability(0.15), RiskBand::Moderate);
        assert_eq!(RiskBand::from_probability(0.349), RiskBand::Moderate);
        assert_eq!(RiskBand::from_probability(0.35), RiskBand::High);
        assert_eq!(RiskBand::High.to_string(), "High");
    }
}
