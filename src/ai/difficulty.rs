//! AI difficulty tiers.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Strength of the computer player.
///
/// Unrecognized tags resolve to [`Difficulty::Medium`], which is also the
/// `Default`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Random legal moves, stops after two or three rolls.
    Easy,
    /// Heuristic scoring with occasional second-best picks.
    #[default]
    Medium,
    /// Heuristic scoring plus exact bust risk.
    Hard,
}

impl Difficulty {
    /// Resolve a tag ("easy", "medium", "hard"), case-insensitively.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            other => {
                warn!(tag = other, "unknown difficulty, using medium");
                Difficulty::Medium
            }
        }
    }

    /// Whether combination scoring includes the bust-risk term.
    #[must_use]
    pub fn weighs_risk(self) -> bool {
        self == Difficulty::Hard
    }
}

impl From<&str> for Difficulty {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags() {
        assert_eq!(Difficulty::from_tag("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_tag("Hard"), Difficulty::Hard);
        assert_eq!(Difficulty::from(" medium "), Difficulty::Medium);
    }

    #[test]
    fn test_unknown_tag_defaults_to_medium() {
        assert_eq!(Difficulty::from_tag("nightmare"), Difficulty::Medium);
        assert_eq!(Difficulty::from_tag(""), Difficulty::Medium);
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_display_roundtrips_through_tag() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(Difficulty::from_tag(&d.to_string()), d);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
        let d: Difficulty = serde_json::from_str("\"easy\"").unwrap();
        assert_eq!(d, Difficulty::Easy);
    }
}
