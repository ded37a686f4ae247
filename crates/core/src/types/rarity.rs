//! Rarity classification with the total order used by the result ranker.

use serde::{Deserialize, Serialize};

/// Ranking slot for an unknown or absent rarity; sorts after every known level.
pub const RARITY_RANK_UNKNOWN: u8 = 5;

/// Five-level product scarcity classification.
///
/// The ranker sorts most-desirable first: collector's items rank 0, common
/// stones rank 4, and anything unrecognized ranks [`RARITY_RANK_UNKNOWN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    VeryRare,
    Collectors,
}

impl Rarity {
    /// All rarity levels, least to most scarce.
    pub const ALL: [Self; 5] = [
        Self::Common,
        Self::Uncommon,
        Self::Rare,
        Self::VeryRare,
        Self::Collectors,
    ];

    /// The wire-level code stored in the content store.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::VeryRare => "very_rare",
            Self::Collectors => "collectors",
        }
    }

    /// Human-readable display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Uncommon => "Uncommon",
            Self::Rare => "Rare",
            Self::VeryRare => "Very Rare",
            Self::Collectors => "Collector's Item",
        }
    }

    /// Sort rank for the result ranker (0 = ranked first).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Collectors => 0,
            Self::VeryRare => 1,
            Self::Rare => 2,
            Self::Uncommon => 3,
            Self::Common => 4,
        }
    }

    /// Look up a rarity by its wire-level code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.code() == code)
    }

    /// Look up a rarity by its display label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == label)
    }

    /// Sort rank for an optional display label; unknown labels sort last.
    #[must_use]
    pub fn rank_of_label(label: Option<&str>) -> u8 {
        label
            .and_then(Self::from_label)
            .map_or(RARITY_RANK_UNKNOWN, Self::rank)
    }

    /// Expand a raw rarity code to its display label, echoing unknown codes.
    #[must_use]
    pub fn label_for_code(code: &str) -> String {
        Self::from_code(code).map_or_else(|| code.to_string(), |r| r.label().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_total_order() {
        assert!(Rarity::Collectors.rank() < Rarity::VeryRare.rank());
        assert!(Rarity::VeryRare.rank() < Rarity::Rare.rank());
        assert!(Rarity::Rare.rank() < Rarity::Uncommon.rank());
        assert!(Rarity::Uncommon.rank() < Rarity::Common.rank());
        assert!(Rarity::Common.rank() < RARITY_RANK_UNKNOWN);
    }

    #[test]
    fn test_rank_of_label() {
        assert_eq!(Rarity::rank_of_label(Some("Collector's Item")), 0);
        assert_eq!(Rarity::rank_of_label(Some("Common")), 4);
        assert_eq!(Rarity::rank_of_label(Some("mythic")), RARITY_RANK_UNKNOWN);
        assert_eq!(Rarity::rank_of_label(None), RARITY_RANK_UNKNOWN);
    }

    #[test]
    fn test_label_for_code_fallback() {
        assert_eq!(Rarity::label_for_code("very_rare"), "Very Rare");
        assert_eq!(Rarity::label_for_code("mythic"), "mythic");
    }
}
