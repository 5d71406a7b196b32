//! Player strength scoring and balance evaluation.
//!
//! Converts tier and skill level into one comparable strength value and
//! grades the gap between two team averages into a categorical status.
//! All functions here are pure; the weighting and thresholds are fixed
//! constants so results are comparable across calls.

use crate::roster::Player;

/// Strength points per tier step. One full step outweighs the entire
/// 1-10 skill range, so tier dominates while skill still discriminates
/// within a tier.
pub const TIER_STEP: f64 = 10.0;

/// Maximum team-average gap still considered balanced. Half a tier step
/// of team average.
pub const BALANCED_MAX_DIFF: f64 = 5.0;

/// Maximum team-average gap still considered a slight imbalance. One
/// full tier step of team average.
pub const SLIGHT_MAX_DIFF: f64 = 10.0;

/// Returns a player's strength on the 0-99 scale:
/// ten points per tier ordinal plus the 0-9 skill offset.
pub fn strength(player: &Player) -> f64 {
    TIER_STEP * player.tier.ordinal() as f64 + (player.skill_level as f64 - 1.0)
}

/// Returns the arithmetic mean strength of a team's members.
pub fn team_strength<'a>(members: impl IntoIterator<Item = &'a Player>) -> f64 {
    let mut total = 0.0;
    let mut count = 0usize;
    for player in members {
        total += strength(player);
        count += 1;
    }
    if count == 0 {
        return 0.0;
    }
    total / count as f64
}

/// Categorical quality of a split's strength gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BalanceStatus {
    Balanced,
    SlightImbalance,
    Unbalanced,
}

impl BalanceStatus {
    /// Returns the single-token label used in split notation.
    pub const fn label(self) -> &'static str {
        match self {
            BalanceStatus::Balanced => "balanced",
            BalanceStatus::SlightImbalance => "slight",
            BalanceStatus::Unbalanced => "unbalanced",
        }
    }

    /// Grades an absolute team-average gap.
    pub fn from_difference(diff: f64) -> BalanceStatus {
        if diff <= BALANCED_MAX_DIFF {
            BalanceStatus::Balanced
        } else if diff <= SLIGHT_MAX_DIFF {
            BalanceStatus::SlightImbalance
        } else {
            BalanceStatus::Unbalanced
        }
    }
}

/// The balance evaluation of one split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceReport {
    pub strength_a: f64,
    pub strength_b: f64,
    pub difference: f64,
    pub status: BalanceStatus,
}

/// Evaluates two team averages into a report.
pub fn evaluate(strength_a: f64, strength_b: f64) -> BalanceReport {
    let difference = (strength_a - strength_b).abs();
    BalanceReport {
        strength_a,
        strength_b,
        difference,
        status: BalanceStatus::from_difference(difference),
    }
}
