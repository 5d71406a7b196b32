//! The ten-step ranked tier ladder.
//!
//! Tiers are a coarse skill classification independent of the finer
//! per-player 1-10 skill level. The ordinal runs from 0 (lowest
//! division) to 9 (highest).

use serde::{Deserialize, Serialize};

/// The number of tiers on the ladder.
pub const TIER_COUNT: usize = 10;

/// A ranked tier, lowest to highest division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Tier {
    Iron = 0,
    Bronze = 1,
    Silver = 2,
    Gold = 3,
    Platinum = 4,
    Emerald = 5,
    Diamond = 6,
    Master = 7,
    Grandmaster = 8,
    Challenger = 9,
}

/// All tier variants in ascending order.
pub const ALL_TIERS: [Tier; TIER_COUNT] = [
    Tier::Iron,
    Tier::Bronze,
    Tier::Silver,
    Tier::Gold,
    Tier::Platinum,
    Tier::Emerald,
    Tier::Diamond,
    Tier::Master,
    Tier::Grandmaster,
    Tier::Challenger,
];

impl Tier {
    /// Returns the ordinal rank, 0 for the lowest division through 9
    /// for the highest.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the display name.
    pub const fn name(self) -> &'static str {
        match self {
            Tier::Iron => "Iron",
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
            Tier::Emerald => "Emerald",
            Tier::Diamond => "Diamond",
            Tier::Master => "Master",
            Tier::Grandmaster => "Grandmaster",
            Tier::Challenger => "Challenger",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
