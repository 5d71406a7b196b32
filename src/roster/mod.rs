//! Roster data model.
//!
//! Contains the core data structures for positions, position sets,
//! tiers, and player records.

pub mod player;
pub mod position;
pub mod tier;

pub use player::{Player, PlayerId};
pub use position::{Position, PositionSet, ALL_POSITIONS, POSITION_COUNT};
pub use tier::{Tier, ALL_TIERS, TIER_COUNT};
