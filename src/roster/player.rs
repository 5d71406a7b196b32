//! Player records and positional preferences.
//!
//! A player carries one preferred position, an optional hard lock on it,
//! and two disjoint preference sets: positions they are additionally
//! willing to play and positions they refuse. The sets stay disjoint by
//! construction -- marking a position available removes it from the
//! unavailable set and vice versa.

use super::position::{Position, PositionSet};
use super::tier::Tier;

/// Identifies a player within a roster.
pub type PlayerId = u32;

/// A player eligible for team assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub summoner_name: String,
    pub preferred_position: Position,
    pub position_locked: bool,
    pub tier: Tier,
    /// Finer-grained 1-10 rating within the tier.
    pub skill_level: u8,
    available: PositionSet,
    unavailable: PositionSet,
}

impl Player {
    /// Creates an unlocked player with empty preference sets.
    pub fn new(
        id: PlayerId,
        summoner_name: impl Into<String>,
        preferred_position: Position,
        tier: Tier,
        skill_level: u8,
    ) -> Self {
        Player {
            id,
            summoner_name: summoner_name.into(),
            preferred_position,
            position_locked: false,
            tier,
            skill_level,
            available: PositionSet::empty(),
            unavailable: PositionSet::empty(),
        }
    }

    /// Locks the player to their preferred position.
    pub fn locked(mut self) -> Self {
        self.position_locked = true;
        self
    }

    /// Marks a position as available, consuming self for chaining.
    pub fn plays(mut self, pos: Position) -> Self {
        self.set_available(pos);
        self
    }

    /// Marks a position as unavailable, consuming self for chaining.
    pub fn refuses(mut self, pos: Position) -> Self {
        self.set_unavailable(pos);
        self
    }

    /// Marks a position as available, removing it from the unavailable set.
    pub fn set_available(&mut self, pos: Position) {
        self.unavailable.remove(pos);
        self.available.insert(pos);
    }

    /// Marks a position as unavailable, removing it from the available set.
    pub fn set_unavailable(&mut self, pos: Position) {
        self.available.remove(pos);
        self.unavailable.insert(pos);
    }

    /// Drops a position from both preference sets.
    pub fn clear_position(&mut self, pos: Position) {
        self.available.remove(pos);
        self.unavailable.remove(pos);
    }

    /// Returns the positions the player is additionally willing to play.
    pub fn available_positions(&self) -> PositionSet {
        self.available
    }

    /// Returns the positions forbidden for the player.
    pub fn unavailable_positions(&self) -> PositionSet {
        self.unavailable
    }

    /// Returns the positions this player may be assigned under the hard
    /// constraints.
    ///
    /// A locked player may only take their preferred position; if that
    /// position is also marked unavailable the mask is empty, which the
    /// resolver reports as a lock conflict. An unlocked player may take
    /// anything outside the unavailable set.
    pub fn allowed_positions(&self) -> PositionSet {
        if self.position_locked {
            if self.unavailable.contains(self.preferred_position) {
                PositionSet::empty()
            } else {
                PositionSet::single(self.preferred_position)
            }
        } else {
            PositionSet::all().without(self.unavailable)
        }
    }

    /// Returns true if assigning `pos` satisfies a soft preference:
    /// the preferred position or any explicitly available one.
    pub fn is_preference_hit(&self, pos: Position) -> bool {
        pos == self.preferred_position || self.available.contains(pos)
    }
}
