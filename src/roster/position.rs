//! Position definitions and position sets.
//!
//! The five fixed positions are enumerated in canonical display order.
//! `PositionSet` is a 5-bit set used for the per-player available and
//! unavailable position lists.

use serde::{Deserialize, Serialize};

/// The number of positions on a team.
pub const POSITION_COUNT: usize = 5;

/// One of the five fixed team positions.
///
/// Variants are in canonical display order. The `#[repr(u8)]` attribute
/// enables use as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Position {
    Top = 0,
    Jungle = 1,
    Mid = 2,
    Adc = 3,
    Support = 4,
}

/// All position variants in canonical display order.
pub const ALL_POSITIONS: [Position; POSITION_COUNT] = [
    Position::Top,
    Position::Jungle,
    Position::Mid,
    Position::Adc,
    Position::Support,
];

impl Position {
    /// Returns the short abbreviation used in split notation.
    pub const fn abbr(self) -> &'static str {
        match self {
            Position::Top => "top",
            Position::Jungle => "jg",
            Position::Mid => "mid",
            Position::Adc => "adc",
            Position::Support => "sup",
        }
    }

    /// Returns the full display name.
    pub const fn name(self) -> &'static str {
        match self {
            Position::Top => "Top",
            Position::Jungle => "Jungle",
            Position::Mid => "Mid",
            Position::Adc => "ADC",
            Position::Support => "Support",
        }
    }

    /// Parses a position from its split-notation abbreviation.
    pub fn from_abbr(s: &str) -> Option<Position> {
        match s {
            "top" => Some(Position::Top),
            "jg" => Some(Position::Jungle),
            "mid" => Some(Position::Mid),
            "adc" => Some(Position::Adc),
            "sup" => Some(Position::Support),
            _ => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of positions, stored as a 5-bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PositionSet(u8);

impl PositionSet {
    /// The empty set.
    pub const fn empty() -> Self {
        PositionSet(0)
    }

    /// The set containing all five positions.
    pub const fn all() -> Self {
        PositionSet((1 << POSITION_COUNT) - 1)
    }

    /// The set containing a single position.
    pub const fn single(pos: Position) -> Self {
        PositionSet(1 << pos as u8)
    }

    /// Adds a position to the set.
    pub fn insert(&mut self, pos: Position) {
        self.0 |= 1 << pos as u8;
    }

    /// Removes a position from the set.
    pub fn remove(&mut self, pos: Position) {
        self.0 &= !(1 << pos as u8);
    }

    /// Returns true if the set contains the position.
    pub const fn contains(self, pos: Position) -> bool {
        self.0 & (1 << pos as u8) != 0
    }

    /// Returns the number of positions in the set.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the set difference `self \ other`.
    pub const fn without(self, other: PositionSet) -> PositionSet {
        PositionSet(self.0 & !other.0)
    }

    /// Returns the set intersection.
    pub const fn intersection(self, other: PositionSet) -> PositionSet {
        PositionSet(self.0 & other.0)
    }

    /// Iterates the contained positions in canonical order.
    pub fn iter(self) -> impl Iterator<Item = Position> {
        ALL_POSITIONS.into_iter().filter(move |&p| self.contains(p))
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = PositionSet::empty();
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}
