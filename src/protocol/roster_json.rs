//! JSON roster decoding.
//!
//! The `roster` command carries a JSON array of player objects in the
//! shape the surrounding service exchanges (camelCase field names).
//! Decoding validates the boundary contract up front so the engine only
//! ever sees well-formed ten-player rosters.

use serde::Deserialize;
use thiserror::Error;

use crate::partition::ROSTER_SIZE;
use crate::roster::{Player, Position, Tier};

/// Errors that can occur when decoding a roster payload.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("invalid roster JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected exactly 10 players, got {0}")]
    WrongPlayerCount(usize),

    #[error("duplicate summoner name '{0}'")]
    DuplicateSummoner(String),

    #[error("skill level {level} for '{name}' is outside 1-10")]
    SkillOutOfRange { name: String, level: u8 },

    #[error("'{name}' lists {position} as both available and unavailable")]
    PositionBothListed { name: String, position: Position },

    #[error("'{name}' is locked to {position} but also marks it unavailable")]
    LockedPositionForbidden { name: String, position: Position },
}

/// One player object as transmitted over the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlayerSpec {
    pub summoner_name: String,
    pub preferred_position: Position,
    #[serde(default)]
    pub position_locked: bool,
    #[serde(default)]
    pub available_positions: Vec<Position>,
    #[serde(default)]
    pub unavailable_positions: Vec<Position>,
    pub tier: Tier,
    pub skill_level: u8,
}

/// Decodes and validates a JSON roster into player records.
///
/// Player ids are assigned in input order. Positions listed in both
/// preference sets are rejected rather than silently reconciled, as are
/// lock/forbid contradictions on the preferred position; an unlocked
/// player refusing their own preferred position is legal and passes
/// through to the resolver.
pub fn parse_roster(json: &str) -> Result<Vec<Player>, RosterError> {
    let specs: Vec<PlayerSpec> = serde_json::from_str(json)?;
    if specs.len() != ROSTER_SIZE {
        return Err(RosterError::WrongPlayerCount(specs.len()));
    }

    let mut players = Vec::with_capacity(ROSTER_SIZE);
    for (idx, spec) in specs.into_iter().enumerate() {
        if players
            .iter()
            .any(|p: &Player| p.summoner_name == spec.summoner_name)
        {
            return Err(RosterError::DuplicateSummoner(spec.summoner_name));
        }
        if !(1..=10).contains(&spec.skill_level) {
            return Err(RosterError::SkillOutOfRange {
                name: spec.summoner_name,
                level: spec.skill_level,
            });
        }
        for &pos in &spec.available_positions {
            if spec.unavailable_positions.contains(&pos) {
                return Err(RosterError::PositionBothListed {
                    name: spec.summoner_name,
                    position: pos,
                });
            }
        }
        if spec.position_locked
            && spec.unavailable_positions.contains(&spec.preferred_position)
        {
            return Err(RosterError::LockedPositionForbidden {
                name: spec.summoner_name,
                position: spec.preferred_position,
            });
        }

        let mut player = Player::new(
            idx as u32,
            spec.summoner_name,
            spec.preferred_position,
            spec.tier,
            spec.skill_level,
        );
        player.position_locked = spec.position_locked;
        for pos in spec.available_positions {
            player.set_available(pos);
        }
        for pos in spec.unavailable_positions {
            player.set_unavailable(pos);
        }
        players.push(player);
    }
    Ok(players)
}
