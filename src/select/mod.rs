//! Split selection over the enumeration/resolution pipeline.
//!
//! Runs the shared pipeline -- enumerate partitions, resolve roles per
//! group, evaluate balance -- and applies one of three selection
//! policies: single best, top-K ranked options, or constrained random.
//! Candidate evaluation fans out over rayon; the final ranking is a
//! deterministic sort keyed on enumeration order, so parallelism is
//! unobservable.

use std::cmp::Ordering;
use std::collections::HashSet;

use rand::Rng;
use rayon::prelude::*;
use thiserror::Error;

use crate::assign::{resolve, RoleAssignment};
use crate::partition::{all_partitions, random_partition, Partition, ROSTER_SIZE, TEAM_SIZE};
use crate::roster::{Player, PlayerId, POSITION_COUNT};
use crate::score::{evaluate, team_strength, BalanceReport};

/// Default number of options returned by [`Mode::TopK`] callers.
pub const DEFAULT_TOP_K: usize = 3;

/// Default retry bound for [`Mode::Random`].
pub const DEFAULT_RANDOM_RETRIES: u32 = 50;

/// The selection policy for one balancing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The single split with the smallest strength gap.
    Best,
    /// The K best splits in ascending gap order.
    TopK(usize),
    /// A uniformly drawn feasible split, ignoring balance ranking.
    Random(u32),
}

/// Errors surfaced by a balancing call.
///
/// Malformed input and genuine infeasibility are distinct variants so
/// callers can tell them apart.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BalanceError {
    #[error("expected exactly 10 players, got {0}")]
    WrongPlayerCount(usize),

    #[error("duplicate player id {0}")]
    DuplicatePlayer(PlayerId),

    #[error("no feasible split exists for this roster")]
    NoFeasibleSplit,

    #[error("no feasible split found within {0} random draws")]
    RetriesExhausted(u32),
}

/// One five-player team with its role assignment.
///
/// `seats[p]` is the roster index of the player on `ALL_POSITIONS[p]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Team {
    pub seats: [u8; POSITION_COUNT],
    pub strength: f64,
}

/// A complete division of the roster into two role-complete teams.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split {
    pub blue: Team,
    pub red: Team,
    /// Combined preference hits across both teams.
    pub preference_hits: u8,
    pub report: BalanceReport,
}

/// An ordered sequence of splits returned to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitSet {
    pub mode: Mode,
    pub splits: Vec<Split>,
}

/// Balances a ten-player roster under the given mode.
///
/// This is the engine's single entry point: validation, enumeration,
/// resolution, evaluation, and selection in one synchronous call. The
/// RNG is only consulted in random mode.
pub fn balance(
    players: &[Player],
    mode: Mode,
    rng: &mut impl Rng,
) -> Result<SplitSet, BalanceError> {
    let splits = match mode {
        Mode::Best => {
            let feasible = feasible_splits(players)?;
            vec![best_split(feasible).ok_or(BalanceError::NoFeasibleSplit)?]
        }
        Mode::TopK(k) => {
            let feasible = feasible_splits(players)?;
            let top = top_splits(feasible, k);
            if top.is_empty() {
                return Err(BalanceError::NoFeasibleSplit);
            }
            top
        }
        Mode::Random(retries) => {
            let (split, _) = random_split(players, retries, rng)?;
            vec![split]
        }
    };
    Ok(SplitSet { mode, splits })
}

/// Validates the roster and evaluates every feasible candidate split in
/// partition-enumeration order.
///
/// Returns an empty vector when the roster is valid but no partition
/// admits role assignments for both groups.
pub fn feasible_splits(players: &[Player]) -> Result<Vec<Split>, BalanceError> {
    validate_roster(players)?;

    let splits: Vec<Option<Split>> = all_partitions()
        .par_iter()
        .map(|partition| try_split(players, partition))
        .collect();
    Ok(splits.into_iter().flatten().collect())
}

/// Returns the feasible split with the smallest gap; ties prefer more
/// combined preference hits, then earliest enumeration order.
pub fn best_split(feasible: Vec<Split>) -> Option<Split> {
    let mut best: Option<Split> = None;
    for split in feasible {
        let better = match &best {
            None => true,
            Some(incumbent) => match split
                .report
                .difference
                .total_cmp(&incumbent.report.difference)
            {
                Ordering::Less => true,
                Ordering::Equal => split.preference_hits > incumbent.preference_hits,
                Ordering::Greater => false,
            },
        };
        if better {
            best = Some(split);
        }
    }
    best
}

/// Returns up to `k` feasible splits in ascending gap order.
///
/// The sort is stable over enumeration order, so equal-gap splits keep
/// a deterministic ranking; partition identity makes duplicates
/// impossible by construction.
pub fn top_splits(mut feasible: Vec<Split>, k: usize) -> Vec<Split> {
    feasible.sort_by(|a, b| {
        a.report
            .difference
            .total_cmp(&b.report.difference)
            .then(b.preference_hits.cmp(&a.preference_hits))
    });
    feasible.truncate(k);
    feasible
}

/// Draws random partitions until one is feasible, up to the retry
/// bound. Returns the split and the number of draws used.
///
/// Unlike exhaustive enumeration, sampling cannot guarantee hitting an
/// existing feasible split, so exhausting the bound is a caller-visible
/// failure.
pub fn random_split(
    players: &[Player],
    retries: u32,
    rng: &mut impl Rng,
) -> Result<(Split, u32), BalanceError> {
    validate_roster(players)?;

    for attempt in 1..=retries {
        let partition = random_partition(rng);
        if let Some(split) = try_split(players, &partition) {
            return Ok((split, attempt));
        }
    }
    Err(BalanceError::RetriesExhausted(retries))
}

/// Checks the boundary contract: exactly ten players, distinct ids.
fn validate_roster(players: &[Player]) -> Result<(), BalanceError> {
    if players.len() != ROSTER_SIZE {
        return Err(BalanceError::WrongPlayerCount(players.len()));
    }
    let mut seen = HashSet::with_capacity(ROSTER_SIZE);
    for player in players {
        if !seen.insert(player.id) {
            return Err(BalanceError::DuplicatePlayer(player.id));
        }
    }
    Ok(())
}

/// Resolves both groups of one partition into a split, or None if
/// either group is infeasible.
fn try_split(players: &[Player], partition: &Partition) -> Option<Split> {
    let blue_group = group_refs(players, &partition.blue);
    let red_group = group_refs(players, &partition.red);

    let blue_roles = resolve(blue_group).ok()?;
    let red_roles = resolve(red_group).ok()?;

    let blue = build_team(&partition.blue, &blue_roles, players);
    let red = build_team(&partition.red, &red_roles, players);
    let report = evaluate(blue.strength, red.strength);

    Some(Split {
        blue,
        red,
        preference_hits: blue_roles.preference_hits + red_roles.preference_hits,
        report,
    })
}

fn group_refs<'a>(players: &'a [Player], members: &[u8; TEAM_SIZE]) -> [&'a Player; TEAM_SIZE] {
    members.map(|idx| &players[idx as usize])
}

fn build_team(members: &[u8; TEAM_SIZE], roles: &RoleAssignment, players: &[Player]) -> Team {
    let seats = roles.seats.map(|member| members[member as usize]);
    let strength = team_strength(seats.iter().map(|&idx| &players[idx as usize]));
    Team { seats, strength }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{Position, Tier, ALL_POSITIONS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn flexible_roster() -> Vec<Player> {
        // Two players per preferred position, uniform skill.
        ALL_POSITIONS
            .iter()
            .flat_map(|&pos| [pos, pos])
            .enumerate()
            .map(|(i, pos)| Player::new(i as u32, format!("p{}", i), pos, Tier::Gold, 5))
            .collect()
    }

    fn assert_valid_split(split: &Split, players: &[Player]) {
        let mut seen = [false; ROSTER_SIZE];
        for team in [&split.blue, &split.red] {
            for (pos_idx, &idx) in team.seats.iter().enumerate() {
                assert!(!seen[idx as usize], "player seated twice");
                seen[idx as usize] = true;
                let player = &players[idx as usize];
                let pos = ALL_POSITIONS[pos_idx];
                assert!(
                    !player.unavailable_positions().contains(pos),
                    "{} seated on forbidden {}",
                    player.summoner_name,
                    pos
                );
                if player.position_locked {
                    assert_eq!(pos, player.preferred_position);
                }
            }
        }
        assert!(seen.iter().all(|&s| s), "split does not cover the roster");
    }

    #[test]
    fn symmetric_roster_balances_to_zero() {
        let players = flexible_roster();
        let mut rng = StdRng::seed_from_u64(0);
        let set = balance(&players, Mode::Best, &mut rng).unwrap();
        assert_eq!(set.splits.len(), 1);
        let split = &set.splits[0];
        assert_valid_split(split, &players);
        assert_eq!(split.report.difference, 0.0);
        assert_eq!(split.report.status.label(), "balanced");
    }

    #[test]
    fn best_mode_is_optimal() {
        let mut players = flexible_roster();
        players[0].tier = Tier::Challenger;
        players[3].tier = Tier::Iron;
        players[7].tier = Tier::Diamond;

        let feasible = feasible_splits(&players).unwrap();
        let best = best_split(feasible.clone()).unwrap();
        for split in &feasible {
            assert!(best.report.difference <= split.report.difference);
        }
    }

    #[test]
    fn best_mode_is_deterministic() {
        let mut players = flexible_roster();
        players[2].tier = Tier::Master;
        players[9].skill_level = 9;

        let mut rng = StdRng::seed_from_u64(0);
        let a = balance(&players, Mode::Best, &mut rng).unwrap();
        let b = balance(&players, Mode::Best, &mut rng).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn locked_players_keep_their_position_in_every_feasible_split() {
        let mut players = flexible_roster();
        players[0].position_locked = true;
        players[5].position_locked = true;
        players[8].set_unavailable(Position::Top);

        for split in feasible_splits(&players).unwrap() {
            assert_valid_split(&split, &players);
        }
    }

    #[test]
    fn top_k_is_sorted_and_bounded() {
        let mut players = flexible_roster();
        players[1].tier = Tier::Platinum;
        players[6].tier = Tier::Bronze;

        let mut rng = StdRng::seed_from_u64(0);
        let set = balance(&players, Mode::TopK(DEFAULT_TOP_K), &mut rng).unwrap();
        assert!(set.splits.len() <= DEFAULT_TOP_K);
        assert!(!set.splits.is_empty());
        for pair in set.splits.windows(2) {
            assert!(pair[0].report.difference <= pair[1].report.difference);
        }
        for split in &set.splits {
            assert_valid_split(split, &players);
        }
    }

    #[test]
    fn top_k_has_no_duplicate_partitions() {
        let players = flexible_roster();
        let mut rng = StdRng::seed_from_u64(0);
        let set = balance(&players, Mode::TopK(DEFAULT_TOP_K), &mut rng).unwrap();

        let mut memberships: Vec<[bool; ROSTER_SIZE]> = Vec::new();
        for split in &set.splits {
            let mut blue_members = [false; ROSTER_SIZE];
            for &idx in &split.blue.seats {
                blue_members[idx as usize] = true;
            }
            // Treat a split and its mirror as the same partition.
            let canonical = if blue_members[0] {
                blue_members
            } else {
                blue_members.map(|b| !b)
            };
            assert!(!memberships.contains(&canonical), "duplicate partition");
            memberships.push(canonical);
        }
    }

    #[test]
    fn random_mode_returns_a_valid_split() {
        let players = flexible_roster();
        let mut rng = StdRng::seed_from_u64(42);
        let set = balance(&players, Mode::Random(DEFAULT_RANDOM_RETRIES), &mut rng).unwrap();
        assert_eq!(set.splits.len(), 1);
        assert_valid_split(&set.splits[0], &players);
    }

    #[test]
    fn random_mode_respects_locks() {
        let mut players = flexible_roster();
        players[4].position_locked = true;
        players[9].position_locked = true;

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let set = balance(&players, Mode::Random(DEFAULT_RANDOM_RETRIES), &mut rng).unwrap();
            assert_valid_split(&set.splits[0], &players);
        }
    }

    #[test]
    fn three_locks_on_one_position_fail_in_every_mode() {
        let mut players = flexible_roster();
        // Three players locked to Top: some team would need two Tops.
        for idx in [0, 1, 2] {
            players[idx].preferred_position = Position::Top;
            players[idx].position_locked = true;
        }

        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            balance(&players, Mode::Best, &mut rng),
            Err(BalanceError::NoFeasibleSplit)
        );
        assert_eq!(
            balance(&players, Mode::TopK(3), &mut rng),
            Err(BalanceError::NoFeasibleSplit)
        );
        assert_eq!(
            balance(&players, Mode::Random(DEFAULT_RANDOM_RETRIES), &mut rng),
            Err(BalanceError::RetriesExhausted(DEFAULT_RANDOM_RETRIES))
        );
    }

    #[test]
    fn contradictory_unlocked_preference_still_resolves() {
        let mut players = flexible_roster();
        // Prefers Mid, refuses Mid, not locked.
        let pref = players[4].preferred_position;
        players[4].set_unavailable(pref);

        let mut rng = StdRng::seed_from_u64(0);
        let set = balance(&players, Mode::Best, &mut rng).unwrap();
        assert_valid_split(&set.splits[0], &players);
    }

    #[test]
    fn wrong_player_count_is_rejected_before_enumeration() {
        let players = flexible_roster();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            balance(&players[..9], Mode::Best, &mut rng),
            Err(BalanceError::WrongPlayerCount(9))
        );
        let eleven: Vec<Player> = players
            .iter()
            .cloned()
            .chain([Player::new(10, "extra", Position::Mid, Tier::Gold, 5)])
            .collect();
        assert_eq!(
            balance(&eleven, Mode::Best, &mut rng),
            Err(BalanceError::WrongPlayerCount(11))
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut players = flexible_roster();
        players[9].id = players[3].id;
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            balance(&players, Mode::Best, &mut rng),
            Err(BalanceError::DuplicatePlayer(players[3].id))
        );
    }

    #[test]
    fn random_mode_is_reproducible_with_same_seed() {
        let players = flexible_roster();
        let a = balance(
            &players,
            Mode::Random(DEFAULT_RANDOM_RETRIES),
            &mut StdRng::seed_from_u64(99),
        )
        .unwrap();
        let b = balance(
            &players,
            Mode::Random(DEFAULT_RANDOM_RETRIES),
            &mut StdRng::seed_from_u64(99),
        )
        .unwrap();
        assert_eq!(a, b);
    }
}
