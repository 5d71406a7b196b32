//! Role assignment for five-player groups.
//!
//! Determines a bijection of five players onto the five positions under
//! the hard constraints (locks and forbidden positions), then ranks the
//! surviving permutations by soft preference satisfaction. The position
//! set is fixed at five, so exhausting all 120 permutations is cheaper
//! than a general optimal-matching algorithm; a bipartite feasibility
//! check runs first so hopeless groups fail fast.

pub mod matching;

use std::cmp::Ordering;

use thiserror::Error;

use crate::roster::{Player, Position, PositionSet, ALL_POSITIONS, POSITION_COUNT};
use crate::score::strength;

/// Conventional weight of each position when judging how strength is
/// spread across a lineup, indexed in canonical position order
/// (top, jungle, mid, adc, support). Carry positions weigh more.
pub const ROLE_WEIGHTS: [f64; POSITION_COUNT] = [1.0, 1.05, 1.1, 1.1, 0.85];

/// Why a five-player group admits no valid role assignment.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InfeasibleReason {
    /// Two locked members claim the same position, or a locked member's
    /// preferred position is also in their own forbidden set.
    #[error("conflicting lock constraints on {0}")]
    LockConflict(Position),

    /// The lock and forbid constraints leave no bijection at all.
    #[error("no valid position assignment exists for this group")]
    NoPerfectMatching,
}

/// A bijection of group members onto positions.
///
/// `seats[p]` is the group-member index (0..5) assigned to
/// `ALL_POSITIONS[p]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleAssignment {
    pub seats: [u8; POSITION_COUNT],
    /// How many members received their preferred position or one from
    /// their available set.
    pub preference_hits: u8,
}

/// Resolves the best valid role assignment for a group of five.
///
/// Hard rules: locked members receive exactly their preferred position
/// and nobody receives a forbidden one. Among valid bijections, the
/// preference-hit count is maximized; ties prefer the lineup whose
/// role-weighted strength contributions have the least variance, then
/// the first bijection in enumeration order.
pub fn resolve(group: [&Player; POSITION_COUNT]) -> Result<RoleAssignment, InfeasibleReason> {
    let mut claimed = PositionSet::empty();
    for player in group {
        if player.position_locked {
            let pos = player.preferred_position;
            if player.unavailable_positions().contains(pos) || claimed.contains(pos) {
                return Err(InfeasibleReason::LockConflict(pos));
            }
            claimed.insert(pos);
        }
    }

    let allowed = group.map(|p| p.allowed_positions());
    if !matching::has_perfect_assignment(&allowed) {
        return Err(InfeasibleReason::NoPerfectMatching);
    }

    let strengths = group.map(strength);
    let mut seats = [0u8; POSITION_COUNT];
    let mut used = [false; POSITION_COUNT];
    let mut best: Option<(RoleAssignment, f64)> = None;
    fill_seat(0, &group, &allowed, &strengths, &mut seats, &mut used, &mut best);

    best.map(|(assignment, _)| assignment)
        .ok_or(InfeasibleReason::NoPerfectMatching)
}

/// Depth-first enumeration over positions, trying each unused member in
/// index order so the permutation order is deterministic.
fn fill_seat(
    pos_idx: usize,
    group: &[&Player; POSITION_COUNT],
    allowed: &[PositionSet; POSITION_COUNT],
    strengths: &[f64; POSITION_COUNT],
    seats: &mut [u8; POSITION_COUNT],
    used: &mut [bool; POSITION_COUNT],
    best: &mut Option<(RoleAssignment, f64)>,
) {
    if pos_idx == POSITION_COUNT {
        consider(group, strengths, seats, best);
        return;
    }
    let pos = ALL_POSITIONS[pos_idx];
    for member in 0..POSITION_COUNT {
        if used[member] || !allowed[member].contains(pos) {
            continue;
        }
        used[member] = true;
        seats[pos_idx] = member as u8;
        fill_seat(pos_idx + 1, group, allowed, strengths, seats, used, best);
        used[member] = false;
    }
}

/// Scores one complete bijection and keeps it if it beats the incumbent.
fn consider(
    group: &[&Player; POSITION_COUNT],
    strengths: &[f64; POSITION_COUNT],
    seats: &[u8; POSITION_COUNT],
    best: &mut Option<(RoleAssignment, f64)>,
) {
    let mut hits = 0u8;
    for (pos_idx, &member) in seats.iter().enumerate() {
        if group[member as usize].is_preference_hit(ALL_POSITIONS[pos_idx]) {
            hits += 1;
        }
    }
    let variance = contribution_variance(strengths, seats);

    let better = match best {
        None => true,
        Some((incumbent, incumbent_var)) => {
            hits > incumbent.preference_hits
                || (hits == incumbent.preference_hits
                    && variance.total_cmp(incumbent_var) == Ordering::Less)
        }
    };
    if better {
        *best = Some((
            RoleAssignment {
                seats: *seats,
                preference_hits: hits,
            },
            variance,
        ));
    }
}

/// Population variance of the role-weighted strength contributions.
fn contribution_variance(
    strengths: &[f64; POSITION_COUNT],
    seats: &[u8; POSITION_COUNT],
) -> f64 {
    let mut contributions = [0.0; POSITION_COUNT];
    for (pos_idx, &member) in seats.iter().enumerate() {
        contributions[pos_idx] = ROLE_WEIGHTS[pos_idx] * strengths[member as usize];
    }
    let mean = contributions.iter().sum::<f64>() / POSITION_COUNT as f64;
    contributions
        .iter()
        .map(|c| (c - mean) * (c - mean))
        .sum::<f64>()
        / POSITION_COUNT as f64
}
