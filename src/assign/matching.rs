//! Bipartite feasibility check for group-to-position assignment.
//!
//! Before enumerating permutations, the resolver asks whether any
//! bijection of the five members onto the five positions honors every
//! hard constraint. The check runs the Kuhn-Munkres assignment over a
//! 0/1 weight matrix; the group is feasible exactly when the optimum
//! seats all five members on allowed positions.

use pathfinding::kuhn_munkres::kuhn_munkres;
use pathfinding::matrix::Matrix;

use crate::roster::{PositionSet, ALL_POSITIONS, POSITION_COUNT};

/// Returns true if a perfect member-to-position assignment exists under
/// the given per-member allowed masks.
pub fn has_perfect_assignment(allowed: &[PositionSet; POSITION_COUNT]) -> bool {
    let weights = Matrix::from_fn(POSITION_COUNT, POSITION_COUNT, |(member, pos)| {
        if allowed[member].contains(ALL_POSITIONS[pos]) {
            1i32
        } else {
            0
        }
    });
    let (total, _) = kuhn_munkres(&weights);
    total == POSITION_COUNT as i32
}
