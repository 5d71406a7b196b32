//! Partition enumeration for ten-player rosters.
//!
//! Generates the 126 distinct unordered ways to divide ten players into
//! two groups of five, in a fixed lexicographic order so repeated runs
//! are reproducible. Also draws uniform random partitions for the
//! random selection mode.

use rand::Rng;

/// The number of players on one team.
pub const TEAM_SIZE: usize = 5;

/// The number of players in a full roster.
pub const ROSTER_SIZE: usize = 10;

/// The number of distinct unordered 5/5 partitions of ten players:
/// C(10,5) / 2.
pub const PARTITION_COUNT: usize = 126;

/// One unordered division of the roster into two five-player groups.
///
/// Members are roster indices in ascending order within each group.
/// Roster index 0 is always in the blue group, which halves the C(10,5)
/// count to one entry per unordered partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Partition {
    pub blue: [u8; TEAM_SIZE],
    pub red: [u8; TEAM_SIZE],
}

impl Partition {
    /// Builds a partition from the four blue-group companions of player 0.
    ///
    /// `combo` must be strictly ascending indices drawn from 1..=9.
    fn from_combo(combo: [u8; TEAM_SIZE - 1]) -> Partition {
        let mut blue = [0u8; TEAM_SIZE];
        blue[1..].copy_from_slice(&combo);

        let mut red = [0u8; TEAM_SIZE];
        let mut n = 0;
        for idx in 1..ROSTER_SIZE as u8 {
            if !combo.contains(&idx) {
                red[n] = idx;
                n += 1;
            }
        }
        debug_assert_eq!(n, TEAM_SIZE);

        Partition { blue, red }
    }
}

/// Iterates all 126 partitions in lexicographic order over the blue
/// group's membership.
///
/// The sequence is finite and restartable; consumers may stop early.
pub struct PartitionIter {
    combo: [u8; TEAM_SIZE - 1],
    done: bool,
}

impl PartitionIter {
    pub fn new() -> Self {
        PartitionIter {
            combo: [1, 2, 3, 4],
            done: false,
        }
    }
}

impl Default for PartitionIter {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for PartitionIter {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        if self.done {
            return None;
        }
        let current = Partition::from_combo(self.combo);

        // Advance to the next ascending 4-combination of 1..=9.
        // Slot i may hold at most 6 + i so the slots after it still fit.
        let k = self.combo.len();
        let mut i = k;
        while i > 0 {
            i -= 1;
            if self.combo[i] < (ROSTER_SIZE - k + i) as u8 {
                self.combo[i] += 1;
                for j in i + 1..k {
                    self.combo[j] = self.combo[j - 1] + 1;
                }
                return Some(current);
            }
        }
        self.done = true;
        Some(current)
    }
}

/// Collects all partitions in enumeration order.
pub fn all_partitions() -> Vec<Partition> {
    PartitionIter::new().collect()
}

/// Draws one uniform random partition.
///
/// Uses a partial Fisher-Yates shuffle to pick the blue five; groups are
/// sorted ascending afterwards for stable display. Unlike the exhaustive
/// iterator, the blue group is not normalized to contain index 0.
pub fn random_partition(rng: &mut impl Rng) -> Partition {
    let mut indices: [u8; ROSTER_SIZE] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    for i in 0..TEAM_SIZE {
        let j = rng.gen_range(i..ROSTER_SIZE);
        indices.swap(i, j);
    }

    let mut blue = [0u8; TEAM_SIZE];
    let mut red = [0u8; TEAM_SIZE];
    blue.copy_from_slice(&indices[..TEAM_SIZE]);
    red.copy_from_slice(&indices[TEAM_SIZE..]);
    blue.sort_unstable();
    red.sort_unstable();

    Partition { blue, red }
}
