//! Engine state management.
//!
//! Holds the current roster, engine options, and the RNG for random
//! mode between commands, and writes protocol responses for the
//! `balance` command family.

use std::collections::HashMap;
use std::io::Write;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::partition::PARTITION_COUNT;
use crate::protocol::format::format_split;
use crate::protocol::parser::ModeArg;
use crate::protocol::roster_json::parse_roster;
use crate::roster::Player;
use crate::select::{
    best_split, feasible_splits, random_split, top_splits, BalanceError,
    DEFAULT_RANDOM_RETRIES, DEFAULT_TOP_K,
};

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub roster: Option<Vec<Player>>,
    pub options: HashMap<String, String>,
    rng: SmallRng,
}

impl Engine {
    /// Creates a new engine with no roster.
    pub fn new() -> Self {
        Engine {
            roster: None,
            options: HashMap::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Resets roster state for a new session.
    pub fn new_game(&mut self) {
        self.roster = None;
    }

    /// Sets the current roster from a JSON payload.
    /// Returns an error message on failure, leaving the roster unchanged.
    pub fn set_roster(&mut self, json: &str) -> Result<(), String> {
        match parse_roster(json) {
            Ok(players) => {
                self.roster = Some(players);
                Ok(())
            }
            Err(e) => Err(format!("failed to parse roster: {}", e)),
        }
    }

    /// Sets an engine option. A `Seed` value reseeds the random-mode RNG
    /// so sessions can be reproduced.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        if name == "Seed" {
            if let Some(seed) = value.as_deref().and_then(|v| v.parse::<u64>().ok()) {
                self.rng = SmallRng::seed_from_u64(seed);
            }
        }
        match value {
            Some(v) => {
                self.options.insert(name, v);
            }
            None => {
                self.options.insert(name, String::new());
            }
        }
    }

    /// Returns the configured option count for `balance options`.
    fn top_k(&self) -> usize {
        self.options
            .get("TopK")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_TOP_K)
    }

    /// Returns the configured retry bound for `balance random`.
    fn random_retries(&self) -> u32 {
        self.options
            .get("RandomRetries")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_RANDOM_RETRIES)
    }

    /// Handles the TBI handshake: writes id, options, protocol_version,
    /// and tbiok.
    pub fn handle_tbi<W: Write>(&self, out: &mut W) {
        writeln!(out, "id name riftbalance").unwrap();
        writeln!(out, "id author riftbalance").unwrap();
        writeln!(out, "option name TopK type spin default 3 min 1 max 10").unwrap();
        writeln!(
            out,
            "option name RandomRetries type spin default 50 min 1 max 1000"
        )
        .unwrap();
        writeln!(out, "option name Seed type string default 0").unwrap();
        writeln!(out, "protocol_version 1").unwrap();
        writeln!(out, "tbiok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) {
        writeln!(out, "readyok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `balance` command for all three modes.
    ///
    /// Feasible outcomes produce `info` lines followed by `bestsplit` or
    /// numbered `split` lines; infeasible rosters produce a `nosplit`
    /// line. Engine misuse (no roster set) is a stderr diagnostic only.
    pub fn handle_balance<W: Write>(&mut self, mode: ModeArg, out: &mut W) {
        let players = match &self.roster {
            Some(r) => r,
            None => {
                eprintln!("balance: no roster set");
                return;
            }
        };

        match mode {
            ModeArg::Best => match feasible_splits(players) {
                Ok(splits) => {
                    writeln!(
                        out,
                        "info candidates {} feasible {}",
                        PARTITION_COUNT,
                        splits.len()
                    )
                    .unwrap();
                    match best_split(splits) {
                        Some(split) => {
                            writeln!(out, "bestsplit {}", format_split(&split, players)).unwrap();
                        }
                        None => {
                            writeln!(out, "nosplit {}", BalanceError::NoFeasibleSplit).unwrap();
                        }
                    }
                }
                Err(e) => eprintln!("balance: {}", e),
            },

            ModeArg::Options => match feasible_splits(players) {
                Ok(splits) => {
                    writeln!(
                        out,
                        "info candidates {} feasible {}",
                        PARTITION_COUNT,
                        splits.len()
                    )
                    .unwrap();
                    let top = top_splits(splits, self.top_k());
                    if top.is_empty() {
                        writeln!(out, "nosplit {}", BalanceError::NoFeasibleSplit).unwrap();
                    } else {
                        for (i, split) in top.iter().enumerate() {
                            writeln!(out, "split {} {}", i + 1, format_split(split, players))
                                .unwrap();
                        }
                        writeln!(out, "splitsok {}", top.len()).unwrap();
                    }
                }
                Err(e) => eprintln!("balance: {}", e),
            },

            ModeArg::Random => {
                let retries = self.random_retries();
                match random_split(players, retries, &mut self.rng) {
                    Ok((split, attempts)) => {
                        writeln!(out, "info attempts {}", attempts).unwrap();
                        writeln!(out, "bestsplit {}", format_split(&split, players)).unwrap();
                    }
                    Err(e @ BalanceError::RetriesExhausted(_)) => {
                        writeln!(out, "nosplit {}", e).unwrap();
                    }
                    Err(e) => eprintln!("balance: {}", e),
                }
            }
        }
        out.flush().unwrap();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
