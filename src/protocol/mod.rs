//! TBI protocol handling.
//!
//! This module implements parsing and serialization for the TBI (Team
//! Balancer Interface) protocol: JSON roster decoding, split notation
//! formatting, and the command parser for the main loop.

pub mod format;
pub mod parser;
pub mod roster_json;

pub use format::{format_split, format_team};
pub use parser::{parse_command, Command, ModeArg};
pub use roster_json::{parse_roster, PlayerSpec, RosterError};
