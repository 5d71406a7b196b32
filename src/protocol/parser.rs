//! TBI command parser.
//!
//! Parses incoming TBI protocol commands from raw text into structured
//! `Command` variants that the engine main loop can dispatch on.

/// The selection mode named in a `balance` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Best,
    Options,
    Random,
}

/// A parsed server-to-engine TBI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initialize the TBI protocol handshake.
    Tbi,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Reset engine state for a new session.
    NewGame,

    /// Set the ten-player roster from a JSON payload.
    Roster { json: String },

    /// Produce a split under the named mode.
    Balance { mode: ModeArg },

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to
/// stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "tbi" => Some(Command::Tbi),
        "isready" => Some(Command::IsReady),
        "newgame" => Some(Command::NewGame),
        "quit" => Some(Command::Quit),

        "setoption" => parse_setoption(&tokens),
        "roster" => parse_roster_command(trimmed),
        "balance" => parse_balance(&tokens),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        eprintln!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                eprintln!("malformed setoption: empty name");
                return None;
            }
            let name = name_parts.join(" ");
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name, value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Parses `roster <json>`, keeping the payload verbatim since JSON may
/// contain any whitespace.
fn parse_roster_command(trimmed: &str) -> Option<Command> {
    let json = trimmed["roster".len()..].trim();
    if json.is_empty() {
        eprintln!("malformed roster: expected 'roster <json>'");
        return None;
    }
    Some(Command::Roster {
        json: json.to_string(),
    })
}

/// Parses `balance <best|options|random>`.
fn parse_balance(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        eprintln!("malformed balance: expected 'balance <best|options|random>'");
        return None;
    }
    let mode = match tokens[1] {
        "best" => ModeArg::Best,
        "options" => ModeArg::Options,
        "random" => ModeArg::Random,
        other => {
            eprintln!("unknown balance mode: {}", other);
            return None;
        }
    };
    Some(Command::Balance { mode })
}
