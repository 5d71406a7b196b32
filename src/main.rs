//! Riftbalance -- a team balancing engine implementing the TBI protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout,
//! following the TBI (Team Balancer Interface) convention.

use std::io::{self, BufRead};

use riftbalance::engine::Engine;
use riftbalance::protocol::parser::{parse_command, Command};

/// Runs the main TBI protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Tbi => {
                engine.handle_tbi(&mut out);
            }
            Command::IsReady => {
                engine.handle_isready(&mut out);
            }
            Command::SetOption { name, value } => {
                engine.set_option(name, value);
            }
            Command::NewGame => {
                engine.new_game();
            }
            Command::Roster { json } => {
                if let Err(e) = engine.set_roster(&json) {
                    eprintln!("{}", e);
                }
            }
            Command::Balance { mode } => {
                engine.handle_balance(mode, &mut out);
            }
            Command::Quit => {
                break;
            }
        }
    }
}
