//! Split notation formatting.
//!
//! A split is emitted as one line: each team lists `pos:name` entries
//! in canonical position order joined by commas, the two teams are
//! joined by ` | `, and the balance report follows after ` ; ` as
//! `<avgA> <avgB> <diff> <status>` with one decimal place.

use crate::roster::{Player, ALL_POSITIONS};
use crate::select::{Split, Team};

/// Formats one team as comma-joined `pos:name` entries.
pub fn format_team(team: &Team, players: &[Player]) -> String {
    let entries: Vec<String> = ALL_POSITIONS
        .iter()
        .enumerate()
        .map(|(pos_idx, pos)| {
            let player = &players[team.seats[pos_idx] as usize];
            format!("{}:{}", pos.abbr(), player.summoner_name)
        })
        .collect();
    entries.join(",")
}

/// Formats a complete split with its balance report.
pub fn format_split(split: &Split, players: &[Player]) -> String {
    format!(
        "{} | {} ; {:.1} {:.1} {:.1} {}",
        format_team(&split.blue, players),
        format_team(&split.red, players),
        split.report.strength_a,
        split.report.strength_b,
        split.report.difference,
        split.report.status.label(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Tier;
    use crate::score::evaluate;

    fn players() -> Vec<Player> {
        let names = [
            "Zeus", "Oner", "Faker", "Gumayusi", "Keria", "Kiin", "Canyon", "Chovy", "Peyz",
            "Lehends",
        ];
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                Player::new(
                    i as u32,
                    *name,
                    ALL_POSITIONS[i % 5],
                    Tier::Diamond,
                    7,
                )
            })
            .collect()
    }

    fn identity_split() -> Split {
        let blue = Team {
            seats: [0, 1, 2, 3, 4],
            strength: 66.0,
        };
        let red = Team {
            seats: [5, 6, 7, 8, 9],
            strength: 66.0,
        };
        Split {
            blue,
            red,
            preference_hits: 10,
            report: evaluate(66.0, 66.0),
        }
    }

    #[test]
    fn team_lists_positions_in_canonical_order() {
        let players = players();
        let split = identity_split();
        assert_eq!(
            format_team(&split.blue, &players),
            "top:Zeus,jg:Oner,mid:Faker,adc:Gumayusi,sup:Keria"
        );
    }

    #[test]
    fn split_line_includes_both_teams_and_report() {
        let players = players();
        let split = identity_split();
        assert_eq!(
            format_split(&split, &players),
            "top:Zeus,jg:Oner,mid:Faker,adc:Gumayusi,sup:Keria | \
             top:Kiin,jg:Canyon,mid:Chovy,adc:Peyz,sup:Lehends ; \
             66.0 66.0 0.0 balanced"
        );
    }

    #[test]
    fn seats_map_positions_not_input_order() {
        let players = players();
        let mut split = identity_split();
        // Swap top and mid on blue.
        split.blue.seats = [2, 1, 0, 3, 4];
        let line = format_team(&split.blue, &players);
        assert!(line.starts_with("top:Faker,"));
        assert!(line.contains("mid:Zeus"));
    }
}
