use std::fmt;

use serde::Serialize;

use crate::player_stats::PlayerStats;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub has_players: bool,
    pub top_passer: Option<PlayerStats>,
    pub top_shooter: Option<PlayerStats>,
    pub top_scorer: Option<PlayerStats>,
}

/// Top passer, most shots and top scorer. Ties go to the earliest line-up entry;
/// shooters and scorers need at least one shot or goal.
pub fn summarize_players(players: &[PlayerStats]) -> PlayerSummary {
    PlayerSummary {
        has_players: !players.is_empty(),
        top_passer: first_max_by(players.iter(), |p| p.passes).cloned(),
        top_shooter: first_max_by(players.iter().filter(|p| p.shots > 0), |p| p.shots).cloned(),
        top_scorer: first_max_by(players.iter().filter(|p| p.goals > 0), |p| p.goals).cloned(),
    }
}

fn first_max_by<'a, I, F>(players: I, key: F) -> Option<&'a PlayerStats>
where
    I: Iterator<Item = &'a PlayerStats>,
    F: Fn(&PlayerStats) -> u32,
{
    let mut best: Option<&PlayerStats> = None;
    for p in players {
        if best.is_none_or(|b| key(p) > key(b)) {
            best = Some(p);
        }
    }
    best
}

impl fmt::Display for PlayerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_players {
            return write!(f, "No player data available.");
        }

        let mut lines = Vec::new();
        if let Some(p) = &self.top_passer {
            // Completion is a bare `0` without passes, otherwise always carries a decimal.
            let completion = if p.passes == 0 {
                "0".to_string()
            } else {
                format!("{:?}", p.pass_completion)
            };
            lines.push(format!(
                "Top passer: {} with {} passes ({}% completion)",
                p.player_name, p.passes, completion
            ));
        }
        if let Some(p) = &self.top_shooter {
            lines.push(format!(
                "Most shots: {} with {} shots (xG: {:?})",
                p.player_name, p.shots, p.xg
            ));
        }
        if let Some(p) = &self.top_scorer {
            lines.push(format!(
                "Top scorer: {} with {} goals from {} shots",
                p.player_name, p.goals, p.shots
            ));
        }

        if lines.is_empty() {
            write!(f, "No significant statistics to highlight.")
        } else {
            write!(f, "{}", lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, passes: u32, shots: u32, goals: u32) -> PlayerStats {
        PlayerStats {
            player_name: name.to_string(),
            position: "Center Forward".to_string(),
            jersey: 9,
            passes,
            successful_passes: passes,
            pass_completion: if passes > 0 { 100.0 } else { 0.0 },
            shots,
            goals,
            xg: 0.0,
        }
    }

    #[test]
    fn ties_go_to_first_entry() {
        let players = vec![player("A", 10, 2, 1), player("B", 10, 2, 1)];
        let summary = summarize_players(&players);
        assert_eq!(summary.top_passer.unwrap().player_name, "A");
        assert_eq!(summary.top_shooter.unwrap().player_name, "A");
        assert_eq!(summary.top_scorer.unwrap().player_name, "A");
    }

    #[test]
    fn quiet_players_render_fallback_lines() {
        assert_eq!(summarize_players(&[]).to_string(), "No player data available.");

        let summary = summarize_players(&[player("Keeper", 0, 0, 0)]);
        assert!(summary.top_shooter.is_none());
        assert_eq!(
            summary.to_string(),
            "Top passer: Keeper with 0 passes (0% completion)"
        );
    }

    #[test]
    fn whole_numbers_keep_their_decimal() {
        let mut striker = player("Striker", 4, 1, 1);
        striker.successful_passes = 2;
        striker.pass_completion = 50.0;
        striker.xg = 1.0;
        let text = summarize_players(&[striker]).to_string();
        assert_eq!(
            text,
            "Top passer: Striker with 4 passes (50.0% completion)\n\
             Most shots: Striker with 1 shots (xG: 1.0)\n\
             Top scorer: Striker with 1 goals from 1 shots"
        );
    }

    #[test]
    fn fractional_values_print_as_rounded() {
        let mut winger = player("Winger", 3, 2, 0);
        winger.successful_passes = 2;
        winger.pass_completion = 66.7;
        winger.xg = 0.78;
        let text = summarize_players(&[winger]).to_string();
        assert!(text.contains("(66.7% completion)"));
        assert!(text.contains("(xG: 0.78)"));
    }
}
