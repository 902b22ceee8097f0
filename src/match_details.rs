use serde::Serialize;

use crate::events::{Event, EventKind};

pub const PLACEHOLDER_HOME: &str = "Team A";
pub const PLACEHOLDER_AWAY: &str = "Team B";
pub const UNKNOWN_FORMATION: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchDetails {
    pub home_team: String,
    pub away_team: String,
    pub home_formation: String,
    pub away_formation: String,
}

/// Resolve the two sides and their starting formations.
///
/// Team names are taken in first-seen order. More than two names keeps the first
/// two; fewer than two falls back to both placeholders.
pub fn extract_match_details(events: &[Event]) -> MatchDetails {
    let mut teams: Vec<&str> = Vec::new();
    for event in events {
        if let Some(team) = event.team.as_deref() {
            if !teams.contains(&team) {
                teams.push(team);
            }
        }
    }

    let (home_team, away_team) = match teams.as_slice() {
        [home, away, ..] => (home.to_string(), away.to_string()),
        _ => (PLACEHOLDER_HOME.to_string(), PLACEHOLDER_AWAY.to_string()),
    };
    if teams.len() != 2 {
        tracing::debug!(found = teams.len(), %home_team, %away_team, "ambiguous team set");
    }

    let mut home_formation: Option<String> = None;
    let mut away_formation: Option<String> = None;
    for event in events {
        if event.kind != EventKind::StartingXi {
            continue;
        }
        let Some(formation) = event.tactics.as_ref().and_then(|t| t.formation.as_ref()) else {
            continue;
        };
        if home_formation.is_none() && event.team_is(&home_team) {
            home_formation = Some(formation.clone());
        } else if away_formation.is_none() && event.team_is(&away_team) {
            away_formation = Some(formation.clone());
        }
        if home_formation.is_some() && away_formation.is_some() {
            break;
        }
    }

    MatchDetails {
        home_team,
        away_team,
        home_formation: home_formation.unwrap_or_else(|| UNKNOWN_FORMATION.to_string()),
        away_formation: away_formation.unwrap_or_else(|| UNKNOWN_FORMATION.to_string()),
    }
}
