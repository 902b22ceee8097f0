use serde::Serialize;

use crate::aggregation::select_backend;
use crate::config::AnalyzerConfig;
use crate::density::{DensityEstimate, player_density, team_shot_density};
use crate::error::AnalysisError;
use crate::events::{Event, parse_events_json};
use crate::match_details::{MatchDetails, extract_match_details};
use crate::player_stats::PlayerStats;
use crate::shot_map::{ShotMap, build_shot_map};
use crate::summary::summarize_players;
use crate::team_stats::TeamStats;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchAnalysis {
    pub match_details: MatchDetails,
    pub match_stats: TeamStats,
    pub home_player_stats: Vec<PlayerStats>,
    pub away_player_stats: Vec<PlayerStats>,
    pub home_summary: String,
    pub away_summary: String,
    pub home_shot_map: ShotMap,
    pub away_shot_map: ShotMap,
    pub home_shot_density: DensityEstimate,
    pub away_shot_density: DensityEstimate,
    pub player_name: Option<String>,
    pub player_team: Option<String>,
    pub player_density: Option<DensityEstimate>,
}

/// Parse and analyze one match. A load failure stops before any aggregation runs.
pub fn analyze_match_json(
    raw: &str,
    focus_player: Option<&str>,
    config: &AnalyzerConfig,
) -> Result<MatchAnalysis, AnalysisError> {
    let events = parse_events_json(raw)?;
    Ok(analyze_events(&events, focus_player, config))
}

pub fn analyze_events(
    events: &[Event],
    focus_player: Option<&str>,
    config: &AnalyzerConfig,
) -> MatchAnalysis {
    let match_details = extract_match_details(events);
    let home_team = match_details.home_team.as_str();
    let away_team = match_details.away_team.as_str();

    let backend = select_backend(events.len(), config);
    tracing::info!(
        events = events.len(),
        backend = backend.name(),
        home = home_team,
        away = away_team,
        "analyzing match"
    );

    let match_stats = backend.team_stats(events, home_team, away_team);
    let home_player_stats = backend.player_stats(events, home_team);
    let away_player_stats = backend.player_stats(events, away_team);

    let home_summary = summarize_players(&home_player_stats).to_string();
    let away_summary = summarize_players(&away_player_stats).to_string();
    let home_shot_map = build_shot_map(events, home_team);
    let away_shot_map = build_shot_map(events, away_team);
    let home_shot_density = team_shot_density(events, home_team);
    let away_shot_density = team_shot_density(events, away_team);

    let focus_player = focus_player.map(str::trim).filter(|p| !p.is_empty());
    let player_team = focus_player.and_then(|player| {
        if on_roster(&home_player_stats, player) {
            Some(home_team)
        } else if on_roster(&away_player_stats, player) {
            Some(away_team)
        } else {
            tracing::warn!(player, "focus player is not in either starting line-up");
            None
        }
    });
    let density = match (focus_player, player_team) {
        (Some(player), Some(team)) => Some(player_density(events, player, team)),
        _ => None,
    };
    let player_team = player_team.map(str::to_string);

    MatchAnalysis {
        match_details,
        match_stats,
        home_player_stats,
        away_player_stats,
        home_summary,
        away_summary,
        home_shot_map,
        away_shot_map,
        home_shot_density,
        away_shot_density,
        player_name: focus_player.map(str::to_string),
        player_team,
        player_density: density,
    }
}

fn on_roster(players: &[PlayerStats], name: &str) -> bool {
    players.iter().any(|p| p.player_name == name)
}
