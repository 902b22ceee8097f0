use serde::Serialize;

use crate::events::{Event, EventKind};

const BASE_MARKER_SIZE: f64 = 100.0;
const MARKER_SIZE_PER_XG: f64 = 900.0;
const LABEL_MIN_XG: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotMarker {
    pub x: f64,
    pub y: f64,
    pub xg: f64,
    pub is_goal: bool,
    pub marker_size: f64,
    pub show_label: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotMap {
    pub team: String,
    pub shots: Vec<ShotMarker>,
    pub total_shots: usize,
    pub goals: usize,
}

/// Located shots of one team, in stream order.
pub fn build_shot_map(events: &[Event], team: &str) -> ShotMap {
    let shots: Vec<ShotMarker> = events
        .iter()
        .filter(|e| e.kind == EventKind::Shot && e.team_is(team))
        .filter_map(|e| {
            let loc = e.location?;
            let xg = e.shot_xg();
            Some(ShotMarker {
                x: loc.x,
                y: loc.y,
                xg,
                is_goal: e.shot_is_goal(),
                marker_size: BASE_MARKER_SIZE + xg * MARKER_SIZE_PER_XG,
                show_label: xg > LABEL_MIN_XG,
            })
        })
        .collect();

    let goals = shots.iter().filter(|s| s.is_goal).count();
    ShotMap {
        team: team.to_string(),
        total_shots: shots.len(),
        goals,
        shots,
    }
}
