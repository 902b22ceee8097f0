use serde::Serialize;
use serde_json::Value;

use crate::error::AnalysisError;

pub const GOAL_OUTCOME: &str = "Goal";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EventKind {
    Pass,
    Shot,
    StartingXi,
    Other(String),
}

impl EventKind {
    fn from_name(name: &str) -> Self {
        match name {
            "Pass" => EventKind::Pass,
            "Shot" => EventKind::Shot,
            "Starting XI" => EventKind::StartingXi,
            other => EventKind::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PassDetail {
    /// StatsBomb only records an outcome for passes that did not find a teammate.
    pub outcome: Option<String>,
}

impl PassDetail {
    pub fn is_completed(&self) -> bool {
        self.outcome.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShotDetail {
    pub outcome: Option<String>,
    pub xg: f64,
}

impl ShotDetail {
    pub fn is_goal(&self) -> bool {
        self.outcome.as_deref() == Some(GOAL_OUTCOME)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LineupEntry {
    pub player: String,
    pub position: String,
    pub jersey_number: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Tactics {
    pub formation: Option<String>,
    pub lineup: Vec<LineupEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub kind: EventKind,
    pub team: Option<String>,
    pub possession_team: Option<String>,
    pub player: Option<String>,
    pub location: Option<Location>,
    pub pass: Option<PassDetail>,
    pub shot: Option<ShotDetail>,
    pub tactics: Option<Tactics>,
}

impl Event {
    pub fn team_is(&self, team: &str) -> bool {
        self.team.as_deref() == Some(team)
    }

    pub fn player_is(&self, player: &str) -> bool {
        self.player.as_deref() == Some(player)
    }

    /// A pass with no sub-record still counts as completed.
    pub fn pass_completed(&self) -> bool {
        self.pass.as_ref().is_none_or(PassDetail::is_completed)
    }

    pub fn shot_is_goal(&self) -> bool {
        self.shot.as_ref().is_some_and(ShotDetail::is_goal)
    }

    pub fn shot_xg(&self) -> f64 {
        self.shot.as_ref().map(|s| s.xg).unwrap_or(0.0)
    }
}

/// Parse a StatsBomb event file. The document must be an array of objects; any
/// field below the top level may be missing or mistyped and then reads as absent.
pub fn parse_events_json(raw: &str) -> Result<Vec<Event>, AnalysisError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AnalysisError::load("empty input"));
    }
    let root: Value =
        serde_json::from_str(trimmed).map_err(|err| AnalysisError::load(err.to_string()))?;
    events_from_value(&root)
}

pub fn events_from_value(root: &Value) -> Result<Vec<Event>, AnalysisError> {
    let Some(list) = root.as_array() else {
        return Err(AnalysisError::NotAnEventList {
            found: value_kind(root),
        });
    };

    let mut events = Vec::with_capacity(list.len());
    for (index, entry) in list.iter().enumerate() {
        if !entry.is_object() {
            return Err(AnalysisError::InvalidEvent { index });
        }
        events.push(parse_event(entry));
    }
    tracing::debug!(events = events.len(), "parsed match events");
    Ok(events)
}

fn parse_event(value: &Value) -> Event {
    let kind = nested_name(value, "type")
        .map(|name| EventKind::from_name(&name))
        .unwrap_or_else(|| EventKind::Other(String::new()));

    Event {
        kind,
        team: nested_name(value, "team"),
        possession_team: nested_name(value, "possession_team"),
        player: nested_name(value, "player"),
        location: parse_location(value.get("location")),
        pass: value.get("pass").and_then(parse_pass),
        shot: value.get("shot").and_then(parse_shot),
        tactics: value.get("tactics").and_then(parse_tactics),
    }
}

fn parse_location(value: Option<&Value>) -> Option<Location> {
    match value?.as_array()?.as_slice() {
        [x, y] => Some(Location {
            x: x.as_f64()?,
            y: y.as_f64()?,
        }),
        _ => None,
    }
}

fn parse_pass(value: &Value) -> Option<PassDetail> {
    let pass = value.as_object()?;
    // Presence is the signal; the outcome's own shape does not matter.
    let outcome = pass.get("outcome").map(|outcome| {
        pick_string(outcome, &["name"])
            .or_else(|| as_string(outcome))
            .unwrap_or_default()
    });
    Some(PassDetail { outcome })
}

fn parse_shot(value: &Value) -> Option<ShotDetail> {
    if !value.is_object() {
        return None;
    }
    let xg = value
        .get("statsbomb_xg")
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
        .max(0.0);
    Some(ShotDetail {
        outcome: nested_name(value, "outcome"),
        xg,
    })
}

fn parse_tactics(value: &Value) -> Option<Tactics> {
    if !value.is_object() {
        return None;
    }
    let formation = value.get("formation").and_then(as_string);
    let lineup = value
        .get("lineup")
        .and_then(Value::as_array)
        .map(|list| list.iter().filter_map(parse_lineup_entry).collect())
        .unwrap_or_default();
    Some(Tactics { formation, lineup })
}

fn parse_lineup_entry(value: &Value) -> Option<LineupEntry> {
    if !value.is_object() {
        return None;
    }
    Some(LineupEntry {
        player: nested_name(value, "player").unwrap_or_default(),
        position: nested_name(value, "position").unwrap_or_default(),
        jersey_number: pick_u32(value, &["jersey_number"]).unwrap_or(0),
    })
}

fn nested_name(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(|v| pick_string(v, &["name"]))
}

fn pick_string(value: &Value, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(v) = value.get(*key) {
            if let Some(s) = as_string(v) {
                return Some(s);
            }
        }
    }
    None
}

fn pick_u32(value: &Value, keys: &[&str]) -> Option<u32> {
    for key in keys {
        if let Some(v) = value.get(*key) {
            if let Some(num) = v.as_u64() {
                return u32::try_from(num).ok();
            }
            if let Some(s) = v.as_str() {
                if let Ok(num) = s.trim().parse::<u32>() {
                    return Some(num);
                }
            }
        }
    }
    None
}

fn as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn location_needs_exactly_two_numbers() {
        assert_eq!(
            parse_location(Some(&json!([60.0, 40]))),
            Some(Location { x: 60.0, y: 40.0 })
        );
        assert_eq!(parse_location(Some(&json!([60.0, 40.0, 1.2]))), None);
        assert_eq!(parse_location(Some(&json!([60.0]))), None);
        assert_eq!(parse_location(Some(&json!(["60", 40]))), None);
        assert_eq!(parse_location(None), None);
    }

    #[test]
    fn pass_outcome_presence_is_enough() {
        let failed = parse_pass(&json!({"outcome": null})).unwrap();
        assert!(!failed.is_completed());
        let named = parse_pass(&json!({"outcome": {"name": "Out"}})).unwrap();
        assert_eq!(named.outcome.as_deref(), Some("Out"));
        assert!(parse_pass(&json!({"length": 12.0})).unwrap().is_completed());
    }

    #[test]
    fn formation_number_becomes_text() {
        let tactics = parse_tactics(&json!({"formation": 4231, "lineup": []})).unwrap();
        assert_eq!(tactics.formation.as_deref(), Some("4231"));
    }

    #[test]
    fn negative_xg_is_clamped() {
        let shot = parse_shot(&json!({"statsbomb_xg": -0.2})).unwrap();
        assert_eq!(shot.xg, 0.0);
    }
}
