use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{Value, json};

use crate::error::AnalysisError;
use crate::events::{Event, events_from_value};

pub const HOME_TEAM: &str = "Home FC";
pub const AWAY_TEAM: &str = "Away FC";

struct SeedSide {
    team: &'static str,
    formation: u32,
    starting: Vec<(&'static str, u32, &'static str)>,
    subs: Vec<&'static str>,
}

/// A reproducible StatsBomb-shaped match: two Starting XI events followed by
/// `events` random passes, shots and other actions.
pub fn synthetic_match_json(seed: u64, events: usize) -> Value {
    let mut rng = StdRng::seed_from_u64(seed);
    let sides = seed_sides();

    let mut out = Vec::with_capacity(events + sides.len());
    for side in &sides {
        out.push(starting_xi(side));
    }
    for _ in 0..events {
        let side = &sides[rng.gen_range(0..sides.len())];
        out.push(random_event(&mut rng, side, &sides));
    }
    Value::Array(out)
}

pub fn synthetic_events(seed: u64, events: usize) -> Result<Vec<Event>, AnalysisError> {
    events_from_value(&synthetic_match_json(seed, events))
}

fn random_event(rng: &mut StdRng, side: &SeedSide, sides: &[SeedSide]) -> Value {
    let mut event = serde_json::Map::new();

    let roll: f64 = rng.gen_range(0.0..1.0);
    let kind = if roll < 0.6 {
        "Pass"
    } else if roll < 0.66 {
        "Shot"
    } else if roll < 0.85 {
        "Carry"
    } else {
        "Pressure"
    };
    event.insert("type".into(), json!({ "name": kind }));
    event.insert("team".into(), json!({ "name": side.team }));

    // Some events carry no possession attribution at all.
    if rng.gen_bool(0.9) {
        let holder = &sides[rng.gen_range(0..sides.len())];
        event.insert("possession_team".into(), json!({ "name": holder.team }));
    }

    let player = if rng.gen_bool(0.05) {
        side.subs[rng.gen_range(0..side.subs.len())]
    } else {
        side.starting[rng.gen_range(0..side.starting.len())].0
    };
    event.insert("player".into(), json!({ "name": player }));

    if rng.gen_bool(0.95) {
        let x = (rng.gen_range(-2.0..122.0_f64) * 10.0).round() / 10.0;
        let y = (rng.gen_range(-2.0..82.0_f64) * 10.0).round() / 10.0;
        event.insert("location".into(), json!([x, y]));
    }

    match kind {
        "Pass" => {
            let pass = if rng.gen_bool(0.2) {
                json!({ "outcome": { "name": "Incomplete" } })
            } else {
                json!({ "length": rng.gen_range(2.0..60.0_f64) })
            };
            event.insert("pass".into(), pass);
        }
        "Shot" => {
            let xg: f64 = rng.gen_range(0.01..0.8);
            let outcome = if rng.gen_bool(xg) { "Goal" } else { "Saved" };
            let mut shot = json!({ "outcome": { "name": outcome } });
            if rng.gen_bool(0.95) {
                shot["statsbomb_xg"] = json!(xg);
            }
            event.insert("shot".into(), shot);
        }
        _ => {}
    }

    Value::Object(event)
}

fn starting_xi(side: &SeedSide) -> Value {
    let lineup: Vec<Value> = side
        .starting
        .iter()
        .map(|(name, number, position)| {
            json!({
                "player": { "name": name },
                "position": { "name": position },
                "jersey_number": number,
            })
        })
        .collect();
    json!({
        "type": { "name": "Starting XI" },
        "team": { "name": side.team },
        "possession_team": { "name": side.team },
        "tactics": { "formation": side.formation, "lineup": lineup },
    })
}

fn seed_sides() -> Vec<SeedSide> {
    vec![
        SeedSide {
            team: HOME_TEAM,
            formation: 433,
            starting: vec![
                ("Alisson", 1, "Goalkeeper"),
                ("Marquinhos", 4, "Right Center Back"),
                ("Thiago Silva", 3, "Left Center Back"),
                ("Danilo", 2, "Right Back"),
                ("Alex Sandro", 6, "Left Back"),
                ("Casemiro", 5, "Center Defensive Midfield"),
                ("Paqueta", 7, "Right Center Midfield"),
                ("Bruno G", 8, "Left Center Midfield"),
                ("Raphinha", 11, "Right Wing"),
                ("Richarlison", 9, "Center Forward"),
                ("Vini Jr", 20, "Left Wing"),
            ],
            subs: vec!["Rodrygo", "Antony"],
        },
        SeedSide {
            team: AWAY_TEAM,
            formation: 4231,
            starting: vec![
                ("Neuer", 1, "Goalkeeper"),
                ("Kimmich", 6, "Right Back"),
                ("Rudiger", 2, "Right Center Back"),
                ("Schlotterbeck", 15, "Left Center Back"),
                ("Raum", 3, "Left Back"),
                ("Gundogan", 21, "Right Defensive Midfield"),
                ("Goretzka", 8, "Left Defensive Midfield"),
                ("Gnabry", 10, "Right Attacking Midfield"),
                ("Musiala", 14, "Center Attacking Midfield"),
                ("Sane", 19, "Left Attacking Midfield"),
                ("Havertz", 7, "Center Forward"),
            ],
            subs: vec!["Wirtz", "Fullkrug"],
        },
    ]
}
