use match_analyzer::aggregation::{AggregationBackend, ParallelBackend, SinglePassBackend};
use match_analyzer::events::{
    Event, EventKind, LineupEntry, Location, PassDetail, ShotDetail, Tactics,
};
use proptest::prelude::*;

const TEAMS: [&str; 3] = ["A", "B", "C"];
const PLAYERS: [&str; 4] = ["p1", "p2", "p3", "bench"];

fn lineup(team: &str) -> Event {
    Event {
        kind: EventKind::StartingXi,
        team: Some(team.to_string()),
        possession_team: None,
        player: None,
        location: None,
        pass: None,
        shot: None,
        tactics: Some(Tactics {
            formation: Some("433".to_string()),
            lineup: ["p1", "p2", "p3"]
                .iter()
                .enumerate()
                .map(|(i, name)| LineupEntry {
                    player: name.to_string(),
                    position: "Center Midfield".to_string(),
                    jersey_number: i as u32 + 1,
                })
                .collect(),
        }),
    }
}

fn name_from(options: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        1 => Just(None),
        4 => prop::sample::select(options).prop_map(|s| Some(s.to_string())),
    ]
}

fn arb_event() -> impl Strategy<Value = Event> {
    (
        0u8..4,
        name_from(&TEAMS),
        name_from(&TEAMS),
        name_from(&PLAYERS),
        prop::option::of((0.0f64..120.0, 0.0f64..80.0)),
        any::<bool>(),
        prop::option::of("Goal|Saved|Blocked"),
        0.0f64..1.0,
    )
        .prop_map(
            |(kind, team, possession_team, player, location, failed, shot_outcome, xg)| {
                let kind = match kind {
                    0 => EventKind::Pass,
                    1 => EventKind::Shot,
                    2 => EventKind::Other("Carry".to_string()),
                    _ => EventKind::Other("Pressure".to_string()),
                };
                let pass = (kind == EventKind::Pass).then(|| PassDetail {
                    outcome: failed.then(|| "Incomplete".to_string()),
                });
                let shot = (kind == EventKind::Shot).then(|| ShotDetail {
                    outcome: shot_outcome,
                    xg,
                });
                Event {
                    kind,
                    team,
                    possession_team,
                    player,
                    location: location.map(|(x, y)| Location { x, y }),
                    pass,
                    shot,
                    tactics: None,
                }
            },
        )
}

proptest! {
    #[test]
    fn parallel_matches_single_pass(
        body in prop::collection::vec(arb_event(), 0..400),
        chunk in 1usize..64,
    ) {
        let mut events = vec![lineup("A"), lineup("B")];
        events.extend(body);

        let parallel = ParallelBackend::new(chunk);
        prop_assert_eq!(
            SinglePassBackend.team_stats(&events, "A", "B"),
            parallel.team_stats(&events, "A", "B")
        );
        for team in ["A", "B"] {
            prop_assert_eq!(
                SinglePassBackend.player_stats(&events, team),
                parallel.player_stats(&events, team)
            );
        }
    }

    #[test]
    fn aggregate_invariants_hold(body in prop::collection::vec(arb_event(), 0..400)) {
        let mut events = vec![lineup("A"), lineup("B")];
        events.extend(body);

        let stats = SinglePassBackend.team_stats(&events, "A", "B");
        prop_assert_eq!(stats.possession.home + stats.possession.away, 100.0);
        prop_assert!((0.0..=100.0).contains(&stats.passes.home_completion));
        prop_assert!((0.0..=100.0).contains(&stats.passes.away_completion));
        prop_assert!(stats.xg.home >= 0.0 && stats.xg.away >= 0.0);

        let players = SinglePassBackend.player_stats(&events, "A");
        prop_assert_eq!(players.len(), 3);
        prop_assert!(players.iter().all(|p| p.player_name != "bench"));
        let player_shots: u32 = players.iter().map(|p| p.shots).sum();
        prop_assert!(player_shots <= stats.shots.home);
    }
}
