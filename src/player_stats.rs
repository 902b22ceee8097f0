use std::collections::HashMap;

use serde::Serialize;

use crate::events::{Event, EventKind};
use crate::team_stats::{TeamTally, completion_pct, round_to};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStats {
    pub player_name: String,
    pub position: String,
    pub jersey: u32,
    pub passes: u32,
    pub successful_passes: u32,
    pub pass_completion: f64,
    pub shots: u32,
    pub goals: u32,
    pub xg: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct RosterSlot {
    name: String,
    position: String,
    jersey: u32,
}

/// The starting XI of one team. Only players named here are ever tracked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    team: String,
    slots: Vec<RosterSlot>,
    by_name: HashMap<String, usize>,
}

impl Roster {
    pub fn from_events(events: &[Event], team: &str) -> Self {
        let mut roster = Roster {
            team: team.to_string(),
            ..Default::default()
        };

        let lineups = events
            .iter()
            .filter(|e| e.kind == EventKind::StartingXi && e.team_is(team))
            .filter_map(|e| e.tactics.as_ref());
        for tactics in lineups {
            for entry in &tactics.lineup {
                if entry.player.is_empty() {
                    continue;
                }
                let slot = RosterSlot {
                    name: entry.player.clone(),
                    position: entry.position.clone(),
                    jersey: entry.jersey_number,
                };
                match roster.by_name.get(&entry.player) {
                    // A repeated line-up keeps the first slot but takes the newer details.
                    Some(&idx) => roster.slots[idx] = slot,
                    None => {
                        roster.by_name.insert(entry.player.clone(), roster.slots.len());
                        roster.slots.push(slot);
                    }
                }
            }
        }

        if roster.is_empty() {
            tracing::debug!(team, "no starting line-up found");
        }
        roster
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, player: &str) -> bool {
        self.by_name.contains_key(player)
    }

    pub fn empty_tally(&self) -> RosterTally {
        RosterTally {
            players: vec![TeamTally::default(); self.slots.len()],
        }
    }

    pub fn record(&self, tally: &mut RosterTally, event: &Event) {
        if !event.team_is(&self.team) {
            return;
        }
        let Some(&idx) = event.player.as_ref().and_then(|p| self.by_name.get(p)) else {
            return;
        };
        let player = &mut tally.players[idx];
        match event.kind {
            EventKind::Pass => player.record_pass(event),
            EventKind::Shot => player.record_shot(event),
            _ => {}
        }
    }

    pub fn finish(&self, tally: RosterTally) -> Vec<PlayerStats> {
        self.slots
            .iter()
            .zip(tally.players)
            .map(|(slot, t)| PlayerStats {
                player_name: slot.name.clone(),
                position: slot.position.clone(),
                jersey: slot.jersey,
                passes: t.passes,
                successful_passes: t.completed_passes,
                pass_completion: completion_pct(t.completed_passes, t.passes),
                shots: t.shots,
                goals: t.goals,
                xg: round_to(t.xg(), 2),
            })
            .collect()
    }
}

/// Per-player counters, indexed like the roster slots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterTally {
    players: Vec<TeamTally>,
}

impl RosterTally {
    pub fn merge(&mut self, other: RosterTally) {
        for (mine, theirs) in self.players.iter_mut().zip(other.players) {
            mine.merge(theirs);
        }
    }
}

/// Per-player breakdown for one team, in line-up order.
pub fn player_stats_for_team(events: &[Event], team: &str) -> Vec<PlayerStats> {
    let roster = Roster::from_events(events, team);
    let mut tally = roster.empty_tally();
    for event in events {
        roster.record(&mut tally, event);
    }
    roster.finish(tally)
}
