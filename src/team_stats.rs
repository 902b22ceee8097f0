use serde::Serialize;

use crate::events::{Event, EventKind};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Split<T> {
    pub home: T,
    pub away: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PassSplit {
    pub home: u32,
    pub away: u32,
    pub home_completion: f64,
    pub away_completion: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStats {
    pub possession: Split<f64>,
    pub passes: PassSplit,
    pub shots: Split<u32>,
    pub goals: Split<u32>,
    pub xg: Split<f64>,
}

/// Raw counters for one side.
///
/// xG is kept as the ordered list of shot values so tallies built over chunks of the
/// stream merge into the same float sum a single pass would produce.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamTally {
    pub possession: u64,
    pub passes: u32,
    pub completed_passes: u32,
    pub shots: u32,
    pub goals: u32,
    pub xg_terms: Vec<f64>,
}

impl TeamTally {
    pub fn record_pass(&mut self, event: &Event) {
        self.passes += 1;
        if event.pass_completed() {
            self.completed_passes += 1;
        }
    }

    pub fn record_shot(&mut self, event: &Event) {
        self.shots += 1;
        if event.shot_is_goal() {
            self.goals += 1;
        }
        self.xg_terms.push(event.shot_xg());
    }

    pub fn merge(&mut self, other: TeamTally) {
        self.possession += other.possession;
        self.passes += other.passes;
        self.completed_passes += other.completed_passes;
        self.shots += other.shots;
        self.goals += other.goals;
        self.xg_terms.extend(other.xg_terms);
    }

    pub fn xg(&self) -> f64 {
        self.xg_terms.iter().fold(0.0, |acc, xg| acc + xg)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchTally {
    pub total_events: usize,
    pub home: TeamTally,
    pub away: TeamTally,
}

impl MatchTally {
    pub fn record(&mut self, event: &Event, home_team: &str, away_team: &str) {
        self.total_events += 1;

        match event.possession_team.as_deref() {
            Some(team) if team == home_team => self.home.possession += 1,
            Some(team) if team == away_team => self.away.possession += 1,
            _ => {}
        }

        let side = match event.team.as_deref() {
            Some(team) if team == home_team => &mut self.home,
            Some(team) if team == away_team => &mut self.away,
            _ => return,
        };
        match event.kind {
            EventKind::Pass => side.record_pass(event),
            EventKind::Shot => side.record_shot(event),
            _ => {}
        }
    }

    pub fn merge(&mut self, other: MatchTally) {
        self.total_events += other.total_events;
        self.home.merge(other.home);
        self.away.merge(other.away);
    }

    pub fn into_stats(self) -> TeamStats {
        let (home_pct, away_pct) =
            possession_split(self.home.possession, self.away.possession, self.total_events);
        TeamStats {
            possession: Split {
                home: home_pct,
                away: away_pct,
            },
            passes: PassSplit {
                home: self.home.passes,
                away: self.away.passes,
                home_completion: completion_pct(self.home.completed_passes, self.home.passes),
                away_completion: completion_pct(self.away.completed_passes, self.away.passes),
            },
            shots: Split {
                home: self.home.shots,
                away: self.away.shots,
            },
            goals: Split {
                home: self.home.goals,
                away: self.away.goals,
            },
            xg: Split {
                home: round_to(self.home.xg(), 2),
                away: round_to(self.away.xg(), 2),
            },
        }
    }
}

/// One pass over the stream. Events attributed to neither side still count toward
/// the possession denominator.
pub fn calculate_team_stats(events: &[Event], home_team: &str, away_team: &str) -> TeamStats {
    let mut tally = MatchTally::default();
    for event in events {
        tally.record(event, home_team, away_team);
    }
    tally.into_stats()
}

/// Possession shares that always sum to exactly 100.0.
///
/// When rounding breaks the sum, home is rescaled against the actual sum and away
/// takes the remainder. A zero sum (no attributed possession at all) is an even split.
pub fn possession_split(home: u64, away: u64, total_events: usize) -> (f64, f64) {
    if total_events == 0 {
        return (50.0, 50.0);
    }
    let total = total_events as f64;
    let home_pct = round_to(home as f64 / total * 100.0, 1);
    let away_pct = round_to(away as f64 / total * 100.0, 1);

    let sum = home_pct + away_pct;
    if sum == 100.0 {
        return (home_pct, away_pct);
    }
    if sum == 0.0 {
        tracing::debug!(total_events, "no possession attribution, using an even split");
        return (50.0, 50.0);
    }
    let home_pct = round_to(home_pct * 100.0 / sum, 1);
    (home_pct, round_to(100.0 - home_pct, 1))
}

pub fn completion_pct(completed: u32, attempted: u32) -> f64 {
    if attempted == 0 {
        return 0.0;
    }
    round_to(completed as f64 / attempted as f64 * 100.0, 1)
}

/// Half away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
