use rayon::prelude::*;

use crate::config::AnalyzerConfig;
use crate::events::Event;
use crate::player_stats::{PlayerStats, Roster, RosterTally};
use crate::team_stats::{MatchTally, TeamStats};

/// A strategy for scanning the event stream. Every implementation must return exactly
/// what [`SinglePassBackend`] returns for the same input.
pub trait AggregationBackend: Send + Sync {
    fn name(&self) -> &'static str;

    fn team_stats(&self, events: &[Event], home_team: &str, away_team: &str) -> TeamStats;

    fn player_stats(&self, events: &[Event], team: &str) -> Vec<PlayerStats>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SinglePassBackend;

impl AggregationBackend for SinglePassBackend {
    fn name(&self) -> &'static str {
        "single-pass"
    }

    fn team_stats(&self, events: &[Event], home_team: &str, away_team: &str) -> TeamStats {
        crate::team_stats::calculate_team_stats(events, home_team, away_team)
    }

    fn player_stats(&self, events: &[Event], team: &str) -> Vec<PlayerStats> {
        crate::player_stats::player_stats_for_team(events, team)
    }
}

/// Tallies fixed-size chunks on the rayon pool, then merges them in stream order.
#[derive(Debug, Clone, Copy)]
pub struct ParallelBackend {
    chunk_size: usize,
}

impl ParallelBackend {
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }
}

impl AggregationBackend for ParallelBackend {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn team_stats(&self, events: &[Event], home_team: &str, away_team: &str) -> TeamStats {
        let partials: Vec<MatchTally> = events
            .par_chunks(self.chunk_size)
            .map(|chunk| {
                let mut tally = MatchTally::default();
                for event in chunk {
                    tally.record(event, home_team, away_team);
                }
                tally
            })
            .collect();

        let mut total = MatchTally::default();
        for partial in partials {
            total.merge(partial);
        }
        total.into_stats()
    }

    fn player_stats(&self, events: &[Event], team: &str) -> Vec<PlayerStats> {
        let roster = Roster::from_events(events, team);
        let partials: Vec<RosterTally> = events
            .par_chunks(self.chunk_size)
            .map(|chunk| {
                let mut tally = roster.empty_tally();
                for event in chunk {
                    roster.record(&mut tally, event);
                }
                tally
            })
            .collect();

        let mut total = roster.empty_tally();
        for partial in partials {
            total.merge(partial);
        }
        roster.finish(total)
    }
}

pub fn select_backend(event_count: usize, config: &AnalyzerConfig) -> Box<dyn AggregationBackend> {
    if event_count >= config.parallel_threshold {
        Box::new(ParallelBackend::new(config.parallel_chunk_size))
    } else {
        Box::new(SinglePassBackend)
    }
}
