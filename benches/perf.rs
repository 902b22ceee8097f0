use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use match_analyzer::aggregation::{AggregationBackend, ParallelBackend, SinglePassBackend};
use match_analyzer::density::{collect_points, estimate_density};
use match_analyzer::events::events_from_value;
use match_analyzer::fake_feed::{AWAY_TEAM, HOME_TEAM, synthetic_events, synthetic_match_json};
use match_analyzer::{AnalyzerConfig, analyze_events};

fn bench_parse(c: &mut Criterion) {
    let raw = synthetic_match_json(1, 4_000);
    c.bench_function("parse_events_4k", |b| {
        b.iter(|| {
            let events = events_from_value(black_box(&raw)).unwrap();
            black_box(events.len());
        })
    });
}

fn bench_team_stats(c: &mut Criterion) {
    let events = synthetic_events(2, 200_000).expect("valid synthetic match");
    let parallel = ParallelBackend::new(4_096);

    c.bench_function("team_stats_single_pass_200k", |b| {
        b.iter(|| black_box(SinglePassBackend.team_stats(black_box(&events), HOME_TEAM, AWAY_TEAM)))
    });
    c.bench_function("team_stats_parallel_200k", |b| {
        b.iter(|| black_box(parallel.team_stats(black_box(&events), HOME_TEAM, AWAY_TEAM)))
    });
}

fn bench_density(c: &mut Criterion) {
    let events = synthetic_events(3, 20_000).expect("valid synthetic match");
    let points = collect_points(events.iter());
    c.bench_function("density_20k_points", |b| {
        b.iter(|| black_box(estimate_density(black_box(points.clone()))))
    });
}

fn bench_full_analysis(c: &mut Criterion) {
    let events = synthetic_events(4, 4_000).expect("valid synthetic match");
    let config = AnalyzerConfig::default();
    c.bench_function("analyze_match_4k", |b| {
        b.iter(|| black_box(analyze_events(black_box(&events), Some("Casemiro"), &config)))
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_team_stats,
    bench_density,
    bench_full_analysis
);
criterion_main!(benches);
