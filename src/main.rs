use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use match_analyzer::density::DensityEstimate;
use match_analyzer::{AnalyzerConfig, MatchAnalysis, analyze_match_json};

const USAGE: &str = "usage: match_analyzer [--json] <events.json> [player name]";

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut json = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            positional.push(arg);
        }
    }
    let Some(path) = positional.first().map(PathBuf::from) else {
        bail!(USAGE);
    };
    // Player names contain spaces; accept them unquoted too.
    let player = (positional.len() > 1).then(|| positional[1..].join(" "));

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = AnalyzerConfig::from_env();
    let analysis = analyze_match_json(&raw, player.as_deref(), &config)
        .with_context(|| format!("failed to analyze {}", path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_report(&analysis);
    }
    Ok(())
}

fn print_report(analysis: &MatchAnalysis) {
    let details = &analysis.match_details;
    let stats = &analysis.match_stats;

    println!("Match: {} vs {}", details.home_team, details.away_team);
    println!(
        "Formations: {} vs {}",
        details.home_formation, details.away_formation
    );
    println!("Score: {} - {}", stats.goals.home, stats.goals.away);
    println!(
        "Possession: {:.1}% - {:.1}%",
        stats.possession.home, stats.possession.away
    );
    println!("Shots: {} - {}", stats.shots.home, stats.shots.away);
    println!("xG: {:.2} - {:.2}", stats.xg.home, stats.xg.away);
    println!(
        "Passes: {} ({:.1}%) - {} ({:.1}%)",
        stats.passes.home,
        stats.passes.home_completion,
        stats.passes.away,
        stats.passes.away_completion
    );

    println!();
    println!("{}:", details.home_team);
    println!("{}", analysis.home_summary);
    println!();
    println!("{}:", details.away_team);
    println!("{}", analysis.away_summary);

    let Some(player) = &analysis.player_name else {
        return;
    };
    println!();
    match (&analysis.player_team, &analysis.player_density) {
        (Some(team), Some(DensityEstimate::Dense(grid))) => println!(
            "{player} ({team}): {} located events, peak density {:.2}",
            grid.points.len(),
            grid.max_value()
        ),
        (Some(team), Some(DensityEstimate::Sparse { points })) => println!(
            "{player} ({team}): limited data points ({})",
            points.len()
        ),
        (Some(team), _) => println!("{player} ({team}): no position data"),
        (None, _) => println!("{player}: not in either starting line-up"),
    }
}
