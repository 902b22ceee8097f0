pub mod aggregation;
pub mod analysis;
pub mod config;
pub mod density;
pub mod error;
pub mod events;
pub mod fake_feed;
pub mod match_details;
pub mod player_stats;
pub mod shot_map;
pub mod summary;
pub mod team_stats;

pub use analysis::{MatchAnalysis, analyze_events, analyze_match_json};
pub use config::AnalyzerConfig;
pub use error::AnalysisError;
