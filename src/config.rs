use std::env;

pub const DEFAULT_PARALLEL_THRESHOLD: usize = 50_000;
pub const DEFAULT_CHUNK_SIZE: usize = 4_096;
const MIN_CHUNK_SIZE: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Streams with at least this many events are tallied on the rayon pool.
    pub parallel_threshold: usize,
    pub parallel_chunk_size: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            parallel_chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl AnalyzerConfig {
    /// Reads `ANALYZER_PARALLEL_THRESHOLD` and `ANALYZER_CHUNK_SIZE`; blank or
    /// unparsable values keep the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parse = |key: &str| {
            lookup(key)
                .filter(|val| !val.trim().is_empty())
                .and_then(|val| val.trim().parse::<usize>().ok())
        };
        Self {
            parallel_threshold: parse("ANALYZER_PARALLEL_THRESHOLD")
                .unwrap_or(DEFAULT_PARALLEL_THRESHOLD),
            parallel_chunk_size: parse("ANALYZER_CHUNK_SIZE")
                .unwrap_or(DEFAULT_CHUNK_SIZE)
                .max(MIN_CHUNK_SIZE),
        }
    }
}
