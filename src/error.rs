use thiserror::Error;

/// Terminal failures for one analysis invocation.
///
/// Everything else (missing attribution, ambiguous teams, unknown players, empty
/// spatial samples) is absorbed with a default and never surfaces here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("failed to load match data: {reason}")]
    Load { reason: String },

    #[error("match data is not an event list: expected a JSON array, found {found}")]
    NotAnEventList { found: &'static str },

    #[error("event #{index} is not a JSON object")]
    InvalidEvent { index: usize },
}

impl AnalysisError {
    pub fn load(reason: impl Into<String>) -> Self {
        AnalysisError::Load {
            reason: reason.into(),
        }
    }
}
