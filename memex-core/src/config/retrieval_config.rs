use serde::{Deserialize, Serialize};

use super::defaults;

/// Candidate discovery and final result sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Results returned when the query sets no limit.
    pub default_limit: usize,
    /// Hard cap on any requested limit.
    pub max_limit: usize,
    /// Multiplier for entry types the query intent prefers.
    pub intent_type_boost: f64,
    /// Candidates scoring below this are dropped at discovery.
    pub min_score: f64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            default_limit: defaults::DEFAULT_RESULT_LIMIT,
            max_limit: defaults::DEFAULT_MAX_RESULT_LIMIT,
            intent_type_boost: defaults::DEFAULT_INTENT_TYPE_BOOST,
            min_score: defaults::DEFAULT_MIN_SCORE,
        }
    }
}
