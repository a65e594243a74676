use serde::{Deserialize, Serialize};

use super::defaults;

/// Feedback scoring and its score cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    pub enabled: bool,
    /// Load missing scores from storage; otherwise resolve from cache only.
    pub batch_load: bool,
    pub cache_capacity: u64,
    /// How long a loaded score stays fresh.
    pub cache_ttl_secs: u64,
    /// Score multiplier change per net vote.
    pub boost_per_vote: f64,
    pub max_boost: f64,
    pub max_penalty: f64,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_FEEDBACK_ENABLED,
            batch_load: defaults::DEFAULT_FEEDBACK_BATCH_LOAD,
            cache_capacity: defaults::DEFAULT_FEEDBACK_CACHE_CAPACITY,
            cache_ttl_secs: defaults::DEFAULT_FEEDBACK_CACHE_TTL_SECS,
            boost_per_vote: defaults::DEFAULT_FEEDBACK_BOOST_PER_VOTE,
            max_boost: defaults::DEFAULT_FEEDBACK_MAX_BOOST,
            max_penalty: defaults::DEFAULT_FEEDBACK_MAX_PENALTY,
        }
    }
}
