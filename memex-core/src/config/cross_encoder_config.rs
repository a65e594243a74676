use serde::{Deserialize, Serialize};

use super::defaults;

/// LLM cross-encoder re-ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossEncoderConfig {
    pub enabled: bool,
    /// Candidates re-scored per query.
    pub top_k: usize,
    /// Weight of the cross-encoder score in the blend.
    pub alpha: f64,
    pub temperature: f64,
    pub timeout_ms: u64,
    /// Chunk calls in flight at once.
    pub concurrency: usize,
    /// Documents per LLM call.
    pub max_batch_size: usize,
    /// Ask the model to penalize named-entity mismatches.
    pub entity_aware: bool,
}

impl Default for CrossEncoderConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_CROSS_ENCODER_ENABLED,
            top_k: defaults::DEFAULT_CROSS_ENCODER_TOP_K,
            alpha: defaults::DEFAULT_CROSS_ENCODER_ALPHA,
            temperature: defaults::DEFAULT_CROSS_ENCODER_TEMPERATURE,
            timeout_ms: defaults::DEFAULT_CROSS_ENCODER_TIMEOUT_MS,
            concurrency: defaults::DEFAULT_CROSS_ENCODER_CONCURRENCY,
            max_batch_size: defaults::DEFAULT_CROSS_ENCODER_MAX_BATCH_SIZE,
            entity_aware: defaults::DEFAULT_CROSS_ENCODER_ENTITY_AWARE,
        }
    }
}
