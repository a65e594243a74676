use serde::{Deserialize, Serialize};

use super::defaults;

/// Defaults for relation traversal when the query leaves them unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    pub default_depth: u32,
    pub max_results: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            default_depth: defaults::DEFAULT_TRAVERSAL_DEPTH,
            max_results: defaults::DEFAULT_TRAVERSAL_MAX_RESULTS,
        }
    }
}

/// Growing the candidate set along relations of the top results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    pub enabled: bool,
    /// How many top results seed the expansion.
    pub seed_count: usize,
    /// Score multiplier applied to the seed's score for reached entries.
    pub decay: f64,
    pub depth: u32,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_EXPANSION_ENABLED,
            seed_count: defaults::DEFAULT_EXPANSION_SEED_COUNT,
            decay: defaults::DEFAULT_EXPANSION_DECAY,
            depth: defaults::DEFAULT_EXPANSION_DEPTH,
        }
    }
}
