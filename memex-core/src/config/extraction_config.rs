use serde::{Deserialize, Serialize};

use super::defaults;

/// Entity extractor toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Attach variants at extraction time instead of on demand.
    pub fuzzy_variants: bool,
    pub confidence_scoring: bool,
    pub semantic_types: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            fuzzy_variants: defaults::DEFAULT_FUZZY_VARIANTS,
            confidence_scoring: defaults::DEFAULT_CONFIDENCE_SCORING,
            semantic_types: defaults::DEFAULT_SEMANTIC_TYPES,
        }
    }
}
