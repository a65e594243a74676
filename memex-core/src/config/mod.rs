pub mod cross_encoder_config;
pub mod defaults;
pub mod extraction_config;
pub mod feedback_config;
pub mod llm_config;
pub mod observability_config;
pub mod retrieval_config;
pub mod traversal_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use cross_encoder_config::CrossEncoderConfig;
pub use extraction_config::ExtractionConfig;
pub use feedback_config::FeedbackConfig;
pub use llm_config::LlmConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;
pub use traversal_config::{ExpansionConfig, TraversalConfig};

use crate::errors::{ConfigError, MemexResult};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemexConfig {
    pub retrieval: RetrievalConfig,
    pub traversal: TraversalConfig,
    pub expansion: ExpansionConfig,
    pub feedback: FeedbackConfig,
    pub cross_encoder: CrossEncoderConfig,
    pub llm: LlmConfig,
    pub extraction: ExtractionConfig,
    pub observability: ObservabilityConfig,
}

impl MemexConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(toml_str: &str) -> MemexResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> MemexResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&contents)
    }

    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> MemexResult<()> {
        let ce = &self.cross_encoder;
        if !(0.0..=1.0).contains(&ce.alpha) {
            return Err(invalid("cross_encoder.alpha", "must be within [0, 1]"));
        }
        if !(0.0..=2.0).contains(&ce.temperature) {
            return Err(invalid("cross_encoder.temperature", "must be within [0, 2]"));
        }
        if ce.top_k == 0 {
            return Err(invalid("cross_encoder.top_k", "must be at least 1"));
        }
        if ce.concurrency == 0 {
            return Err(invalid("cross_encoder.concurrency", "must be at least 1"));
        }
        if ce.max_batch_size == 0 {
            return Err(invalid("cross_encoder.max_batch_size", "must be at least 1"));
        }
        if self.retrieval.default_limit > self.retrieval.max_limit {
            return Err(invalid(
                "retrieval.default_limit",
                "must not exceed retrieval.max_limit",
            ));
        }
        if self.traversal.max_results == 0 {
            return Err(invalid("traversal.max_results", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.expansion.decay) {
            return Err(invalid("expansion.decay", "must be within [0, 1]"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> crate::errors::MemexError {
    ConfigError::Invalid {
        field: field.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
