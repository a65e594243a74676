use serde::{Deserialize, Serialize};

use super::defaults;

/// OpenAI-compatible chat endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL without the `/chat/completions` suffix.
    pub base_url: String,
    pub model: String,
    /// Environment variable holding the bearer token. Unset means no auth.
    pub api_key_env: String,
    /// Forwarded as `reasoning_effort` when set.
    pub reasoning_effort: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_LLM_BASE_URL.to_string(),
            model: defaults::DEFAULT_LLM_MODEL.to_string(),
            api_key_env: defaults::DEFAULT_LLM_API_KEY_ENV.to_string(),
            reasoning_effort: None,
        }
    }
}
