//! OpenAI-compatible chat-completions client.
//!
//! `POST {base_url}/chat/completions` with `{model, temperature, messages,
//! reasoning_effort?}`; the reply text is `choices[0].message.content`.

use std::time::Duration;

use async_trait::async_trait;
use memex_core::config::LlmConfig;
use memex_core::errors::{LlmError, MemexResult};
use memex_core::models::{ChatMessage, ChatRequest};
use memex_core::traits::IChatClient;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Chat client for any server speaking the OpenAI chat API
/// (OpenAI, Ollama, vLLM, llama.cpp, ...).
pub struct OpenAiCompatClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    reasoning_effort: Option<String>,
    timeout_ms: u64,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    temperature: f64,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    reasoning_effort: Option<&'a str>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAiCompatClient {
    /// Build from config. The bearer token is read once from the
    /// environment variable named by `api_key_env`.
    pub fn from_config(config: &LlmConfig, timeout_ms: u64) -> MemexResult<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty());
        Self::new(
            config.base_url.clone(),
            config.model.clone(),
            api_key,
            config.reasoning_effort.clone(),
            timeout_ms,
        )
    }

    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        reasoning_effort: Option<String>,
        timeout_ms: u64,
    ) -> MemexResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| LlmError::Transport {
                reason: format!("http client setup failed: {e}"),
            })?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
            reasoning_effort,
            timeout_ms,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl IChatClient for OpenAiCompatClient {
    fn is_available(&self) -> bool {
        !self.base_url.is_empty() && !self.model.is_empty()
    }

    async fn chat(&self, request: &ChatRequest) -> MemexResult<String> {
        if !self.is_available() {
            return Err(LlmError::NotAvailable {
                reason: "base_url or model is not configured".to_string(),
            }
            .into());
        }

        let body = CompletionRequest {
            model: &self.model,
            temperature: request.temperature,
            messages: &request.messages,
            reasoning_effort: self.reasoning_effort.as_deref(),
        };

        let mut builder = self.http.post(self.endpoint()).json(&body);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                LlmError::Timeout {
                    timeout_ms: self.timeout_ms,
                }
            } else {
                LlmError::Transport {
                    reason: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), model = %self.model, "chat completion rejected");
            return Err(LlmError::UpstreamStatus {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let parsed: CompletionResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                LlmError::Timeout {
                    timeout_ms: self.timeout_ms,
                }
            } else {
                LlmError::Transport {
                    reason: format!("invalid completion body: {e}"),
                }
            }
        })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(LlmError::MissingContent)?;

        debug!(model = %self.model, reply_len = content.len(), "chat completion");
        Ok(content)
    }
}
