/// Failures reported by the LLM collaborator.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("llm not available: {reason}")]
    NotAvailable { reason: String },

    #[error("llm request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("llm returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("llm response carried no message content")]
    MissingContent,

    #[error("llm transport failed: {reason}")]
    Transport { reason: String },
}
