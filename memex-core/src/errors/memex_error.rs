use super::{ConfigError, LlmError, RetrievalError, StorageError, ValidationError};

/// Top-level error type. Every subsystem error converts into this.
#[derive(Debug, thiserror::Error)]
pub enum MemexError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("llm error: {0}")]
    Llm(#[from] LlmError),

    #[error("retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MemexError {
    /// Whether this error must reach the caller.
    ///
    /// Validation, configuration and candidate-discovery failures are fatal.
    /// Everything else is local to the stage that raised it.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Validation(_) | Self::Config(_) => true,
            Self::Retrieval(RetrievalError::CandidateDiscovery { .. }) => true,
            Self::Storage(_) | Self::Llm(_) | Self::Retrieval(_) | Self::Serialization(_) => false,
        }
    }

    /// Whether this error is a timeout from the LLM collaborator.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Llm(LlmError::Timeout { .. }))
    }
}

/// Convenience alias used throughout the workspace.
pub type MemexResult<T> = Result<T, MemexError>;
