use async_trait::async_trait;

use crate::errors::MemexResult;
use crate::models::{ChatRequest, RelevanceScore, ScoringDocument};

/// A chat-completion endpoint.
#[async_trait]
pub trait IChatClient: Send + Sync {
    /// Whether the client is configured and worth calling.
    fn is_available(&self) -> bool;

    /// Send the request and return the first choice's message content.
    async fn chat(&self, request: &ChatRequest) -> MemexResult<String>;
}

/// Joint query/document relevance scoring.
#[async_trait]
pub trait IRelevanceScorer: Send + Sync {
    fn is_available(&self) -> bool;

    /// One score in [0.0, 1.0] per document, keyed by document id.
    async fn score_relevance(
        &self,
        query: &str,
        documents: &[ScoringDocument],
    ) -> MemexResult<Vec<RelevanceScore>>;
}
