use std::sync::Arc;

use async_trait::async_trait;
use memex_core::config::CrossEncoderConfig;
use memex_core::errors::MemexResult;
use memex_core::models::{ChatRequest, RelevanceScore, ScoringDocument};
use memex_core::traits::{IChatClient, IRelevanceScorer};
use tracing::trace;

use crate::parse::parse_scores;
use crate::prompt::build_messages;

/// Relevance scorer that prompts a chat model and parses its reply.
pub struct LlmRelevanceScorer {
    client: Arc<dyn IChatClient>,
    temperature: f64,
    entity_aware: bool,
}

impl LlmRelevanceScorer {
    pub fn new(client: Arc<dyn IChatClient>, temperature: f64, entity_aware: bool) -> Self {
        Self {
            client,
            temperature,
            entity_aware,
        }
    }

    pub fn from_config(client: Arc<dyn IChatClient>, config: &CrossEncoderConfig) -> Self {
        Self::new(client, config.temperature, config.entity_aware)
    }
}

#[async_trait]
impl IRelevanceScorer for LlmRelevanceScorer {
    fn is_available(&self) -> bool {
        self.client.is_available()
    }

    async fn score_relevance(
        &self,
        query: &str,
        documents: &[ScoringDocument],
    ) -> MemexResult<Vec<RelevanceScore>> {
        if documents.is_empty() {
            return Ok(Vec::new());
        }
        let request = ChatRequest::new(
            build_messages(query, documents, self.entity_aware),
            self.temperature,
        );
        let content = self.client.chat(&request).await?;
        trace!(documents = documents.len(), reply_len = content.len(), "scoring reply");
        Ok(parse_scores(&content, documents))
    }
}
