use std::sync::Arc;

use async_trait::async_trait;
use memex_core::errors::MemexResult;
use memex_core::traits::IChatClient;
use memex_query::{EntityExtractor, IntentClassifier};
use tracing::debug;

use super::names;
use crate::context::PipelineContext;
use crate::stage::{Stage, StageOutcome};

/// Extracts entities and classifies intent from the search text.
///
/// The LLM is asked for the intent only when the query sets `llm_intent`
/// and a chat client is configured; otherwise patterns decide.
pub struct QueryAnalysisStage {
    extractor: Arc<EntityExtractor>,
    classifier: IntentClassifier,
    chat: Option<Arc<dyn IChatClient>>,
}

impl QueryAnalysisStage {
    pub fn new(extractor: Arc<EntityExtractor>, chat: Option<Arc<dyn IChatClient>>) -> Self {
        Self {
            extractor,
            classifier: IntentClassifier::new(),
            chat,
        }
    }
}

#[async_trait]
impl Stage for QueryAnalysisStage {
    fn name(&self) -> &'static str {
        names::QUERY_ANALYSIS
    }

    async fn process(&self, ctx: &PipelineContext) -> MemexResult<StageOutcome> {
        let Some(search) = ctx.search_text() else {
            return Ok(StageOutcome::Skipped("no search text"));
        };

        let entities = self.extractor.extract(search);
        let intent = match &self.chat {
            Some(chat) if ctx.filters.llm_intent => {
                self.classifier.classify_async(search, Some(chat.as_ref())).await
            }
            _ => self.classifier.classify(search),
        };
        debug!(
            intent = %intent.intent,
            method = ?intent.method,
            entities = entities.len(),
            "query analysed"
        );

        let mut next = ctx.clone();
        next.entities = entities;
        next.intent = Some(intent);
        Ok(StageOutcome::Applied(next))
    }
}
