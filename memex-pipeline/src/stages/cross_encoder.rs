use std::sync::Arc;

use async_trait::async_trait;
use memex_core::errors::MemexResult;
use memex_observability::rerank_span;
use memex_rerank::CrossEncoderReranker;
use tracing::Instrument;

use super::names;
use crate::context::PipelineContext;
use crate::stage::{Stage, StageOutcome};

/// LLM cross-encoder re-ranking of the top candidates.
///
/// Runs when enabled in config or requested by the query, unless the query
/// opts out. A scorer error or timeout fails the stage, which leaves the
/// ranking as it was.
pub struct CrossEncoderStage {
    reranker: Option<Arc<CrossEncoderReranker>>,
    enabled: bool,
}

impl CrossEncoderStage {
    pub fn new(reranker: Option<Arc<CrossEncoderReranker>>, enabled: bool) -> Self {
        Self { reranker, enabled }
    }
}

#[async_trait]
impl Stage for CrossEncoderStage {
    fn name(&self) -> &'static str {
        names::CROSS_ENCODER
    }

    async fn process(&self, ctx: &PipelineContext) -> MemexResult<StageOutcome> {
        match ctx.filters.cross_encoder {
            Some(false) => return Ok(StageOutcome::Skipped("disabled for this query")),
            None if !self.enabled => return Ok(StageOutcome::Skipped("cross-encoder disabled")),
            _ => {}
        }
        let Some(search) = ctx.search_text() else {
            return Ok(StageOutcome::Skipped("no search text"));
        };
        if !ctx.has_results() {
            return Ok(StageOutcome::Skipped("no candidates"));
        }
        let Some(reranker) = self.reranker.as_ref().filter(|r| r.is_available()) else {
            return Ok(StageOutcome::Skipped("scorer unavailable"));
        };

        let span = rerank_span!(ctx.results.len(), reranker.config().top_k);
        let outcome = reranker.rerank(search, &ctx.results).instrument(span).await?;

        let mut next = ctx.with_results(outcome.items);
        next.cross_encoder = Some(outcome.meta);
        Ok(StageOutcome::Applied(next))
    }
}
