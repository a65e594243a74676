use std::sync::Arc;

use async_trait::async_trait;
use memex_core::config::TraversalConfig;
use memex_core::errors::{MemexResult, RetrievalError};
use memex_core::traits::IRelationStore;
use memex_graph::{traverse, TraversalParams};
use memex_observability::traversal_span;
use tracing::{warn, Instrument};

use super::names;
use crate::context::PipelineContext;
use crate::stage::{Stage, StageOutcome};

/// Keeps only candidates reachable from `filters.related_to`.
pub struct RelatedToStage {
    relations: Arc<dyn IRelationStore>,
    config: TraversalConfig,
}

impl RelatedToStage {
    pub fn new(relations: Arc<dyn IRelationStore>, config: TraversalConfig) -> Self {
        Self { relations, config }
    }
}

#[async_trait]
impl Stage for RelatedToStage {
    fn name(&self) -> &'static str {
        names::RELATED_TO
    }

    async fn process(&self, ctx: &PipelineContext) -> MemexResult<StageOutcome> {
        let Some(related) = &ctx.filters.related_to else {
            return Ok(StageOutcome::Skipped("no relation filter"));
        };
        if !ctx.has_results() {
            return Ok(StageOutcome::Skipped("no candidates"));
        }

        let params = TraversalParams::from_related_to(related, &self.config);
        let span = traversal_span!(params.start, params.depth());
        let Some(reached) = traverse(self.relations.as_ref(), &params)
            .instrument(span)
            .await
        else {
            warn!(anchor = %params.start, "relation traversal produced no result");
            return Err(RetrievalError::StageFailed {
                stage: names::RELATED_TO.to_string(),
                reason: format!("traversal from {} produced no result", params.start),
            }
            .into());
        };

        let results = ctx
            .results
            .iter()
            .filter(|item| reached.contains(&item.key()))
            .cloned()
            .collect();
        let mut next = ctx.with_results(results);
        next.traversal_truncated = reached.truncated;
        Ok(StageOutcome::Applied(next))
    }
}
