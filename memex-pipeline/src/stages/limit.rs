use async_trait::async_trait;
use memex_core::config::RetrievalConfig;
use memex_core::errors::MemexResult;

use super::names;
use crate::context::PipelineContext;
use crate::stage::{Stage, StageOutcome};

/// Truncates to `filters.limit`, or `default_limit`, never above `max_limit`.
pub struct LimitStage {
    config: RetrievalConfig,
}

impl LimitStage {
    pub fn new(config: RetrievalConfig) -> Self {
        Self { config }
    }

    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.config.default_limit)
            .min(self.config.max_limit)
    }
}

#[async_trait]
impl Stage for LimitStage {
    fn name(&self) -> &'static str {
        names::LIMIT
    }

    async fn process(&self, ctx: &PipelineContext) -> MemexResult<StageOutcome> {
        let limit = self.effective_limit(ctx.filters.limit);
        if ctx.results.len() <= limit {
            return Ok(StageOutcome::Skipped("within limit"));
        }
        let results = ctx.results[..limit].to_vec();
        Ok(StageOutcome::Applied(ctx.with_results(results)))
    }
}
