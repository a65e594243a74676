use async_trait::async_trait;
use memex_core::errors::MemexResult;

use crate::context::PipelineContext;

/// What a stage did with the context.
#[derive(Debug, Clone)]
pub enum StageOutcome {
    /// The stage ran; this context replaces the one it was given.
    Applied(PipelineContext),
    /// The stage chose not to run, for the given reason.
    Skipped(&'static str),
}

/// One unit of the retrieval pipeline.
///
/// A stage reads the context it is given and either returns a replacement,
/// skips, or fails. It never observes a partially updated context, and a
/// failure leaves the executor holding the context it passed in.
#[async_trait]
pub trait Stage: Send + Sync {
    /// Stable name used in logs and stage reports.
    fn name(&self) -> &'static str;

    /// Whether a failure of this stage fails the whole query.
    fn is_required(&self) -> bool {
        false
    }

    async fn process(&self, ctx: &PipelineContext) -> MemexResult<StageOutcome>;
}
