//! Ordered, fail-soft stage execution.

use std::collections::HashSet;
use std::time::Instant;

use memex_core::constants::clamp_score;
use memex_core::errors::MemexResult;
use memex_core::models::ResultItem;
use memex_observability::stage_span;
use memex_observability::tracing_setup::events;
use serde::Serialize;
use tracing::Instrument;

use crate::context::PipelineContext;
use crate::stage::{Stage, StageOutcome};

/// How one stage ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StageStatus {
    Applied,
    Skipped { reason: String },
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageReport {
    pub name: &'static str,
    #[serde(flatten)]
    pub status: StageStatus,
    pub duration_ms: u64,
}

/// The final context and one report per stage, in run order.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub context: PipelineContext,
    pub reports: Vec<StageReport>,
}

/// Runs a fixed list of stages in order.
///
/// After every applied stage the executor clamps scores to `[0, 1]` and
/// drops repeated `(type, id)` results, keeping the first. A failing stage
/// is logged and skipped over with the context it was given, unless it is
/// required, in which case its error ends the run.
#[derive(Default)]
pub struct PipelineExecutor {
    stages: Vec<Box<dyn Stage>>,
}

impl PipelineExecutor {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    pub fn with_stage(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub async fn run(&self, mut ctx: PipelineContext) -> MemexResult<PipelineRun> {
        let mut reports = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            let name = stage.name();
            let started = Instant::now();
            let outcome = stage.process(&ctx).instrument(stage_span!(name)).await;
            let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

            let status = match outcome {
                Ok(StageOutcome::Applied(mut next)) => {
                    enforce_invariants(&mut next.results);
                    events::stage_applied(name, next.results.len(), duration_ms);
                    ctx = next;
                    StageStatus::Applied
                }
                Ok(StageOutcome::Skipped(reason)) => {
                    events::stage_skipped(name, reason);
                    StageStatus::Skipped {
                        reason: reason.to_string(),
                    }
                }
                Err(e) if stage.is_required() => {
                    events::query_failed(name, &e.to_string());
                    return Err(e);
                }
                Err(e) => {
                    let error = e.to_string();
                    events::stage_degraded(name, &error);
                    StageStatus::Failed { error }
                }
            };
            reports.push(StageReport {
                name,
                status,
                duration_ms,
            });
        }

        Ok(PipelineRun {
            context: ctx,
            reports,
        })
    }
}

/// Clamp every score and keep only the first item per `(type, id)`.
pub fn enforce_invariants(results: &mut Vec<ResultItem>) {
    let mut seen = HashSet::with_capacity(results.len());
    results.retain(|item| seen.insert(item.key()));
    for item in results.iter_mut() {
        item.score = clamp_score(item.score);
    }
}
