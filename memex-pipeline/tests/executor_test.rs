use async_trait::async_trait;
use memex_core::errors::{MemexResult, RetrievalError, StorageError};
use memex_core::models::{QueryFilters, ResultItem};
use memex_core::MemexError;
use memex_pipeline::{PipelineContext, PipelineExecutor, Stage, StageOutcome, StageStatus};
use test_fixtures::builders::tool;

/// Appends one tool result with a fixed score.
struct Append(&'static str, f64);

#[async_trait]
impl Stage for Append {
    fn name(&self) -> &'static str {
        "append"
    }

    async fn process(&self, ctx: &PipelineContext) -> MemexResult<StageOutcome> {
        let mut results = ctx.results.clone();
        results.push(ResultItem::new(tool(self.0, self.0, ""), self.1));
        Ok(StageOutcome::Applied(ctx.with_results(results)))
    }
}

/// Returns results with a raw out-of-range score and a duplicate.
struct Corrupt;

#[async_trait]
impl Stage for Corrupt {
    fn name(&self) -> &'static str {
        "corrupt"
    }

    async fn process(&self, ctx: &PipelineContext) -> MemexResult<StageOutcome> {
        let mut results = ctx.results.clone();
        let mut inflated = ResultItem::new(tool("a", "dup", ""), 0.1);
        inflated.score = 7.5;
        results.insert(0, inflated);
        let mut negative = ResultItem::new(tool("z", "z", ""), 0.1);
        negative.score = -2.0;
        results.push(negative);
        Ok(StageOutcome::Applied(ctx.with_results(results)))
    }
}

/// Fails after touching a copy of the context.
struct Fail {
    required: bool,
}

#[async_trait]
impl Stage for Fail {
    fn name(&self) -> &'static str {
        "fail"
    }

    fn is_required(&self) -> bool {
        self.required
    }

    async fn process(&self, ctx: &PipelineContext) -> MemexResult<StageOutcome> {
        let mut scratch = ctx.clone();
        scratch.results.clear();
        Err(StorageError::Unavailable {
            reason: "down".to_string(),
        }
        .into())
    }
}

struct Skip;

#[async_trait]
impl Stage for Skip {
    fn name(&self) -> &'static str {
        "skip"
    }

    async fn process(&self, _ctx: &PipelineContext) -> MemexResult<StageOutcome> {
        Ok(StageOutcome::Skipped("nothing to do"))
    }
}

fn ctx() -> PipelineContext {
    PipelineContext::new("q", QueryFilters::default())
}

fn ids(ctx: &PipelineContext) -> Vec<&str> {
    ctx.results.iter().map(|i| i.id()).collect()
}

#[tokio::test]
async fn stages_run_in_order() {
    let executor = PipelineExecutor::default()
        .with_stage(Append("a", 0.9))
        .with_stage(Append("b", 0.8))
        .with_stage(Skip);
    assert_eq!(executor.stage_names(), vec!["append", "append", "skip"]);

    let run = executor.run(ctx()).await.unwrap();
    assert_eq!(ids(&run.context), vec!["a", "b"]);
    assert_eq!(run.reports.len(), 3);
    assert_eq!(run.reports[0].status, StageStatus::Applied);
    assert_eq!(
        run.reports[2].status,
        StageStatus::Skipped {
            reason: "nothing to do".to_string()
        }
    );
}

#[tokio::test]
async fn failed_stage_passes_prior_context_on() {
    let executor = PipelineExecutor::default()
        .with_stage(Append("a", 0.9))
        .with_stage(Fail { required: false })
        .with_stage(Append("b", 0.8));

    let run = executor.run(ctx()).await.unwrap();
    assert_eq!(ids(&run.context), vec!["a", "b"]);
    match &run.reports[1].status {
        StageStatus::Failed { error } => assert!(error.contains("down")),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn required_stage_failure_ends_the_run() {
    let executor = PipelineExecutor::default()
        .with_stage(Append("a", 0.9))
        .with_stage(Fail { required: true })
        .with_stage(Append("b", 0.8));

    let err = executor.run(ctx()).await.unwrap_err();
    assert!(matches!(err, MemexError::Storage(StorageError::Unavailable { .. })));
}

#[tokio::test]
async fn scores_are_clamped_and_duplicates_dropped() {
    let executor = PipelineExecutor::default()
        .with_stage(Append("a", 0.4))
        .with_stage(Corrupt);

    let run = executor.run(ctx()).await.unwrap();
    assert_eq!(ids(&run.context), vec!["a", "z"]);
    assert_eq!(run.context.results[0].score, 1.0);
    assert_eq!(run.context.results[1].score, 0.0);
}

#[tokio::test]
async fn empty_executor_returns_input() {
    let executor = PipelineExecutor::default();
    assert!(executor.is_empty());
    let run = executor.run(ctx()).await.unwrap();
    assert!(run.reports.is_empty());
    assert_eq!(run.context.search_text(), Some("q"));
}

#[tokio::test]
async fn stage_report_serializes_flat() {
    let executor = PipelineExecutor::default()
        .with_stage(Skip)
        .with_stage(Fail { required: false });
    let run = executor.run(ctx()).await.unwrap();
    let json = serde_json::to_value(&run.reports).unwrap();
    assert_eq!(json[0]["name"], "skip");
    assert_eq!(json[0]["status"], "skipped");
    assert_eq!(json[0]["reason"], "nothing to do");
    assert_eq!(json[1]["status"], "failed");
    assert!(json[1]["error"].as_str().unwrap().contains("down"));
}

#[test]
fn candidate_discovery_errors_are_fatal() {
    let err: MemexError = RetrievalError::CandidateDiscovery {
        reason: "x".to_string(),
    }
    .into();
    assert!(err.is_fatal());
}
