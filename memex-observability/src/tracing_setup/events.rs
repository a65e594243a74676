//! Structured log events for pipeline stage outcomes.

/// A stage ran and replaced the context.
pub fn stage_applied(stage: &str, results: usize, duration_ms: u64) {
    tracing::debug!(
        event = "stage_applied",
        stage = %stage,
        results = results,
        duration_ms = duration_ms,
        "stage applied"
    );
}

/// A stage decided not to run.
pub fn stage_skipped(stage: &str, reason: &str) {
    tracing::debug!(event = "stage_skipped", stage = %stage, reason = %reason, "stage skipped");
}

/// An enhancement stage failed; the query continues with the prior context.
pub fn stage_degraded(stage: &str, error: &str) {
    tracing::warn!(
        event = "stage_degraded",
        stage = %stage,
        error = %error,
        "stage failed, continuing with prior context"
    );
}

/// A required stage failed and the query is aborted.
pub fn query_failed(stage: &str, error: &str) {
    tracing::error!(event = "query_failed", stage = %stage, error = %error, "query failed");
}

/// A query finished.
pub fn query_completed(results: usize, intent: &str, duration_ms: u64) {
    tracing::info!(
        event = "query_completed",
        results = results,
        intent = %intent,
        duration_ms = duration_ms,
        "query completed"
    );
}
