//! Span definitions per operation: query, stage, rerank, traversal.

/// Create a query span.
#[macro_export]
macro_rules! query_span {
    ($query_id:expr, $search:expr) => {
        tracing::info_span!("memex.query", query_id = %$query_id, search = %$search)
    };
}

/// Create a pipeline stage span.
#[macro_export]
macro_rules! stage_span {
    ($stage:expr) => {
        tracing::info_span!("memex.stage", stage = %$stage)
    };
}

/// Create a cross-encoder re-rank span.
#[macro_export]
macro_rules! rerank_span {
    ($candidates:expr, $top_k:expr) => {
        tracing::info_span!("memex.rerank", candidates = $candidates, top_k = $top_k)
    };
}

/// Create a relation traversal span.
#[macro_export]
macro_rules! traversal_span {
    ($start:expr, $depth:expr) => {
        tracing::info_span!("memex.traversal", start = %$start, depth = $depth)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const QUERY: &str = "memex.query";
    pub const STAGE: &str = "memex.stage";
    pub const RERANK: &str = "memex.rerank";
    pub const TRAVERSAL: &str = "memex.traversal";
}
