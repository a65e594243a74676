use std::collections::HashMap;

use memex_core::models::{
    CrossEncoderMeta, ExtractedEntity, FeedbackScore, IntentResult, QueryFilters, ResultItem,
};
use memex_core::EntryKey;

/// Per-query state handed from stage to stage.
///
/// Stages never mutate the context they are given; they return a new one.
/// Collaborators live on the stages, so the context is plain data.
#[derive(Debug, Clone, Default)]
pub struct PipelineContext {
    /// Trimmed search text, `None` when the caller sent none.
    pub search: Option<String>,
    pub filters: QueryFilters,
    /// Ranked candidates. Position is rank.
    pub results: Vec<ResultItem>,
    pub intent: Option<IntentResult>,
    pub entities: Vec<ExtractedEntity>,
    /// Feedback counters per candidate. `None` means no adjustment.
    pub feedback: Option<HashMap<EntryKey, FeedbackScore>>,
    /// Present only when the cross-encoder actually ran.
    pub cross_encoder: Option<CrossEncoderMeta>,
    /// The relation filter hit its result cap.
    pub traversal_truncated: bool,
}

impl PipelineContext {
    pub fn new(search: &str, filters: QueryFilters) -> Self {
        let search = search.trim();
        Self {
            search: (!search.is_empty()).then(|| search.to_string()),
            filters,
            ..Self::default()
        }
    }

    pub fn search_text(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn result_keys(&self) -> Vec<EntryKey> {
        self.results.iter().map(ResultItem::key).collect()
    }

    /// A copy with `results` replaced.
    pub fn with_results(&self, results: Vec<ResultItem>) -> Self {
        Self {
            results,
            ..self.clone()
        }
    }
}
