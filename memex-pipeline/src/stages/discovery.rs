use std::sync::Arc;

use async_trait::async_trait;
use memex_core::config::RetrievalConfig;
use memex_core::errors::{MemexResult, RetrievalError};
use memex_core::models::result_item::sort_by_score_desc;
use memex_core::models::ResultItem;
use memex_core::traits::IEntryStore;
use memex_query::EntityExtractor;
use tracing::info;

use super::names;
use crate::context::PipelineContext;
use crate::relevance::QuerySignals;
use crate::stage::{Stage, StageOutcome};

/// Builds the candidate set from the entry store. Required: a store
/// failure fails the query.
pub struct DiscoveryStage {
    store: Arc<dyn IEntryStore>,
    extractor: Arc<EntityExtractor>,
    config: RetrievalConfig,
}

impl DiscoveryStage {
    pub fn new(
        store: Arc<dyn IEntryStore>,
        extractor: Arc<EntityExtractor>,
        config: RetrievalConfig,
    ) -> Self {
        Self {
            store,
            extractor,
            config,
        }
    }
}

#[async_trait]
impl Stage for DiscoveryStage {
    fn name(&self) -> &'static str {
        names::DISCOVERY
    }

    fn is_required(&self) -> bool {
        true
    }

    async fn process(&self, ctx: &PipelineContext) -> MemexResult<StageOutcome> {
        let filter = ctx.filters.entry_filter();
        let entries = self.store.find_entries(&filter).await.map_err(|e| {
            RetrievalError::CandidateDiscovery {
                reason: e.to_string(),
            }
        })?;
        let fetched = entries.len();

        let signals = QuerySignals::new(
            ctx.search_text(),
            &ctx.entities,
            ctx.intent.map(|i| i.intent),
            &self.extractor,
        );
        let mut results: Vec<ResultItem> = entries
            .into_iter()
            .filter_map(|entry| {
                let score = signals.score(&entry, self.config.intent_type_boost)?;
                (score >= self.config.min_score).then(|| ResultItem::new(entry, score))
            })
            .collect();
        sort_by_score_desc(&mut results);

        info!(fetched, candidates = results.len(), "candidates discovered");
        Ok(StageOutcome::Applied(ctx.with_results(results)))
    }
}
