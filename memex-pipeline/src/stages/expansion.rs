use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use memex_core::config::{ExpansionConfig, TraversalConfig};
use memex_core::errors::MemexResult;
use memex_core::models::result_item::sort_by_score_desc;
use memex_core::models::{NodeRef, ResultItem};
use memex_core::traits::{IEntryStore, IRelationStore};
use memex_core::EntryKey;
use memex_graph::{traverse, TraversalParams};
use tracing::debug;

use super::names;
use crate::context::PipelineContext;
use crate::stage::{Stage, StageOutcome};

/// Adds entries related to the top results.
///
/// Each reached entry scores `seed_score * decay`, where the seed is the
/// highest-ranked result it was reached from. Reached entries must still
/// pass the query's entry filter.
pub struct ExpansionStage {
    relations: Arc<dyn IRelationStore>,
    entries: Arc<dyn IEntryStore>,
    config: ExpansionConfig,
    max_results: usize,
}

impl ExpansionStage {
    pub fn new(
        relations: Arc<dyn IRelationStore>,
        entries: Arc<dyn IEntryStore>,
        config: ExpansionConfig,
        traversal: &TraversalConfig,
    ) -> Self {
        Self {
            relations,
            entries,
            config,
            max_results: traversal.max_results,
        }
    }
}

#[async_trait]
impl Stage for ExpansionStage {
    fn name(&self) -> &'static str {
        names::EXPANSION
    }

    async fn process(&self, ctx: &PipelineContext) -> MemexResult<StageOutcome> {
        if !self.config.enabled {
            return Ok(StageOutcome::Skipped("expansion disabled"));
        }
        if !ctx.has_results() {
            return Ok(StageOutcome::Skipped("no candidates"));
        }

        let present = ctx.result_keys();
        let mut order: Vec<EntryKey> = Vec::new();
        let mut seed_scores: HashMap<EntryKey, f64> = HashMap::new();

        for seed in ctx.results.iter().take(self.config.seed_count) {
            let params = TraversalParams::new(NodeRef::from(&seed.key()))
                .with_depth(self.config.depth)
                .with_max_results(self.max_results);
            let Some(reached) = traverse(self.relations.as_ref(), &params).await else {
                debug!(seed = %seed.key(), "no expansion from seed");
                continue;
            };
            for key in reached.keys() {
                if present.contains(&key) || seed_scores.contains_key(&key) {
                    continue;
                }
                seed_scores.insert(key.clone(), seed.score);
                order.push(key);
            }
        }

        if order.is_empty() {
            return Ok(StageOutcome::Skipped("nothing related"));
        }

        let filter = ctx.filters.entry_filter();
        let fetched = self.entries.get_entries(&order).await?;
        let mut results = ctx.results.clone();
        let before = results.len();
        for entry in fetched {
            if !filter.matches(&entry) {
                continue;
            }
            if let Some(seed_score) = seed_scores.get(&entry.key()) {
                results.push(ResultItem::new(entry, seed_score * self.config.decay));
            }
        }
        debug!(added = results.len() - before, "expanded along relations");
        sort_by_score_desc(&mut results);
        Ok(StageOutcome::Applied(ctx.with_results(results)))
    }
}
