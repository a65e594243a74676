use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use memex_core::config::FeedbackConfig;
use memex_core::errors::MemexResult;
use memex_core::models::result_item::sort_by_score_desc;
use memex_core::models::FeedbackScore;
use memex_core::traits::IFeedbackStore;
use memex_core::EntryKey;
use memex_feedback::FeedbackCache;

use super::names;
use crate::context::PipelineContext;
use crate::stage::{Stage, StageOutcome};

/// Attaches feedback counters for every candidate.
///
/// With `batch_load` the missing keys are loaded from the store in one
/// call. Without it, or without a store, only the cache is consulted and
/// unknown keys read as zero.
pub struct FeedbackLoadStage {
    cache: Arc<FeedbackCache>,
    store: Option<Arc<dyn IFeedbackStore>>,
    config: FeedbackConfig,
}

impl FeedbackLoadStage {
    pub fn new(
        cache: Arc<FeedbackCache>,
        store: Option<Arc<dyn IFeedbackStore>>,
        config: FeedbackConfig,
    ) -> Self {
        Self {
            cache,
            store,
            config,
        }
    }
}

#[async_trait]
impl Stage for FeedbackLoadStage {
    fn name(&self) -> &'static str {
        names::FEEDBACK
    }

    async fn process(&self, ctx: &PipelineContext) -> MemexResult<StageOutcome> {
        if !self.config.enabled {
            return Ok(StageOutcome::Skipped("feedback disabled"));
        }
        if !ctx.has_results() {
            return Ok(StageOutcome::Skipped("no candidates"));
        }

        let keys = ctx.result_keys();
        let scores: HashMap<EntryKey, FeedbackScore> = match &self.store {
            Some(store) if self.config.batch_load => {
                self.cache.load_batch(&keys, store.as_ref()).await?
            }
            _ => keys
                .into_iter()
                .map(|key| {
                    let score = self.cache.get_or_default(&key);
                    (key, score)
                })
                .collect(),
        };

        let mut next = ctx.clone();
        next.feedback = Some(scores);
        Ok(StageOutcome::Applied(next))
    }
}

/// Score multiplier for a net feedback score:
/// `1 + clamp(net * boost_per_vote, -max_penalty, max_boost)`.
pub fn feedback_multiplier(net_score: i64, config: &FeedbackConfig) -> f64 {
    let adjustment = (net_score as f64 * config.boost_per_vote)
        .clamp(-config.max_penalty, config.max_boost);
    1.0 + adjustment
}

/// Boosts or penalizes candidates by their net feedback and re-sorts.
pub struct FeedbackScoringStage {
    config: FeedbackConfig,
}

impl FeedbackScoringStage {
    pub fn new(config: FeedbackConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Stage for FeedbackScoringStage {
    fn name(&self) -> &'static str {
        names::FEEDBACK_SCORING
    }

    async fn process(&self, ctx: &PipelineContext) -> MemexResult<StageOutcome> {
        if !self.config.enabled {
            return Ok(StageOutcome::Skipped("feedback disabled"));
        }
        let Some(feedback) = &ctx.feedback else {
            return Ok(StageOutcome::Skipped("no feedback loaded"));
        };
        if feedback.values().all(FeedbackScore::is_neutral) {
            return Ok(StageOutcome::Skipped("no net feedback"));
        }

        let mut results = ctx.results.clone();
        for item in &mut results {
            if let Some(score) = feedback.get(&item.key()) {
                item.score *= feedback_multiplier(score.net_score, &self.config);
            }
        }
        sort_by_score_desc(&mut results);
        Ok(StageOutcome::Applied(ctx.with_results(results)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_is_bounded() {
        let config = FeedbackConfig::default();
        assert_eq!(feedback_multiplier(0, &config), 1.0);
        assert!((feedback_multiplier(2, &config) - 1.1).abs() < 1e-9);
        assert_eq!(feedback_multiplier(100, &config), 1.25);
        assert_eq!(feedback_multiplier(-100, &config), 0.5);
    }
}
