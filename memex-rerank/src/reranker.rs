//! Top-K selection, bounded-concurrency scoring, blend and re-sort.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::try_join_all;
use memex_core::config::CrossEncoderConfig;
use memex_core::constants::NEUTRAL_RELEVANCE;
use memex_core::errors::{LlmError, MemexResult};
use memex_core::models::result_item::sort_by_score_desc;
use memex_core::models::{CrossEncoderMeta, RelevanceScore, ResultItem, ScoringDocument};
use memex_core::traits::IRelevanceScorer;
use tokio::sync::Semaphore;
use tracing::{debug, info};

use crate::blend::blend;
use crate::documents::scoring_document;

/// Re-ranked results and what the run did.
#[derive(Debug, Clone)]
pub struct RerankOutcome {
    pub items: Vec<ResultItem>,
    pub meta: CrossEncoderMeta,
}

/// Cross-encoder re-ranker over any relevance scorer.
pub struct CrossEncoderReranker {
    scorer: Arc<dyn IRelevanceScorer>,
    config: CrossEncoderConfig,
}

impl CrossEncoderReranker {
    pub fn new(scorer: Arc<dyn IRelevanceScorer>, config: CrossEncoderConfig) -> Self {
        Self { scorer, config }
    }

    pub fn is_available(&self) -> bool {
        self.scorer.is_available()
    }

    pub fn config(&self) -> &CrossEncoderConfig {
        &self.config
    }

    /// Score the top `top_k` items against `query`, blend, and re-sort the
    /// whole list. Items past the shortlist keep their scores.
    ///
    /// Any scorer failure or timeout is returned as an error and `items` is
    /// left as it was.
    pub async fn rerank(&self, query: &str, items: &[ResultItem]) -> MemexResult<RerankOutcome> {
        let started = Instant::now();
        if !self.scorer.is_available() {
            return Err(LlmError::NotAvailable {
                reason: "relevance scorer is not configured".to_string(),
            }
            .into());
        }

        let shortlist = top_k_indices(items, self.config.top_k);
        let documents: Vec<ScoringDocument> =
            shortlist.iter().map(|&i| scoring_document(&items[i])).collect();

        let scores = self.score_chunked(query, &documents).await?;

        let mut reranked = items.to_vec();
        for (&index, doc) in shortlist.iter().zip(&documents) {
            let cross = scores.get(&doc.id).copied().unwrap_or(NEUTRAL_RELEVANCE);
            let original = reranked[index].score;
            reranked[index].score = blend(self.config.alpha, cross, original);
        }
        sort_by_score_desc(&mut reranked);

        let meta = CrossEncoderMeta {
            applied: true,
            candidates_scored: documents.len(),
            processing_time_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        };
        info!(
            candidates = meta.candidates_scored,
            elapsed_ms = meta.processing_time_ms,
            "cross-encoder applied"
        );
        Ok(RerankOutcome {
            items: reranked,
            meta,
        })
    }

    /// Split into chunks of `max_batch_size`, at most `concurrency` in
    /// flight, each bounded by `timeout_ms`. Results are merged by id.
    async fn score_chunked(
        &self,
        query: &str,
        documents: &[ScoringDocument],
    ) -> MemexResult<HashMap<String, f64>> {
        let chunk_size = self.config.max_batch_size.max(1);
        let permits = Arc::new(Semaphore::new(self.config.concurrency.max(1)));
        let timeout = Duration::from_millis(self.config.timeout_ms);

        let calls = documents
            .chunks(chunk_size)
            .map(|chunk| self.score_chunk(query, chunk, Arc::clone(&permits), timeout));

        let chunks: Vec<Vec<RelevanceScore>> = try_join_all(calls).await?;
        Ok(chunks
            .into_iter()
            .flatten()
            .map(|s| (s.id, s.score))
            .collect())
    }

    async fn score_chunk(
        &self,
        query: &str,
        chunk: &[ScoringDocument],
        permits: Arc<Semaphore>,
        timeout: Duration,
    ) -> MemexResult<Vec<RelevanceScore>> {
        let _permit = permits
            .acquire_owned()
            .await
            .map_err(|e| LlmError::Transport {
                reason: format!("scoring pool closed: {e}"),
            })?;
        debug!(documents = chunk.len(), "scoring chunk");
        match tokio::time::timeout(timeout, self.scorer.score_relevance(query, chunk)).await {
            Ok(result) => result,
            Err(_) => Err(LlmError::Timeout {
                timeout_ms: self.config.timeout_ms,
            }
            .into()),
        }
    }
}

/// Indices of the `k` highest-scored items. Ties keep list order.
fn top_k_indices(items: &[ResultItem], k: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.sort_by(|&a, &b| items[b].score.total_cmp(&items[a].score));
    indices.truncate(k);
    indices
}
