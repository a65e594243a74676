//! `QueryPipeline`: the caller-facing entry point.

use std::sync::Arc;
use std::time::Instant;

use memex_core::config::MemexConfig;
use memex_core::errors::{MemexResult, ValidationError};
use memex_core::models::{CrossEncoderMeta, IntentResult, QueryFilters, ResultItem};
use memex_core::traits::{IChatClient, IEntryStore, IFeedbackStore, IRelationStore, IRelevanceScorer};
use memex_feedback::FeedbackCache;
use memex_graph::RelationIndex;
use memex_observability::query_span;
use memex_observability::tracing_setup::events;
use memex_query::{EntityExtractor, ExtractorOptions};
use memex_rerank::{CrossEncoderReranker, LlmRelevanceScorer, OpenAiCompatClient};
use serde::Serialize;
use tracing::Instrument;
use uuid::Uuid;

use crate::context::PipelineContext;
use crate::executor::{PipelineExecutor, StageReport};
use crate::stages::{
    CrossEncoderStage, DiscoveryStage, ExpansionStage, FeedbackLoadStage, FeedbackScoringStage,
    LimitStage, QueryAnalysisStage, RelatedToStage,
};

/// Ranked results plus what the pipeline did to produce them.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    pub results: Vec<ResultItem>,
    pub meta: QueryMeta,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryMeta {
    pub query_id: Uuid,
    pub intent: Option<IntentResult>,
    pub entity_count: usize,
    pub stages: Vec<StageReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_encoder: Option<CrossEncoderMeta>,
    pub traversal_truncated: bool,
    pub duration_ms: u64,
}

/// The retrieval pipeline with its collaborators wired in.
pub struct QueryPipeline {
    executor: PipelineExecutor,
    feedback_cache: Arc<FeedbackCache>,
}

impl QueryPipeline {
    pub fn builder(config: MemexConfig) -> QueryPipelineBuilder {
        QueryPipelineBuilder::new(config)
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.executor.stage_names()
    }

    /// The feedback cache shared by every query on this pipeline.
    pub fn feedback_cache(&self) -> &Arc<FeedbackCache> {
        &self.feedback_cache
    }

    /// Run one query. Invalid filters and a candidate-discovery failure are
    /// returned as errors; every other stage failure degrades the ranking
    /// instead.
    pub async fn run_query(&self, search: &str, filters: QueryFilters) -> MemexResult<QueryResponse> {
        filters.validate()?;
        let query_id = Uuid::new_v4();
        let started = Instant::now();
        let ctx = PipelineContext::new(search, filters);

        let span = query_span!(query_id, search);
        let run = self.executor.run(ctx).instrument(span).await?;
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let ctx = run.context;
        events::query_completed(
            ctx.results.len(),
            ctx.intent.map_or("none", |i| i.intent.as_str()),
            duration_ms,
        );

        Ok(QueryResponse {
            meta: QueryMeta {
                query_id,
                intent: ctx.intent,
                entity_count: ctx.entities.len(),
                stages: run.reports,
                cross_encoder: ctx.cross_encoder,
                traversal_truncated: ctx.traversal_truncated,
                duration_ms,
            },
            results: ctx.results,
        })
    }
}

/// Wires collaborators into a [`QueryPipeline`].
///
/// Only the entry store is mandatory. Without a relation store, relation
/// filters and expansion see an empty graph; without a chat client or
/// scorer, the cross-encoder and LLM intent are skipped.
pub struct QueryPipelineBuilder {
    config: MemexConfig,
    entries: Option<Arc<dyn IEntryStore>>,
    relations: Option<Arc<dyn IRelationStore>>,
    feedback: Option<Arc<dyn IFeedbackStore>>,
    chat: Option<Arc<dyn IChatClient>>,
    scorer: Option<Arc<dyn IRelevanceScorer>>,
    feedback_cache: Option<Arc<FeedbackCache>>,
    extractor: Option<EntityExtractor>,
}

impl QueryPipelineBuilder {
    pub fn new(config: MemexConfig) -> Self {
        Self {
            config,
            entries: None,
            relations: None,
            feedback: None,
            chat: None,
            scorer: None,
            feedback_cache: None,
            extractor: None,
        }
    }

    pub fn entry_store(mut self, store: Arc<dyn IEntryStore>) -> Self {
        self.entries = Some(store);
        self
    }

    pub fn relation_store(mut self, store: Arc<dyn IRelationStore>) -> Self {
        self.relations = Some(store);
        self
    }

    pub fn feedback_store(mut self, store: Arc<dyn IFeedbackStore>) -> Self {
        self.feedback = Some(store);
        self
    }

    pub fn chat_client(mut self, client: Arc<dyn IChatClient>) -> Self {
        self.chat = Some(client);
        self
    }

    /// Use the OpenAI-compatible client described by `[llm]`.
    pub fn chat_client_from_config(self) -> MemexResult<Self> {
        let client =
            OpenAiCompatClient::from_config(&self.config.llm, self.config.cross_encoder.timeout_ms)?;
        Ok(self.chat_client(Arc::new(client)))
    }

    /// Score relevance with `scorer` instead of prompting the chat client.
    pub fn relevance_scorer(mut self, scorer: Arc<dyn IRelevanceScorer>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    /// Share a feedback cache between pipelines.
    pub fn feedback_cache(mut self, cache: Arc<FeedbackCache>) -> Self {
        self.feedback_cache = Some(cache);
        self
    }

    pub fn extractor(mut self, extractor: EntityExtractor) -> Self {
        self.extractor = Some(extractor);
        self
    }

    pub fn build(self) -> MemexResult<QueryPipeline> {
        let config = self.config;
        config.validate()?;
        let entries = self.entries.ok_or_else(|| ValidationError::InvalidParameter {
            name: "entry_store".to_string(),
            reason: "an entry store is required".to_string(),
        })?;
        let relations: Arc<dyn IRelationStore> = match self.relations {
            Some(relations) => relations,
            None => Arc::new(RelationIndex::new()),
        };
        let extractor = Arc::new(
            self.extractor
                .unwrap_or_else(|| EntityExtractor::new(ExtractorOptions::from(&config.extraction))),
        );
        let feedback_cache = self
            .feedback_cache
            .unwrap_or_else(|| Arc::new(FeedbackCache::from_config(&config.feedback)));

        let scorer: Option<Arc<dyn IRelevanceScorer>> = match (self.scorer, &self.chat) {
            (Some(scorer), _) => Some(scorer),
            (None, Some(chat)) => Some(Arc::new(LlmRelevanceScorer::from_config(
                Arc::clone(chat),
                &config.cross_encoder,
            ))),
            (None, None) => None,
        };
        let reranker = scorer
            .map(|scorer| Arc::new(CrossEncoderReranker::new(scorer, config.cross_encoder.clone())));

        let executor = PipelineExecutor::default()
            .with_stage(QueryAnalysisStage::new(Arc::clone(&extractor), self.chat))
            .with_stage(DiscoveryStage::new(
                Arc::clone(&entries),
                extractor,
                config.retrieval.clone(),
            ))
            .with_stage(RelatedToStage::new(
                Arc::clone(&relations),
                config.traversal.clone(),
            ))
            .with_stage(ExpansionStage::new(
                relations,
                entries,
                config.expansion.clone(),
                &config.traversal,
            ))
            .with_stage(FeedbackLoadStage::new(
                Arc::clone(&feedback_cache),
                self.feedback,
                config.feedback.clone(),
            ))
            .with_stage(FeedbackScoringStage::new(config.feedback.clone()))
            .with_stage(CrossEncoderStage::new(reranker, config.cross_encoder.enabled))
            .with_stage(LimitStage::new(config.retrieval));

        Ok(QueryPipeline {
            executor,
            feedback_cache,
        })
    }
}
