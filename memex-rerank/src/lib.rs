//! # memex-rerank
//!
//! Cross-encoder re-ranking: the top candidates are scored jointly with the
//! query by an LLM, the scores are blended into the pipeline score, and the
//! whole list is re-sorted.
//!
//! - [`documents`]: per-entry document text.
//! - [`prompt`]: the scoring prompt, plain or entity-aware.
//! - [`parse`]: tolerant response parsing and scale detection.
//! - [`blend`]: the score blend.
//! - [`scorer`]: an [`IRelevanceScorer`](memex_core::traits::IRelevanceScorer)
//!   over any chat client.
//! - [`reranker`]: top-K selection, bounded-concurrency chunking, merge.
//! - [`client`]: OpenAI-compatible `chat/completions` client.

pub mod blend;
pub mod client;
pub mod documents;
pub mod parse;
pub mod prompt;
pub mod reranker;
pub mod scorer;

pub use client::OpenAiCompatClient;
pub use reranker::{CrossEncoderReranker, RerankOutcome};
pub use scorer::LlmRelevanceScorer;
