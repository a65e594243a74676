//! # memex-pipeline
//!
//! The retrieval pipeline. A query runs through a fixed, ordered list of
//! stages over one [`PipelineContext`]:
//!
//! ```text
//! QueryPipeline::run_query
//! └── PipelineExecutor
//!     ├── query_analysis   entities + intent
//!     ├── discovery        candidate set from the entry store (required)
//!     ├── related_to       keep candidates reachable from an anchor
//!     ├── expansion        pull in neighbours of the top results
//!     ├── feedback         load feedback counters (cached)
//!     ├── feedback_scoring boost/penalize by net feedback
//!     ├── cross_encoder    LLM joint scoring of the top K
//!     └── limit            truncate to the requested size
//! ```
//!
//! Only discovery may fail a query. Any other stage that errors is logged,
//! reported, and its input context passed on unchanged.

pub mod context;
pub mod executor;
pub mod pipeline;
pub mod relevance;
pub mod stage;
pub mod stages;

pub use context::PipelineContext;
pub use executor::{PipelineExecutor, PipelineRun, StageReport, StageStatus};
pub use pipeline::{QueryMeta, QueryPipeline, QueryPipelineBuilder, QueryResponse};
pub use stage::{Stage, StageOutcome};
