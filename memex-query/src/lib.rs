//! # memex-query
//!
//! Query understanding for the retrieval pipeline.
//!
//! - [`entities`]: typed spans (paths, identifiers, packages, URLs, error
//!   codes, commands) with confidence, variants, and semantic types.
//! - [`intent`]: one of six intents via ordered pattern sets, with an
//!   optional LLM pass.
//!
//! Pattern tables compile once per process and are immutable afterwards, so
//! both components are safe to share across concurrent queries.

pub mod entities;
pub mod intent;

pub use entities::{EntityExtractor, ExtractorOptions};
pub use intent::IntentClassifier;
