//! # memex-core
//!
//! Foundation crate for the memex retrieval pipeline.
//! Defines the entry model, ranking models, traits for the storage and LLM
//! collaborators, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod entry;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MemexConfig;
pub use entry::{EntryKey, EntryType, MemoryEntry, Scope, ScopeType};
pub use errors::{MemexError, MemexResult};
pub use models::{IntentKind, ResultItem};
