//! # memex-feedback
//!
//! Feedback score cache. Counters are loaded from the storage collaborator
//! in batches and memoized per `(entry_type, id)`; a key the store knows
//! nothing about is cached as all-zero so it is not asked for again.

mod cache;

pub use cache::FeedbackCache;
