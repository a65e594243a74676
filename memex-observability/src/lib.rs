//! # memex-observability
//!
//! Structured tracing for the retrieval pipeline: subscriber setup driven by
//! `MEMEX_LOG` or [`ObservabilityConfig`](memex_core::config::ObservabilityConfig),
//! span macros per operation, and structured events for stage outcomes.

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
