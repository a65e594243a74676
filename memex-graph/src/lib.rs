//! # memex-graph
//!
//! Relation graph traversal for the retrieval pipeline.
//!
//! - [`traversal`]: bounded BFS from an anchor node, results bucketed by
//!   entry type, "no result" on failure.
//! - [`query`]: anchored single-hop relation lookups with validation.
//! - [`index`]: a petgraph-backed in-memory edge set implementing
//!   [`IRelationStore`](memex_core::traits::IRelationStore).

pub mod index;
pub mod query;
pub mod traversal;

pub use index::RelationIndex;
pub use query::RelationQuery;
pub use traversal::{traverse, try_traverse, TraversalParams, TraversalResult};
