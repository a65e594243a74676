use std::collections::HashMap;

use async_trait::async_trait;

use crate::entry::{EntryKey, MemoryEntry};
use crate::errors::MemexResult;
use crate::models::{EntryFilter, FeedbackScore, NodeRef, RelationEdge, RelationType};

/// Read access to stored entries. The pipeline never writes.
#[async_trait]
pub trait IEntryStore: Send + Sync {
    /// All entries admitted by `filter`.
    async fn find_entries(&self, filter: &EntryFilter) -> MemexResult<Vec<MemoryEntry>>;

    /// Entries for the given keys. Missing keys are skipped, not errors.
    async fn get_entries(&self, keys: &[EntryKey]) -> MemexResult<Vec<MemoryEntry>>;
}

/// Read access to the relation edge set.
#[async_trait]
pub trait IRelationStore: Send + Sync {
    /// Edges whose source is `node`, optionally of one relation type.
    async fn edges_from(
        &self,
        node: &NodeRef,
        relation_type: Option<RelationType>,
    ) -> MemexResult<Vec<RelationEdge>>;

    /// Edges whose target is `node`, optionally of one relation type.
    async fn edges_to(
        &self,
        node: &NodeRef,
        relation_type: Option<RelationType>,
    ) -> MemexResult<Vec<RelationEdge>>;
}

/// Read access to aggregated feedback counters.
#[async_trait]
pub trait IFeedbackStore: Send + Sync {
    /// Counters for the given keys. Keys with no feedback may be omitted.
    async fn load_feedback(
        &self,
        keys: &[EntryKey],
    ) -> MemexResult<HashMap<EntryKey, FeedbackScore>>;
}
