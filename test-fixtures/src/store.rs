//! In-memory storage collaborator.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use memex_core::errors::{MemexResult, StorageError};
use memex_core::models::{EntryFilter, FeedbackScore, NodeRef, RelationEdge, RelationType};
use memex_core::traits::{IEntryStore, IFeedbackStore, IRelationStore};
use memex_core::{EntryKey, MemoryEntry};
use memex_graph::RelationIndex;

/// Entries, relation edges and feedback counters held in memory.
///
/// Every trait call is counted. Each collaborator can be switched to fail
/// with [`StorageError::Unavailable`].
#[derive(Default)]
pub struct InMemoryStore {
    entries: DashMap<EntryKey, MemoryEntry>,
    relations: RelationIndex,
    feedback: DashMap<EntryKey, FeedbackScore>,
    entry_calls: AtomicUsize,
    relation_calls: AtomicUsize,
    feedback_calls: AtomicUsize,
    fail_entries: AtomicBool,
    fail_relations: AtomicBool,
    fail_feedback: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(self, entries: impl IntoIterator<Item = MemoryEntry>) -> Self {
        for entry in entries {
            self.insert(entry);
        }
        self
    }

    pub fn with_edges(mut self, edges: impl IntoIterator<Item = RelationEdge>) -> Self {
        for edge in edges {
            self.relations.add_edge(edge);
        }
        self
    }

    pub fn with_feedback(self, key: EntryKey, score: FeedbackScore) -> Self {
        self.feedback.insert(key, score);
        self
    }

    pub fn insert(&self, entry: MemoryEntry) {
        self.entries.insert(entry.key(), entry);
    }

    pub fn set_feedback(&self, key: EntryKey, score: FeedbackScore) {
        self.feedback.insert(key, score);
    }

    pub fn fail_entries(&self, fail: bool) {
        self.fail_entries.store(fail, Ordering::SeqCst);
    }

    pub fn fail_relations(&self, fail: bool) {
        self.fail_relations.store(fail, Ordering::SeqCst);
    }

    pub fn fail_feedback(&self, fail: bool) {
        self.fail_feedback.store(fail, Ordering::SeqCst);
    }

    pub fn entry_calls(&self) -> usize {
        self.entry_calls.load(Ordering::SeqCst)
    }

    pub fn relation_calls(&self) -> usize {
        self.relation_calls.load(Ordering::SeqCst)
    }

    pub fn feedback_calls(&self) -> usize {
        self.feedback_calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check(flag: &AtomicBool, what: &str) -> MemexResult<()> {
        if flag.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable {
                reason: format!("{what} store switched off"),
            }
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl IEntryStore for InMemoryStore {
    /// Matching entries ordered by key, so results are deterministic.
    async fn find_entries(&self, filter: &EntryFilter) -> MemexResult<Vec<MemoryEntry>> {
        self.entry_calls.fetch_add(1, Ordering::SeqCst);
        Self::check(&self.fail_entries, "entry")?;
        let mut found: Vec<MemoryEntry> = self
            .entries
            .iter()
            .filter(|e| filter.matches(e.value()))
            .map(|e| e.value().clone())
            .collect();
        found.sort_by_key(MemoryEntry::key);
        Ok(found)
    }

    async fn get_entries(&self, keys: &[EntryKey]) -> MemexResult<Vec<MemoryEntry>> {
        self.entry_calls.fetch_add(1, Ordering::SeqCst);
        Self::check(&self.fail_entries, "entry")?;
        Ok(keys
            .iter()
            .filter_map(|k| self.entries.get(k).map(|e| e.value().clone()))
            .collect())
    }
}

#[async_trait]
impl IRelationStore for InMemoryStore {
    async fn edges_from(
        &self,
        node: &NodeRef,
        relation_type: Option<RelationType>,
    ) -> MemexResult<Vec<RelationEdge>> {
        self.relation_calls.fetch_add(1, Ordering::SeqCst);
        Self::check(&self.fail_relations, "relation")?;
        self.relations.edges_from(node, relation_type).await
    }

    async fn edges_to(
        &self,
        node: &NodeRef,
        relation_type: Option<RelationType>,
    ) -> MemexResult<Vec<RelationEdge>> {
        self.relation_calls.fetch_add(1, Ordering::SeqCst);
        Self::check(&self.fail_relations, "relation")?;
        self.relations.edges_to(node, relation_type).await
    }
}

#[async_trait]
impl IFeedbackStore for InMemoryStore {
    async fn load_feedback(
        &self,
        keys: &[EntryKey],
    ) -> MemexResult<HashMap<EntryKey, FeedbackScore>> {
        self.feedback_calls.fetch_add(1, Ordering::SeqCst);
        Self::check(&self.fail_feedback, "feedback")?;
        Ok(keys
            .iter()
            .filter_map(|k| self.feedback.get(k).map(|s| (k.clone(), *s.value())))
            .collect())
    }
}
