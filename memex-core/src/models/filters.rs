//! Caller-facing query filters and the storage-facing entry filter derived
//! from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::relation::{Direction, NodeRef, RelationType};
use crate::entry::{EntryType, MemoryEntry, Scope, ScopeType};
use crate::errors::ValidationError;

/// Restrict entries to one scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeFilter {
    pub scope_type: ScopeType,
    #[serde(default)]
    pub scope_id: Option<String>,
    /// Also admit global entries.
    #[serde(default)]
    pub inherit: bool,
}

impl ScopeFilter {
    pub fn matches(&self, scope: &Scope) -> bool {
        if self.inherit && scope.is_global() {
            return true;
        }
        scope.scope_type == self.scope_type
            && (self.scope_type == ScopeType::Global || scope.scope_id == self.scope_id)
    }
}

/// Tag constraints. Comparison is case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagFilter {
    /// At least one must be present (ignored when empty).
    pub include: Vec<String>,
    /// All must be present.
    pub require: Vec<String>,
    /// None may be present.
    pub exclude: Vec<String>,
}

impl TagFilter {
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.require.is_empty() && self.exclude.is_empty()
    }

    pub fn matches(&self, tags: &[String]) -> bool {
        let has = |wanted: &String| tags.iter().any(|t| t.eq_ignore_ascii_case(wanted));
        (self.include.is_empty() || self.include.iter().any(has))
            && self.require.iter().all(has)
            && !self.exclude.iter().any(has)
    }
}

/// Creation-time window, both ends inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemporalFilter {
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
}

impl TemporalFilter {
    pub fn matches(&self, created_at: &DateTime<Utc>) -> bool {
        self.created_after.map_or(true, |after| *created_at >= after)
            && self.created_before.map_or(true, |before| *created_at <= before)
    }
}

/// Restrict results to entries reachable from an anchor node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedTo {
    pub anchor: NodeRef,
    #[serde(default)]
    pub relation_type: Option<RelationType>,
    #[serde(default)]
    pub direction: Direction,
    /// Clamped to [1, 5]; config default when absent.
    #[serde(default)]
    pub depth: Option<u32>,
    #[serde(default)]
    pub max_results: Option<usize>,
}

impl RelatedTo {
    /// Reject a filter that cannot describe a traversal.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.anchor.id.trim().is_empty() {
            return Err(ValidationError::MissingAnchor);
        }
        if self.max_results == Some(0) {
            return Err(ValidationError::InvalidParameter {
                name: "related_to.max_results".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Filters accepted by `run_query`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryFilters {
    pub scope: Option<ScopeFilter>,
    /// Entry types to search; empty means all four.
    pub types: Vec<EntryType>,
    pub tags: TagFilter,
    pub temporal: TemporalFilter,
    pub include_inactive: bool,
    pub related_to: Option<RelatedTo>,
    pub limit: Option<usize>,
    /// Per-query cross-encoder switch. `None` follows config.
    pub cross_encoder: Option<bool>,
    /// Ask the LLM for the intent instead of relying on patterns alone.
    pub llm_intent: bool,
}

impl QueryFilters {
    /// Checks run before any stage touches storage.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.related_to {
            Some(related) => related.validate(),
            None => Ok(()),
        }
    }

    /// The subset of filters the storage collaborator applies.
    pub fn entry_filter(&self) -> EntryFilter {
        EntryFilter {
            scope: self.scope.clone(),
            types: self.types.clone(),
            tags: self.tags.clone(),
            temporal: self.temporal.clone(),
            include_inactive: self.include_inactive,
        }
    }
}

/// Filter passed to `IEntryStore::find_entries`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryFilter {
    pub scope: Option<ScopeFilter>,
    pub types: Vec<EntryType>,
    pub tags: TagFilter,
    pub temporal: TemporalFilter,
    pub include_inactive: bool,
}

impl EntryFilter {
    pub fn admits_type(&self, entry_type: EntryType) -> bool {
        self.types.is_empty() || self.types.contains(&entry_type)
    }

    /// Reference predicate for stores that filter in memory.
    pub fn matches(&self, entry: &MemoryEntry) -> bool {
        let meta = entry.meta();
        self.admits_type(entry.entry_type())
            && (self.include_inactive || meta.is_active)
            && self.scope.as_ref().map_or(true, |s| s.matches(&meta.scope))
            && self.tags.matches(&meta.tags)
            && self.temporal.matches(&meta.created_at)
    }
}
