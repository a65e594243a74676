//! Bounded breadth-first traversal over relation edges.

mod bfs;

use memex_core::config::TraversalConfig;
use memex_core::constants::clamp_depth;
use memex_core::models::{Direction, NodeRef, RelatedTo, RelationType};
use memex_core::{EntryKey, EntryType};
use serde::Serialize;

pub use bfs::{traverse, try_traverse};

/// Default hop count when none is given.
pub const DEFAULT_DEPTH: u32 = 1;

/// Default cap on emitted nodes.
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Parameters for one traversal. Depth is clamped on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TraversalParams {
    pub start: NodeRef,
    pub direction: Direction,
    pub relation_type: Option<RelationType>,
    depth: u32,
    pub max_results: usize,
}

impl TraversalParams {
    pub fn new(start: NodeRef) -> Self {
        Self {
            start,
            direction: Direction::Both,
            relation_type: None,
            depth: DEFAULT_DEPTH,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Build from a relation filter, filling gaps from `config`.
    pub fn from_related_to(related: &RelatedTo, config: &TraversalConfig) -> Self {
        Self::new(related.anchor.clone())
            .with_direction(related.direction)
            .with_relation_type(related.relation_type)
            .with_depth(related.depth.unwrap_or(config.default_depth))
            .with_max_results(related.max_results.unwrap_or(config.max_results))
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_relation_type(mut self, relation_type: Option<RelationType>) -> Self {
        self.relation_type = relation_type;
        self
    }

    /// Depth clamped to `[1, 5]`.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = clamp_depth(depth);
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

/// Reachable entry ids grouped by entry type.
///
/// Nodes of other types (projects, unknown types) count towards
/// `max_results` while walking but never appear here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TraversalResult {
    pub tools: Vec<String>,
    pub guidelines: Vec<String>,
    pub knowledge: Vec<String>,
    pub experiences: Vec<String>,
    /// The walk stopped because it reached `max_results`.
    pub truncated: bool,
}

impl TraversalResult {
    pub fn ids(&self, entry_type: EntryType) -> &[String] {
        match entry_type {
            EntryType::Tool => &self.tools,
            EntryType::Guideline => &self.guidelines,
            EntryType::Knowledge => &self.knowledge,
            EntryType::Experience => &self.experiences,
        }
    }

    fn bucket_mut(&mut self, entry_type: EntryType) -> &mut Vec<String> {
        match entry_type {
            EntryType::Tool => &mut self.tools,
            EntryType::Guideline => &mut self.guidelines,
            EntryType::Knowledge => &mut self.knowledge,
            EntryType::Experience => &mut self.experiences,
        }
    }

    pub fn contains(&self, key: &EntryKey) -> bool {
        self.ids(key.entry_type).iter().any(|id| id == &key.id)
    }

    /// Every bucketed node as an entry key, bucket by bucket.
    pub fn keys(&self) -> Vec<EntryKey> {
        EntryType::ALL
            .into_iter()
            .flat_map(|t| self.ids(t).iter().map(move |id| EntryKey::new(t, id.clone())))
            .collect()
    }

    pub fn len(&self) -> usize {
        EntryType::ALL.into_iter().map(|t| self.ids(t).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
