use serde::Serialize;

use crate::constants::clamp_score;
use crate::entry::{EntryKey, EntryType, MemoryEntry};

/// One ranked result. Position in the result list is its rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultItem {
    /// Relevance in [0.0, 1.0].
    pub score: f64,
    #[serde(flatten)]
    pub entry: MemoryEntry,
}

impl ResultItem {
    /// Wrap an entry, clamping the score into [0.0, 1.0].
    pub fn new(entry: MemoryEntry, score: f64) -> Self {
        Self {
            score: clamp_score(score),
            entry,
        }
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry.entry_type()
    }

    pub fn id(&self) -> &str {
        self.entry.id()
    }

    pub fn key(&self) -> EntryKey {
        self.entry.key()
    }

    /// Replace the score, clamping into [0.0, 1.0].
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = clamp_score(score);
        self
    }
}

/// Stable sort by score, highest first. Ties keep their prior order.
pub fn sort_by_score_desc(items: &mut [ResultItem]) {
    items.sort_by(|a, b| b.score.total_cmp(&a.score));
}
