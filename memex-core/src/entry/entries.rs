//! Read snapshots of stored entries.
//!
//! Entries are owned by the storage collaborator. The pipeline never mutates
//! them; it only reads the free-text fields for matching and the quality
//! signal (priority or confidence) for scoring.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntryKey, EntryType, Scope};

/// Fields shared by every entry variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryMeta {
    pub id: String,
    #[serde(default)]
    pub scope: Scope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl EntryMeta {
    /// Active, global, untagged metadata stamped with the current time.
    pub fn new(id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            scope: Scope::global(),
            category: None,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolEntry {
    #[serde(flatten)]
    pub meta: EntryMeta,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidelineEntry {
    #[serde(flatten)]
    pub meta: EntryMeta,
    pub name: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    /// Priority on a 0–100 scale.
    #[serde(default)]
    pub priority: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    #[serde(flatten)]
    pub meta: EntryMeta,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Confidence on a 0–1 scale.
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(flatten)]
    pub meta: EntryMeta,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    /// Confidence on a 0–1 scale.
    #[serde(default)]
    pub confidence: f64,
}

/// A stored memory entry, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MemoryEntry {
    Tool(ToolEntry),
    Guideline(GuidelineEntry),
    Knowledge(KnowledgeEntry),
    Experience(ExperienceEntry),
}

/// Quality assumed for tools, which carry no priority or confidence.
const TOOL_BASE_QUALITY: f64 = 0.5;

impl MemoryEntry {
    pub fn entry_type(&self) -> EntryType {
        match self {
            Self::Tool(_) => EntryType::Tool,
            Self::Guideline(_) => EntryType::Guideline,
            Self::Knowledge(_) => EntryType::Knowledge,
            Self::Experience(_) => EntryType::Experience,
        }
    }

    pub fn meta(&self) -> &EntryMeta {
        match self {
            Self::Tool(e) => &e.meta,
            Self::Guideline(e) => &e.meta,
            Self::Knowledge(e) => &e.meta,
            Self::Experience(e) => &e.meta,
        }
    }

    pub fn meta_mut(&mut self) -> &mut EntryMeta {
        match self {
            Self::Tool(e) => &mut e.meta,
            Self::Guideline(e) => &mut e.meta,
            Self::Knowledge(e) => &mut e.meta,
            Self::Experience(e) => &mut e.meta,
        }
    }

    pub fn id(&self) -> &str {
        &self.meta().id
    }

    pub fn key(&self) -> EntryKey {
        EntryKey::new(self.entry_type(), self.id())
    }

    /// Display name: `name` for tools and guidelines, `title` otherwise.
    pub fn title(&self) -> &str {
        match self {
            Self::Tool(e) => &e.name,
            Self::Guideline(e) => &e.name,
            Self::Knowledge(e) => &e.title,
            Self::Experience(e) => &e.title,
        }
    }

    /// Every free-text field used for matching, in a fixed order.
    pub fn text_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::with_capacity(6);
        match self {
            Self::Tool(e) => {
                fields.push(&e.name);
                fields.push(&e.description);
            }
            Self::Guideline(e) => {
                fields.push(&e.name);
                fields.push(&e.content);
                fields.extend(e.rationale.as_deref());
            }
            Self::Knowledge(e) => {
                fields.push(&e.title);
                fields.push(&e.content);
                fields.extend(e.source.as_deref());
            }
            Self::Experience(e) => {
                fields.push(&e.title);
                fields.push(&e.content);
                fields.extend(e.scenario.as_deref());
                fields.extend(e.outcome.as_deref());
            }
        }
        let meta = self.meta();
        fields.extend(meta.category.as_deref());
        fields.extend(meta.tags.iter().map(String::as_str));
        fields.retain(|f| !f.is_empty());
        fields
    }

    /// Lowercased concatenation of [`Self::text_fields`].
    pub fn searchable_text(&self) -> String {
        self.text_fields().join(" ").to_lowercase()
    }

    /// Priority or confidence normalized to [0.0, 1.0].
    pub fn quality(&self) -> f64 {
        let q = match self {
            Self::Tool(_) => TOOL_BASE_QUALITY,
            Self::Guideline(e) => f64::from(e.priority.min(100)) / 100.0,
            Self::Knowledge(e) => e.confidence,
            Self::Experience(e) => e.confidence,
        };
        crate::constants::clamp_score(q)
    }
}
