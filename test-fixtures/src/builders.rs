//! Entry constructors for tests.

use chrono::{Duration, Utc};
use memex_core::entry::{
    EntryMeta, ExperienceEntry, GuidelineEntry, KnowledgeEntry, MemoryEntry, ToolEntry,
};
use memex_core::{Scope, ScopeType};

pub fn tool(id: &str, name: &str, description: &str) -> MemoryEntry {
    MemoryEntry::Tool(ToolEntry {
        meta: EntryMeta::new(id),
        name: name.to_string(),
        description: description.to_string(),
    })
}

pub fn guideline(id: &str, name: &str, content: &str, priority: u8) -> MemoryEntry {
    MemoryEntry::Guideline(GuidelineEntry {
        meta: EntryMeta::new(id),
        name: name.to_string(),
        content: content.to_string(),
        rationale: None,
        priority,
    })
}

pub fn knowledge(id: &str, title: &str, content: &str, confidence: f64) -> MemoryEntry {
    MemoryEntry::Knowledge(KnowledgeEntry {
        meta: EntryMeta::new(id),
        title: title.to_string(),
        content: content.to_string(),
        source: None,
        confidence,
    })
}

pub fn experience(id: &str, title: &str, content: &str, confidence: f64) -> MemoryEntry {
    MemoryEntry::Experience(ExperienceEntry {
        meta: EntryMeta::new(id),
        title: title.to_string(),
        content: content.to_string(),
        scenario: None,
        outcome: None,
        confidence,
    })
}

pub fn with_tags(mut entry: MemoryEntry, tags: &[&str]) -> MemoryEntry {
    entry.meta_mut().tags = tags.iter().map(|t| t.to_string()).collect();
    entry
}

pub fn with_category(mut entry: MemoryEntry, category: &str) -> MemoryEntry {
    entry.meta_mut().category = Some(category.to_string());
    entry
}

pub fn in_scope(mut entry: MemoryEntry, scope_type: ScopeType, scope_id: &str) -> MemoryEntry {
    entry.meta_mut().scope = Scope::new(scope_type, scope_id);
    entry
}

pub fn inactive(mut entry: MemoryEntry) -> MemoryEntry {
    entry.meta_mut().is_active = false;
    entry
}

/// Backdate `created_at` by `days`.
pub fn created_days_ago(mut entry: MemoryEntry, days: i64) -> MemoryEntry {
    entry.meta_mut().created_at = Utc::now() - Duration::days(days);
    entry
}
