//! Document text handed to the cross-encoder, one per candidate.

use memex_core::models::{ResultItem, ScoringDocument};
use memex_core::MemoryEntry;

/// Longest document text sent to the model, in characters.
pub const MAX_DOCUMENT_CHARS: usize = 1_200;

/// The fields that describe an entry, joined by newlines.
///
/// Tools: name, category, description. Guidelines: name, content,
/// rationale. Knowledge: title, content, source. Experiences: title,
/// content, scenario, outcome. Empty fields are left out.
pub fn document_text(entry: &MemoryEntry) -> String {
    let parts: Vec<&str> = match entry {
        MemoryEntry::Tool(e) => vec![
            e.name.as_str(),
            e.meta.category.as_deref().unwrap_or(""),
            e.description.as_str(),
        ],
        MemoryEntry::Guideline(e) => vec![
            e.name.as_str(),
            e.content.as_str(),
            e.rationale.as_deref().unwrap_or(""),
        ],
        MemoryEntry::Knowledge(e) => vec![
            e.title.as_str(),
            e.content.as_str(),
            e.source.as_deref().unwrap_or(""),
        ],
        MemoryEntry::Experience(e) => vec![
            e.title.as_str(),
            e.content.as_str(),
            e.scenario.as_deref().unwrap_or(""),
            e.outcome.as_deref().unwrap_or(""),
        ],
    };
    let joined = parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    truncate_chars(joined, MAX_DOCUMENT_CHARS)
}

/// The scoring document for a result, keyed by `type:id`.
pub fn scoring_document(item: &ResultItem) -> ScoringDocument {
    ScoringDocument::new(item.key().to_string(), document_text(&item.entry))
}

fn truncate_chars(mut text: String, max: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(max) {
        text.truncate(idx);
    }
    text
}
