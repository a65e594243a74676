//! Candidate scoring for discovery.
//!
//! `relevance = 0.6 * term_ratio + 0.4 * entity_ratio` when the query has
//! entities, otherwise `term_ratio`. The score mixes relevance with entry
//! quality and is multiplied by the intent boost for preferred types.

use memex_core::constants::clamp_score;
use memex_core::models::{ExtractedEntity, IntentKind};
use memex_core::MemoryEntry;
use memex_query::EntityExtractor;

const TERM_WEIGHT: f64 = 0.6;
const ENTITY_WEIGHT: f64 = 0.4;
const RELEVANCE_WEIGHT: f64 = 0.7;
const QUALITY_WEIGHT: f64 = 0.3;
const MIN_TERM_LEN: usize = 2;
const MIN_NEEDLE_LEN: usize = 3;

const STOP_TERMS: &[&str] = &[
    "a", "an", "and", "are", "be", "can", "do", "does", "for", "how", "i", "in", "is", "it", "me",
    "my", "of", "on", "or", "should", "that", "the", "this", "to", "use", "using", "was", "what",
    "when", "where", "why", "with",
];

/// What discovery matches entries against, derived once per query.
#[derive(Debug, Clone, Default)]
pub struct QuerySignals {
    terms: Vec<String>,
    /// One needle list per entity: normalized value plus variants.
    entity_needles: Vec<Vec<String>>,
    intent: Option<IntentKind>,
}

impl QuerySignals {
    pub fn new(
        search: Option<&str>,
        entities: &[ExtractedEntity],
        intent: Option<IntentKind>,
        extractor: &EntityExtractor,
    ) -> Self {
        let terms = search.map(query_terms).unwrap_or_default();
        let entity_needles = entities
            .iter()
            .map(|entity| {
                let mut needles = vec![entity.normalized_value.to_lowercase()];
                for variant in extractor.variants(entity) {
                    let variant = variant.to_lowercase();
                    if !needles.contains(&variant) {
                        needles.push(variant);
                    }
                }
                needles.retain(|n| n.chars().count() >= MIN_NEEDLE_LEN);
                needles
            })
            .filter(|needles| !needles.is_empty())
            .collect();
        Self {
            terms,
            entity_needles,
            intent,
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Whether there is anything to match text against.
    pub fn has_text(&self) -> bool {
        !self.terms.is_empty() || !self.entity_needles.is_empty()
    }

    /// Score `entry`, or `None` when text signals exist and nothing matched.
    pub fn score(&self, entry: &MemoryEntry, intent_type_boost: f64) -> Option<f64> {
        let relevance = if self.has_text() {
            let text = entry.searchable_text();
            let term_hits = self.terms.iter().filter(|t| text.contains(t.as_str())).count();
            let entity_hits = self
                .entity_needles
                .iter()
                .filter(|needles| needles.iter().any(|n| text.contains(n.as_str())))
                .count();
            if term_hits == 0 && entity_hits == 0 {
                return None;
            }
            let term_ratio = ratio(term_hits, self.terms.len());
            if self.entity_needles.is_empty() {
                term_ratio
            } else {
                TERM_WEIGHT * term_ratio
                    + ENTITY_WEIGHT * ratio(entity_hits, self.entity_needles.len())
            }
        } else {
            0.0
        };

        let base = if self.has_text() {
            RELEVANCE_WEIGHT * relevance + QUALITY_WEIGHT * entry.quality()
        } else {
            entry.quality()
        };

        let boost = match self.intent {
            Some(intent) if intent.preferred_types().contains(&entry.entry_type()) => {
                intent_type_boost
            }
            _ => 1.0,
        };
        Some(clamp_score(base * boost))
    }
}

/// Lowercased search terms without stop words or repeats.
pub fn query_terms(search: &str) -> Vec<String> {
    let lowered = search.to_lowercase();
    let mut terms: Vec<String> = Vec::new();
    for term in lowered.split(|c: char| !(c.is_alphanumeric() || c == '_')) {
        if term.chars().count() < MIN_TERM_LEN || STOP_TERMS.contains(&term) {
            continue;
        }
        if !terms.iter().any(|t| t == term) {
            terms.push(term.to_string());
        }
    }
    terms
}

fn ratio(hits: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}
