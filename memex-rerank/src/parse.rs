//! Tolerant parsing of scoring responses.
//!
//! Rules, in order:
//! - no JSON array anywhere in the reply: every document scores 0
//! - an empty array: every document scores [`NEUTRAL_RELEVANCE`]
//! - an item without a usable numeric score, or a document the array never
//!   mentions: [`NEUTRAL_RELEVANCE`]
//! - numeric scores are divided by the detected scale, then clamped

use memex_core::constants::{clamp_score, NEUTRAL_RELEVANCE};
use memex_core::models::{RelevanceScore, ScoringDocument};
use serde_json::Value;
use tracing::debug;

/// Scale the raw scores were given on, from the largest observed value.
///
/// Above 10 reads as 0-100, above 5 as 0-10, anything else as 0-5. A set
/// where every document got exactly 10 is indistinguishable from a 0-10
/// scale whatever the model intended.
pub fn detect_scale(raw: &[f64]) -> f64 {
    let max = raw
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);
    if max > 10.0 {
        100.0
    } else if max > 5.0 {
        10.0
    } else {
        5.0
    }
}

/// One score per document, in document order.
pub fn parse_scores(content: &str, documents: &[ScoringDocument]) -> Vec<RelevanceScore> {
    let Some(items) = find_json_array(content) else {
        debug!(documents = documents.len(), "no json array in scoring reply");
        return uniform(documents, 0.0);
    };
    if items.is_empty() {
        return uniform(documents, NEUTRAL_RELEVANCE);
    }

    // raw score per document; outer None = never mentioned, inner None = no usable score
    let mut raw: Vec<Option<Option<f64>>> = vec![None; documents.len()];
    for (position, item) in items.iter().enumerate() {
        let (index, score) = match item {
            Value::Object(map) => {
                let index = map.get("id").and_then(|id| resolve_id(id, documents));
                (index, map.get("score").and_then(numeric))
            }
            // bare numbers are read positionally
            Value::Number(_) => (Some(position), numeric(item)),
            _ => continue,
        };
        let Some(index) = index.filter(|i| *i < documents.len()) else {
            continue;
        };
        if raw[index].is_none() {
            raw[index] = Some(score);
        }
    }

    let observed: Vec<f64> = raw.iter().flatten().flatten().copied().collect();
    let scale = detect_scale(&observed);

    documents
        .iter()
        .zip(raw)
        .map(|(doc, raw)| RelevanceScore {
            id: doc.id.clone(),
            score: match raw.flatten() {
                Some(value) => clamp_score(value / scale),
                None => NEUTRAL_RELEVANCE,
            },
        })
        .collect()
}

/// The JSON array in `content` holding the scores, skipping surrounding
/// prose. An array of `{id, score}` objects wins over any earlier array, so
/// an echoed `[1]` document marker is not read as a bare-number reply.
fn find_json_array(content: &str) -> Option<Vec<Value>> {
    let mut fallback = None;
    for (start, _) in content.match_indices('[') {
        let Some(items) = serde_json::Deserializer::from_str(&content[start..])
            .into_iter::<Vec<Value>>()
            .next()
            .and_then(Result::ok)
        else {
            continue;
        };
        if items.iter().any(is_score_object) {
            return Some(items);
        }
        fallback.get_or_insert(items);
    }
    fallback
}

fn is_score_object(item: &Value) -> bool {
    item.as_object()
        .is_some_and(|map| map.contains_key("id") || map.contains_key("score"))
}

/// A 1-based document number, or a document id.
fn resolve_id(id: &Value, documents: &[ScoringDocument]) -> Option<usize> {
    match id {
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .and_then(|n| n.checked_sub(1)),
        Value::String(s) => {
            let s = s.trim();
            documents.iter().position(|d| d.id == s).or_else(|| {
                s.trim_start_matches(['[', '#'])
                    .trim_end_matches(']')
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
            })
        }
        _ => None,
    }
}

fn numeric(value: &Value) -> Option<f64> {
    let v = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    v.is_finite().then_some(v)
}

fn uniform(documents: &[ScoringDocument], score: f64) -> Vec<RelevanceScore> {
    documents
        .iter()
        .map(|d| RelevanceScore {
            id: d.id.clone(),
            score,
        })
        .collect()
}
