use serde::{Deserialize, Serialize};

/// A document handed to the relevance scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringDocument {
    pub id: String,
    pub text: String,
}

impl ScoringDocument {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Joint query/document relevance, normalized to [0.0, 1.0].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevanceScore {
    pub id: String,
    pub score: f64,
}
