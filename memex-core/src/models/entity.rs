use std::fmt;

use serde::{Deserialize, Serialize};

/// Kinds of span the entity extractor recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    FilePath,
    FunctionName,
    PackageName,
    Url,
    ErrorCode,
    Command,
}

impl EntityType {
    pub const ALL: [EntityType; 6] = [
        Self::FilePath,
        Self::FunctionName,
        Self::PackageName,
        Self::Url,
        Self::ErrorCode,
        Self::Command,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FilePath => "FILE_PATH",
            Self::FunctionName => "FUNCTION_NAME",
            Self::PackageName => "PACKAGE_NAME",
            Self::Url => "URL",
            Self::ErrorCode => "ERROR_CODE",
            Self::Command => "COMMAND",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed span pulled out of free text. Created per extraction call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedEntity {
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    /// The span exactly as it appeared.
    pub value: String,
    /// Canonical form used for matching.
    pub normalized_value: String,
    /// Heuristic confidence in [0.0, 1.0], when scoring is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Fuzzy-match variants, when generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<String>>,
    /// Finer classification, e.g. `config` for a TOML path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_type: Option<String>,
}

impl ExtractedEntity {
    pub fn new(
        entity_type: EntityType,
        value: impl Into<String>,
        normalized_value: impl Into<String>,
    ) -> Self {
        Self {
            entity_type,
            value: value.into(),
            normalized_value: normalized_value.into(),
            confidence: None,
            variants: None,
            semantic_type: None,
        }
    }

    /// Whether the entity meets `threshold`. A missing confidence never does.
    pub fn meets_confidence(&self, threshold: f64) -> bool {
        self.confidence.is_some_and(|c| c >= threshold)
    }
}
