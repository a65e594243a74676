use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entry::EntryType;

/// What the caller is trying to do with a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    HowTo,
    Debug,
    Lookup,
    Compare,
    Configure,
    Explore,
}

impl IntentKind {
    pub const COUNT: usize = 6;

    pub const ALL: [IntentKind; 6] = [
        Self::HowTo,
        Self::Debug,
        Self::Lookup,
        Self::Compare,
        Self::Configure,
        Self::Explore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HowTo => "how_to",
            Self::Debug => "debug",
            Self::Lookup => "lookup",
            Self::Compare => "compare",
            Self::Configure => "configure",
            Self::Explore => "explore",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.as_str() == s)
    }

    /// Entry types that tend to answer this intent, most useful first.
    /// `Explore` has no preference.
    pub fn preferred_types(&self) -> &'static [EntryType] {
        match self {
            Self::HowTo => &[EntryType::Guideline, EntryType::Knowledge, EntryType::Tool],
            Self::Debug => &[EntryType::Experience, EntryType::Knowledge],
            Self::Lookup => &[EntryType::Knowledge, EntryType::Tool],
            Self::Compare => &[EntryType::Knowledge, EntryType::Experience],
            Self::Configure => &[EntryType::Tool, EntryType::Guideline, EntryType::Knowledge],
            Self::Explore => &[],
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an intent was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMethod {
    Pattern,
    Default,
    Llm,
}

/// One classification, produced per query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntentResult {
    pub intent: IntentKind,
    pub confidence: f64,
    pub method: ClassificationMethod,
}
