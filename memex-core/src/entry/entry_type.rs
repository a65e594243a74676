use std::fmt;

use serde::{Deserialize, Serialize};

/// The four kinds of stored memory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    Tool,
    Guideline,
    Knowledge,
    Experience,
}

impl EntryType {
    /// Total number of entry types.
    pub const COUNT: usize = 4;

    /// All variants for iteration.
    pub const ALL: [EntryType; 4] = [
        Self::Tool,
        Self::Guideline,
        Self::Knowledge,
        Self::Experience,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tool => "tool",
            Self::Guideline => "guideline",
            Self::Knowledge => "knowledge",
            Self::Experience => "experience",
        }
    }

    /// Parse the snake_case name. Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "tool" => Some(Self::Tool),
            "guideline" => Some(Self::Guideline),
            "knowledge" => Some(Self::Knowledge),
            "experience" => Some(Self::Experience),
            _ => None,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of an entry across all four tables: `(entry_type, id)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryKey {
    pub entry_type: EntryType,
    pub id: String,
}

impl EntryKey {
    pub fn new(entry_type: EntryType, id: impl Into<String>) -> Self {
        Self {
            entry_type,
            id: id.into(),
        }
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.entry_type, self.id)
    }
}
