use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entry::{EntryKey, EntryType};

/// Typed relation between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationType {
    AppliesTo,
    DependsOn,
    ConflictsWith,
    RelatedTo,
}

impl RelationType {
    pub const ALL: [RelationType; 4] = [
        Self::AppliesTo,
        Self::DependsOn,
        Self::ConflictsWith,
        Self::RelatedTo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AppliesTo => "applies_to",
            Self::DependsOn => "depends_on",
            Self::ConflictsWith => "conflicts_with",
            Self::RelatedTo => "related_to",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of a relation endpoint.
///
/// Relations may point at things that are not entries (projects, or types
/// this crate does not know about). Those are kept as `Project`/`Other` so
/// traversal can walk through them, but they never appear in entry results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeType {
    Tool,
    Guideline,
    Knowledge,
    Experience,
    Project,
    Other(String),
}

impl NodeType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Tool => "tool",
            Self::Guideline => "guideline",
            Self::Knowledge => "knowledge",
            Self::Experience => "experience",
            Self::Project => "project",
            Self::Other(s) => s,
        }
    }

    /// The entry type this node denotes, if any.
    pub fn entry_type(&self) -> Option<EntryType> {
        match self {
            Self::Tool => Some(EntryType::Tool),
            Self::Guideline => Some(EntryType::Guideline),
            Self::Knowledge => Some(EntryType::Knowledge),
            Self::Experience => Some(EntryType::Experience),
            Self::Project | Self::Other(_) => None,
        }
    }
}

impl From<&str> for NodeType {
    fn from(s: &str) -> Self {
        match s {
            "tool" => Self::Tool,
            "guideline" => Self::Guideline,
            "knowledge" => Self::Knowledge,
            "experience" => Self::Experience,
            "project" => Self::Project,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for NodeType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<NodeType> for String {
    fn from(t: NodeType) -> Self {
        t.as_str().to_string()
    }
}

impl From<EntryType> for NodeType {
    fn from(t: EntryType) -> Self {
        match t {
            EntryType::Tool => Self::Tool,
            EntryType::Guideline => Self::Guideline,
            EntryType::Knowledge => Self::Knowledge,
            EntryType::Experience => Self::Experience,
        }
    }
}

/// A typed node reference: `(node_type, id)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeRef {
    pub node_type: NodeType,
    pub id: String,
}

impl NodeRef {
    pub fn new(node_type: impl Into<NodeType>, id: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            id: id.into(),
        }
    }

    /// The entry key for this node, if it denotes an entry.
    pub fn entry_key(&self) -> Option<EntryKey> {
        self.node_type
            .entry_type()
            .map(|t| EntryKey::new(t, self.id.clone()))
    }
}

impl From<&EntryKey> for NodeRef {
    fn from(key: &EntryKey) -> Self {
        Self::new(key.entry_type, key.id.clone())
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.node_type.as_str(), self.id)
    }
}

/// A directed, typed edge. Read-only to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationEdge {
    pub source: NodeRef,
    pub target: NodeRef,
    pub relation_type: RelationType,
}

impl RelationEdge {
    pub fn new(source: NodeRef, target: NodeRef, relation_type: RelationType) -> Self {
        Self {
            source,
            target,
            relation_type,
        }
    }
}

/// Which edges a traversal follows from the current node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Edges where the current node is the source.
    Forward,
    /// Edges where the current node is the target.
    Backward,
    #[default]
    Both,
}

impl Direction {
    pub fn follows_forward(&self) -> bool {
        matches!(self, Self::Forward | Self::Both)
    }

    pub fn follows_backward(&self) -> bool {
        matches!(self, Self::Backward | Self::Both)
    }
}
