use serde::{Deserialize, Serialize};

/// Visibility boundary of an entry, broadest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeType {
    Global,
    Org,
    Project,
    Session,
}

impl ScopeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Org => "org",
            Self::Project => "project",
            Self::Session => "session",
        }
    }
}

/// Scope of an entry. Global scope carries no id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope {
    pub scope_type: ScopeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_id: Option<String>,
}

impl Scope {
    pub fn global() -> Self {
        Self {
            scope_type: ScopeType::Global,
            scope_id: None,
        }
    }

    pub fn new(scope_type: ScopeType, scope_id: impl Into<String>) -> Self {
        Self {
            scope_type,
            scope_id: Some(scope_id.into()),
        }
    }

    pub fn is_global(&self) -> bool {
        self.scope_type == ScopeType::Global
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::global()
    }
}
