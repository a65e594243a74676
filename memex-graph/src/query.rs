//! Anchored single-hop relation lookups.

use memex_core::errors::{MemexResult, ValidationError};
use memex_core::models::{NodeRef, RelationEdge, RelationType};
use memex_core::traits::IRelationStore;
use serde::{Deserialize, Serialize};

/// Edges touching a source and/or target, optionally of one type.
///
/// At least one anchor is required. With both, only edges from `source`
/// to `target` match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationQuery {
    pub source: Option<NodeRef>,
    pub target: Option<NodeRef>,
    pub relation_type: Option<RelationType>,
}

impl RelationQuery {
    pub fn from_source(source: NodeRef) -> Self {
        Self {
            source: Some(source),
            ..Self::default()
        }
    }

    pub fn to_target(target: NodeRef) -> Self {
        Self {
            target: Some(target),
            ..Self::default()
        }
    }

    pub fn with_relation_type(mut self, relation_type: RelationType) -> Self {
        self.relation_type = Some(relation_type);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let anchors = [self.source.as_ref(), self.target.as_ref()];
        if anchors.iter().all(Option::is_none) {
            return Err(ValidationError::MissingAnchor);
        }
        for (name, anchor) in ["source", "target"].into_iter().zip(anchors) {
            if anchor.is_some_and(|n| n.id.trim().is_empty()) {
                return Err(ValidationError::InvalidParameter {
                    name: name.to_string(),
                    reason: "node id is empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Validate, then run against `store`.
    pub async fn execute(&self, store: &dyn IRelationStore) -> MemexResult<Vec<RelationEdge>> {
        self.validate()?;
        match (&self.source, &self.target) {
            (Some(source), target) => {
                let edges = store.edges_from(source, self.relation_type).await?;
                Ok(edges
                    .into_iter()
                    .filter(|e| target.as_ref().map_or(true, |t| &e.target == t))
                    .collect())
            }
            (None, Some(target)) => store.edges_to(target, self.relation_type).await,
            (None, None) => Err(ValidationError::MissingAnchor.into()),
        }
    }
}
