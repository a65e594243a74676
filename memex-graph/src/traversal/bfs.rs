use std::collections::{HashSet, VecDeque};

use memex_core::errors::{MemexResult, ValidationError};
use memex_core::models::NodeRef;
use memex_core::traits::IRelationStore;
use tracing::{debug, trace};

use super::{TraversalParams, TraversalResult};

/// Walk from `params.start` and bucket what is reached.
///
/// Returns `None` when the walk cannot be built or a store call fails.
/// Callers decide whether and how to log that.
pub async fn traverse(
    store: &dyn IRelationStore,
    params: &TraversalParams,
) -> Option<TraversalResult> {
    match try_traverse(store, params).await {
        Ok(result) => Some(result),
        Err(e) => {
            debug!(start = %params.start, error = %e, "traversal produced no result");
            None
        }
    }
}

/// Like [`traverse`] but keeps the error.
pub async fn try_traverse(
    store: &dyn IRelationStore,
    params: &TraversalParams,
) -> MemexResult<TraversalResult> {
    if params.start.id.trim().is_empty() {
        return Err(ValidationError::InvalidParameter {
            name: "start".to_string(),
            reason: "node id is empty".to_string(),
        }
        .into());
    }
    if params.max_results == 0 {
        return Err(ValidationError::InvalidParameter {
            name: "max_results".to_string(),
            reason: "must be at least 1".to_string(),
        }
        .into());
    }

    let mut result = TraversalResult::default();
    let mut emitted = 0usize;

    let mut visited = HashSet::new();
    visited.insert(params.start.clone());

    let mut queue = VecDeque::new();
    queue.push_back((params.start.clone(), 0u32));

    'walk: while let Some((current, depth)) = queue.pop_front() {
        if depth >= params.depth() {
            continue;
        }

        for neighbor in neighbors(store, &current, params).await? {
            if !visited.insert(neighbor.clone()) {
                continue;
            }
            emitted += 1;
            if let Some(entry_type) = neighbor.node_type.entry_type() {
                result.bucket_mut(entry_type).push(neighbor.id.clone());
            }
            if emitted >= params.max_results {
                result.truncated = true;
                break 'walk;
            }
            queue.push_back((neighbor, depth + 1));
        }
    }

    trace!(
        start = %params.start,
        depth = params.depth(),
        emitted,
        kept = result.len(),
        truncated = result.truncated,
        "traversal complete"
    );
    Ok(result)
}

/// Nodes one hop from `node` in the requested direction(s). The relation
/// filter applies to each direction separately.
async fn neighbors(
    store: &dyn IRelationStore,
    node: &NodeRef,
    params: &TraversalParams,
) -> MemexResult<Vec<NodeRef>> {
    let mut out = Vec::new();
    if params.direction.follows_forward() {
        let edges = store.edges_from(node, params.relation_type).await?;
        out.extend(edges.into_iter().map(|e| e.target));
    }
    if params.direction.follows_backward() {
        let edges = store.edges_to(node, params.relation_type).await?;
        out.extend(edges.into_iter().map(|e| e.source));
    }
    Ok(out)
}
