//! petgraph StableGraph holding relation edges, with a node lookup map.

use std::collections::HashMap;

use async_trait::async_trait;
use memex_core::errors::MemexResult;
use memex_core::models::{NodeRef, RelationEdge, RelationType};
use memex_core::traits::IRelationStore;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::{Directed, Direction};

/// The underlying directed multigraph. Each edge carries its full record;
/// parallel edges are kept.
pub type RelationGraph = StableGraph<NodeRef, RelationEdge, Directed>;

/// In-memory relation set for callers without a database.
#[derive(Debug, Default)]
pub struct RelationIndex {
    graph: RelationGraph,
    node_index: HashMap<NodeRef, NodeIndex>,
}

impl RelationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_edges(edges: impl IntoIterator<Item = RelationEdge>) -> Self {
        let mut index = Self::new();
        for edge in edges {
            index.add_edge(edge);
        }
        index
    }

    /// Get or create the node for `node`.
    pub fn ensure_node(&mut self, node: &NodeRef) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(node) {
            return idx;
        }
        let idx = self.graph.add_node(node.clone());
        self.node_index.insert(node.clone(), idx);
        idx
    }

    /// Insert an edge. Duplicates are stored as parallel edges.
    pub fn add_edge(&mut self, edge: RelationEdge) {
        let source = self.ensure_node(&edge.source);
        let target = self.ensure_node(&edge.target);
        self.graph.add_edge(source, target, edge);
    }

    /// Remove a node and every edge touching it.
    pub fn remove_node(&mut self, node: &NodeRef) -> bool {
        match self.node_index.remove(node) {
            Some(idx) => {
                self.graph.remove_node(idx);
                true
            }
            None => false,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn edges(
        &self,
        node: &NodeRef,
        direction: Direction,
        relation_type: Option<RelationType>,
    ) -> Vec<RelationEdge> {
        let Some(&idx) = self.node_index.get(node) else {
            return Vec::new();
        };
        self.graph
            .edges_directed(idx, direction)
            .map(|e| e.weight())
            .filter(|edge| relation_type.map_or(true, |r| edge.relation_type == r))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl IRelationStore for RelationIndex {
    async fn edges_from(
        &self,
        node: &NodeRef,
        relation_type: Option<RelationType>,
    ) -> MemexResult<Vec<RelationEdge>> {
        Ok(self.edges(node, Direction::Outgoing, relation_type))
    }

    async fn edges_to(
        &self,
        node: &NodeRef,
        relation_type: Option<RelationType>,
    ) -> MemexResult<Vec<RelationEdge>> {
        Ok(self.edges(node, Direction::Incoming, relation_type))
    }
}
