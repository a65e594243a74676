use async_trait::async_trait;
use memex_core::errors::{MemexResult, StorageError};
use memex_core::models::{Direction, NodeRef, NodeType, RelationEdge, RelationType};
use memex_core::traits::IRelationStore;
use memex_core::{EntryKey, EntryType};
use memex_graph::{traverse, try_traverse, RelationIndex, RelationQuery, TraversalParams};

fn node(t: EntryType, id: &str) -> NodeRef {
    NodeRef::new(t, id)
}

fn rel(a: NodeRef, b: NodeRef, r: RelationType) -> RelationEdge {
    RelationEdge::new(a, b, r)
}

/// t1 -> k1 -> e1 -> g1 (related_to), t1 -> g2 (depends_on), p1 -> t1 (applies_to)
fn chain() -> RelationIndex {
    RelationIndex::from_edges([
        rel(node(EntryType::Tool, "t1"), node(EntryType::Knowledge, "k1"), RelationType::RelatedTo),
        rel(node(EntryType::Knowledge, "k1"), node(EntryType::Experience, "e1"), RelationType::RelatedTo),
        rel(node(EntryType::Experience, "e1"), node(EntryType::Guideline, "g1"), RelationType::RelatedTo),
        rel(node(EntryType::Tool, "t1"), node(EntryType::Guideline, "g2"), RelationType::DependsOn),
        rel(NodeRef::new(NodeType::Project, "p1"), node(EntryType::Tool, "t1"), RelationType::AppliesTo),
    ])
}

struct BrokenStore;

#[async_trait]
impl IRelationStore for BrokenStore {
    async fn edges_from(&self, _: &NodeRef, _: Option<RelationType>) -> MemexResult<Vec<RelationEdge>> {
        Err(StorageError::Unavailable { reason: "db down".into() }.into())
    }

    async fn edges_to(&self, _: &NodeRef, _: Option<RelationType>) -> MemexResult<Vec<RelationEdge>> {
        Err(StorageError::Unavailable { reason: "db down".into() }.into())
    }
}

#[tokio::test]
async fn default_depth_is_one_hop() {
    let index = chain();
    let params = TraversalParams::new(node(EntryType::Tool, "t1"));
    let r = traverse(&index, &params).await.unwrap();
    assert_eq!(r.knowledge, vec!["k1"]);
    assert_eq!(r.guidelines, vec!["g2"]);
    assert!(r.experiences.is_empty());
    assert!(!r.truncated);
}

#[tokio::test]
async fn depth_zero_behaves_as_one() {
    let index = chain();
    let zero = TraversalParams::new(node(EntryType::Tool, "t1")).with_depth(0);
    let one = TraversalParams::new(node(EntryType::Tool, "t1")).with_depth(1);
    assert_eq!(
        traverse(&index, &zero).await.unwrap(),
        traverse(&index, &one).await.unwrap()
    );
}

#[tokio::test]
async fn depth_ten_behaves_as_five() {
    let mut edges = Vec::new();
    for i in 0..8 {
        edges.push(rel(
            node(EntryType::Knowledge, &format!("k{i}")),
            node(EntryType::Knowledge, &format!("k{}", i + 1)),
            RelationType::RelatedTo,
        ));
    }
    let index = RelationIndex::from_edges(edges);
    let params = TraversalParams::new(node(EntryType::Knowledge, "k0"))
        .with_direction(Direction::Forward)
        .with_depth(10);
    assert_eq!(params.depth(), 5);
    let r = traverse(&index, &params).await.unwrap();
    assert_eq!(r.knowledge, vec!["k1", "k2", "k3", "k4", "k5"]);
}

#[tokio::test]
async fn direction_is_respected() {
    let index = chain();
    let start = node(EntryType::Knowledge, "k1");

    let fwd = TraversalParams::new(start.clone()).with_direction(Direction::Forward);
    let r = traverse(&index, &fwd).await.unwrap();
    assert_eq!(r.experiences, vec!["e1"]);
    assert!(r.tools.is_empty());

    let back = TraversalParams::new(start.clone()).with_direction(Direction::Backward);
    let r = traverse(&index, &back).await.unwrap();
    assert_eq!(r.tools, vec!["t1"]);
    assert!(r.experiences.is_empty());

    let both = TraversalParams::new(start);
    let r = traverse(&index, &both).await.unwrap();
    assert_eq!(r.len(), 2);
}

#[tokio::test]
async fn relation_filter_applies_in_both_directions() {
    let index = chain();
    let params = TraversalParams::new(node(EntryType::Tool, "t1"))
        .with_relation_type(Some(RelationType::DependsOn))
        .with_depth(3);
    let r = traverse(&index, &params).await.unwrap();
    assert_eq!(r.keys(), vec![EntryKey::new(EntryType::Guideline, "g2")]);
}

#[tokio::test]
async fn duplicate_edges_collapse() {
    let e = rel(node(EntryType::Tool, "t1"), node(EntryType::Knowledge, "k1"), RelationType::RelatedTo);
    let index = RelationIndex::from_edges([e.clone(), e.clone(), e]);
    assert_eq!(index.edge_count(), 3);
    let r = traverse(&index, &TraversalParams::new(node(EntryType::Tool, "t1")))
        .await
        .unwrap();
    assert_eq!(r.knowledge, vec!["k1"]);
}

#[tokio::test]
async fn unknown_node_types_are_not_bucketed() {
    let index = RelationIndex::from_edges([
        rel(node(EntryType::Tool, "t1"), NodeRef::new("widget", "w1"), RelationType::RelatedTo),
        rel(node(EntryType::Tool, "t1"), NodeRef::new(NodeType::Project, "p9"), RelationType::RelatedTo),
    ]);
    let r = traverse(&index, &TraversalParams::new(node(EntryType::Tool, "t1")))
        .await
        .unwrap();
    assert!(r.is_empty());
}

#[tokio::test]
async fn walks_through_project_nodes() {
    let index = chain();
    let params = TraversalParams::new(node(EntryType::Guideline, "g2")).with_depth(3);
    let r = traverse(&index, &params).await.unwrap();
    // g2 <- t1 <- p1, t1 -> k1
    assert!(r.contains(&EntryKey::new(EntryType::Tool, "t1")));
    assert!(r.contains(&EntryKey::new(EntryType::Knowledge, "k1")));
}

#[tokio::test]
async fn max_results_truncates() {
    let edges = (0..150).map(|i| {
        rel(
            node(EntryType::Tool, "hub"),
            node(EntryType::Knowledge, &format!("k{i}")),
            RelationType::RelatedTo,
        )
    });
    let index = RelationIndex::from_edges(edges);
    let r = traverse(&index, &TraversalParams::new(node(EntryType::Tool, "hub")))
        .await
        .unwrap();
    assert_eq!(r.knowledge.len(), 100);
    assert!(r.truncated);

    let small = TraversalParams::new(node(EntryType::Tool, "hub")).with_max_results(7);
    let r = traverse(&index, &small).await.unwrap();
    assert_eq!(r.len(), 7);
    assert!(r.truncated);
}

#[tokio::test]
async fn store_failure_is_no_result() {
    let params = TraversalParams::new(node(EntryType::Tool, "t1"));
    assert!(traverse(&BrokenStore, &params).await.is_none());
    assert!(try_traverse(&BrokenStore, &params).await.is_err());
}

#[tokio::test]
async fn empty_start_id_is_no_result() {
    let params = TraversalParams::new(node(EntryType::Tool, ""));
    assert!(traverse(&chain(), &params).await.is_none());
}

#[tokio::test]
async fn unknown_start_is_empty_not_none() {
    let params = TraversalParams::new(node(EntryType::Tool, "nobody"));
    let r = traverse(&chain(), &params).await.unwrap();
    assert!(r.is_empty());
}

#[tokio::test]
async fn relation_query_by_source_and_target() {
    let index = chain();
    let t1 = node(EntryType::Tool, "t1");

    let all = RelationQuery::from_source(t1.clone()).execute(&index).await.unwrap();
    assert_eq!(all.len(), 2);

    let q = RelationQuery {
        source: Some(t1.clone()),
        target: Some(node(EntryType::Guideline, "g2")),
        relation_type: None,
    };
    let edges = q.execute(&index).await.unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].relation_type, RelationType::DependsOn);

    let incoming = RelationQuery::to_target(t1)
        .with_relation_type(RelationType::AppliesTo)
        .execute(&index)
        .await
        .unwrap();
    assert_eq!(incoming[0].source.node_type, NodeType::Project);
}

#[tokio::test]
async fn relation_query_without_anchor_is_fatal() {
    let err = RelationQuery::default().execute(&chain()).await.unwrap_err();
    assert!(err.is_fatal());
}
