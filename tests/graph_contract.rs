//! Structural and serialization contracts of the task graph.

use floe::core::error::FloeError;
use floe::reasoning::{TaskGraph, TaskNode};
use serde_json::{Value, json};

fn chain(ids: &[&str]) -> TaskGraph {
    let mut graph = TaskGraph::new();
    for id in ids {
        graph
            .add_node(TaskNode::new(*id, "plan", format!("work for {id}")))
            .unwrap();
    }
    for pair in ids.windows(2) {
        graph.add_dependency(pair[0], pair[1]).unwrap();
    }
    graph
}

#[test]
fn structural_errors_carry_the_offending_id() {
    let mut graph = chain(&["a", "b"]);

    match graph.add_node(TaskNode::new("a", "plan", "again")) {
        Err(FloeError::DuplicateNode(id)) => assert_eq!(id, "a"),
        other => panic!("expected DuplicateNode, got {other:?}"),
    }
    match graph.add_dependency("a", "ghost") {
        Err(FloeError::NodeNotFound(id)) => assert_eq!(id, "ghost"),
        other => panic!("expected NodeNotFound, got {other:?}"),
    }
    match graph.get_node("ghost") {
        Err(FloeError::NodeNotFound(id)) => assert_eq!(id, "ghost"),
        other => panic!("expected NodeNotFound, got {other:?}"),
    }
}

#[test]
fn failed_mutations_leave_the_graph_untouched() {
    let mut graph = chain(&["a", "b"]);
    let before = graph.snapshot().canonical_hash_hex().unwrap();

    assert!(graph.add_node(TaskNode::new("a", "plan", "dup")).is_err());
    assert!(graph.add_dependency("a", "ghost").is_err());
    assert!(graph.add_dependency("ghost", "b").is_err());

    let after = graph.snapshot().canonical_hash_hex().unwrap();
    assert_eq!(before, after);
}

#[test]
fn cycle_is_tolerated_until_seal() {
    let mut graph = chain(&["a", "b", "c"]);
    graph.add_dependency("c", "a").unwrap();

    // Still readable while invalid.
    assert!(!graph.is_valid_dag());
    assert_eq!(graph.get_node("b").unwrap().id, "b");
    assert_eq!(graph.dependencies_of("a"), vec!["c".to_string()]);

    assert!(matches!(
        graph.seal().unwrap_err(),
        FloeError::CycleDetected(_)
    ));

    let snapshot = graph.snapshot();
    assert!(!snapshot.valid_dag);
}

#[test]
fn snapshot_serializes_nodes_and_edges_key_sorted() {
    let mut graph = TaskGraph::new();
    for id in ["zeta", "alpha", "mid"] {
        graph.add_node(TaskNode::new(id, "plan", "w")).unwrap();
    }
    graph.add_dependency("zeta", "alpha").unwrap();
    graph.add_dependency("mid", "alpha").unwrap();

    let text = serde_json::to_string(&graph.snapshot()).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();

    let node_keys: Vec<&String> = value["nodes"].as_object().unwrap().keys().collect();
    assert_eq!(node_keys, ["alpha", "mid", "zeta"]);
    let edge_keys: Vec<&String> = value["edges"].as_object().unwrap().keys().collect();
    assert_eq!(edge_keys, ["alpha", "mid", "zeta"]);
}

#[test]
fn snapshot_hash_is_independent_of_insertion_order() {
    let mut forward = TaskGraph::new();
    let mut reverse = TaskGraph::new();
    for id in ["a", "b", "c"] {
        forward.add_node(TaskNode::new(id, "plan", "w")).unwrap();
    }
    for id in ["c", "b", "a"] {
        reverse.add_node(TaskNode::new(id, "plan", "w")).unwrap();
    }
    forward.add_dependency("a", "b").unwrap();
    forward.add_dependency("b", "c").unwrap();
    reverse.add_dependency("b", "c").unwrap();
    reverse.add_dependency("a", "b").unwrap();

    let left = forward.seal().unwrap().canonical_hash_hex().unwrap();
    let right = reverse.seal().unwrap().canonical_hash_hex().unwrap();
    assert_eq!(left, right);
}

#[test]
fn snapshot_round_trips_through_serde() {
    let mut graph = chain(&["a", "b"]);
    let node = graph.get_node("a").unwrap().clone();
    graph
        .add_node(
            TaskNode::new("c", "analysis", "inspect")
                .with_suggested_agent("analyzer")
                .with_required_capabilities(["analysis.inspect"]),
        )
        .unwrap();
    assert_eq!(node.id, "a");

    let sealed = graph.seal().unwrap();
    let text = serde_json::to_string(&sealed).unwrap();
    let restored: floe::reasoning::GraphSnapshot = serde_json::from_str(&text).unwrap();

    assert_eq!(restored.nodes.len(), 3);
    assert_eq!(restored.roots, sealed.roots);
    assert_eq!(
        restored.nodes["c"].suggested_agent.as_deref(),
        Some("analyzer")
    );
    assert_eq!(
        restored.canonical_hash_hex().unwrap(),
        sealed.canonical_hash_hex().unwrap()
    );
}

#[test]
fn sealed_snapshot_reports_all_roots_and_leaves() {
    let mut graph = TaskGraph::new();
    for id in ["a", "b", "c", "d"] {
        graph.add_node(TaskNode::new(id, "plan", "w")).unwrap();
    }
    // Diamond: a before b and c, both before d.
    graph.add_dependency("a", "b").unwrap();
    graph.add_dependency("a", "c").unwrap();
    graph.add_dependency("b", "d").unwrap();
    graph.add_dependency("c", "d").unwrap();

    let sealed = graph.seal().unwrap();
    assert_eq!(sealed.roots, vec!["a".to_string()]);
    assert_eq!(sealed.leaves, vec!["d".to_string()]);
    assert_eq!(sealed.edges["a"], vec!["b".to_string(), "c".to_string()]);

    let serialized = serde_json::to_value(&sealed).unwrap();
    assert_eq!(serialized["valid_dag"], json!(true));
}

#[test]
fn node_metadata_survives_the_snapshot() {
    let mut metadata = serde_json::Map::new();
    metadata.insert("title".to_string(), json!("inspect logs"));
    metadata.insert("priority".to_string(), json!(2));

    let mut graph = TaskGraph::new();
    graph
        .add_node(TaskNode::new("s1", "analysis", "inspect logs").with_metadata(metadata))
        .unwrap();

    let sealed = graph.seal().unwrap();
    assert_eq!(sealed.nodes["s1"].metadata["title"], json!("inspect logs"));
    assert_eq!(sealed.nodes["s1"].metadata["priority"], json!(2));
}
