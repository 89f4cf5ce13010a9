#![cfg(test)]
use nettopo_common::network::edge::Edge;
use nettopo_core::GraphStore;

use crate::util::{campus, topology};

#[test]
fn neighbors_mirror_add_edge_calls() {
    let graph = topology(&["a:b:1", "a:c:2", "a:b:3", "b:a:4"]);

    assert_eq!(
        graph.neighbors("a"),
        &[Edge::new("b", 1), Edge::new("c", 2), Edge::new("b", 3)]
    );
    assert_eq!(graph.neighbors("b"), &[Edge::new("a", 4)]);
    assert!(graph.neighbors("c").is_empty(), "sinks have no outgoing edges");
    assert!(graph.neighbors("nowhere").is_empty());
}

#[test]
fn nodes_are_listed_in_first_seen_order() {
    let graph = campus();
    let names: Vec<&str> = graph.node_names().collect();
    assert_eq!(
        names,
        vec!["gateway", "core-a", "core-b", "dist-1", "dist-2", "access-1", "access-2", "lab"]
    );
}

#[test]
fn store_only_grows() {
    let mut graph = GraphStore::new();
    let mut last = (0, 0);
    for (source, destination) in [("a", "b"), ("b", "c"), ("a", "b"), ("c", "c")] {
        graph.add_edge(source, destination, 1);
        let now = (graph.node_count(), graph.edge_count());
        assert!(now.0 >= last.0 && now.1 == last.1 + 1);
        last = now;
    }
    assert_eq!(last, (3, 4));
}

#[test]
fn reads_are_idempotent() {
    let graph = campus();
    let first: Vec<(String, Edge)> = graph
        .edges()
        .map(|(source, edge)| (source.to_string(), edge.clone()))
        .collect();
    let second: Vec<(String, Edge)> = graph
        .edges()
        .map(|(source, edge)| (source.to_string(), edge.clone()))
        .collect();

    assert_eq!(first, second);
    assert_eq!(first.len(), graph.edge_count());
}
