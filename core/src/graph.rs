//! # Graph Store
//!
//! Owns the network topology: a mapping from node name to its ordered list
//! of outgoing [`Edge`]s.
//!
//! ## Contract
//! * Nodes exist only as names. [`GraphStore::add_edge`] upserts both
//!   endpoints before appending, so a destination that never appears as a
//!   source is still a node (a sink with no outgoing edges).
//! * The store is append-only. Nothing removes or rewrites an edge, and
//!   duplicate edges between the same pair are kept as separate entries.
//! * Nodes iterate in first-seen order, edges in insertion order. Both are
//!   stable for a given store state.

use std::collections::HashMap;

use nettopo_common::network::edge::{Edge, EdgeSpec, Weight};
use tracing::trace;

pub type NodeIndex = usize;

#[derive(Debug, Default, Clone)]
pub struct GraphStore {
    names: Vec<String>,
    index: HashMap<String, NodeIndex>,
    adjacency: Vec<Vec<Edge>>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of `name`, creating an empty node if it is new.
    pub fn upsert_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }

        let idx: NodeIndex = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), idx);
        self.adjacency.push(Vec::new());
        trace!(node = name, "node created");
        idx
    }

    /// Appends a `source -> destination` edge, creating either node if needed.
    pub fn add_edge(&mut self, source: &str, destination: &str, weight: Weight) {
        let source_idx: NodeIndex = self.upsert_node(source);
        self.upsert_node(destination);
        self.adjacency[source_idx].push(Edge::new(destination, weight));
    }

    pub fn insert(&mut self, spec: EdgeSpec) {
        self.add_edge(&spec.source, &spec.destination, spec.weight);
    }

    /// Outgoing edges of `node` in insertion order.
    ///
    /// Unknown nodes and sinks both yield an empty slice.
    pub fn neighbors(&self, node: &str) -> &[Edge] {
        match self.index.get(node) {
            Some(&idx) => &self.adjacency[idx],
            None => &[],
        }
    }

    /// Every node name in first-seen order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// Every edge paired with its source, in store order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &Edge)> + '_ {
        self.names
            .iter()
            .zip(&self.adjacency)
            .flat_map(|(source, edges)| edges.iter().map(move |edge| (source.as_str(), edge)))
    }

    pub fn contains(&self, node: &str) -> bool {
        self.index.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    pub(crate) fn name_of(&self, idx: NodeIndex) -> &str {
        &self.names[idx]
    }

    pub(crate) fn neighbors_at(&self, idx: NodeIndex) -> &[Edge] {
        &self.adjacency[idx]
    }
}

impl Extend<EdgeSpec> for GraphStore {
    fn extend<T: IntoIterator<Item = EdgeSpec>>(&mut self, iter: T) {
        for spec in iter {
            self.insert(spec);
        }
    }
}

impl FromIterator<EdgeSpec> for GraphStore {
    fn from_iter<T: IntoIterator<Item = EdgeSpec>>(iter: T) -> Self {
        let mut graph = GraphStore::new();
        graph.extend(iter);
        graph
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    fn names(graph: &GraphStore) -> Vec<&str> {
        graph.node_names().collect()
    }

    #[test]
    fn test_add_edge_creates_both_nodes() {
        let mut graph = GraphStore::new();
        graph.add_edge("router", "switch", 5);

        assert!(graph.contains("router"));
        assert!(graph.contains("switch"));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.neighbors("switch").is_empty(), "sink has no outgoing edges");
    }

    #[test]
    fn test_neighbors_keep_insertion_order() {
        let mut graph = GraphStore::new();
        graph.add_edge("A", "C", 20);
        graph.add_edge("A", "B", 5);
        graph.add_edge("B", "C", 5);
        graph.add_edge("A", "D", 1);

        assert_eq!(
            graph.neighbors("A"),
            &[Edge::new("C", 20), Edge::new("B", 5), Edge::new("D", 1)]
        );
        assert_eq!(graph.neighbors("B"), &[Edge::new("C", 5)]);
    }

    #[test]
    fn test_duplicate_edges_are_preserved() {
        let mut graph = GraphStore::new();
        graph.add_edge("A", "B", 3);
        graph.add_edge("A", "B", 3);
        graph.add_edge("A", "B", 7);

        assert_eq!(graph.neighbors("A").len(), 3);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_unknown_node_has_no_neighbors() {
        let graph = GraphStore::new();
        assert!(graph.neighbors("ghost").is_empty());
        assert!(graph.is_empty());
    }

    #[test]
    fn test_node_names_in_first_seen_order() {
        let mut graph = GraphStore::new();
        graph.add_edge("B", "A", 1);
        graph.add_edge("C", "B", 1);
        graph.add_edge("A", "D", 1);

        assert_eq!(names(&graph), vec!["B", "A", "C", "D"]);
    }

    #[test]
    fn test_reads_are_idempotent() {
        let mut graph = GraphStore::new();
        graph.add_edge("A", "B", 1);
        graph.add_edge("B", "C", 2);

        let first_names = names(&graph);
        let first_neighbors = graph.neighbors("A").to_vec();
        for _ in 0..3 {
            assert_eq!(names(&graph), first_names);
            assert_eq!(graph.neighbors("A"), first_neighbors.as_slice());
        }
    }

    #[test]
    fn test_upsert_node_is_stable() {
        let mut graph = GraphStore::new();
        let first = graph.upsert_node("isolated");
        let second = graph.upsert_node("isolated");

        assert_eq!(first, second);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_edges_in_store_order() {
        let mut graph = GraphStore::new();
        graph.add_edge("B", "C", 2);
        graph.add_edge("A", "B", 1);
        graph.add_edge("B", "A", 3);

        let edges: Vec<(&str, &str, Weight)> = graph
            .edges()
            .map(|(source, edge)| (source, edge.destination.as_str(), edge.weight))
            .collect();
        assert_eq!(edges, vec![("B", "C", 2), ("B", "A", 3), ("A", "B", 1)]);
    }

    #[test]
    fn test_collect_from_specs() {
        let graph: GraphStore = ["A:B:1", "B:C:2"]
            .iter()
            .map(|raw| raw.parse::<EdgeSpec>().unwrap())
            .collect();

        assert_eq!(names(&graph), vec!["A", "B", "C"]);
        assert_eq!(graph.edge_count(), 2);
    }
}
