#![cfg(test)]
use std::collections::HashSet;

use nettopo_common::network::route::Route;
use nettopo_common::{Endpoint, GraphError};
use nettopo_core::{GraphStore, PathFinder};
use rstest::rstest;

use crate::util::{campus, topology};

/// Cheapest simple path by exhaustive search, for cross-checking.
fn brute_force(graph: &GraphStore, from: &str, to: &str) -> Option<u64> {
    fn walk<'a>(
        graph: &'a GraphStore,
        node: &'a str,
        to: &str,
        seen: &mut HashSet<&'a str>,
        cost: u64,
        best: &mut Option<u64>,
    ) {
        if node == to {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }
        for edge in graph.neighbors(node) {
            if seen.insert(edge.destination.as_str()) {
                walk(graph, &edge.destination, to, seen, cost + u64::from(edge.weight), best);
                seen.remove(edge.destination.as_str());
            }
        }
    }

    let mut best = None;
    let mut seen = HashSet::from([from]);
    walk(graph, from, to, &mut seen, 0, &mut best);
    best
}

fn route_weight(graph: &GraphStore, route: &Route) -> u64 {
    route
        .hops
        .windows(2)
        .map(|pair| {
            graph
                .neighbors(&pair[0])
                .iter()
                .filter(|edge| edge.destination == pair[1])
                .map(|edge| u64::from(edge.weight))
                .min()
                .expect("consecutive hops must be joined by an edge")
        })
        .sum()
}

#[test]
fn triangle_prefers_two_cheap_hops() {
    let graph = topology(&["A:B:5", "B:C:5", "A:C:15"]);
    let finder = PathFinder::new(&graph);

    assert_eq!(finder.find_shortest_path("A", "C"), vec!["A", "B", "C"]);
    assert_eq!(finder.shortest_route("A", "C").unwrap().total_weight, 10);
}

#[rstest]
#[case("gateway", "dist-1", &["gateway", "core-b", "dist-1"], 4)]
#[case("gateway", "dist-2", &["gateway", "core-a", "dist-2"], 9)]
#[case("gateway", "lab", &["gateway", "core-b", "dist-1", "access-1", "lab"], 45)]
#[case("access-2", "lab", &["access-2", "gateway", "core-b", "dist-1", "access-1", "lab"], 50)]
#[case("core-a", "core-a", &["core-a"], 0)]
fn campus_routes(#[case] from: &str, #[case] to: &str, #[case] hops: &[&str], #[case] weight: u64) {
    let graph = campus();
    let route = PathFinder::new(&graph).shortest_route(from, to).unwrap();
    assert_eq!(route.hops, hops);
    assert_eq!(route.total_weight, weight);
}

#[test]
fn every_route_is_optimal_and_consistent() {
    let graph = campus();
    let finder = PathFinder::new(&graph);
    let names: Vec<&str> = graph.node_names().collect();

    for from in &names {
        for to in &names {
            let expected = brute_force(&graph, from, to);
            match finder.shortest_route(from, to) {
                Ok(route) => {
                    assert_eq!(route.source(), Some(*from));
                    assert_eq!(route.destination(), Some(*to));
                    assert_eq!(Some(route.total_weight), expected, "{from} -> {to}");
                    assert_eq!(route_weight(&graph, &route), route.total_weight);
                }
                Err(GraphError::NoPathExists { .. }) => assert_eq!(expected, None, "{from} -> {to}"),
                Err(other) => panic!("unexpected error for {from} -> {to}: {other}"),
            }
        }
    }
}

#[test]
fn missing_endpoints_give_empty_path() {
    let graph = campus();
    let finder = PathFinder::new(&graph);

    assert!(finder.find_shortest_path("gateway", "printer").is_empty());
    assert!(finder.find_shortest_path("printer", "gateway").is_empty());
    assert!(matches!(
        finder.shortest_route("printer", "gateway"),
        Err(GraphError::NodeNotFound { endpoint: Endpoint::Start, .. })
    ));
    assert!(matches!(
        finder.shortest_route("gateway", "printer"),
        Err(GraphError::NodeNotFound { endpoint: Endpoint::End, .. })
    ));
}

#[test]
fn sinks_cannot_reach_anything() {
    let graph = campus();
    assert!(PathFinder::new(&graph).find_shortest_path("lab", "gateway").is_empty());
}

#[test]
fn equal_cost_routes_follow_insertion_order() {
    let graph = topology(&["A:C:1", "A:B:1", "C:D:1", "B:D:1"]);
    assert_eq!(
        PathFinder::new(&graph).find_shortest_path("A", "D"),
        vec!["A", "C", "D"]
    );

    let graph = topology(&["A:B:1", "A:C:1", "C:D:1", "B:D:1"]);
    assert_eq!(
        PathFinder::new(&graph).find_shortest_path("A", "D"),
        vec!["A", "B", "D"]
    );
}
