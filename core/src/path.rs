//! # Shortest Path
//!
//! Dijkstra's algorithm over a [`GraphStore`] with a binary min-heap.
//!
//! * Outdated heap entries are not removed when a node's distance improves.
//!   A popped entry whose distance is larger than the recorded one is skipped.
//! * The search stops as soon as the destination is popped.
//! * Ties between equal distances are broken first-in, first-out: each push
//!   takes a sequence number and the lower number wins.
//!
//! Weights are unsigned, which is what makes the early exit sound.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use nettopo_common::network::route::Route;
use nettopo_common::{Endpoint, GraphError, Result};
use tracing::{debug, warn};

use crate::graph::{GraphStore, NodeIndex};

const UNREACHED: u64 = u64::MAX;

/// Heap entry ordered so that [`BinaryHeap`] pops the smallest distance,
/// then the earliest push.
#[derive(Debug, PartialEq, Eq)]
struct FrontierEntry {
    distance: u64,
    seq: u64,
    node: NodeIndex,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Default)]
struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    fn push(&mut self, node: NodeIndex, distance: u64) {
        self.heap.push(FrontierEntry {
            distance,
            seq: self.next_seq,
            node,
        });
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }
}

pub struct PathFinder<'g> {
    graph: &'g GraphStore,
}

impl<'g> PathFinder<'g> {
    pub fn new(graph: &'g GraphStore) -> Self {
        Self { graph }
    }

    /// Node names from `start` to `end` inclusive.
    ///
    /// Returns an empty vector when either node is unknown or no path
    /// exists; the reason is logged as a warning.
    pub fn find_shortest_path(&self, start: &str, end: &str) -> Vec<String> {
        match self.shortest_route(start, end) {
            Ok(route) => route.hops,
            Err(err) => {
                warn!("{err}");
                Vec::new()
            }
        }
    }

    /// The cheapest route from `start` to `end` and its total weight.
    ///
    /// # Errors
    /// * [`GraphError::NodeNotFound`] if either endpoint was never added.
    /// * [`GraphError::NoPathExists`] if no edges lead from `start` to `end`.
    pub fn shortest_route(&self, start: &str, end: &str) -> Result<Route> {
        let start_idx = self.require(start, Endpoint::Start)?;
        let end_idx = self.require(end, Endpoint::End)?;

        let node_count: usize = self.graph.node_count();
        let mut distances: Vec<u64> = vec![UNREACHED; node_count];
        let mut previous: Vec<Option<NodeIndex>> = vec![None; node_count];
        let mut frontier = Frontier::default();

        distances[start_idx] = 0;
        frontier.push(start_idx, 0);

        while let Some(FrontierEntry { distance, node, .. }) = frontier.pop() {
            if node == end_idx {
                break;
            }
            if distance > distances[node] {
                continue;
            }

            for edge in self.graph.neighbors_at(node) {
                let Some(next) = self.graph.index_of(&edge.destination) else {
                    continue;
                };
                let candidate: u64 = distance.saturating_add(u64::from(edge.weight));
                if candidate < distances[next] {
                    distances[next] = candidate;
                    previous[next] = Some(node);
                    frontier.push(next, candidate);
                }
            }
        }

        if distances[end_idx] == UNREACHED {
            return Err(GraphError::NoPathExists {
                from: start.to_string(),
                to: end.to_string(),
            });
        }

        let hops: Vec<String> = self.trace_back(&previous, end_idx);
        debug!(start, end, weight = distances[end_idx], hops = hops.len(), "shortest path found");

        Ok(Route {
            hops,
            total_weight: distances[end_idx],
        })
    }

    fn require(&self, name: &str, endpoint: Endpoint) -> Result<NodeIndex> {
        self.graph
            .index_of(name)
            .ok_or_else(|| GraphError::NodeNotFound {
                endpoint,
                name: name.to_string(),
            })
    }

    fn trace_back(&self, previous: &[Option<NodeIndex>], end_idx: NodeIndex) -> Vec<String> {
        let mut hops: Vec<String> = Vec::new();
        let mut at: Option<NodeIndex> = Some(end_idx);
        while let Some(idx) = at {
            hops.push(self.graph.name_of(idx).to_string());
            at = previous[idx];
        }
        hops.reverse();
        hops
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
