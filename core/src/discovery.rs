//! # Device Discovery
//!
//! Breadth-first reachability from a start device, bounded by a hop count.
//!
//! The traversal runs level by level: every device at the current depth is
//! taken off the frontier before the depth counter advances. Edge weights
//! never affect which devices are found, only the latency reported for them.

use std::collections::{HashSet, VecDeque};

use nettopo_common::network::device::{ConnectionType, DiscoveredDevice};
use tracing::debug;

use crate::graph::GraphStore;

pub struct ReachabilityScanner<'g> {
    graph: &'g GraphStore,
}

impl<'g> ReachabilityScanner<'g> {
    pub fn new(graph: &'g GraphStore) -> Self {
        Self { graph }
    }

    /// Names of every device within `depth_limit` hops of `start`, in order
    /// of first discovery. Each device appears once.
    ///
    /// `start` is always the first entry, even when the store has never
    /// seen it.
    pub fn discover(&self, start: &str, depth_limit: usize) -> Vec<String> {
        self.discover_devices(start, depth_limit)
            .into_iter()
            .map(|device| device.name)
            .collect()
    }

    /// Same traversal as [`Self::discover`], annotated for display.
    ///
    /// `latency` is the summed weight of the edges through which each device
    /// was first reached.
    pub fn discover_devices(&self, start: &str, depth_limit: usize) -> Vec<DiscoveredDevice> {
        let mut discovered: Vec<DiscoveredDevice> = Vec::new();
        let mut visited: HashSet<&str> = HashSet::from([start]);
        let mut frontier: VecDeque<DiscoveredDevice> = VecDeque::from([DiscoveredDevice {
            name: start.to_string(),
            depth: 0,
            via: None,
            latency: 0,
            connection: ConnectionType::Local,
        }]);

        let mut depth: usize = 0;
        while !frontier.is_empty() && depth <= depth_limit {
            let level_size: usize = frontier.len();
            for _ in 0..level_size {
                let Some(current) = frontier.pop_front() else {
                    break;
                };

                for edge in self.graph.neighbors(&current.name) {
                    if visited.insert(edge.destination.as_str()) {
                        frontier.push_back(DiscoveredDevice {
                            name: edge.destination.clone(),
                            depth: depth + 1,
                            via: Some(current.name.clone()),
                            latency: current.latency + u64::from(edge.weight),
                            connection: ConnectionType::Ethernet,
                        });
                    }
                }

                debug!(device = %current.name, depth, "device discovered");
                discovered.push(current);
            }
            depth += 1;
        }

        discovered
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
