use std::fmt;

use serde::Serialize;

use crate::network::edge::Weight;

/// A shortest path with its accumulated weight.
///
/// `hops` always begins with the start node and ends with the destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub hops: Vec<String>,
    pub total_weight: u64,
}

impl Route {
    pub fn source(&self) -> Option<&str> {
        self.hops.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.hops.last().map(String::as_str)
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.hops.len().saturating_sub(1)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hops.join(" -> "))
    }
}

/// An edge whose weight exceeded the detection threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bottleneck {
    pub source: String,
    pub destination: String,
    pub weight: Weight,
}

impl fmt::Display for Bottleneck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} (Weight: {})",
            self.source, self.destination, self.weight
        )
    }
}
