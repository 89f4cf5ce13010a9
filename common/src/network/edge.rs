//! # Edge Model
//!
//! Weights model a cost such as latency in milliseconds. They are unsigned:
//! shortest-path search is only sound for non-negative weights, so negative
//! values are rejected when user input is parsed.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::GraphError;
use crate::utils::input;

pub type Weight = u32;

/// A directed connection to `destination`, owned by its source node's list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub destination: String,
    pub weight: Weight,
}

impl Edge {
    pub fn new(destination: impl Into<String>, weight: Weight) -> Self {
        Self {
            destination: destination.into(),
            weight,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.destination, self.weight)
    }
}

/// An edge description before insertion, e.g. `router:switch:5`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSpec {
    pub source: String,
    pub destination: String,
    pub weight: Weight,
}

impl FromStr for EdgeSpec {
    type Err = GraphError;

    /// Parses `SRC:DST:WEIGHT`.
    ///
    /// The weight is split off the right, then the destination, so the
    /// source name may itself contain colons.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.rsplitn(3, ':');
        let (Some(weight), Some(destination), Some(source)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(GraphError::invalid(format!(
                "edge '{s}' must look like SRC:DST:WEIGHT"
            )));
        };

        let source = input::parse_name(source, "source node")?;
        let destination = input::parse_name(destination, "destination node")?;
        let weight = input::parse_weight(weight)?;

        Ok(EdgeSpec {
            source,
            destination,
            weight,
        })
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
