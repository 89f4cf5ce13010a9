use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConnectionType {
    /// The device the scan started from.
    Local,
    Ethernet,
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionType::Local => f.write_str("Local"),
            ConnectionType::Ethernet => f.write_str("Ethernet"),
        }
    }
}

/// A device reached by a discovery scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveredDevice {
    pub name: String,
    /// Hops from the start device.
    pub depth: usize,
    /// The device this one was first reached from, `None` for the start.
    pub via: Option<String>,
    /// Accumulated edge weight along the discovery tree.
    pub latency: u64,
    pub connection: ConnectionType,
}
