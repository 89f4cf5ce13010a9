//! # Network Models
//!
//! * [`edge::Edge`]: a directed, weighted connection stored by the graph.
//! * [`edge::EdgeSpec`]: an edge as typed by the user (`SRC:DST:WEIGHT`).
//! * [`route::Route`] and [`route::Bottleneck`]: query results.
//! * [`device::DiscoveredDevice`]: one row of a discovery scan.

pub mod device;
pub mod edge;
pub mod route;
