//! # nettopo core
//!
//! The graph engine and the components built on top of it.
//!
//! * **[`graph`]**: [`GraphStore`], the append-only weighted adjacency model.
//! * **[`path`]**: [`PathFinder`], single-source shortest path.
//! * **[`bottleneck`]**: [`BottleneckDetector`], threshold scan over edges.
//! * **[`discovery`]**: [`ReachabilityScanner`], depth-bounded breadth-first discovery.
//!
//! Consumers of the engine:
//! * **[`layout`]**: radial placement of nodes for drawing.
//! * **[`report`]**: plain-text discovery reports.
//! * **[`firewall`]**: a rule list and traffic validator, independent of the graph.
//!
//! Every component borrows the store it works on; nothing here holds global state.

pub mod bottleneck;
pub mod discovery;
pub mod firewall;
pub mod graph;
pub mod layout;
pub mod path;
pub mod report;

pub use bottleneck::BottleneckDetector;
pub use discovery::ReachabilityScanner;
pub use firewall::FirewallManager;
pub use graph::GraphStore;
pub use layout::RadialLayout;
pub use path::PathFinder;
pub use report::DiscoveryReport;
