//! # nettopo common
//!
//! Models, errors and runtime configuration shared by the graph engine
//! (`nettopo-core`) and its front ends (`nettopo-cli`).
//!
//! * **[`network`]**: edges, routes, bottlenecks and discovered devices.
//! * **[`firewall`]**: firewall rules, traffic descriptions and verdicts.
//! * **[`error`]**: the [`GraphError`] taxonomy.
//! * **[`utils`]**: validation of raw user input.

pub mod config;
pub mod error;
pub mod firewall;
pub mod macros;
pub mod network;
pub mod utils;

pub use error::{Endpoint, GraphError, Result};

#[doc(hidden)]
pub use tracing as __tracing;
