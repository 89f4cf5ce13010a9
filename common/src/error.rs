//! Error taxonomy for graph queries and user input.
//!
//! Expected conditions ("node not found", "no path") are values of
//! [`GraphError`], never panics.

use std::fmt;
use std::io;

use thiserror::Error;

/// Which end of a path query a missing node was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("Start"),
            Endpoint::End => f.write_str("End"),
        }
    }
}

#[derive(Debug, Error)]
pub enum GraphError {
    /// A path query named a node the store has never seen.
    #[error("{endpoint} node \"{name}\" does not exist in the graph")]
    NodeNotFound { endpoint: Endpoint, name: String },

    /// Both nodes exist but no sequence of edges connects them.
    #[error("No path found between {from} and {to}")]
    NoPathExists { from: String, to: String },

    /// Rejected input: negative depth or weight, malformed numbers or specs.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl GraphError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        GraphError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
