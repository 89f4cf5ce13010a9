//! Validation of raw text typed by the user.
//!
//! Every front end funnels numbers through these helpers so the engine only
//! ever sees values that are valid by construction.

use crate::error::{GraphError, Result};
use crate::network::edge::Weight;

/// Parses a non-negative edge weight.
pub fn parse_weight(raw: &str) -> Result<Weight> {
    let value = parse_integer(raw, "weight")?;
    if value < 0 {
        return Err(GraphError::invalid(format!(
            "weight must be non-negative, got {value}"
        )));
    }
    Weight::try_from(value).map_err(|_| {
        GraphError::invalid(format!("weight {value} exceeds the maximum of {}", Weight::MAX))
    })
}

/// Parses a discovery depth limit.
pub fn parse_depth(raw: &str) -> Result<usize> {
    let value = parse_integer(raw, "depth limit")?;
    if value < 0 {
        return Err(GraphError::invalid(format!(
            "depth limit must be a non-negative integer, got {value}"
        )));
    }
    usize::try_from(value)
        .map_err(|_| GraphError::invalid(format!("depth limit {value} is too large")))
}

/// Parses a bottleneck threshold. Any integer is accepted.
pub fn parse_threshold(raw: &str) -> Result<i64> {
    parse_integer(raw, "threshold")
}

pub fn parse_port(raw: &str) -> Result<u16> {
    let value = parse_integer(raw, "port")?;
    u16::try_from(value)
        .map_err(|_| GraphError::invalid(format!("port must be between 0 and 65535, got {value}")))
}

/// Trims a node or host name and rejects empty input.
pub fn parse_name(raw: &str, what: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(GraphError::invalid(format!("{what} cannot be empty")));
    }
    Ok(name.to_string())
}

fn parse_integer(raw: &str, what: &str) -> Result<i64> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| GraphError::invalid(format!("'{trimmed}' is not a valid {what}")))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
