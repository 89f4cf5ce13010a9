//! # Firewall Models
//!
//! A toy rule set: rules match traffic on exact source, destination and
//! port, and on protocol ignoring case. These types have no relation to the
//! topology graph.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::GraphError;
use crate::utils::input;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RuleAction {
    Allow,
    Block,
}

impl FromStr for RuleAction {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALLOW" => Ok(RuleAction::Allow),
            "BLOCK" => Ok(RuleAction::Block),
            other => Err(GraphError::invalid(format!(
                "action must be ALLOW or BLOCK, got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for RuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleAction::Allow => f.write_str("ALLOW"),
            RuleAction::Block => f.write_str("BLOCK"),
        }
    }
}

/// Traffic as presented to the firewall for validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traffic {
    pub source: String,
    pub destination: String,
    pub port: u16,
    pub protocol: String,
}

impl FromStr for Traffic {
    type Err = GraphError;

    /// Parses `SRC,DST,PORT,PROTOCOL`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').collect();
        let [source, destination, port, protocol] = fields.as_slice() else {
            return Err(GraphError::invalid(format!(
                "traffic '{s}' must look like SRC,DST,PORT,PROTOCOL"
            )));
        };

        Ok(Traffic {
            source: input::parse_name(source, "source")?,
            destination: input::parse_name(destination, "destination")?,
            port: input::parse_port(port)?,
            protocol: input::parse_name(protocol, "protocol")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FirewallRule {
    pub source: String,
    pub destination: String,
    pub port: u16,
    pub protocol: String,
    pub action: RuleAction,
}

impl FirewallRule {
    /// Source, destination and port must be equal; protocol ignores case.
    pub fn matches(&self, traffic: &Traffic) -> bool {
        self.source == traffic.source
            && self.destination == traffic.destination
            && self.port == traffic.port
            && self.protocol.eq_ignore_ascii_case(&traffic.protocol)
    }
}

impl FromStr for FirewallRule {
    type Err = GraphError;

    /// Parses `SRC,DST,PORT,PROTOCOL,ACTION`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((traffic, action)) = s.rsplit_once(',') else {
            return Err(GraphError::invalid(format!(
                "rule '{s}' must look like SRC,DST,PORT,PROTOCOL,ACTION"
            )));
        };
        let Traffic {
            source,
            destination,
            port,
            protocol,
        } = traffic.parse()?;

        Ok(FirewallRule {
            source,
            destination,
            port,
            protocol,
            action: action.parse()?,
        })
    }
}

impl fmt::Display for FirewallRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rule [Source: {}, Destination: {}, Port: {}, Protocol: {}, Action: {}]",
            self.source, self.destination, self.port, self.protocol, self.action
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Allowed,
    Blocked,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Allowed => f.write_str("Allowed"),
            Verdict::Blocked => f.write_str("Blocked"),
        }
    }
}

/// One validated piece of traffic and the verdict it received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrafficLog {
    pub timestamp: NaiveDateTime,
    pub traffic: Traffic,
    pub verdict: Verdict,
}

impl fmt::Display for TrafficLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Log [Source: {}, Destination: {}, Port: {}, Protocol: {}, Status: {}]",
            self.traffic.source,
            self.traffic.destination,
            self.traffic.port,
            self.traffic.protocol,
            self.verdict
        )
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
