//! # Firewall Manager
//!
//! Keeps an ordered rule list and a log of every validation. Rules are
//! checked in insertion order and the first match decides; unmatched
//! traffic is allowed.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{Local, NaiveDateTime};
use nettopo_common::Result;
use nettopo_common::firewall::{FirewallRule, RuleAction, Traffic, TrafficLog, Verdict};
use tracing::debug;

pub const DEFAULT_LOG_FILE: &str = "FirewallLogs.txt";

#[derive(Debug, Default)]
pub struct FirewallManager {
    rules: Vec<FirewallRule>,
    logs: Vec<TrafficLog>,
}

impl FirewallManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_rule(&mut self, rule: FirewallRule) {
        debug!(%rule, "rule added");
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[FirewallRule] {
        &self.rules
    }

    pub fn logs(&self) -> &[TrafficLog] {
        &self.logs
    }

    /// Decides `traffic` and records the decision with the current time.
    pub fn validate(&mut self, traffic: Traffic) -> Verdict {
        self.validate_at(traffic, Local::now().naive_local())
    }

    pub fn validate_at(&mut self, traffic: Traffic, timestamp: NaiveDateTime) -> Verdict {
        let verdict: Verdict = self.verdict_for(&traffic);
        debug!(source = %traffic.source, destination = %traffic.destination, %verdict, "traffic validated");
        self.logs.push(TrafficLog {
            timestamp,
            traffic,
            verdict,
        });
        verdict
    }

    /// Evaluates `traffic` without logging it.
    pub fn verdict_for(&self, traffic: &Traffic) -> Verdict {
        match self.rules.iter().find(|rule| rule.matches(traffic)) {
            Some(rule) if rule.action == RuleAction::Block => Verdict::Blocked,
            _ => Verdict::Allowed,
        }
    }

    /// Writes one line per logged validation.
    pub fn export_logs<W: Write>(&self, mut writer: W) -> Result<()> {
        for log in &self.logs {
            writeln!(writer, "{log}")?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn export_logs_to(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        self.export_logs(BufWriter::new(file))
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
