//! Plain-text device discovery report.
//!
//! ```text
//! Device Discovery Report
//! =======================
//! Start Node: hq
//! Depth Limit: 2
//! Timestamp: 2024-01-02T03:04:05
//! Discovered Devices:
//! - hq
//! - core
//! ```

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{Local, NaiveDateTime};
use nettopo_common::Result;
use serde::Serialize;

pub const DEFAULT_REPORT_FILE: &str = "DeviceDiscoveryReport.txt";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveryReport {
    pub start: String,
    pub depth_limit: usize,
    pub timestamp: NaiveDateTime,
    pub devices: Vec<String>,
}

impl DiscoveryReport {
    /// A report stamped with the current local time.
    pub fn new(start: impl Into<String>, depth_limit: usize, devices: Vec<String>) -> Self {
        Self {
            start: start.into(),
            depth_limit,
            timestamp: Local::now().naive_local(),
            devices,
        }
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        write!(writer, "{self}")?;
        writer.flush()?;
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))
    }
}

impl fmt::Display for DiscoveryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Device Discovery Report")?;
        writeln!(f, "=======================")?;
        writeln!(f, "Start Node: {}", self.start)?;
        writeln!(f, "Depth Limit: {}", self.depth_limit)?;
        writeln!(f, "Timestamp: {}", self.timestamp.format(TIMESTAMP_FORMAT))?;
        writeln!(f, "Discovered Devices:")?;
        for device in &self.devices {
            writeln!(f, "- {device}")?;
        }
        Ok(())
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
