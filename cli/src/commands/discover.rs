use std::path::Path;

use colored::*;
use nettopo_common::{caution, config::Config, network::device::DiscoveredDevice, success};
use nettopo_core::{DiscoveryReport, GraphStore, ReachabilityScanner};

use crate::mprint;
use crate::terminal::{colors, format, print};

pub fn discover(
    graph: &GraphStore,
    start: &str,
    depth: usize,
    report: Option<&Path>,
    cfg: &Config,
) -> anyhow::Result<()> {
    if !graph.contains(start) {
        caution!("{start} is not part of the topology, only it will be reported");
    }
    let devices: Vec<DiscoveredDevice> = ReachabilityScanner::new(graph).discover_devices(start, depth);

    if let Some(path) = report {
        save_report(start, depth, &devices, path)?;
    }

    if cfg.json {
        return print::print_json(&devices);
    }

    print::header("device discovery", cfg.quiet);
    if cfg.quiet < 2 {
        for line in format::device_table(&devices) {
            print::print(&line);
        }
    } else {
        for device in &devices {
            print::print(&device.name);
        }
    }

    discovery_ends(devices.len(), depth, cfg);
    if let Some(path) = report {
        success!("Report written to {}", path.display());
    }
    Ok(())
}

pub fn save_report(
    start: &str,
    depth: usize,
    devices: &[DiscoveredDevice],
    path: &Path,
) -> anyhow::Result<()> {
    let names: Vec<String> = devices.iter().map(|device| device.name.clone()).collect();
    DiscoveryReport::new(start, depth, names).save(path)?;
    Ok(())
}

fn discovery_ends(found: usize, depth: usize, cfg: &Config) {
    let found: ColoredString = format!("{found} devices").bold().green();
    let depth: ColoredString = format!("{depth} hops").bold().color(colors::ACCENT);
    let output: String = format!("Discovery Complete: {found} within {depth}");

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => {
            mprint!();
            success!("{}", output)
        }
    }
}
