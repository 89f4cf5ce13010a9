#![cfg(test)]
use nettopo_common::network::device::ConnectionType;
use nettopo_core::report::DEFAULT_REPORT_FILE;
use nettopo_core::{DiscoveryReport, ReachabilityScanner};

use crate::util::{campus, topology};

#[test]
fn depth_limits_bound_the_scan() {
    let graph = topology(&["A:B:1"]);
    let scanner = ReachabilityScanner::new(&graph);

    assert_eq!(scanner.discover("A", 0), vec!["A"]);
    assert_eq!(scanner.discover("A", 1), vec!["A", "B"]);
    assert_eq!(scanner.discover("B", 1), vec!["B"]);
}

#[test]
fn cycles_do_not_repeat_devices() {
    let graph = topology(&["A:B:1", "B:A:1"]);
    assert_eq!(ReachabilityScanner::new(&graph).discover("A", 5), vec!["A", "B"]);
}

#[test]
fn campus_scan_in_level_order() {
    let graph = campus();
    let scanner = ReachabilityScanner::new(&graph);

    assert_eq!(scanner.discover("gateway", 1), vec!["gateway", "core-a", "core-b"]);
    assert_eq!(
        scanner.discover("gateway", 10),
        vec!["gateway", "core-a", "core-b", "dist-1", "dist-2", "access-1", "access-2", "lab"]
    );
}

#[test]
fn deeper_scans_extend_shallower_ones() {
    let graph = campus();
    let scanner = ReachabilityScanner::new(&graph);

    let mut previous: Vec<String> = scanner.discover("access-2", 0);
    for depth in 1..8 {
        let current = scanner.discover("access-2", depth);
        assert!(current.starts_with(&previous), "depth {depth} reordered earlier devices");
        previous = current;
    }
    assert_eq!(previous.len(), graph.node_count());
}

#[test]
fn devices_record_how_they_were_reached() {
    let graph = campus();
    let devices = ReachabilityScanner::new(&graph).discover_devices("gateway", 2);

    let dist_1 = devices.iter().find(|d| d.name == "dist-1").unwrap();
    assert_eq!(dist_1.depth, 2);
    assert_eq!(dist_1.via.as_deref(), Some("core-a"));
    assert_eq!(dist_1.latency, 6);
    assert_eq!(dist_1.connection, ConnectionType::Ethernet);
    assert_eq!(devices[0].connection, ConnectionType::Local);
}

#[test]
fn report_lists_every_discovered_device() -> anyhow::Result<()> {
    let graph = campus();
    let devices = ReachabilityScanner::new(&graph).discover("core-b", 2);

    let dir = tempfile::tempdir()?;
    let path = dir.path().join(DEFAULT_REPORT_FILE);
    DiscoveryReport::new("core-b", 2, devices.clone()).save(&path)?;

    let text = std::fs::read_to_string(&path)?;
    let listed: Vec<&str> = text
        .lines()
        .filter_map(|line| line.strip_prefix("- "))
        .collect();
    assert_eq!(listed, devices);
    assert!(text.contains("Start Node: core-b\nDepth Limit: 2\nTimestamp: "));
    Ok(())
}
