#![cfg(test)]
use nettopo_common::firewall::{FirewallRule, Traffic, Verdict};
use nettopo_core::firewall::DEFAULT_LOG_FILE;
use nettopo_core::FirewallManager;
use rstest::rstest;

fn office_firewall() -> FirewallManager {
    let mut firewall = FirewallManager::new();
    for raw in [
        "guest,server,22,tcp,BLOCK",
        "guest,server,80,tcp,ALLOW",
        "admin,server,22,TCP,ALLOW",
        "admin,server,22,tcp,BLOCK",
    ] {
        firewall.add_rule(raw.parse::<FirewallRule>().unwrap());
    }
    firewall
}

#[rstest]
#[case("guest,server,22,tcp", Verdict::Blocked)]
#[case("guest,server,22,TCP", Verdict::Blocked)]
#[case("guest,server,80,tcp", Verdict::Allowed)]
#[case("guest,server,443,tcp", Verdict::Allowed)]
#[case("guest,server,22,udp", Verdict::Allowed)]
#[case("admin,server,22,tcp", Verdict::Allowed)]
#[case("server,guest,22,tcp", Verdict::Allowed)]
fn first_matching_rule_decides(#[case] raw: &str, #[case] expected: Verdict) {
    let mut firewall = office_firewall();
    assert_eq!(firewall.validate(raw.parse::<Traffic>().unwrap()), expected);
}

#[test]
fn exported_log_has_one_line_per_check() -> anyhow::Result<()> {
    let mut firewall = office_firewall();
    for raw in ["guest,server,22,tcp", "guest,server,80,tcp", "admin,server,22,tcp"] {
        firewall.validate(raw.parse::<Traffic>()?);
    }

    let dir = tempfile::tempdir()?;
    let path = dir.path().join(DEFAULT_LOG_FILE);
    firewall.export_logs_to(&path)?;

    let text = std::fs::read_to_string(&path)?;
    let statuses: Vec<&str> = text
        .lines()
        .filter_map(|line| line.rsplit_once("Status: "))
        .map(|(_, status)| status.trim_end_matches(']'))
        .collect();
    assert_eq!(statuses, vec!["Blocked", "Allowed", "Allowed"]);
    Ok(())
}

#[rstest]
#[case("guest,server,22,tcp")]
#[case("guest,server,port,tcp,BLOCK")]
#[case("guest,server,70000,tcp,BLOCK")]
#[case("guest,server,22,tcp,REJECT")]
fn malformed_rules_are_rejected(#[case] raw: &str) {
    assert!(raw.parse::<FirewallRule>().is_err());
}
