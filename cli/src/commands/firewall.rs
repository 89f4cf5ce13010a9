use std::path::Path;

use colored::*;
use nettopo_common::config::Config;
use nettopo_common::firewall::{FirewallRule, Traffic, Verdict};
use nettopo_common::success;
use nettopo_core::FirewallManager;

use crate::terminal::{colors, format, print};

pub fn firewall(
    rules: Vec<FirewallRule>,
    checks: Vec<Traffic>,
    export: Option<&Path>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let mut manager = FirewallManager::new();
    for rule in rules {
        manager.add_rule(rule);
    }
    for traffic in checks {
        manager.validate(traffic);
    }

    if let Some(path) = export {
        manager.export_logs_to(path)?;
    }

    if cfg.json {
        return print::print_json(&manager.logs());
    }

    print::header("firewall rules", cfg.quiet);
    if manager.rules().is_empty() {
        print::print_status("No rules: all traffic is allowed");
    }
    for (idx, rule) in manager.rules().iter().enumerate() {
        print::tree_head(idx, &rule.to_string());
    }

    if !manager.logs().is_empty() {
        print::header("traffic validation", cfg.quiet);
        for log in manager.logs() {
            let traffic = &log.traffic;
            let flow: String = format!(
                "{} -> {}:{}/{}",
                traffic.source, traffic.destination, traffic.port, traffic.protocol
            );
            print::print_status(format!("{} {}", flow.color(colors::NODE), format::verdict(log.verdict)));
        }
        summary(manager.logs().iter().map(|log| log.verdict), cfg);
    }

    if let Some(path) = export {
        success!("Traffic log written to {}", path.display());
    }
    Ok(())
}

fn summary(verdicts: impl Iterator<Item = Verdict>, cfg: &Config) {
    let (allowed, blocked) = verdicts.fold((0usize, 0usize), |(allowed, blocked), verdict| match verdict {
        Verdict::Allowed => (allowed + 1, blocked),
        Verdict::Blocked => (allowed, blocked + 1),
    });
    let output: String = format!(
        "{} allowed, {} blocked",
        allowed.to_string().color(colors::ALLOWED).bold(),
        blocked.to_string().color(colors::BLOCKED).bold()
    );

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => success!("{}", output),
    }
}
