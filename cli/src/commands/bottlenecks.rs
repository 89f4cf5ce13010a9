use colored::*;
use nettopo_common::{config::Config, network::route::Bottleneck, success};
use nettopo_core::{BottleneckDetector, GraphStore};

use crate::terminal::{colors, print};

pub fn bottlenecks(graph: &GraphStore, threshold: i64, cfg: &Config) -> anyhow::Result<()> {
    let found: Vec<Bottleneck> = BottleneckDetector::new(graph).detect_bottlenecks(threshold);

    if cfg.json {
        return print::print_json(&found);
    }

    if found.is_empty() {
        print::header("no bottlenecks", cfg.quiet);
        print::no_results(&format!("nothing heavier than {threshold}"));
        return Ok(());
    }

    print::header("bottleneck connections", cfg.quiet);
    for bottleneck in &found {
        print::print_status(format!(
            "{} -> {} (Weight: {})",
            bottleneck.source.color(colors::NODE),
            bottleneck.destination.color(colors::NODE),
            bottleneck.weight.to_string().color(colors::WEIGHT).bold()
        ));
    }

    let count: ColoredString = format!("{} of {}", found.len(), graph.edge_count()).bold().yellow();
    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&format!("{count} connections above {threshold}"));
        }
        _ => success!("{count} connections above {threshold}"),
    }
    Ok(())
}
