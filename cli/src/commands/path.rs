use colored::*;
use nettopo_common::{config::Config, network::route::Route, success};
use nettopo_core::{GraphStore, PathFinder};

use crate::terminal::{colors, print};

pub fn path(graph: &GraphStore, from: &str, to: &str, cfg: &Config) -> anyhow::Result<()> {
    let route: Route = PathFinder::new(graph).shortest_route(from, to)?;

    if cfg.json {
        return print::print_json(&route);
    }

    print::header("shortest path", cfg.quiet);
    print::set_key_width(&["Path", "Total Weight", "Hops"]);
    print::aligned_line("Path", route.to_string().color(colors::NODE));
    print::aligned_line("Total Weight", route.total_weight.to_string().color(colors::WEIGHT));
    print::aligned_line("Hops", route.hop_count().to_string());

    if cfg.quiet > 0 {
        success!("Route found from {from} to {to}");
    }
    Ok(())
}
