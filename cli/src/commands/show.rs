use colored::*;
use nettopo_common::config::Config;
use nettopo_common::network::edge::Edge;
use nettopo_core::GraphStore;
use serde::Serialize;

use crate::terminal::{colors, format, print};

#[derive(Serialize)]
struct NodeView<'a> {
    name: &'a str,
    edges: &'a [Edge],
}

pub fn show(graph: &GraphStore, cfg: &Config) -> anyhow::Result<()> {
    if cfg.json {
        let nodes: Vec<NodeView> = graph
            .node_names()
            .map(|name| NodeView {
                name,
                edges: graph.neighbors(name),
            })
            .collect();
        return print::print_json(&nodes);
    }

    if graph.is_empty() {
        print::header("empty topology", cfg.quiet);
        print::no_results("no devices yet, seed some with --edge");
        return Ok(());
    }

    print::header("network topology", cfg.quiet);
    for (idx, node) in graph.node_names().enumerate() {
        let edges: &[Edge] = graph.neighbors(node);
        match cfg.quiet {
            0 | 1 => {
                print::tree_head(idx, node);
                let details: Vec<format::Detail> = if edges.is_empty() {
                    vec![("edges".to_string(), "none".dimmed())]
                } else {
                    format::edges_to_detail(edges)
                };
                print::as_tree_one_level(details);
            }
            _ => print::print(&format::topology_line(node, edges)),
        }
    }

    if cfg.quiet == 0 {
        let devices: ColoredString = format!("{} devices", graph.node_count()).color(colors::NODE);
        let links: ColoredString = format!("{} connections", graph.edge_count()).color(colors::WEIGHT);
        print::fat_separator();
        print::centerln(&format!("Topology: {devices} joined by {links}"));
    }
    Ok(())
}
