use nettopo_common::config::Config;
use nettopo_common::{GraphError, Result};
use nettopo_core::layout::{Layout, Point};
use nettopo_core::{GraphStore, RadialLayout};
use serde::Serialize;

use crate::terminal::{canvas::Canvas, print};

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;

pub const EMPTY_TOPOLOGY: &str =
    "No nodes to display. Add some nodes and edges to visualize the topology.";

#[derive(Serialize)]
struct LayoutView<'a> {
    #[serde(flatten)]
    layout: &'a Layout,
    #[serde(skip_serializing_if = "Option::is_none")]
    hit: Option<HitView<'a>>,
}

#[derive(Serialize)]
struct HitView<'a> {
    point: Point,
    node: Option<&'a str>,
}

/// Parses an `X,Y` pixel position.
pub fn parse_point(raw: &str) -> Result<Point> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| GraphError::invalid(format!("'{raw}' is not a position, expected X,Y")))?;
    let axis = |value: &str| {
        value
            .trim()
            .parse::<i32>()
            .map_err(|_| GraphError::invalid(format!("'{}' is not a valid coordinate", value.trim())))
    };
    Ok(Point::new(axis(x)?, axis(y)?))
}

/// Text rows of the diagram, or a single explanatory row for an empty graph.
pub fn render(graph: &GraphStore, width: u32, height: u32) -> Vec<String> {
    let layout: Layout = RadialLayout::new(graph).compute(width, height);
    if layout.is_empty() {
        return vec![EMPTY_TOPOLOGY.to_string()];
    }
    Canvas::render(&layout).lines()
}

/// One line naming the device drawn under `point`.
pub fn describe_hit(layout: &Layout, point: Point) -> String {
    match layout.node_at(point) {
        Some(name) => format!("({}, {}) is on {name}", point.x, point.y),
        None => format!("({}, {}) is not on any device", point.x, point.y),
    }
}

pub fn visualize(
    graph: &GraphStore,
    width: u32,
    height: u32,
    at: Option<Point>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let layout: Layout = RadialLayout::new(graph).compute(width, height);

    if cfg.json {
        let hit = at.map(|point| HitView {
            point,
            node: layout.node_at(point),
        });
        return print::print_json(&LayoutView {
            layout: &layout,
            hit,
        });
    }

    print::header("topology visualization", cfg.quiet);
    for line in render(graph, width, height) {
        print::print(&line);
    }
    if let Some(point) = at {
        print::print_status(describe_hit(&layout, point));
    }
    Ok(())
}
