//! # Radial Layout
//!
//! Places every node on a circle around the canvas centre and derives the
//! geometry needed to draw directed, labelled edges. Pure arithmetic: the
//! caller decides how to render it.
//!
//! Node `i` sits at angle `i * (360 / n)` degrees, the step rounded down to
//! whole degrees, on a circle of radius `min(width, height) / 3`.
//! Coordinates are truncated toward zero. Both dimensions are clamped to
//! [`MAX_DIMENSION`], which keeps every coordinate sum inside `i32`.

use std::f64::consts::PI;

use nettopo_common::network::edge::Weight;
use serde::Serialize;

use crate::graph::GraphStore;

/// Largest accepted canvas width or height, in pixels.
pub const MAX_DIMENSION: u32 = 16_384;

/// Radius of a drawn node, also the hover hit radius.
pub const NODE_RADIUS: i32 = 20;
/// Length of each arrow-head stroke.
pub const ARROW_SIZE: f64 = 10.0;
/// Offset of a weight label from the edge midpoint.
pub const LABEL_OFFSET: (i32, i32) = (10, -10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodePlacement {
    pub name: String,
    pub position: Point,
}

/// Drawing instructions for one directed edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeSegment {
    pub source: String,
    pub destination: String,
    pub weight: Weight,
    pub from: Point,
    pub to: Point,
    /// Where the weight label is anchored.
    pub label: Point,
    /// End points of the two arrow-head strokes, both starting at `to`.
    pub arrow_head: [Point; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub nodes: Vec<NodePlacement>,
    pub edges: Vec<EdgeSegment>,
}

impl Layout {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn position_of(&self, name: &str) -> Option<Point> {
        self.nodes
            .iter()
            .find(|placement| placement.name == name)
            .map(|placement| placement.position)
    }

    /// The first node whose circle contains `point`, if any.
    pub fn node_at(&self, point: Point) -> Option<&str> {
        self.nodes
            .iter()
            .find(|placement| placement.position.distance(&point) <= f64::from(NODE_RADIUS))
            .map(|placement| placement.name.as_str())
    }
}

pub struct RadialLayout<'g> {
    graph: &'g GraphStore,
}

impl<'g> RadialLayout<'g> {
    pub fn new(graph: &'g GraphStore) -> Self {
        Self { graph }
    }

    pub fn compute(&self, width: u32, height: u32) -> Layout {
        let width: u32 = width.min(MAX_DIMENSION);
        let height: u32 = height.min(MAX_DIMENSION);
        let node_count: usize = self.graph.node_count();
        if node_count == 0 {
            return Layout {
                width,
                height,
                nodes: Vec::new(),
                edges: Vec::new(),
            };
        }

        let centre = Point::new(coord(width / 2), coord(height / 2));
        let circle_radius: f64 = f64::from(width.min(height) / 3);
        let angle_step: usize = 360 / node_count;

        let nodes: Vec<NodePlacement> = self
            .graph
            .node_names()
            .enumerate()
            .map(|(i, name)| {
                let angle: f64 = ((i * angle_step) as f64).to_radians();
                NodePlacement {
                    name: name.to_string(),
                    position: Point::new(
                        centre.x + (circle_radius * angle.cos()) as i32,
                        centre.y + (circle_radius * angle.sin()) as i32,
                    ),
                }
            })
            .collect();

        let mut layout = Layout {
            width,
            height,
            nodes,
            edges: Vec::new(),
        };

        let mut edges: Vec<EdgeSegment> = Vec::with_capacity(self.graph.edge_count());
        for (source, edge) in self.graph.edges() {
            let (Some(from), Some(to)) = (
                layout.position_of(source),
                layout.position_of(&edge.destination),
            ) else {
                continue;
            };
            edges.push(EdgeSegment {
                source: source.to_string(),
                destination: edge.destination.clone(),
                weight: edge.weight,
                from,
                to,
                label: label_anchor(from, to),
                arrow_head: arrow_head(from, to),
            });
        }
        layout.edges = edges;
        layout
    }
}

fn coord(value: u32) -> i32 {
    i32::try_from(value.min(MAX_DIMENSION)).unwrap_or(MAX_DIMENSION as i32)
}

fn label_anchor(from: Point, to: Point) -> Point {
    Point::new(
        (from.x + to.x) / 2 + LABEL_OFFSET.0,
        (from.y + to.y) / 2 + LABEL_OFFSET.1,
    )
}

fn arrow_head(from: Point, to: Point) -> [Point; 2] {
    let angle: f64 = f64::from(to.y - from.y).atan2(f64::from(to.x - from.x));
    let stroke = |offset: f64| {
        Point::new(
            (f64::from(to.x) - ARROW_SIZE * (angle + offset).cos()) as i32,
            (f64::from(to.y) - ARROW_SIZE * (angle + offset).sin()) as i32,
        )
    };
    [stroke(-PI / 6.0), stroke(PI / 6.0)]
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
