#![cfg(test)]
use nettopo_core::layout::{Point, NODE_RADIUS};
use nettopo_core::RadialLayout;
use rstest::rstest;

use crate::util::campus;

#[rstest]
#[case(800, 600)]
#[case(640, 480)]
#[case(300, 900)]
fn every_node_is_placed_inside_the_canvas(#[case] width: u32, #[case] height: u32) {
    let graph = campus();
    let layout = RadialLayout::new(&graph).compute(width, height);

    assert_eq!(layout.nodes.len(), graph.node_count());
    assert_eq!(layout.edges.len(), graph.edge_count());

    let centre = Point::new(width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height) / 3);
    for node in &layout.nodes {
        let p = node.position;
        assert!(p.x >= 0 && p.x <= width as i32 && p.y >= 0 && p.y <= height as i32);
        assert!((p.distance(&centre) - radius).abs() <= 2.0, "{} is off the circle", node.name);
    }
}

#[test]
fn hit_testing_finds_each_node() {
    let graph = campus();
    let layout = RadialLayout::new(&graph).compute(800, 600);

    for node in &layout.nodes {
        let p = node.position;
        assert_eq!(layout.node_at(p), Some(node.name.as_str()));
        assert_eq!(layout.node_at(Point::new(p.x + NODE_RADIUS, p.y)), Some(node.name.as_str()));
    }
}

#[test]
fn edge_segments_join_placed_nodes() {
    let graph = campus();
    let layout = RadialLayout::new(&graph).compute(800, 600);

    for segment in &layout.edges {
        assert_eq!(layout.position_of(&segment.source), Some(segment.from));
        assert_eq!(layout.position_of(&segment.destination), Some(segment.to));
    }
}
