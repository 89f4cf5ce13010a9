#![cfg(test)]
use nettopo_common::network::route::Bottleneck;
use nettopo_core::BottleneckDetector;
use rstest::rstest;

use crate::util::campus;

#[rstest]
#[case(i64::MIN)]
#[case(-1)]
#[case(0)]
#[case(1)]
#[case(5)]
#[case(8)]
#[case(39)]
#[case(40)]
#[case(i64::from(u32::MAX))]
fn flags_exactly_the_heavier_edges(#[case] threshold: i64) {
    let graph = campus();
    let flagged: Vec<Bottleneck> = BottleneckDetector::new(&graph).detect_bottlenecks(threshold);

    let expected: Vec<Bottleneck> = graph
        .edges()
        .filter(|(_, edge)| i64::from(edge.weight) > threshold)
        .map(|(source, edge)| Bottleneck {
            source: source.to_string(),
            destination: edge.destination.clone(),
            weight: edge.weight,
        })
        .collect();

    assert_eq!(flagged, expected);
}

#[test]
fn campus_bottlenecks_above_five() {
    let graph = campus();
    let lines: Vec<String> = BottleneckDetector::new(&graph)
        .detect_bottlenecks(5)
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(
        lines,
        vec![
            "core-a -> dist-2 (Weight: 7)",
            "core-b -> dist-2 (Weight: 9)",
            "access-1 -> lab (Weight: 40)",
        ]
    );
}

#[test]
fn maximum_threshold_flags_nothing() {
    let graph = campus();
    assert!(BottleneckDetector::new(&graph)
        .detect_bottlenecks(i64::from(u32::MAX))
        .is_empty());
}
