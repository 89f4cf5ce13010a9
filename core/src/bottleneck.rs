use nettopo_common::network::route::Bottleneck;
use tracing::debug;

use crate::graph::GraphStore;

/// Flags edges whose weight is strictly above a threshold.
pub struct BottleneckDetector<'g> {
    graph: &'g GraphStore,
}

impl<'g> BottleneckDetector<'g> {
    pub fn new(graph: &'g GraphStore) -> Self {
        Self { graph }
    }

    /// Every edge with `weight > threshold`, in store order.
    ///
    /// A negative threshold flags every edge.
    pub fn detect_bottlenecks(&self, threshold: i64) -> Vec<Bottleneck> {
        let bottlenecks: Vec<Bottleneck> = self
            .graph
            .edges()
            .filter(|(_, edge)| i64::from(edge.weight) > threshold)
            .map(|(source, edge)| Bottleneck {
                source: source.to_string(),
                destination: edge.destination.clone(),
                weight: edge.weight,
            })
            .collect();

        debug!(threshold, found = bottlenecks.len(), "bottleneck scan complete");
        bottlenecks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> GraphStore {
        let mut graph = GraphStore::new();
        graph.add_edge("A", "B", 5);
        graph.add_edge("B", "C", 50);
        graph.add_edge("A", "C", 20);
        graph.add_edge("C", "A", 0);
        graph
    }

    fn flagged(threshold: i64) -> Vec<(String, String)> {
        BottleneckDetector::new(&sample())
            .detect_bottlenecks(threshold)
            .into_iter()
            .map(|b| (b.source, b.destination))
            .collect()
    }

    #[rstest]
    #[case(-1, 4)]
    #[case(0, 3)]
    #[case(5, 2)]
    #[case(19, 2)]
    #[case(20, 1)]
    #[case(50, 0)]
    #[case(i64::from(u32::MAX), 0)]
    fn test_strictly_greater_than_threshold(#[case] threshold: i64, #[case] expected: usize) {
        assert_eq!(flagged(threshold).len(), expected);
    }

    #[test]
    fn test_results_follow_store_order() {
        let pairs = flagged(4);
        assert_eq!(
            pairs,
            vec![
                ("A".to_string(), "B".to_string()),
                ("A".to_string(), "C".to_string()),
                ("B".to_string(), "C".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_graph_has_no_bottlenecks() {
        let graph = GraphStore::new();
        assert!(BottleneckDetector::new(&graph).detect_bottlenecks(i64::MIN).is_empty());
    }
}
