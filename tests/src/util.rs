use nettopo_common::network::edge::EdgeSpec;
use nettopo_core::GraphStore;

/// Builds a store from `SRC:DST:WEIGHT` strings, in order.
pub fn topology(edges: &[&str]) -> GraphStore {
    edges
        .iter()
        .map(|raw| {
            raw.parse::<EdgeSpec>()
                .unwrap_or_else(|err| panic!("bad edge '{raw}': {err}"))
        })
        .collect()
}

/// A small campus network with a redundant core and a dead-end lab.
///
/// ```text
/// gateway -> core-a (2), gateway -> core-b (3)
/// core-a  -> dist-1 (4), core-b -> dist-1 (1)
/// core-a  -> dist-2 (7), core-b -> dist-2 (9)
/// dist-1  -> access-1 (1), dist-2 -> access-2 (1)
/// access-1 -> lab (40), access-2 -> gateway (5)
/// ```
pub fn campus() -> GraphStore {
    topology(&[
        "gateway:core-a:2",
        "gateway:core-b:3",
        "core-a:dist-1:4",
        "core-b:dist-1:1",
        "core-a:dist-2:7",
        "core-b:dist-2:9",
        "dist-1:access-1:1",
        "dist-2:access-2:1",
        "access-1:lab:40",
        "access-2:gateway:5",
    ])
}
