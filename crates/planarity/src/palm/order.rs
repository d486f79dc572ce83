//! Edge orders consumed by the two testers.

use super::types::{Component, EdgeId, EdgeKind, LowPoints, PalmTree};

/// Total order over the palm edges of one component, approximating the nesting
/// order of their intervals along the tree.
///
/// Key: tree edges by the number of their child, back edges by the number of
/// their lower (descendant) endpoint; tree before back on equal numbers. The
/// sort is stable, so remaining ties keep discovery order.
pub fn interval_order(palm: &PalmTree, component: &Component) -> Vec<EdgeId> {
    let mut order: Vec<EdgeId> = component.edge_ids().collect();
    order.sort_by_key(|&e| {
        let edge = palm.edge(e);
        match edge.kind {
            EdgeKind::Tree => (palm.num[edge.target], 0u8),
            EdgeKind::Back => (palm.num[edge.source], 1u8),
        }
    });
    order
}

/// Outgoing palm edges of every vertex, stably sorted by nesting depth.
pub fn nesting_order(palm: &PalmTree, low: &LowPoints) -> Vec<Vec<EdgeId>> {
    palm.out
        .iter()
        .map(|edges| {
            let mut sorted = edges.clone();
            sorted.sort_by_key(|e| low.nesting_depth[e.0]);
            sorted
        })
        .collect()
}
