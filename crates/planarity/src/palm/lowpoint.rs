//! Lowpoints per vertex and per palm edge.
//!
//! Evaluation walks `preorder` backwards (decreasing dfs number). Every child
//! has a larger number than its parent, so each vertex is finalized only after
//! all of its children are.

use super::types::{EdgeKind, LowPoints, PalmTree};

/// Fold a return-point pair `(low, low2)` into an accumulator pair.
#[inline]
fn absorb(acc: (usize, usize), low: usize, low2: usize) -> (usize, usize) {
    let (a, a2) = acc;
    if low < a {
        (low, a.min(low2))
    } else if low > a {
        (a, a2.min(low))
    } else {
        (a, a2.min(low2))
    }
}

pub fn compute_lowpoints(palm: &PalmTree) -> LowPoints {
    let n = palm.vertex_count();
    let m = palm.edges.len();
    let mut edge_low = Vec::with_capacity(m);
    let mut edge_low2 = Vec::with_capacity(m);
    for e in &palm.edges {
        let src = palm.num[e.source];
        edge_low2.push(src);
        edge_low.push(match e.kind {
            EdgeKind::Back => palm.num[e.target],
            EdgeKind::Tree => src,
        });
    }

    let mut vertex_low = vec![0; n];
    let mut vertex_low2 = vec![0; n];
    for &v in palm.preorder.iter().rev() {
        let own = palm.num[v];
        let mut acc = (own, own);
        for &e in &palm.out[v] {
            let (low, low2) = (edge_low[e.0], edge_low2[e.0]);
            acc = absorb(acc, low, low2);
            if let Some(pe) = palm.parent_edge[v] {
                let folded = absorb((edge_low[pe.0], edge_low2[pe.0]), low, low2);
                edge_low[pe.0] = folded.0;
                edge_low2[pe.0] = folded.1;
            }
        }
        vertex_low[v] = acc.0;
        vertex_low2[v] = acc.1;
    }

    let nesting_depth = palm
        .edges
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let chordal = edge_low2[i] < palm.num[e.source];
            2 * edge_low[i] + usize::from(chordal)
        })
        .collect();

    LowPoints {
        vertex_low,
        vertex_low2,
        edge_low,
        edge_low2,
        nesting_depth,
    }
}

impl LowPoints {
    pub fn compute(palm: &PalmTree) -> Self {
        compute_lowpoints(palm)
    }
}
