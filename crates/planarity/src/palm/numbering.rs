//! DFS numbering: preorder numbers, parent links, and tree/back classification.
//!
//! The traversal keeps its own heap stack of `(vertex, next-neighbor cursor)`
//! frames, so recursion depth never depends on the vertex count.

use crate::error::PlanarityError;
use crate::graph::Graph;

use super::types::{Component, EdgeId, EdgeKind, PalmEdge, PalmTree};

#[derive(Clone, Copy, Debug)]
struct Frame {
    vertex: usize,
    cursor: usize,
}

/// Number every vertex of `graph`, one component at a time.
///
/// Roots are taken in increasing vertex id. Numbers keep increasing across
/// components, so each component owns a contiguous block of them.
pub fn build_palm_tree(graph: &Graph) -> Result<PalmTree, PlanarityError> {
    let n = graph.vertex_count();
    let mut num: Vec<Option<usize>> = vec![None; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut parent_edge: Vec<Option<EdgeId>> = vec![None; n];
    let mut depth = vec![0usize; n];
    let mut preorder = Vec::with_capacity(n);
    let mut edges: Vec<PalmEdge> = Vec::with_capacity(graph.edge_count());
    let mut out: Vec<Vec<EdgeId>> = vec![Vec::new(); n];
    let mut components = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    for root in 0..n {
        if num[root].is_some() {
            continue;
        }
        let first_edge = edges.len();
        num[root] = Some(preorder.len());
        preorder.push(root);
        stack.push(Frame {
            vertex: root,
            cursor: 0,
        });

        while let Some(frame) = stack.last_mut() {
            let v = frame.vertex;
            let Some(&w) = graph.neighbors(v).get(frame.cursor) else {
                stack.pop();
                continue;
            };
            frame.cursor += 1;
            let num_v =
                num[v].ok_or_else(|| PlanarityError::malformed("frame vertex unnumbered"))?;
            match num[w] {
                None => {
                    let id = EdgeId(edges.len());
                    edges.push(PalmEdge {
                        source: v,
                        target: w,
                        kind: EdgeKind::Tree,
                    });
                    out[v].push(id);
                    num[w] = Some(preorder.len());
                    preorder.push(w);
                    parent[w] = Some(v);
                    parent_edge[w] = Some(id);
                    depth[w] = depth[v] + 1;
                    stack.push(Frame {
                        vertex: w,
                        cursor: 0,
                    });
                }
                Some(num_w) if num_w < num_v && parent[v] != Some(w) => {
                    let id = EdgeId(edges.len());
                    edges.push(PalmEdge {
                        source: v,
                        target: w,
                        kind: EdgeKind::Back,
                    });
                    out[v].push(id);
                }
                // Reverse view of an edge already classified from the other end.
                Some(_) => {}
            }
        }

        components.push(Component {
            root,
            edges: first_edge..edges.len(),
        });
    }

    let num = num
        .into_iter()
        .enumerate()
        .map(|(v, k)| {
            k.ok_or_else(|| PlanarityError::malformed(format!("vertex {v} unnumbered")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::trace!(
        vertices = n,
        palm_edges = edges.len(),
        components = components.len(),
        "palm tree built"
    );

    Ok(PalmTree {
        num,
        parent,
        parent_edge,
        depth,
        preorder,
        edges,
        out,
        components,
    })
}

impl PalmTree {
    pub fn build(graph: &Graph) -> Result<Self, PlanarityError> {
        build_palm_tree(graph)
    }

    /// Number of tree levels between `v` and its ancestor `w`: steps up the
    /// parent chain from `v` while the current vertex is numbered above `w`.
    pub fn nesting_levels(&self, v: usize, w: usize) -> Result<usize, PlanarityError> {
        let target = self.num[w];
        let mut cur = v;
        let mut steps = 0;
        while self.num[cur] > target {
            steps += 1;
            cur = self.parent[cur].ok_or_else(|| {
                PlanarityError::malformed(format!("vertex {w} is not an ancestor of {v}"))
            })?;
        }
        Ok(steps)
    }
}
