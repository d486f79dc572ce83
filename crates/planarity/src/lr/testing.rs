//! Left-right constraint propagation over the nesting order.

use crate::check::{ConflictKind, Outcome};
use crate::error::PlanarityError;
use crate::palm::{Component, EdgeId, LowPoints, PalmTree};

use super::types::ConflictPair;

/// Traversal frame: a vertex and the cursor into its nesting order.
///
/// `descended` is set while the edge at `cursor` is a tree edge whose subtree
/// is still on the frame stack; the edge is integrated when the frame resumes.
#[derive(Clone, Copy, Debug)]
struct Frame {
    vertex: usize,
    cursor: usize,
    descended: bool,
}

impl Frame {
    fn enter(vertex: usize) -> Self {
        Self {
            vertex,
            cursor: 0,
            descended: false,
        }
    }
}

/// Conflict-pair state shared by every component of one palm tree.
pub struct LrTester<'a> {
    palm: &'a PalmTree,
    low: &'a LowPoints,
    order: &'a [Vec<EdgeId>],
    stack: Vec<ConflictPair>,
    /// Conflict stack height when each edge was entered.
    stack_bottom: Vec<usize>,
    /// Back edge realising the lowpoint of each edge.
    lowpt_edge: Vec<EdgeId>,
    /// Next lower edge of an interval boundary once the boundary is removed.
    refs: Vec<Option<EdgeId>>,
}

impl<'a> LrTester<'a> {
    pub fn new(palm: &'a PalmTree, low: &'a LowPoints, order: &'a [Vec<EdgeId>]) -> Self {
        let m = palm.edges.len();
        Self {
            palm,
            low,
            order,
            stack: Vec::new(),
            stack_bottom: vec![0; m],
            lowpt_edge: (0..m).map(EdgeId).collect(),
            refs: vec![None; m],
        }
    }

    fn endpoints(&self, e: EdgeId) -> (usize, usize) {
        let edge = self.palm.edge(e);
        (edge.source, edge.target)
    }

    /// Run the test over the DFS tree rooted at `component.root`.
    pub fn test_component(&mut self, component: &Component) -> Result<Outcome, PlanarityError> {
        self.stack.clear();
        let mut frames = vec![Frame::enter(component.root)];

        while let Some(frame) = frames.last_mut() {
            let v = frame.vertex;
            let Some(&ei) = self.order[v].get(frame.cursor) else {
                frames.pop();
                if let Some(e) = self.palm.parent_edge[v] {
                    self.remove_back_edges(e);
                }
                continue;
            };

            if !frame.descended {
                self.stack_bottom[ei.0] = self.stack.len();
                let edge = self.palm.edge(ei);
                if edge.is_tree() {
                    frame.descended = true;
                    frames.push(Frame::enter(edge.target));
                    continue;
                }
                self.lowpt_edge[ei.0] = ei;
                self.stack.push(ConflictPair::right_only(ei));
            }
            frame.descended = false;
            let first = frame.cursor == 0;
            frame.cursor += 1;

            if self.low.edge_low[ei.0] < self.palm.num[v] {
                let e = self.palm.parent_edge[v].ok_or_else(|| {
                    PlanarityError::malformed(format!("return edge below root {v}"))
                })?;
                if first {
                    self.lowpt_edge[e.0] = self.lowpt_edge[ei.0];
                } else if !self.add_constraints(ei, e)? {
                    let kind = ConflictKind::SideConflict {
                        edge: self.endpoints(ei),
                    };
                    tracing::trace!(conflict = ?kind, "left-right constraints unsatisfiable");
                    return Ok(Outcome::Conflict(kind));
                }
            }
        }
        Ok(Outcome::Planar)
    }

    /// Merge the constraints of `ei` into those of its parent edge `e`.
    ///
    /// Returns `false` when the return edges of `ei` cannot be assigned sides.
    fn add_constraints(&mut self, ei: EdgeId, e: EdgeId) -> Result<bool, PlanarityError> {
        let lows = &self.low.edge_low;
        let mut p = ConflictPair::default();

        // Everything pushed while inside `ei` lands on one side.
        loop {
            let mut q = self
                .stack
                .pop()
                .ok_or_else(|| PlanarityError::malformed("conflict stack underflow"))?;
            if !q.left.is_empty() {
                q.swap();
            }
            if !q.left.is_empty() {
                return Ok(false);
            }
            let q_low = q
                .right
                .low
                .ok_or_else(|| PlanarityError::malformed("conflict pair without a low edge"))?;
            if lows[q_low.0] > lows[e.0] {
                if p.right.is_empty() {
                    p.right = q.right;
                } else if let Some(pl) = p.right.low {
                    self.refs[pl.0] = q.right.high;
                }
                p.right.low = q.right.low;
            } else {
                self.refs[q_low.0] = Some(self.lowpt_edge[e.0]);
            }
            if self.stack.len() <= self.stack_bottom[ei.0] {
                break;
            }
        }

        // Earlier pairs whose intervals reach above `ei`'s lowpoint.
        while let Some(top) = self.stack.last() {
            if !(top.left.conflicting(ei, lows) || top.right.conflicting(ei, lows)) {
                break;
            }
            let mut q = self
                .stack
                .pop()
                .ok_or_else(|| PlanarityError::malformed("conflict stack underflow"))?;
            if q.right.conflicting(ei, lows) {
                q.swap();
            }
            if q.right.conflicting(ei, lows) {
                return Ok(false);
            }
            if let Some(pl) = p.right.low {
                self.refs[pl.0] = q.right.high;
            }
            if let Some(ql) = q.right.low {
                if p.right.high.is_none() {
                    p.right.high = q.right.high;
                }
                p.right.low = Some(ql);
            }
            if p.left.is_empty() {
                p.left = q.left;
            } else if let Some(pl) = p.left.low {
                self.refs[pl.0] = q.left.high;
            }
            p.left.low = q.left.low;
        }

        if !(p.left.is_empty() && p.right.is_empty()) {
            self.stack.push(p);
        }
        Ok(true)
    }

    /// Drop back edges ending at the parent `u` of the vertex being left.
    fn remove_back_edges(&mut self, e: EdgeId) {
        let lows = &self.low.edge_low;
        let u = self.palm.edge(e).source;
        let num_u = self.palm.num[u];

        while self
            .stack
            .last()
            .is_some_and(|p| p.lowest(lows) == Some(num_u))
        {
            self.stack.pop();
        }

        let Some(mut p) = self.stack.pop() else {
            return;
        };
        while let Some(h) = p.left.high {
            if self.palm.edge(h).target != u {
                break;
            }
            p.left.high = self.refs[h.0];
        }
        if p.left.high.is_none() {
            if let Some(l) = p.left.low.take() {
                self.refs[l.0] = p.right.low;
            }
        }
        while let Some(h) = p.right.high {
            if self.palm.edge(h).target != u {
                break;
            }
            p.right.high = self.refs[h.0];
        }
        if p.right.high.is_none() {
            if let Some(r) = p.right.low.take() {
                self.refs[r.0] = p.left.low;
            }
        }
        self.stack.push(p);
    }
}
