//! Data types for the palm tree (DFS tree plus back edges) and its derived orders.

use std::ops::Range;

/// Palm edge identifier: the discovery sequence number of the edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Edge through which `target` was first discovered.
    Tree,
    /// Edge from a vertex to a proper, non-parent ancestor.
    Back,
}

/// Undirected edge oriented by discovery: tree edges point parent → child,
/// back edges point descendant → ancestor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PalmEdge {
    pub source: usize,
    pub target: usize,
    pub kind: EdgeKind,
}

impl PalmEdge {
    #[inline]
    pub fn is_tree(&self) -> bool {
        self.kind == EdgeKind::Tree
    }
}

/// One connected component: its DFS root and the contiguous range of palm
/// edges discovered while traversing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Component {
    pub root: usize,
    pub edges: Range<usize>,
}

impl Component {
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> {
        self.edges.clone().map(EdgeId)
    }
}

/// Result of DFS numbering over every component of a graph.
///
/// All vectors indexed by vertex have length `vertex_count`; those indexed by
/// edge are indexed by `EdgeId.0`.
#[derive(Clone, Debug)]
pub struct PalmTree {
    /// Preorder discovery number, unique and increasing across components.
    pub num: Vec<usize>,
    pub parent: Vec<Option<usize>>,
    pub parent_edge: Vec<Option<EdgeId>>,
    /// Distance from the component root.
    pub depth: Vec<usize>,
    /// Vertices in discovery order (`preorder[num[v]] == v`).
    pub preorder: Vec<usize>,
    pub edges: Vec<PalmEdge>,
    /// Outgoing palm edges per vertex, in discovery order.
    pub out: Vec<Vec<EdgeId>>,
    pub components: Vec<Component>,
}

impl PalmTree {
    #[inline]
    pub fn edge(&self, e: EdgeId) -> &PalmEdge {
        &self.edges[e.0]
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.num.len()
    }

    /// Endpoint dfs numbers of `e`, sorted ascending.
    #[inline]
    pub fn span(&self, e: EdgeId) -> (usize, usize) {
        let edge = self.edge(e);
        let (a, b) = (self.num[edge.source], self.num[edge.target]);
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

/// Lowpoints per vertex and per palm edge, in dfs numbers.
#[derive(Clone, Debug)]
pub struct LowPoints {
    pub vertex_low: Vec<usize>,
    /// Second-lowest distinct return point of the subtree, counting the
    /// vertex's own number. This is not the minimum of the children's
    /// `vertex_low2`: a child whose lowpoint exceeds the subtree's lowpoint
    /// contributes that lowpoint here.
    pub vertex_low2: Vec<usize>,
    pub edge_low: Vec<usize>,
    pub edge_low2: Vec<usize>,
    /// `2 * edge_low + [edge_low2 < num[source]]`; sorts outgoing edges for the
    /// left-right test.
    pub nesting_depth: Vec<usize>,
}
