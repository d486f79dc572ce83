//! Undirected graph store over a fixed vertex set `[0, vertex_count)`.
//!
//! Storage is symmetric: `add_edge(u, v)` appends `v` to `adj[u]` and `u` to
//! `adj[v]`. Neighbor order is insertion order, which is the order the DFS
//! numbering visits them in.

use crate::error::PlanarityError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adj: Vec<Vec<usize>>,
    edges: Vec<(usize, usize)>,
}

impl Graph {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertex_count],
            edges: Vec::new(),
        }
    }

    /// Build a graph from an edge list, stopping at the first rejected edge.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, PlanarityError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut g = Self::new(vertex_count);
        for (u, v) in edges {
            g.add_edge(u, v)?;
        }
        Ok(g)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Add the undirected edge `{u, v}`.
    ///
    /// Both endpoints are validated before anything is written. Parallel edges
    /// are stored as given; the planarity verdict for multigraphs is undefined.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), PlanarityError> {
        let n = self.vertex_count();
        for vertex in [u, v] {
            if vertex >= n {
                return Err(PlanarityError::InvalidVertex {
                    vertex,
                    vertex_count: n,
                });
            }
        }
        if u == v {
            return Err(PlanarityError::SelfLoop { vertex: u });
        }
        self.adj[u].push(v);
        self.adj[v].push(u);
        self.edges.push((u, v));
        Ok(())
    }

    #[inline]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    /// Each undirected edge once, as passed to `add_edge`, in insertion order.
    #[inline]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        u < self.vertex_count() && self.adj[u].contains(&v)
    }

    pub fn degree(&self, v: usize) -> usize {
        self.adj[v].len()
    }

    /// Isomorphic copy with vertex `v` renamed to `perm[v]`.
    ///
    /// `perm` must be a permutation of `0..vertex_count`; anything else is
    /// reported as `InvalidVertex`.
    pub fn with_relabeling(&self, perm: &[usize]) -> Result<Self, PlanarityError> {
        let n = self.vertex_count();
        if perm.len() != n {
            return Err(PlanarityError::InvalidVertex {
                vertex: perm.len(),
                vertex_count: n,
            });
        }
        let mut seen = vec![false; n];
        for &p in perm {
            if p >= n || seen[p] {
                return Err(PlanarityError::InvalidVertex {
                    vertex: p,
                    vertex_count: n,
                });
            }
            seen[p] = true;
        }
        Self::from_edges(n, self.edges.iter().map(|&(u, v)| (perm[u], perm[v])))
    }
}
