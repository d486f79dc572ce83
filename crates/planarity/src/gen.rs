//! Deterministic and seeded graph families.
//!
//! Purpose
//! - Known-verdict inputs for tests, benches, and the CLI `gen` subcommand.
//! - Seeded families use `StdRng::seed_from_u64`, so a `(params, seed)` pair
//!   always reproduces the same edge list.

use crate::graph::Graph;
use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use std::fmt;

/// Error type shared by all generators.
#[derive(Debug)]
pub enum GeneratorError {
    InvalidParams { reason: String },
    DegenerateSample { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateSample {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
            Self::DegenerateSample { reason } => write!(f, "degenerate sample: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

fn assemble<I>(n: usize, edges: I) -> Result<Graph, GeneratorError>
where
    I: IntoIterator<Item = (usize, usize)>,
{
    Graph::from_edges(n, edges).map_err(|e| GeneratorError::degenerate(e.to_string()))
}

/// Path `0 - 1 - ... - (n-1)`.
pub fn path(n: usize) -> Result<Graph, GeneratorError> {
    assemble(n, (1..n).map(|i| (i - 1, i)))
}

/// Cycle `0 - 1 - ... - (n-1) - 0`; needs `n >= 3`.
pub fn cycle(n: usize) -> Result<Graph, GeneratorError> {
    if n < 3 {
        return Err(GeneratorError::invalid(format!("cycle needs n >= 3, got {n}")));
    }
    assemble(n, (0..n).map(|i| (i, (i + 1) % n)))
}

/// K_n, edges `(i, j)` with `i < j` in lexicographic order.
pub fn complete(n: usize) -> Result<Graph, GeneratorError> {
    assemble(n, (0..n).flat_map(|i| (i + 1..n).map(move |j| (i, j))))
}

/// K_{a,b} with parts `0..a` and `a..a+b`.
pub fn complete_bipartite(a: usize, b: usize) -> Result<Graph, GeneratorError> {
    assemble(a + b, (0..a).flat_map(|i| (a..a + b).map(move |j| (i, j))))
}

fn grid_index(cols: usize) -> impl Fn(usize, usize) -> usize {
    move |r, c| r * cols + c
}

/// `rows x cols` lattice, vertex `r * cols + c`.
pub fn grid(rows: usize, cols: usize) -> Result<Graph, GeneratorError> {
    if rows == 0 || cols == 0 {
        return Err(GeneratorError::invalid("grid needs rows, cols >= 1"));
    }
    let at = grid_index(cols);
    let mut edges = Vec::with_capacity(2 * rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            if c + 1 < cols {
                edges.push((at(r, c), at(r, c + 1)));
            }
            if r + 1 < rows {
                edges.push((at(r, c), at(r + 1, c)));
            }
        }
    }
    assemble(rows * cols, edges)
}

/// Grid with one diagonal per cell; every bounded face is a triangle.
pub fn triangulated_grid(rows: usize, cols: usize) -> Result<Graph, GeneratorError> {
    let mut g = grid(rows, cols)?;
    let at = grid_index(cols);
    for r in 0..rows.saturating_sub(1) {
        for c in 0..cols.saturating_sub(1) {
            g.add_edge(at(r, c), at(r + 1, c + 1))
                .map_err(|e| GeneratorError::degenerate(e.to_string()))?;
        }
    }
    Ok(g)
}

/// Hub `0` joined to every vertex of the rim cycle `1..=spokes`.
pub fn wheel(spokes: usize) -> Result<Graph, GeneratorError> {
    if spokes < 3 {
        return Err(GeneratorError::invalid(format!(
            "wheel needs >= 3 spokes, got {spokes}"
        )));
    }
    let rim = (0..spokes).map(|i| (1 + i, 1 + (i + 1) % spokes));
    let hub = (1..=spokes).map(|v| (0, v));
    assemble(spokes + 1, rim.chain(hub))
}

/// Outer 5-cycle `0..5`, inner pentagram `5..10`, spokes `i - (i + 5)`.
pub fn petersen() -> Result<Graph, GeneratorError> {
    let outer = (0..5).map(|i| (i, (i + 1) % 5));
    let inner = (0..5).map(|i| (5 + i, 5 + (i + 2) % 5));
    let spokes = (0..5).map(|i| (i, i + 5));
    assemble(10, outer.chain(inner).chain(spokes))
}

/// Uniform random permutation of `0..n`.
pub fn random_permutation(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(&mut rng);
    perm
}

/// Random recursive tree on `n >= 1` vertices, relabeled and with shuffled
/// edge order so vertex `0` is not special.
pub fn random_tree(n: usize, seed: u64) -> Result<Graph, GeneratorError> {
    if n == 0 {
        return Err(GeneratorError::invalid("tree needs n >= 1"));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(&mut rng);
    let mut edges: Vec<(usize, usize)> = (1..n)
        .map(|i| (perm[rng.gen_range(0..i)], perm[i]))
        .collect();
    edges.shuffle(&mut rng);
    assemble(n, edges)
}

/// Simple graph with `m` distinct edges drawn uniformly from all pairs.
pub fn random_graph(n: usize, m: usize, seed: u64) -> Result<Graph, GeneratorError> {
    let pairs: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .collect();
    if m > pairs.len() {
        return Err(GeneratorError::invalid(format!(
            "{m} edges requested but only {} pairs exist on {n} vertices",
            pairs.len()
        )));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let picked: Vec<(usize, usize)> = index::sample(&mut rng, pairs.len(), m)
        .into_iter()
        .map(|k| {
            let (u, v) = pairs[k];
            if rng.gen_bool(0.5) {
                (v, u)
            } else {
                (u, v)
            }
        })
        .collect();
    assemble(n, picked)
}

/// Random maximal planar graph (`3n - 6` edges) on `n >= 3` vertices.
///
/// Starts from a triangle and repeatedly inserts a vertex into a uniformly
/// chosen face, joining it to the face's three corners.
pub fn random_maximal_planar(n: usize, seed: u64) -> Result<Graph, GeneratorError> {
    if n < 3 {
        return Err(GeneratorError::invalid(format!(
            "maximal planar graph needs n >= 3, got {n}"
        )));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = vec![(0, 1), (1, 2), (2, 0)];
    // Both sides of the starting triangle are faces.
    let mut faces: Vec<[usize; 3]> = vec![[0, 1, 2], [0, 1, 2]];
    for x in 3..n {
        let k = rng.gen_range(0..faces.len());
        let [a, b, c] = faces.swap_remove(k);
        edges.extend([(x, a), (x, b), (x, c)]);
        faces.extend([[a, b, x], [b, c, x], [a, c, x]]);
    }
    let perm = random_permutation(n, seed ^ 0x9e37_79b9_7f4a_7c15);
    edges.shuffle(&mut rng);
    assemble(n, edges.into_iter().map(|(u, v)| (perm[u], perm[v])))
}

/// Replace every edge `{u, v}` by a path `u - s - v` through a new vertex.
pub fn subdivide(graph: &Graph) -> Result<Graph, GeneratorError> {
    let n = graph.vertex_count();
    let edges = graph
        .edges()
        .iter()
        .enumerate()
        .flat_map(|(k, &(u, v))| [(u, n + k), (n + k, v)]);
    assemble(n + graph.edge_count(), edges)
}

/// `a` on vertices `0..a.vertex_count()`, `b` shifted after it.
pub fn disjoint_union(a: &Graph, b: &Graph) -> Result<Graph, GeneratorError> {
    let shift = a.vertex_count();
    let edges = a
        .edges()
        .iter()
        .copied()
        .chain(b.edges().iter().map(|&(u, v)| (u + shift, v + shift)));
    assemble(shift + b.vertex_count(), edges)
}

/// Isomorphic copy under a random relabeling, with edges inserted in a
/// random order and random orientation.
pub fn scramble(graph: &Graph, seed: u64) -> Result<Graph, GeneratorError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let perm = random_permutation(graph.vertex_count(), rng.gen());
    let mut edges: Vec<(usize, usize)> = graph
        .edges()
        .iter()
        .map(|&(u, v)| if rng.gen_bool(0.5) { (v, u) } else { (u, v) })
        .collect();
    edges.shuffle(&mut rng);
    assemble(graph.vertex_count(), edges)?
        .with_relabeling(&perm)
        .map_err(|e| GeneratorError::degenerate(e.to_string()))
}
