//! Curated API (UNSTABLE).
//!
//! Important
//! - A convenience surface for the CLI, benches, and experiments. Breaking
//!   changes are allowed.

// Graph store and entry points
pub use crate::check::{
    check_palm_tree, check_planarity, is_planar, Conflict, ConflictKind, Outcome, PlanarityCfg, Strategy, Verdict,
};
pub use crate::error::PlanarityError;
pub use crate::graph::Graph;
// Palm tree inspection
pub use crate::palm::{
    interval_order, nesting_order, Component, EdgeId, EdgeKind, LowPoints, PalmEdge, PalmTree,
};
// Generators
pub use crate::gen::{
    complete, complete_bipartite, cycle, disjoint_union, grid, path, petersen, random_graph,
    random_maximal_planar, random_permutation, random_tree, scramble, subdivide,
    triangulated_grid, wheel, GeneratorError,
};
