//! DFS-based planarity testing for undirected graphs.
//!
//! Pipeline per invocation: `Graph` → `PalmTree` (iterative DFS numbering) →
//! `LowPoints` → edge order → component tester. Everything derived is owned by
//! the call and dropped on return; the graph is only borrowed.
//!
//! Two testers share the palm tree:
//! - `Strategy::LeftRight` (default): exact left-right conflict-pair test.
//! - `Strategy::IntervalBuckets`: nested-interval bucket fold.
//!
//! API Policy
//! - The curated surface lives in `api`; module paths may move.

pub mod api;
pub mod buckets;
pub mod check;
pub mod error;
pub mod gen;
pub mod graph;
pub mod lr;
pub mod palm;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use check::{
    check_palm_tree, check_planarity, is_planar, Conflict, ConflictKind, Outcome, PlanarityCfg, Strategy, Verdict,
};
pub use error::PlanarityError;
pub use graph::Graph;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::check::{check_planarity, is_planar, PlanarityCfg, Strategy, Verdict};
    pub use crate::error::PlanarityError;
    pub use crate::graph::Graph;
}
