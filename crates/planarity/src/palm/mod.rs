//! Palm tree: DFS numbering, lowpoints, and edge orders.
//!
//! Purpose
//! - Turn an undirected `Graph` into the oriented structure both testers work
//!   on: preorder numbers, parent links, tree/back classification, lowpoints,
//!   and the two edge orders.
//!
//! Layout
//! - `types.rs` (data types), `numbering.rs` (iterative DFS), `lowpoint.rs`
//!   (post-order lowpoints and nesting depth), `order.rs` (edge orders).
//!
//! All of it is derived state: rebuilt by every test invocation and dropped
//! when the invocation returns.

mod lowpoint;
mod numbering;
mod order;
mod types;

pub use lowpoint::compute_lowpoints;
pub use numbering::build_palm_tree;
pub use order::{interval_order, nesting_order};
pub use types::{Component, EdgeId, EdgeKind, LowPoints, PalmEdge, PalmTree};
