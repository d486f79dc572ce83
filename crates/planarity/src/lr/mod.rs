//! Left-right planarity test (`Strategy::LeftRight`).
//!
//! Purpose
//! - Exact planarity decision per component, independent of vertex labels and
//!   edge insertion order.
//!
//! Layout
//! - `types.rs` (intervals and conflict pairs), `testing.rs` (the iterative
//!   traversal and constraint merging), `tests.rs`.
//!
//! Outgoing edges are visited in nesting order. Each back edge opens a conflict
//! pair; when a later sibling edge returns below its parent, every pair pushed
//! inside it must fit on one side and every older pair reaching above its
//! lowpoint on the other. Failing that is a `SideConflict`.

mod testing;
mod types;

pub use testing::LrTester;
pub use types::{ConflictPair, Interval};

#[cfg(test)]
mod tests;
