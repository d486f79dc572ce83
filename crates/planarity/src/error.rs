//! Error type shared by the graph store and the planarity entry points.
//!
//! Non-planarity is not an error: it is reported through `Verdict`.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlanarityError {
    /// An endpoint outside `[0, vertex_count)`; the graph is left unchanged.
    InvalidVertex { vertex: usize, vertex_count: usize },
    /// `u == v`; self-loops are rejected rather than ignored.
    SelfLoop { vertex: usize },
    /// Internal invariant violation detected while testing.
    MalformedGraph { reason: String },
}

impl PlanarityError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedGraph {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PlanarityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVertex {
                vertex,
                vertex_count,
            } => write!(
                f,
                "invalid vertex {vertex}: graph has {vertex_count} vertices"
            ),
            Self::SelfLoop { vertex } => write!(f, "self-loop at vertex {vertex}"),
            Self::MalformedGraph { reason } => write!(f, "malformed graph: {reason}"),
        }
    }
}

impl std::error::Error for PlanarityError {}
