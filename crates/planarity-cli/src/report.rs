//! JSON report for `check`.

use anyhow::{Context, Result};
use planarity::{Conflict, ConflictKind, Graph, Strategy, Verdict};
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub input: String,
    pub vertices: usize,
    pub edges: usize,
    pub components: usize,
    pub strategy: &'static str,
    pub planar: bool,
    pub conflicts: Vec<ConflictRow>,
}

/// Flat view of one `Conflict`; unused fields are omitted.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ConflictRow {
    pub root: usize,
    pub kind: &'static str,
    pub edges: Vec<(usize, usize)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<usize>,
}

impl From<&Conflict> for ConflictRow {
    fn from(c: &Conflict) -> Self {
        let (kind, edges, depth, height) = match c.kind {
            ConflictKind::DepthOverflow {
                edge,
                depth,
                height,
            } => ("depth_overflow", vec![edge], Some(depth), Some(height)),
            ConflictKind::Crossing { first, second } => ("crossing", vec![first, second], None, None),
            ConflictKind::SideConflict { edge } => ("side_conflict", vec![edge], None, None),
        };
        Self {
            root: c.root,
            kind,
            edges,
            depth,
            height,
        }
    }
}

pub fn strategy_name(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::LeftRight => "lr",
        Strategy::IntervalBuckets => "buckets",
    }
}

impl CheckReport {
    pub fn new(
        input: &Path,
        graph: &Graph,
        components: usize,
        strategy: Strategy,
        verdict: &Verdict,
    ) -> Self {
        Self {
            input: input.to_string_lossy().into_owned(),
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            components,
            strategy: strategy_name(strategy),
            planar: verdict.is_planar(),
            conflicts: verdict.conflicts().iter().map(ConflictRow::from).collect(),
        }
    }

    pub fn write(&self, out: &Path) -> Result<()> {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating report dir {}", parent.display()))?;
            }
        }
        fs::write(out, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", out.display()))
    }
}
