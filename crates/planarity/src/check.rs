//! Planarity entry points, verdict types, and strategy selection.

use crate::buckets;
use crate::error::PlanarityError;
use crate::graph::Graph;
use crate::lr::LrTester;
use crate::palm::{nesting_order, Component, LowPoints, PalmTree};

/// Component tester run over the palm tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Exact left-right conflict-pair test.
    #[default]
    LeftRight,
    /// Nested-interval bucket fold; fast but labeling sensitive.
    IntervalBuckets,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanarityCfg {
    pub strategy: Strategy,
    /// Stop at the first non-planar component.
    pub short_circuit: bool,
}

impl Default for PlanarityCfg {
    fn default() -> Self {
        Self {
            strategy: Strategy::LeftRight,
            short_circuit: true,
        }
    }
}

/// Where a component test failed. Edges are `(source, target)` palm edges.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConflictKind {
    /// A back edge spans more tree levels than buckets are open.
    DepthOverflow {
        edge: (usize, usize),
        depth: usize,
        height: usize,
    },
    /// Two back edges in merged buckets interleave.
    Crossing {
        first: (usize, usize),
        second: (usize, usize),
    },
    /// The return edges below `edge` need both sides at once.
    SideConflict { edge: (usize, usize) },
}

/// Result of testing one component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Planar,
    Conflict(ConflictKind),
}

/// A conflict together with the root of the component it was found in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conflict {
    pub root: usize,
    pub kind: ConflictKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Planar,
    /// At least one conflict; exactly one when short-circuiting.
    NonPlanar(Vec<Conflict>),
}

impl Verdict {
    pub fn is_planar(&self) -> bool {
        matches!(self, Verdict::Planar)
    }

    pub fn conflicts(&self) -> &[Conflict] {
        match self {
            Verdict::Planar => &[],
            Verdict::NonPlanar(conflicts) => conflicts,
        }
    }
}

/// Decide planarity with the default configuration.
pub fn is_planar(graph: &Graph) -> Result<bool, PlanarityError> {
    check_planarity(graph, PlanarityCfg::default()).map(|v| v.is_planar())
}

/// Test every component of `graph` with the configured strategy.
///
/// Components are visited in order of their smallest vertex. Non-planarity is
/// reported through the verdict; errors mean an internal invariant broke.
pub fn check_planarity(graph: &Graph, cfg: PlanarityCfg) -> Result<Verdict, PlanarityError> {
    let palm = PalmTree::build(graph)?;
    check_palm_tree(&palm, cfg)
}

/// `check_planarity` on a palm tree the caller already built.
pub fn check_palm_tree(palm: &PalmTree, cfg: PlanarityCfg) -> Result<Verdict, PlanarityError> {
    let conflicts = match cfg.strategy {
        Strategy::LeftRight => {
            let low = LowPoints::compute(palm);
            let order = nesting_order(palm, &low);
            let mut tester = LrTester::new(palm, &low, &order);
            collect_conflicts(palm, cfg.short_circuit, |c| tester.test_component(c))?
        }
        Strategy::IntervalBuckets => collect_conflicts(palm, cfg.short_circuit, |c| {
            buckets::test_component(palm, c)
        })?,
    };

    if conflicts.is_empty() {
        Ok(Verdict::Planar)
    } else {
        Ok(Verdict::NonPlanar(conflicts))
    }
}

fn collect_conflicts<F>(
    palm: &PalmTree,
    short_circuit: bool,
    mut test: F,
) -> Result<Vec<Conflict>, PlanarityError>
where
    F: FnMut(&Component) -> Result<Outcome, PlanarityError>,
{
    let mut conflicts = Vec::new();
    for component in &palm.components {
        match test(component)? {
            Outcome::Planar => {
                tracing::debug!(root = component.root, "component planar");
            }
            Outcome::Conflict(kind) => {
                tracing::debug!(root = component.root, conflict = ?kind, "component non-planar");
                conflicts.push(Conflict {
                    root: component.root,
                    kind,
                });
                if short_circuit {
                    break;
                }
            }
        }
    }
    Ok(conflicts)
}
