//! Intervals of return edges and the conflict pairs built from them.

use crate::palm::EdgeId;

/// A run of return (back) edges that must all lie on the same side.
///
/// `low` is the edge with the lowest return point, `high` the one with the
/// highest; both `None` means empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Interval {
    pub low: Option<EdgeId>,
    pub high: Option<EdgeId>,
}

impl Interval {
    #[inline]
    pub fn new(low: EdgeId, high: EdgeId) -> Self {
        Self {
            low: Some(low),
            high: Some(high),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.low.is_none() && self.high.is_none()
    }

    /// The interval's highest return point lies above the lowpoint of `b`.
    #[inline]
    pub fn conflicting(&self, b: EdgeId, edge_low: &[usize]) -> bool {
        self.high
            .is_some_and(|high| edge_low[high.0] > edge_low[b.0])
    }
}

/// Two intervals that must end up on opposite sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConflictPair {
    pub left: Interval,
    pub right: Interval,
}

impl ConflictPair {
    pub fn right_only(edge: EdgeId) -> Self {
        Self {
            left: Interval::default(),
            right: Interval::new(edge, edge),
        }
    }

    #[inline]
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }

    /// Lowest return point over both intervals; `None` for an empty pair.
    pub fn lowest(&self, edge_low: &[usize]) -> Option<usize> {
        let left = self.left.low.map(|e| edge_low[e.0]);
        let right = self.right.low.map(|e| edge_low[e.0]);
        match (left, right) {
            (Some(l), Some(r)) => Some(l.min(r)),
            (l, r) => l.or(r),
        }
    }
}
