//! Per-search scratch state shared by every strategy.

use std::cmp::Ordering;

use pathviz_core::{Point, Range};

/// Predecessor sentinel for the search root.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Sentinel cost for cells not yet reached.
pub(crate) const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// SearchResult
// ---------------------------------------------------------------------------

/// The outcome of a search: the order cells were expanded in and the path
/// found, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Cells in expansion order. Never contains walls.
    pub visited: Vec<Point>,
    /// Cells from start to goal inclusive, or empty when the goal is
    /// unreachable.
    pub path: Vec<Point>,
}

impl SearchResult {
    /// Whether a path to the goal was found.
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Priority-queue entry
// ---------------------------------------------------------------------------

/// Reference into the flat node arrays, ordered for `BinaryHeap` so the
/// smallest `f` pops first and equal `f` pops in insertion order.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchSpace
// ---------------------------------------------------------------------------

/// Flat per-cell bookkeeping over a grid rectangle: predecessor links,
/// best-known costs, and closed flags.
///
/// Each predecessor is a plain index used only to walk back from the goal
/// once the search ends.
pub(crate) struct SearchSpace {
    rng: Range,
    width: usize,
    pub(crate) parent: Vec<usize>,
    pub(crate) cost: Vec<i32>,
    pub(crate) closed: Vec<bool>,
    seq: u64,
}

impl SearchSpace {
    pub(crate) fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            width: rng.width().max(0) as usize,
            parent: vec![NO_PARENT; len],
            cost: vec![UNREACHABLE; len],
            closed: vec![false; len],
            seq: 0,
        }
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }

    /// A heap entry for `idx` with priority `f`, stamped with the next
    /// insertion sequence number.
    #[inline]
    pub(crate) fn node(&mut self, idx: usize, f: i32) -> NodeRef {
        let seq = self.seq;
        self.seq += 1;
        NodeRef { idx, f, seq }
    }

    /// Walk predecessor links back from `goal` and return the path in
    /// start-to-goal order.
    pub(crate) fn reconstruct(&self, goal: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != NO_PARENT {
            path.push(self.point(ci));
            ci = self.parent[ci];
        }
        path.reverse();
        path
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::bfs;
    use crate::testutil::grid_from;

    #[test]
    fn search_result_round_trip() {
        let g = grid_from(&["S.#", "..G"]);
        let r = bfs(&g, g.range(), g.start().unwrap(), g.goal().unwrap());
        assert!(r.found());
        let json = serde_json::to_string(&r).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
