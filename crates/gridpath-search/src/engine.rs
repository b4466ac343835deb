use gridpath_core::{Point, Range};

use crate::neighbors::Neighbors;

/// Sentinel distance meaning "not reached yet".
pub const UNREACHABLE: i32 = i32::MAX;

/// Per-cell scratch record for one search run.
///
/// `visited` marks every cell in the run's visitation trace and `path`
/// every cell of the reconstructed path; both are presentation flags.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellState {
    /// Accumulated cost from the start.
    pub distance: i32,
    /// Estimated remaining cost (A* only).
    pub heuristic: f64,
    /// `distance + heuristic`, the A* frontier key.
    pub total_distance: f64,
    /// Back-pointer towards the start.
    pub previous: Option<Point>,
    pub visited: bool,
    pub path: bool,
}

impl CellState {
    /// State of every cell before a run.
    pub const INITIAL: Self = Self {
        distance: UNREACHABLE,
        heuristic: 0.0,
        total_distance: f64::INFINITY,
        previous: None,
        visited: false,
        path: false,
    };
}

impl Default for CellState {
    fn default() -> Self {
        Self::INITIAL
    }
}

// ---------------------------------------------------------------------------
// Frontier entry for Dijkstra / A*
// ---------------------------------------------------------------------------

/// Reference into the state array, ordered for use in `BinaryHeap`.
///
/// The heap pops the smallest `key` first; equal keys pop the smallest
/// `tie` first.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) key: f64,
    pub(crate) tie: usize,
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for NodeRef {}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest key first.
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.tie.cmp(&self.tie))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Central coordinator for searches over one grid size.
///
/// `Engine` owns the per-run scratch record, indexed by cell, so that the
/// grid itself is never mutated by a search. Every run starts with
/// [`reset`](Self::reset); repeated runs reuse the same allocations.
#[derive(Debug)]
pub struct Engine {
    pub(crate) rng: Range,
    pub(crate) states: Vec<CellState>,
    // A* open-set entry order, usize::MAX until first opened.
    pub(crate) entry: Vec<usize>,
    pub(crate) nbuf: Neighbors,
}

impl Engine {
    /// Create a new `Engine` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            states: vec![CellState::INITIAL; len],
            entry: vec![usize::MAX; len],
            nbuf: Neighbors::new(),
        }
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Switch to another grid rectangle, reallocating only when it needs
    /// more cells than are already held. The scratch record is reset.
    pub fn set_range(&mut self, rng: Range) {
        let len = rng.len();
        self.rng = rng;
        if len > self.states.len() {
            self.states.resize(len, CellState::INITIAL);
            self.entry.resize(len, usize::MAX);
        } else {
            self.states.truncate(len);
            self.entry.truncate(len);
        }
        self.reset();
    }

    /// Restore every cell's scratch record to [`CellState::INITIAL`].
    pub fn reset(&mut self) {
        self.states.fill(CellState::INITIAL);
        self.entry.fill(usize::MAX);
    }

    /// Scratch record of `p` after the last run, or `None` outside the range.
    pub fn state(&self, p: Point) -> Option<&CellState> {
        self.idx(p).map(|i| &self.states[i])
    }

    /// Row-major iterator over `(point, state)` pairs.
    pub fn states(&self) -> impl Iterator<Item = (Point, &CellState)> + '_ {
        self.rng.iter().zip(self.states.iter())
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.rng.index_of(p)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        self.rng.point_at(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn reset_restores_initial_state() {
        let mut e = Engine::new(Range::sized(3, 2));
        e.states[4] = CellState {
            distance: 7,
            heuristic: 2.0,
            total_distance: 9.0,
            previous: Some(Point::ZERO),
            visited: true,
            path: true,
        };
        e.entry[4] = 0;
        e.reset();
        assert!(e.states.iter().all(|s| *s == CellState::INITIAL));
        assert!(e.entry.iter().all(|&s| s == usize::MAX));
    }

    #[test]
    fn set_range_resizes() {
        let mut e = Engine::new(Range::sized(5, 5));
        e.set_range(Range::sized(2, 2));
        assert_eq!(e.states.len(), 4);
        assert_eq!(e.range(), Range::sized(2, 2));
        e.set_range(Range::sized(10, 10));
        assert_eq!(e.states.len(), 100);
        assert_eq!(e.state(Point::at(9, 9)), Some(&CellState::INITIAL));
        assert_eq!(e.state(Point::at(10, 0)), None);
    }

    #[test]
    fn node_ref_pops_smallest_key_then_tie() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 0, key: 2.0, tie: 0 });
        heap.push(NodeRef { idx: 1, key: 1.0, tie: 5 });
        heap.push(NodeRef { idx: 2, key: 1.0, tie: 3 });
        heap.push(NodeRef { idx: 3, key: 1.5, tie: 1 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![2, 1, 3, 0]);
    }
}
