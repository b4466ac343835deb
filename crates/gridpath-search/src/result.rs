use std::time::Duration;

use gridpath_core::Point;

use crate::run::Algorithm;

/// Raw output of one algorithm before reconstruction.
#[derive(Debug, Default)]
pub(crate) struct Search {
    pub(crate) trace: Vec<Point>,
    pub(crate) found: bool,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Outcome {
    /// The end was reached.
    Found {
        /// Start-to-end path, both endpoints included.
        path: Vec<Point>,
        /// Sum of the terrain weights along `path`.
        cost: i64,
    },
    /// The frontier emptied before the end was reached.
    Exhausted,
}

/// Immutable result of one completed run, ready for replay.
///
/// A presentation layer replays `trace` and then the path at its own pace;
/// no timing policy is attached here.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    pub algorithm: Algorithm,
    /// Cells in the order the frontier processed them.
    pub trace: Vec<Point>,
    pub outcome: Outcome,
    /// Wall-clock time spent searching and reconstructing.
    pub elapsed: Duration,
}

impl RunResult {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self.outcome, Outcome::Found { .. })
    }

    /// The reconstructed path, if the end was reached.
    pub fn path(&self) -> Option<&[Point]> {
        match &self.outcome {
            Outcome::Found { path, .. } => Some(path),
            Outcome::Exhausted => None,
        }
    }

    /// Path cost, if the end was reached.
    pub fn cost(&self) -> Option<i64> {
        match self.outcome {
            Outcome::Found { cost, .. } => Some(cost),
            Outcome::Exhausted => None,
        }
    }

    /// Number of steps (edges) along the path.
    pub fn path_edges(&self) -> Option<usize> {
        self.path().map(|p| p.len().saturating_sub(1))
    }

    /// Whether two results describe the same search, ignoring timing.
    pub fn same_search(&self, other: &RunResult) -> bool {
        self.algorithm == other.algorithm
            && self.trace == other.trace
            && self.outcome == other.outcome
    }
}
