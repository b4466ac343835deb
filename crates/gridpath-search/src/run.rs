//! The run boundary: validation, dispatch, reconstruction and timing.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use gridpath_core::{Grid, Point, Range};

use crate::Engine;
use crate::path::path_cost;
use crate::result::{Outcome, RunResult};

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// Search strategy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    Astar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Astar,
        Algorithm::Dijkstra,
        Algorithm::Bfs,
        Algorithm::Dfs,
    ];

    /// Whether terrain weight influences the search order.
    pub const fn uses_weights(self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::Astar)
    }

    /// Whether the heuristic weight has any effect.
    pub const fn uses_heuristic(self) -> bool {
        matches!(self, Algorithm::Astar)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::Astar => "A*",
        };
        f.write_str(name)
    }
}

/// Unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected bfs, dfs, dijkstra or astar)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Algorithm::Astar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Per-run tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Scale applied to the A* Manhattan heuristic. `1.0` keeps A* optimal
    /// on these terrains; larger values make it greedier.
    pub heuristic_weight: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heuristic_weight: 1.0,
        }
    }
}

impl SearchConfig {
    /// Builder for the heuristic weight.
    pub const fn with_heuristic_weight(mut self, weight: f64) -> Self {
        self.heuristic_weight = weight;
        self
    }

    /// Reject weights that would make the frontier order meaningless.
    pub fn validate(&self) -> Result<(), RunError> {
        let w = self.heuristic_weight;
        if !w.is_finite() || w < 0.0 {
            return Err(RunError::InvalidHeuristicWeight(w));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Which endpoint an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endpoint::Start => "start",
            Endpoint::End => "end",
        })
    }
}

/// Caller contract violations detected before a run starts, plus the one
/// internal consistency failure a run can report.
#[derive(Debug, Clone, PartialEq)]
pub enum RunError {
    /// The grid has no start or no end placed.
    MissingEndpoint(Endpoint),
    /// An endpoint lies outside the grid.
    OutOfBounds {
        endpoint: Endpoint,
        pos: Point,
        bounds: Range,
    },
    /// An endpoint sits on a wall.
    WallEndpoint { endpoint: Endpoint, pos: Point },
    /// Heuristic weight is negative, infinite or NaN.
    InvalidHeuristicWeight(f64),
    /// The end was reached but its back-pointers do not lead to the start.
    BrokenPath { start: Point, end: Point },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEndpoint(e) => write!(f, "run: no {e} cell is placed"),
            Self::OutOfBounds {
                endpoint,
                pos,
                bounds,
            } => write!(f, "run: {endpoint} {pos} is outside the {bounds} grid"),
            Self::WallEndpoint { endpoint, pos } => {
                write!(f, "run: {endpoint} {pos} is a wall")
            }
            Self::InvalidHeuristicWeight(w) => {
                write!(f, "run: heuristic weight {w} must be finite and non-negative")
            }
            Self::BrokenPath { start, end } => {
                write!(f, "run: back-pointers from {end} do not lead to {start}")
            }
        }
    }
}

impl std::error::Error for RunError {}

fn check_endpoint(grid: &Grid, endpoint: Endpoint, pos: Point) -> Result<(), RunError> {
    if !grid.contains(pos) {
        return Err(RunError::OutOfBounds {
            endpoint,
            pos,
            bounds: grid.bounds(),
        });
    }
    if grid.is_wall(pos) {
        return Err(RunError::WallEndpoint { endpoint, pos });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Running
// ---------------------------------------------------------------------------

impl Engine {
    /// Run `algorithm` on `grid` from `start` to `end`.
    ///
    /// The scratch record is reset first (and resized if `grid` differs in
    /// size), so runs never leak state into each other. On success the
    /// record still holds the run's distances and back-pointers for
    /// inspection through [`state`](Self::state).
    pub fn run(
        &mut self,
        grid: &Grid,
        start: Point,
        end: Point,
        algorithm: Algorithm,
        config: &SearchConfig,
    ) -> Result<RunResult, RunError> {
        let checked = check_endpoint(grid, Endpoint::Start, start)
            .and_then(|()| check_endpoint(grid, Endpoint::End, end))
            .and_then(|()| config.validate());
        if let Err(err) = checked {
            log::warn!("{algorithm} run rejected: {err}");
            return Err(err);
        }

        if self.rng != grid.bounds() {
            self.set_range(grid.bounds());
        } else {
            self.reset();
        }

        log::debug!("{algorithm} run on {} grid from {start} to {end}", grid.bounds());
        let began = Instant::now();

        let search = match algorithm {
            Algorithm::Bfs => self.bfs(grid, start, end),
            Algorithm::Dfs => self.dfs(grid, start, end),
            Algorithm::Dijkstra => self.dijkstra(grid, start, end),
            Algorithm::Astar => self.astar(grid, start, end, config.heuristic_weight),
        };

        let outcome = if search.found {
            let path = self
                .reconstruct(start, end)
                .ok_or(RunError::BrokenPath { start, end })?;
            self.mark_path(&path);
            let cost = path_cost(grid, &path);
            Outcome::Found { path, cost }
        } else {
            Outcome::Exhausted
        };
        let elapsed = began.elapsed();

        match &outcome {
            Outcome::Found { path, cost } => log::debug!(
                "{algorithm} found a {}-cell path of cost {cost} after visiting {} cells in {elapsed:?}",
                path.len(),
                search.trace.len()
            ),
            Outcome::Exhausted => log::debug!(
                "{algorithm} exhausted after visiting {} cells in {elapsed:?}",
                search.trace.len()
            ),
        }

        Ok(RunResult {
            algorithm,
            trace: search.trace,
            outcome,
            elapsed,
        })
    }

    /// Run `algorithm` between the start and end placed on `grid`.
    ///
    /// Nothing is touched if either endpoint is missing.
    pub fn run_placed(
        &mut self,
        grid: &Grid,
        algorithm: Algorithm,
        config: &SearchConfig,
    ) -> Result<RunResult, RunError> {
        let start = grid
            .start()
            .ok_or(RunError::MissingEndpoint(Endpoint::Start))?;
        let end = grid.end().ok_or(RunError::MissingEndpoint(Endpoint::End))?;
        self.run(grid, start, end, algorithm, config)
    }
}

/// One-shot run with a throwaway [`Engine`].
pub fn run(
    grid: &Grid,
    start: Point,
    end: Point,
    algorithm: Algorithm,
    config: &SearchConfig,
) -> Result<RunResult, RunError> {
    Engine::new(grid.bounds()).run(grid, start, end, algorithm, config)
}
