//! Pathfinding engine for weighted grid visualisation.
//!
//! This crate runs one of four searches over a [`gridpath_core::Grid`] and
//! returns everything a visualiser needs to replay it:
//!
//! - **BFS** fewest-steps search, blind to terrain weight
//! - **DFS** depth-first search, finds *a* path
//! - **Dijkstra** cheapest path by total terrain weight
//! - **A\*** Dijkstra guided by a scaled Manhattan heuristic
//!
//! All runs go through [`Engine`], which owns a per-cell scratch record
//! (distances, back-pointers, visited/path flags) kept apart from the grid's
//! terrain. The record is reset at the start of every run and reused across
//! runs without reallocating.
//!
//! | Algorithm | Frontier | Key | Visited when |
//! |---|---|---|---|
//! | BFS | FIFO queue | insertion order | enqueued |
//! | DFS | LIFO stack | push order | popped |
//! | Dijkstra | min-heap | distance, then row-major | settled |
//! | A* | min-heap | distance + heuristic, then open order | closed |
//!
//! ```
//! use gridpath_core::Grid;
//! use gridpath_search::{Algorithm, Engine, SearchConfig};
//!
//! let grid = Grid::parse("S.~\n.#.\n..E").unwrap();
//! let mut engine = Engine::new(grid.bounds());
//! let result = engine
//!     .run_placed(&grid, Algorithm::Dijkstra, &SearchConfig::default())
//!     .unwrap();
//! assert_eq!(result.cost(), Some(5));
//! ```

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod engine;
mod neighbors;
mod path;
mod result;
mod run;

pub use astar::heuristic;
pub use distance::manhattan;
pub use engine::{CellState, Engine, UNREACHABLE};
pub use neighbors::{DFS_ORDER, DOWN, LEFT, Neighbors, RIGHT, SEARCH_ORDER, UP};
pub use path::path_cost;
pub use result::{Outcome, RunResult};
pub use run::{Algorithm, Endpoint, ParseAlgorithmError, RunError, SearchConfig, run};
