//! Text rendering helpers for the `gridpath` command-line runner.

use std::fmt::Write as _;

use gridpath_core::{Grid, Terrain};
use gridpath_search::{CellState, Engine, RunResult};

/// Marker for a cell on the reconstructed path.
pub const PATH_RUNE: char = '*';
/// Marker for a visited cell off the path, on normal terrain.
pub const VISITED_RUNE: char = 'o';

/// Draw `grid` with the engine's last run on top of it.
///
/// Endpoints keep their `S`/`E` markers, path cells become
/// [`PATH_RUNE`], and visited normal cells become [`VISITED_RUNE`]. Other
/// visited cells keep their terrain rune so weights stay readable.
pub fn render_overlay(grid: &Grid, engine: &Engine) -> String {
    let mut out = String::with_capacity(grid.bounds().len() + grid.height() as usize);
    let width = grid.width().max(1) as usize;
    for (i, cell) in grid.cells().enumerate() {
        let state = engine.state(cell.pos).copied().unwrap_or(CellState::INITIAL);
        let ch = if cell.is_start || cell.is_end {
            cell.rune()
        } else if state.path {
            PATH_RUNE
        } else if state.visited && cell.terrain == Terrain::Normal {
            VISITED_RUNE
        } else {
            cell.rune()
        };
        out.push(ch);
        if (i + 1) % width == 0 {
            out.push('\n');
        }
    }
    out
}

/// One-line summary of a run.
pub fn summary(result: &RunResult) -> String {
    match (result.path_edges(), result.cost()) {
        (Some(edges), Some(cost)) => format!(
            "{}: visited {} cells, path of {} steps, cost {}, {:.3} ms",
            result.algorithm,
            result.trace.len(),
            edges,
            cost,
            result.elapsed.as_secs_f64() * 1000.0
        ),
        _ => format!(
            "{}: visited {} cells, no path, {:.3} ms",
            result.algorithm,
            result.trace.len(),
            result.elapsed.as_secs_f64() * 1000.0
        ),
    }
}

/// Side-by-side comparison of several runs on the same grid.
pub fn comparison_table(results: &[RunResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:>8} {:>6} {:>6} {:>10}",
        "algorithm", "visited", "steps", "cost", "time (ms)"
    );
    for r in results {
        let steps = r
            .path_edges()
            .map_or_else(|| "-".to_string(), |e| e.to_string());
        let cost = r.cost().map_or_else(|| "-".to_string(), |c| c.to_string());
        let _ = writeln!(
            out,
            "{:<10} {:>8} {:>6} {:>6} {:>10.3}",
            r.algorithm.to_string(),
            r.trace.len(),
            steps,
            cost,
            r.elapsed.as_secs_f64() * 1000.0
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_search::{Algorithm, SearchConfig};

    #[test]
    fn overlay_marks_path_and_visits() {
        let grid = Grid::parse("S..\n.#.\n..E").unwrap();
        let mut engine = Engine::new(grid.bounds());
        engine
            .run_placed(&grid, Algorithm::Dijkstra, &SearchConfig::default())
            .unwrap();
        let overlay = render_overlay(&grid, &engine);
        assert_eq!(overlay.lines().count(), 3);
        assert!(overlay.starts_with('S'));
        assert!(overlay.contains('#'));
        assert_eq!(overlay.matches(PATH_RUNE).count(), 3);
        assert!(overlay.trim_end().ends_with('E'));
    }

    #[test]
    fn table_has_a_row_per_run() {
        let grid = Grid::parse("S#E").unwrap();
        let mut engine = Engine::new(grid.bounds());
        let results: Vec<_> = Algorithm::ALL
            .iter()
            .map(|&a| {
                engine
                    .run_placed(&grid, a, &SearchConfig::default())
                    .unwrap()
            })
            .collect();
        let table = comparison_table(&results);
        assert_eq!(table.lines().count(), 5);
        assert!(table.lines().skip(1).all(|l| l.contains(" - ")));
        assert!(summary(&results[0]).contains("no path"));
    }
}
