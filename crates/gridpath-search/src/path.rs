//! Path reconstruction and costing.

use gridpath_core::{Grid, Point};

use crate::Engine;

/// Total traversal cost of `path`: the sum of every cell's weight,
/// including both endpoints.
///
/// The cost reflects the terrain actually crossed, whichever algorithm
/// produced the path. Cells outside `grid` contribute nothing.
pub fn path_cost(grid: &Grid, path: &[Point]) -> i64 {
    path.iter()
        .filter_map(|&p| grid.weight(p))
        .map(i64::from)
        .sum()
}

impl Engine {
    /// Walk back-pointers from `end` to `start` and return the path in
    /// start-to-end order.
    ///
    /// Returns `None` if the chain does not terminate at `start`.
    pub fn reconstruct(&self, start: Point, end: Point) -> Option<Vec<Point>> {
        let mut path = Vec::new();
        let mut cur = Some(end);
        while let Some(p) = cur {
            // A chain longer than the grid must contain a cycle.
            if path.len() >= self.states.len() {
                return None;
            }
            path.push(p);
            cur = self.state(p)?.previous;
        }
        path.reverse();
        (path.first() == Some(&start)).then_some(path)
    }

    /// Set the `path` presentation flag on every cell of `path`.
    pub(crate) fn mark_path(&mut self, path: &[Point]) {
        for &p in path {
            if let Some(i) = self.idx(p) {
                self.states[i].path = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_sums_every_cell() {
        let grid = Grid::parse(".~.").unwrap();
        let path = [Point::at(0, 0), Point::at(0, 1), Point::at(0, 2)];
        assert_eq!(path_cost(&grid, &path), 5);
        assert_eq!(path_cost(&grid, &path[..1]), 1);
        assert_eq!(path_cost(&grid, &[]), 0);
    }

    #[test]
    fn reconstruct_walks_back_pointers() {
        let grid = Grid::new(3, 1);
        let mut e = Engine::new(grid.bounds());
        e.states[1].previous = Some(Point::at(0, 0));
        e.states[2].previous = Some(Point::at(0, 1));
        assert_eq!(
            e.reconstruct(Point::at(0, 0), Point::at(0, 2)),
            Some(vec![Point::at(0, 0), Point::at(0, 1), Point::at(0, 2)])
        );
        assert_eq!(
            e.reconstruct(Point::at(0, 1), Point::at(0, 1)),
            None,
            "chain from (0,1) ends at (0,0), not (0,1)"
        );
    }

    #[test]
    fn reconstruct_rejects_cycles() {
        let grid = Grid::new(2, 1);
        let mut e = Engine::new(grid.bounds());
        e.states[0].previous = Some(Point::at(0, 1));
        e.states[1].previous = Some(Point::at(0, 0));
        assert_eq!(e.reconstruct(Point::at(0, 0), Point::at(0, 1)), None);
    }
}
