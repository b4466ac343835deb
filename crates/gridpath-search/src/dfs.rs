use gridpath_core::{Grid, Point};

use crate::Engine;
use crate::neighbors::DFS_ORDER;
use crate::result::Search;

impl Engine {
    /// Depth-first search from `start` to `end`, ignoring terrain weight.
    ///
    /// Cells are marked visited when popped. A cell may be pushed by several
    /// parents before it is popped; the latest push wins, both for the pop
    /// order and for the recorded back-pointer.
    pub(crate) fn dfs(&mut self, grid: &Grid, start: Point, end: Point) -> Search {
        let mut search = Search::default();
        let Some(si) = self.idx(start) else {
            return search;
        };

        self.states[si].distance = 0;
        let mut stack: Vec<usize> = vec![si];

        let rng = self.rng;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = stack.pop() {
            if self.states[ci].visited {
                continue;
            }
            self.states[ci].visited = true;
            let cp = self.point(ci);
            search.trace.push(cp);

            if cp == end {
                search.found = true;
                break;
            }

            let states = &self.states;
            let keep = |n: Point| rng.index_of(n).is_some_and(|i| !states[i].visited);
            for &np in nbuf.in_order(cp, &DFS_ORDER, keep) {
                // Walls are filtered at push time.
                if grid.is_wall(np) {
                    continue;
                }
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                self.states[ni].previous = Some(cp);
                stack.push(ni);
            }
        }

        self.nbuf = nbuf;
        search
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dfs_explores_up_first() {
        let grid = Grid::new(3, 3);
        let mut e = Engine::new(grid.bounds());
        let s = e.dfs(&grid, Point::at(1, 1), Point::at(2, 2));
        assert!(s.found);
        assert_eq!(s.trace[0], Point::at(1, 1));
        assert_eq!(s.trace[1], Point::at(0, 1));
    }

    #[test]
    fn dfs_latest_push_sets_back_pointer() {
        // From (0,0) the stack holds right (0,1) and down (1,0); down pops
        // first and runs down the left column.
        let grid = Grid::new(2, 2);
        let mut e = Engine::new(grid.bounds());
        let s = e.dfs(&grid, Point::at(0, 0), Point::at(0, 1));
        assert!(s.found);
        assert_eq!(
            s.trace,
            vec![Point::at(0, 0), Point::at(1, 0), Point::at(1, 1), Point::at(0, 1)]
        );
        // (0,1) was first pushed by (0,0), then again by (1,1), which wins.
        assert_eq!(
            e.state(Point::at(0, 1)).unwrap().previous,
            Some(Point::at(1, 1))
        );
    }

    #[test]
    fn dfs_skips_walls() {
        let grid = Grid::parse("S#\n.E").unwrap();
        let mut e = Engine::new(grid.bounds());
        let s = e.dfs(&grid, Point::at(0, 0), Point::at(1, 1));
        assert!(s.found);
        assert_eq!(
            s.trace,
            vec![Point::at(0, 0), Point::at(1, 0), Point::at(1, 1)]
        );
    }
}
