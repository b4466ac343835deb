use std::collections::BinaryHeap;

use gridpath_core::{Grid, Point};

use crate::Engine;
use crate::distance::manhattan;
use crate::engine::NodeRef;
use crate::neighbors::SEARCH_ORDER;
use crate::result::Search;

/// Manhattan distance to `end`, scaled by `weight`.
#[inline]
pub fn heuristic(p: Point, end: Point, weight: f64) -> f64 {
    f64::from(manhattan(p, end)) * weight
}

impl Engine {
    /// A* search from `start` to `end` over terrain weights.
    ///
    /// The open set is ordered by `distance + heuristic`, ties going to the
    /// cell that entered the open set first. Closed cells are never
    /// re-examined, even if a cheaper route to them turns up later.
    pub(crate) fn astar(
        &mut self,
        grid: &Grid,
        start: Point,
        end: Point,
        heuristic_weight: f64,
    ) -> Search {
        let mut search = Search::default();
        let Some(si) = self.idx(start) else {
            return search;
        };

        let mut opened = 0usize;
        {
            let h = heuristic(start, end, heuristic_weight);
            let node = &mut self.states[si];
            node.distance = 0;
            node.heuristic = h;
            node.total_distance = h;
            self.entry[si] = opened;
            opened += 1;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: si,
            key: self.states[si].total_distance,
            tie: self.entry[si],
        });

        let rng = self.rng;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            let cn = &self.states[ci];
            // Skip stale entries.
            if cn.visited || current.key != cn.total_distance {
                continue;
            }
            let current_g = cn.distance;
            self.states[ci].visited = true;

            let cp = self.point(ci);
            search.trace.push(cp);
            if cp == end {
                search.found = true;
                break;
            }

            let keep = |n: Point| rng.contains(n) && !grid.is_wall(n);
            for &np in nbuf.in_order(cp, &SEARCH_ORDER, keep) {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let Some(w) = grid.weight(np) else {
                    continue;
                };
                let n = &mut self.states[ni];
                if n.visited {
                    continue;
                }
                let tentative_g = current_g + w;
                if tentative_g >= n.distance {
                    continue;
                }

                n.distance = tentative_g;
                n.heuristic = heuristic(np, end, heuristic_weight);
                n.total_distance = f64::from(tentative_g) + n.heuristic;
                n.previous = Some(cp);
                let key = n.total_distance;

                if self.entry[ni] == usize::MAX {
                    self.entry[ni] = opened;
                    opened += 1;
                }
                open.push(NodeRef {
                    idx: ni,
                    key,
                    tie: self.entry[ni],
                });
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
    fn heuristic_scales_manhattan() {
        let end = Point::at(3, 4);
        assert_eq!(heuristic(Point::ZERO, end, 1.0), 7.0);
        assert_eq!(heuristic(Point::ZERO, end, 2.5), 17.5);
        assert_eq!(heuristic(end, end, 10.0), 0.0);
    }

    #[test]
    fn astar_heads_straight_on_open_grid() {
        let grid = Grid::new(5, 5);
        let mut e = Engine::new(grid.bounds());
        let s = e.astar(&grid, Point::at(2, 0), Point::at(2, 4), 1.0);
        assert!(s.found);
        assert_eq!(
            s.trace,
            (0..5).map(|c| Point::at(2, c)).collect::<Vec<_>>()
        );
        assert_eq!(e.state(Point::at(2, 4)).unwrap().distance, 4);
    }

    #[test]
    fn astar_records_heuristic_and_total() {
        let grid = Grid::new(4, 1);
        let mut e = Engine::new(grid.bounds());
        e.astar(&grid, Point::at(0, 0), Point::at(0, 3), 2.0);
        let s = e.state(Point::at(0, 1)).unwrap();
        assert_eq!(s.distance, 1);
        assert_eq!(s.heuristic, 4.0);
        assert_eq!(s.total_distance, 5.0);
        let start = e.state(Point::at(0, 0)).unwrap();
        assert_eq!(start.heuristic, 6.0);
        assert_eq!(start.previous, None);
    }

    #[test]
    fn astar_never_reopens_closed_cells() {
        // At weight 3 the mountain at (0,1) looks better than the bottom
        // row, so (0,2) closes at distance 6. The bottom row later offers
        // it for 4, but a closed cell keeps what it had.
        let grid = Grid::parse("S^.^^E\n...###").unwrap();
        let (start, end) = (Point::at(0, 0), Point::at(0, 5));
        let mut e = Engine::new(grid.bounds());
        let s = e.astar(&grid, start, end, 3.0);
        assert!(s.found);
        assert_eq!(
            s.trace,
            vec![
                Point::at(0, 0),
                Point::at(0, 1),
                Point::at(0, 2),
                Point::at(0, 3),
                Point::at(1, 0),
                Point::at(1, 1),
                Point::at(1, 2),
                Point::at(0, 4),
                Point::at(0, 5),
            ]
        );
        assert_eq!(e.state(Point::at(1, 2)).unwrap().distance, 3);
        let closed = e.state(Point::at(0, 2)).unwrap();
        assert_eq!(closed.distance, 6);
        assert_eq!(closed.previous, Some(Point::at(0, 1)));

        let path = e.reconstruct(start, end).unwrap();
        assert_eq!(&path[..3], &[start, Point::at(0, 1), Point::at(0, 2)]);
        assert_eq!(crate::path_cost(&grid, &path), 18);

        // Dijkstra takes the bottom row instead.
        let mut d = Engine::new(grid.bounds());
        d.dijkstra(&grid, start, end);
        assert_eq!(d.state(Point::at(0, 2)).unwrap().distance, 4);
        assert_eq!(d.state(end).unwrap().distance, 15);
    }

    #[test]
    fn astar_exhausts_when_walled_off() {
        let grid = Grid::parse("S.#\n..#\n##E").unwrap();
        let mut e = Engine::new(grid.bounds());
        let s = e.astar(&grid, Point::at(0, 0), Point::at(2, 2), 1.0);
        assert!(!s.found);
        assert_eq!(s.trace.len(), 4);
    }
}
