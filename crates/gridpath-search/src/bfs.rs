use std::collections::VecDeque;

use gridpath_core::{Grid, Point};

use crate::Engine;
use crate::neighbors::SEARCH_ORDER;
use crate::result::Search;

impl Engine {
    /// Breadth-first search from `start` to `end`, ignoring terrain weight.
    ///
    /// A cell is marked visited (and traced) when it is enqueued, so each
    /// cell enters the queue at most once. The search stops when `end` is
    /// dequeued.
    pub(crate) fn bfs(&mut self, grid: &Grid, start: Point, end: Point) -> Search {
        let mut search = Search::default();
        let Some(si) = self.idx(start) else {
            return search;
        };

        self.states[si].distance = 0;
        self.states[si].visited = true;
        search.trace.push(start);

        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(si);

        let rng = self.rng;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = queue.pop_front() {
            let cp = self.point(ci);
            if cp == end {
                search.found = true;
                break;
            }

            let keep = |n: Point| rng.contains(n) && !grid.is_wall(n);
            for &np in nbuf.in_order(cp, &SEARCH_ORDER, keep) {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let n = &mut self.states[ni];
                if n.visited {
                    continue;
                }
                n.visited = true;
                n.previous = Some(cp);
                search.trace.push(np);
                queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;
        search
    }
}
