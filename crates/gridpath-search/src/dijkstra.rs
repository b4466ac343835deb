use std::collections::BinaryHeap;

use gridpath_core::{Grid, Point};

use crate::Engine;
use crate::engine::NodeRef;
use crate::neighbors::SEARCH_ORDER;
use crate::result::Search;

impl Engine {
    /// Dijkstra search from `start` to `end` over terrain weights.
    ///
    /// Each step settles the unvisited cell with the smallest distance, ties
    /// going to the earliest cell in row-major order. Entering a neighbour
    /// costs the neighbour's weight. Stops when `end` is settled, or when
    /// no reachable cell remains.
    pub(crate) fn dijkstra(&mut self, grid: &Grid, start: Point, end: Point) -> Search {
        let mut search = Search::default();
        let Some(si) = self.idx(start) else {
            return search;
        };

        self.states[si].distance = 0;
        self.states[si].total_distance = 0.0;

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: si,
            key: 0.0,
            tie: si,
        });

        let rng = self.rng;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            let cn = &self.states[ci];
            // Skip stale entries.
            if cn.visited || current.key != f64::from(cn.distance) {
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

            let states = &self.states;
            let keep = |n: Point| {
                rng.index_of(n)
                    .is_some_and(|i| !states[i].visited && !grid.is_wall(n))
            };
            for &np in nbuf.in_order(cp, &SEARCH_ORDER, keep) {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let Some(w) = grid.weight(np) else {
                    continue;
                };
                let tentative = current_g + w;
                let n = &mut self.states[ni];
                if tentative >= n.distance {
                    continue;
                }
                n.distance = tentative;
                n.total_distance = f64::from(tentative);
                n.previous = Some(cp);
                open.push(NodeRef {
                    idx: ni,
                    key: f64::from(tentative),
                    tie: ni,
                });
            }
        }

        self.nbuf = nbuf;
        search
    }
}
