use gridpath_core::Point;

/// One row up.
pub const UP: Point = Point::new(0, -1);
/// One row down.
pub const DOWN: Point = Point::new(0, 1);
/// One column left.
pub const LEFT: Point = Point::new(-1, 0);
/// One column right.
pub const RIGHT: Point = Point::new(1, 0);

/// Enumeration order used by BFS, Dijkstra and A*.
pub const SEARCH_ORDER: [Point; 4] = [UP, DOWN, LEFT, RIGHT];

/// Enumeration order used by DFS. The stack pops the last pushed neighbour
/// first, so exploration effectively starts upwards.
pub const DFS_ORDER: [Point; 4] = [RIGHT, DOWN, LEFT, UP];

/// Cached neighbor computation helper.
///
/// Enumerates the orthogonal neighbors of a cell in a fixed direction
/// order, filtered by a predicate. The order decides tie-breaks, so it is
/// part of each algorithm's observable behaviour.
#[derive(Debug)]
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the neighbors of `p` in `order`, keeping only those for which
    /// `keep` returns `true`.
    pub fn in_order(
        &mut self,
        p: Point,
        order: &[Point],
        keep: impl Fn(Point) -> bool,
    ) -> &[Point] {
        self.buf.clear();
        for &d in order {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
