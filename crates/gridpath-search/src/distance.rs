use gridpath_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::at(1, 4);
        let b = Point::at(3, 0);
        assert_eq!(manhattan(a, b), 6);
        assert_eq!(manhattan(b, a), 6);
        assert_eq!(manhattan(a, a), 0);
    }
}
