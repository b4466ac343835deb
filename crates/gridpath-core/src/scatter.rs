//! Random terrain scattering for generated test maps.

use rand::{Rng, RngExt};

use crate::grid::Grid;
use crate::terrain::Terrain;

/// Percentage densities of each non-normal terrain.
///
/// Each cell draws once from `0..100`: the first `walls` values give a wall,
/// the next `water` values water, the next `mountains` values a mountain,
/// and the rest leave normal terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Scatter {
    pub walls: u32,
    pub water: u32,
    pub mountains: u32,
}

impl Default for Scatter {
    fn default() -> Self {
        Self {
            walls: 25,
            water: 10,
            mountains: 10,
        }
    }
}

impl Scatter {
    /// Overwrite the terrain of every cell except the start and end.
    ///
    /// Cells are visited in row-major order, so a seeded `rng` always gives
    /// the same map. Returns the number of walls placed.
    pub fn apply<R: Rng>(&self, grid: &mut Grid, rng: &mut R) -> usize {
        let walls = self.walls;
        let water = walls + self.water;
        let mountains = water + self.mountains;
        let mut placed = 0;
        let (start, end) = (grid.start(), grid.end());
        for (p, slot) in grid.terrain_mut() {
            if start == Some(p) || end == Some(p) {
                continue;
            }
            let roll = rng.random_range(0..100u32);
            *slot = if roll < walls {
                placed += 1;
                Terrain::Wall
            } else if roll < water {
                Terrain::Water
            } else if roll < mountains {
                Terrain::Mountain
            } else {
                Terrain::Normal
            };
        }
        placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scatter_keeps_endpoints_clear() {
        let mut g = Grid::new(12, 8);
        g.set_start(Point::at(0, 0)).unwrap();
        g.set_end(Point::at(7, 11)).unwrap();
        let all_walls = Scatter {
            walls: 100,
            water: 0,
            mountains: 0,
        };
        let placed = all_walls.apply(&mut g, &mut StdRng::seed_from_u64(1));
        assert_eq!(placed, 12 * 8 - 2);
        assert!(!g.is_wall(Point::at(0, 0)));
        assert!(!g.is_wall(Point::at(7, 11)));
        assert!(g.is_wall(Point::at(0, 1)));
        assert!(g.is_wall(Point::at(7, 10)));
    }

    #[test]
    fn scatter_overwrites_old_terrain() {
        let mut g = Grid::new(3, 2);
        g.set_terrain(Point::at(1, 2), Terrain::Mountain).unwrap();
        let water = Scatter {
            walls: 0,
            water: 100,
            mountains: 0,
        };
        assert_eq!(water.apply(&mut g, &mut StdRng::seed_from_u64(3)), 0);
        assert!(g.cells().all(|c| c.terrain == Terrain::Water));
    }

    #[test]
    fn scatter_is_deterministic_for_a_seed() {
        let mut a = Grid::new(15, 10);
        let mut b = Grid::new(15, 10);
        Scatter::default().apply(&mut a, &mut StdRng::seed_from_u64(42));
        Scatter::default().apply(&mut b, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn zero_density_leaves_normal() {
        let mut g = Grid::new(6, 6);
        let none = Scatter {
            walls: 0,
            water: 0,
            mountains: 0,
        };
        assert_eq!(none.apply(&mut g, &mut rand::rng()), 0);
        assert!(g.cells().all(|c| c.terrain == Terrain::Normal));
    }
}
