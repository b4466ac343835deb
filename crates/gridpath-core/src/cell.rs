//! The [`Cell`] type, a durable view of one grid position.

use crate::geom::Point;
use crate::terrain::Terrain;

/// One grid position with its terrain and endpoint role.
///
/// Search scratch state (distances, back-pointers, visited flags) is not
/// stored here; it lives in the search engine's per-run record.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub terrain: Terrain,
    pub is_start: bool,
    pub is_end: bool,
}

impl Cell {
    /// Set the terrain (builder).
    #[inline]
    pub const fn with_terrain(mut self, terrain: Terrain) -> Self {
        self.terrain = terrain;
        self
    }

    /// Traversal weight, derived from terrain.
    #[inline]
    pub const fn weight(&self) -> i32 {
        self.terrain.weight()
    }

    #[inline]
    pub const fn is_wall(&self) -> bool {
        self.terrain.is_wall()
    }

    /// Character used for this cell in text maps.
    pub const fn rune(&self) -> char {
        if self.is_start {
            'S'
        } else if self.is_end {
            'E'
        } else {
            self.terrain.rune()
        }
    }
}
