//! Terrain types and their traversal weights.

use std::fmt;

/// Weight reported for impassable terrain.
pub const IMPASSABLE: i32 = i32::MAX;

/// Passability/cost category of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Terrain {
    #[default]
    Normal,
    Water,
    Mountain,
    Wall,
}

impl Terrain {
    /// Every terrain, in brush order.
    pub const ALL: [Terrain; 4] = [
        Terrain::Normal,
        Terrain::Water,
        Terrain::Mountain,
        Terrain::Wall,
    ];

    /// Cost of entering a cell with this terrain. Walls are [`IMPASSABLE`].
    #[inline]
    pub const fn weight(self) -> i32 {
        match self {
            Terrain::Normal => 1,
            Terrain::Water => 3,
            Terrain::Mountain => 5,
            Terrain::Wall => IMPASSABLE,
        }
    }

    #[inline]
    pub const fn is_wall(self) -> bool {
        matches!(self, Terrain::Wall)
    }

    /// Character used for this terrain in text maps.
    pub const fn rune(self) -> char {
        match self {
            Terrain::Normal => '.',
            Terrain::Water => '~',
            Terrain::Mountain => '^',
            Terrain::Wall => '#',
        }
    }

    /// Inverse of [`rune`](Self::rune).
    pub const fn from_rune(ch: char) -> Option<Terrain> {
        match ch {
            '.' => Some(Terrain::Normal),
            '~' => Some(Terrain::Water),
            '^' => Some(Terrain::Mountain),
            '#' => Some(Terrain::Wall),
            _ => None,
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Terrain::Normal => "normal",
            Terrain::Water => "water",
            Terrain::Mountain => "mountain",
            Terrain::Wall => "wall",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights() {
        assert_eq!(Terrain::Normal.weight(), 1);
        assert_eq!(Terrain::Water.weight(), 3);
        assert_eq!(Terrain::Mountain.weight(), 5);
        assert_eq!(Terrain::Wall.weight(), IMPASSABLE);
    }

    #[test]
    fn only_wall_is_wall() {
        for t in Terrain::ALL {
            assert_eq!(t.is_wall(), t == Terrain::Wall);
        }
    }

    #[test]
    fn runes_round_trip() {
        for t in Terrain::ALL {
            assert_eq!(Terrain::from_rune(t.rune()), Some(t));
        }
        assert_eq!(Terrain::from_rune('S'), None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn terrain_serializes_lowercase() {
        let json = serde_json::to_string(&Terrain::Mountain).unwrap();
        assert_eq!(json, "\"mountain\"");
    }
}
