//! The [`Grid`] type, a fixed-size table of terrain with start/end markers.
//!
//! A `Grid` holds only durable data: terrain per cell plus at most one start
//! and one end. Cloning yields an independent copy, so concurrent searches
//! can each work on their own grid.

use std::fmt;
use std::str::FromStr;

use crate::cell::Cell;
use crate::geom::{Point, Range};
use crate::terrain::Terrain;

/// Smallest row count accepted by [`Grid::with_size`].
pub const MIN_SIZE: i32 = 5;
/// Largest row count accepted by [`Grid::with_size`].
pub const MAX_SIZE: i32 = 20;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from grid authoring and text-map parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The point lies outside the grid.
    OutOfBounds { pos: Point, bounds: Range },
    /// The cell already holds the other endpoint.
    Occupied(Point),
    /// Text map lines have inconsistent widths.
    InconsistentSize { line: usize, expected: usize, found: usize },
    /// A character outside the map alphabet was found.
    InvalidRune { ch: char, pos: Point },
    /// A text map declares more than one start or end.
    DuplicateEndpoint { ch: char, pos: Point },
    /// A text map contains no cells.
    Empty,
    /// Stored terrain does not cover the bounds exactly.
    TerrainSize { expected: usize, found: usize },
    /// Bounds do not start at the origin.
    Origin(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "grid: {pos} is outside the {bounds} grid")
            }
            Self::Occupied(pos) => write!(f, "grid: {pos} already holds the other endpoint"),
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "grid map: line {line} has {found} cells, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid map contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateEndpoint { ch, pos } => {
                write!(f, "grid map declares a second \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::Empty => f.write_str("grid map is empty"),
            Self::TerrainSize { expected, found } => {
                write!(f, "grid: {found} terrain cells for {expected} positions")
            }
            Self::Origin(min) => write!(f, "grid: bounds start at {min}, not at the origin"),
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// Authoring
// ---------------------------------------------------------------------------

/// Terrain brush applied by [`Grid::paint`] once both endpoints are placed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Brush {
    #[default]
    Wall,
    Water,
    Mountain,
}

impl Brush {
    const fn terrain(self) -> Terrain {
        match self {
            Brush::Wall => Terrain::Wall,
            Brush::Water => Terrain::Water,
            Brush::Mountain => Terrain::Mountain,
        }
    }
}

/// What a single [`Grid::paint`] call changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PaintEffect {
    StartRemoved,
    EndRemoved,
    StartPlaced,
    EndPlaced,
    Terrain(Terrain),
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular, row-major table of terrain addressed by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    bounds: Range,
    terrain: Vec<Terrain>,
    start: Option<Point>,
    end: Option<Point>,
}

impl Grid {
    /// Create an all-[`Normal`](Terrain::Normal) grid with no endpoints.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::sized(width.max(0), height.max(0));
        Self {
            bounds,
            terrain: vec![Terrain::Normal; bounds.len()],
            start: None,
            end: None,
        }
    }

    /// Create a grid with `rows` rows (clamped to
    /// `[MIN_SIZE, MAX_SIZE]`) and `floor(rows * 1.8)` columns.
    pub fn with_size(rows: i32) -> Self {
        let rows = rows.clamp(MIN_SIZE, MAX_SIZE);
        let cols = rows * 9 / 5;
        Self::new(cols, rows)
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    fn index(&self, p: Point) -> Result<usize, GridError> {
        self.bounds.index_of(p).ok_or(GridError::OutOfBounds {
            pos: p,
            bounds: self.bounds,
        })
    }

    /// Terrain at `p`, or `None` outside the grid.
    #[inline]
    pub fn terrain(&self, p: Point) -> Option<Terrain> {
        self.bounds.index_of(p).map(|i| self.terrain[i])
    }

    /// Traversal weight at `p`, or `None` outside the grid.
    #[inline]
    pub fn weight(&self, p: Point) -> Option<i32> {
        self.terrain(p).map(Terrain::weight)
    }

    /// Whether `p` is a wall. Points outside the grid are not walls.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.terrain(p).is_some_and(Terrain::is_wall)
    }

    /// Set the terrain at `p`.
    pub fn set_terrain(&mut self, p: Point, terrain: Terrain) -> Result<(), GridError> {
        let i = self.index(p)?;
        self.terrain[i] = terrain;
        Ok(())
    }

    /// Row-major `(position, terrain)` slots, for bulk edits inside the crate.
    pub(crate) fn terrain_mut(&mut self) -> impl Iterator<Item = (Point, &mut Terrain)> + '_ {
        self.bounds.iter().zip(self.terrain.iter_mut())
    }

    /// Reset every cell to normal terrain. Endpoints are kept.
    pub fn clear_terrain(&mut self) {
        self.terrain.fill(Terrain::Normal);
    }

    /// Durable view of the cell at `p`.
    pub fn cell(&self, p: Point) -> Option<Cell> {
        let terrain = self.terrain(p)?;
        Some(Cell {
            pos: p,
            terrain,
            is_start: self.start == Some(p),
            is_end: self.end == Some(p),
        })
    }

    /// Row-major iterator over every cell.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.bounds.iter().zip(self.terrain.iter()).map(|(p, &terrain)| Cell {
            pos: p,
            terrain,
            is_start: self.start == Some(p),
            is_end: self.end == Some(p),
        })
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Place (or move) the start. Fails if `p` holds the end.
    pub fn set_start(&mut self, p: Point) -> Result<(), GridError> {
        self.index(p)?;
        if self.end == Some(p) {
            return Err(GridError::Occupied(p));
        }
        self.start = Some(p);
        Ok(())
    }

    /// Place (or move) the end. Fails if `p` holds the start.
    pub fn set_end(&mut self, p: Point) -> Result<(), GridError> {
        self.index(p)?;
        if self.start == Some(p) {
            return Err(GridError::Occupied(p));
        }
        self.end = Some(p);
        Ok(())
    }

    pub fn clear_start(&mut self) {
        self.start = None;
    }

    pub fn clear_end(&mut self) {
        self.end = None;
    }

    /// Apply one authoring click at `p`.
    ///
    /// Clicking an endpoint removes it. Otherwise a missing start, then a
    /// missing end, is placed. With both placed the brush is applied: the
    /// wall brush toggles wall/normal, the other brushes set their terrain
    /// or revert it to normal if the cell already has it.
    pub fn paint(&mut self, p: Point, brush: Brush) -> Result<PaintEffect, GridError> {
        let i = self.index(p)?;
        if self.start == Some(p) {
            self.start = None;
            return Ok(PaintEffect::StartRemoved);
        }
        if self.end == Some(p) {
            self.end = None;
            return Ok(PaintEffect::EndRemoved);
        }
        if self.start.is_none() {
            self.start = Some(p);
            return Ok(PaintEffect::StartPlaced);
        }
        if self.end.is_none() {
            self.end = Some(p);
            return Ok(PaintEffect::EndPlaced);
        }
        let target = brush.terrain();
        let next = if self.terrain[i] == target {
            Terrain::Normal
        } else {
            target
        };
        self.terrain[i] = next;
        Ok(PaintEffect::Terrain(next))
    }

    /// Parse a text map.
    ///
    /// Each line is one row of `.` `~` `^` `#` cells; `S` and `E` mark the
    /// start and end on normal terrain. Blank lines around the map are
    /// ignored.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim_end)
            .skip_while(|l| l.is_empty())
            .collect();
        let lines = match lines.iter().rposition(|l| !l.is_empty()) {
            Some(last) => &lines[..=last],
            None => return Err(GridError::Empty),
        };

        let width = lines[0].chars().count();
        let mut grid = Grid::new(width as i32, lines.len() as i32);
        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::InconsistentSize {
                    line: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let slot = match ch {
                    'S' => &mut grid.start,
                    'E' => &mut grid.end,
                    _ => {
                        let terrain = Terrain::from_rune(ch)
                            .ok_or(GridError::InvalidRune { ch, pos })?;
                        grid.set_terrain(pos, terrain)?;
                        continue;
                    }
                };
                if slot.is_some() {
                    return Err(GridError::DuplicateEndpoint { ch, pos });
                }
                *slot = Some(pos);
            }
        }
        Ok(grid)
    }
}

/// Unchecked wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    bounds: Range,
    terrain: Vec<Terrain>,
    start: Option<Point>,
    end: Option<Point>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        let RawGrid {
            bounds,
            terrain,
            start,
            end,
        } = raw;
        if bounds.min != Point::ZERO {
            return Err(GridError::Origin(bounds.min));
        }
        if terrain.len() != bounds.len() {
            return Err(GridError::TerrainSize {
                expected: bounds.len(),
                found: terrain.len(),
            });
        }
        let mut grid = Grid {
            bounds,
            terrain,
            start: None,
            end: None,
        };
        if let Some(p) = start {
            grid.set_start(p)?;
        }
        if let Some(p) = end {
            grid.set_end(p)?;
        }
        Ok(grid)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s)
    }
}

/// Renders the text-map format accepted by [`Grid::parse`]. Endpoints are
/// drawn as `S`/`E` regardless of the terrain beneath them.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.width().max(0) as usize;
        for (i, cell) in self.cells().enumerate() {
            write!(f, "{}", cell.rune())?;
            if (i + 1) % w == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::parse("S~\n#E").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    fn square(terrain: &str, start: &str, end: &str) -> String {
        format!(
            r#"{{"bounds":{{"min":{{"x":0,"y":0}},"max":{{"x":3,"y":3}}}},"terrain":{terrain},"start":{start},"end":{end}}}"#
        )
    }

    #[test]
    fn rejects_short_terrain() {
        let json = square("[]", r#"{"x":0,"y":0}"#, r#"{"x":2,"y":2}"#);
        let err = serde_json::from_str::<Grid>(&json).unwrap_err();
        assert!(err.to_string().contains("0 terrain cells for 9 positions"));
    }

    #[test]
    fn rejects_bad_endpoints() {
        let nine = serde_json::to_string(&vec![Terrain::Normal; 9]).unwrap();
        let outside = square(&nine, r#"{"x":3,"y":0}"#, "null");
        assert!(serde_json::from_str::<Grid>(&outside).is_err());
        let same = square(&nine, r#"{"x":1,"y":1}"#, r#"{"x":1,"y":1}"#);
        let err = serde_json::from_str::<Grid>(&same).unwrap_err();
        assert!(err.to_string().contains("already holds the other endpoint"));
        let ok = square(&nine, r#"{"x":1,"y":1}"#, "null");
        let g: Grid = serde_json::from_str(&ok).unwrap();
        assert_eq!(g.start(), Some(Point::at(1, 1)));
    }

    #[test]
    fn rejects_offset_bounds() {
        let json = r#"{"bounds":{"min":{"x":1,"y":0},"max":{"x":2,"y":1}},"terrain":["normal"],"start":null,"end":null}"#;
        let err = serde_json::from_str::<Grid>(json).unwrap_err();
        assert!(err.to_string().contains("not at the origin"));
    }
}
