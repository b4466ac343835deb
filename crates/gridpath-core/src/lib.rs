//! **gridpath-core**: grid model for pathfinding visualisation.
//!
//! This crate provides the durable data every search runs against: geometry
//! primitives, terrain with its traversal weights, and the [`Grid`] itself
//! with start/end placement, click-style authoring and a plain-text map
//! format.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod scatter;
pub mod terrain;

pub use cell::Cell;
pub use geom::{Point, Range, RangeIter};
pub use grid::{Brush, Grid, GridError, PaintEffect};
pub use scatter::Scatter;
pub use terrain::{IMPASSABLE, Terrain};
