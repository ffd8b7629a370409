//! # Maze Module
//!
//! Maze representation: glyph classification, layout parsing, and the
//! immutable tile grid with its collision queries.
//!
//! The grid is passive and stateless with respect to the player: it is
//! constructed once from a layout literal and only ever answers read-only
//! queries afterwards, so it can be shared freely by reference.

pub mod grid;
pub mod layout;

pub use grid::{MazeGrid, Point, Tile};
pub use layout::{
    is_wall_glyph, DEFAULT_LAYOUT, EMPTY_GLYPH, END_GLYPH, MARKER_GLYPH, START_GLYPH, WALL_GLYPHS,
};
