//! # Maze Grid
//!
//! The immutable tile grid parsed from a textual maze layout, with the
//! collision and exit queries used by the movement engine.

use crate::maze::layout::{is_wall_glyph, END_GLYPH, MARKER_GLYPH, START_GLYPH};
use crate::player::Direction;
use crate::{MazewalkError, MazewalkResult};
use serde::{Deserialize, Serialize};

/// Classification of a single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Open floor the player can move through
    Empty,
    /// Solid wall blocking movement
    Wall,
    /// Decorative path marker; collides like [`Tile::Empty`]
    Marker,
    /// The exit tile the player must reach
    Exit,
}

impl Tile {
    /// Reports whether the player can occupy this tile.
    pub fn is_walkable(self) -> bool {
        !matches!(self, Tile::Wall)
    }
}

/// A continuous (pixel-space) coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Creates a new point with the given coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An immutable rectangular grid of [`Tile`]s parsed from a maze layout.
///
/// The grid also records the start and end coordinates in continuous space.
/// Both use the same anchoring convention: x is centered within the tile,
/// y sits on the tile's top edge. The asymmetry is deliberate and matches
/// how the player token is drawn.
///
/// # Examples
///
/// ```
/// use mazewalk::maze::{MazeGrid, Tile};
///
/// let grid = MazeGrid::parse("───\nS·E\n───", 40.0).unwrap();
/// assert_eq!(grid.cols(), 3);
/// assert_eq!(grid.rows(), 3);
/// assert_eq!(grid.tile_at(2, 1), Some(Tile::Exit));
/// assert_eq!(grid.start_position().x, 20.0);
/// assert_eq!(grid.start_position().y, 40.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MazeGrid {
    tiles: Vec<Vec<Tile>>,
    rows: usize,
    cols: usize,
    tile_size: f32,
    start: Point,
    end: Point,
}

impl MazeGrid {
    /// Parses a multi-line layout string into a grid.
    ///
    /// Ragged rows are padded with [`Tile::Empty`] to the longest row, so the
    /// result is always rectangular. The layout must contain exactly one
    /// start glyph. If no end glyph is present, the exit is synthesized by
    /// scanning rows bottom-to-top and columns right-to-left for the first
    /// `Empty` or `Marker` tile; that scan order is a deliberate tie-break
    /// and part of the grid's contract.
    pub fn parse(layout: &str, tile_size: f32) -> MazewalkResult<Self> {
        if tile_size <= 0.0 {
            return Err(MazewalkError::InvalidConfig(format!(
                "tile size must be positive, got {tile_size}"
            )));
        }

        let mut tiles: Vec<Vec<Tile>> = Vec::new();
        let mut start: Option<Point> = None;
        let mut end: Option<Point> = None;

        for (row, line) in layout.lines().enumerate() {
            let mut cells = Vec::new();
            for (col, ch) in line.chars().enumerate() {
                let tile = if is_wall_glyph(ch) {
                    Tile::Wall
                } else if ch == MARKER_GLYPH {
                    Tile::Marker
                } else if ch == START_GLYPH {
                    if start.is_some() {
                        return Err(MazewalkError::InvalidLayout(
                            "layout contains more than one start glyph".to_string(),
                        ));
                    }
                    start = Some(Self::anchor(col, row, tile_size));
                    Tile::Empty
                } else if ch == END_GLYPH {
                    if end.is_some() {
                        return Err(MazewalkError::InvalidLayout(
                            "layout contains more than one end glyph".to_string(),
                        ));
                    }
                    end = Some(Self::anchor(col, row, tile_size));
                    Tile::Exit
                } else {
                    Tile::Empty
                };
                cells.push(tile);
            }
            tiles.push(cells);
        }

        let cols = tiles.iter().map(|row| row.len()).max().unwrap_or(0);
        let rows = tiles.len();
        if rows == 0 || cols == 0 {
            return Err(MazewalkError::InvalidLayout(
                "layout contains no tiles".to_string(),
            ));
        }
        for row in &mut tiles {
            row.resize(cols, Tile::Empty);
        }

        let start = start.ok_or_else(|| {
            MazewalkError::InvalidLayout("layout contains no start glyph".to_string())
        })?;

        let end = match end {
            Some(point) => point,
            None => Self::promote_fallback_exit(&mut tiles, tile_size)?,
        };

        Ok(Self {
            tiles,
            rows,
            cols,
            tile_size,
            start,
            end,
        })
    }

    /// Continuous coordinate anchored to a tile: x tile-centered, y
    /// tile-top-aligned.
    fn anchor(col: usize, row: usize, tile_size: f32) -> Point {
        Point::new(
            col as f32 * tile_size + tile_size / 2.0,
            row as f32 * tile_size,
        )
    }

    /// Promotes the first walkable tile found by the bottom-to-top,
    /// right-to-left scan to [`Tile::Exit`].
    fn promote_fallback_exit(
        tiles: &mut [Vec<Tile>],
        tile_size: f32,
    ) -> MazewalkResult<Point> {
        for (row, cells) in tiles.iter_mut().enumerate().rev() {
            for (col, tile) in cells.iter_mut().enumerate().rev() {
                if tile.is_walkable() {
                    *tile = Tile::Exit;
                    return Ok(Self::anchor(col, row, tile_size));
                }
            }
        }
        Err(MazewalkError::InvalidLayout(
            "layout has no walkable tile to promote to an exit".to_string(),
        ))
    }

    /// Number of tile rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of tile columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Edge length of a square tile in pixels.
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// The recorded start coordinate in continuous space.
    pub fn start_position(&self) -> Point {
        self.start
    }

    /// The recorded end coordinate in continuous space.
    pub fn end_position(&self) -> Point {
        self.end
    }

    /// Total grid width in pixels.
    pub fn pixel_width(&self) -> f32 {
        self.cols as f32 * self.tile_size
    }

    /// Total grid height in pixels.
    pub fn pixel_height(&self) -> f32 {
        self.rows as f32 * self.tile_size
    }

    /// Bounds-checked tile lookup. `None` is the out-of-bounds sentinel;
    /// callers never get an error for querying past the grid edge.
    pub fn tile_at(&self, col: i32, row: i32) -> Option<Tile> {
        if col < 0 || row < 0 {
            return None;
        }
        self.tiles
            .get(row as usize)
            .and_then(|cells| cells.get(col as usize))
            .copied()
    }

    /// Reports whether the cell holds the exit tile. Out-of-bounds queries
    /// are simply `false`.
    pub fn is_end_position(&self, col: i32, row: i32) -> bool {
        self.tile_at(col, row) == Some(Tile::Exit)
    }

    /// Reports whether the cell adjacent to `(col, row)` in `direction` is a
    /// wall. An out-of-bounds neighbor is NOT a wall: the grid edge is open
    /// by policy, and enclosing layouts are expected to carry their own
    /// border of wall tiles.
    pub fn wall_collision(&self, col: i32, row: i32, direction: Direction) -> bool {
        let (dx, dy) = direction.delta();
        self.tile_at(col + dx, row + dy) == Some(Tile::Wall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::layout::DEFAULT_LAYOUT;
    use crate::MazewalkError;

    const TILE: f32 = 40.0;

    #[test]
    fn test_parse_is_deterministic() {
        let first = MazeGrid::parse(DEFAULT_LAYOUT, TILE).unwrap();
        let second = MazeGrid::parse(DEFAULT_LAYOUT, TILE).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_glyph_classification_table() {
        // One row per glyph class, plus unclassified characters.
        let grid = MazeGrid::parse("─═·Sx E", TILE).unwrap();
        assert_eq!(grid.tile_at(0, 0), Some(Tile::Wall));
        assert_eq!(grid.tile_at(1, 0), Some(Tile::Wall));
        assert_eq!(grid.tile_at(2, 0), Some(Tile::Marker));
        assert_eq!(grid.tile_at(3, 0), Some(Tile::Empty)); // start glyph
        assert_eq!(grid.tile_at(4, 0), Some(Tile::Empty)); // unknown char
        assert_eq!(grid.tile_at(5, 0), Some(Tile::Empty)); // whitespace
        assert_eq!(grid.tile_at(6, 0), Some(Tile::Exit));
    }

    #[test]
    fn test_start_and_end_anchoring_is_asymmetric() {
        let grid = MazeGrid::parse("───\nS·E\n───", TILE).unwrap();
        // x centered in the tile, y aligned to the tile's top edge.
        assert_eq!(grid.start_position(), Point::new(20.0, 40.0));
        assert_eq!(grid.end_position(), Point::new(2.0 * TILE + 20.0, 40.0));
    }

    #[test]
    fn test_fallback_exit_scans_bottom_up_right_to_left() {
        let grid = MazeGrid::parse("S·\n··", TILE).unwrap();
        assert_eq!(grid.tile_at(1, 1), Some(Tile::Exit));
        assert_eq!(grid.end_position(), Point::new(TILE + 20.0, TILE));

        let mut exits = 0;
        for row in 0..grid.rows() as i32 {
            for col in 0..grid.cols() as i32 {
                if grid.tile_at(col, row) == Some(Tile::Exit) {
                    exits += 1;
                }
            }
        }
        assert_eq!(exits, 1);
    }

    #[test]
    fn test_fallback_exit_skips_walls() {
        // Bottom row is solid wall, so the scan must climb to the top row
        // and pick its rightmost walkable tile.
        let grid = MazeGrid::parse("S··\n───", TILE).unwrap();
        assert_eq!(grid.tile_at(2, 0), Some(Tile::Exit));
    }

    #[test]
    fn test_fallback_exit_can_land_on_the_start_tile() {
        let grid = MazeGrid::parse("──\n─S", TILE).unwrap();
        assert_eq!(grid.tile_at(1, 1), Some(Tile::Exit));
        assert_eq!(grid.end_position().x, grid.start_position().x);
    }

    #[test]
    fn test_ragged_rows_are_padded_with_empty() {
        let grid = MazeGrid::parse("┌────┐\nS·\n──", TILE).unwrap();
        assert_eq!(grid.cols(), 6);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.tile_at(5, 1), Some(Tile::Empty));
        assert_eq!(grid.tile_at(5, 2), Some(Tile::Exit)); // padding is walkable
    }

    #[test]
    fn test_out_of_bounds_queries_degrade() {
        let grid = MazeGrid::parse("S·\n··", TILE).unwrap();
        assert_eq!(grid.tile_at(-1, 0), None);
        assert_eq!(grid.tile_at(0, -1), None);
        assert_eq!(grid.tile_at(2, 0), None);
        assert_eq!(grid.tile_at(0, 2), None);
        assert!(!grid.is_end_position(-1, -1));
        assert!(!grid.is_end_position(5, 5));
    }

    #[test]
    fn test_wall_collision_matches_neighbor_tiles() {
        let grid = MazeGrid::parse("┌─┐\n│S│\n└─┘", TILE).unwrap();
        let (col, row) = (1, 1);
        assert_eq!(
            grid.wall_collision(col, row, Direction::Up),
            grid.tile_at(col, row - 1) == Some(Tile::Wall)
        );
        assert_eq!(
            grid.wall_collision(col, row, Direction::Down),
            grid.tile_at(col, row + 1) == Some(Tile::Wall)
        );
        assert_eq!(
            grid.wall_collision(col, row, Direction::Left),
            grid.tile_at(col - 1, row) == Some(Tile::Wall)
        );
        assert_eq!(
            grid.wall_collision(col, row, Direction::Right),
            grid.tile_at(col + 1, row) == Some(Tile::Wall)
        );
        assert!(grid.wall_collision(col, row, Direction::Up));
        assert!(grid.wall_collision(col, row, Direction::Down));
    }

    #[test]
    fn test_grid_edge_is_open_for_collision() {
        // No enclosing border: a neighbor past the edge is not a wall.
        let grid = MazeGrid::parse("S·\n··", TILE).unwrap();
        assert!(!grid.wall_collision(0, 0, Direction::Up));
        assert!(!grid.wall_collision(0, 0, Direction::Left));
        assert!(!grid.wall_collision(1, 1, Direction::Down));
        assert!(!grid.wall_collision(1, 1, Direction::Right));
    }

    #[test]
    fn test_queries_are_idempotent() {
        let grid = MazeGrid::parse(DEFAULT_LAYOUT, TILE).unwrap();
        for _ in 0..3 {
            assert_eq!(grid.tile_at(1, 1), Some(Tile::Empty));
            assert!(grid.wall_collision(1, 1, Direction::Up));
            assert!(grid.is_end_position(11, 7));
        }
    }

    #[test]
    fn test_missing_start_is_rejected() {
        let result = MazeGrid::parse("··\n··", TILE);
        assert!(matches!(result, Err(MazewalkError::InvalidLayout(_))));
    }

    #[test]
    fn test_duplicate_start_or_end_is_rejected() {
        assert!(MazeGrid::parse("SS", TILE).is_err());
        assert!(MazeGrid::parse("SEE", TILE).is_err());
    }

    #[test]
    fn test_empty_layout_is_rejected() {
        assert!(MazeGrid::parse("", TILE).is_err());
    }

    #[test]
    fn test_non_positive_tile_size_is_rejected() {
        assert!(matches!(
            MazeGrid::parse("S·", 0.0),
            Err(MazewalkError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_default_layout_parses() {
        let grid = MazeGrid::parse(DEFAULT_LAYOUT, TILE).unwrap();
        assert_eq!(grid.cols(), 13);
        assert_eq!(grid.rows(), 9);
        assert_eq!(grid.pixel_width(), 13.0 * TILE);
        assert_eq!(grid.pixel_height(), 9.0 * TILE);
        assert_eq!(grid.start_position(), Point::new(TILE + 20.0, TILE));
        assert!(grid.is_end_position(11, 7));
    }
}
