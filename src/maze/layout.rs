//! # Maze Layouts
//!
//! Glyph classification for textual maze layouts and the built-in maze.
//!
//! A layout is a plain multi-line string where each character classifies one
//! tile. Wall tiles are drawn with the single-line box-drawing set plus the
//! auxiliary double-line glyph, so a layout literal reads like the maze it
//! produces.

/// Glyph marking the player's starting tile. The tile itself is empty; only
/// the start coordinate is recorded.
pub const START_GLYPH: char = 'S';

/// Glyph marking the exit tile.
pub const END_GLYPH: char = 'E';

/// Decorative path-marker glyph. Rendered distinctly but passable, exactly
/// like an empty tile.
pub const MARKER_GLYPH: char = '·';

/// Explicit empty-path glyph. Classified the same as any unrecognized
/// character, but useful for making open corridors visible in a literal.
pub const EMPTY_GLYPH: char = ' ';

/// Box-drawing glyphs classified as walls, plus the auxiliary double-line
/// glyph `═`.
pub const WALL_GLYPHS: [char; 12] = [
    '┌', '┐', '└', '┘', '─', '│', '├', '┤', '┬', '┴', '┼', '═',
];

/// Reports whether a layout character draws a wall tile.
///
/// # Examples
///
/// ```
/// use mazewalk::maze::layout::is_wall_glyph;
///
/// assert!(is_wall_glyph('─'));
/// assert!(is_wall_glyph('═'));
/// assert!(!is_wall_glyph('·'));
/// assert!(!is_wall_glyph('x'));
/// ```
pub fn is_wall_glyph(ch: char) -> bool {
    WALL_GLYPHS.contains(&ch)
}

/// The built-in maze shipped with the game.
///
/// 13 columns by 9 rows, fully enclosed by walls. `S` marks the start in the
/// upper-left chamber and `E` the exit in the lower-right corner.
pub const DEFAULT_LAYOUT: &str = "\
┌───────────┐
│S····│·····│
│·───·│·───·│
│·····│·····│
│──┐·───·┌──│
│··│·····│··│
│·─┴──·──┴─·│
│··········E│
└───────────┘";
