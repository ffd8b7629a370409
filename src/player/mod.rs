//! # Player Module
//!
//! The mobile agent: a continuous position advanced one axis-aligned step
//! per tick, constrained by the discrete maze grid.
//!
//! Direction changes are buffered rather than applied instantly. A reversal
//! is always honored immediately; a turn is honored only once the agent sits
//! exactly on a tile boundary and the destination tile is open. This is what
//! produces the smooth "rails" feel: the agent may commit to a tile and must
//! finish traversing into it before it can be blocked or turned.

use crate::maze::{MazeGrid, Point};
use serde::{Deserialize, Serialize};

/// The four cardinal movement directions.
///
/// A closed set with an explicit opposite relation, so the reversal rule in
/// the movement arbitration stays auditable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the exact reversal of this direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazewalk::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// ```
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Reports whether `other` is the exact reversal of this direction.
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Returns the `(dcol, drow)` cell delta for one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// The player-controlled token.
///
/// Owns a continuous position in the same pixel space as the grid, a fixed
/// speed, the direction currently being executed, and the most recent
/// requested direction. It holds no reference to the grid; every step
/// borrows the grid it is constrained by.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    x: f32,
    y: f32,
    speed: f32,
    direction: Direction,
    requested_direction: Direction,
}

impl Player {
    /// Creates a player at `position` moving in `direction`.
    ///
    /// The requested direction starts out equal to the active one, so the
    /// agent has a well-defined direction from the very first tick.
    pub fn new(position: Point, speed: f32, direction: Direction) -> Self {
        Self {
            x: position.x,
            y: position.y,
            speed,
            direction,
            requested_direction: direction,
        }
    }

    /// Current continuous position.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Speed in pixels per tick.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// The direction currently being executed.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The buffered direction request awaiting arbitration.
    pub fn requested_direction(&self) -> Direction {
        self.requested_direction
    }

    /// Buffers a direction request. Never mutates the active direction;
    /// committal happens inside [`Player::step`]. Last write wins.
    pub fn change_direction(&mut self, direction: Direction) {
        self.requested_direction = direction;
    }

    /// Teleports the player and resets both directions, used when a game
    /// restarts.
    pub fn respawn(&mut self, position: Point, direction: Direction) {
        self.x = position.x;
        self.y = position.y;
        self.direction = direction;
        self.requested_direction = direction;
    }

    /// The grid cell currently containing the player, by floored division.
    pub fn cell(&self, tile_size: f32) -> (i32, i32) {
        (
            (self.x / tile_size).floor() as i32,
            (self.y / tile_size).floor() as i32,
        )
    }

    /// Whether the position divides evenly by the tile size on both axes.
    ///
    /// Positions stay exactly representable because the configured speed
    /// divides the tile size, so the comparison against zero is exact.
    fn is_tile_aligned(&self, tile_size: f32) -> bool {
        self.x % tile_size == 0.0 && self.y % tile_size == 0.0
    }

    /// Advances the player one tick against `grid`.
    ///
    /// First arbitrates the buffered direction request: reversals commit
    /// immediately, turns only at exact tile alignment into open space.
    /// Then attempts the motion step: movement is blocked only when the
    /// player is tile-aligned with a wall directly ahead; a mid-tile player
    /// always completes its traversal into the tile it committed to.
    pub fn step(&mut self, grid: &MazeGrid) {
        let tile_size = grid.tile_size();
        let (col, row) = self.cell(tile_size);
        let aligned = self.is_tile_aligned(tile_size);

        if self.requested_direction != self.direction {
            let reversal = self.direction.is_opposite(self.requested_direction);
            let open_turn = aligned && !grid.wall_collision(col, row, self.requested_direction);
            if reversal || open_turn {
                self.direction = self.requested_direction;
            }
        }

        let blocked = aligned && grid.wall_collision(col, row, self.direction);
        if !blocked {
            let (dx, dy) = self.direction.delta();
            self.x += dx as f32 * self.speed;
            self.y += dy as f32 * self.speed;
        }
    }

    /// Reports whether the player occupies, or orthogonally neighbors, the
    /// exit tile.
    ///
    /// The one-tile tolerance is required: the continuous position does not
    /// necessarily land exactly on the exit's boundary, and without it an
    /// approach past the exit's corner could fail to register.
    pub fn reached_exit(&self, grid: &MazeGrid) -> bool {
        let (col, row) = self.cell(grid.tile_size());
        if grid.is_end_position(col, row) {
            return true;
        }
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
        .iter()
        .any(|direction| {
            let (dx, dy) = direction.delta();
            grid.is_end_position(col + dx, row + dy)
        })
    }
}
