//! # Display Management
//!
//! Screen management and 2D graphics rendering using macroquad.

use crate::config::STATUS_BAR_HEIGHT;
use crate::game::Game;
use crate::maze::{MazeGrid, Tile};
use crate::player::Player;
use macroquad::prelude::*;

/// Wall tile fill color.
const WALL_COLOR: Color = DARKBLUE;
/// Exit tile fill color.
const EXIT_COLOR: Color = GREEN;
/// Path-marker dot color.
const MARKER_COLOR: Color = GRAY;
/// Player token color.
const PLAYER_COLOR: Color = YELLOW;

/// Macroquad display manager for the game.
///
/// Sizes the canvas from the grid (`cols * tile_size` by `rows * tile_size`,
/// plus a status bar) and renders one full frame per call: filled rectangles
/// for wall and exit tiles, a small dot for path markers, a circle for the
/// player, and a status line underneath the maze.
pub struct MazewalkDisplay {
    tile_size: f32,
}

impl MazewalkDisplay {
    /// Creates the display and requests a canvas sized to the grid.
    pub fn new(grid: &MazeGrid) -> Self {
        request_new_screen_size(
            grid.pixel_width(),
            grid.pixel_height() + STATUS_BAR_HEIGHT,
        );
        Self {
            tile_size: grid.tile_size(),
        }
    }

    /// Renders the complete game screen for the current frame.
    pub fn render(&self, game: &Game) {
        clear_background(BLACK);
        self.render_maze(game.grid());
        self.render_player(game.player());
        self.render_status(game);
    }

    fn render_maze(&self, grid: &MazeGrid) {
        for row in 0..grid.rows() as i32 {
            for col in 0..grid.cols() as i32 {
                let Some(tile) = grid.tile_at(col, row) else {
                    continue;
                };
                let x = col as f32 * self.tile_size;
                let y = row as f32 * self.tile_size;
                match tile {
                    Tile::Wall => {
                        draw_rectangle(x, y, self.tile_size, self.tile_size, WALL_COLOR);
                    }
                    Tile::Exit => {
                        draw_rectangle(x, y, self.tile_size, self.tile_size, EXIT_COLOR);
                    }
                    Tile::Marker => {
                        draw_circle(
                            x + self.tile_size / 2.0,
                            y + self.tile_size / 2.0,
                            self.tile_size * 0.08,
                            MARKER_COLOR,
                        );
                    }
                    Tile::Empty => {}
                }
            }
        }
    }

    fn render_player(&self, player: &Player) {
        // The player's x is already tile-centered; y is top-aligned, so the
        // circle center sits half a tile lower.
        let position = player.position();
        draw_circle(
            position.x,
            position.y + self.tile_size / 2.0,
            self.tile_size * 0.35,
            PLAYER_COLOR,
        );
    }

    fn render_status(&self, game: &Game) {
        let y = game.grid().pixel_height() + STATUS_BAR_HEIGHT * 0.6;
        let text = if game.won() {
            "You escaped the maze! Press R to play again."
        } else {
            "Arrow keys to move, R to restart, ESC to quit."
        };
        draw_text(text, 8.0, y, 24.0, WHITE);
    }
}
