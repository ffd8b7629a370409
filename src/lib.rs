//! # Mazewalk
//!
//! A tile-based maze navigation game. A player-controlled token glides
//! through a grid parsed from an ASCII-art maze layout, avoiding walls,
//! until it reaches the exit tile.
//!
//! ## Architecture Overview
//!
//! The crate is split into a small number of focused modules:
//!
//! - **Maze**: parsing a textual layout into an immutable tile grid, with
//!   wall-adjacency and exit queries
//! - **Player**: the mobile agent — continuous position, buffered direction
//!   changes, and tile-aligned collision arbitration
//! - **Game**: the per-tick session state machine that wires player input,
//!   movement, and win detection together deterministically
//! - **Input**: mapping macroquad key events to game commands
//! - **Rendering**: macroquad-based drawing of the grid and the player
//!
//! Game logic never touches the window or the clock directly: the whole
//! simulation advances through [`Game::tick`], so every rule can be
//! exercised in tests without a frame scheduler.

pub mod game;
pub mod input;
pub mod maze;
pub mod player;
pub mod rendering;

pub use game::{Game, GameConfig};
pub use input::{InputHandler, PlayerInput};
pub use maze::{MazeGrid, Point, Tile, DEFAULT_LAYOUT};
pub use player::{Direction, Player};
pub use rendering::MazewalkDisplay;

/// Core error type for the Mazewalk game engine.
#[derive(thiserror::Error, Debug)]
pub enum MazewalkError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Maze layout could not be turned into a playable grid
    #[error("Invalid maze layout: {0}")]
    InvalidLayout(String),

    /// Game configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the Mazewalk codebase.
pub type MazewalkResult<T> = Result<T, MazewalkError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Default edge length of a square maze tile, in pixels
    pub const DEFAULT_TILE_SIZE: f32 = 40.0;

    /// Default player speed in pixels per tick
    pub const DEFAULT_PLAYER_SPEED: f32 = 2.0;

    /// Height in pixels reserved below the maze for status text
    pub const STATUS_BAR_HEIGHT: f32 = 48.0;
}
