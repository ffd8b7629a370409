//! # Game Module
//!
//! The per-tick game session: one maze grid, one player, one latched win
//! flag.
//!
//! The whole simulation advances through [`Game::tick`], which takes the
//! inputs gathered since the last frame and applies them deterministically:
//! buffered direction requests first (last write wins), then a single motion
//! step, then the win check. Decoupling the state machine from the real
//! frame scheduler keeps every movement rule testable without timing
//! dependencies.

pub mod config;

pub use config::GameConfig;

use crate::input::PlayerInput;
use crate::maze::MazeGrid;
use crate::player::{Direction, Player};
use crate::MazewalkResult;
use log::{debug, info};

/// Direction the player faces when a session starts or restarts.
const INITIAL_DIRECTION: Direction = Direction::Right;

/// A running game session.
///
/// The grid is immutable for the session's lifetime; the player is the only
/// mutable piece of state, and it is mutated exclusively by [`Game::tick`].
#[derive(Debug, Clone)]
pub struct Game {
    grid: MazeGrid,
    player: Player,
    won: bool,
}

impl Game {
    /// Parses `layout` and starts a session with the player at the maze's
    /// start coordinate.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazewalk::{Game, GameConfig, DEFAULT_LAYOUT};
    ///
    /// let game = Game::from_layout(DEFAULT_LAYOUT, &GameConfig::default()).unwrap();
    /// assert!(!game.won());
    /// ```
    pub fn from_layout(layout: &str, config: &GameConfig) -> MazewalkResult<Self> {
        config.validate()?;
        let grid = MazeGrid::parse(layout, config.tile_size)?;
        info!(
            "Maze parsed: {}x{} tiles, start {:?}, exit {:?}",
            grid.cols(),
            grid.rows(),
            grid.start_position(),
            grid.end_position()
        );
        let player = Player::new(grid.start_position(), config.player_speed, INITIAL_DIRECTION);
        Ok(Self {
            grid,
            player,
            won: false,
        })
    }

    /// The maze grid for this session.
    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    /// The player token.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Whether the win condition has latched. Once true, ticks no longer
    /// move the player; only a restart clears it.
    pub fn won(&self) -> bool {
        self.won
    }

    /// Advances the session by one tick.
    ///
    /// Inputs are applied in arrival order, so the last direction request in
    /// a frame wins. The motion step and win check are skipped entirely once
    /// the session is won; rendering may keep running against the frozen
    /// state.
    pub fn tick(&mut self, inputs: &[PlayerInput]) {
        for input in inputs {
            match input {
                PlayerInput::Turn(direction) => self.player.change_direction(*direction),
                PlayerInput::NewGame => self.restart(),
                PlayerInput::Quit => {}
            }
        }

        if self.won {
            return;
        }

        self.player.step(&self.grid);

        if self.player.reached_exit(&self.grid) {
            self.won = true;
            info!("Player reached the exit at {:?}", self.player.position());
        }
    }

    /// Puts the player back at the start and clears the win latch. The grid
    /// is never rebuilt.
    pub fn restart(&mut self) {
        debug!("Restarting game session");
        self.player
            .respawn(self.grid.start_position(), INITIAL_DIRECTION);
        self.won = false;
    }
}
