//! # Input Module
//!
//! Maps host keyboard events to game commands.
//!
//! This is the collaborator-facing boundary of the engine: key presses
//! arrive asynchronously from macroquad, get collected once per frame, and
//! are handed to [`crate::Game::tick`] as plain [`PlayerInput`] values. Keys
//! outside the table below are ignored entirely.

use crate::player::Direction;
use macroquad::prelude::{is_key_pressed, KeyCode};

/// A single player command for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Request a direction change (buffered until the grid allows it)
    Turn(Direction),
    /// Reset the session to the maze start
    NewGame,
    /// Quit the game
    Quit,
}

/// Input handler for processing player commands.
///
/// Polls macroquad's key state once per frame and converts the arrow keys,
/// `R`, and `Escape` into [`PlayerInput`] values.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    pub fn new() -> Self {
        Self
    }

    /// Collects the commands pressed this frame, in a fixed key order.
    ///
    /// Multiple direction keys in one frame are all reported; the game
    /// applies them in order, so the last one wins.
    pub fn poll(&self) -> Vec<PlayerInput> {
        let mut inputs = Vec::new();

        if is_key_pressed(KeyCode::Escape) {
            inputs.push(PlayerInput::Quit);
        }
        if is_key_pressed(KeyCode::Up) {
            inputs.push(PlayerInput::Turn(Direction::Up));
        }
        if is_key_pressed(KeyCode::Down) {
            inputs.push(PlayerInput::Turn(Direction::Down));
        }
        if is_key_pressed(KeyCode::Left) {
            inputs.push(PlayerInput::Turn(Direction::Left));
        }
        if is_key_pressed(KeyCode::Right) {
            inputs.push(PlayerInput::Turn(Direction::Right));
        }
        if is_key_pressed(KeyCode::R) {
            inputs.push(PlayerInput::NewGame);
        }

        inputs
    }
}
