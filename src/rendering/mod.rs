//! # Rendering Module
//!
//! Macroquad-based drawing of the maze grid, the player token, and the
//! status line. Pure drawing: all coordinates and colors are computed here
//! from immutable game state, no game logic lives in this module.

pub mod display;

pub use display::MazewalkDisplay;
