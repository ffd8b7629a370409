//! # Mazewalk Main Entry Point
//!
//! Parses command line arguments, loads the maze layout and configuration,
//! and runs the macroquad frame loop: poll input, tick the game, render.

use clap::Parser;
use log::info;
use macroquad::prelude::next_frame;
use mazewalk::{
    Game, GameConfig, InputHandler, MazewalkDisplay, MazewalkResult, PlayerInput, DEFAULT_LAYOUT,
};
use std::path::PathBuf;

/// Command line arguments for Mazewalk.
#[derive(Parser, Debug)]
#[command(name = "mazewalk")]
#[command(about = "A tile-based maze navigation game")]
#[command(version)]
struct Args {
    /// Path to a maze layout file (defaults to the built-in maze)
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// Path to a JSON game configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[macroquad::main("Mazewalk")]
async fn main() -> MazewalkResult<()> {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    info!("Starting Mazewalk v{}", mazewalk::VERSION);

    let config = match &args.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };

    let layout = match &args.layout {
        Some(path) => {
            info!("Loading maze layout from {}", path.display());
            std::fs::read_to_string(path)?
        }
        None => DEFAULT_LAYOUT.to_string(),
    };

    let mut game = Game::from_layout(&layout, &config)?;
    let input_handler = InputHandler::new();
    let display = MazewalkDisplay::new(game.grid());

    loop {
        let inputs = input_handler.poll();
        if inputs.contains(&PlayerInput::Quit) {
            info!("Player quit the game");
            break;
        }

        game.tick(&inputs);
        display.render(&game);

        next_frame().await;
    }

    info!("Game loop ended");
    Ok(())
}

/// Initializes env_logger at the requested level.
fn initialize_logging(log_level: &str) {
    let level = log_level
        .parse::<log::LevelFilter>()
        .unwrap_or(log::LevelFilter::Info);
    let _ = env_logger::Builder::new().filter_level(level).try_init();
}
