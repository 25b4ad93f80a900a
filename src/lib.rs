//! Tower Climb - a vertical platformer arcade game core
//!
//! Core modules:
//! - `sim`: Frame simulation (player physics, platform field, scoring)
//! - `game`: Play session tying the simulation to high-score storage
//! - `highscores`: High score persistence (file / LocalStorage)
//! - `config`: Data-driven game tuning
//! - `web`: wasm bindings for a browser host

pub mod config;
pub mod error;
pub mod game;
pub mod highscores;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use game::Game;
pub use highscores::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore};

/// Default locations and limits
pub mod consts {
    /// Config file read by the native binary, relative to the working directory
    pub const CONFIG_PATH: &str = "tower_climb.json";
    /// Frames the headless demo runs before giving up
    pub const DEMO_MAX_FRAMES: u64 = 60 * 60 * 5;
}
