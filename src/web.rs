//! wasm bindings for a browser host
//!
//! The page owns the canvas, sprites and keyboard; it calls `step` once per
//! animation frame and draws from the JSON snapshot.

use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::game::Game;
use crate::highscores::LocalStorageHighScoreStore;
use crate::sim::TickInput;

/// Input bits accepted by [`WebGame::step`]
pub mod buttons {
    pub const RIGHT: u8 = 1 << 0;
    pub const LEFT: u8 = 1 << 1;
    pub const JUMP: u8 = 1 << 2;
    pub const PAUSE: u8 = 1 << 3;
    pub const RESTART: u8 = 1 << 4;
}

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Tower Climb (web) starting...");
}

#[wasm_bindgen]
pub struct WebGame {
    game: Game<LocalStorageHighScoreStore>,
}

#[wasm_bindgen]
impl WebGame {
    /// New session. `config_json` may be empty for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> WebGame {
        let config = if config_json.trim().is_empty() {
            GameConfig::default()
        } else {
            match GameConfig::from_json(config_json) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Bad config, using defaults: {}", e);
                    GameConfig::default()
                }
            }
        };
        let seed = js_sys::Date::now() as u64;
        WebGame {
            game: Game::new(config, seed, LocalStorageHighScoreStore),
        }
    }

    /// Run one frame with the given input bits and delta (ms)
    pub fn step(&mut self, input_bits: u8, delta_ms: f32) {
        let input = TickInput {
            right: input_bits & buttons::RIGHT != 0,
            left: input_bits & buttons::LEFT != 0,
            jump: input_bits & buttons::JUMP != 0,
            pause: input_bits & buttons::PAUSE != 0,
            restart: input_bits & buttons::RESTART != 0,
        };
        self.game.step(&input, delta_ms);
    }

    /// Current frame as JSON (see `sim::Snapshot`)
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.game.snapshot()).unwrap_or_default()
    }

    pub fn score(&self) -> u64 {
        self.game.state().score.score()
    }

    pub fn is_game_over(&self) -> bool {
        self.game.state().is_game_over()
    }
}
