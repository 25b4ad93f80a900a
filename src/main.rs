//! Tower Climb entry point
//!
//! The native build has no window: it runs a headless autopilot session at
//! the target frame rate and reports the result.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use tower_climb::consts::{CONFIG_PATH, DEMO_MAX_FRAMES};
    use tower_climb::sim::{GameEvent, autopilot};
    use tower_climb::{FileHighScoreStore, Game, GameConfig};

    env_logger::init();
    log::info!("Tower Climb (native) starting...");

    let config = GameConfig::load_or_default(CONFIG_PATH);
    let store = FileHighScoreStore::new(&config.score_file_path);
    let frame_ms = config.nominal_frame_ms();
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut game = Game::new(config, seed, store);
    log::info!("Seed {}, high score {}", seed, game.state().score.high_score());

    for _ in 0..DEMO_MAX_FRAMES {
        let input = autopilot::drive(game.state());
        for event in game.step(&input, frame_ms) {
            match event {
                GameEvent::LevelUp { level, speed_multiplier } => {
                    log::info!("Level {} (speed x{})", level, speed_multiplier)
                }
                GameEvent::BoosterActivated => log::debug!("Booster on"),
                GameEvent::BoosterExpired => log::debug!("Booster off"),
                _ => {}
            }
        }
        if game.state().is_game_over() {
            break;
        }
    }

    let snapshot = game.snapshot();
    println!(
        "Score: {}  Level: {}  Speed x{}  High score: {}",
        snapshot.score, snapshot.level, snapshot.speed_multiplier, snapshot.high_score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::wasm_main, this is just to satisfy the compiler
}
