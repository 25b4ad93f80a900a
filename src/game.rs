//! A play session: simulation state plus high-score storage
//!
//! The host calls [`Game::step`] once per frame with held input and the frame
//! delta, then reads [`Game::state`] or [`Game::snapshot`] to draw.

use crate::config::GameConfig;
use crate::highscores::HighScoreStore;
use crate::sim::{GameEvent, GameState, Snapshot, TickInput, tick};

pub struct Game<S: HighScoreStore> {
    state: GameState,
    store: S,
}

impl<S: HighScoreStore> Game<S> {
    /// Start a session; the high score is read from the store once, here
    pub fn new(config: GameConfig, seed: u64, store: S) -> Self {
        let high_score = store.load();
        Self {
            state: GameState::new(config, seed, high_score),
            store,
        }
    }

    /// Run one frame. Returns the events it produced.
    pub fn step(&mut self, input: &TickInput, delta_ms: f32) -> Vec<GameEvent> {
        tick(&mut self.state, input, delta_ms);
        let events = self.state.drain_events();

        for event in &events {
            if let GameEvent::GameOver {
                new_high_score: Some(score),
                ..
            } = event
            {
                if let Err(e) = self.store.save(*score) {
                    log::error!("Failed to save high score {}: {}", score, e);
                }
            }
        }
        events
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GameError, GameResult};
    use crate::highscores::MemoryHighScoreStore;

    struct BrokenStore;

    impl HighScoreStore for BrokenStore {
        fn load(&self) -> u64 {
            0
        }

        fn save(&mut self, _score: u64) -> GameResult<()> {
            Err(GameError::StorageUnavailable)
        }
    }

    fn run_to_game_over<S: HighScoreStore>(game: &mut Game<S>, visits: usize) -> Vec<GameEvent> {
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        game.step(&jump, 16.0);
        for _ in 0..visits {
            game.state_mut().score.increment();
        }
        let mut events = Vec::new();
        while !game.state().is_game_over() {
            events.extend(game.step(&TickInput::default(), 16.0));
        }
        events
    }

    #[test]
    fn test_high_score_loaded_once() {
        let game = Game::new(GameConfig::default(), 1, MemoryHighScoreStore::with_contents("90"));
        assert_eq!(game.state().score.high_score(), 90);
    }

    #[test]
    fn test_saves_only_when_beaten() {
        let mut game = Game::new(GameConfig::default(), 1, MemoryHighScoreStore::with_contents("90"));
        run_to_game_over(&mut game, 3);
        assert!(game.store().saves.is_empty());

        let mut game = Game::new(GameConfig::default(), 1, MemoryHighScoreStore::with_contents("90"));
        run_to_game_over(&mut game, 12);
        assert_eq!(game.store().saves, vec![120]);
        assert_eq!(game.store().load(), 120);
    }

    #[test]
    fn test_store_failure_does_not_stop_the_game() {
        let mut game = Game::new(GameConfig::default(), 1, BrokenStore);
        let events = run_to_game_over(&mut game, 2);
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::GameOver {
                new_high_score: Some(20),
                ..
            }
        )));
        assert!(game.state().is_game_over());
    }
}
