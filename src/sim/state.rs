//! Game state and the render-facing snapshot
//!
//! `GameState` owns the platform field, the player and the score keeper as
//! siblings; `tick` moves data between them explicitly.

use serde::{Deserialize, Serialize};

use super::animation::{AnimationState, Animator};
use super::platform::{Platform, PlatformField};
use super::player::Player;
use super::rect::Rect;
use super::score::ScoreKeeper;
use crate::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// On the floor, field still, waiting for the first jump
    Ready,
    /// Field scrolling
    Climbing,
    /// Paused by the player
    Paused,
    /// Fell to the bottom while climbing
    GameOver,
}

/// Things that happened during a tick, for audio/UI hooks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    /// First landing on a platform
    PlatformVisited { platform_id: u32, score: u64 },
    LevelUp { level: u32, speed_multiplier: f32 },
    BoosterActivated,
    BoosterExpired,
    Paused,
    Resumed,
    /// `new_high_score` is set when the final score beat the stored one
    GameOver { score: u64, new_high_score: Option<u64> },
    Restarted,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Run seed for the platform generator
    pub seed: u64,
    pub phase: GamePhase,
    pub field: PlatformField,
    pub player: Player,
    pub score: ScoreKeeper,
    pub animator: Animator,
    /// Simulated frames this run
    pub time_ticks: u64,
    events: Vec<GameEvent>,
}

impl GameState {
    /// New run with a populated platform field
    pub fn new(config: GameConfig, seed: u64, high_score: u64) -> Self {
        let mut field = PlatformField::new(&config, seed);
        field.initialize();
        Self {
            seed,
            phase: GamePhase::Ready,
            field,
            player: Player::new(&config),
            score: ScoreKeeper::new(&config, high_score),
            animator: Animator::new(config.sprite_fps),
            time_ticks: 0,
            events: Vec::new(),
            config,
        }
    }

    /// Record an event for the host
    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Everything the renderer needs for one frame
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: self.player.rect,
            animation: self.animator.state(),
            animation_frame: self.animator.frame(),
            platforms: self.field.platforms().to_vec(),
            score: self.score.score(),
            high_score: self.score.high_score(),
            level: self.score.level(),
            speed_multiplier: self.score.base_speed_multiplier(),
            booster: self.score.booster_on(),
            phase: self.phase,
            frame: self.time_ticks,
        }
    }
}

/// Read-only view of a frame for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player: Rect,
    pub animation: AnimationState,
    pub animation_frame: u32,
    pub platforms: Vec<Platform>,
    pub score: u64,
    pub high_score: u64,
    pub level: u32,
    pub speed_multiplier: f32,
    pub booster: bool,
    pub phase: GamePhase,
    /// Frames simulated this run, excluding paused and game-over frames
    pub frame: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(GameConfig::default(), 5, 120);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.field.len(), 4);
        assert_eq!(state.score.high_score(), 120);
        assert!(!state.field.is_scrolling());
    }

    #[test]
    fn test_unvalidated_config_builds_a_field() {
        let config: GameConfig =
            serde_json::from_str(r#"{"platform_width_fraction":[0.8,0.2]}"#).unwrap();
        let state = GameState::new(config, 1, 0);
        assert_eq!(state.field.len(), 4);
    }

    #[test]
    fn test_snapshot_counts_frames() {
        let mut state = GameState::new(GameConfig::default(), 5, 0);
        for _ in 0..3 {
            crate::sim::tick(&mut state, &crate::sim::TickInput::default(), 16.0);
        }
        assert_eq!(state.snapshot().frame, 3);
    }

    #[test]
    fn test_drain_events() {
        let mut state = GameState::new(GameConfig::default(), 5, 0);
        state.push_event(GameEvent::Jumped);
        assert_eq!(state.drain_events(), vec![GameEvent::Jumped]);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(GameConfig::default(), 5, 0);
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"Ready\""));
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.platforms.len(), 4);
    }
}
