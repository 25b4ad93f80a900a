//! Per-frame simulation step
//!
//! Order within a frame: input, horizontal and vertical motion, view edges,
//! platforms, field scroll, clock. Later stages read positions written by
//! earlier ones, so the order is fixed.

use super::animation::AnimationState;
use super::state::{GameEvent, GamePhase, GameState};

/// Held input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub right: bool,
    pub left: bool,
    pub jump: bool,
    /// Pause toggle (one-shot)
    pub pause: bool,
    /// Start a new run after game over (one-shot)
    pub restart: bool,
}

/// Advance the game state by one frame of `delta` ms
pub fn tick(state: &mut GameState, input: &TickInput, delta: f32) {
    // A zero delta would stall every time-based accumulator
    let delta = if delta == 0.0 {
        state.config.nominal_frame_ms()
    } else {
        delta
    };

    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Ready | GamePhase::Climbing => {
                state.phase = GamePhase::Paused;
                state.score.pause();
                state.push_event(GameEvent::Paused);
                return;
            }
            GamePhase::Paused => {
                state.phase = if state.field.is_scrolling() {
                    GamePhase::Climbing
                } else {
                    GamePhase::Ready
                };
                state.score.resume();
                state.push_event(GameEvent::Resumed);
            }
            GamePhase::GameOver => {}
        }
    }

    match state.phase {
        GamePhase::Paused => return,
        GamePhase::GameOver => {
            if input.restart {
                restart(state);
            } else {
                state.score.tick(delta);
            }
            return;
        }
        GamePhase::Ready | GamePhase::Climbing => {}
    }

    state.time_ticks += 1;

    // Input: movement intent and jump trigger
    if state.player.handle_input(input.right, input.left, input.jump) {
        state.push_event(GameEvent::Jumped);
    }
    if input.jump && !state.field.is_scrolling() {
        state.field.set_scrolling(true);
        state.phase = GamePhase::Climbing;
        log::info!("Climb started");
    }

    // Motion
    state.player.integrate(delta);
    state
        .animator
        .set_state(AnimationState::from_motion(state.player.movement, state.player.jump));
    state.animator.advance(delta);

    // View edges
    let contact = state.player.resolve_frame(state.config.window_size);
    if contact.floor && state.field.is_scrolling() {
        if state.score.tick(delta) {
            state.push_event(GameEvent::BoosterExpired);
        }
        game_over(state);
        return;
    }

    // Platforms
    let hits = state.player.resolve_platforms(state.field.platforms_mut());
    for platform_id in hits.new_visits {
        let outcome = state.score.increment();
        state.push_event(GameEvent::PlatformVisited {
            platform_id,
            score: state.score.score(),
        });
        if outcome.booster_activated {
            state.push_event(GameEvent::BoosterActivated);
        }
        if let Some(level) = outcome.level_up {
            state.push_event(GameEvent::LevelUp {
                level,
                speed_multiplier: state.score.base_speed_multiplier(),
            });
        }
    }

    // Scroll
    let speed = state.score.speed_multiplier();
    state.field.step(delta, speed);

    // Clock
    if state.score.tick(delta) {
        state.push_event(GameEvent::BoosterExpired);
    }
}

fn game_over(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    state.score.pause();
    let new_high_score = state.score.record_high_score();
    log::info!(
        "Game over: score {}, level {}{}",
        state.score.score(),
        state.score.level(),
        if new_high_score.is_some() {
            " (new high score)"
        } else {
            ""
        }
    );
    state.push_event(GameEvent::GameOver {
        score: state.score.score(),
        new_high_score,
    });
}

/// Replace the run with a fresh one, keeping the high score
fn restart(state: &mut GameState) {
    let seed = state.seed.wrapping_mul(2654435761).wrapping_add(1);
    let high_score = state.score.high_score();
    let events = state.drain_events();
    *state = GameState::new(state.config.clone(), seed, high_score);
    for event in events {
        state.push_event(event);
    }
    state.push_event(GameEvent::Restarted);
    log::info!("New run (seed {})", seed);
}
