//! Idle/demo mode: a simple AI that plays the game
//!
//! Picks the nearest unvisited platform above the player's feet, stands
//! beside it, jumps, and steers onto it once the feet clear its underside.

use super::collision::horizontal_overlap;
use super::platform::Platform;
use super::state::{GamePhase, GameState};
use super::tick::TickInput;

/// Produce this frame's input from the current state
pub fn drive(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    if matches!(state.phase, GamePhase::Paused | GamePhase::GameOver) {
        return input;
    }

    let player = &state.player;
    let Some(target) = pick_target(state) else {
        // Nothing to aim for: hop in place to get things moving
        input.jump = player.allow_jumping;
        return input;
    };

    let rect = player.rect;
    let goal = target.rect;
    let above_underside = rect.bottom() < goal.bottom();
    let under = horizontal_overlap(&rect, &goal);

    if player.allow_jumping {
        if under {
            // Step out from under the platform before jumping
            step_out(&mut input, state, target);
        } else {
            let gap = if rect.right() < goal.left() {
                goal.left() - rect.right()
            } else {
                rect.left() - goal.right()
            };
            input.jump = gap < rect.width();
            steer_toward(&mut input, rect.center().x, goal.center().x);
        }
    } else if above_underside {
        steer_toward(&mut input, rect.center().x, goal.center().x);
    } else if under {
        step_out(&mut input, state, target);
    }
    input
}

/// Lowest unvisited platform whose top is above the player's feet
fn pick_target(state: &GameState) -> Option<&Platform> {
    let feet = state.player.rect.bottom();
    state
        .field
        .platforms()
        .iter()
        .filter(|p| !p.visited && p.rect.top() < feet)
        .max_by(|a, b| {
            a.rect
                .top()
                .partial_cmp(&b.rect.top())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}

fn steer_toward(input: &mut TickInput, from: f32, to: f32) {
    const DEAD_ZONE: f32 = 4.0;
    if to - from > DEAD_ZONE {
        input.right = true;
    } else if from - to > DEAD_ZONE {
        input.left = true;
    }
}

/// Move toward whichever side of the platform has room
fn step_out(input: &mut TickInput, state: &GameState, target: &Platform) {
    let view_width = state.config.window_size.0;
    let room_left = target.rect.left();
    let room_right = view_width - target.rect.right();
    if room_left >= room_right {
        input.left = true;
    } else {
        input.right = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::tick::tick;

    #[test]
    fn test_idle_when_game_over() {
        let mut state = GameState::new(GameConfig::default(), 3, 0);
        state.phase = GamePhase::GameOver;
        let input = drive(&state);
        assert!(!input.jump && !input.left && !input.right);
    }

    #[test]
    fn test_steers_toward_target_when_airborne() {
        let mut state = GameState::new(GameConfig::default(), 3, 0);
        let target = state.field.platforms()[3].rect;
        state.player.allow_jumping = false;
        // Feet above the target's underside, far to one side of it
        state.player.rect.pos.y = target.bottom() - state.player.rect.height() - 10.0;
        if target.center().x > 250.0 {
            state.player.rect.pos.x = 0.0;
            assert!(drive(&state).right);
        } else {
            state.player.rect.pos.x = 460.0;
            assert!(drive(&state).left);
        }
    }

    #[test]
    fn test_autopilot_run_keeps_invariants() {
        let mut state = GameState::new(GameConfig::default(), 99, 0);
        let mut last_score = 0;
        for _ in 0..3000 {
            let input = drive(&state);
            tick(&mut state, &input, 1000.0 / 60.0);
            assert_eq!(state.field.len(), 4);
            assert!(state.score.score() >= last_score);
            last_score = state.score.score();
            let r = state.player.rect;
            assert!(r.left() >= 0.0 && r.right() <= 500.0);
            if state.is_game_over() {
                break;
            }
        }
        assert_ne!(state.phase, GamePhase::Ready);
    }
}
