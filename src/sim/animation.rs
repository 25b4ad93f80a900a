//! Animation intent for the renderer
//!
//! The core never draws; it only tells the renderer which of six animation
//! categories to play and which frame of it is current.

use serde::{Deserialize, Serialize};

use super::player::{JumpState, MovementState};

/// Animation categories the renderer knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimationState {
    #[default]
    Idle,
    MovingRight,
    MovingLeft,
    JumpingRight,
    JumpingLeft,
    JumpingNeutral,
}

impl AnimationState {
    /// Pick the category for the current motion
    pub fn from_motion(movement: MovementState, jump: JumpState) -> Self {
        match (jump, movement) {
            (JumpState::JumpingUp, MovementState::MovingRight) => AnimationState::JumpingRight,
            (JumpState::JumpingUp, MovementState::MovingLeft) => AnimationState::JumpingLeft,
            (JumpState::JumpingUp, MovementState::Idle) => AnimationState::JumpingNeutral,
            (_, MovementState::MovingRight) => AnimationState::MovingRight,
            (_, MovementState::MovingLeft) => AnimationState::MovingLeft,
            (_, MovementState::Idle) => AnimationState::Idle,
        }
    }

    /// Frames in this category's sprite strip
    pub fn frame_count(&self) -> u32 {
        match self {
            AnimationState::Idle => 3,
            AnimationState::MovingRight
            | AnimationState::MovingLeft
            | AnimationState::JumpingRight
            | AnimationState::JumpingLeft => 4,
            AnimationState::JumpingNeutral => 1,
        }
    }

    /// Whether the renderer should mirror the strip horizontally
    pub fn mirrored(&self) -> bool {
        matches!(self, AnimationState::MovingLeft | AnimationState::JumpingLeft)
    }
}

/// Cycles frame indices of the current animation at a fixed sprite rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animator {
    state: AnimationState,
    frame: u32,
    timer_ms: f32,
    frame_ms: f32,
}

impl Animator {
    pub fn new(sprite_fps: f32) -> Self {
        Self {
            state: AnimationState::Idle,
            frame: 0,
            timer_ms: 0.0,
            frame_ms: 1000.0 / sprite_fps,
        }
    }

    /// Switch category; restarts from frame 0 when it changes
    pub fn set_state(&mut self, state: AnimationState) {
        if self.state != state {
            self.state = state;
            self.frame = 0;
        }
    }

    /// Advance the frame timer by `delta` ms
    pub fn advance(&mut self, delta: f32) {
        self.timer_ms += delta;
        if self.timer_ms >= self.frame_ms {
            self.frame = (self.frame + 1) % self.state.frame_count();
            self.timer_ms = 0.0;
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_motion() {
        use AnimationState as A;
        use JumpState as J;
        use MovementState as M;
        assert_eq!(A::from_motion(M::Idle, J::Idle), A::Idle);
        assert_eq!(A::from_motion(M::MovingRight, J::JumpingDown), A::MovingRight);
        assert_eq!(A::from_motion(M::MovingLeft, J::JumpingUp), A::JumpingLeft);
        assert_eq!(A::from_motion(M::MovingRight, J::JumpingUp), A::JumpingRight);
        assert_eq!(A::from_motion(M::Idle, J::JumpingUp), A::JumpingNeutral);
    }

    #[test]
    fn test_frames_wrap() {
        let mut anim = Animator::new(12.0);
        // Idle has 3 frames, one every ~83ms
        for expected in [1, 2, 0, 1] {
            anim.advance(90.0);
            assert_eq!(anim.frame(), expected);
        }
    }

    #[test]
    fn test_state_change_resets_frame() {
        let mut anim = Animator::new(12.0);
        anim.advance(90.0);
        assert_eq!(anim.frame(), 1);
        anim.set_state(AnimationState::MovingLeft);
        assert_eq!(anim.frame(), 0);
        assert!(anim.state().mirrored());
        // Same state again keeps the frame
        anim.advance(90.0);
        anim.set_state(AnimationState::MovingLeft);
        assert_eq!(anim.frame(), 1);
    }

    #[test]
    fn test_single_frame_strip() {
        let mut anim = Animator::new(12.0);
        anim.set_state(AnimationState::JumpingNeutral);
        anim.advance(100.0);
        anim.advance(100.0);
        assert_eq!(anim.frame(), 0);
    }
}
