//! Player movement, jump arc and collision response
//!
//! Two orthogonal state machines: horizontal movement (driven directly by
//! held input, no inertia) and vertical jump (driven by the jump trigger and
//! a constant fall).

use serde::{Deserialize, Serialize};

use super::collision::{self, FrameContact, PlatformContact};
use super::platform::Platform;
use super::rect::Rect;
use crate::config::GameConfig;

/// Fall speed in px/ms. Independent of the configured vertical speed.
pub const FALL_RATE: f32 = 1.0;

/// Horizontal movement state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MovementState {
    #[default]
    Idle,
    MovingRight,
    MovingLeft,
}

/// Vertical jump state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JumpState {
    /// Standing on the floor before any jump
    #[default]
    Idle,
    JumpingUp,
    /// Falling, or resting on a platform (which re-snaps every frame)
    JumpingDown,
}

/// Result of resolving the player against the live platforms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformHits {
    /// Platform ids visited for the first time this frame
    pub new_visits: Vec<u32>,
    /// Player bumped its head on a platform
    pub bonked: bool,
    /// Player is standing on a platform
    pub grounded: bool,
}

/// The player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    pub movement: MovementState,
    pub jump: JumpState,
    /// Cleared on jump, set again on landing or touching a wall/floor
    pub allow_jumping: bool,
    /// Height risen so far in the current jump
    pub jump_height: f32,
    max_jump_height: f32,
    horizontal_speed: f32,
    vertical_speed: f32,
}

impl Player {
    /// Player standing on the floor, one body-width from the left wall
    pub fn new(config: &GameConfig) -> Self {
        let (w, h) = config.player_size;
        Self {
            rect: Rect::new(w, config.window_size.1 - h, w, h),
            movement: MovementState::Idle,
            jump: JumpState::Idle,
            allow_jumping: true,
            jump_height: 0.0,
            max_jump_height: config.max_jump_height,
            horizontal_speed: config.horizontal_movement_speed,
            vertical_speed: config.vertical_movement_speed,
        }
    }

    /// Apply held input. Returns true if a jump started.
    ///
    /// Left wins when both directions are held.
    pub fn handle_input(&mut self, right: bool, left: bool, jump: bool) -> bool {
        self.movement = MovementState::Idle;
        if right {
            self.movement = MovementState::MovingRight;
        }
        if left {
            self.movement = MovementState::MovingLeft;
        }

        if jump && self.allow_jumping {
            self.jump = JumpState::JumpingUp;
            self.jump_height = 0.0;
            self.allow_jumping = false;
            return true;
        }
        false
    }

    /// Move by the current velocity for `delta` ms
    pub fn integrate(&mut self, delta: f32) {
        match self.movement {
            MovementState::MovingRight => self.rect.pos.x += self.horizontal_speed * delta,
            MovementState::MovingLeft => self.rect.pos.x -= self.horizontal_speed * delta,
            MovementState::Idle => {}
        }

        match self.jump {
            JumpState::JumpingUp => {
                let rise = self.vertical_speed * delta;
                self.jump_height += rise;
                self.rect.pos.y -= rise;
                if self.jump_height > self.max_jump_height {
                    self.jump_height = 0.0;
                    self.jump = JumpState::JumpingDown;
                }
            }
            JumpState::JumpingDown => self.rect.pos.y += FALL_RATE * delta,
            JumpState::Idle => {}
        }
    }

    /// Clamp against the view edges. `view` is (width, height).
    pub fn resolve_frame(&mut self, view: (f32, f32)) -> FrameContact {
        let contact = collision::frame_contact(&self.rect, view);

        if contact.floor {
            self.rect.pos.y = view.1 - self.rect.height();
            self.allow_jumping = true;
        }
        if contact.right_wall {
            self.rect.pos.x = view.0 - self.rect.width();
            self.push_off_wall();
        }
        if contact.left_wall {
            self.rect.pos.x = 0.0;
            self.push_off_wall();
        }
        contact
    }

    fn push_off_wall(&mut self) {
        self.allow_jumping = true;
        self.jump_height = 0.0;
        self.jump = JumpState::JumpingDown;
    }

    /// Resolve contacts with every platform, marking landings as visited
    pub fn resolve_platforms(&mut self, platforms: &mut [Platform]) -> PlatformHits {
        let mut hits = PlatformHits::default();
        for platform in platforms.iter_mut() {
            match collision::platform_contact(&self.rect, &platform.rect) {
                Some(PlatformContact::FromBelow) => {
                    self.rect.pos.y = platform.rect.bottom();
                    self.jump = JumpState::JumpingDown;
                    hits.bonked = true;
                }
                Some(PlatformContact::FromAbove) => {
                    self.rect.pos.y = platform.rect.top() - self.rect.height();
                    self.jump = JumpState::JumpingDown;
                    self.allow_jumping = true;
                    hits.grounded = true;
                    if platform.visit() {
                        log::debug!("Visited platform {}", platform.id);
                        hits.new_visits.push(platform.id);
                    }
                }
                None => {}
            }
        }
        hits
    }

    pub fn max_jump_height(&self) -> f32 {
        self.max_jump_height
    }

    pub fn vertical_speed(&self) -> f32 {
        self.vertical_speed
    }
}
