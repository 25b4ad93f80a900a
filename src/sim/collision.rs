//! Collision detection between the player, platforms and the view edges
//!
//! Detection only: these functions report what touched what. The player
//! applies the response (snapping, state changes) in `player.rs`.

use super::rect::Rect;

/// Which side of a platform the player touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformContact {
    /// Player's head hit the platform's underside
    FromBelow,
    /// Player came down onto the platform's top
    FromAbove,
}

/// View edges the player reached this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameContact {
    pub floor: bool,
    pub left_wall: bool,
    pub right_wall: bool,
}

impl FrameContact {
    pub fn any_wall(&self) -> bool {
        self.left_wall || self.right_wall
    }
}

/// Horizontal overlap anchored at the player's edges.
///
/// True when either of the player's vertical edges lies within the platform's
/// horizontal span. A player wider than the platform on both sides does not
/// overlap.
#[inline]
pub fn horizontal_overlap(player: &Rect, platform: &Rect) -> bool {
    (player.left() <= platform.right() && player.left() >= platform.left())
        || (player.right() >= platform.left() && player.right() <= platform.right())
}

/// Player's head is inside the platform's vertical span
pub fn hits_from_below(player: &Rect, platform: &Rect) -> bool {
    player.top() <= platform.bottom()
        && player.top() >= platform.top()
        && horizontal_overlap(player, platform)
}

/// Player's feet are inside the platform's vertical span, head no more than
/// one player-height above its top
pub fn lands_from_above(player: &Rect, platform: &Rect) -> bool {
    player.top() >= platform.top() - player.height()
        && player.bottom() <= platform.bottom()
        && horizontal_overlap(player, platform)
}

/// Classify a player/platform contact. A head bump wins when both apply.
pub fn platform_contact(player: &Rect, platform: &Rect) -> Option<PlatformContact> {
    if hits_from_below(player, platform) {
        Some(PlatformContact::FromBelow)
    } else if lands_from_above(player, platform) {
        Some(PlatformContact::FromAbove)
    } else {
        None
    }
}

/// Check the view edges. `view` is (width, height).
pub fn frame_contact(player: &Rect, view: (f32, f32)) -> FrameContact {
    FrameContact {
        floor: player.bottom() >= view.1,
        right_wall: player.right() >= view.0,
        left_wall: player.left() <= 0.0,
    }
}
