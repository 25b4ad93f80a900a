//! Simulation module
//!
//! All gameplay logic lives here. No rendering, audio or platform code:
//! - Frame delta supplied by the host, in ms
//! - Seeded RNG only (platform generator)
//! - One tick per rendered frame

pub mod animation;
pub mod autopilot;
pub mod collision;
pub mod platform;
pub mod player;
pub mod rect;
pub mod score;
pub mod state;
pub mod tick;

pub use animation::{AnimationState, Animator};
pub use collision::{FrameContact, PlatformContact, horizontal_overlap};
pub use platform::{Platform, PlatformField};
pub use player::{JumpState, MovementState, Player};
pub use rect::Rect;
pub use score::ScoreKeeper;
pub use state::{GameEvent, GamePhase, GameState, Snapshot};
pub use tick::{TickInput, tick};
