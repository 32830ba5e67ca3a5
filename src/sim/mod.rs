//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (platforms left to right)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod level;
pub mod pickup;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, Resolution, VerticalContact, body_rect_collision, resolve_move};
pub use level::{LevelGenerator, Platform, cull, cull_threshold, look_ahead_x};
pub use pickup::{FruitKind, Pickup, Popup};
pub use player::{JumpKind, JumpState, LimbAnimation, PlayerBody, StepReport};
pub use rect::Rect;
pub use state::{EndReason, GameEvent, GamePhase, RunState};
pub use tick::{TickInput, TickOutcome, tick};
