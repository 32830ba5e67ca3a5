//! Ledge Runner - An endless side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, level generation, run state)
//! - `renderer`: Frame snapshots and vertex data for the render collaborator
//! - `audio`: Fire-and-forget speech output
//! - `tuning`: Data-driven game balance
//! - `settings`: Runner preferences
//! - `clock`: Fixed timestep driver

pub mod audio;
pub mod clock;
pub mod highscores;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, velocities are per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the clock will accept (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 480.0;
    /// Camera keeps the player this far into the viewport
    pub const CAMERA_LEAD: f32 = 0.3;
    /// Platforms are generated this many viewports ahead of the player
    pub const LOOK_AHEAD_VIEWPORTS: f32 = 1.5;
    /// Platforms are culled this many viewports behind the player
    pub const CULL_BEHIND_VIEWPORTS: f32 = 0.5;

    /// Player body size
    pub const PLAYER_WIDTH: f32 = 20.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    /// Player spawn point (body center)
    pub const SPAWN_X: f32 = 100.0;
    pub const SPAWN_Y: f32 = 100.0;
    /// Full jump budget restored on landing
    pub const MAX_JUMPS: u8 = 2;

    /// Movement (units per tick)
    pub const GRAVITY: f32 = 0.5;
    pub const CRUISE_SPEED: f32 = 3.0;
    pub const SPRINT_SPEED: f32 = 5.0;
    pub const PRIMARY_JUMP_IMPULSE: f32 = -12.0;
    pub const SECONDARY_JUMP_IMPULSE: f32 = -15.0;

    /// Falling below this y ends the run (y grows downward)
    pub const DEATH_Y_THRESHOLD: f32 = 800.0;

    /// Starting platform (no gap roll)
    pub const START_PLATFORM_X: f32 = 50.0;
    pub const START_PLATFORM_Y: f32 = 400.0;
    pub const START_PLATFORM_WIDTH: f32 = 400.0;
    /// Generated platforms placed right after the start platform
    pub const INITIAL_PLATFORMS: usize = 5;

    /// Level generation
    pub const MIN_PLATFORM_GAP: f32 = 100.0;
    pub const MAX_PLATFORM_GAP: f32 = 250.0;
    pub const PLATFORM_BASE_Y: f32 = 300.0;
    pub const PLATFORM_Y_VARIATION: f32 = 100.0;
    pub const MIN_PLATFORM_WIDTH: f32 = 100.0;
    pub const MAX_PLATFORM_WIDTH: f32 = 200.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;

    /// Pickups
    pub const PICKUP_CHANCE: f64 = 0.5;
    pub const PICKUP_MARGIN: f32 = 40.0;
    pub const PICKUP_SIZE: f32 = 24.0;
    pub const PICKUP_REWARD: u64 = 5;
}
