//! Player body: run, jump, fall, land
//!
//! Velocities are expressed in world units per tick, so integration is a
//! plain `pos + vel` with no timestep scaling.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::resolve_move;
use super::rect::Rect;
use crate::consts::MAX_JUMPS;
use crate::tuning::PhysicsTuning;

/// Seconds per animation frame
const ANIMATION_FRAME_SECS: f32 = 0.1;
/// Frames in one run cycle
const ANIMATION_FRAMES: u8 = 4;
/// Largest limb swing (radians)
pub const MAX_LIMB_ROTATION: f32 = 0.4;

/// Where the player is in its jump budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JumpState {
    /// Full budget (restored by the most recent landing)
    Grounded,
    /// One jump spent
    FirstJump,
    /// Both jumps spent
    SecondJump,
}

/// Which impulse a jump used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JumpKind {
    Primary,
    Secondary,
}

/// Run-cycle limb animation (visual only)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LimbAnimation {
    running_time: f32,
    frame: u8,
    swing_forward: bool,
    pub leg_rotation: f32,
    pub arm_rotation: f32,
}

impl LimbAnimation {
    /// Advance the run cycle; an airborne body holds a fixed pose
    pub fn advance(&mut self, dt: f32, airborne: bool) {
        self.running_time += dt;
        if self.running_time >= ANIMATION_FRAME_SECS {
            self.frame = (self.frame + 1) % ANIMATION_FRAMES;
            self.running_time = 0.0;
            self.swing_forward = !self.swing_forward;
        }

        if airborne {
            self.leg_rotation = MAX_LIMB_ROTATION;
            self.arm_rotation = -MAX_LIMB_ROTATION * 0.5;
            return;
        }

        let progress = f32::from(self.frame) / f32::from(ANIMATION_FRAMES);
        let (from, to) = if self.swing_forward {
            (-MAX_LIMB_ROTATION, MAX_LIMB_ROTATION)
        } else {
            (MAX_LIMB_ROTATION, -MAX_LIMB_ROTATION)
        };
        self.leg_rotation = from + (to - from) * progress;
        // Arms swing opposite to legs
        self.arm_rotation = -self.leg_rotation;
    }
}

/// What happened to the body during one update
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepReport {
    pub jumped: Option<JumpKind>,
    pub landed: bool,
}

/// The player-controlled avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerBody {
    /// Body center
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub jumps_remaining: u8,
    pub airborne: bool,
    pub animation: LimbAnimation,
}

impl PlayerBody {
    pub fn new(spawn: Vec2, size: Vec2) -> Self {
        Self {
            pos: spawn,
            vel: Vec2::ZERO,
            size,
            jumps_remaining: MAX_JUMPS,
            airborne: false,
            animation: LimbAnimation::default(),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered(self.pos, self.size)
    }

    pub fn jump_state(&self) -> JumpState {
        match self.jumps_remaining {
            0 => JumpState::SecondJump,
            n if n < MAX_JUMPS => JumpState::FirstJump,
            _ => JumpState::Grounded,
        }
    }

    /// Spend a jump if any remain, returning which impulse was applied
    pub fn try_jump(&mut self, physics: &PhysicsTuning) -> Option<JumpKind> {
        if self.jumps_remaining == 0 {
            return None;
        }
        let kind = if self.jumps_remaining == MAX_JUMPS {
            JumpKind::Primary
        } else {
            JumpKind::Secondary
        };
        self.vel.y = match kind {
            JumpKind::Primary => physics.primary_jump_impulse,
            JumpKind::Secondary => physics.secondary_jump_impulse,
        };
        self.jumps_remaining -= 1;
        self.airborne = true;
        Some(kind)
    }

    /// Advance one tick
    ///
    /// `jump` must already be edge-triggered; holding the button is the
    /// caller's concern.
    pub fn update<'a>(
        &mut self,
        sprint: bool,
        jump: bool,
        dt: f32,
        physics: &PhysicsTuning,
        obstacles: impl IntoIterator<Item = &'a Rect>,
    ) -> StepReport {
        let mut report = StepReport::default();

        self.vel.x = if sprint {
            physics.sprint_speed
        } else {
            physics.cruise_speed
        };

        if jump {
            report.jumped = self.try_jump(physics);
        }

        // Gravity applies every tick, including ticks that end on the ground
        self.vel.y += physics.gravity;

        let res = resolve_move(self.pos, self.vel, self.size, obstacles);
        self.pos = res.pos;
        self.vel = res.vel;
        if res.landed {
            self.jumps_remaining = MAX_JUMPS;
            self.airborne = false;
            report.landed = true;
        } else {
            self.airborne = true;
        }
        debug_assert!(self.jumps_remaining <= MAX_JUMPS);

        self.animation.advance(dt, self.airborne);

        report
    }
}
