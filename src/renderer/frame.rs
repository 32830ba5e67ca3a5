//! Per-frame snapshot handed to the render collaborator
//!
//! Everything a renderer needs to draw one frame, copied out of the run
//! state so drawing never holds a borrow on the simulation.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{FruitKind, GamePhase, Rect, RunState};

/// Scroll speed of each background layer relative to the camera
pub const PARALLAX_SPEEDS: [f32; 3] = [0.1, 0.3, 0.6];

#[derive(Debug, Clone, Serialize)]
pub struct PickupView {
    pub pos: Vec2,
    pub size: f32,
    pub kind: FruitKind,
    pub collected: bool,
    pub rotation: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub size: Vec2,
    pub airborne: bool,
    pub leg_rotation: f32,
    pub arm_rotation: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PopupView {
    pub text: String,
    pub pos: Vec2,
    pub alpha: f32,
}

/// Two copies of a tiling background layer, as screen x offsets
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParallaxOffsets {
    pub first: f32,
    pub second: f32,
}

/// Place a tiling layer of `layer_width` scrolling at `speed` for a camera at
/// world x `camera_x`
pub fn parallax_offsets(camera_x: f32, speed: f32, layer_width: f32) -> ParallaxOffsets {
    let first = -(camera_x * speed).rem_euclid(layer_width);
    ParallaxOffsets {
        first,
        second: first + layer_width,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub high_score: u64,
    pub viewport: Vec2,
    /// Horizontal translation applied to world coordinates
    pub camera_offset: f32,
    /// Active platforms, left to right
    pub platforms: Vec<Rect>,
    pub pickups: Vec<PickupView>,
    pub player: PlayerView,
    pub popups: Vec<PopupView>,
    pub parallax: Vec<ParallaxOffsets>,
}

impl FrameSnapshot {
    pub fn capture(state: &RunState) -> Self {
        let player = &state.player;
        let camera_offset = state.camera_offset();
        // World x at the left edge of the screen
        let camera_x = -camera_offset;

        Self {
            phase: state.phase,
            score: state.score,
            high_score: state.high_score,
            viewport: state.viewport,
            camera_offset,
            platforms: state.platforms.iter().map(|p| p.bounds).collect(),
            pickups: state
                .platforms
                .iter()
                .filter_map(|p| p.pickup.as_ref())
                .map(|pickup| PickupView {
                    pos: pickup.pos,
                    size: pickup.size,
                    kind: pickup.kind,
                    collected: pickup.is_collected(),
                    rotation: pickup.rotation,
                })
                .collect(),
            player: PlayerView {
                pos: player.pos,
                size: player.size,
                airborne: player.airborne,
                leg_rotation: player.animation.leg_rotation,
                arm_rotation: player.animation.arm_rotation,
            },
            popups: state
                .popups
                .iter()
                .map(|p| PopupView {
                    text: p.text.clone(),
                    pos: p.pos,
                    alpha: p.alpha(),
                })
                .collect(),
            parallax: PARALLAX_SPEEDS
                .iter()
                .map(|&speed| parallax_offsets(camera_x, speed, state.viewport.x))
                .collect(),
        }
    }

    /// Overlay text for the current phase, top to bottom
    pub fn hud_lines(&self) -> Vec<String> {
        match self.phase {
            GamePhase::TitleScreen => vec![
                "LEDGE RUNNER".to_string(),
                "Press SPACE to Start".to_string(),
            ],
            GamePhase::Playing => vec![
                format!("Score: {}", self.score),
                format!("High Score: {}", self.high_score),
            ],
            GamePhase::GameOver => vec![
                "GAME OVER".to_string(),
                format!("Final Score: {}", self.score),
                format!("High Score: {}", self.high_score),
                "Press SPACE to Play Again".to_string(),
                "Press ESC to Quit".to_string(),
            ],
        }
    }
}
