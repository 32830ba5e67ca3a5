//! Procedural platform generation
//!
//! Terrain is produced left to right: the generator remembers the right edge
//! of the last platform it made (the frontier) and keeps appending platforms
//! until the frontier is far enough ahead of the player. Platforms that fall
//! far enough behind are culled by the caller.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::pickup::{FruitKind, Pickup};
use super::rect::Rect;
use crate::consts::{CULL_BEHIND_VIEWPORTS, LOOK_AHEAD_VIEWPORTS};
use crate::tuning::LevelTuning;

/// A static platform, optionally carrying one pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub bounds: Rect,
    pub pickup: Option<Pickup>,
}

impl Platform {
    pub fn new(bounds: Rect) -> Self {
        debug_assert!(bounds.width > 0.0 && bounds.height > 0.0);
        Self {
            bounds,
            pickup: None,
        }
    }
}

/// Frontier x the generator must reach for a player at `player_x`
pub fn look_ahead_x(player_x: f32, viewport_width: f32) -> f32 {
    player_x + viewport_width * LOOK_AHEAD_VIEWPORTS
}

/// Platforms whose right edge is left of this x may be discarded
pub fn cull_threshold(player_x: f32, viewport_width: f32) -> f32 {
    player_x - viewport_width * CULL_BEHIND_VIEWPORTS
}

/// Remove every platform that ended too far behind the player
///
/// Returns the removed platforms in their original order.
pub fn cull(platforms: &mut Vec<Platform>, player_x: f32, viewport_width: f32) -> Vec<Platform> {
    let threshold = cull_threshold(player_x, viewport_width);
    let (keep, removed): (Vec<_>, Vec<_>) = platforms
        .drain(..)
        .partition(|p| p.bounds.right() >= threshold);
    *platforms = keep;
    removed
}

/// Endless platform generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelGenerator {
    tuning: LevelTuning,
    last_platform_right: f32,
}

impl LevelGenerator {
    pub fn new(tuning: LevelTuning) -> Self {
        let last_platform_right = tuning.start_x;
        Self {
            tuning,
            last_platform_right,
        }
    }

    /// Right edge of the most recently created platform
    pub fn frontier(&self) -> f32 {
        self.last_platform_right
    }

    /// Rewind to the launch zone: the wide start platform followed by a
    /// fixed number of generated ones
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Platform> {
        let t = &self.tuning;
        let start = Platform::new(Rect::new(
            t.start_x,
            t.start_y,
            t.start_width,
            t.platform_height,
        ));
        self.last_platform_right = start.bounds.right();

        let mut platforms = Vec::with_capacity(1 + t.initial_platforms);
        platforms.push(start);
        for _ in 0..self.tuning.initial_platforms {
            platforms.push(self.next_platform(rng));
        }
        platforms
    }

    /// Produce platforms until the frontier reaches `required_ahead_x`
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R, required_ahead_x: f32) -> Vec<Platform> {
        let mut platforms = Vec::new();
        while self.last_platform_right < required_ahead_x {
            platforms.push(self.next_platform(rng));
        }
        if !platforms.is_empty() {
            log::trace!(
                "Generated {} platforms, frontier now {:.0}",
                platforms.len(),
                self.last_platform_right
            );
        }
        platforms
    }

    /// Roll one platform past the frontier and advance it
    pub fn next_platform<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Platform {
        let t = &self.tuning;
        let gap = rng.random_range(t.min_gap..=t.max_gap);
        let offset = rng.random_range(-t.y_variation..=t.y_variation);
        let width = rng.random_range(t.min_width..=t.max_width);

        let mut platform = Platform::new(Rect::new(
            self.last_platform_right + gap,
            t.base_y + offset,
            width,
            t.platform_height,
        ));

        if rng.random_bool(t.pickup_chance) {
            let kind = FruitKind::ALL[rng.random_range(0..FruitKind::ALL.len())];
            let anchor = Vec2::new(
                platform.bounds.center().x,
                platform.bounds.top() - t.pickup_margin,
            );
            platform.pickup = Some(Pickup::new(kind, anchor, t.pickup_size));
        }

        // A zero gap with a degenerate width would stall the frontier
        debug_assert!(platform.bounds.right() > self.last_platform_right);
        self.last_platform_right = platform.bounds.right();
        platform
    }
}
