//! Bonus pickups and their collection popups

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Bob cycle speed (radians per second)
const BOB_SPEED: f32 = 2.0;
/// Bob amplitude (world units)
const BOB_HEIGHT: f32 = 10.0;
/// Spin speed (radians per second)
const ROTATION_SPEED: f32 = 2.0;

/// Reward kinds; cosmetic only, every kind is worth the same
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FruitKind {
    Apple,
    Banana,
    Cherry,
    Grape,
    Orange,
    Pear,
    Strawberry,
    Watermelon,
}

impl FruitKind {
    pub const ALL: [FruitKind; 8] = [
        FruitKind::Apple,
        FruitKind::Banana,
        FruitKind::Cherry,
        FruitKind::Grape,
        FruitKind::Orange,
        FruitKind::Pear,
        FruitKind::Strawberry,
        FruitKind::Watermelon,
    ];

    /// Name shown in popups and spoken on collection
    pub fn display_name(&self) -> &'static str {
        match self {
            FruitKind::Apple => "Apple",
            FruitKind::Banana => "Banana",
            FruitKind::Cherry => "Cherry",
            FruitKind::Grape => "Grape",
            FruitKind::Orange => "Orange",
            FruitKind::Pear => "Pear",
            FruitKind::Strawberry => "Strawberry",
            FruitKind::Watermelon => "Watermelon",
        }
    }
}

/// A collectible floating above a platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: FruitKind,
    /// Rest position the bob oscillates around
    pub anchor: Vec2,
    /// Current (bobbed) center
    pub pos: Vec2,
    pub size: f32,
    collected: bool,
    bob_phase: f32,
    pub rotation: f32,
}

impl Pickup {
    pub fn new(kind: FruitKind, anchor: Vec2, size: f32) -> Self {
        Self {
            kind,
            anchor,
            pos: anchor,
            size,
            collected: false,
            bob_phase: 0.0,
            rotation: 0.0,
        }
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered(self.pos, Vec2::splat(self.size))
    }

    /// Bob and spin; a collected pickup freezes
    pub fn animate(&mut self, dt: f32) {
        if self.collected {
            return;
        }
        self.bob_phase += dt * BOB_SPEED;
        self.pos.y = self.anchor.y + self.bob_phase.sin() * BOB_HEIGHT;
        self.rotation += dt * ROTATION_SPEED;
    }

    /// Collect if `body` overlaps; returns true only on the first collection
    pub fn try_collect(&mut self, body: &Rect) -> bool {
        if self.collected || !self.bounds().intersects(body) {
            return false;
        }
        self.collected = true;
        true
    }
}

/// Seconds a popup stays alive
const POPUP_LIFETIME: f32 = 1.0;
/// Age at which a popup starts fading
const POPUP_FADE_START: f32 = 0.7;
/// Popup rise speed (units per second, negative is up)
const POPUP_RISE_SPEED: f32 = -100.0;

/// Floating text shown where a pickup was collected
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Popup {
    pub text: String,
    pub pos: Vec2,
    age: f32,
}

impl Popup {
    pub fn new(text: impl Into<String>, pos: Vec2) -> Self {
        Self {
            text: text.into(),
            pos,
            age: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.age += dt;
        self.pos.y += POPUP_RISE_SPEED * dt;
    }

    pub fn is_expired(&self) -> bool {
        self.age >= POPUP_LIFETIME
    }

    /// Opacity in [0, 1]
    pub fn alpha(&self) -> f32 {
        if self.age <= POPUP_FADE_START {
            1.0
        } else {
            (1.0 - (self.age - POPUP_FADE_START) / (POPUP_LIFETIME - POPUP_FADE_START)).clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_once() {
        let mut pickup = Pickup::new(FruitKind::Cherry, Vec2::new(100.0, 100.0), 24.0);
        let body = Rect::new(95.0, 95.0, 20.0, 40.0);
        assert!(pickup.try_collect(&body));
        assert!(pickup.is_collected());
        assert!(!pickup.try_collect(&body));
    }

    #[test]
    fn test_miss_does_not_collect() {
        let mut pickup = Pickup::new(FruitKind::Apple, Vec2::new(100.0, 100.0), 24.0);
        let body = Rect::new(300.0, 95.0, 20.0, 40.0);
        assert!(!pickup.try_collect(&body));
        assert!(!pickup.is_collected());
    }

    #[test]
    fn test_bob_stays_near_anchor() {
        let mut pickup = Pickup::new(FruitKind::Grape, Vec2::new(0.0, 50.0), 24.0);
        for _ in 0..500 {
            pickup.animate(1.0 / 60.0);
            assert!((pickup.pos.y - 50.0).abs() <= BOB_HEIGHT + 1e-3);
            assert_eq!(pickup.pos.x, 0.0);
        }
        assert!(pickup.rotation > 0.0);
    }

    #[test]
    fn test_collected_pickup_freezes() {
        let mut pickup = Pickup::new(FruitKind::Pear, Vec2::new(0.0, 0.0), 24.0);
        pickup.try_collect(&Rect::new(-5.0, -5.0, 10.0, 10.0));
        let pos = pickup.pos;
        pickup.animate(0.5);
        assert_eq!(pickup.pos, pos);
    }

    #[test]
    fn test_popup_rises_and_fades() {
        let mut popup = Popup::new("Banana", Vec2::new(0.0, 100.0));
        popup.update(0.5);
        assert!(popup.pos.y < 100.0);
        assert_eq!(popup.alpha(), 1.0);
        popup.update(0.35);
        assert!(popup.alpha() < 1.0 && popup.alpha() > 0.0);
        assert!(!popup.is_expired());
        popup.update(0.2);
        assert!(popup.is_expired());
    }
}
