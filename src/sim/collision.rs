//! Collision detection and response for axis-aligned bodies
//!
//! A moving body is tested against static obstacles using its proposed next
//! bounds. The kind of contact is decided from the body's bounds *before* the
//! move plus the sign of its velocity, and each axis is corrected on its own.

use glam::Vec2;

use super::rect::Rect;

/// Vertical contact against an obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalContact {
    /// Falling onto the obstacle top; value is the corrected center y
    Landing(f32),
    /// Rising into the obstacle bottom; value is the corrected center y
    HeadBump(f32),
}

/// Result of testing one obstacle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CollisionResult {
    pub vertical: Option<VerticalContact>,
    /// Corrected center x when moving forward into the obstacle's left face
    pub forward_blocked: Option<f32>,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self::default()
    }
}

/// Classify the contact between a moving body and one obstacle
///
/// `current` is the body's pre-move bounds, `next` its proposed bounds.
pub fn body_rect_collision(current: &Rect, next: &Rect, vel: Vec2, obstacle: &Rect) -> CollisionResult {
    if !next.intersects(obstacle) {
        return CollisionResult::miss();
    }

    let mut result = CollisionResult::miss();

    if vel.y > 0.0 && current.bottom() <= obstacle.top() {
        result.vertical = Some(VerticalContact::Landing(
            obstacle.top() - current.height / 2.0,
        ));
    } else if vel.y < 0.0 && current.top() >= obstacle.bottom() {
        result.vertical = Some(VerticalContact::HeadBump(
            obstacle.bottom() + current.height / 2.0,
        ));
    }

    if vel.x > 0.0 && current.right() <= obstacle.left() {
        result.forward_blocked = Some(obstacle.left() - current.width / 2.0);
    }

    result
}

/// Outcome of resolving a body's move against every obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Final body center
    pub pos: Vec2,
    /// Velocity with blocked components zeroed
    pub vel: Vec2,
    /// True if the body came to rest on top of an obstacle
    pub landed: bool,
    /// True if any obstacle produced a correction
    pub corrected: bool,
}

/// Move a body of `size` from `pos` by `vel`, resolving against `obstacles`
///
/// Obstacles are tested in order and the last correction wins on each axis.
/// Without any correction the naive integrated position is accepted.
pub fn resolve_move<'a>(
    pos: Vec2,
    vel: Vec2,
    size: Vec2,
    obstacles: impl IntoIterator<Item = &'a Rect>,
) -> Resolution {
    let next_pos = pos + vel;
    let current = Rect::centered(pos, size);
    let next = Rect::centered(next_pos, size);

    let mut vertical = None;
    let mut forward = None;
    for obstacle in obstacles {
        let result = body_rect_collision(&current, &next, vel, obstacle);
        if let Some(contact) = result.vertical {
            vertical = Some(contact);
        }
        if let Some(x) = result.forward_blocked {
            forward = Some(x);
        }
    }

    let mut out = Resolution {
        pos: next_pos,
        vel,
        landed: false,
        corrected: vertical.is_some() || forward.is_some(),
    };

    match vertical {
        Some(VerticalContact::Landing(y)) => {
            out.pos.y = y;
            out.vel.y = 0.0;
            out.landed = true;
        }
        Some(VerticalContact::HeadBump(y)) => {
            out.pos.y = y;
            out.vel.y = 0.0;
        }
        None => {}
    }
    if let Some(x) = forward {
        out.pos.x = x;
        out.vel.x = 0.0;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Vec2 = Vec2::new(20.0, 40.0);

    fn ground() -> Rect {
        Rect::new(0.0, 400.0, 400.0, 20.0)
    }

    #[test]
    fn test_miss_accepts_naive_move() {
        let res = resolve_move(
            Vec2::new(100.0, 100.0),
            Vec2::new(3.0, 2.0),
            SIZE,
            &[ground()],
        );
        assert!(!res.corrected);
        assert_eq!(res.pos, Vec2::new(103.0, 102.0));
        assert_eq!(res.vel, Vec2::new(3.0, 2.0));
    }

    #[test]
    fn test_landing_rests_on_top() {
        // Bottom at 395, falling 10 per tick
        let res = resolve_move(
            Vec2::new(100.0, 375.0),
            Vec2::new(3.0, 10.0),
            SIZE,
            &[ground()],
        );
        assert!(res.landed);
        assert_eq!(res.pos.y, 380.0);
        assert_eq!(res.pos.x, 103.0);
        assert_eq!(res.vel.y, 0.0);
        assert_eq!(res.vel.x, 3.0);
    }

    #[test]
    fn test_head_bump() {
        let ceiling = Rect::new(0.0, 100.0, 400.0, 20.0);
        // Top at 125, rising 8 per tick
        let res = resolve_move(
            Vec2::new(100.0, 145.0),
            Vec2::new(3.0, -8.0),
            SIZE,
            &[ceiling],
        );
        assert!(!res.landed);
        assert!(res.corrected);
        assert_eq!(res.pos.y, 140.0);
        assert_eq!(res.vel.y, 0.0);
    }

    #[test]
    fn test_forward_blocked() {
        let wall = Rect::new(200.0, 0.0, 20.0, 400.0);
        // Right edge at 198
        let res = resolve_move(
            Vec2::new(188.0, 200.0),
            Vec2::new(5.0, 0.0),
            SIZE,
            &[wall],
        );
        assert!(res.corrected);
        assert_eq!(res.pos.x, 190.0);
        assert_eq!(res.vel.x, 0.0);
    }

    #[test]
    fn test_no_leftward_handling() {
        let wall = Rect::new(50.0, 0.0, 20.0, 400.0);
        let res = resolve_move(
            Vec2::new(82.0, 200.0),
            Vec2::new(-5.0, 0.0),
            SIZE,
            &[wall],
        );
        assert!(!res.corrected);
        assert_eq!(res.pos.x, 77.0);
    }

    #[test]
    fn test_last_correction_wins() {
        let low = Rect::new(0.0, 400.0, 400.0, 20.0);
        let high = Rect::new(0.0, 398.0, 400.0, 20.0);
        let res = resolve_move(
            Vec2::new(100.0, 375.0),
            Vec2::new(0.0, 10.0),
            SIZE,
            [&low, &high],
        );
        assert_eq!(res.pos.y, 378.0);
    }

    #[test]
    fn test_overlap_without_classification_is_ignored() {
        // Already embedded: current bottom is below the top
        let res = resolve_move(
            Vec2::new(100.0, 390.0),
            Vec2::new(0.0, 1.0),
            SIZE,
            &[ground()],
        );
        assert!(!res.corrected);
        assert_eq!(res.pos.y, 391.0);
    }
}
