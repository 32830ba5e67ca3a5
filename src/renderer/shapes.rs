//! Shape generation for 2D primitives

use glam::Vec2;

use super::frame::{FrameSnapshot, PlayerView};
use super::vertex::{Vertex, colors};
use crate::sim::{FruitKind, GamePhase, Rect};

const ARM_SIZE: Vec2 = Vec2::new(8.0, 20.0);
const LEG_SIZE: Vec2 = Vec2::new(8.0, 25.0);
const POPUP_PLATE_WIDTH: f32 = 60.0;
/// Dimming behind title and game-over text
const OVERLAY_ALPHA: f32 = 0.6;

fn fruit_color(kind: FruitKind) -> [f32; 4] {
    match kind {
        FruitKind::Apple => [0.9, 0.1, 0.1, 1.0],
        FruitKind::Banana => [1.0, 0.9, 0.3, 1.0],
        FruitKind::Cherry => [0.7, 0.0, 0.2, 1.0],
        FruitKind::Grape => [0.5, 0.2, 0.7, 1.0],
        FruitKind::Orange => [1.0, 0.6, 0.1, 1.0],
        FruitKind::Pear => [0.7, 0.85, 0.3, 1.0],
        FruitKind::Strawberry => [1.0, 0.3, 0.4, 1.0],
        FruitKind::Watermelon => [0.2, 0.6, 0.2, 1.0],
    }
}

fn quad(corners: [Vec2; 4], color: [f32; 4], vertices: &mut Vec<Vertex>) {
    let [a, b, c, d] = corners;
    for p in [a, b, c, c, d, a] {
        vertices.push(Vertex::new(p.x, p.y, color));
    }
}

/// Axis-aligned rectangle as two triangles
pub fn rect(bounds: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    quad(
        [
            Vec2::new(bounds.left(), bounds.top()),
            Vec2::new(bounds.right(), bounds.top()),
            Vec2::new(bounds.right(), bounds.bottom()),
            Vec2::new(bounds.left(), bounds.bottom()),
        ],
        color,
        &mut vertices,
    );
    vertices
}

/// Rectangle hanging from `pivot` (its top-center), swung by `angle` radians
pub fn rotated_rect(pivot: Vec2, size: Vec2, angle: f32, color: [f32; 4]) -> Vec<Vertex> {
    let rot = Vec2::from_angle(angle);
    let half_w = size.x * 0.5;
    let corners = [
        Vec2::new(-half_w, 0.0),
        Vec2::new(half_w, 0.0),
        Vec2::new(half_w, size.y),
        Vec2::new(-half_w, size.y),
    ]
    .map(|c| pivot + rot.rotate(c));

    let mut vertices = Vec::with_capacity(6);
    quad(corners, color, &mut vertices);
    vertices
}

/// Square spun about its center
fn spinning_square(center: Vec2, size: f32, angle: f32, color: [f32; 4]) -> Vec<Vertex> {
    let rot = Vec2::from_angle(angle);
    let h = size * 0.5;
    let corners = [
        Vec2::new(-h, -h),
        Vec2::new(h, -h),
        Vec2::new(h, h),
        Vec2::new(-h, h),
    ]
    .map(|c| center + rot.rotate(c));

    let mut vertices = Vec::with_capacity(6);
    quad(corners, color, &mut vertices);
    vertices
}

/// Body, arms and legs; right-side limbs swing opposite the left
pub fn player(view: &PlayerView) -> Vec<Vertex> {
    let mut vertices = rect(&Rect::centered(view.pos, view.size), colors::BODY);

    for side in [-1.0f32, 1.0] {
        let swing = -side;
        vertices.extend(rotated_rect(
            view.pos + Vec2::new(10.0 * side, -10.0),
            ARM_SIZE,
            view.arm_rotation * swing,
            colors::ARMS,
        ));
        vertices.extend(rotated_rect(
            view.pos + Vec2::new(5.0 * side, 20.0),
            LEG_SIZE,
            view.leg_rotation * swing,
            colors::LEGS,
        ));
    }
    vertices
}

/// Everything in a frame, in draw order, in screen coordinates
pub fn frame_vertices(frame: &FrameSnapshot) -> Vec<Vertex> {
    let vw = frame.viewport.x;
    let vh = frame.viewport.y;
    let shift = Vec2::new(frame.camera_offset, 0.0);

    let mut vertices = rect(&Rect::new(0.0, 0.0, vw, vh), colors::SKY);

    for (i, layer) in frame.parallax.iter().enumerate() {
        let color = colors::PARALLAX[i % colors::PARALLAX.len()];
        let top = vh * (0.5 + 0.1 * i as f32);
        for x in [layer.first, layer.second] {
            vertices.extend(rect(&Rect::new(x, top, vw, vh - top), color));
        }
    }

    for platform in &frame.platforms {
        let on_screen = Rect {
            x: platform.x + frame.camera_offset,
            ..*platform
        };
        vertices.extend(rect(&on_screen, colors::PLATFORM));
    }

    for pickup in frame.pickups.iter().filter(|p| !p.collected) {
        vertices.extend(spinning_square(
            pickup.pos + shift,
            pickup.size,
            pickup.rotation,
            fruit_color(pickup.kind),
        ));
    }

    let mut body = frame.player.clone();
    body.pos += shift;
    vertices.extend(player(&body));

    // Backing plate under each popup label; the host draws the text on top
    for popup in &frame.popups {
        let plate = Rect::centered(popup.pos + shift, Vec2::new(POPUP_PLATE_WIDTH, 4.0));
        vertices.extend(rect(&plate, colors::POPUP).into_iter().map(|v| v.faded(popup.alpha)));
    }

    if frame.phase != GamePhase::Playing {
        let dim = rect(&Rect::new(0.0, 0.0, vw, vh), colors::OVERLAY);
        vertices.extend(dim.into_iter().map(|v| v.faded(OVERLAY_ALPHA)));
    }

    vertices
}
