//! Demo-mode autopilot
//!
//! Drives the avatar from the simulation state alone: always sprint, jump
//! when the platform underfoot is about to run out, and spend the second
//! jump when falling with nothing below.

use super::state::{GamePhase, RunState};
use super::tick::TickInput;

/// Ticks of look-ahead before a ledge at which the autopilot takes off
const LEDGE_LEAD_TICKS: f32 = 2.0;
/// Only double jump once the fall is this fast (units per tick)
const DOUBLE_JUMP_FALL_SPEED: f32 = 3.0;

/// Replace the intents in `input` with autopilot decisions
pub fn drive(state: &RunState, input: &mut TickInput) {
    match state.phase {
        GamePhase::TitleScreen | GamePhase::GameOver => {
            input.start_pressed = true;
        }
        GamePhase::Playing => {
            input.sprint_held = true;
            input.jump_pressed = wants_jump(state);
        }
    }
}

fn wants_jump(state: &RunState) -> bool {
    let player = &state.player;
    let body = player.bounds();

    if !player.airborne {
        let lead = state.tuning.physics.sprint_speed * LEDGE_LEAD_TICKS;
        // Platform currently underfoot
        return state
            .platforms
            .iter()
            .find(|p| p.bounds.left() <= body.right() && p.bounds.right() >= body.left())
            .is_some_and(|p| p.bounds.right() - body.right() <= lead);
    }

    if player.jumps_remaining == 0 || player.vel.y < DOUBLE_JUMP_FALL_SPEED {
        return false;
    }
    let has_floor = state.platforms.iter().any(|p| {
        p.bounds.left() <= body.right()
            && p.bounds.right() >= body.left()
            && p.bounds.top() >= body.bottom()
    });
    !has_floor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use glam::Vec2;

    fn playing() -> RunState {
        let mut state = RunState::new(5, Tuning::default(), Vec2::new(800.0, 480.0));
        state.reset();
        state.phase = GamePhase::Playing;
        state
    }

    #[test]
    fn test_starts_runs() {
        let state = RunState::new(5, Tuning::default(), Vec2::new(800.0, 480.0));
        let mut input = TickInput::default();
        drive(&state, &mut input);
        assert!(input.start_pressed);
    }

    #[test]
    fn test_jumps_at_ledge() {
        let mut state = playing();
        // Start platform spans 50..450 with its top at 400
        state.player.pos = Vec2::new(436.0, 380.0);
        state.player.airborne = false;
        let mut input = TickInput::default();
        drive(&state, &mut input);
        assert!(input.sprint_held);
        assert!(input.jump_pressed);

        state.player.pos.x = 200.0;
        let mut input = TickInput::default();
        drive(&state, &mut input);
        assert!(!input.jump_pressed);
    }

    #[test]
    fn test_double_jumps_over_void() {
        let mut state = playing();
        state.platforms.clear();
        state.player.airborne = true;
        state.player.jumps_remaining = 1;
        state.player.vel.y = 5.0;
        let mut input = TickInput::default();
        drive(&state, &mut input);
        assert!(input.jump_pressed);

        state.player.jumps_remaining = 0;
        let mut input = TickInput::default();
        drive(&state, &mut input);
        assert!(!input.jump_pressed);
    }
}
