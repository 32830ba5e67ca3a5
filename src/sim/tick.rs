//! Fixed timestep simulation tick
//!
//! Core game loop that advances the run state deterministically. Within a
//! Playing tick the order is: death check (using last tick's position),
//! player movement and collision, culling and generation, pickup overlap,
//! score.

use super::autopilot;
use super::level::{cull, look_ahead_x};
use super::pickup::Popup;
use super::state::{EndReason, GameEvent, GamePhase, RunState};
use crate::audio::Speaker;

/// Logical intents for a single tick (deterministic)
///
/// All `*_pressed` fields are edges: true only on the tick the button went
/// down.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Sprint while held
    pub sprint_held: bool,
    /// Jump (edge)
    pub jump_pressed: bool,
    /// Start or restart a run (edge)
    pub start_pressed: bool,
    /// Forfeit the run, or quit from the title/game-over screens (edge)
    pub cancel_pressed: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// Whether the host should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Exit,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut RunState, input: &TickInput, dt: f32, speaker: &dyn Speaker) -> TickOutcome {
    debug_assert!(dt.is_finite() && dt >= 0.0, "tick dt must be sanitized");

    let mut input = input.clone();
    if input.idle_mode {
        autopilot::drive(state, &mut input);
    }
    let input = &input;

    // Cancel wins over everything else pressed on the same tick
    if input.cancel_pressed {
        match state.phase {
            GamePhase::Playing => {
                state.end_run(EndReason::Forfeit);
                return TickOutcome::Continue;
            }
            GamePhase::TitleScreen | GamePhase::GameOver => {
                log::info!("Exit requested from {:?}", state.phase);
                return TickOutcome::Exit;
            }
        }
    }

    match state.phase {
        GamePhase::TitleScreen | GamePhase::GameOver => {
            if input.start_pressed {
                state.reset();
                state.phase = GamePhase::Playing;
            }
        }
        GamePhase::Playing => play(state, input, dt, speaker),
    }

    TickOutcome::Continue
}

fn play(state: &mut RunState, input: &TickInput, dt: f32, speaker: &dyn Speaker) {
    // Death uses the position from the end of the previous tick
    if state.player.pos.y > state.tuning.physics.death_y {
        state.end_run(EndReason::Fell);
        return;
    }

    state.time_ticks += 1;
    state.elapsed += dt;

    let was_airborne = state.player.airborne;
    let report = state.player.update(
        input.sprint_held,
        input.jump_pressed,
        dt,
        &state.tuning.physics,
        state.platforms.iter().map(|p| &p.bounds),
    );
    if let Some(kind) = report.jumped {
        log::trace!("Jump {:?} at x={:.0}", kind, state.player.pos.x);
        state.push_event(GameEvent::Jumped { kind });
    }
    // Resting on a platform lands every tick; only touch-downs are events
    if report.landed && was_airborne {
        state.push_event(GameEvent::Landed);
    }

    let player_x = state.player.pos.x;
    let viewport_width = state.viewport.x;
    cull(&mut state.platforms, player_x, viewport_width);
    let fresh = state
        .generator
        .generate(&mut state.rng, look_ahead_x(player_x, viewport_width));
    state.platforms.extend(fresh);

    let body = state.player.bounds();
    let reward = state.tuning.scoring.pickup_reward;
    for platform in &mut state.platforms {
        let Some(pickup) = platform.pickup.as_mut() else {
            continue;
        };
        pickup.animate(dt);
        if pickup.try_collect(&body) {
            state.pickup_bonus += reward;
            state.pickups_collected += 1;
            let name = pickup.kind.display_name();
            log::debug!("Collected {} (+{})", name, reward);
            speaker.speak(name);
            state.popups.push(Popup::new(name, pickup.pos));
            state.events.push(GameEvent::PickupCollected {
                kind: pickup.kind,
                pos: pickup.pos,
            });
        }
    }

    for popup in &mut state.popups {
        popup.update(dt);
    }
    state.popups.retain(|p| !p.is_expired());

    let score = state.elapsed.floor() as u64 + state.pickup_bonus;
    debug_assert!(score >= state.score, "score must not decrease during a run");
    state.score = score;
}
