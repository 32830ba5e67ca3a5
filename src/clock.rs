//! Fixed timestep driver
//!
//! Frames arrive at whatever rate the host manages; the simulation only ever
//! sees `SIM_DT` steps. Leftover time carries over to the next frame.

use crate::audio::Speaker;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::sim::{RunState, TickInput, TickOutcome, tick};

/// Accumulates frame time and runs whole simulation steps
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
    /// One-shot presses waiting for a step to consume them
    presses: TickInput,
}

/// Clamp a host frame delta into something the simulation can digest
pub fn sanitize_frame_dt(dt: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 {
        0.0
    } else {
        dt.min(MAX_FRAME_DT)
    }
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time banked toward the next step
    pub fn pending(&self) -> f32 {
        self.accumulator
    }

    /// Run as many steps as `frame_dt` pays for
    ///
    /// One-shot presses are held until a step runs and are delivered to that
    /// first step only; held state applies to every step. Stops early if a
    /// step asks to exit.
    pub fn advance(
        &mut self,
        frame_dt: f32,
        state: &mut RunState,
        input: &TickInput,
        speaker: &dyn Speaker,
    ) -> TickOutcome {
        self.accumulator += sanitize_frame_dt(frame_dt);
        self.presses.jump_pressed |= input.jump_pressed;
        self.presses.start_pressed |= input.start_pressed;
        self.presses.cancel_pressed |= input.cancel_pressed;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let step = TickInput {
                jump_pressed: self.presses.jump_pressed,
                start_pressed: self.presses.start_pressed,
                cancel_pressed: self.presses.cancel_pressed,
                ..input.clone()
            };
            // Clear one-shot inputs once a step has consumed them
            self.presses = TickInput::default();

            if tick(state, &step, SIM_DT, speaker) == TickOutcome::Exit {
                return TickOutcome::Exit;
            }
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        if substeps == MAX_SUBSTEPS && self.accumulator >= SIM_DT {
            log::trace!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        TickOutcome::Continue
    }
}
