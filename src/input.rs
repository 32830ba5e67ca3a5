//! Turn sampled button states into per-tick intents
//!
//! The host polls its devices however it likes and reports which logical
//! buttons are down. The latch remembers the previous sample so presses fire
//! once, on the sample where a button goes down.

use crate::sim::TickInput;

/// Logical buttons currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldButtons {
    pub sprint: bool,
    pub jump: bool,
    pub start: bool,
    pub cancel: bool,
}

/// Edge detector over successive `HeldButtons` samples
#[derive(Debug, Clone, Default)]
pub struct EdgeLatch {
    previous: HeldButtons,
}

impl EdgeLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a sample into intents and remember it for the next call
    pub fn sample(&mut self, held: HeldButtons) -> TickInput {
        let prev = self.previous;
        self.previous = held;
        TickInput {
            sprint_held: held.sprint,
            jump_pressed: held.jump && !prev.jump,
            start_pressed: held.start && !prev.start,
            cancel_pressed: held.cancel && !prev.cancel,
            idle_mode: false,
        }
    }
}
