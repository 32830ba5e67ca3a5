//! Ledge Runner headless entry point
//!
//! Runs the simulation against a simulated 60 Hz host, logs gameplay events
//! and prints the leaderboard plus the final frame snapshot.

use std::time::{SystemTime, UNIX_EPOCH};

use ledge_runner::audio::{SilentSpeaker, Speaker, SystemSpeaker};
use ledge_runner::clock::FixedStep;
use ledge_runner::highscores::format_duration;
use ledge_runner::input::{EdgeLatch, HeldButtons};
use ledge_runner::renderer::{FrameSnapshot, frame_vertices};
use ledge_runner::sim::{GameEvent, RunState, TickOutcome};
use ledge_runner::{Settings, Tuning};

const HOST_FRAME_DT: f32 = 1.0 / 60.0;

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::RunStarted { run } => log::debug!("Run {run} started"),
        GameEvent::Jumped { kind } => log::debug!("Jump: {kind:?}"),
        GameEvent::Landed => log::trace!("Landed"),
        GameEvent::PickupCollected { kind, pos } => {
            log::info!("Collected {} at ({:.0}, {:.0})", kind.display_name(), pos.x, pos.y)
        }
        GameEvent::RunEnded { score, reason } => {
            log::debug!("Run ended ({reason:?}) with score {score}")
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Ledge Runner (headless) starting...");

    let settings = Settings::load("settings.json");
    let mut tuning = Tuning::load("tuning.json");
    if let Err(e) = tuning.validate() {
        log::warn!("{e}, using default tuning");
        tuning = Tuning::default();
    }

    let seed = settings.seed.unwrap_or_else(time_seed);
    log::info!("Game initialized with seed: {seed}");

    let speaker: Box<dyn Speaker> = if settings.speech {
        Box::new(SystemSpeaker::new())
    } else {
        Box::new(SilentSpeaker)
    };

    let mut state = RunState::new(seed, tuning, settings.viewport());
    let mut clock = FixedStep::new();
    let mut latch = EdgeLatch::new();

    // Without the autopilot, tap start once and hold sprint until the run ends
    let held = HeldButtons {
        sprint: true,
        start: true,
        ..Default::default()
    };

    let frames = (settings.max_seconds.max(0.0) / HOST_FRAME_DT).ceil() as u64;
    for _ in 0..frames {
        let mut input = latch.sample(held);
        input.idle_mode = settings.demo;

        let outcome = clock.advance(HOST_FRAME_DT, &mut state, &input, speaker.as_ref());
        for event in state.drain_events() {
            log_event(&event);
        }
        if outcome == TickOutcome::Exit {
            log::info!("Exit requested");
            break;
        }
    }

    let frame = FrameSnapshot::capture(&state);
    state.finish_session();

    println!("Runs played: {}", state.runs);
    println!("High score: {}", state.high_score);
    for (rank, entry) in state.leaderboard.entries.iter().enumerate() {
        println!(
            "{:>2}. {:>6}  {:>3} pickups  {}",
            rank + 1,
            entry.score,
            entry.pickups,
            format_duration(entry.seconds)
        );
    }

    for line in frame.hud_lines() {
        log::info!("HUD: {line}");
    }
    log::debug!("Final frame has {} vertices", frame_vertices(&frame).len());
    match serde_json::to_string_pretty(&frame) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize frame: {e}"),
    }
}
