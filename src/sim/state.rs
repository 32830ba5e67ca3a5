//! Run state and core simulation types
//!
//! `RunState` exclusively owns everything a run needs: the player body, the
//! active platforms (with their pickups), the generator and its RNG, and the
//! score bookkeeping. A reset throws the old world away and builds a new one.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level::{LevelGenerator, Platform};
use super::pickup::{FruitKind, Popup};
use super::player::{JumpKind, PlayerBody};
use crate::consts::CAMERA_LEAD;
use crate::highscores::HighScores;
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start input
    TitleScreen,
    /// Active run
    Playing,
    /// Run ended; final score stays on display
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Fell past the death threshold
    Fell,
    /// Player gave up
    Forfeit,
}

/// Notable things that happened during a tick, drained by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RunStarted { run: u32 },
    Jumped { kind: JumpKind },
    Landed,
    PickupCollected { kind: FruitKind, pos: Vec2 },
    RunEnded { score: u64, reason: EndReason },
}

/// Complete state of the game across runs
#[derive(Debug, Clone)]
pub struct RunState {
    /// Seed for the level RNG
    pub seed: u64,
    pub tuning: Tuning,
    /// Viewport size in world units
    pub viewport: Vec2,
    pub phase: GamePhase,
    /// `floor(elapsed) + pickup_bonus` for the current run
    pub score: u64,
    /// Best score of any finished run this session
    pub high_score: u64,
    /// Running total from collected pickups
    pub pickup_bonus: u64,
    pub pickups_collected: u32,
    /// Seconds spent in the current run
    pub elapsed: f32,
    /// Simulation ticks in the current run
    pub time_ticks: u64,
    /// Runs started this session
    pub runs: u32,
    pub player: PlayerBody,
    /// Active platforms ordered left to right
    pub platforms: Vec<Platform>,
    pub generator: LevelGenerator,
    /// Collection popups (visual only)
    pub popups: Vec<Popup>,
    /// Finished runs this session
    pub leaderboard: HighScores,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
}

impl RunState {
    /// Create a game sitting on the title screen
    pub fn new(seed: u64, tuning: Tuning, viewport: Vec2) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut generator = LevelGenerator::new(tuning.level.clone());
        let platforms = generator.reset(&mut rng);
        let player = Self::spawn_player(&tuning);

        Self {
            seed,
            tuning,
            viewport,
            phase: GamePhase::TitleScreen,
            score: 0,
            high_score: 0,
            pickup_bonus: 0,
            pickups_collected: 0,
            elapsed: 0.0,
            time_ticks: 0,
            runs: 0,
            player,
            platforms,
            generator,
            popups: Vec::new(),
            leaderboard: HighScores::new(),
            rng,
            events: Vec::new(),
        }
    }

    fn spawn_player(tuning: &Tuning) -> PlayerBody {
        let p = &tuning.physics;
        PlayerBody::new(
            Vec2::new(p.spawn_x, p.spawn_y),
            Vec2::new(p.player_width, p.player_height),
        )
    }

    /// Start a fresh run, banking the previous run's score first
    pub fn reset(&mut self) {
        self.bank_run();
        self.platforms = self.generator.reset(&mut self.rng);
        self.player = Self::spawn_player(&self.tuning);
        self.popups.clear();
        self.runs += 1;

        log::info!("Run {} started (high score {})", self.runs, self.high_score);
        self.push_event(GameEvent::RunStarted { run: self.runs });
    }

    /// Fold the current run into the high score and leaderboard, then zero
    /// its counters so it cannot be banked twice
    fn bank_run(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        if self.runs > 0 {
            self.leaderboard
                .add_score(self.score, self.pickups_collected, self.elapsed);
        }

        self.score = 0;
        self.pickup_bonus = 0;
        self.pickups_collected = 0;
        self.elapsed = 0.0;
        self.time_ticks = 0;
    }

    /// Bank whatever run is in progress when the host shuts down
    pub fn finish_session(&mut self) {
        if self.phase == GamePhase::Playing {
            self.end_run(EndReason::Forfeit);
        }
        self.bank_run();
    }

    /// Move to GameOver without touching the scores
    pub fn end_run(&mut self, reason: EndReason) {
        self.phase = GamePhase::GameOver;
        log::info!(
            "Run {} ended ({:?}) with score {} after {:.1}s",
            self.runs,
            reason,
            self.score,
            self.elapsed
        );
        self.push_event(GameEvent::RunEnded {
            score: self.score,
            reason,
        });
    }

    /// Horizontal camera translation keeping the player near the left third
    pub fn camera_offset(&self) -> f32 {
        -self.player.pos.x + self.viewport.x * CAMERA_LEAD
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
