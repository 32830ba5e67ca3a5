//! Data-driven game balance
//!
//! Every number that shapes a run lives here so it can be tweaked from a JSON
//! file without a rebuild. Missing fields fall back to the compiled defaults.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Movement and body parameters (velocities are per tick)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    pub gravity: f32,
    pub cruise_speed: f32,
    pub sprint_speed: f32,
    /// Impulse for the first jump of a full budget
    pub primary_jump_impulse: f32,
    /// Impulse for every later jump before landing
    pub secondary_jump_impulse: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
    pub death_y: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            cruise_speed: CRUISE_SPEED,
            sprint_speed: SPRINT_SPEED,
            primary_jump_impulse: PRIMARY_JUMP_IMPULSE,
            secondary_jump_impulse: SECONDARY_JUMP_IMPULSE,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,
            death_y: DEATH_Y_THRESHOLD,
        }
    }
}

/// Procedural level parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelTuning {
    pub min_gap: f32,
    pub max_gap: f32,
    pub base_y: f32,
    pub y_variation: f32,
    pub min_width: f32,
    pub max_width: f32,
    pub platform_height: f32,
    pub start_x: f32,
    pub start_y: f32,
    pub start_width: f32,
    pub initial_platforms: usize,
    pub pickup_chance: f64,
    pub pickup_margin: f32,
    pub pickup_size: f32,
}

impl Default for LevelTuning {
    fn default() -> Self {
        Self {
            min_gap: MIN_PLATFORM_GAP,
            max_gap: MAX_PLATFORM_GAP,
            base_y: PLATFORM_BASE_Y,
            y_variation: PLATFORM_Y_VARIATION,
            min_width: MIN_PLATFORM_WIDTH,
            max_width: MAX_PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            start_x: START_PLATFORM_X,
            start_y: START_PLATFORM_Y,
            start_width: START_PLATFORM_WIDTH,
            initial_platforms: INITIAL_PLATFORMS,
            pickup_chance: PICKUP_CHANCE,
            pickup_margin: PICKUP_MARGIN,
            pickup_size: PICKUP_SIZE,
        }
    }
}

/// Score parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringTuning {
    /// Bonus added for each collected pickup
    pub pickup_reward: u64,
}

impl Default for ScoringTuning {
    fn default() -> Self {
        Self {
            pickup_reward: PICKUP_REWARD,
        }
    }
}

/// All balance parameters for a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub physics: PhysicsTuning,
    pub level: LevelTuning,
    pub scoring: ScoringTuning,
}

/// Reasons a tuning file is rejected
#[derive(Debug)]
pub enum TuningError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// A value is out of its allowed range
    Invalid { field: &'static str, reason: &'static str },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Io(e) => write!(f, "failed to read tuning: {e}"),
            TuningError::Parse(e) => write!(f, "failed to parse tuning: {e}"),
            TuningError::Invalid { field, reason } => write!(f, "invalid tuning `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Io(e) => Some(e),
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        TuningError::Io(e)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

fn invalid(field: &'static str, reason: &'static str) -> TuningError {
    TuningError::Invalid { field, reason }
}

/// Largest distance one generated platform may span, gap plus width, and the
/// largest vertical spread around the baseline
pub const MAX_LEVEL_EXTENT: f32 = 10_000.0;

fn finite(fields: &[(&'static str, f32)]) -> Result<(), TuningError> {
    match fields.iter().find(|(_, v)| !v.is_finite()) {
        Some(&(field, _)) => Err(invalid(field, "must be finite")),
        None => Ok(()),
    }
}

impl PhysicsTuning {
    fn check_finite(&self) -> Result<(), TuningError> {
        finite(&[
            ("physics.gravity", self.gravity),
            ("physics.cruise_speed", self.cruise_speed),
            ("physics.sprint_speed", self.sprint_speed),
            ("physics.primary_jump_impulse", self.primary_jump_impulse),
            ("physics.secondary_jump_impulse", self.secondary_jump_impulse),
            ("physics.player_width", self.player_width),
            ("physics.player_height", self.player_height),
            ("physics.spawn_x", self.spawn_x),
            ("physics.spawn_y", self.spawn_y),
            ("physics.death_y", self.death_y),
        ])
    }
}

impl LevelTuning {
    fn check_finite(&self) -> Result<(), TuningError> {
        finite(&[
            ("level.min_gap", self.min_gap),
            ("level.max_gap", self.max_gap),
            ("level.base_y", self.base_y),
            ("level.y_variation", self.y_variation),
            ("level.min_width", self.min_width),
            ("level.max_width", self.max_width),
            ("level.platform_height", self.platform_height),
            ("level.start_x", self.start_x),
            ("level.start_y", self.start_y),
            ("level.start_width", self.start_width),
            ("level.pickup_margin", self.pickup_margin),
            ("level.pickup_size", self.pickup_size),
        ])
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read tuning from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read tuning from a file, falling back to defaults if it is missing or bad
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(TuningError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No tuning at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("{e}, using default tuning");
                Self::default()
            }
        }
    }

    /// Reject values that would break generation or movement
    pub fn validate(&self) -> Result<(), TuningError> {
        let p = &self.physics;
        let l = &self.level;
        p.check_finite()?;
        l.check_finite()?;

        if p.cruise_speed <= 0.0 {
            return Err(invalid("physics.cruise_speed", "must be positive"));
        }
        if p.sprint_speed < p.cruise_speed {
            return Err(invalid("physics.sprint_speed", "must not be below cruise_speed"));
        }
        if p.player_width <= 0.0 || p.player_height <= 0.0 {
            return Err(invalid("physics.player_width", "player size must be positive"));
        }
        if p.primary_jump_impulse >= 0.0 || p.secondary_jump_impulse >= 0.0 {
            return Err(invalid("physics.primary_jump_impulse", "jump impulses must point upward"));
        }
        if l.min_gap < 0.0 {
            return Err(invalid("level.min_gap", "must not be negative"));
        }
        if l.min_gap > l.max_gap {
            return Err(invalid("level.min_gap", "must not exceed max_gap"));
        }
        if l.min_width <= 0.0 {
            return Err(invalid("level.min_width", "must be positive"));
        }
        if l.min_width > l.max_width {
            return Err(invalid("level.min_width", "must not exceed max_width"));
        }
        if l.platform_height <= 0.0 || l.start_width <= 0.0 {
            return Err(invalid("level.platform_height", "platform size must be positive"));
        }
        if l.max_gap + l.max_width > MAX_LEVEL_EXTENT {
            return Err(invalid("level.max_gap", "max_gap + max_width is too large"));
        }
        if l.y_variation < 0.0 {
            return Err(invalid("level.y_variation", "must not be negative"));
        }
        if l.y_variation > MAX_LEVEL_EXTENT {
            return Err(invalid("level.y_variation", "is too large"));
        }
        if !(0.0..=1.0).contains(&l.pickup_chance) {
            return Err(invalid("level.pickup_chance", "must be within [0, 1]"));
        }
        if l.pickup_size <= 0.0 {
            return Err(invalid("level.pickup_size", "must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "physics": { "gravity": 0.75 } }"#).unwrap();
        assert_eq!(tuning.physics.gravity, 0.75);
        assert_eq!(tuning.physics.cruise_speed, CRUISE_SPEED);
        assert_eq!(tuning.level, LevelTuning::default());
    }

    #[test]
    fn test_gap_range_rejected() {
        let err = Tuning::from_json(r#"{ "level": { "min_gap": 300.0, "max_gap": 100.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "level.min_gap", .. }));
    }

    #[test]
    fn test_sprint_slower_than_cruise_rejected() {
        let mut tuning = Tuning::default();
        tuning.physics.sprint_speed = 1.0;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_overflowing_value_rejected() {
        // 1e300 does not fit an f32 and parses as infinity
        let err = Tuning::from_json(r#"{ "level": { "max_gap": 1e300 } }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "level.max_gap", .. }));

        let err = Tuning::from_json(r#"{ "physics": { "gravity": -1e300 } }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "physics.gravity", .. }));
    }

    #[test]
    fn test_huge_platform_span_rejected() {
        let mut tuning = Tuning::default();
        tuning.level.max_gap = 3.0e38;
        tuning.level.max_width = 3.0e38;
        assert!(tuning.validate().is_err());

        let mut tuning = Tuning::default();
        tuning.level.y_variation = 2.0e38;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse tuning"));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let tuning = Tuning::load("/nonexistent/ledge-runner/tuning.json");
        assert_eq!(tuning, Tuning::default());
    }
}
