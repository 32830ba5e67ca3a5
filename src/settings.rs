//! Runner settings and preferences
//!
//! Read from a JSON file next to the tuning file. Unknown or missing values
//! fall back to defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

/// Runner settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Display ===
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === Simulation ===
    /// Level seed; a time-based seed is used when unset
    pub seed: Option<u64>,
    /// Let the autopilot play
    pub demo: bool,
    /// Stop the headless runner after this many simulated seconds
    pub max_seconds: f32,

    // === Audio ===
    /// Announce collected pickups with text-to-speech
    pub speech: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            seed: None,
            demo: true,
            max_seconds: 60.0,
            speech: false,
        }
    }
}

impl Settings {
    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(_) => {
                log::info!("Using default settings");
                return Self::default();
            }
        };

        match serde_json::from_str::<Settings>(&json) {
            Ok(settings) if settings.viewport_width > 0.0 && settings.viewport_height > 0.0 => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Ok(_) => {
                log::warn!("Ignoring {}: viewport must be positive", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to parse {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings() {
        let settings: Settings = serde_json::from_str(r#"{ "seed": 9, "speech": true }"#).unwrap();
        assert_eq!(settings.seed, Some(9));
        assert!(settings.speech);
        assert_eq!(settings.viewport(), Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT));
    }

    #[test]
    fn test_missing_file_defaults() {
        assert_eq!(Settings::load("/nonexistent/ledge-runner/settings.json"), Settings::default());
    }
}
