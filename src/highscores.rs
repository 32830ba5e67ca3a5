//! Session leaderboard of finished runs
//!
//! Lives only as long as the process. `RunState::high_score` is the value the
//! HUD shows; this table keeps the detail behind it.

use serde::{Deserialize, Serialize};

/// Runs kept on the board
pub const MAX_HIGH_SCORES: usize = 10;

/// One finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// Pickups collected during the run
    pub pickups: u32,
    /// Seconds survived
    pub seconds: f32,
}

/// Best runs, highest score first
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a new score would take; equal scores go behind earlier runs
    fn slot(&self, score: u64) -> usize {
        self.entries.partition_point(|e| e.score >= score)
    }

    /// Whether `score` would make the board
    pub fn qualifies(&self, score: u64) -> bool {
        score > 0 && self.slot(score) < MAX_HIGH_SCORES
    }

    /// 1-based rank `score` would get, if it qualifies
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        self.qualifies(score).then(|| self.slot(score) + 1)
    }

    /// Record a finished run, returning its 1-based rank if it made the board
    pub fn add_score(&mut self, score: u64, pickups: u32, seconds: f32) -> Option<usize> {
        let rank = self.potential_rank(score)?;
        self.entries.insert(
            rank - 1,
            HighScoreEntry {
                score,
                pickups,
                seconds,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);
        log::debug!("Run scored {score} ({pickups} pickups), rank {rank}");
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Most pickups collected in any recorded run
    pub fn most_pickups(&self) -> Option<u32> {
        self.entries.iter().map(|e| e.pickups).max()
    }

    /// Longest recorded run, in seconds
    pub fn longest_run(&self) -> Option<f32> {
        self.entries.iter().map(|e| e.seconds).reduce(f32::max)
    }
}

/// Format a run length as `m:ss`
pub fn format_duration(seconds: f32) -> String {
    let total = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_never_qualifies() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert_eq!(scores.potential_rank(0), None);
    }

    #[test]
    fn test_sorted_descending() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(10, 1, 5.0), Some(1));
        assert_eq!(scores.add_score(30, 2, 25.0), Some(1));
        assert_eq!(scores.add_score(20, 0, 20.0), Some(2));
        let values: Vec<u64> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(values, vec![30, 20, 10]);
        assert_eq!(scores.top_score(), Some(30));
        assert_eq!(scores.most_pickups(), Some(2));
        assert_eq!(scores.longest_run(), Some(25.0));
    }

    #[test]
    fn test_ties_rank_behind_earlier_runs() {
        let mut scores = HighScores::new();
        scores.add_score(10, 1, 5.0);
        assert_eq!(scores.add_score(10, 4, 9.0), Some(2));
        assert_eq!(scores.entries[0].pickups, 1);
    }

    #[test]
    fn test_truncates_to_max() {
        let mut scores = HighScores::new();
        for s in 1..=15 {
            scores.add_score(s, 0, s as f32);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().map(|e| e.score), Some(6));
        assert!(!scores.qualifies(5));
        assert!(!scores.qualifies(6));
        assert_eq!(scores.potential_rank(100), Some(1));
        assert_eq!(scores.add_score(3, 0, 1.0), None);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "0:00");
        assert_eq!(format_duration(65.9), "1:05");
        assert_eq!(format_duration(-3.0), "0:00");
    }
}
