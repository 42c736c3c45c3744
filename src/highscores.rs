//! High score leaderboard system
//!
//! Persisted as a JSON file, tracks the top 10 scores. The game core only
//! consults the table through the read-only lowest-score query.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::game::ScoreProvider;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Player's score
    pub score: u32,
    /// Unix timestamp (seconds) when achieved
    pub timestamp: u64,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Default storage file
    const STORAGE_FILE: &'static str = "rally_pong_highscores.json";

    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Lowest score still on the table; 0 while the table has room
    pub fn lowest_score(&self) -> u32 {
        if self.entries.len() < MAX_HIGH_SCORES {
            return 0;
        }
        self.entries.last().map(|e| e.score).unwrap_or(0)
    }

    /// Add a new score to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify
    pub fn add_score(&mut self, score: u32, timestamp: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry { score, timestamp };

        // Find insertion point (sorted descending by score)
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Load from the default file; a missing or unreadable file yields an
    /// empty table
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::STORAGE_FILE))
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<HighScores>(&json) {
                Ok(scores) => {
                    log::info!("loaded {} high scores", scores.entries.len());
                    scores
                }
                Err(err) => {
                    log::warn!("high score file unreadable ({err}), starting fresh");
                    Self::new()
                }
            },
            Err(_) => {
                log::info!("no high scores found, starting fresh");
                Self::new()
            }
        }
    }

    /// Save to the default file
    pub fn save(&self) -> io::Result<()> {
        self.save_to(Path::new(Self::STORAGE_FILE))
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("high scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}

impl ScoreProvider for HighScores {
    fn lowest_score(&self) -> u32 {
        HighScores::lowest_score(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_table() -> HighScores {
        let mut scores = HighScores::new();
        for i in 0..MAX_HIGH_SCORES as u32 {
            scores.add_score(10 + i, i as u64);
        }
        scores
    }

    #[test]
    fn test_zero_never_qualifies() {
        assert!(!HighScores::new().qualifies(0));
    }

    #[test]
    fn test_any_positive_score_qualifies_until_full() {
        let scores = HighScores::new();
        assert!(scores.qualifies(1));
        assert_eq!(scores.lowest_score(), 0);
    }

    #[test]
    fn test_full_table_requires_beating_the_lowest() {
        let scores = full_table();
        assert_eq!(scores.lowest_score(), 10);
        assert!(!scores.qualifies(10));
        assert!(scores.qualifies(11));
    }

    #[test]
    fn test_add_score_keeps_descending_order() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(5, 0), Some(1));
        assert_eq!(scores.add_score(9, 1), Some(1));
        assert_eq!(scores.add_score(7, 2), Some(2));

        let listed: Vec<u32> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(listed, vec![9, 7, 5]);
        assert_eq!(scores.top_score(), Some(9));
    }

    #[test]
    fn test_table_is_capped() {
        let mut scores = full_table();
        scores.add_score(100, 99);
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.top_score(), Some(100));
        // The old lowest entry fell off
        assert_eq!(scores.lowest_score(), 11);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let mut path = std::env::temp_dir();
        path.push("rally_pong_highscores_test.json");

        let scores = full_table();
        scores.save_to(&path).unwrap();
        let loaded = HighScores::load_from(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.entries.len(), scores.entries.len());
        assert_eq!(loaded.top_score(), scores.top_score());
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let loaded = HighScores::load_from(Path::new("no_such_highscore_file.json"));
        assert!(loaded.is_empty());
    }
}
