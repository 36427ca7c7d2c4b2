//! High score leaderboard
//!
//! Top 5 scores, sorted descending; ties keep insertion order. Serialized as
//! the bare entry array so persisted tables match the original storage
//! format.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 5;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Player's name, as entered at the game-over prompt
    pub name: String,
    /// Final score
    pub score: u64,
}

/// High score leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct HighScoreTable {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScoreTable {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a score, keeping the table sorted descending and capped at
    /// `MAX_HIGH_SCORES`
    ///
    /// Insertion goes before the first strictly-smaller score, so equal
    /// scores keep their insertion order. Returns the 1-indexed rank, or
    /// None if the score fell straight off the table.
    pub fn add_score(&mut self, name: &str, score: u64) -> Option<usize> {
        let entry = HighScoreEntry {
            name: name.to_string(),
            score,
        };

        let pos = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, entry);
        self.entries.truncate(MAX_HIGH_SCORES);

        (pos < MAX_HIGH_SCORES).then_some(pos + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}
