//! High-score persistence
//!
//! A tiny JSON file holding the best score across sessions. The game engine
//! only supplies candidate scores at game over; this store owns the
//! comparison and the file. Loads are tolerant: a missing or unreadable
//! file means a best of 0.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Default score file, kept next to the game.
pub const DEFAULT_SCORE_FILE: &str = "blockfall-scores.json";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct ScoreFile {
    best: u32,
}

#[derive(Debug)]
pub struct HighScoreStore {
    path: PathBuf,
    best: u32,
}

impl HighScoreStore {
    /// Open a store backed by `path`, loading the current best if present.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = read_best(&path);
        Self { path, best }
    }

    pub fn open_default() -> Self {
        Self::open(DEFAULT_SCORE_FILE)
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record a finished game's score; keeps and persists the maximum.
    pub fn record(&mut self, final_score: u32) -> Result<u32> {
        self.best = self.best.max(final_score);
        let json = serde_json::to_string_pretty(&ScoreFile { best: self.best })?;
        fs::write(&self.path, json)?;
        Ok(self.best)
    }
}

fn read_best(path: &Path) -> u32 {
    fs::read_to_string(path)
        .ok()
        .and_then(|data| serde_json::from_str::<ScoreFile>(&data).ok())
        .map(|file| file.best)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::open(dir.path().join("scores.json"));
        assert_eq!(store.best(), 0);
    }

    #[test]
    fn test_record_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");

        let mut store = HighScoreStore::open(&path);
        assert_eq!(store.record(1200).unwrap(), 1200);

        let reopened = HighScoreStore::open(&path);
        assert_eq!(reopened.best(), 1200);
    }

    #[test]
    fn test_record_keeps_the_maximum() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");

        let mut store = HighScoreStore::open(&path);
        store.record(800).unwrap();
        assert_eq!(store.record(300).unwrap(), 800);
        assert_eq!(store.best(), 800);

        let reopened = HighScoreStore::open(&path);
        assert_eq!(reopened.best(), 800);
    }

    #[test]
    fn test_corrupt_file_loads_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "not json at all").unwrap();

        let store = HighScoreStore::open(&path);
        assert_eq!(store.best(), 0);
    }
}
