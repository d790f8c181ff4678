//! Campaign progress: which levels the player has unlocked.
//!
//! Progress is an explicit value handed to whoever needs it, not a global.
//! The hosting shell owns one instance and persists it through a
//! [`ProgressStore`].

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::enums::LevelId;

/// Unlock state for the three-level campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignProgress {
    /// Highest level the player may start.
    pub highest_unlocked: LevelId,
}

impl Default for CampaignProgress {
    fn default() -> Self {
        Self {
            highest_unlocked: LevelId::One,
        }
    }
}

impl CampaignProgress {
    /// Whether the player may start the given level.
    pub fn is_unlocked(&self, level: LevelId) -> bool {
        level_rank(level) <= level_rank(self.highest_unlocked)
    }

    /// Record a level completion, unlocking its successor.
    /// Never regresses the unlock state.
    pub fn record_completion(&mut self, level: LevelId) {
        if let Some(next) = level.next() {
            if level_rank(next) > level_rank(self.highest_unlocked) {
                self.highest_unlocked = next;
            }
        }
    }

    /// Wipe back to the initial state (only level one unlocked).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn level_rank(level: LevelId) -> u8 {
    match level {
        LevelId::One => 1,
        LevelId::Two => 2,
        LevelId::Three => 3,
    }
}

/// Reads and writes campaign progress as a JSON file.
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join("progress.json"),
        }
    }

    /// Load saved progress, or the default if no save exists yet.
    pub fn load(&self) -> Result<CampaignProgress, String> {
        if !self.path.exists() {
            return Ok(CampaignProgress::default());
        }
        let json = fs::read_to_string(&self.path)
            .map_err(|e| format!("Failed to read progress file: {e}"))?;
        serde_json::from_str(&json).map_err(|e| format!("Failed to parse progress file: {e}"))
    }

    pub fn save(&self, progress: &CampaignProgress) -> Result<(), String> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create progress directory: {e}"))?;
        }
        let json = serde_json::to_string_pretty(progress)
            .map_err(|e| format!("Failed to serialize progress: {e}"))?;
        fs::write(&self.path, json).map_err(|e| format!("Failed to write progress file: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_unlocks_only_level_one() {
        let progress = CampaignProgress::default();
        assert!(progress.is_unlocked(LevelId::One));
        assert!(!progress.is_unlocked(LevelId::Two));
        assert!(!progress.is_unlocked(LevelId::Three));
    }

    #[test]
    fn completion_unlocks_successor() {
        let mut progress = CampaignProgress::default();
        progress.record_completion(LevelId::One);
        assert!(progress.is_unlocked(LevelId::Two));
        assert!(!progress.is_unlocked(LevelId::Three));
    }

    #[test]
    fn completion_never_regresses() {
        let mut progress = CampaignProgress::default();
        progress.record_completion(LevelId::One);
        progress.record_completion(LevelId::Two);
        assert!(progress.is_unlocked(LevelId::Three));

        // Replaying an earlier level must not re-lock anything.
        progress.record_completion(LevelId::One);
        assert!(progress.is_unlocked(LevelId::Three));
    }

    #[test]
    fn final_level_completion_is_noop() {
        let mut progress = CampaignProgress::default();
        progress.record_completion(LevelId::One);
        progress.record_completion(LevelId::Two);
        progress.record_completion(LevelId::Three);
        assert_eq!(progress.highest_unlocked, LevelId::Three);
    }

    #[test]
    fn reset_returns_to_default() {
        let mut progress = CampaignProgress::default();
        progress.record_completion(LevelId::One);
        progress.reset();
        assert!(!progress.is_unlocked(LevelId::Two));
    }

    #[test]
    fn store_load_missing_file_gives_default() {
        let dir = std::env::temp_dir().join("skystrike_test_progress_missing");
        let _ = fs::remove_dir_all(&dir);
        let store = ProgressStore::new(&dir);
        let progress = store.load().unwrap();
        assert_eq!(progress.highest_unlocked, LevelId::One);
    }

    #[test]
    fn store_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join("skystrike_test_progress_roundtrip");
        let _ = fs::remove_dir_all(&dir);

        let store = ProgressStore::new(&dir);
        let mut progress = CampaignProgress::default();
        progress.record_completion(LevelId::One);
        store.save(&progress).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.highest_unlocked, LevelId::Two);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn store_load_corrupt_file_errors() {
        let dir = std::env::temp_dir().join("skystrike_test_progress_corrupt");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("progress.json"), "not json").unwrap();

        let store = ProgressStore::new(&dir);
        assert!(store.load().is_err());

        let _ = fs::remove_dir_all(&dir);
    }
}
