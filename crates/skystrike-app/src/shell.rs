//! Campaign shell: loads and persists the unlock state around the engine.
//!
//! The engine owns its own copy of the progress for gating; the shell
//! keeps a mirror, updated from the event stream, so completions survive
//! process restarts.

use std::path::Path;

use skystrike_core::events::GameEvent;
use skystrike_core::progress::{CampaignProgress, ProgressStore};
use skystrike_core::state::GameSnapshot;

pub struct CampaignShell {
    progress: CampaignProgress,
    store: ProgressStore,
}

impl CampaignShell {
    /// Load saved progress from the given directory, or start fresh.
    pub fn load(dir: &Path) -> Result<Self, String> {
        let store = ProgressStore::new(dir);
        let progress = store.load()?;
        Ok(Self { progress, store })
    }

    /// The progress to hand to a new engine.
    pub fn progress(&self) -> CampaignProgress {
        self.progress.clone()
    }

    /// Apply a snapshot's events to the persistent unlock state.
    /// Saves only when a completion actually changed something.
    pub fn observe(&mut self, snapshot: &GameSnapshot) -> Result<(), String> {
        let mut changed = false;
        for event in &snapshot.events {
            if let GameEvent::LevelComplete { level } = event {
                let before = self.progress.highest_unlocked;
                self.progress.record_completion(*level);
                changed |= self.progress.highest_unlocked != before;
            }
        }
        if changed {
            self.store.save(&self.progress)?;
        }
        Ok(())
    }

    /// Wipe progress back to level one, both in memory and on disk.
    pub fn reset(&mut self) -> Result<(), String> {
        self.progress.reset();
        self.store.save(&self.progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skystrike_core::enums::LevelId;
    use skystrike_core::state::GameSnapshot;

    fn snapshot_with_completion(level: LevelId) -> GameSnapshot {
        GameSnapshot {
            events: vec![GameEvent::LevelComplete { level }],
            ..Default::default()
        }
    }

    #[test]
    fn test_completion_is_persisted() {
        let dir = std::env::temp_dir().join("skystrike_test_shell_persist");
        let _ = std::fs::remove_dir_all(&dir);

        let mut shell = CampaignShell::load(&dir).unwrap();
        shell
            .observe(&snapshot_with_completion(LevelId::One))
            .unwrap();

        // A fresh shell sees the unlock.
        let reloaded = CampaignShell::load(&dir).unwrap();
        assert!(reloaded.progress().is_unlocked(LevelId::Two));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_replay_does_not_regress() {
        let dir = std::env::temp_dir().join("skystrike_test_shell_replay");
        let _ = std::fs::remove_dir_all(&dir);

        let mut shell = CampaignShell::load(&dir).unwrap();
        shell
            .observe(&snapshot_with_completion(LevelId::One))
            .unwrap();
        shell
            .observe(&snapshot_with_completion(LevelId::Two))
            .unwrap();
        // Replaying level one must not re-lock level three.
        shell
            .observe(&snapshot_with_completion(LevelId::One))
            .unwrap();
        assert!(shell.progress().is_unlocked(LevelId::Three));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_reset_persists() {
        let dir = std::env::temp_dir().join("skystrike_test_shell_reset");
        let _ = std::fs::remove_dir_all(&dir);

        let mut shell = CampaignShell::load(&dir).unwrap();
        shell
            .observe(&snapshot_with_completion(LevelId::One))
            .unwrap();
        shell.reset().unwrap();

        let reloaded = CampaignShell::load(&dir).unwrap();
        assert!(!reloaded.progress().is_unlocked(LevelId::Two));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
