//! Headless demo driver: starts level one, holds the fire key, and polls
//! snapshots until the level ends.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use skystrike_app::game_loop::spawn_game_loop;
use skystrike_app::shell::CampaignShell;
use skystrike_app::state::{GameLoopCommand, SharedSnapshot};
use skystrike_core::commands::PlayerCommand;
use skystrike_core::enums::{GameKey, GamePhase, LevelId};
use skystrike_sim::engine::EngineConfig;

fn main() {
    env_logger::init();

    let progress_dir = std::env::temp_dir().join("skystrike");
    let shell = match CampaignShell::load(&progress_dir) {
        Ok(shell) => Arc::new(Mutex::new(shell)),
        Err(err) => {
            log::error!("could not load campaign progress: {err}");
            return;
        }
    };

    let initial_progress = shell.lock().map(|s| s.progress()).unwrap_or_default();
    let latest: SharedSnapshot = Arc::new(Mutex::new(None));

    // Persist completions from the sink: events only appear in the one
    // snapshot of the tick they fired, which 200ms polling would miss.
    let sink_shell = Arc::clone(&shell);
    let tx = spawn_game_loop(
        EngineConfig {
            seed: rand_seed(),
            progress: initial_progress,
        },
        Box::new(move |snapshot| {
            if let Ok(mut shell) = sink_shell.lock() {
                if let Err(err) = shell.observe(snapshot) {
                    log::error!("could not persist progress: {err}");
                }
            }
        }),
        Arc::clone(&latest),
    );

    let _ = tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartLevel {
        level: LevelId::One,
    }));
    let _ = tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::KeyDown {
        key: GameKey::Fire,
    }));

    // Poll until the level ends or a five-minute safety limit passes.
    for _ in 0..(5 * 60 * 5) {
        std::thread::sleep(Duration::from_millis(200));

        let snapshot = match latest.lock() {
            Ok(lock) => lock.clone(),
            Err(_) => break,
        };
        let Some(snapshot) = snapshot else { continue };

        if let Some(player) = &snapshot.player {
            log::debug!(
                "tick {} health {} kills {}",
                snapshot.time.tick,
                player.health,
                player.kills
            );
        }

        match snapshot.phase {
            GamePhase::Won => {
                log::info!("level complete after {:.1}s", snapshot.time.elapsed_secs);
                break;
            }
            GamePhase::Lost => {
                log::info!("level failed after {:.1}s", snapshot.time.elapsed_secs);
                break;
            }
            _ => {}
        }
    }

    let _ = tx.send(GameLoopCommand::Shutdown);
}

/// Seed from the wall clock so demo runs differ; tests construct engines
/// with fixed seeds instead.
fn rand_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42)
}
