//! Game loop thread — runs the level engine at 20Hz and emits snapshots.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. Snapshots go out through
//! the sink callback and are stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use skystrike_core::constants::TICK_RATE;
use skystrike_sim::engine::{EngineConfig, LevelEngine};

use crate::state::{GameLoopCommand, SharedSnapshot, SnapshotSink};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the frontend to use.
pub fn spawn_game_loop(
    config: EngineConfig,
    mut sink: SnapshotSink,
    latest_snapshot: SharedSnapshot,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("skystrike-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &mut sink, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: EngineConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    sink: &mut SnapshotSink,
    latest_snapshot: &SharedSnapshot,
) {
    let mut engine = LevelEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();

        // 3. Push the snapshot to the frontend
        sink(&snapshot);

        // 4. Store it for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next tick boundary
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skystrike_core::commands::PlayerCommand;
    use skystrike_core::enums::{GamePhase, LevelId};
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_tick_duration_constant() {
        // 20Hz = 50ms per tick
        assert_eq!(TICK_DURATION.as_millis(), 50);
    }

    #[test]
    fn test_loop_thread_runs_and_shuts_down() {
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));
        let tick_count = Arc::new(Mutex::new(0u64));

        let sink_count = Arc::clone(&tick_count);
        let tx = spawn_game_loop(
            EngineConfig::default(),
            Box::new(move |_snap| {
                *sink_count.lock().unwrap() += 1;
            }),
            Arc::clone(&latest),
        );

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartLevel {
            level: LevelId::One,
        }))
        .unwrap();

        // Give the loop a few ticks of real time.
        std::thread::sleep(Duration::from_millis(300));
        tx.send(GameLoopCommand::Shutdown).unwrap();
        std::thread::sleep(Duration::from_millis(100));

        assert!(*tick_count.lock().unwrap() > 0);
        let snap = latest.lock().unwrap().clone().expect("no snapshot stored");
        assert_eq!(snap.phase, GamePhase::Running);
        assert!(snap.time.tick > 0);
    }
}
