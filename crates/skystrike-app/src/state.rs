//! Shared state between the frontend side and the game loop thread.

use std::sync::{Arc, Mutex};

use skystrike_core::commands::PlayerCommand;
use skystrike_core::state::GameSnapshot;

/// Commands sent from the frontend to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the level engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, written by the loop thread and polled by the frontend.
pub type SharedSnapshot = Arc<Mutex<Option<GameSnapshot>>>;

/// Callback invoked with every snapshot the loop produces, on the loop
/// thread. Frontends use it to push frames instead of polling.
pub type SnapshotSink = Box<dyn FnMut(&GameSnapshot) + Send>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 2);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[1], GameLoopCommand::Shutdown));
    }
}
