//! Level engine — the core of the game.
//!
//! `LevelEngine` owns the hecs ECS world, processes player commands, runs
//! the fixed update sequence, and produces `GameSnapshot`s. Completely
//! headless (no windowing dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::commands::PlayerCommand;
use skystrike_core::components::{Destructible, PlayerState};
use skystrike_core::enums::{GameKey, GamePhase, LevelId};
use skystrike_core::events::GameEvent;
use skystrike_core::progress::CampaignProgress;
use skystrike_core::state::GameSnapshot;
use skystrike_core::types::GameTime;

use crate::level::{LevelPolicy, WinCondition};
use crate::systems;
use crate::world_setup;

/// Configuration for creating a new engine.
pub struct EngineConfig {
    /// RNG seed for determinism. Same seed = same level run.
    pub seed: u64,
    /// Campaign unlock state, injected so the shell can persist it.
    pub progress: CampaignProgress,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            progress: CampaignProgress::default(),
        }
    }
}

/// The level engine. Owns the ECS world and all simulation state.
pub struct LevelEngine {
    world: World,
    time: GameTime,
    phase: GamePhase,
    policy: Option<LevelPolicy>,
    seed: u64,
    rng: ChaCha8Rng,
    next_actor_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
    player: Option<Entity>,
    boss: Option<Entity>,
    progress: CampaignProgress,
}

impl LevelEngine {
    /// Create a new engine with the given config. Starts at the menu.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            world: World::new(),
            time: GameTime::default(),
            phase: GamePhase::default(),
            policy: None,
            seed: config.seed,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_actor_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            player: None,
            boss: None,
            progress: config.progress,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            self.run_update_sequence();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(&self.world, &self.time, self.phase, self.policy.as_ref(), events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> GameTime {
        self.time
    }

    /// Get the active level, if any.
    pub fn level(&self) -> Option<LevelId> {
        self.policy.as_ref().map(|p| p.level)
    }

    /// Get the campaign unlock state.
    pub fn progress(&self) -> &CampaignProgress {
        &self.progress
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the ECS world (for test setup).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The player entity for the active level.
    #[cfg(test)]
    pub fn player_entity(&self) -> Option<Entity> {
        self.player
    }

    /// The boss entity, once spawned on level three.
    #[cfg(test)]
    pub fn boss_entity(&self) -> Option<Entity> {
        self.boss
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::KeyDown { key } => self.handle_key_down(key),
            PlayerCommand::KeyUp { key } => self.handle_key_up(key),
            PlayerCommand::StartLevel { level } => {
                if matches!(
                    self.phase,
                    GamePhase::Menu | GamePhase::Won | GamePhase::Lost
                ) {
                    self.start_level(level);
                }
            }
            PlayerCommand::RestartLevel => {
                if let Some(level) = self.level() {
                    self.start_level(level);
                } else {
                    log::warn!("ignoring restart with no active level");
                }
            }
            PlayerCommand::ReturnToMenu => {
                self.world.clear();
                self.policy = None;
                self.player = None;
                self.boss = None;
                self.phase = GamePhase::Menu;
                self.time = GameTime::default();
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Running {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Running;
                }
            }
            PlayerCommand::ResetProgress => {
                self.progress.reset();
            }
        }
    }

    fn handle_key_down(&mut self, key: GameKey) {
        if key == GameKey::Pause {
            match self.phase {
                GamePhase::Running => self.phase = GamePhase::Paused,
                GamePhase::Paused => self.phase = GamePhase::Running,
                _ => {}
            }
            return;
        }

        let Some(player) = self.player else { return };
        if let Ok(mut state) = self.world.get::<&mut PlayerState>(player) {
            match key {
                GameKey::Up => state.vertical_mult = -1,
                GameKey::Down => state.vertical_mult = 1,
                GameKey::Left => state.horizontal_mult = -1,
                GameKey::Right => state.horizontal_mult = 1,
                GameKey::Fire => state.fire_held = true,
                GameKey::Pause => {}
            }
        }
    }

    fn handle_key_up(&mut self, key: GameKey) {
        let Some(player) = self.player else { return };
        if let Ok(mut state) = self.world.get::<&mut PlayerState>(player) {
            // Only clear an intent the released key actually owns, so
            // opposing keys held together behave last-press-wins.
            match key {
                GameKey::Up if state.vertical_mult == -1 => state.vertical_mult = 0,
                GameKey::Down if state.vertical_mult == 1 => state.vertical_mult = 0,
                GameKey::Left if state.horizontal_mult == -1 => state.horizontal_mult = 0,
                GameKey::Right if state.horizontal_mult == 1 => state.horizontal_mult = 0,
                GameKey::Fire => state.fire_held = false,
                _ => {}
            }
        }
    }

    /// Tear down any active level and start the given one fresh.
    fn start_level(&mut self, level: LevelId) {
        if !self.progress.is_unlocked(level) {
            log::warn!("refusing to start locked level {level:?}");
            return;
        }

        log::info!("starting level {level:?} (seed {})", self.seed);
        self.world.clear();
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.next_actor_id = 0;
        self.time = GameTime::default();
        self.events.clear();

        let policy = LevelPolicy::for_level(level);
        self.player = Some(world_setup::spawn_player(
            &mut self.world,
            &mut self.next_actor_id,
            policy.player_health,
        ));
        self.boss = None;
        self.policy = Some(policy);
        self.phase = GamePhase::Running;
    }

    /// Run the fixed per-tick update sequence, in strict order.
    fn run_update_sequence(&mut self) {
        let Some(player) = self.player else { return };
        let Some(population) = self.policy.as_ref().map(|p| p.population.clone()) else {
            return;
        };

        // 1. Spawn enemies per the level policy
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.next_actor_id,
            &population,
            &mut self.boss,
        );
        // 2. Advance every actor: kinematics, then boss pattern + shield
        systems::movement::run(&mut self.world);
        systems::boss::run(&mut self.world, &mut self.rng, &mut self.events);
        // 3. Enemy fire
        systems::fire::run(&mut self.world, &mut self.rng, &mut self.next_actor_id);
        // 4. Record hostile count for end-of-tick kill reconciliation
        let hostiles_before = systems::score::count_hostiles(&mut self.world);
        // 5. Apply held-key movement/fire intents
        systems::player::run(
            &mut self.world,
            player,
            &mut self.next_actor_id,
            &mut self.events,
        );
        // 6. Boundary penetration
        systems::penetration::run(&mut self.world, player, &mut self.events);
        // 7-9. Collision passes (destroyed actors still participate)
        systems::collision::projectiles_vs_enemies(&mut self.world, &mut self.events);
        systems::collision::projectiles_vs_friendlies(&mut self.world, &mut self.events);
        systems::collision::planes_vs_planes(&mut self.world, &mut self.events);
        // 10. Purge destroyed actors and cull runaway projectiles
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, player);
        // 11. Reconcile kill counter from the hostile-count delta
        systems::score::reconcile(&mut self.world, player, hostiles_before);
        // 12. HUD state is derived in the snapshot built after this tick
        // 13. Evaluate win/lose
        self.check_game_over(player);
    }

    /// Terminal-transition check at the end of a tick.
    fn check_game_over(&mut self, player: Entity) {
        let Some(policy) = self.policy.as_ref() else {
            return;
        };
        let level = policy.level;
        let win = policy.win;

        let player_destroyed = self
            .world
            .get::<&Destructible>(player)
            .map(|d| d.destroyed)
            .unwrap_or(true);
        if player_destroyed {
            log::info!("level {level:?} failed at tick {}", self.time.tick);
            self.phase = GamePhase::Lost;
            self.events.push(GameEvent::LevelFailed { level });
            return;
        }

        let won = match win {
            WinCondition::KillTarget(target) => self
                .world
                .get::<&PlayerState>(player)
                .map(|s| s.kills >= target)
                .unwrap_or(false),
            WinCondition::BossDefeated => {
                self.boss.is_some_and(|boss| !self.world.contains(boss))
            }
        };
        if won {
            log::info!("level {level:?} complete at tick {}", self.time.tick);
            self.phase = GamePhase::Won;
            self.events.push(GameEvent::LevelComplete { level });
            self.progress.record_completion(level);
        }
    }
}
