//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs world of hostiles and the player agent,
//! folds queued commands into one input frame per tick, runs the phase
//! machine and the Playing step, and produces `GameStateSnapshot`s.
//! Headless, so the whole game can be driven from tests.

use std::collections::VecDeque;
use std::fmt;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use typestrike_core::commands::{InputFrame, PlayerCommand};
use typestrike_core::enums::{GamePhase, HostileKind};
use typestrike_core::events::GameEvent;
use typestrike_core::state::GameStateSnapshot;
use typestrike_core::types::{Canvas, SimTime};

use crate::difficulty::Difficulty;
use crate::phase::{self, PlaneSelection, Transition};
use crate::player::PlayerAgent;
use crate::systems;
use crate::systems::snapshot::SnapshotContext;
use crate::systems::spawner::{SpawnContext, SpawnTimers};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Logical screen used for spawning, culling and the player position.
    pub canvas: Canvas,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            canvas: Canvas::default(),
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Canvas { width, height } = self.canvas;
        if !width.is_finite() || !height.is_finite() {
            return Err(ConfigError::NonFiniteCanvas { width, height });
        }
        if width < 1.0 || height < 1.0 {
            return Err(ConfigError::CanvasTooSmall { width, height });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonFiniteCanvas { width: f32, height: f32 },
    CanvasTooSmall { width: f32, height: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteCanvas { width, height } => {
                write!(f, "canvas dimensions must be finite, got {width}x{height}")
            }
            Self::CanvasTooSmall { width, height } => {
                write!(f, "canvas must be at least 1x1, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    config: SimConfig,
    time: SimTime,
    phase: GamePhase,
    selection: PlaneSelection,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,

    player: PlayerAgent,
    difficulty: Difficulty,
    spawn_timers: SpawnTimers,
    next_spawn_seq: u64,
    score: u32,
    won: bool,
    exit_requested: bool,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            selection: PlaneSelection::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            player: PlayerAgent::new(config.canvas.center(), 0),
            difficulty: Difficulty::default(),
            spawn_timers: SpawnTimers::default(),
            next_spawn_seq: 0,
            score: 0,
            won: false,
            exit_requested: false,
            config,
        }
    }

    /// Validate the config, then create the engine.
    pub fn try_new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick of `dt` seconds and return the
    /// resulting snapshot.
    pub fn tick(&mut self, dt: f32) -> GameStateSnapshot {
        let input = InputFrame::from_commands(self.command_queue.drain(..));

        match phase::transition(self.phase, &input, &mut self.selection) {
            Transition::Stay => {}
            Transition::Step => {
                self.step_playing(&input, dt);
                self.time.advance(dt);
            }
            Transition::Goto(next) => self.set_phase(next),
            Transition::StartGame { plane } => {
                self.start_game(plane);
                self.set_phase(GamePhase::Playing);
            }
            Transition::ReturnToMenu => {
                self.selection.reset();
                self.won = false;
                self.set_phase(GamePhase::MainMenu);
            }
            Transition::Exit => {
                info!("exit requested from main menu");
                self.exit_requested = true;
            }
        }

        self.build_snapshot()
    }

    /// Snapshot of the current state without advancing. Carries no events.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(&self.world, &self.snapshot_context(), Vec::new())
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.difficulty.level
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn an enemy at a chosen position and speed (for testing).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        word: &str,
        position: typestrike_core::types::Position,
        speed: f32,
    ) -> hecs::Entity {
        let seq = self.next_seq();
        crate::world_setup::spawn_enemy(
            &mut self.world,
            seq,
            word,
            position,
            speed,
            &self.player.position,
        )
    }

    /// Spawn a rocket at a chosen position and speed (for testing).
    #[cfg(test)]
    pub fn spawn_test_rocket(
        &mut self,
        position: typestrike_core::types::Position,
        speed: f32,
    ) -> hecs::Entity {
        let seq = self.next_seq();
        crate::world_setup::spawn_rocket(&mut self.world, seq, position, speed, &self.player.position)
    }

    #[cfg(test)]
    pub fn player(&self) -> &PlayerAgent {
        &self.player
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut PlayerAgent {
        &mut self.player
    }

    #[cfg(test)]
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    #[cfg(test)]
    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    #[cfg(test)]
    pub fn spawn_timers_mut(&mut self) -> &mut SpawnTimers {
        &mut self.spawn_timers
    }

    /// One Playing tick, in the fixed order: player, level, spawns,
    /// detonation, projectiles, enemies, rockets.
    fn step_playing(&mut self, input: &InputFrame, dt: f32) {
        self.player
            .update(&mut self.world, &input.letters, dt, &mut self.events);

        if let Some(level) = self.difficulty.update_for_score(self.score) {
            info!(
                level,
                score = self.score,
                interval = self.difficulty.spawn_interval_secs,
                per_spawn = self.difficulty.enemies_per_spawn,
                "level up"
            );
            self.events.push(GameEvent::LevelUp { level });
        }

        if self.difficulty.is_final_level() && !self.won {
            self.won = true;
            info!(score = self.score, "victory");
            self.events.push(GameEvent::Victory { score: self.score });
            self.set_phase(GamePhase::GameOver);
            return;
        }

        let player_pos = self.player.position;
        let mut spawn_ctx = SpawnContext {
            rng: &mut self.rng,
            canvas: &self.config.canvas,
            player: &player_pos,
            next_seq: &mut self.next_spawn_seq,
            events: &mut self.events,
        };
        systems::spawner::run_enemies(
            &mut self.world,
            &mut self.spawn_timers,
            &self.difficulty,
            &mut spawn_ctx,
            dt,
        );
        systems::spawner::run_rockets(
            &mut self.world,
            &mut self.spawn_timers,
            &self.difficulty,
            &mut spawn_ctx,
            dt,
        );

        if input.detonate {
            systems::detonation::run(&mut self.world, &mut self.score, &mut self.events);
        }

        systems::projectiles::run(
            &mut self.world,
            &mut self.player.projectiles,
            &self.config.canvas,
            &mut self.score,
            &mut self.events,
        );

        for kind in [HostileKind::Enemy, HostileKind::Rocket] {
            systems::hostiles::run(
                &mut self.world,
                kind,
                &mut self.player,
                &mut self.score,
                &mut self.despawn_buffer,
                &mut self.events,
                dt,
            );
        }

        if self.player.is_dead() {
            info!(score = self.score, level = self.difficulty.level, "defeat");
            self.events.push(GameEvent::Defeat { score: self.score });
            self.set_phase(GamePhase::GameOver);
        }
    }

    /// Fresh game with the chosen plane. Spawn sequence numbers keep counting
    /// so ids stay unique across games.
    fn start_game(&mut self, plane: usize) {
        self.world.clear();
        self.player = PlayerAgent::new(self.config.canvas.center(), plane);
        self.difficulty = Difficulty::default();
        self.spawn_timers = SpawnTimers::default();
        self.score = 0;
        info!(plane, "new game");
    }

    fn set_phase(&mut self, next: GamePhase) {
        if next == self.phase {
            return;
        }
        info!(from = ?self.phase, to = ?next, "phase changed");
        self.events.push(GameEvent::PhaseChanged {
            from: self.phase,
            to: next,
        });
        self.phase = next;
    }

    #[cfg(test)]
    fn next_seq(&mut self) -> u64 {
        let seq = self.next_spawn_seq;
        self.next_spawn_seq += 1;
        seq
    }

    fn snapshot_context(&self) -> SnapshotContext<'_> {
        SnapshotContext {
            time: self.time,
            phase: self.phase,
            player: &self.player,
            score: self.score,
            level: self.difficulty.level,
            won: self.won,
            selected_plane: self.selection.index,
            exit_requested: self.exit_requested,
        }
    }

    fn build_snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.snapshot_context(), events)
    }
}
