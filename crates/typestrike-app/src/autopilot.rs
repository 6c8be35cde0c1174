//! Autopilot typist: turns snapshots into player commands.
//!
//! Confirms its way through the menus, then types the current target's
//! word at a fixed rate. Each key is right with probability `accuracy`;
//! wrong keys come from the autopilot's own seeded generator, so a run is
//! reproducible from the two seeds.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use typestrike_core::commands::PlayerCommand;
use typestrike_core::enums::{GamePhase, HostileKind};
use typestrike_core::state::{GameStateSnapshot, HostileView};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutopilotConfig {
    /// Typing speed in keys per second.
    pub keys_per_sec: f32,
    /// Probability in `[0, 1]` that a key is the right one.
    pub accuracy: f64,
    pub seed: u64,
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self {
            keys_per_sec: 5.0,
            accuracy: 0.95,
            seed: 7,
        }
    }
}

pub struct Autopilot {
    config: AutopilotConfig,
    rng: ChaCha8Rng,
    /// Fractional keys owed from earlier ticks.
    key_budget: f32,
    pub keys_typed: u64,
    pub mistypes: u64,
}

impl Autopilot {
    pub fn new(config: AutopilotConfig) -> Self {
        Self {
            config: AutopilotConfig {
                accuracy: config.accuracy.clamp(0.0, 1.0),
                keys_per_sec: config.keys_per_sec.max(0.0),
                ..config
            },
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            key_budget: 0.0,
            keys_typed: 0,
            mistypes: 0,
        }
    }

    /// Commands to queue before the next tick, given the latest snapshot.
    pub fn next_commands(&mut self, snapshot: &GameStateSnapshot, dt: f32) -> Vec<PlayerCommand> {
        match snapshot.phase {
            GamePhase::MainMenu | GamePhase::CharacterSelect | GamePhase::Paused => {
                vec![PlayerCommand::Confirm]
            }
            GamePhase::Playing => self.play(snapshot, dt),
            GamePhase::GameOver => Vec::new(),
        }
    }

    fn play(&mut self, snapshot: &GameStateSnapshot, dt: f32) -> Vec<PlayerCommand> {
        let mut commands = Vec::new();

        let live_rocket = snapshot
            .hostiles
            .iter()
            .any(|h| h.kind == HostileKind::Rocket && !h.shot);
        if live_rocket {
            commands.push(PlayerCommand::Detonate);
        }

        let Some(word) = next_target(snapshot).and_then(|h| h.word.as_deref()) else {
            // Nothing to type; don't bank keys for later.
            self.key_budget = self.key_budget.min(1.0);
            return commands;
        };
        let word: Vec<char> = word.chars().collect();

        self.key_budget += self.config.keys_per_sec * dt;
        let mut index = snapshot.player.letter_index;
        if index >= word.len() {
            // Progress carried over from a longer word; the next key resets it.
            index = 0;
        }
        while self.key_budget >= 1.0 && index < word.len() {
            self.key_budget -= 1.0;
            self.keys_typed += 1;

            let wanted = word[index];
            let letter = if self.rng.gen_bool(self.config.accuracy) {
                index += 1;
                wanted
            } else {
                self.mistypes += 1;
                index = 0;
                self.wrong_letter(wanted)
            };
            trace!(letter = %letter, wanted = %wanted, "autopilot key");
            commands.push(PlayerCommand::TypeLetter { letter });
        }

        commands
    }

    fn wrong_letter(&mut self, wanted: char) -> char {
        loop {
            let letter = self.rng.gen_range(b'a'..=b'z') as char;
            if letter != wanted {
                return letter;
            }
        }
    }
}

/// The hostile the engine will aim typing at on the next tick: the first
/// enemy in spawn order that is not shot.
fn next_target(snapshot: &GameStateSnapshot) -> Option<&HostileView> {
    snapshot
        .hostiles
        .iter()
        .find(|h| h.kind == HostileKind::Enemy && !h.shot)
}
