//! Events emitted by the simulation for UI and audio feedback.
//!
//! Events are collected during a tick and handed out with that tick's
//! snapshot. They never feed back into the simulation.

use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, HostileKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    EnemySpawned { id: u64, word: String },
    RocketSpawned { id: u64 },
    /// A typed letter matched the current target.
    LetterMatched { id: u64, letter_index: usize },
    /// A typed letter did not match; progress was lost.
    Mistype { letter: char },
    /// The last letter of a word was typed.
    WordCompleted { id: u64, word: String },
    ProjectileFired,
    /// A projectile struck an enemy.
    EnemyHit { id: u64 },
    /// A shot hostile stopped and began exploding.
    ExplosionStarted { id: u64, kind: HostileKind },
    /// A shot hostile finished exploding.
    HostileDestroyed { id: u64, kind: HostileKind },
    RocketDetonated { id: u64 },
    /// A hostile reached the player.
    PlayerHit {
        kind: HostileKind,
        damage: u32,
        health: u32,
    },
    LevelUp { level: u32 },
    Victory { score: u32 },
    Defeat { score: u32 },
    PhaseChanged { from: GamePhase, to: GamePhase },
}
