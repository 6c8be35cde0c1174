//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    CharacterSelect,
    Playing,
    Paused,
    GameOver,
}

/// The two kinds of inbound hostiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostileKind {
    /// Enemy plane carrying a word the player must type.
    Enemy,
    /// Fast rocket, only neutralized by the detonate key.
    Rocket,
}
