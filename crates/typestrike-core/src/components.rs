//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems and in the hostile state machine.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::HostileKind;

/// An inbound enemy plane or rocket homing on the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hostile {
    pub kind: HostileKind,
    /// Fixed speed (pixels per second).
    pub speed: f32,
    /// Unit vector toward the player's position at spawn time. Never re-aimed.
    pub direction: Vec2,
    /// Hit by a projectile, a completed word, or a detonation.
    pub shot: bool,
    /// Explosion under way; movement has stopped.
    pub exploding: bool,
    /// Seconds of explosion left. May go negative.
    pub explosion_timer: f32,
}

/// Monotonic spawn sequence. Recovers list order from the ECS world and
/// doubles as the stable hostile id exposed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpawnOrder(pub u64);

/// The word displayed under an enemy plane.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetWord {
    pub word: String,
    /// Cosmetic horizontal shake while targeted after a mistype.
    pub shake_offset: f32,
}

// Position lives in types.rs and is used as a component as well.
