//! Kind-specific behavioural profiles.
//!
//! Consolidates per-kind parameters for the hostile state machine and the
//! director's collision passes.

use typestrike_core::enums::HostileKind;

/// Behavioural profile for a hostile kind.
pub struct HostileProfile {
    /// Side of the square bounding box (pixels).
    pub size: f32,
    /// How long a shot hostile keeps exploding before removal (seconds).
    pub explosion_secs: f32,
    /// Health taken from the player on contact.
    pub contact_damage: u32,
    /// Points awarded once the explosion finishes.
    pub destroyed_score: u32,
    /// Speed at level 0 (pixels per second).
    pub base_speed: f32,
    /// Speed cap.
    pub max_speed: f32,
    /// Whether the hostile carries a word to type.
    pub carries_word: bool,
}

impl HostileProfile {
    /// Spawn speed at a difficulty level.
    pub fn speed_for_level(&self, level: u32) -> f32 {
        use typestrike_core::constants::SPEED_PER_LEVEL;

        (self.base_speed + level as f32 * SPEED_PER_LEVEL).clamp(self.base_speed, self.max_speed)
    }
}

/// Get the behavioural profile for a given kind.
pub fn get_profile(kind: HostileKind) -> HostileProfile {
    use typestrike_core::constants::*;

    match kind {
        HostileKind::Enemy => HostileProfile {
            size: HOSTILE_SIZE,
            explosion_secs: EXPLOSION_DURATION_SECS,
            contact_damage: ENEMY_CONTACT_DAMAGE,
            destroyed_score: SCORE_ENEMY_DESTROYED,
            base_speed: ENEMY_BASE_SPEED,
            max_speed: ENEMY_MAX_SPEED,
            carries_word: true,
        },
        HostileKind::Rocket => HostileProfile {
            size: HOSTILE_SIZE,
            explosion_secs: EXPLOSION_DURATION_SECS,
            contact_damage: ROCKET_CONTACT_DAMAGE,
            // Rockets only pay out when detonated.
            destroyed_score: 0,
            base_speed: ROCKET_BASE_SPEED,
            max_speed: ROCKET_MAX_SPEED,
            carries_word: false,
        },
    }
}
