//! Hostile state machine.
//!
//! A hostile flies in a straight line toward the point the player occupied
//! when it spawned. Once shot it stops, explodes for a fixed time, and is then
//! due for removal:
//!
//! ```text
//! Inbound --(shot)--> Exploding --(timer <= 0)--> removable
//! ```
//!
//! Pure functions over component data; the sim crate decides what to do with
//! the outcome.

use glam::Vec2;

use typestrike_core::components::Hostile;
use typestrike_core::constants::{SHAKE_AMPLITUDE, SHAKE_FREQUENCY};
use typestrike_core::enums::HostileKind;
use typestrike_core::types::{Bounds, Position};

use crate::profiles::get_profile;

/// What one call to `advance` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Still inbound; position moved along the frozen direction.
    Moved,
    /// Was shot since the last tick; explosion just started.
    ExplosionStarted,
    /// Explosion timer counting down.
    Exploding,
}

/// Unit vector from the spawn point toward the player. Zero if they coincide.
pub fn homing_direction(spawn: &Position, player: &Position) -> Vec2 {
    spawn.direction_to(player)
}

/// Build a fresh inbound hostile. The direction is computed once here and
/// never recomputed.
pub fn new_hostile(kind: HostileKind, spawn: &Position, speed: f32, player: &Position) -> Hostile {
    Hostile {
        kind,
        speed,
        direction: homing_direction(spawn, player),
        shot: false,
        exploding: false,
        explosion_timer: 0.0,
    }
}

/// Advance one hostile by `dt` seconds.
pub fn advance(hostile: &mut Hostile, position: &mut Position, dt: f32) -> Step {
    let mut step = Step::Exploding;

    if hostile.shot && !hostile.exploding {
        hostile.exploding = true;
        hostile.explosion_timer = get_profile(hostile.kind).explosion_secs;
        step = Step::ExplosionStarted;
    }

    if hostile.exploding {
        // Allowed to go negative.
        hostile.explosion_timer -= dt;
        step
    } else {
        position.0 += hostile.direction * hostile.speed * dt;
        Step::Moved
    }
}

/// True once a shot hostile has finished exploding.
pub fn should_remove(hostile: &Hostile) -> bool {
    hostile.exploding && hostile.explosion_timer <= 0.0
}

/// Horizontal shake applied to the current target after a mistype.
pub fn shake_offset(is_current_target: bool, shake_timer: f32) -> f32 {
    if is_current_target && shake_timer > 0.0 {
        (shake_timer * SHAKE_FREQUENCY).sin() * SHAKE_AMPLITUDE
    } else {
        0.0
    }
}

/// Bounding box centred on the hostile, used for drawing and projectile hits.
pub fn bounds(hostile: &Hostile, position: &Position) -> Bounds {
    Bounds::centered(position.0, get_profile(hostile.kind).size)
}

/// Fraction of the explosion already played, 0.0 to 1.0.
pub fn explosion_progress(hostile: &Hostile) -> f32 {
    if !hostile.exploding {
        return 0.0;
    }
    let total = get_profile(hostile.kind).explosion_secs;
    (1.0 - hostile.explosion_timer / total).clamp(0.0, 1.0)
}

/// Sprite rotation facing the direction of travel (radians).
pub fn heading(hostile: &Hostile) -> f32 {
    hostile.direction.y.atan2(hostile.direction.x) + std::f32::consts::FRAC_PI_2
}
