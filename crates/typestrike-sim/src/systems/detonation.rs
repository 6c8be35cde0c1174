//! Detonate key: blow up the oldest live rocket.

use hecs::World;
use tracing::debug;

use typestrike_core::components::Hostile;
use typestrike_core::constants::SCORE_ROCKET_DETONATED;
use typestrike_core::enums::HostileKind;
use typestrike_core::events::GameEvent;

use crate::systems::{hostile_id, in_spawn_order};

/// Mark the first not-yet-shot rocket as shot and award the detonation bonus.
/// At most one rocket per key press.
pub fn run(world: &mut World, score: &mut u32, events: &mut Vec<GameEvent>) -> bool {
    for entity in in_spawn_order(world, HostileKind::Rocket) {
        let Ok(mut hostile) = world.get::<&mut Hostile>(entity) else {
            continue;
        };
        if hostile.shot {
            continue;
        }
        hostile.shot = true;
        drop(hostile);

        *score += SCORE_ROCKET_DETONATED;
        let id = hostile_id(world, entity);
        debug!(id, score = *score, "rocket detonated");
        events.push(GameEvent::RocketDetonated { id });
        return true;
    }
    false
}
