//! Per-tick passes over the simulation world.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only)
//! plus whatever engine state they need passed in explicitly.

pub mod detonation;
pub mod hostiles;
pub mod projectiles;
pub mod snapshot;
pub mod spawner;

use hecs::{Entity, World};

use typestrike_core::components::{Hostile, SpawnOrder};
use typestrike_core::enums::HostileKind;

/// Entities of one kind, sorted by spawn sequence.
///
/// Order-sensitive passes iterate this list rather than a live query, so
/// despawning during a pass cannot skip or repeat an entry.
pub fn in_spawn_order(world: &World, kind: HostileKind) -> Vec<Entity> {
    let mut entries: Vec<(SpawnOrder, Entity)> = world
        .query::<(&Hostile, &SpawnOrder)>()
        .iter()
        .filter(|(_, (hostile, _))| hostile.kind == kind)
        .map(|(entity, (_, order))| (*order, entity))
        .collect();
    entries.sort_unstable_by_key(|(order, _)| *order);
    entries.into_iter().map(|(_, entity)| entity).collect()
}

/// Number of live entities of a kind, exploding ones included.
pub fn count_of(world: &World, kind: HostileKind) -> usize {
    world
        .query::<&Hostile>()
        .iter()
        .filter(|(_, hostile)| hostile.kind == kind)
        .count()
}

/// Stable id of a hostile for events and views.
pub fn hostile_id(world: &World, entity: Entity) -> u64 {
    world
        .get::<&SpawnOrder>(entity)
        .map(|order| order.0)
        .unwrap_or_default()
}
