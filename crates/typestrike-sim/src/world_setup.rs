//! Entity spawn factories for the simulation world.
//!
//! Enemies and rockets get their component bundles here. Randomness is
//! always drawn from the generator passed in.

use hecs::{Entity, EntityBuilder, World};
use rand::Rng;

use typestrike_core::components::{SpawnOrder, TargetWord};
use typestrike_core::constants::{SPAWN_EDGE_OFFSET, WORD_LIST};
use typestrike_core::enums::HostileKind;
use typestrike_core::types::{Canvas, Position};
use typestrike_hostiles::fsm;
use typestrike_hostiles::profiles::get_profile;

/// Random point just outside one of the four canvas edges.
///
/// The coordinate along the edge is a whole number in `[0, width)` or
/// `[0, height)`.
pub fn spawn_edge_position(rng: &mut impl Rng, canvas: &Canvas) -> Position {
    let width = canvas.width.max(1.0) as u32;
    let height = canvas.height.max(1.0) as u32;

    match rng.gen_range(0..4) {
        0 => Position::new(rng.gen_range(0..width) as f32, -SPAWN_EDGE_OFFSET),
        1 => Position::new(
            canvas.width + SPAWN_EDGE_OFFSET,
            rng.gen_range(0..height) as f32,
        ),
        2 => Position::new(
            rng.gen_range(0..width) as f32,
            canvas.height + SPAWN_EDGE_OFFSET,
        ),
        _ => Position::new(-SPAWN_EDGE_OFFSET, rng.gen_range(0..height) as f32),
    }
}

/// Uniform pick from the word list.
pub fn pick_word(rng: &mut impl Rng) -> &'static str {
    WORD_LIST[rng.gen_range(0..WORD_LIST.len())]
}

/// Spawn a hostile of `kind` homing on the player's current position.
///
/// The word is attached only when the kind's profile carries one.
pub fn spawn_hostile(
    world: &mut World,
    kind: HostileKind,
    seq: u64,
    word: Option<&str>,
    spawn: Position,
    speed: f32,
    player: &Position,
) -> Entity {
    let hostile = fsm::new_hostile(kind, &spawn, speed, player);
    let mut builder = EntityBuilder::new();
    builder.add(spawn).add(hostile).add(SpawnOrder(seq));
    if get_profile(kind).carries_word {
        builder.add(TargetWord {
            word: word.unwrap_or_default().to_string(),
            shake_offset: 0.0,
        });
    }
    world.spawn(builder.build())
}

/// Spawn an enemy plane homing on the player's current position.
pub fn spawn_enemy(
    world: &mut World,
    seq: u64,
    word: &str,
    spawn: Position,
    speed: f32,
    player: &Position,
) -> Entity {
    spawn_hostile(world, HostileKind::Enemy, seq, Some(word), spawn, speed, player)
}

/// Spawn a rocket homing on the player's current position.
pub fn spawn_rocket(
    world: &mut World,
    seq: u64,
    spawn: Position,
    speed: f32,
    player: &Position,
) -> Entity {
    spawn_hostile(world, HostileKind::Rocket, seq, None, spawn, speed, player)
}
