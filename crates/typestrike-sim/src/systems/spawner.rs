//! Timed spawning of enemy waves and rockets.

use hecs::World;
use rand::Rng;
use tracing::debug;

use typestrike_core::constants::*;
use typestrike_core::enums::HostileKind;
use typestrike_core::events::GameEvent;
use typestrike_core::types::{Canvas, Position};
use typestrike_hostiles::profiles::get_profile;

use crate::difficulty::Difficulty;
use crate::systems::count_of;
use crate::world_setup;

/// Seconds accumulated toward the next enemy wave and the next rocket.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpawnTimers {
    pub enemy_elapsed: f32,
    pub rocket_elapsed: f32,
}

/// Shared spawn context for one tick.
pub struct SpawnContext<'a, R: Rng> {
    pub rng: &'a mut R,
    pub canvas: &'a Canvas,
    pub player: &'a Position,
    pub next_seq: &'a mut u64,
    pub events: &'a mut Vec<GameEvent>,
}

/// Spawn a wave of enemies once the interval has elapsed and the live count
/// is under the cap. A wave may overshoot the cap.
pub fn run_enemies<R: Rng>(
    world: &mut World,
    timers: &mut SpawnTimers,
    difficulty: &Difficulty,
    ctx: &mut SpawnContext<'_, R>,
    dt: f32,
) {
    timers.enemy_elapsed += dt;
    if timers.enemy_elapsed < difficulty.spawn_interval_secs
        || count_of(world, HostileKind::Enemy) >= MAX_LIVE_ENEMIES
    {
        return;
    }

    let speed = get_profile(HostileKind::Enemy).speed_for_level(difficulty.level);
    for _ in 0..difficulty.enemies_per_spawn {
        let word = world_setup::pick_word(&mut *ctx.rng);
        let spawn = world_setup::spawn_edge_position(&mut *ctx.rng, ctx.canvas);
        let seq = next(ctx.next_seq);
        world_setup::spawn_enemy(world, seq, word, spawn, speed, ctx.player);
        debug!(id = seq, word, x = spawn.0.x, y = spawn.0.y, "enemy spawned");
        ctx.events.push(GameEvent::EnemySpawned {
            id: seq,
            word: word.to_string(),
        });
    }
    timers.enemy_elapsed = 0.0;
}

/// Spawn one rocket on its own fixed interval, from the rocket level onward.
pub fn run_rockets<R: Rng>(
    world: &mut World,
    timers: &mut SpawnTimers,
    difficulty: &Difficulty,
    ctx: &mut SpawnContext<'_, R>,
    dt: f32,
) {
    if !difficulty.rockets_enabled() {
        return;
    }
    timers.rocket_elapsed += dt;
    if timers.rocket_elapsed < ROCKET_SPAWN_INTERVAL_SECS
        || count_of(world, HostileKind::Rocket) >= MAX_LIVE_ROCKETS
    {
        return;
    }

    let speed = get_profile(HostileKind::Rocket).speed_for_level(difficulty.level);
    let spawn = world_setup::spawn_edge_position(&mut *ctx.rng, ctx.canvas);
    let seq = next(ctx.next_seq);
    world_setup::spawn_rocket(world, seq, spawn, speed, ctx.player);
    debug!(id = seq, x = spawn.0.x, y = spawn.0.y, "rocket spawned");
    ctx.events.push(GameEvent::RocketSpawned { id: seq });
    timers.rocket_elapsed = 0.0;
}

fn next(seq: &mut u64) -> u64 {
    let id = *seq;
    *seq += 1;
    id
}
