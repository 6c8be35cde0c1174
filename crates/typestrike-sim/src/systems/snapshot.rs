//! Snapshot system: reads the world and player state into a GameStateSnapshot.
//!
//! Read-only; it never modifies the world.

use hecs::{Entity, World};

use typestrike_core::components::*;
use typestrike_core::enums::*;
use typestrike_core::events::GameEvent;
use typestrike_core::state::*;
use typestrike_core::types::{Position, SimTime};
use typestrike_hostiles::fsm;

use crate::difficulty::level_progress;
use crate::player::PlayerAgent;
use crate::systems::{hostile_id, in_spawn_order};

/// Engine state the snapshot needs besides the world.
pub struct SnapshotContext<'a> {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: &'a PlayerAgent,
    pub score: u32,
    pub level: u32,
    pub won: bool,
    pub selected_plane: usize,
    pub exit_requested: bool,
}

/// Build a complete GameStateSnapshot from the current state.
pub fn build_snapshot(
    world: &World,
    ctx: &SnapshotContext<'_>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let mut hostiles = build_hostiles(world, HostileKind::Enemy, ctx.player);
    hostiles.extend(build_hostiles(world, HostileKind::Rocket, ctx.player));

    GameStateSnapshot {
        time: ctx.time,
        phase: ctx.phase,
        hostiles,
        projectiles: build_projectiles(ctx.player),
        player: build_player(world, ctx.player),
        score: ctx.score,
        level: ctx.level,
        level_progress: level_progress(ctx.level),
        won: ctx.won,
        selected_plane: ctx.selected_plane,
        exit_requested: ctx.exit_requested,
        events,
    }
}

fn build_hostiles(world: &World, kind: HostileKind, player: &PlayerAgent) -> Vec<HostileView> {
    in_spawn_order(world, kind)
        .into_iter()
        .filter_map(|entity| build_hostile(world, entity, player))
        .collect()
}

fn build_hostile(world: &World, entity: Entity, player: &PlayerAgent) -> Option<HostileView> {
    let hostile = world.get::<&Hostile>(entity).ok()?;
    let position = *world.get::<&Position>(entity).ok()?;
    let word = world.get::<&TargetWord>(entity).ok();
    let is_target = player.tracker.is_target(entity);

    Some(HostileView {
        id: hostile_id(world, entity),
        kind: hostile.kind,
        position,
        bounds: fsm::bounds(&hostile, &position),
        heading: fsm::heading(&hostile),
        shot: hostile.shot,
        exploding: hostile.exploding,
        explosion_timer: hostile.explosion_timer,
        explosion_progress: fsm::explosion_progress(&hostile),
        word: word.as_ref().map(|w| w.word.clone()),
        is_target,
        typed_letters: is_target.then_some(player.tracker.letter_index),
        shake_offset: word.as_ref().map_or(0.0, |w| w.shake_offset),
    })
}

fn build_projectiles(player: &PlayerAgent) -> Vec<ProjectileView> {
    player
        .projectiles
        .iter()
        .map(|p| ProjectileView {
            position: p.position,
            bounds: p.bounds(),
        })
        .collect()
}

fn build_player(world: &World, player: &PlayerAgent) -> PlayerView {
    PlayerView {
        position: player.position,
        health: player.health,
        plane: player.plane,
        // A target removed since the last player update is reported as none.
        target: player
            .tracker
            .target
            .filter(|&e| world.contains(e))
            .map(|e| hostile_id(world, e)),
        letter_index: player.tracker.letter_index,
        shake_timer: player.tracker.shake_timer,
    }
}
