//! Hostile pass: advance each enemy or rocket, then resolve explosions and
//! contact with the player.

use hecs::{Entity, World};
use tracing::{debug, info};

use typestrike_core::components::{Hostile, SpawnOrder, TargetWord};
use typestrike_core::constants::CONTACT_RADIUS;
use typestrike_core::enums::HostileKind;
use typestrike_core::events::GameEvent;
use typestrike_core::types::Position;
use typestrike_hostiles::fsm::{self, Step};
use typestrike_hostiles::profiles::get_profile;

use crate::player::PlayerAgent;
use crate::systems::in_spawn_order;

/// Run the pass for one kind, in spawn order. Removals are buffered and
/// applied after the last entity has been handled.
pub fn run(
    world: &mut World,
    kind: HostileKind,
    player: &mut PlayerAgent,
    score: &mut u32,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
    dt: f32,
) {
    despawn_buffer.clear();
    let profile = get_profile(kind);

    for entity in in_spawn_order(world, kind) {
        let Ok((hostile, pos, order, word)) = world
            .query_one_mut::<(&mut Hostile, &mut Position, &SpawnOrder, Option<&mut TargetWord>)>(
                entity,
            )
        else {
            continue;
        };
        let id = order.0;

        match fsm::advance(hostile, pos, dt) {
            Step::Moved => {
                if let Some(word) = word {
                    word.shake_offset = fsm::shake_offset(
                        player.tracker.is_target(entity),
                        player.tracker.shake_timer,
                    );
                }
            }
            Step::ExplosionStarted => {
                debug!(id, ?kind, "explosion started");
                events.push(GameEvent::ExplosionStarted { id, kind });
            }
            Step::Exploding => {}
        }

        if hostile.shot {
            if fsm::should_remove(hostile) {
                despawn_buffer.push(entity);
                *score += profile.destroyed_score;
                debug!(id, ?kind, score = *score, "hostile destroyed");
                events.push(GameEvent::HostileDestroyed { id, kind });
            }
        } else if pos.distance_to(&player.position) < CONTACT_RADIUS {
            despawn_buffer.push(entity);
            player.take_damage(profile.contact_damage);
            info!(
                id,
                ?kind,
                damage = profile.contact_damage,
                health = player.health,
                "player hit"
            );
            events.push(GameEvent::PlayerHit {
                kind,
                damage: profile.contact_damage,
                health: player.health,
            });
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typestrike_core::constants::*;

    use crate::world_setup;

    fn setup() -> (World, PlayerAgent) {
        (World::new(), PlayerAgent::new(Position::new(400.0, 300.0), 0))
    }

    #[test]
    fn test_contact_removes_without_explosion() {
        let (mut world, mut player) = setup();
        let near = world_setup::spawn_enemy(
            &mut world,
            0,
            "power",
            Position::new(381.0, 300.0),
            0.0,
            &player.position,
        );
        let far = world_setup::spawn_enemy(
            &mut world,
            1,
            "fusion",
            Position::new(380.0, 300.0),
            0.0,
            &player.position,
        );
        let mut score = 0;
        let mut buffer = Vec::new();
        let mut events = Vec::new();

        run(
            &mut world,
            HostileKind::Enemy,
            &mut player,
            &mut score,
            &mut buffer,
            &mut events,
            DT,
        );

        assert!(!world.contains(near));
        assert!(world.contains(far), "distance 20 is not contact");
        assert_eq!(player.health, PLAYER_MAX_HEALTH - ENEMY_CONTACT_DAMAGE);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_rocket_contact_damage() {
        let (mut world, mut player) = setup();
        let rocket =
            world_setup::spawn_rocket(&mut world, 0, Position::new(400.0, 290.0), 0.0, &player.position);
        let mut score = 0;
        let mut events = Vec::new();

        run(
            &mut world,
            HostileKind::Rocket,
            &mut player,
            &mut score,
            &mut Vec::new(),
            &mut events,
            DT,
        );

        assert!(!world.contains(rocket));
        assert_eq!(player.health, PLAYER_MAX_HEALTH - ROCKET_CONTACT_DAMAGE);
        assert_eq!(
            events,
            vec![GameEvent::PlayerHit {
                kind: HostileKind::Rocket,
                damage: ROCKET_CONTACT_DAMAGE,
                health: PLAYER_MAX_HEALTH - ROCKET_CONTACT_DAMAGE,
            }]
        );
    }

    #[test]
    fn test_shot_hostile_inside_radius_explodes_instead_of_hitting() {
        let (mut world, mut player) = setup();
        let enemy = world_setup::spawn_enemy(
            &mut world,
            0,
            "power",
            Position::new(405.0, 300.0),
            0.0,
            &player.position,
        );
        world.get::<&mut Hostile>(enemy).unwrap().shot = true;
        let mut score = 0;
        let mut events = Vec::new();

        for _ in 0..14 {
            run(
                &mut world,
                HostileKind::Enemy,
                &mut player,
                &mut score,
                &mut Vec::new(),
                &mut events,
                DT,
            );
        }
        assert_eq!(player.health, PLAYER_MAX_HEALTH);
        assert!(world.contains(enemy), "still exploding");

        for _ in 0..2 {
            run(
                &mut world,
                HostileKind::Enemy,
                &mut player,
                &mut score,
                &mut Vec::new(),
                &mut events,
                DT,
            );
        }
        assert!(!world.contains(enemy));
        assert_eq!(score, SCORE_ENEMY_DESTROYED);
    }

    #[test]
    fn test_rocket_explosion_scores_nothing() {
        let (mut world, mut player) = setup();
        let rocket =
            world_setup::spawn_rocket(&mut world, 0, Position::new(0.0, 0.0), 0.0, &player.position);
        world.get::<&mut Hostile>(rocket).unwrap().shot = true;
        let mut score = 0;
        let mut events = Vec::new();

        for _ in 0..20 {
            run(
                &mut world,
                HostileKind::Rocket,
                &mut player,
                &mut score,
                &mut Vec::new(),
                &mut events,
                DT,
            );
        }
        assert!(!world.contains(rocket));
        assert_eq!(score, 0);
        assert!(events.contains(&GameEvent::HostileDestroyed {
            id: 0,
            kind: HostileKind::Rocket
        }));
    }

    #[test]
    fn test_health_saturates_at_zero() {
        let (mut world, mut player) = setup();
        player.health = 10;
        world_setup::spawn_rocket(&mut world, 0, Position::new(400.0, 300.0), 0.0, &player.position);
        world_setup::spawn_rocket(&mut world, 1, Position::new(400.0, 300.0), 0.0, &player.position);

        run(
            &mut world,
            HostileKind::Rocket,
            &mut player,
            &mut 0,
            &mut Vec::new(),
            &mut Vec::new(),
            DT,
        );

        // Both contacts resolve in the same pass.
        assert_eq!(player.health, 0);
        assert_eq!(world.len(), 0);
    }

    #[test]
    fn test_explosion_start_reported_once() {
        let (mut world, mut player) = setup();
        let enemy = world_setup::spawn_enemy(
            &mut world,
            3,
            "power",
            Position::new(100.0, 100.0),
            0.0,
            &player.position,
        );
        world.get::<&mut Hostile>(enemy).unwrap().shot = true;
        let mut events = Vec::new();

        for _ in 0..5 {
            run(
                &mut world,
                HostileKind::Enemy,
                &mut player,
                &mut 0,
                &mut Vec::new(),
                &mut events,
                DT,
            );
        }

        assert_eq!(
            events,
            vec![GameEvent::ExplosionStarted {
                id: 3,
                kind: HostileKind::Enemy
            }]
        );
    }
}
