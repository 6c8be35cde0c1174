//! Projectile pass: cull off-screen shots, then test the rest against
//! enemies that are not yet shot.

use hecs::World;
use tracing::debug;

use typestrike_core::components::Hostile;
use typestrike_core::constants::SCORE_PROJECTILE_HIT;
use typestrike_core::enums::HostileKind;
use typestrike_core::events::GameEvent;
use typestrike_core::types::{Canvas, Position};
use typestrike_hostiles::fsm;

use crate::player::Projectile;
use crate::systems::{hostile_id, in_spawn_order};

/// A projectile stops at the first unshot enemy it overlaps. Shot enemies
/// let projectiles pass through.
pub fn run(
    world: &mut World,
    projectiles: &mut Vec<Projectile>,
    canvas: &Canvas,
    score: &mut u32,
    events: &mut Vec<GameEvent>,
) {
    let enemies = in_spawn_order(world, HostileKind::Enemy);

    projectiles.retain(|projectile| {
        if !canvas.contains(&projectile.position) {
            return false;
        }

        let shot_box = projectile.bounds();
        for &entity in &enemies {
            let Ok((hostile, pos)) = world.query_one_mut::<(&mut Hostile, &Position)>(entity)
            else {
                continue;
            };
            if hostile.shot || !fsm::bounds(hostile, pos).intersects(&shot_box) {
                continue;
            }
            hostile.shot = true;
            *score += SCORE_PROJECTILE_HIT;

            let id = hostile_id(world, entity);
            debug!(id, score = *score, "projectile hit");
            events.push(GameEvent::EnemyHit { id });
            return false;
        }
        true
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use typestrike_core::types::Velocity;

    use crate::world_setup;

    fn shot_at(x: f32, y: f32) -> Projectile {
        Projectile {
            position: Position::new(x, y),
            velocity: Velocity::default(),
        }
    }

    #[test]
    fn test_off_screen_culled_on_strict_edges() {
        let mut world = World::new();
        let canvas = Canvas::default();
        let mut projectiles = vec![
            shot_at(0.0, 0.0),
            shot_at(800.0, 600.0),
            shot_at(-0.5, 100.0),
            shot_at(100.0, 600.5),
        ];
        let mut score = 0;
        let mut events = Vec::new();

        run(&mut world, &mut projectiles, &canvas, &mut score, &mut events);

        assert_eq!(projectiles.len(), 2);
        assert_eq!(projectiles[0].position, Position::new(0.0, 0.0));
        assert_eq!(projectiles[1].position, Position::new(800.0, 600.0));
        assert_eq!(score, 0);
    }

    #[test]
    fn test_projectile_hits_first_unshot_enemy_only() {
        let mut world = World::new();
        let player = Position::new(400.0, 300.0);
        let first =
            world_setup::spawn_enemy(&mut world, 0, "power", Position::new(100.0, 100.0), 0.0, &player);
        let second =
            world_setup::spawn_enemy(&mut world, 1, "fusion", Position::new(100.0, 100.0), 0.0, &player);
        let canvas = Canvas::default();
        let mut projectiles = vec![shot_at(96.0, 96.0), shot_at(96.0, 96.0), shot_at(96.0, 96.0)];
        let mut score = 0;
        let mut events = Vec::new();

        run(&mut world, &mut projectiles, &canvas, &mut score, &mut events);

        // Two enemies absorb two projectiles; the third passes through.
        assert!(world.get::<&Hostile>(first).unwrap().shot);
        assert!(world.get::<&Hostile>(second).unwrap().shot);
        assert_eq!(projectiles.len(), 1);
        assert_eq!(score, 2 * SCORE_PROJECTILE_HIT);
        assert_eq!(
            events,
            vec![GameEvent::EnemyHit { id: 0 }, GameEvent::EnemyHit { id: 1 }]
        );
    }

    #[test]
    fn test_touching_edges_do_not_hit() {
        let mut world = World::new();
        let player = Position::new(400.0, 300.0);
        // Enemy box spans 84..116; projectile box starts at 116.
        let enemy =
            world_setup::spawn_enemy(&mut world, 0, "power", Position::new(100.0, 100.0), 0.0, &player);
        let mut projectiles = vec![shot_at(116.0, 100.0)];
        let mut score = 0;
        let mut events = Vec::new();

        run(&mut world, &mut projectiles, &Canvas::default(), &mut score, &mut events);

        assert!(!world.get::<&Hostile>(enemy).unwrap().shot);
        assert_eq!(projectiles.len(), 1);
    }
}
