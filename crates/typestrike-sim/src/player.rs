//! Player agent: the typing target tracker, shot cooldown, and the
//! projectiles in flight.

use hecs::{Entity, World};
use tracing::{debug, trace};

use typestrike_core::components::{Hostile, TargetWord};
use typestrike_core::constants::*;
use typestrike_core::enums::HostileKind;
use typestrike_core::events::GameEvent;
use typestrike_core::types::{Bounds, Position, Velocity};

use crate::systems::{hostile_id, in_spawn_order};

/// A straight-line shot. Owned by the player agent, not the ECS world.
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub position: Position,
    pub velocity: Velocity,
}

impl Projectile {
    /// Hit box, anchored at the projectile's position.
    pub fn bounds(&self) -> Bounds {
        Bounds::anchored(self.position.0, PROJECTILE_SIZE)
    }
}

/// Which enemy typing is aimed at and how far into its word the player is.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TargetTracker {
    /// Re-derived every tick. Never dereferenced after the entity is gone.
    pub target: Option<Entity>,
    pub letter_index: usize,
    /// Mistype feedback; also drives the target's shake.
    pub shake_timer: f32,
}

impl TargetTracker {
    pub fn is_target(&self, entity: Entity) -> bool {
        self.target == Some(entity)
    }
}

#[derive(Debug, Clone)]
pub struct PlayerAgent {
    pub position: Position,
    pub health: u32,
    pub plane: usize,
    pub shoot_cooldown: f32,
    pub tracker: TargetTracker,
    pub projectiles: Vec<Projectile>,
}

impl PlayerAgent {
    pub fn new(position: Position, plane: usize) -> Self {
        Self {
            position,
            health: PLAYER_MAX_HEALTH,
            plane,
            shoot_cooldown: 0.0,
            tracker: TargetTracker::default(),
            projectiles: Vec::new(),
        }
    }

    /// One tick of player logic: timers, target selection, typed letters,
    /// then projectile movement.
    pub fn update(
        &mut self,
        world: &mut World,
        letters: &[char],
        dt: f32,
        events: &mut Vec<GameEvent>,
    ) {
        if self.tracker.shake_timer > 0.0 {
            self.tracker.shake_timer -= dt;
        }
        if self.shoot_cooldown > 0.0 {
            self.shoot_cooldown -= dt;
        }

        self.tracker.target = first_unshot_enemy(world);

        match self.tracker.target {
            Some(target) => {
                for &letter in letters {
                    self.type_letter(world, target, letter, events);
                }
            }
            None => self.tracker.letter_index = 0,
        }

        for projectile in &mut self.projectiles {
            projectile.position.0 += projectile.velocity.0 * dt;
        }
    }

    /// Every letter of the tick goes to the target chosen at tick start, even
    /// after that target's word was completed by an earlier letter.
    fn type_letter(
        &mut self,
        world: &mut World,
        target: Entity,
        letter: char,
        events: &mut Vec<GameEvent>,
    ) {
        let Some(word) = world.get::<&TargetWord>(target).ok().map(|w| w.word.clone()) else {
            return;
        };
        let id = hostile_id(world, target);
        let expected = word.chars().nth(self.tracker.letter_index);

        if expected == Some(letter.to_ascii_lowercase()) {
            self.tracker.letter_index += 1;
            trace!(id, letter = %letter, index = self.tracker.letter_index, "letter matched");
            events.push(GameEvent::LetterMatched {
                id,
                letter_index: self.tracker.letter_index,
            });

            if self.tracker.letter_index >= word.chars().count() {
                if let Ok(mut hostile) = world.get::<&mut Hostile>(target) {
                    hostile.shot = true;
                }
                self.tracker.letter_index = 0;
                debug!(id, word = %word, "word completed");
                events.push(GameEvent::WordCompleted { id, word });
            }

            if self.shoot_cooldown <= 0.0 {
                self.shoot(world, target, events);
                self.shoot_cooldown = SHOOT_COOLDOWN_SECS;
            }
        } else {
            trace!(id, letter = %letter, "mistype");
            self.tracker.letter_index = 0;
            self.tracker.shake_timer = MISTYPE_SHAKE_SECS;
            events.push(GameEvent::Mistype { letter });
        }
    }

    /// Fire at `target` if it is still alive and not yet shot.
    pub fn shoot(&mut self, world: &World, target: Entity, events: &mut Vec<GameEvent>) -> bool {
        let Ok(hostile) = world.get::<&Hostile>(target) else {
            return false;
        };
        if hostile.shot {
            return false;
        }
        let Ok(target_pos) = world.get::<&Position>(target) else {
            return false;
        };

        let direction = self.position.direction_to(&target_pos);
        self.projectiles.push(Projectile {
            position: self.position,
            velocity: Velocity(direction * PROJECTILE_SPEED),
        });
        events.push(GameEvent::ProjectileFired);
        true
    }

    /// Apply contact damage. Health floors at zero.
    pub fn take_damage(&mut self, damage: u32) {
        self.health = self.health.saturating_sub(damage);
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}

fn first_unshot_enemy(world: &World) -> Option<Entity> {
    in_spawn_order(world, HostileKind::Enemy)
        .into_iter()
        .find(|&entity| world.get::<&Hostile>(entity).is_ok_and(|h| !h.shot))
}
