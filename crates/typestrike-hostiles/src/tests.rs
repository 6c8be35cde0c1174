#[cfg(test)]
mod tests {
    use glam::Vec2;

    use typestrike_core::constants::*;
    use typestrike_core::enums::HostileKind;
    use typestrike_core::types::Position;

    use crate::fsm::{
        advance, bounds, explosion_progress, heading, new_hostile, shake_offset, should_remove,
        Step,
    };
    use crate::profiles::get_profile;

    fn player() -> Position {
        Position::new(400.0, 300.0)
    }

    #[test]
    fn test_direction_is_unit_toward_spawn_time_player() {
        let spawns = [
            Position::new(-50.0, 120.0),
            Position::new(850.0, 599.0),
            Position::new(13.0, -50.0),
            Position::new(799.0, 650.0),
        ];
        for spawn in spawns {
            let hostile = new_hostile(HostileKind::Enemy, &spawn, 60.0, &player());
            assert!(
                (hostile.direction.length() - 1.0).abs() < 1e-5,
                "direction should be unit length, got {}",
                hostile.direction.length()
            );
            let to_player = (player().0 - spawn.0).normalize();
            assert!(hostile.direction.abs_diff_eq(to_player, 1e-5));
        }
    }

    #[test]
    fn test_direction_frozen_while_moving() {
        let mut pos = Position::new(-50.0, 0.0);
        let mut hostile = new_hostile(HostileKind::Rocket, &pos, 100.0, &player());
        let initial = hostile.direction;

        for _ in 0..120 {
            assert_eq!(advance(&mut hostile, &mut pos, DT), Step::Moved);
            assert_eq!(hostile.direction, initial);
        }
    }

    #[test]
    fn test_advance_moves_by_speed_times_dt() {
        let mut pos = Position::new(0.0, 300.0);
        let mut hostile = new_hostile(HostileKind::Enemy, &pos, 50.0, &player());

        // One simulated second in 60 ticks.
        for _ in 0..60 {
            advance(&mut hostile, &mut pos, DT);
        }
        assert!(
            (pos.0.x - 50.0).abs() < 1e-3,
            "after 1s at 50 px/s heading right, x should be ~50, got {}",
            pos.0.x
        );
        assert!((pos.0.y - 300.0).abs() < 1e-4);
    }

    #[test]
    fn test_zero_direction_hostile_stays_put() {
        let mut pos = player();
        let mut hostile = new_hostile(HostileKind::Enemy, &pos, 80.0, &player());
        assert_eq!(hostile.direction, Vec2::ZERO);

        advance(&mut hostile, &mut pos, 0.5);
        assert_eq!(pos, player());
    }

    #[test]
    fn test_shot_starts_explosion_and_stops_movement() {
        let mut pos = Position::new(100.0, 100.0);
        let mut hostile = new_hostile(HostileKind::Enemy, &pos, 100.0, &player());
        hostile.shot = true;

        let before = pos;
        let step = advance(&mut hostile, &mut pos, 0.1);
        assert_eq!(step, Step::ExplosionStarted);
        assert!(hostile.exploding);
        assert_eq!(pos, before, "exploding hostiles do not move");
        // Timer starts at 0.25 and is decremented in the same call.
        assert!((hostile.explosion_timer - 0.15).abs() < 1e-6);
        assert!(!should_remove(&hostile));

        assert_eq!(advance(&mut hostile, &mut pos, 0.1), Step::Exploding);
        assert!(!should_remove(&hostile));

        advance(&mut hostile, &mut pos, 0.1);
        assert!(hostile.explosion_timer < 0.0, "timer is not clamped");
        assert!(should_remove(&hostile));
        assert_eq!(pos, before);
    }

    #[test]
    fn test_should_remove_requires_shot() {
        let mut pos = Position::new(0.0, 0.0);
        let mut hostile = new_hostile(HostileKind::Rocket, &pos, 100.0, &player());

        // An inbound hostile with a non-positive timer is not removable.
        for _ in 0..100 {
            advance(&mut hostile, &mut pos, 0.1);
            assert!(!should_remove(&hostile));
        }
    }

    #[test]
    fn test_explosion_removal_at_exactly_zero() {
        let mut pos = Position::new(0.0, 0.0);
        let mut hostile = new_hostile(HostileKind::Enemy, &pos, 0.0, &player());
        hostile.shot = true;
        advance(&mut hostile, &mut pos, 0.25);
        assert!(hostile.explosion_timer <= 0.0);
        assert!(should_remove(&hostile));
    }

    #[test]
    fn test_shake_offset() {
        assert_eq!(shake_offset(false, 0.4), 0.0);
        assert_eq!(shake_offset(true, 0.0), 0.0);
        assert_eq!(shake_offset(true, -0.01), 0.0);

        let offset = shake_offset(true, 0.3);
        let expected = (0.3f32 * SHAKE_FREQUENCY).sin() * SHAKE_AMPLITUDE;
        assert!((offset - expected).abs() < 1e-6);
        assert!(offset.abs() <= SHAKE_AMPLITUDE);
    }

    #[test]
    fn test_bounds_are_centered_32_square() {
        let pos = Position::new(200.0, 150.0);
        let hostile = new_hostile(HostileKind::Enemy, &pos, 50.0, &player());
        let b = bounds(&hostile, &pos);
        assert_eq!((b.x, b.y, b.width, b.height), (184.0, 134.0, 32.0, 32.0));
    }

    #[test]
    fn test_explosion_progress() {
        let mut pos = Position::new(0.0, 0.0);
        let mut hostile = new_hostile(HostileKind::Enemy, &pos, 0.0, &player());
        assert_eq!(explosion_progress(&hostile), 0.0);

        hostile.shot = true;
        advance(&mut hostile, &mut pos, 0.125);
        assert!((explosion_progress(&hostile) - 0.5).abs() < 1e-5);

        advance(&mut hostile, &mut pos, 1.0);
        assert_eq!(explosion_progress(&hostile), 1.0);
    }

    #[test]
    fn test_heading_faces_travel() {
        // Coming from the left, travelling right (+x): sprite rotated a quarter turn.
        let pos = Position::new(-50.0, 300.0);
        let hostile = new_hostile(HostileKind::Rocket, &pos, 70.0, &player());
        assert!((heading(&hostile) - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn test_speed_for_level_clamped() {
        let enemy = get_profile(HostileKind::Enemy);
        assert_eq!(enemy.speed_for_level(1), 55.0);
        assert_eq!(enemy.speed_for_level(10), 100.0);
        assert_eq!(enemy.speed_for_level(20), 150.0);
        assert_eq!(enemy.speed_for_level(40), 150.0);

        let rocket = get_profile(HostileKind::Rocket);
        assert_eq!(rocket.speed_for_level(6), 100.0);
        assert_eq!(rocket.speed_for_level(20), 170.0);
        assert_eq!(rocket.speed_for_level(100), 200.0);
    }

    #[test]
    fn test_profiles_differ_by_kind() {
        let enemy = get_profile(HostileKind::Enemy);
        let rocket = get_profile(HostileKind::Rocket);
        assert_eq!(enemy.contact_damage, 15);
        assert_eq!(rocket.contact_damage, 25);
        assert_eq!(enemy.destroyed_score, 100);
        assert_eq!(rocket.destroyed_score, 0);
        assert!(enemy.carries_word);
        assert!(!rocket.carries_word);
    }
}
