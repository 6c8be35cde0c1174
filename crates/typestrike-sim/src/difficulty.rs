//! Difficulty progression: level from score, spawn parameters from level.

use typestrike_core::constants::*;

/// Current difficulty and the spawn parameters derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    pub level: u32,
    /// Seconds between enemy waves.
    pub spawn_interval_secs: f32,
    /// Enemies per wave.
    pub enemies_per_spawn: u32,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            level: 1,
            spawn_interval_secs: BASE_SPAWN_INTERVAL_SECS,
            enemies_per_spawn: 1,
        }
    }
}

impl Difficulty {
    /// Raise the level if `score` earns it. Returns the new level on a
    /// level-up. The level never goes down.
    pub fn update_for_score(&mut self, score: u32) -> Option<u32> {
        let new_level = level_for_score(score);
        if new_level <= self.level {
            return None;
        }
        self.level = new_level;
        self.spawn_interval_secs = spawn_interval_for_level(new_level);
        self.enemies_per_spawn = enemies_per_spawn_for_level(new_level);
        Some(new_level)
    }

    pub fn rockets_enabled(&self) -> bool {
        self.level >= ROCKET_MIN_LEVEL
    }

    pub fn is_final_level(&self) -> bool {
        self.level >= MAX_LEVEL
    }
}

pub fn level_for_score(score: u32) -> u32 {
    score / SCORE_PER_LEVEL + 1
}

pub fn spawn_interval_for_level(level: u32) -> f32 {
    (BASE_SPAWN_INTERVAL_SECS - level as f32 * SPAWN_INTERVAL_STEP_PER_LEVEL)
        .clamp(MIN_SPAWN_INTERVAL_SECS, BASE_SPAWN_INTERVAL_SECS)
}

pub fn enemies_per_spawn_for_level(level: u32) -> u32 {
    (1 + level / 2).clamp(1, MAX_ENEMIES_PER_SPAWN)
}

/// Progress-bar fill for a level.
pub fn level_progress(level: u32) -> f32 {
    (level as f32 / MAX_LEVEL as f32).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_score() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(499), 1);
        assert_eq!(level_for_score(500), 2);
        assert_eq!(level_for_score(2750), 6);
        assert_eq!(level_for_score(9500), 20);
    }

    #[test]
    fn test_level_monotonic_in_score() {
        let mut last = 0;
        for score in (0..12_000).step_by(50) {
            let level = level_for_score(score);
            assert!(level >= last);
            last = level;
        }
    }

    #[test]
    fn test_spawn_interval_clamped() {
        assert!((spawn_interval_for_level(1) - 2.8).abs() < 1e-5);
        assert!((spawn_interval_for_level(5) - 2.0).abs() < 1e-5);
        assert!((spawn_interval_for_level(12) - 0.6).abs() < 1e-5);
        assert_eq!(spawn_interval_for_level(13), MIN_SPAWN_INTERVAL_SECS);
        assert_eq!(spawn_interval_for_level(20), MIN_SPAWN_INTERVAL_SECS);
        assert_eq!(spawn_interval_for_level(0), BASE_SPAWN_INTERVAL_SECS);
    }

    #[test]
    fn test_enemies_per_spawn_clamped() {
        assert_eq!(enemies_per_spawn_for_level(1), 1);
        assert_eq!(enemies_per_spawn_for_level(2), 2);
        assert_eq!(enemies_per_spawn_for_level(4), 3);
        assert_eq!(enemies_per_spawn_for_level(6), 4);
        assert_eq!(enemies_per_spawn_for_level(19), 4);
    }

    #[test]
    fn test_update_only_on_increase() {
        let mut difficulty = Difficulty::default();
        assert_eq!(difficulty.update_for_score(200), None);
        // Level 1 keeps the base interval until the first level-up.
        assert_eq!(difficulty.spawn_interval_secs, BASE_SPAWN_INTERVAL_SECS);

        assert_eq!(difficulty.update_for_score(1000), Some(3));
        assert_eq!(difficulty.level, 3);
        assert!((difficulty.spawn_interval_secs - 2.4).abs() < 1e-5);
        assert_eq!(difficulty.enemies_per_spawn, 2);

        // Lower score never lowers the level.
        assert_eq!(difficulty.update_for_score(0), None);
        assert_eq!(difficulty.level, 3);
    }

    #[test]
    fn test_rockets_and_final_level() {
        let mut difficulty = Difficulty::default();
        assert!(!difficulty.rockets_enabled());
        difficulty.update_for_score(2500);
        assert!(difficulty.rockets_enabled());
        assert!(!difficulty.is_final_level());
        difficulty.update_for_score(9500);
        assert!(difficulty.is_final_level());
        assert_eq!(level_progress(difficulty.level), 1.0);
        assert_eq!(level_progress(10), 0.5);
    }
}
