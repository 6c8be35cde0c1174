//! Simulation constants and tuning parameters.

/// Frame rate the headless loop ticks at (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at TICK_RATE.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Canvas ---

/// Logical canvas width (pixels).
pub const CANVAS_WIDTH: f32 = 800.0;

/// Logical canvas height (pixels).
pub const CANVAS_HEIGHT: f32 = 600.0;

/// Distance outside the canvas at which hostiles spawn.
pub const SPAWN_EDGE_OFFSET: f32 = 50.0;

// --- Player ---

pub const PLAYER_MAX_HEALTH: u32 = 100;

/// Number of selectable player planes on the character select screen.
pub const PLANE_OPTION_COUNT: usize = 3;

/// Minimum seconds between two projectiles.
pub const SHOOT_COOLDOWN_SECS: f32 = 0.2;

/// Shake feedback duration after a mistyped letter.
pub const MISTYPE_SHAKE_SECS: f32 = 0.5;

// --- Projectiles ---

pub const PROJECTILE_SPEED: f32 = 300.0;

/// Side of the projectile's hit box, anchored at its position.
pub const PROJECTILE_SIZE: f32 = 8.0;

// --- Hostiles ---

/// Side of the square hostile bounding box.
pub const HOSTILE_SIZE: f32 = 32.0;

pub const EXPLOSION_DURATION_SECS: f32 = 0.25;

pub const SHAKE_FREQUENCY: f32 = 50.0;
pub const SHAKE_AMPLITUDE: f32 = 5.0;

/// Center-to-center distance below which a hostile hits the player.
pub const CONTACT_RADIUS: f32 = 20.0;

pub const ENEMY_CONTACT_DAMAGE: u32 = 15;
pub const ROCKET_CONTACT_DAMAGE: u32 = 25;

pub const ENEMY_BASE_SPEED: f32 = 50.0;
pub const ENEMY_MAX_SPEED: f32 = 150.0;
pub const ROCKET_BASE_SPEED: f32 = 70.0;
pub const ROCKET_MAX_SPEED: f32 = 200.0;

/// Speed added to every hostile per difficulty level.
pub const SPEED_PER_LEVEL: f32 = 5.0;

// --- Scoring ---

pub const SCORE_PROJECTILE_HIT: u32 = 50;
pub const SCORE_ROCKET_DETONATED: u32 = 50;
pub const SCORE_ENEMY_DESTROYED: u32 = 100;

// --- Difficulty ---

/// Score needed per level.
pub const SCORE_PER_LEVEL: u32 = 500;

/// Reaching this level wins the game.
pub const MAX_LEVEL: u32 = 20;

pub const BASE_SPAWN_INTERVAL_SECS: f32 = 3.0;
pub const MIN_SPAWN_INTERVAL_SECS: f32 = 0.5;
pub const SPAWN_INTERVAL_STEP_PER_LEVEL: f32 = 0.2;

pub const MAX_ENEMIES_PER_SPAWN: u32 = 4;

/// No enemy wave spawns while this many enemies are alive.
pub const MAX_LIVE_ENEMIES: usize = 10;

/// Rockets start appearing at this level.
pub const ROCKET_MIN_LEVEL: u32 = 6;

pub const ROCKET_SPAWN_INTERVAL_SECS: f32 = 5.0;

pub const MAX_LIVE_ROCKETS: usize = 4;

// --- Words ---

/// Words carried by enemy planes.
pub const WORD_LIST: [&str; 10] = [
    "energy", "system", "machine", "voltage", "current", "power", "reactor", "activate",
    "fusion", "circuit",
];
