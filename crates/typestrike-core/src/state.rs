//! Game state snapshot: everything a renderer or HUD needs after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Bounds, Position, SimTime};

/// Complete visible game state, rebuilt after every tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Enemies in spawn order, followed by rockets in spawn order.
    pub hostiles: Vec<HostileView>,
    pub projectiles: Vec<ProjectileView>,
    pub player: PlayerView,
    pub score: u32,
    pub level: u32,
    /// Fraction of the way to the final level, for the progress bar.
    pub level_progress: f32,
    pub won: bool,
    /// Highlighted plane on the character select screen.
    pub selected_plane: usize,
    /// Escape was pressed on the main menu; the host should shut down.
    pub exit_requested: bool,
    pub events: Vec<GameEvent>,
}

/// A hostile as drawn on screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostileView {
    /// Stable id (spawn sequence number).
    pub id: u64,
    pub kind: HostileKind,
    pub position: Position,
    pub bounds: Bounds,
    /// Sprite rotation in radians, facing the direction of travel.
    pub heading: f32,
    pub shot: bool,
    pub exploding: bool,
    pub explosion_timer: f32,
    /// 0.0 when the explosion starts, 1.0 when it is over.
    pub explosion_progress: f32,
    /// Enemy word; rockets carry none.
    pub word: Option<String>,
    pub is_target: bool,
    /// Letters already typed, only set on the current target.
    pub typed_letters: Option<usize>,
    pub shake_offset: f32,
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub bounds: Bounds,
}

/// Player plane status for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub health: u32,
    /// Sprite chosen on the character select screen.
    pub plane: usize,
    /// Id of the hostile typing is directed at.
    pub target: Option<u64>,
    pub letter_index: usize,
    pub shake_timer: f32,
}
