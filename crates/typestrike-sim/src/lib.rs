//! Simulation engine for TypeStrike.
//!
//! Owns the hecs world of hostiles, the player agent, the phase state
//! machine, and produces GameStateSnapshots for renderers.

pub mod difficulty;
pub mod engine;
pub mod phase;
pub mod player;
pub mod systems;
pub mod world_setup;

pub use engine::{ConfigError, SimConfig, SimulationEngine};
pub use typestrike_core as core;
