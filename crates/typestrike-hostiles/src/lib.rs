//! Hostile behaviour for TypeStrike.
//!
//! Per-kind behaviour profiles and the homing/explosion state machine shared
//! by enemy planes and rockets. Operates on plain component data, no ECS.

pub mod fsm;
pub mod profiles;

pub use typestrike_core as core;

#[cfg(test)]
mod tests;
