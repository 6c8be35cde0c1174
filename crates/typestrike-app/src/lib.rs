//! TypeStrike headless application.
//!
//! Runs the simulation either as fast as possible or on a paced game loop
//! thread, driven by an autopilot typist.

pub mod autopilot;
pub mod game_loop;
pub mod session;
pub mod state;

pub use typestrike_core as core;
