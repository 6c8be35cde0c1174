//! Autopilot-driven runs, headless or on the paced game loop.

use std::sync::mpsc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use typestrike_core::constants::{DT, TICK_RATE};
use typestrike_core::enums::GamePhase;
use typestrike_core::state::GameStateSnapshot;
use typestrike_sim::{SimConfig, SimulationEngine};

use crate::autopilot::{Autopilot, AutopilotConfig};
use crate::state::AppState;

/// How a run is set up.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub sim: SimConfig,
    pub autopilot: AutopilotConfig,
    /// Upper bound on the run, counted in ticks of every phase.
    pub seconds: f64,
}

impl SessionConfig {
    fn max_ticks(&self) -> u64 {
        (self.seconds.max(0.0) * TICK_RATE as f64).ceil() as u64
    }
}

/// Outcome of a run, printed as JSON by the binary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    /// Ticks driven, menus included.
    pub ticks: u64,
    /// Seconds of Playing time simulated.
    pub simulated_secs: f64,
    pub final_phase: GamePhase,
    pub score: u32,
    pub level: u32,
    pub health: u32,
    pub won: bool,
    pub keys_typed: u64,
    pub mistypes: u64,
}

impl RunSummary {
    fn from_snapshot(seed: u64, ticks: u64, snap: &GameStateSnapshot, pilot: &Autopilot) -> Self {
        Self {
            seed,
            ticks,
            simulated_secs: snap.time.elapsed_secs,
            final_phase: snap.phase,
            score: snap.score,
            level: snap.level,
            health: snap.player.health,
            won: snap.won,
            keys_typed: pilot.keys_typed,
            mistypes: pilot.mistypes,
        }
    }
}

/// A run is over once the first game has ended or the menu asked to quit.
fn finished(snap: &GameStateSnapshot) -> bool {
    snap.phase == GamePhase::GameOver || snap.exit_requested
}

/// Drive the engine as fast as possible.
pub fn run_headless(config: &SessionConfig) -> Result<RunSummary> {
    let mut engine = SimulationEngine::try_new(config.sim).context("invalid simulation config")?;
    let mut pilot = Autopilot::new(config.autopilot);
    let max_ticks = config.max_ticks();
    info!(seed = config.sim.seed, max_ticks, "headless run started");

    let mut snapshot = engine.snapshot();
    let mut ticks = 0;
    while ticks < max_ticks && !finished(&snapshot) {
        engine.queue_commands(pilot.next_commands(&snapshot, DT));
        snapshot = engine.tick(DT);
        ticks += 1;

        if ticks % (TICK_RATE as u64 * 10) == 0 {
            debug!(
                ticks,
                score = snapshot.score,
                level = snapshot.level,
                health = snapshot.player.health,
                "progress"
            );
        }
    }

    let summary = RunSummary::from_snapshot(config.sim.seed, ticks, &snapshot, &pilot);
    info!(
        ticks,
        score = summary.score,
        level = summary.level,
        phase = ?summary.final_phase,
        "headless run finished"
    );
    Ok(summary)
}

/// Drive the threaded 60Hz game loop in wall-clock time.
pub fn run_realtime(config: &SessionConfig) -> Result<RunSummary> {
    config.sim.validate().context("invalid simulation config")?;
    let state = AppState::new();
    let (snap_tx, snap_rx) = mpsc::channel();
    state.start(config.sim, Some(snap_tx))?;

    let mut pilot = Autopilot::new(config.autopilot);
    let max_ticks = config.max_ticks();
    info!(seed = config.sim.seed, max_ticks, "realtime run started");

    let mut ticks = 0;
    let mut last = None;
    while ticks < max_ticks {
        let snapshot = snap_rx
            .recv_timeout(Duration::from_secs(1))
            .map_err(|e| anyhow!("no snapshot from game loop: {e}"))?;
        ticks += 1;

        let done = finished(&snapshot);
        if !done {
            for command in pilot.next_commands(&snapshot, DT) {
                state.send_command(command)?;
            }
        }
        last = Some(snapshot);
        if done {
            break;
        }
    }

    state.shutdown()?;
    let last = match last {
        Some(snapshot) => snapshot,
        None => state.snapshot()?.unwrap_or_default(),
    };
    let summary = RunSummary::from_snapshot(config.sim.seed, ticks, &last, &pilot);
    info!(ticks, score = summary.score, "realtime run finished");
    Ok(summary)
}
