//! Game loop thread: runs the simulation engine at 60Hz and publishes
//! snapshots.
//!
//! The engine is created inside the thread. Commands arrive over an `mpsc`
//! channel; snapshots go to shared state for polling and, optionally, to a
//! subscriber channel.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use typestrike_core::constants::{DT, TICK_RATE};
use typestrike_core::state::GameStateSnapshot;
use typestrike_sim::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Wall-clock duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    subscriber: Option<mpsc::Sender<GameStateSnapshot>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("typestrike-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot, subscriber);
        })?;

    Ok((cmd_tx, handle))
}

/// Runs until Shutdown, channel disconnect, or an exit request from the
/// main menu.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    mut subscriber: Option<mpsc::Sender<GameStateSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();
    info!(seed = config.seed, "game loop started");

    loop {
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => {
                    info!(tick = engine.time().tick, "game loop shut down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    debug!("command channel disconnected");
                    return;
                }
            }
        }

        let snapshot = engine.tick(DT);
        let exit = snapshot.exit_requested;

        if let Some(tx) = &subscriber {
            if tx.send(snapshot.clone()).is_err() {
                debug!("snapshot subscriber dropped");
                subscriber = None;
            }
        }

        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if exit {
            info!("exit requested, stopping game loop");
            return;
        }

        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; skip ahead instead of catching up.
            warn!(behind_ms = (now - next_tick_time).as_millis() as u64, "game loop lagging");
            next_tick_time = now;
        }
    }
}
