//! Application state shared between the driver and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use anyhow::{anyhow, bail, Context, Result};

use typestrike_core::commands::PlayerCommand;
use typestrike_core::state::GameStateSnapshot;
use typestrike_sim::SimConfig;

use crate::game_loop;

/// Commands sent from the driver to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handle to a running (or not yet started) game loop.
///
/// Every field sits behind a lock so the state can be shared by reference
/// with other threads.
pub struct AppState {
    /// Channel into the game loop. `None` until `start` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, written by the game loop after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub running: Mutex<bool>,
    loop_handle: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
            loop_handle: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop thread. Snapshots are also pushed to `subscriber`
    /// when one is given.
    pub fn start(
        &self,
        config: SimConfig,
        subscriber: Option<mpsc::Sender<GameStateSnapshot>>,
    ) -> Result<()> {
        let mut running = self.running.lock().map_err(|e| anyhow!("{e}"))?;
        if *running {
            bail!("game loop already running");
        }

        let (cmd_tx, handle) =
            game_loop::spawn_game_loop(config, self.latest_snapshot.clone(), subscriber)
                .context("failed to spawn game loop thread")?;

        *self.command_tx.lock().map_err(|e| anyhow!("{e}"))? = Some(cmd_tx);
        *self.loop_handle.lock().map_err(|e| anyhow!("{e}"))? = Some(handle);
        *running = true;
        Ok(())
    }

    /// Forward a player command to the game loop.
    pub fn send_command(&self, command: PlayerCommand) -> Result<()> {
        let tx = self.command_tx.lock().map_err(|e| anyhow!("{e}"))?;
        match tx.as_ref() {
            Some(tx) => tx
                .send(GameLoopCommand::PlayerCommand(command))
                .map_err(|e| anyhow!("failed to send command: {e}")),
            None => bail!("game loop not started"),
        }
    }

    /// Latest snapshot, if the loop has ticked at least once.
    pub fn snapshot(&self) -> Result<Option<GameStateSnapshot>> {
        let lock = self.latest_snapshot.lock().map_err(|e| anyhow!("{e}"))?;
        Ok(lock.clone())
    }

    /// Ask the loop to stop and wait for the thread. A loop that already
    /// exited on its own is fine.
    pub fn shutdown(&self) -> Result<()> {
        if let Some(tx) = self.command_tx.lock().map_err(|e| anyhow!("{e}"))?.take() {
            let _ = tx.send(GameLoopCommand::Shutdown);
        }
        let handle = self.loop_handle.lock().map_err(|e| anyhow!("{e}"))?.take();
        if let Some(handle) = handle {
            handle
                .join()
                .map_err(|_| anyhow!("game loop thread panicked"))?;
        }
        *self.running.lock().map_err(|e| anyhow!("{e}"))? = false;
        Ok(())
    }
}
