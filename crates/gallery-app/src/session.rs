//! Handle for a session running on the game loop thread.
//!
//! Bridges callers to the game loop via channels. Safe to share between
//! threads: the sender and the join handle sit behind `Mutex`es and the
//! latest snapshot is shared with the loop through `Arc<Mutex<...>>`.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use gallery_core::commands::InputCommand;
use gallery_core::state::FrameSnapshot;
use gallery_scene::SceneGraph;
use gallery_sim::Simulator;

use crate::error::AppError;
use crate::game_loop;
use crate::state::{GameLoopCommand, RunReport};

#[derive(Default)]
pub struct SessionHandle {
    /// `None` until `start` is called.
    command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Updated by the game loop thread after each frame.
    latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
    join: Mutex<Option<JoinHandle<RunReport>>>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move `sim` onto a new game loop thread.
    pub fn start<S>(&self, sim: Simulator<S>, fps: u32) -> Result<(), AppError>
    where
        S: SceneGraph + Send + 'static,
    {
        let mut tx_lock = self.command_tx.lock().map_err(|_| AppError::Poisoned)?;
        if tx_lock.is_some() {
            return Err(AppError::AlreadyRunning);
        }

        let (cmd_tx, handle) = game_loop::spawn_game_loop(sim, fps, self.latest_snapshot.clone())?;
        *tx_lock = Some(cmd_tx);
        *self.join.lock().map_err(|_| AppError::Poisoned)? = Some(handle);
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.command_tx
            .lock()
            .map(|tx| tx.is_some())
            .unwrap_or(false)
    }

    /// Forward an input command to the simulator.
    pub fn send(&self, command: InputCommand) -> Result<(), AppError> {
        let tx_lock = self.command_tx.lock().map_err(|_| AppError::Poisoned)?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(GameLoopCommand::Input(command))
                .map_err(|_| AppError::NotRunning),
            None => Err(AppError::NotRunning),
        }
    }

    /// Latest snapshot, if the loop has completed a frame.
    pub fn snapshot(&self) -> Result<Option<FrameSnapshot>, AppError> {
        let lock = self.latest_snapshot.lock().map_err(|_| AppError::Poisoned)?;
        Ok(lock.clone())
    }

    /// Stop the loop and wait for its report.
    pub fn shutdown(&self) -> Result<RunReport, AppError> {
        let tx = self
            .command_tx
            .lock()
            .map_err(|_| AppError::Poisoned)?
            .take()
            .ok_or(AppError::NotRunning)?;
        // A send error means the loop already exited; join still yields its report.
        let _ = tx.send(GameLoopCommand::Shutdown);

        let handle = self
            .join
            .lock()
            .map_err(|_| AppError::Poisoned)?
            .take()
            .ok_or(AppError::NotRunning)?;
        handle.join().map_err(|_| AppError::LoopPanicked)
    }
}
