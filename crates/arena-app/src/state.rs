//! Application state shared between the control functions and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use arena_core::commands::PlayerCommand;
use arena_core::state::ArenaSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Throw the current round away and start a fresh one.
    Reload,
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Errors surfaced by the application layer.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("simulation already running")]
    AlreadyRunning,
    #[error("simulation not started")]
    NotRunning,
    #[error("game loop has stopped")]
    Disconnected,
    #[error("application state lock poisoned")]
    Poisoned,
    #[error("failed to spawn game loop: {0}")]
    Spawn(#[from] std::io::Error),
}

impl<T> From<std::sync::PoisonError<T>> for AppError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        AppError::Poisoned
    }
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in a `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` holds what only exists once the loop is started
/// - the latest snapshot is `Arc<Mutex<...>>`, shared with the loop thread
pub struct AppState {
    /// Channel to the game loop thread. `None` before start.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous polling. Updated after each frame.
    pub latest_snapshot: Arc<Mutex<Option<ArenaSnapshot>>>,
    /// Loop thread handle, joined on stop.
    pub loop_thread: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_thread: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
