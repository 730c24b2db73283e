//! Control surface for embedding the arena: start, feed, poll, stop.
//!
//! These functions bridge the caller to the game loop thread via channels.

use arena_core::commands::PlayerCommand;
use arena_core::config::ArenaConfig;
use arena_core::state::ArenaSnapshot;

use crate::frontend::Frontend;
use crate::game_loop;
use crate::state::{AppError, AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(
    state: &AppState,
    config: ArenaConfig,
    frontend: Box<dyn Frontend + Send>,
) -> Result<(), AppError> {
    let mut tx_lock = state.command_tx.lock()?;
    if tx_lock.is_some() {
        return Err(AppError::AlreadyRunning);
    }

    let (cmd_tx, handle) =
        game_loop::spawn_game_loop(config, frontend, state.latest_snapshot.clone())?;

    *tx_lock = Some(cmd_tx);
    *state.loop_thread.lock()? = Some(handle);
    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), AppError> {
    send(state, GameLoopCommand::PlayerCommand(command))
}

/// Start a fresh round, discarding the current one.
pub fn reload(state: &AppState) -> Result<(), AppError> {
    send(state, GameLoopCommand::Reload)
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> Result<Option<ArenaSnapshot>, AppError> {
    Ok(state.latest_snapshot.lock()?.clone())
}

/// Stop the loop thread and wait for it to exit.
pub fn stop_simulation(state: &AppState) -> Result<(), AppError> {
    let tx = state.command_tx.lock()?.take().ok_or(AppError::NotRunning)?;
    // The loop may already be gone; joining below is what matters.
    let _ = tx.send(GameLoopCommand::Shutdown);

    if let Some(handle) = state.loop_thread.lock()?.take() {
        handle.join().map_err(|_| AppError::Disconnected)?;
    }
    Ok(())
}

fn send(state: &AppState, command: GameLoopCommand) -> Result<(), AppError> {
    let tx_lock = state.command_tx.lock()?;
    match tx_lock.as_ref() {
        Some(tx) => tx.send(command).map_err(|_| AppError::Disconnected),
        None => Err(AppError::NotRunning),
    }
}
