//! Game loop thread: runs the simulation engine once per frame and hands
//! each snapshot to the frontend.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel. Snapshots go to the `Frontend` and are
//! stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::info;

use arena_core::config::ArenaConfig;
use arena_core::state::ArenaSnapshot;
use arena_sim::{SimConfig, SimulationEngine, SpawnLayout};

use crate::frontend::{self, Frontend};
use crate::state::GameLoopCommand;

/// Target frame rate (Hz).
pub const FRAME_RATE: u32 = 60;

/// Nominal duration of one frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: ArenaConfig,
    frontend: Box<dyn Frontend + Send>,
    latest_snapshot: Arc<Mutex<Option<ArenaSnapshot>>>,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("arena-game-loop".into())
        .spawn(move || {
            run_game_loop(config, frontend, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// Build a round. Each reload gets its own seed so the layout changes.
pub fn new_round(config: &ArenaConfig, reloads: u64, now_ms: f64) -> SimulationEngine {
    let mut arena = config.clone();
    arena.seed = config.seed.wrapping_add(reloads);
    SimulationEngine::new(SimConfig {
        arena,
        start_ms: now_ms,
        layout: SpawnLayout::Random,
    })
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: ArenaConfig,
    mut frontend: Box<dyn Frontend + Send>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<ArenaSnapshot>>,
) {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_secs_f64() * 1000.0;

    let mut reloads = 0;
    let mut engine = new_round(&config, reloads, now_ms());
    let mut next_frame_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Reload) => {
                    reloads += 1;
                    info!("reloading round ({reloads})");
                    frontend.clear();
                    engine = new_round(&config, reloads, now_ms());
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one frame (the engine handles terminal states internally)
        let snapshot = engine.tick(now_ms());

        // 3. Scene, HUD and render
        frontend::dispatch(frontend.as_mut(), &snapshot);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_frame_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::commands::PlayerCommand;
    use arena_core::enums::GamePhase;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Lock))
            .unwrap();
        tx.send(GameLoopCommand::Reload).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::Lock)
        ));
        assert!(matches!(commands[1], GameLoopCommand::Reload));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_reload_changes_layout() {
        let config = ArenaConfig::default();
        let first = new_round(&config, 0, 0.0).tick(0.0);
        let again = new_round(&config, 0, 0.0).tick(0.0);
        let reloaded = new_round(&config, 1, 0.0).tick(0.0);

        let layout = |s: &ArenaSnapshot| serde_json::to_string(&s.enemies).unwrap();
        assert_eq!(layout(&first), layout(&again));
        assert_ne!(layout(&first), layout(&reloaded));
        assert_eq!(reloaded.phase, GamePhase::Playing);
    }

    #[test]
    fn test_loop_thread_shuts_down() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(
            ArenaConfig::default(),
            Box::new(crate::frontend::LogFrontend::default()),
            latest.clone(),
        )
        .unwrap();

        std::thread::sleep(FRAME_DURATION * 5);
        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
        assert!(latest.lock().unwrap().is_some());
    }

    #[test]
    fn test_frame_duration_constant() {
        // 60Hz = 16.666ms per frame
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(FRAME_DURATION.as_nanos(), expected_nanos as u128);
    }
}
