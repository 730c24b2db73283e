//! Headless arena demo.
//!
//! Runs one round on the game loop thread with a logging frontend and a
//! simple autopilot: capture the pointer, turn toward the nearest enemy,
//! fire twice a second. Set `ARENA_CONFIG` to a TOML file to override tuning
//! and `RUST_LOG` to change verbosity.

use std::time::{Duration, Instant};

use log::info;

use arena_app::control;
use arena_app::frontend::LogFrontend;
use arena_app::input::InputBridge;
use arena_app::state::AppState;
use arena_core::commands::PlayerCommand;
use arena_core::config::ArenaConfig;
use arena_core::enums::GamePhase;
use arena_core::state::ArenaSnapshot;

/// Give up after this long.
const DEMO_TIMEOUT: Duration = Duration::from_secs(90);

/// Time between autopilot decisions.
const AUTOPILOT_PERIOD: Duration = Duration::from_millis(500);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::var_os("ARENA_CONFIG") {
        Some(path) => ArenaConfig::load(path)?,
        None => ArenaConfig::default(),
    };
    info!("Starting arena demo (seed {})", config.seed);

    let state = AppState::new();
    control::start_simulation(&state, config, Box::new(LogFrontend::default()))?;

    let mut input = InputBridge::default();
    control::send_command(&state, input.click_overlay())?;

    let started = Instant::now();
    let outcome = loop {
        std::thread::sleep(AUTOPILOT_PERIOD);

        let Some(snapshot) = control::get_snapshot(&state)? else {
            continue;
        };
        if snapshot.phase.is_terminal() {
            input.pointer_released();
            break snapshot.phase;
        }
        if started.elapsed() > DEMO_TIMEOUT {
            break snapshot.phase;
        }

        if let Some(look) = aim_at_nearest(&snapshot) {
            control::send_command(&state, look)?;
            control::send_command(&state, input.mouse_down())?;
        }
    };

    control::stop_simulation(&state)?;
    match outcome {
        GamePhase::Victory => info!("Autopilot cleared the arena"),
        GamePhase::Defeat => info!("Autopilot was defeated"),
        GamePhase::Playing => info!("Demo timed out"),
    }
    Ok(())
}

/// Look command pointing the camera at the closest enemy.
fn aim_at_nearest(snapshot: &ArenaSnapshot) -> Option<PlayerCommand> {
    let eye = snapshot.player.position;
    let target = snapshot.enemies.iter().min_by(|a, b| {
        eye.distance_to(&a.position)
            .total_cmp(&eye.distance_to(&b.position))
    })?;

    let d = target.position.0 - eye.0;
    // The camera looks down -Z at yaw 0.
    let yaw = (-d.x).atan2(-d.z);
    let pitch = d.y.atan2(d.x.hypot(d.z));
    Some(PlayerCommand::Look { yaw, pitch })
}
