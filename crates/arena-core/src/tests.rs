#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use glam::DVec3;

    use crate::commands::PlayerCommand;
    use crate::config::{ArenaConfig, ConfigError, Tuning};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::HudEvent;
    use crate::state::ArenaSnapshot;
    use crate::types::{Position, SimTime, Velocity};

    #[test]
    fn test_move_key_codes() {
        assert_eq!(MoveKey::from_code("KeyW"), Some(MoveKey::Forward));
        assert_eq!(MoveKey::from_code("ArrowUp"), Some(MoveKey::Forward));
        assert_eq!(MoveKey::from_code("KeyS"), Some(MoveKey::Backward));
        assert_eq!(MoveKey::from_code("ArrowDown"), Some(MoveKey::Backward));
        assert_eq!(MoveKey::from_code("KeyA"), Some(MoveKey::Left));
        assert_eq!(MoveKey::from_code("ArrowLeft"), Some(MoveKey::Left));
        assert_eq!(MoveKey::from_code("KeyD"), Some(MoveKey::Right));
        assert_eq!(MoveKey::from_code("ArrowRight"), Some(MoveKey::Right));
        assert_eq!(MoveKey::from_code("Space"), None);
        assert_eq!(MoveKey::from_code("keyw"), None);
    }

    #[test]
    fn test_game_phase_terminal_and_banner() {
        assert!(!GamePhase::Playing.is_terminal());
        assert!(GamePhase::Victory.is_terminal());
        assert!(GamePhase::Defeat.is_terminal());
        assert_eq!(GamePhase::Playing.banner(), None);
        assert_eq!(GamePhase::Victory.banner(), Some("VICTORY"));
        assert_eq!(GamePhase::Defeat.banner(), Some("Game Over"));
    }

    #[test]
    fn test_render_kind_from_owner() {
        assert_eq!(
            RenderKind::from(ProjectileOwner::Player),
            RenderKind::PlayerBolt
        );
        assert_eq!(RenderKind::from(ProjectileOwner::Enemy), RenderKind::EnemyBolt);
    }

    #[test]
    fn test_render_kind_extent() {
        assert_eq!(RenderKind::EnemyCapsule.extent(), (1.0, 2.0));
        assert_eq!(RenderKind::PlayerBolt.extent(), (0.2, 0.0));
        assert_eq!(RenderKind::EnemyBolt.extent(), RenderKind::PlayerBolt.extent());
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::starting_at(1000.0);
        assert_eq!(time.frame, 0);

        time.advance_to(1016.0);
        assert_eq!(time.frame, 1);
        assert_abs_diff_eq!(time.dt_secs, 0.016, epsilon = 1e-12);
        assert_abs_diff_eq!(time.since(1000.0), 16.0);

        // Clock going backwards gives an empty frame and keeps the latest stamp.
        time.advance_to(1010.0);
        assert_eq!(time.frame, 2);
        assert_eq!(time.dt_secs, 0.0);
        assert_eq!(time.now_ms, 1016.0);
    }

    #[test]
    fn test_position_distances_and_yaw() {
        let a = Position::new(0.0, 2.0, 0.0);
        let b = Position::new(3.0, 1.6, 4.0);
        assert_abs_diff_eq!(a.planar_distance_to(&b), 5.0, epsilon = 1e-12);
        assert!(a.distance_to(&b) > 5.0);

        // +Z is yaw 0, +X is a quarter turn.
        assert_abs_diff_eq!(a.yaw_to(&Position::new(0.0, 0.0, 5.0)), 0.0);
        assert_abs_diff_eq!(
            a.yaw_to(&Position::new(5.0, 9.0, 0.0)),
            std::f64::consts::FRAC_PI_2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_velocity_along_normalizes() {
        let v = Velocity::along(DVec3::new(0.0, 0.0, -10.0), 40.0);
        assert_abs_diff_eq!(v.speed(), 40.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.0.z, -40.0, epsilon = 1e-12);

        let zero = Velocity::along(DVec3::ZERO, 8.0);
        assert_eq!(zero.0, DVec3::ZERO);
    }

    #[test]
    fn test_tuning_defaults_match_constants() {
        let t = Tuning::default();
        assert_eq!(t.enemy_count, ENEMY_COUNT);
        assert_eq!(t.max_health, 100);
        assert_eq!(t.player_projectile_speed, 40.0);
        assert_eq!(t.enemy_projectile_speed, 8.0);
        assert_eq!(t.projectile_speed(ProjectileOwner::Player), 40.0);
        assert_eq!(t.projectile_speed(ProjectileOwner::Enemy), 8.0);
        assert_eq!(t.damage_cooldown_ms, 500.0);
        assert_eq!(t.projectile_lifetime_ms, 3000.0);
    }

    #[test]
    fn test_config_partial_toml_keeps_defaults() {
        let config = ArenaConfig::from_toml_str(
            r#"
seed = 7

[tuning]
enemy_count = 3
enemy_speed = 6.5
"#,
        )
        .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.tuning.enemy_count, 3);
        assert_eq!(config.tuning.enemy_speed, 6.5);
        assert_eq!(config.tuning.damage_per_hit, DAMAGE_PER_HIT);
        assert_eq!(config.tuning.eye_height, PLAYER_EYE_HEIGHT);
    }

    #[test]
    fn test_config_empty_toml_is_default() {
        let config = ArenaConfig::from_toml_str("").unwrap();
        assert_eq!(config, ArenaConfig::default());
    }

    #[test]
    fn test_config_toml_round_trip() {
        let mut config = ArenaConfig::default();
        config.seed = 99;
        config.tuning.enemy_fire_range = 45.0;
        let text = config.to_toml_string().unwrap();
        let back = ArenaConfig::from_toml_str(&text).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_config_rejects_bad_types() {
        let err = ArenaConfig::from_toml_str("seed = \"not a number\"").unwrap_err();
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn test_config_rejects_out_of_range_health() {
        for bad in ["max_health = 250", "max_health = 0"] {
            let text = format!("[tuning]\n{bad}\n");
            let err = ArenaConfig::from_toml_str(&text).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{bad}: {err}");
        }
        let full = ArenaConfig::from_toml_str("[tuning]\nmax_health = 100\n").unwrap();
        assert_eq!(full.tuning.max_health, PLAYER_MAX_HEALTH);
        let low = ArenaConfig::from_toml_str("[tuning]\nmax_health = 1\n").unwrap();
        assert_eq!(low.tuning.max_health, 1);
    }

    #[test]
    fn test_config_rejects_non_finite_and_negative_values() {
        for bad in [
            "spawn_half_width = inf",
            "spawn_half_width = nan",
            "spawn_half_width = -1.0",
            "enemy_speed = -4.0",
            "player_projectile_speed = inf",
            "projectile_lifetime_ms = -3000.0",
            "damage_cooldown_ms = nan",
            "enemy_fire_range = -inf",
            "spawn_center_z = inf",
        ] {
            let text = format!("[tuning]\n{bad}\n");
            let err = ArenaConfig::from_toml_str(&text).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{bad}: {err}");
        }
    }

    #[test]
    fn test_tuning_validate_accepts_defaults_and_zero_width() {
        assert!(Tuning::default().validate().is_ok());

        let mut tuning = Tuning::default();
        tuning.spawn_half_width = 0.0;
        tuning.spawn_center_z = 25.0;
        assert!(tuning.validate().is_ok());

        tuning.eye_height = f64::NAN;
        let err = tuning.validate().unwrap_err();
        assert!(err.to_string().contains("eye_height"));
    }

    #[test]
    fn test_config_missing_file_is_io_error() {
        let err = ArenaConfig::load("/nonexistent/arena.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    /// Commands travel as internally tagged JSON from the input layer.
    #[test]
    fn test_player_command_json_shape() {
        let json = serde_json::to_string(&PlayerCommand::KeyDown {
            key: MoveKey::Left,
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"KeyDown","key":"Left"}"#);

        let cmd: PlayerCommand =
            serde_json::from_str(r#"{"type":"Look","yaw":1.0,"pitch":-0.5}"#).unwrap();
        assert!(matches!(cmd, PlayerCommand::Look { yaw, pitch } if yaw == 1.0 && pitch == -0.5));
    }

    #[test]
    fn test_snapshot_serializes() {
        let snapshot = ArenaSnapshot {
            hud_events: vec![HudEvent::RoundOver {
                victory: true,
                banner: VICTORY_BANNER.to_string(),
            }],
            ..Default::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains(r#""type":"RoundOver""#));
        assert!(json.contains(r#""phase":"Playing""#));
    }
}
