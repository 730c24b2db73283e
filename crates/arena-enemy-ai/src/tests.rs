#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use glam::DVec3;

    use arena_core::config::Tuning;
    use arena_core::constants::*;
    use arena_core::types::Position;

    use crate::brain::{evaluate, EnemyContext};

    const FRAME: f64 = 1.0 / 60.0;

    fn make_context(enemy: Position, player: Position, last_shot_ms: f64, now_ms: f64) -> EnemyContext {
        EnemyContext {
            position: enemy,
            target: player,
            last_shot_ms,
            now_ms,
            dt_secs: FRAME,
        }
    }

    #[test]
    fn test_far_enemy_steps_toward_player_on_floor_plane() {
        let tuning = Tuning::default();
        let enemy = Position::new(6.0, ENEMY_SPAWN_HEIGHT, -32.0);
        let player = Position::new(0.0, PLAYER_EYE_HEIGHT, 0.0);
        let update = evaluate(&make_context(enemy, player, 0.0, 100.0), &tuning);

        let expected_dir = DVec3::new(-6.0, 0.0, 32.0).normalize();
        let step = update.position.0 - enemy.0;
        assert_abs_diff_eq!(step.x, expected_dir.x * 4.0 / 60.0, epsilon = 1e-12);
        assert_abs_diff_eq!(step.z, expected_dir.z * 4.0 / 60.0, epsilon = 1e-12);
        assert_eq!(step.y, 0.0, "enemy must stay grounded");
        assert_abs_diff_eq!(step.length(), ENEMY_SPEED * FRAME, epsilon = 1e-12);
    }

    #[test]
    fn test_step_length_ignores_height_difference() {
        // A large height gap must not shorten the horizontal step.
        let tuning = Tuning::default();
        let enemy = Position::new(0.0, 50.0, -20.0);
        let player = Position::new(0.0, 0.0, 0.0);
        let update = evaluate(&make_context(enemy, player, 0.0, 0.0), &tuning);
        assert_abs_diff_eq!(update.position.0.z - enemy.0.z, 4.0 / 60.0, epsilon = 1e-12);
        assert_eq!(update.position.0.y, 50.0);
    }

    #[test]
    fn test_close_enemy_holds_position() {
        let tuning = Tuning::default();
        let enemy = Position::new(0.0, ENEMY_SPAWN_HEIGHT, -10.0);
        let player = Position::new(0.0, PLAYER_EYE_HEIGHT, 0.0);
        let update = evaluate(&make_context(enemy, player, 0.0, 0.0), &tuning);
        // Exactly at the approach distance: no movement.
        assert_eq!(update.position, enemy);
        assert_abs_diff_eq!(update.distance, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_enemy_faces_player() {
        let tuning = Tuning::default();
        let player = Position::new(0.0, PLAYER_EYE_HEIGHT, 0.0);

        let south = evaluate(
            &make_context(Position::new(0.0, 2.0, -5.0), player, 0.0, 0.0),
            &tuning,
        );
        assert_abs_diff_eq!(south.yaw, 0.0, epsilon = 1e-12);

        let east = evaluate(
            &make_context(Position::new(5.0, 2.0, 0.0), player, 0.0, 0.0),
            &tuning,
        );
        assert_abs_diff_eq!(east.yaw, -std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_fire_requires_cooldown_and_range() {
        let tuning = Tuning::default();
        let player = Position::new(0.0, PLAYER_EYE_HEIGHT, 0.0);
        let enemy = Position::new(0.0, ENEMY_SPAWN_HEIGHT, -20.0);

        // Cooldown not elapsed.
        let update = evaluate(&make_context(enemy, player, 0.0, 1500.0), &tuning);
        assert!(update.fire.is_none());

        // Exactly at the interval: still not eligible.
        let update = evaluate(&make_context(enemy, player, 0.0, 2000.0), &tuning);
        assert!(update.fire.is_none());

        let update = evaluate(&make_context(enemy, player, 0.0, 2000.5), &tuning);
        assert!(update.fire.is_some());

        // Out of range.
        let far = Position::new(0.0, ENEMY_SPAWN_HEIGHT, -30.0);
        let update = evaluate(&make_context(far, player, 0.0, 5000.0), &tuning);
        assert!(update.fire.is_none());
    }

    #[test]
    fn test_aim_uses_post_step_position() {
        let tuning = Tuning::default();
        let player = Position::new(0.0, PLAYER_EYE_HEIGHT, 0.0);
        let enemy = Position::new(0.0, ENEMY_SPAWN_HEIGHT, -20.0);
        let update = evaluate(&make_context(enemy, player, 0.0, 3000.0), &tuning);

        let aim = update.fire.unwrap();
        assert_abs_diff_eq!(aim.z, 20.0 - 4.0 / 60.0, epsilon = 1e-12);
        assert_abs_diff_eq!(aim.y, PLAYER_EYE_HEIGHT - ENEMY_SPAWN_HEIGHT, epsilon = 1e-12);
    }

    #[test]
    fn test_enemy_on_top_of_player_is_stable() {
        let tuning = Tuning::default();
        let here = Position::new(1.0, 2.0, 1.0);
        let update = evaluate(&make_context(here, here, 0.0, 0.0), &tuning);
        assert_eq!(update.position, here);
        assert!(update.yaw.is_finite());
    }
}
