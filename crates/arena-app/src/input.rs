//! Raw input to player commands.
//!
//! Mirrors a pointer-lock first-person control: keys set movement intent,
//! mouse motion turns the camera only while the pointer is captured, a
//! mouse press fires.

use arena_core::commands::PlayerCommand;
use arena_core::enums::MoveKey;

/// Radians of turn per pixel of mouse motion.
pub const MOUSE_SENSITIVITY: f64 = 0.002;

/// Stateful translator from device events to `PlayerCommand`s.
#[derive(Debug, Clone)]
pub struct InputBridge {
    yaw: f64,
    pitch: f64,
    locked: bool,
    sensitivity: f64,
}

impl Default for InputBridge {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            locked: false,
            sensitivity: MOUSE_SENSITIVITY,
        }
    }
}

impl InputBridge {
    pub fn with_sensitivity(sensitivity: f64) -> Self {
        Self {
            sensitivity,
            ..Default::default()
        }
    }

    /// Key pressed. Only movement keys produce a command.
    pub fn key_down(&self, code: &str) -> Option<PlayerCommand> {
        MoveKey::from_code(code).map(|key| PlayerCommand::KeyDown { key })
    }

    /// Key released.
    pub fn key_up(&self, code: &str) -> Option<PlayerCommand> {
        MoveKey::from_code(code).map(|key| PlayerCommand::KeyUp { key })
    }

    /// Mouse button pressed.
    pub fn mouse_down(&self) -> PlayerCommand {
        PlayerCommand::Shoot
    }

    /// Click on the instruction overlay: capture the pointer.
    pub fn click_overlay(&mut self) -> PlayerCommand {
        self.locked = true;
        PlayerCommand::Lock
    }

    /// Escape: release the pointer.
    pub fn escape(&mut self) -> PlayerCommand {
        self.locked = false;
        PlayerCommand::Unlock
    }

    /// The simulation released the pointer (round over).
    pub fn pointer_released(&mut self) {
        self.locked = false;
    }

    /// Relative mouse motion in pixels. Ignored while the pointer is free.
    pub fn pointer_moved(&mut self, dx: f64, dy: f64) -> Option<PlayerCommand> {
        if !self.locked {
            return None;
        }
        let limit = std::f64::consts::FRAC_PI_2;
        self.yaw -= dx * self.sensitivity;
        self.pitch = (self.pitch - dy * self.sensitivity).clamp(-limit, limit);
        Some(PlayerCommand::Look {
            yaw: self.yaw,
            pitch: self.pitch,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys_only() {
        let input = InputBridge::default();
        assert!(matches!(
            input.key_down("KeyW"),
            Some(PlayerCommand::KeyDown { key: MoveKey::Forward })
        ));
        assert!(matches!(
            input.key_up("ArrowLeft"),
            Some(PlayerCommand::KeyUp { key: MoveKey::Left })
        ));
        assert!(input.key_down("KeyQ").is_none());
        assert!(matches!(input.mouse_down(), PlayerCommand::Shoot));
    }

    #[test]
    fn test_look_requires_capture() {
        let mut input = InputBridge::default();
        assert!(input.pointer_moved(100.0, 0.0).is_none());

        assert!(matches!(input.click_overlay(), PlayerCommand::Lock));
        match input.pointer_moved(100.0, -50.0) {
            Some(PlayerCommand::Look { yaw, pitch }) => {
                assert!((yaw + 0.2).abs() < 1e-12);
                assert!((pitch - 0.1).abs() < 1e-12);
            }
            other => panic!("expected Look, got {other:?}"),
        }

        assert!(matches!(input.escape(), PlayerCommand::Unlock));
        assert!(input.pointer_moved(10.0, 10.0).is_none());
    }

    #[test]
    fn test_pitch_clamped() {
        let mut input = InputBridge::with_sensitivity(1.0);
        input.click_overlay();
        match input.pointer_moved(0.0, -10.0) {
            Some(PlayerCommand::Look { pitch, .. }) => {
                assert_eq!(pitch, std::f64::consts::FRAC_PI_2)
            }
            other => panic!("expected Look, got {other:?}"),
        }
        input.pointer_released();
        assert!(input.pointer_moved(1.0, 1.0).is_none());
    }
}
