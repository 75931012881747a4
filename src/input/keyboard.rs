use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Camera actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// cancel = "Escape"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Fly along the camera's forward axis.
    MoveForward,
    /// Fly backward.
    MoveBackward,
    /// Strafe left.
    MoveLeft,
    /// Strafe right.
    MoveRight,
    /// Rise along the camera's up axis.
    MoveUp,
    /// Sink along the camera's up axis.
    MoveDown,
    /// Abort the active drag mode and drop held motion.
    Cancel,
}

impl KeyAction {
    /// Every bindable action, in bit order for [`HeldKeys`].
    pub const ALL: [Self; 7] = [
        Self::MoveForward,
        Self::MoveBackward,
        Self::MoveLeft,
        Self::MoveRight,
        Self::MoveUp,
        Self::MoveDown,
        Self::Cancel,
    ];

    /// Camera-local fly direction for movement actions.
    #[must_use]
    pub const fn direction(self) -> Option<Vec3> {
        match self {
            Self::MoveForward => Some(Vec3::NEG_Z),
            Self::MoveBackward => Some(Vec3::Z),
            Self::MoveLeft => Some(Vec3::NEG_X),
            Self::MoveRight => Some(Vec3::X),
            Self::MoveUp => Some(Vec3::Y),
            Self::MoveDown => Some(Vec3::NEG_Y),
            Self::Cancel => None,
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of movement actions whose keys are currently held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldKeys(u8);

impl HeldKeys {
    /// Mark an action held or released. Returns `true` if the set changed.
    pub fn set(&mut self, action: KeyAction, held: bool) -> bool {
        let before = self.0;
        if held {
            self.0 |= action.bit();
        } else {
            self.0 &= !action.bit();
        }
        before != self.0
    }

    /// Whether the given action is held.
    #[must_use]
    pub const fn is_held(self, action: KeyAction) -> bool {
        self.0 & action.bit() != 0
    }

    /// Release everything.
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Sum of the camera-local directions of all held movement actions.
    ///
    /// Opposing keys cancel out, so holding forward and backward yields
    /// zero motion.
    #[must_use]
    pub fn motion(self) -> Vec3 {
        KeyAction::ALL
            .into_iter()
            .filter(|action| self.is_held(*action))
            .filter_map(KeyAction::direction)
            .sum()
    }
}
