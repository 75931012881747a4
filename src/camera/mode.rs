use crate::input::{Modifiers, MouseButton, Platform};

/// Active camera manipulation mode.
///
/// Exactly one mode is active at a time. A mode is entered on mouse-down
/// and left on mouse-up or cancel; `None` is both the initial and the idle
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerMode {
    /// No drag in progress.
    #[default]
    None,
    /// Rotate around the pivot.
    Orbit,
    /// Slide the pivot in the view plane.
    Pan,
    /// Change the view size.
    Zoom,
    /// Rotate around the eye, first-person style.
    Fly,
}

impl ControllerMode {
    /// Whether a drag mode is active.
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Mode a mouse-down selects, and whether zoom came from the right-button
/// (Alt + right drag) variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeSelection {
    /// Selected mode.
    pub mode: ControllerMode,
    /// Right button was the trigger (Zoom via Alt + right, or Fly).
    pub right_button: bool,
}

/// Pick a drag mode from the pressed button and held modifiers.
///
/// | Input                                   | Mode  |
/// |-----------------------------------------|-------|
/// | middle                                  | Pan   |
/// | left + Ctrl (macOS), right + Alt        | Zoom  |
/// | left                                    | Orbit |
/// | right                                   | Fly   |
/// | anything else                           | None  |
#[must_use]
pub fn select_mode(
    button: MouseButton,
    modifiers: Modifiers,
    platform: Platform,
) -> ModeSelection {
    let control_on_mac = modifiers.control && platform == Platform::MacOs;
    let (mode, right_button) = match button {
        MouseButton::Middle => (ControllerMode::Pan, false),
        MouseButton::Left if control_on_mac => (ControllerMode::Zoom, false),
        MouseButton::Right if modifiers.alt => (ControllerMode::Zoom, true),
        MouseButton::Left => (ControllerMode::Orbit, false),
        MouseButton::Right => (ControllerMode::Fly, true),
        MouseButton::Other(_) => (ControllerMode::None, false),
    };
    ModeSelection { mode, right_button }
}
