use glam::Vec2;

/// Platform-agnostic input events.
///
/// These are fed into a
/// [`CameraController`](crate::camera::controller::CameraController), which
/// turns them into camera updates.
///
/// # Example
///
/// ```ignore
/// let (camera, consumed) = controller.handle_event(
///     camera,
///     &InputEvent::MouseDrag { delta: Vec2::new(4.0, 0.0), modifiers },
///     viewport,
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button pressed over the viewport.
    MouseDown {
        /// Which button was pressed.
        button: MouseButton,
        /// Modifier keys held at press time.
        modifiers: Modifiers,
    },
    /// Mouse button released.
    MouseUp {
        /// Which button was released.
        button: MouseButton,
    },
    /// Pointer moved while a button is held.
    MouseDrag {
        /// Pixel delta since the previous drag event (y grows downward).
        delta: Vec2,
        /// Modifier keys held during the drag.
        modifiers: Modifiers,
    },
    /// Scroll wheel.
    Scroll {
        /// Scroll delta; positive y zooms out.
        delta: Vec2,
    },
    /// Key pressed. Key strings use the `winit::keyboard::KeyCode` debug
    /// format: `"KeyW"`, `"Escape"`, etc.
    KeyDown {
        /// Physical key string.
        key: String,
    },
    /// Key released.
    KeyUp {
        /// Physical key string.
        key: String,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Any additional button, by index.
    Other(u16),
}

/// Modifier keys held while an event fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Modifiers {
    /// Shift: precision/fast variants of each mode.
    pub shift: bool,
    /// Alt (Option on macOS).
    pub alt: bool,
    /// Control key (not Command).
    pub control: bool,
    /// Command on macOS, Windows key elsewhere.
    pub super_key: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        alt: false,
        control: false,
        super_key: false,
    };

    /// Only shift held.
    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    /// Only alt held.
    pub const ALT: Self = Self {
        alt: true,
        ..Self::NONE
    };

    /// Only control held.
    pub const CONTROL: Self = Self {
        control: true,
        ..Self::NONE
    };
}

/// Host platform, for modifier conventions that differ between platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// macOS: Ctrl+left-click is a secondary click, used for zoom.
    MacOs,
    /// Windows, Linux and the web.
    Other,
}

impl Platform {
    /// Platform this crate was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Other
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Back => Self::Other(3),
            winit::event::MouseButton::Forward => Self::Other(4),
            winit::event::MouseButton::Other(index) => Self::Other(index),
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::keyboard::ModifiersState> for Modifiers {
    fn from(state: winit::keyboard::ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            alt: state.alt_key(),
            control: state.control_key(),
            super_key: state.super_key(),
        }
    }
}

/// Key string for a winit physical key, in the format key bindings use.
#[cfg(feature = "viewer")]
#[must_use]
pub fn key_name(key: winit::keyboard::PhysicalKey) -> Option<String> {
    match key {
        winit::keyboard::PhysicalKey::Code(code) => Some(format!("{code:?}")),
        winit::keyboard::PhysicalKey::Unidentified(_) => None,
    }
}
