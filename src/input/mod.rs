//! Input handling: platform-agnostic event types and key actions consumed
//! by the camera controller.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions and held-key tracking.
pub mod keyboard;

pub use event::{InputEvent, Modifiers, MouseButton, Platform};
pub use keyboard::{HeldKeys, KeyAction};
