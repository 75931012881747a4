//! Viewport camera for look-dev views.
//!
//! Provides the camera record with its projection helpers, and the
//! interaction controller that turns pointer, scroll and key events into
//! orbit, pan, zoom and fly navigation.

/// Interaction controller: event dispatch and per-mode updates.
pub mod controller;
/// Key-held fly motion integration.
pub mod fly;
/// Drag modes and the mouse-down mode dispatcher.
pub mod mode;
/// Camera record, viewport and world/screen projection.
pub mod state;

pub use controller::CameraController;
pub use mode::ControllerMode;
pub use state::{CameraState, Viewport};
