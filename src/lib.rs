// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests compare exact float results and unwrap fixtures freely.
#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::float_cmp, clippy::similar_names)
)]

//! Viewport camera navigation for a material look-development tool.
//!
//! The crate turns platform-agnostic pointer, scroll and key events into
//! orbit, pan, zoom and first-person fly navigation of a look-dev view.
//!
//! # Key entry points
//!
//! - [`camera::CameraController`] - the interaction state machine
//! - [`camera::CameraState`] - the caller-owned camera record
//! - [`context::Context`] - two-view look-dev window state
//! - [`options::Options`] - navigation tuning and key bindings (TOML)
//!
//! # Usage
//!
//! ```
//! use glam::Vec2;
//! use lookdev::camera::{CameraController, CameraState, Viewport};
//! use lookdev::input::{InputEvent, Modifiers, MouseButton};
//!
//! let mut controller = CameraController::default();
//! let viewport = Viewport::from_size(800.0, 600.0);
//! let camera = CameraState::default();
//!
//! let press = InputEvent::MouseDown {
//!     button: MouseButton::Left,
//!     modifiers: Modifiers::NONE,
//! };
//! let (camera, _) = controller.handle_event(camera, &press, viewport);
//! let drag = InputEvent::MouseDrag {
//!     delta: Vec2::new(10.0, 0.0),
//!     modifiers: Modifiers::NONE,
//! };
//! let (camera, consumed) = controller.handle_event(camera, &drag, viewport);
//! assert!(consumed);
//! assert_ne!(camera.rotation, CameraState::default().rotation);
//! ```

pub mod camera;
pub mod context;
pub mod error;
pub mod input;
pub mod options;
pub mod shader_property;
pub mod util;

pub use error::LookDevError;
