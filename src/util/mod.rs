//! Shared utilities.

/// Elapsed-time sampling for fly ticks.
pub mod fly_timer;

pub use fly_timer::FlyTimer;
