//! Damped-velocity integration for key-held fly motion.

use glam::Vec3;

use crate::options::CameraOptions;

/// Result of one fly integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyStep {
    /// Camera-local displacement for this tick.
    pub displacement: Vec3,
    /// Fly speed to carry into the next tick.
    pub speed: f32,
}

/// Advance fly motion by `elapsed` seconds.
///
/// Zero motion stops the camera and resets the speed. Otherwise the speed
/// starts at the base speed and grows by `fly_acceleration` per second,
/// and the displacement follows the normalized motion direction.
#[must_use]
pub fn fly_step(
    motion: Vec3,
    elapsed: f32,
    prior_speed: f32,
    fast: bool,
    options: &CameraOptions,
) -> FlyStep {
    if motion == Vec3::ZERO {
        return FlyStep {
            displacement: Vec3::ZERO,
            speed: 0.0,
        };
    }

    let speed = if prior_speed == 0.0 {
        options.fly_base_speed
    } else {
        prior_speed * options.fly_acceleration.powf(elapsed)
    };
    let multiplier = if fast { options.fly_fast_multiplier } else { 1.0 };

    FlyStep {
        displacement: motion.normalize() * speed * multiplier * elapsed,
        speed,
    }
}
