use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera navigation tuning parameters.
pub struct CameraOptions {
    /// Orbit/fly-look rotation in radians per pixel of drag.
    #[schemars(title = "Orbit Speed", range(min = 0.0005, max = 0.01), extend("step" = 0.0005))]
    pub orbit_speed: f32,
    /// Pan distance multiplier while shift is held.
    #[schemars(skip)]
    pub pan_fast_multiplier: f32,
    /// Drag-zoom gain per pixel.
    #[schemars(skip)]
    pub zoom_drag_gain: f32,
    /// Drag-zoom gain per pixel while shift is held.
    #[schemars(skip)]
    pub zoom_drag_fast_gain: f32,
    /// Relative shrink of the start size per unit of negative zoom motion.
    #[schemars(skip)]
    pub zoom_shrink_rate: f32,
    /// Linear growth per unit of positive zoom motion, scaled by zoom speed.
    #[schemars(skip)]
    pub zoom_grow_rate: f32,
    /// Floor for the zoom speed captured when a zoom drag starts.
    #[schemars(skip)]
    pub min_zoom_speed: f32,
    /// Scroll-wheel step relative to the current view size.
    #[schemars(title = "Scroll Zoom", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub scroll_zoom_rate: f32,
    /// Smallest view size change a non-zero scroll produces.
    #[schemars(skip)]
    pub scroll_min_step: f32,
    /// Fly speed (units per second) when motion starts.
    #[schemars(title = "Fly Speed", range(min = 1.0, max = 50.0), extend("step" = 0.5))]
    pub fly_base_speed: f32,
    /// Per-second exponential growth of fly speed while keys stay held.
    #[schemars(title = "Fly Acceleration", range(min = 1.0, max = 2.0), extend("step" = 0.05))]
    pub fly_acceleration: f32,
    /// Fly speed multiplier while shift is held.
    #[schemars(skip)]
    pub fly_fast_multiplier: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            orbit_speed: 0.003,
            pan_fast_multiplier: 4.0,
            zoom_drag_gain: 3.0,
            zoom_drag_fast_gain: 9.0,
            zoom_shrink_rate: 0.001,
            zoom_grow_rate: 0.003,
            min_zoom_speed: 0.3,
            scroll_zoom_rate: 0.015,
            scroll_min_step: 0.3,
            fly_base_speed: 9.0,
            fly_acceleration: 1.1,
            fly_fast_multiplier: 5.0,
        }
    }
}
