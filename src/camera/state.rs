use glam::{Mat4, Quat, Vec2, Vec3};

/// Screen-space rectangle of the view being navigated, in pixels.
///
/// Screen coordinates produced by [`CameraState::world_to_screen`] have y
/// growing upward from the bottom edge of the rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Left edge.
    pub x: f32,
    /// Bottom edge.
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Viewport anchored at the origin.
    #[must_use]
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    /// Width / height, falling back to 1 for degenerate rectangles.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.width > 0.0 && self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// Camera record owned by a look-dev view.
///
/// The camera looks at `pivot` from `distance_from_pivot()` away along its
/// forward axis. Forward is `-Z` in camera-local space, right is `+X` and up
/// is `+Y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// World-space point the camera orbits and pans around.
    pub pivot: Vec3,
    /// Camera orientation (unit quaternion).
    pub rotation: Quat,
    /// Zoom level. Together with the field of view it sets the distance
    /// from the pivot. May go to zero or below under drag zoom.
    pub view_size: f32,
    /// Vertical field of view in degrees, in the open range (0, 180).
    pub field_of_view: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            pivot: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            view_size: 1.0,
            field_of_view: 90.0,
        }
    }
}

impl CameraState {
    /// Camera-local forward axis in world space.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Camera-local right axis in world space.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Camera-local up axis in world space.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Distance from the eye to the pivot. Never negative.
    ///
    /// A field of view outside (0, 180) puts the eye on the pivot.
    #[must_use]
    pub fn distance_from_pivot(&self) -> f32 {
        let half_fov = (self.field_of_view * 0.5).to_radians();
        let sine = half_fov.sin();
        if sine <= 0.0 {
            return 0.0;
        }
        self.view_size.abs() / sine
    }

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.pivot - self.forward() * self.distance_from_pivot()
    }

    /// World-to-view transform.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position(), self.forward(), self.up())
    }

    /// Perspective projection for the given viewport.
    #[must_use]
    pub fn projection_matrix(&self, viewport: Viewport) -> Mat4 {
        let near = (self.distance_from_pivot() * 0.001).max(1e-4);
        Mat4::perspective_infinite_rh(
            self.field_of_view.to_radians(),
            viewport.aspect(),
            near,
        )
    }

    /// Project a world point into viewport pixels.
    ///
    /// `x`/`y` are pixel coordinates and `z` is the depth along the view
    /// axis, so the result can be fed back to [`Self::screen_to_world`].
    #[must_use]
    pub fn world_to_screen(&self, viewport: Viewport, point: Vec3) -> Vec3 {
        let local = self.view_matrix().transform_point3(point);
        let depth = -local.z;
        let extent = self.half_extent(viewport, depth);
        let ndc = if extent.x == 0.0 || extent.y == 0.0 {
            Vec2::ZERO
        } else {
            Vec2::new(local.x / extent.x, local.y / extent.y)
        };
        Vec3::new(
            viewport.x + (ndc.x + 1.0) * 0.5 * viewport.width,
            viewport.y + (ndc.y + 1.0) * 0.5 * viewport.height,
            depth,
        )
    }

    /// Unproject viewport pixels at depth `z` back into world space.
    #[must_use]
    pub fn screen_to_world(&self, viewport: Viewport, screen: Vec3) -> Vec3 {
        let depth = screen.z;
        let ndc = if viewport.width > 0.0 && viewport.height > 0.0 {
            Vec2::new(
                (screen.x - viewport.x) / viewport.width * 2.0 - 1.0,
                (screen.y - viewport.y) / viewport.height * 2.0 - 1.0,
            )
        } else {
            Vec2::ZERO
        };
        let extent = self.half_extent(viewport, depth);
        let local = Vec3::new(ndc.x * extent.x, ndc.y * extent.y, -depth);
        self.view_matrix().inverse().transform_point3(local)
    }

    /// Copy framing (pivot, rotation, view size and field of view) from
    /// another camera.
    pub fn synchronize_from(&mut self, other: &Self) {
        self.pivot = other.pivot;
        self.rotation = other.rotation;
        self.view_size = other.view_size;
        self.field_of_view = other.field_of_view;
    }

    /// Half width/height of the view frustum slice at `depth`.
    fn half_extent(&self, viewport: Viewport, depth: f32) -> Vec2 {
        let half_height =
            depth * (self.field_of_view * 0.5).to_radians().tan();
        Vec2::new(half_height * viewport.aspect(), half_height)
    }
}
