//! Screen-to-world ray casting
//!
//! Screen coordinates use a top-left origin with y growing downward, the
//! same convention as the UI layer. Window depth 0 is the near plane and 1
//! is the far plane, matching the `[0, 1]` clip depth of
//! [`glam::Mat4::perspective_rh`].

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Pixel rectangle the scene is drawn into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Create a viewport. Width and height are clamped to at least one pixel.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    /// Viewport anchored at the origin
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Width over height
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// Map a window-space point back into world space.
///
/// `window.z` is the depth in `[0, 1]`.
pub fn unproject(window: Vec3, model_view: Mat4, projection: Mat4, viewport: Viewport) -> Vec3 {
    let ndc = Vec4::new(
        2.0 * (window.x - viewport.x) / viewport.width - 1.0,
        1.0 - 2.0 * (window.y - viewport.y) / viewport.height,
        window.z,
        1.0,
    );

    let world = (projection * model_view).inverse() * ndc;
    world.truncate() / world.w
}

/// Half-line with a unit direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing the direction
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Cast a ray through a screen point by unprojecting it at the near and
    /// far planes.
    pub fn from_screen(
        screen: Vec2,
        viewport: Viewport,
        model_view: Mat4,
        projection: Mat4,
    ) -> Self {
        let near = unproject(screen.extend(0.0), model_view, projection, viewport);
        let far = unproject(screen.extend(1.0), model_view, projection, viewport);

        Self {
            origin: near,
            direction: (far - near).normalize(),
        }
    }

    /// Point at parameter `t` along the ray
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
