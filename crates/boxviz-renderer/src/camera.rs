//! Orbit camera for the prism view
//!
//! The camera always looks at the origin. Its view matrix is
//! `T(0, 0, -distance) · Rx(pitch) · Ry(yaw)`, where the distance is the
//! subject extent plus a user-controlled zoom offset.

use boxviz_core::{Ray, Viewport};
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

use crate::config::CameraConfig;
use crate::constants::camera::{INITIAL_PITCH_DEGREES, INITIAL_YAW_DEGREES, MIN_DISTANCE};

/// Camera uniform buffer data
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    /// Projection times view
    pub view_proj: [[f32; 4]; 4],
}

/// Orbit camera
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rotation about the world y axis, in radians
    pub yaw: f32,
    /// Rotation about the view x axis, in radians
    pub pitch: f32,
    /// Offset added to [`Camera::extent`] to get the eye distance
    pub zoom: f32,
    /// Size of the subject; the largest prism dimension
    pub extent: f32,
    /// Vertical field of view, in radians
    pub fov: f32,
    /// Width over height
    pub aspect: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Camera {
    /// Create a camera in the isometric start pose
    pub fn new(aspect: f32) -> Self {
        Self {
            yaw: INITIAL_YAW_DEGREES.to_radians(),
            pitch: INITIAL_PITCH_DEGREES.to_radians(),
            zoom: 5.0,
            extent: 1.0,
            fov: 45.0_f32.to_radians(),
            aspect,
            near: 0.1,
            far: 50000.0,
        }
    }

    /// Update aspect ratio
    pub fn update_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Rotate around the origin. Angles are in radians.
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch += delta_pitch;
    }

    /// Change the zoom offset. Negative values move the eye closer.
    pub fn zoom(&mut self, delta: f32) {
        self.zoom = (self.zoom + delta).max(MIN_DISTANCE - self.extent);
    }

    /// Orbit by a pointer drag of `dx`, `dy` points, at
    /// `orbit_sensitivity` degrees per point.
    pub fn drag(&mut self, dx: f32, dy: f32, config: &CameraConfig) {
        let scale = config.orbit_sensitivity.to_radians();
        self.orbit(dx * scale, dy * scale);
    }

    /// Zoom by wheel notches. Positive notches (scrolling up) move closer.
    pub fn scroll(&mut self, notches: f32, config: &CameraConfig) {
        self.zoom(-notches * config.zoom_step);
    }

    /// Apply lens settings and reset the zoom offset to `initial_zoom`.
    pub fn apply_config(&mut self, config: &CameraConfig) {
        self.set_fov_degrees(config.fov_degrees);
        self.set_near(config.near_plane);
        self.set_far(config.far_plane);
        self.zoom = config.initial_zoom;
    }

    /// Set the subject size the eye distance is measured from
    pub fn set_extent(&mut self, extent: f32) {
        self.extent = extent;
    }

    /// Eye distance from the origin
    pub fn distance(&self) -> f32 {
        (self.extent + self.zoom).max(MIN_DISTANCE)
    }

    /// Set field of view in degrees
    pub fn set_fov_degrees(&mut self, fov_degrees: f32) {
        self.fov = fov_degrees.clamp(10.0, 120.0).to_radians();
    }

    /// Set near clipping plane
    pub fn set_near(&mut self, near: f32) {
        self.near = near.max(0.001);
    }

    /// Set far clipping plane
    pub fn set_far(&mut self, far: f32) {
        self.far = far.max(self.near + 1.0);
    }

    /// Orbit rotation alone, without the eye translation.
    ///
    /// The axes indicator uses this to stay in sync with the main view.
    pub fn rotation(&self) -> Mat4 {
        Mat4::from_rotation_x(self.pitch) * Mat4::from_rotation_y(self.yaw)
    }

    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -self.distance())) * self.rotation()
    }

    /// Get projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Get camera uniform data
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: (self.projection_matrix() * self.view_matrix()).to_cols_array_2d(),
        }
    }

    /// Convert a viewport-local screen position to a world ray
    pub fn screen_to_ray(&self, screen: Vec2, viewport: Viewport) -> Ray {
        Ray::from_screen(
            screen,
            viewport,
            self.view_matrix(),
            self.projection_matrix(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use boxviz_core::{Face, Prism, select_faces};

    fn eye(camera: &Camera) -> Vec3 {
        camera.view_matrix().inverse().transform_point3(Vec3::ZERO)
    }

    #[test]
    fn test_initial_pose_is_isometric() {
        let camera = Camera::new(1.5);
        let eye = eye(&camera);
        let dir = eye.normalize();
        let third = 1.0 / 3.0_f32.sqrt();

        assert_relative_eq!(eye.length(), camera.distance(), epsilon = 1e-4);
        assert_relative_eq!(dir.x, third, epsilon = 1e-4);
        assert_relative_eq!(dir.y, third, epsilon = 1e-4);
        assert_relative_eq!(dir.z, third, epsilon = 1e-4);
    }

    #[test]
    fn test_distance_follows_extent_and_zoom() {
        let mut camera = Camera::new(1.0);
        camera.set_extent(10.0);
        assert_relative_eq!(camera.distance(), 15.0);

        camera.zoom(-0.1);
        assert_relative_eq!(camera.distance(), 14.9, epsilon = 1e-5);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = Camera::new(1.0);
        camera.set_extent(2.0);
        camera.zoom(-1000.0);
        assert_relative_eq!(camera.distance(), MIN_DISTANCE, epsilon = 1e-6);

        // Zooming back out responds immediately.
        camera.zoom(1.0);
        assert_relative_eq!(camera.distance(), MIN_DISTANCE + 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_center_ray_points_at_origin() {
        let mut camera = Camera::new(1.5);
        camera.set_extent(10.0);
        let viewport = Viewport::from_size(1200.0, 800.0);

        let ray = camera.screen_to_ray(Vec2::new(600.0, 400.0), viewport);
        let toward_origin = -eye(&camera).normalize();

        assert_relative_eq!(ray.direction.x, toward_origin.x, epsilon = 1e-4);
        assert_relative_eq!(ray.direction.y, toward_origin.y, epsilon = 1e-4);
        assert_relative_eq!(ray.direction.z, toward_origin.z, epsilon = 1e-4);
    }

    #[test]
    fn test_picking_through_camera() {
        let prism = Prism::new(5.0, 1.0, 10.0);
        let mut camera = Camera::new(1.5);
        camera.set_extent(prism.max_dimension());
        camera.yaw = 0.0;
        camera.pitch = 0.0;
        let viewport = Viewport::from_size(1200.0, 800.0);

        // Eye on +z looking down -z: slightly off center hits the +z face.
        let ray = camera.screen_to_ray(Vec2::new(610.0, 390.0), viewport);
        assert_eq!(select_faces(&ray, &prism).highlighted(), Some(Face::WidthMax));

        // Far from the prism: nothing.
        let ray = camera.screen_to_ray(Vec2::new(5.0, 5.0), viewport);
        assert_eq!(select_faces(&ray, &prism).highlighted(), None);
    }

    #[test]
    fn test_orbit_accumulates() {
        let mut camera = Camera::new(1.0);
        let yaw = camera.yaw;
        camera.orbit(0.5, -0.25);
        camera.orbit(0.5, -0.25);
        assert_relative_eq!(camera.yaw, yaw + 1.0);
        assert_relative_eq!(
            camera.pitch,
            INITIAL_PITCH_DEGREES.to_radians() - 0.5,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_scroll_up_moves_closer() {
        let config = CameraConfig::default();
        let mut camera = Camera::new(1.0);
        camera.set_extent(10.0);
        let before = camera.distance();

        camera.scroll(1.0, &config);
        assert_relative_eq!(camera.distance(), before - config.zoom_step, epsilon = 1e-5);

        camera.scroll(-2.0, &config);
        assert_relative_eq!(
            camera.distance(),
            before + config.zoom_step,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_drag_uses_degrees_per_point() {
        let config = CameraConfig {
            orbit_sensitivity: 0.5,
            ..CameraConfig::default()
        };
        let mut camera = Camera::new(1.0);
        let (yaw, pitch) = (camera.yaw, camera.pitch);

        camera.drag(30.0, 0.0, &config);
        assert_relative_eq!(camera.yaw, yaw + 30.0_f32.to_radians() * 0.5, epsilon = 1e-6);
        assert_relative_eq!(camera.pitch, pitch);

        camera.drag(0.0, -10.0, &config);
        assert_relative_eq!(camera.pitch, pitch - 5.0_f32.to_radians(), epsilon = 1e-6);
    }

    #[test]
    fn test_apply_config_resets_zoom() {
        let mut camera = Camera::new(1.0);
        camera.zoom(3.0);

        let config = CameraConfig {
            fov_degrees: 60.0,
            initial_zoom: 2.0,
            ..CameraConfig::default()
        };
        camera.apply_config(&config);

        assert_relative_eq!(camera.zoom, 2.0);
        assert_relative_eq!(camera.fov, 60.0_f32.to_radians());
        assert_relative_eq!(camera.near, config.near_plane);
    }

    #[test]
    fn test_uniform_holds_view_projection_only() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 64);

        let camera = Camera::new(1.5);
        let expected = camera.projection_matrix() * camera.view_matrix();
        assert_eq!(camera.uniform().view_proj, expected.to_cols_array_2d());
    }
}
