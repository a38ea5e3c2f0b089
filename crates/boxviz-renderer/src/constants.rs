//! Rendering constants
//!
//! Fixed values shared across the renderer. Anything a user may want to
//! tune lives in [`crate::config`] instead.

/// Viewport rendering constants
pub mod viewport {
    /// MSAA sample count (1 = disabled)
    pub const SAMPLE_COUNT: u32 = 4;
    /// Depth buffer format
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
    /// Clear color used until a config is applied (white)
    pub const CLEAR_COLOR: wgpu::Color = wgpu::Color::WHITE;
}

/// Camera constants
pub mod camera {
    /// Initial yaw in degrees
    pub const INITIAL_YAW_DEGREES: f32 = -45.0;
    /// Initial pitch in degrees; with the yaw above this gives an isometric view
    pub const INITIAL_PITCH_DEGREES: f32 = 35.264;
    /// Smallest allowed eye-to-origin distance
    pub const MIN_DISTANCE: f32 = 0.1;
}

/// Face fill constants
pub mod faces {
    /// Vertices per frame: four per face
    pub const VERTEX_COUNT: usize = 24;
    /// Indices per frame: two triangles per face
    pub const INDEX_COUNT: usize = 36;
    /// Constant depth bias pushing faces behind coincident wireframe lines
    pub const DEPTH_BIAS: i32 = 2;
    /// Slope-scaled depth bias for faces seen at grazing angles
    pub const DEPTH_BIAS_SLOPE_SCALE: f32 = 1.0;
}
