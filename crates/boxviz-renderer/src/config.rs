//! Renderer configuration structures
//!
//! This module provides configurable settings for the renderer that can be
//! serialized and loaded from configuration files.

use serde::{Deserialize, Serialize};

/// Viewport rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    /// Background clear color (RGBA)
    pub background_color: [f32; 4],
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            background_color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Camera default configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane distance
    pub near_plane: f32,
    /// Far clipping plane distance
    pub far_plane: f32,
    /// Orbit rotation in degrees per dragged pixel
    pub orbit_sensitivity: f32,
    /// Zoom offset change per scroll notch
    pub zoom_step: f32,
    /// Zoom offset added to the subject extent at startup
    pub initial_zoom: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near_plane: 0.1,
            far_plane: 50000.0,
            orbit_sensitivity: 1.0,
            zoom_step: 0.1,
            initial_zoom: 5.0,
        }
    }
}

/// Face and wireframe colors
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MeshConfig {
    /// Fill color of faces not under the cursor (RGB)
    pub face_color: [f32; 3],
    /// Fill color of the face under the cursor (RGB)
    pub highlight_color: [f32; 3],
    /// Subdivision line color (RGB)
    pub line_color: [f32; 3],
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            face_color: [0.5, 0.5, 0.5],
            highlight_color: [0.26, 0.59, 0.98],
            line_color: [0.0, 0.0, 0.0],
        }
    }
}

/// Complete renderer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RendererConfig {
    /// Viewport settings
    #[serde(default)]
    pub viewport: ViewportConfig,
    /// Camera settings
    #[serde(default)]
    pub camera: CameraConfig,
    /// Mesh colors
    #[serde(default)]
    pub mesh: MeshConfig,
}
