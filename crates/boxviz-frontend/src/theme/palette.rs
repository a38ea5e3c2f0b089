//! Color palette for the viewport overlays
//!
//! The scene is drawn on a white background, so overlay text uses dark
//! tones.

use egui::Color32;

// =============================================================================
// Text
// =============================================================================

/// Field label text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(20, 20, 24);
/// Label backing fill
pub const LABEL_BG: Color32 = Color32::from_rgba_premultiplied(240, 240, 242, 220);

// =============================================================================
// Accent colors (blue)
// =============================================================================

/// Primary accent (selected field)
pub const ACCENT_PRIMARY: Color32 = Color32::from_rgb(66, 150, 250);
/// Subtle accent for the selected field background
pub const ACCENT_SUBTLE: Color32 = Color32::from_rgba_premultiplied(66, 150, 250, 40);

// =============================================================================
// Semantic colors
// =============================================================================

/// Error color
pub const ERROR: Color32 = Color32::from_rgb(200, 40, 40);

// =============================================================================
// Axis colors (XYZ = RGB)
// =============================================================================

/// X axis color (red)
pub const AXIS_X: Color32 = Color32::from_rgb(255, 0, 0);
/// Y axis color (green)
pub const AXIS_Y: Color32 = Color32::from_rgb(0, 255, 0);
/// Z axis color (blue)
pub const AXIS_Z: Color32 = Color32::from_rgb(0, 0, 255);
