//! Axes indicator overlay for the viewport
//!
//! Drawn in the bottom-left quarter of the viewport with an orthographic
//! mapping of `[-10, 10]` on both axes. The axes turn with the camera's orbit
//! rotation but ignore its distance.

use glam::{Mat4, Vec3};

use crate::theme::palette;

/// Half-width of the indicator's orthographic volume
const ORTHO_HALF_EXTENT: f32 = 10.0;
/// Axis length in orthographic units
const AXIS_LENGTH: f32 = 2.5;

/// One axis after rotation and projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedAxis {
    pub label: &'static str,
    pub color: egui::Color32,
    /// Tip offset from the indicator center, in points, y down
    pub tip: egui::Vec2,
    /// View-space z; larger is closer to the viewer
    pub depth: f32,
}

/// Region of the viewport the indicator is drawn in
pub fn indicator_rect(viewport: egui::Rect) -> egui::Rect {
    let size = viewport.size() / 4.0;
    egui::Rect::from_min_size(viewport.left_bottom() - egui::vec2(0.0, size.y), size)
}

/// Rotate the unit axes and project them, farthest first
pub fn project_axes(rotation: Mat4, rect_size: egui::Vec2) -> [ProjectedAxis; 3] {
    let scale = rect_size / (2.0 * ORTHO_HALF_EXTENT);

    let project = |axis: Vec3, label, color| {
        let v = rotation.transform_vector3(axis * AXIS_LENGTH);
        ProjectedAxis {
            label,
            color,
            tip: egui::vec2(v.x * scale.x, -v.y * scale.y),
            depth: v.z,
        }
    };

    let mut axes = [
        project(Vec3::X, "X", palette::AXIS_X),
        project(Vec3::Y, "Y", palette::AXIS_Y),
        project(Vec3::Z, "Z", palette::AXIS_Z),
    ];
    axes.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    axes
}

/// Paint the indicator
pub fn render_axes_indicator(painter: &egui::Painter, viewport: egui::Rect, rotation: Mat4) {
    let rect = indicator_rect(viewport);
    let center = rect.center();

    for axis in project_axes(rotation, rect.size()) {
        painter.line_segment(
            [center, center + axis.tip],
            egui::Stroke::new(2.0, axis.color),
        );

        if axis.tip.length() > 1.0 {
            let label_offset = axis.tip.normalized() * 8.0;
            painter.text(
                center + axis.tip + label_offset,
                egui::Align2::CENTER_CENTER,
                axis.label,
                egui::FontId::default(),
                axis.color,
            );
        }
    }
}
