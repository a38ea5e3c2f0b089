//! 3D Viewport panel

mod axes_indicator;
mod fields;

use boxviz_core::{Face, Scene, Viewport};

use crate::state::{UiState, ViewportState};

use axes_indicator::render_axes_indicator;
use fields::{label_rects, render_fields};

/// 3D viewport panel
pub struct ViewportPanel {
    hovered_face: Option<Face>,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self { hovered_face: None }
    }

    /// Fallback when no render context
    pub fn ui(&self, ui: &mut egui::Ui) {
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, egui::Sense::hover());

        painter.rect_filled(response.rect, 0.0, egui::Color32::WHITE);
        painter.text(
            response.rect.center(),
            egui::Align2::CENTER_CENTER,
            "3D Viewport\n(wgpu not available)",
            egui::FontId::proportional(16.0),
            egui::Color32::GRAY,
        );
    }

    /// Run one frame: input, camera, picking, render, overlays.
    pub fn ui_with_render_context(
        &mut self,
        ui: &mut egui::Ui,
        render_state: &egui_wgpu::RenderState,
        viewport_state: &mut ViewportState,
        ui_state: &mut UiState,
        scene: &mut Scene,
        events: &[egui::Event],
    ) {
        let available_size = ui.available_size();
        let pixels_per_point = ui.ctx().pixels_per_point();
        let [width, height] = pixel_size(available_size, pixels_per_point);

        if width == 0 || height == 0 {
            return;
        }

        let (rect, _response) =
            ui.allocate_exact_size(available_size, egui::Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        // Input
        let labels = label_rects(&painter, rect, &ui_state.editor, scene);
        let input = ui_state.handle_events(events, rect, &labels, scene);
        if input.scene_changed {
            tracing::debug!("Scene changed: {:?}", scene);
        }

        // Camera
        {
            let controller = viewport_state.renderer.camera_controller_mut();
            if input.orbit != egui::Vec2::ZERO {
                controller.drag(input.orbit.x, input.orbit.y);
            }
            if input.zoom_notches != 0.0 {
                controller.scroll(input.zoom_notches);
            }
        }

        // Picking and render
        let texture_id = {
            let mut egui_renderer = render_state.renderer.write();
            viewport_state.ensure_texture(width, height, &mut egui_renderer)
        };

        let pointer = ui
            .input(|i| i.pointer.hover_pos())
            .filter(|pos| rect.contains(*pos))
            .map(|pos| {
                let local = (pos - rect.min) * pixels_per_point;
                glam::Vec2::new(local.x, local.y)
            });
        // Must match the texture extent
        let viewport = Viewport::from_size(width as f32, height as f32);

        let selection = viewport_state.prepare(scene, pointer, viewport);
        if selection.highlighted() != self.hovered_face {
            self.hovered_face = selection.highlighted();
            tracing::trace!("Hovered face: {:?}", self.hovered_face);
        }
        viewport_state.render();

        // Display the rendered texture
        egui::Image::new(egui::load::SizedTexture::new(texture_id, available_size))
            .paint_at(ui, rect);

        // Overlays
        render_axes_indicator(&painter, rect, viewport_state.renderer.camera().rotation());
        render_fields(
            &painter,
            rect,
            &ui_state.editor,
            scene,
            ui_state.status.as_deref(),
        );
    }
}

impl Default for ViewportPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Physical pixel extent of a region `points` in size
fn pixel_size(points: egui::Vec2, pixels_per_point: f32) -> [u32; 2] {
    let pixels = points * pixels_per_point;
    [pixels.x.round() as u32, pixels.y.round() as u32]
}
