//! Theme module for UI styling

pub mod palette;

/// Apply the light visuals used over the white viewport
pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.selection.stroke = egui::Stroke::new(1.0, palette::ACCENT_PRIMARY);
    visuals.selection.bg_fill = palette::ACCENT_SUBTLE;
    visuals.override_text_color = Some(palette::TEXT_PRIMARY);
    ctx.set_visuals(visuals);
}
