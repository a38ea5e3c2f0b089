//! Editable field labels drawn over the viewport

use boxviz_core::{FieldEditor, FieldId, Scene};

use crate::theme::palette;

const MARGIN: egui::Vec2 = egui::vec2(10.0, 10.0);
const LINE_SPACING: f32 = 4.0;
const PADDING: egui::Vec2 = egui::vec2(4.0, 2.0);

/// Text shown for one field, e.g. `Height: 5`
pub fn label_text(field: FieldId, editor: &FieldEditor, scene: &Scene) -> String {
    let value = editor.display_text(field, scene);
    if editor.is_selected(field) {
        format!("{}: {}_", field.label(), value)
    } else {
        format!("{}: {}", field.label(), value)
    }
}

fn font() -> egui::FontId {
    egui::FontId::proportional(16.0)
}

/// Lay out the labels top-left in `viewport`. Returns each field's hit
/// rectangle and its text layout.
fn layout(
    painter: &egui::Painter,
    viewport: egui::Rect,
    editor: &FieldEditor,
    scene: &Scene,
) -> Vec<(FieldId, egui::Rect, std::sync::Arc<egui::Galley>)> {
    let mut cursor = viewport.min + MARGIN;

    FieldId::ALL
        .iter()
        .map(|&field| {
            let galley = painter.layout_no_wrap(
                label_text(field, editor, scene),
                font(),
                palette::TEXT_PRIMARY,
            );
            let rect = egui::Rect::from_min_size(cursor, galley.size() + 2.0 * PADDING);
            cursor.y += rect.height() + LINE_SPACING;
            (field, rect, galley)
        })
        .collect()
}

/// Hit rectangles for the current label text
pub fn label_rects(
    painter: &egui::Painter,
    viewport: egui::Rect,
    editor: &FieldEditor,
    scene: &Scene,
) -> Vec<(FieldId, egui::Rect)> {
    layout(painter, viewport, editor, scene)
        .into_iter()
        .map(|(field, rect, _)| (field, rect))
        .collect()
}

/// Paint the labels and, below them, the status line if there is one
pub fn render_fields(
    painter: &egui::Painter,
    viewport: egui::Rect,
    editor: &FieldEditor,
    scene: &Scene,
    status: Option<&str>,
) {
    let mut bottom = viewport.min.y + MARGIN.y;

    for (field, rect, galley) in layout(painter, viewport, editor, scene) {
        if editor.is_selected(field) {
            painter.rect_filled(rect, 2.0, palette::ACCENT_SUBTLE);
            painter.rect_stroke(
                rect,
                2.0,
                egui::Stroke::new(1.0, palette::ACCENT_PRIMARY),
                egui::StrokeKind::Inside,
            );
        } else {
            painter.rect_filled(rect, 2.0, palette::LABEL_BG);
        }
        painter.galley(rect.min + PADDING, galley, palette::TEXT_PRIMARY);
        bottom = rect.max.y;
    }

    if let Some(status) = status {
        painter.text(
            egui::pos2(viewport.min.x + MARGIN.x, bottom + LINE_SPACING * 2.0),
            egui::Align2::LEFT_TOP,
            status,
            font(),
            palette::ERROR,
        );
    }
}
