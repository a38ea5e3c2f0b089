//! Application state module

mod viewport;

pub use viewport::ViewportState;

use boxviz_core::{FieldEditor, FieldId, Scene};

/// Left-button orbit drag
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    active: bool,
    last_pos: Option<egui::Pos2>,
}

impl DragState {
    pub fn is_active(&self) -> bool {
        self.active
    }

    fn start(&mut self, pos: egui::Pos2) {
        self.active = true;
        self.last_pos = Some(pos);
    }

    fn stop(&mut self) {
        self.active = false;
        self.last_pos = None;
    }

    /// Pointer moved to `pos`. Returns the motion since the last position
    /// while dragging.
    fn moved(&mut self, pos: egui::Pos2) -> Option<egui::Vec2> {
        let last = self.last_pos.replace(pos);
        if !self.active {
            return None;
        }
        last.map(|last| pos - last)
    }
}

/// What the frame's input asks the camera and renderer to do
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Accumulated drag motion in points
    pub orbit: egui::Vec2,
    /// Wheel notches, positive when scrolling up
    pub zoom_notches: f32,
    /// A field commit changed the scene
    pub scene_changed: bool,
}

/// Interaction state carried between frames
#[derive(Debug, Default)]
pub struct UiState {
    pub drag: DragState,
    pub editor: FieldEditor,
    /// Last validation error, shown under the field labels
    pub status: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one frame of raw input events.
    ///
    /// `label_rects` are the screen rectangles of the field labels; a press
    /// inside one selects that field. Presses elsewhere in `viewport_rect`
    /// start an orbit drag.
    pub fn handle_events(
        &mut self,
        events: &[egui::Event],
        viewport_rect: egui::Rect,
        label_rects: &[(FieldId, egui::Rect)],
        scene: &mut Scene,
    ) -> FrameInput {
        let mut input = FrameInput::default();

        for event in events {
            match event {
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    if *pressed {
                        self.press(*pos, viewport_rect, label_rects, scene);
                    } else {
                        self.drag.stop();
                    }
                }
                egui::Event::PointerMoved(pos) => {
                    if let Some(delta) = self.drag.moved(*pos) {
                        input.orbit += delta;
                    }
                }
                egui::Event::PointerGone => {
                    self.drag.last_pos = None;
                }
                egui::Event::MouseWheel { delta, .. } => {
                    input.zoom_notches += wheel_notches(delta.y);
                }
                egui::Event::Text(text) => {
                    self.editor.insert_text(text);
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => {
                    input.scene_changed |= self.key(*key, scene);
                }
                _ => {}
            }
        }

        input
    }

    /// Left-button press at `pos`
    pub fn press(
        &mut self,
        pos: egui::Pos2,
        viewport_rect: egui::Rect,
        label_rects: &[(FieldId, egui::Rect)],
        scene: &Scene,
    ) {
        if let Some((field, _)) = label_rects.iter().find(|(_, rect)| rect.contains(pos)) {
            self.editor.select(*field, scene);
            self.status = None;
            return;
        }

        self.editor.deselect();
        if viewport_rect.contains(pos) {
            self.drag.start(pos);
        }
    }

    /// Handle an editing key. Returns `true` when a commit changed the scene.
    pub fn key(&mut self, key: egui::Key, scene: &mut Scene) -> bool {
        match key {
            egui::Key::Backspace => {
                self.editor.backspace();
                false
            }
            egui::Key::Escape => {
                self.editor.cancel();
                false
            }
            egui::Key::Enter if self.editor.selected().is_some() => self.commit(scene),
            _ => false,
        }
    }

    fn commit(&mut self, scene: &mut Scene) -> bool {
        let before = *scene;
        match self.editor.commit(scene) {
            Ok(field) => {
                tracing::debug!("Set {} = {}", field.label(), scene.field_text(field));
                self.status = None;
                *scene != before
            }
            Err(e) => {
                tracing::warn!("Rejected edit: {}", e);
                self.status = Some(e.to_string());
                false
            }
        }
    }
}

/// One zoom notch per wheel event, by direction only
fn wheel_notches(delta_y: f32) -> f32 {
    if delta_y > 0.0 {
        1.0
    } else if delta_y < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Pos2, Rect, pos2, vec2};

    fn viewport_rect() -> Rect {
        Rect::from_min_size(Pos2::ZERO, vec2(1200.0, 800.0))
    }

    fn labels() -> Vec<(FieldId, Rect)> {
        FieldId::ALL
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let min = pos2(10.0, 10.0 + 20.0 * i as f32);
                (*field, Rect::from_min_size(min, vec2(150.0, 18.0)))
            })
            .collect()
    }

    fn button(pos: Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_drag_accumulates_motion() {
        let mut state = UiState::new();
        let mut scene = Scene::default();
        let events = [
            button(pos2(600.0, 400.0), true),
            egui::Event::PointerMoved(pos2(610.0, 400.0)),
            egui::Event::PointerMoved(pos2(615.0, 397.0)),
        ];

        let input = state.handle_events(&events, viewport_rect(), &labels(), &mut scene);
        assert!(state.drag.is_active());
        assert_eq!(input.orbit, vec2(15.0, -3.0));

        let input = state.handle_events(
            &[
                button(pos2(615.0, 397.0), false),
                egui::Event::PointerMoved(pos2(700.0, 300.0)),
            ],
            viewport_rect(),
            &labels(),
            &mut scene,
        );
        assert!(!state.drag.is_active());
        assert_eq!(input.orbit, egui::Vec2::ZERO);
    }

    #[test]
    fn test_motion_without_drag_is_ignored() {
        let mut state = UiState::new();
        let mut scene = Scene::default();
        let events = [
            egui::Event::PointerMoved(pos2(100.0, 100.0)),
            egui::Event::PointerMoved(pos2(200.0, 150.0)),
        ];
        let input = state.handle_events(&events, viewport_rect(), &labels(), &mut scene);
        assert_eq!(input.orbit, egui::Vec2::ZERO);
    }

    #[test]
    fn test_click_on_label_selects_without_dragging() {
        let mut state = UiState::new();
        let scene = Scene::default();
        let labels = labels();

        state.press(pos2(20.0, 35.0), viewport_rect(), &labels, &scene);
        assert_eq!(state.editor.selected(), Some(FieldId::Length));
        assert_eq!(state.editor.buffer(), "1");
        assert!(!state.drag.is_active());

        state.press(pos2(600.0, 400.0), viewport_rect(), &labels, &scene);
        assert_eq!(state.editor.selected(), None);
        assert!(state.drag.is_active());
    }

    #[test]
    fn test_typing_and_enter_commits() {
        let mut state = UiState::new();
        let mut scene = Scene::default();
        state.press(pos2(20.0, 15.0), viewport_rect(), &labels(), &scene);
        assert_eq!(state.editor.selected(), Some(FieldId::Height));

        assert!(!state.key(egui::Key::Backspace, &mut scene));
        state.handle_events(
            &[egui::Event::Text("2.5".to_string())],
            viewport_rect(),
            &labels(),
            &mut scene,
        );
        assert_eq!(state.editor.buffer(), "2.5");

        assert!(state.key(egui::Key::Enter, &mut scene));
        assert_eq!(scene.prism.height, 2.5);
        assert_eq!(state.editor.selected(), None);
        assert!(state.status.is_none());
    }

    #[test]
    fn test_invalid_commit_sets_status() {
        let mut state = UiState::new();
        let mut scene = Scene::default();
        state.press(pos2(20.0, 75.0), viewport_rect(), &labels(), &scene);
        assert_eq!(state.editor.selected(), Some(FieldId::HeightSubdivisions));

        state.key(egui::Key::Backspace, &mut scene);
        state.key(egui::Key::Backspace, &mut scene);
        state.editor.insert_text("abc");

        assert!(!state.key(egui::Key::Enter, &mut scene));
        assert_eq!(scene, Scene::default());
        assert!(state.status.is_some());
        assert_eq!(state.editor.selected(), Some(FieldId::HeightSubdivisions));
        assert_eq!(state.editor.buffer(), "10");
    }

    #[test]
    fn test_escape_cancels_edit() {
        let mut state = UiState::new();
        let mut scene = Scene::default();
        state.press(pos2(20.0, 55.0), viewport_rect(), &labels(), &scene);
        state.editor.insert_text("7");

        assert!(!state.key(egui::Key::Escape, &mut scene));
        assert_eq!(state.editor.selected(), None);
        assert_eq!(scene, Scene::default());
    }

    #[test]
    fn test_keys_without_selection_do_nothing() {
        let mut state = UiState::new();
        let mut scene = Scene::default();
        assert!(!state.key(egui::Key::Enter, &mut scene));
        assert!(!state.key(egui::Key::Backspace, &mut scene));
        assert!(state.status.is_none());

        let input = state.handle_events(
            &[egui::Event::Text("42".to_string())],
            viewport_rect(),
            &labels(),
            &mut scene,
        );
        assert_eq!(input, FrameInput::default());
        assert_eq!(state.editor.buffer(), "");
    }

    #[test]
    fn test_wheel_counts_direction_only() {
        assert_eq!(wheel_notches(3.0), 1.0);
        assert_eq!(wheel_notches(-0.2), -1.0);
        assert_eq!(wheel_notches(0.0), 0.0);
    }
}
