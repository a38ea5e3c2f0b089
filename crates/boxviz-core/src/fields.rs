//! Editable numeric fields
//!
//! Each [`FieldId`] is bound to one scene value. A [`FieldEditor`] tracks the
//! selected field and the text typed into it until the edit is committed or
//! cancelled.

use crate::error::EditError;
use crate::scene::Scene;

/// One of the six editable scene values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Height,
    Length,
    Width,
    HeightSubdivisions,
    LengthSubdivisions,
    WidthSubdivisions,
}

impl FieldId {
    /// All fields in display order
    pub const ALL: [FieldId; 6] = [
        FieldId::Height,
        FieldId::Length,
        FieldId::Width,
        FieldId::HeightSubdivisions,
        FieldId::LengthSubdivisions,
        FieldId::WidthSubdivisions,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldId::Height => "Height",
            FieldId::Length => "Length",
            FieldId::Width => "Width",
            FieldId::HeightSubdivisions => "Height Subdivisions",
            FieldId::LengthSubdivisions => "Length Subdivisions",
            FieldId::WidthSubdivisions => "Width Subdivisions",
        }
    }

    /// Whether the field holds a subdivision count
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            FieldId::HeightSubdivisions | FieldId::LengthSubdivisions | FieldId::WidthSubdivisions
        )
    }
}

/// Text editing state for the selected field
#[derive(Debug, Clone, Default)]
pub struct FieldEditor {
    selected: Option<FieldId>,
    buffer: String,
}

impl FieldEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a field and load its current value into the buffer
    pub fn select(&mut self, field: FieldId, scene: &Scene) {
        self.selected = Some(field);
        self.buffer = scene.field_text(field);
    }

    /// Drop the selection and any uncommitted text
    pub fn deselect(&mut self) {
        self.selected = None;
        self.buffer.clear();
    }

    pub fn selected(&self) -> Option<FieldId> {
        self.selected
    }

    pub fn is_selected(&self, field: FieldId) -> bool {
        self.selected == Some(field)
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Append a printable character. Returns `false` without a selection.
    pub fn insert_char(&mut self, c: char) -> bool {
        if self.selected.is_none() || c.is_control() {
            return false;
        }
        self.buffer.push(c);
        true
    }

    /// Append every printable character of `text`
    pub fn insert_text(&mut self, text: &str) -> bool {
        let mut changed = false;
        for c in text.chars() {
            changed |= self.insert_char(c);
        }
        changed
    }

    /// Remove the last character. Returns `false` without a selection or
    /// when the buffer is already empty.
    pub fn backspace(&mut self) -> bool {
        if self.selected.is_none() {
            return false;
        }
        self.buffer.pop().is_some()
    }

    /// Write the buffer into `scene`.
    ///
    /// On success the field is deselected. On failure the scene keeps its
    /// previous value, the buffer reverts to that value and the field stays
    /// selected.
    pub fn commit(&mut self, scene: &mut Scene) -> Result<FieldId, EditError> {
        let field = self.selected.ok_or(EditError::NoSelection)?;

        match scene.set_field(field, &self.buffer) {
            Ok(()) => {
                self.deselect();
                Ok(field)
            }
            Err(err) => {
                self.buffer = scene.field_text(field);
                Err(err)
            }
        }
    }

    /// Abandon the edit
    pub fn cancel(&mut self) {
        self.deselect();
    }

    /// Text to show for `field`: the buffer while it is being edited,
    /// otherwise the scene value
    pub fn display_text(&self, field: FieldId, scene: &Scene) -> String {
        if self.is_selected(field) {
            self.buffer.clone()
        } else {
            scene.field_text(field)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_without_selection_is_noop() {
        let mut editor = FieldEditor::new();
        assert!(!editor.insert_char('5'));
        assert!(!editor.backspace());
        assert_eq!(editor.buffer(), "");
        assert_eq!(editor.selected(), None);
    }

    #[test]
    fn test_commit_without_selection() {
        let mut editor = FieldEditor::new();
        let mut scene = Scene::default();
        assert_eq!(editor.commit(&mut scene), Err(EditError::NoSelection));
    }

    #[test]
    fn test_select_loads_current_value() {
        let mut editor = FieldEditor::new();
        let scene = Scene::default();
        editor.select(FieldId::Width, &scene);

        assert_eq!(editor.selected(), Some(FieldId::Width));
        assert_eq!(editor.buffer(), "10");
    }

    #[test]
    fn test_edit_and_commit() {
        let mut editor = FieldEditor::new();
        let mut scene = Scene::default();
        editor.select(FieldId::Height, &scene);

        assert!(editor.backspace());
        assert!(editor.insert_text("7.5"));
        assert_eq!(editor.display_text(FieldId::Height, &scene), "7.5");
        assert_eq!(editor.display_text(FieldId::Width, &scene), "10");

        assert_eq!(editor.commit(&mut scene), Ok(FieldId::Height));
        assert_eq!(scene.prism.height, 7.5);
        assert_eq!(editor.selected(), None);
    }

    #[test]
    fn test_commit_garbage_keeps_value() {
        let mut editor = FieldEditor::new();
        let mut scene = Scene::default();
        editor.select(FieldId::Length, &scene);

        while editor.backspace() {}
        editor.insert_text("abc");

        let result = editor.commit(&mut scene);
        assert!(matches!(result, Err(EditError::InvalidNumber(_))));
        assert_eq!(scene.prism.length, 1.0);
        assert_eq!(editor.buffer(), "1");
        assert_eq!(editor.selected(), Some(FieldId::Length));
    }

    #[test]
    fn test_cancel_discards_buffer() {
        let mut editor = FieldEditor::new();
        let scene = Scene::default();
        editor.select(FieldId::HeightSubdivisions, &scene);
        editor.insert_char('9');

        editor.cancel();
        assert_eq!(editor.selected(), None);
        assert_eq!(editor.display_text(FieldId::HeightSubdivisions, &scene), "10");
    }

    #[test]
    fn test_control_characters_rejected() {
        let mut editor = FieldEditor::new();
        editor.select(FieldId::Width, &Scene::default());
        assert!(!editor.insert_char('\n'));
        assert!(!editor.insert_char('\u{8}'));
        assert_eq!(editor.buffer(), "10");
    }

    #[test]
    fn test_field_metadata() {
        assert_eq!(FieldId::ALL.len(), 6);
        assert_eq!(FieldId::ALL.iter().filter(|f| f.is_integer()).count(), 3);
        assert_eq!(FieldId::WidthSubdivisions.label(), "Width Subdivisions");
    }
}
