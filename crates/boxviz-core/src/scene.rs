//! Editable scene state

use serde::{Deserialize, Serialize};

use crate::constants::MAX_SUBDIVISIONS;
use crate::error::EditError;
use crate::fields::FieldId;
use crate::prism::Prism;
use crate::subdivision::Subdivisions;

/// The prism being visualized and its wireframe subdivisions
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub prism: Prism,
    pub subdivisions: Subdivisions,
}

impl Scene {
    pub fn new(prism: Prism, subdivisions: Subdivisions) -> Self {
        Self {
            prism,
            subdivisions,
        }
    }

    /// Current value of a field formatted for display
    pub fn field_text(&self, field: FieldId) -> String {
        match field {
            FieldId::Height => format_dimension(self.prism.height),
            FieldId::Length => format_dimension(self.prism.length),
            FieldId::Width => format_dimension(self.prism.width),
            FieldId::HeightSubdivisions => self.subdivisions.height.to_string(),
            FieldId::LengthSubdivisions => self.subdivisions.length.to_string(),
            FieldId::WidthSubdivisions => self.subdivisions.width.to_string(),
        }
    }

    /// Parse `input` and store it in `field`.
    ///
    /// The scene is left untouched when parsing or validation fails.
    pub fn set_field(&mut self, field: FieldId, input: &str) -> Result<(), EditError> {
        let input = input.trim();

        match field {
            FieldId::Height => self.prism.height = parse_dimension(input)?,
            FieldId::Length => self.prism.length = parse_dimension(input)?,
            FieldId::Width => self.prism.width = parse_dimension(input)?,
            FieldId::HeightSubdivisions => self.subdivisions.height = parse_count(input)?,
            FieldId::LengthSubdivisions => self.subdivisions.length = parse_count(input)?,
            FieldId::WidthSubdivisions => self.subdivisions.width = parse_count(input)?,
        }

        Ok(())
    }

    /// Whether every dimension is positive and every count is in range
    pub fn is_valid(&self) -> bool {
        let dims = [self.prism.height, self.prism.length, self.prism.width];
        dims.iter().all(|d| d.is_finite() && *d > 0.0) && self.subdivisions.is_valid()
    }
}

fn format_dimension(value: f32) -> String {
    format!("{value}")
}

fn parse_dimension(input: &str) -> Result<f32, EditError> {
    let value: f32 = input
        .parse()
        .map_err(|_| EditError::InvalidNumber(input.to_string()))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(EditError::OutOfRange {
            value: input.to_string(),
            expected: "a finite value greater than 0".to_string(),
        });
    }

    Ok(value)
}

fn parse_count(input: &str) -> Result<u32, EditError> {
    // Parse as i64 so "-3" reports a range error instead of a parse error.
    let value: i64 = input
        .parse()
        .map_err(|_| EditError::InvalidNumber(input.to_string()))?;

    u32::try_from(value)
        .ok()
        .filter(|v| (1..=MAX_SUBDIVISIONS).contains(v))
        .ok_or_else(|| EditError::OutOfRange {
            value: input.to_string(),
            expected: format!("an integer from 1 to {MAX_SUBDIVISIONS}"),
        })
}
