//! Errors raised while editing the scene

/// Field edit errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditError {
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),
    #[error("{value} is out of range ({expected})")]
    OutOfRange { value: String, expected: String },
    #[error("No field selected")]
    NoSelection,
}
