//! Built-in sub-renderers.
//!
//! - [`faces::FaceRenderer`]: filled prism faces with highlight colors
//! - [`wireframe::WireframeRenderer`]: subdivision lattice lines

pub mod faces;
pub mod wireframe;

pub use faces::{FaceColors, FaceRenderer};
pub use wireframe::WireframeRenderer;
