//! boxviz core
//!
//! Geometry and picking logic for the box visualizer. Nothing in this crate
//! touches the GPU or the windowing layer, so everything here is plain data
//! and pure functions.
//!
//! # Module Structure
//!
//! ```text
//! boxviz-core/
//! ├── prism.rs         # Prism dimensions, vertices, faces
//! ├── subdivision.rs   # Per-axis subdivision counts and wireframe lattice
//! ├── ray.rs           # Viewport, unprojection, screen-to-world rays
//! ├── picking.rs       # Ray/triangle test and face selection
//! ├── scene.rs         # Prism + subdivisions edited at runtime
//! ├── fields.rs        # Editable numeric text fields
//! └── error.rs         # Edit validation errors
//! ```

pub mod constants;
pub mod error;
pub mod fields;
pub mod picking;
pub mod prism;
pub mod ray;
pub mod scene;
pub mod subdivision;

pub use error::EditError;
pub use fields::{FieldEditor, FieldId};
pub use picking::{FaceSelection, TriangleHit, intersect_face, intersect_triangle, select_faces};
pub use prism::{Axis, Face, Prism};
pub use ray::{Ray, Viewport, unproject};
pub use scene::Scene;
pub use subdivision::{LineSegment, Subdivisions, grid_lines};
