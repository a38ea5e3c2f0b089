//! boxviz renderer
//!
//! WGPU-based rendering of the prism view: filled faces colored by the
//! picking result and a black subdivision wireframe on top.
//!
//! # Module Structure
//!
//! ```text
//! boxviz-renderer/
//! ├── camera.rs         # Orbit camera and uniform data
//! ├── config.rs         # Serializable renderer settings
//! ├── constants.rs      # Rendering constants
//! ├── pipeline.rs       # Pipeline builder utilities
//! ├── vertex.rs         # Vertex formats
//! ├── sub_renderers/    # Face and wireframe renderers
//! └── renderer/         # Main Renderer, camera controller, passes
//! ```

pub mod camera;
pub mod config;
pub mod constants;
pub mod pipeline;
pub mod renderer;
pub mod sub_renderers;
pub mod vertex;

pub use camera::{Camera, CameraUniform};
pub use config::{CameraConfig, MeshConfig, RendererConfig, ViewportConfig};
pub use renderer::{CameraController, Renderer};
pub use sub_renderers::{FaceRenderer, WireframeRenderer};
pub use vertex::PositionColorVertex;
