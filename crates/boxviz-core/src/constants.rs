//! Global constants for boxviz-core

/// Determinant below which a ray is treated as parallel to a triangle
pub const PARALLEL_EPSILON: f32 = 1e-8;

/// Upper bound for a single axis subdivision count
pub const MAX_SUBDIVISIONS: u32 = 200;

/// Default prism height (y axis)
pub const DEFAULT_HEIGHT: f32 = 5.0;

/// Default prism length (x axis)
pub const DEFAULT_LENGTH: f32 = 1.0;

/// Default prism width (z axis)
pub const DEFAULT_WIDTH: f32 = 10.0;

/// Default subdivision count per axis
pub const DEFAULT_SUBDIVISIONS: u32 = 10;
