//! Subdivision counts and the wireframe lattice they produce

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SUBDIVISIONS, MAX_SUBDIVISIONS};
use crate::prism::{Axis, Prism};

/// Number of cells along each prism axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subdivisions {
    pub height: u32,
    pub length: u32,
    pub width: u32,
}

impl Default for Subdivisions {
    fn default() -> Self {
        Self::uniform(DEFAULT_SUBDIVISIONS)
    }
}

impl Subdivisions {
    pub fn new(height: u32, length: u32, width: u32) -> Self {
        Self {
            height,
            length,
            width,
        }
    }

    /// Same count on every axis
    pub fn uniform(count: u32) -> Self {
        Self::new(count, count, count)
    }

    /// Count along an axis
    pub fn count(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Length => self.length,
            Axis::Height => self.height,
            Axis::Width => self.width,
        }
    }

    /// Whether every count is within `1..=MAX_SUBDIVISIONS`
    pub fn is_valid(&self) -> bool {
        Axis::ALL
            .iter()
            .all(|&axis| (1..=MAX_SUBDIVISIONS).contains(&self.count(axis)))
    }
}

/// A wireframe line segment in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Vec3,
    pub end: Vec3,
}

/// Cell boundaries along a centered extent: `count + 1` values from
/// `-extent/2` to `+extent/2`. A count of zero is treated as one.
pub fn boundaries(extent: f32, count: u32) -> Vec<f32> {
    let count = count.max(1);
    let half = extent / 2.0;
    let step = extent / count as f32;

    let mut values: Vec<f32> = (0..count).map(|i| -half + i as f32 * step).collect();
    values.push(half);
    values
}

/// Full cell-boundary lattice of `prism`.
///
/// For each axis, one segment spans the prism along that axis for every
/// pair of boundaries on the two other axes. Counts of `(1, 1, 1)` produce
/// the twelve box edges.
pub fn grid_lines(prism: &Prism, subdivisions: &Subdivisions) -> Vec<LineSegment> {
    let mut lines = Vec::new();

    for axis in Axis::ALL {
        let half = prism.dimension(axis) / 2.0;
        let [b, c] = axis.others();
        let b_values = boundaries(prism.dimension(b), subdivisions.count(b));
        let c_values = boundaries(prism.dimension(c), subdivisions.count(c));

        for &bv in &b_values {
            for &cv in &c_values {
                let base = b.unit() * bv + c.unit() * cv;
                lines.push(LineSegment {
                    start: base - axis.unit() * half,
                    end: base + axis.unit() * half,
                });
            }
        }
    }

    lines
}
