//! Rectangular prism geometry
//!
//! Coordinate convention: x = length, y = height, z = width. The prism is
//! centered on the origin, so every vertex lies in `[-dim/2, +dim/2]` on
//! each axis.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HEIGHT, DEFAULT_LENGTH, DEFAULT_WIDTH};

/// One of the three prism axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// x axis
    Length,
    /// y axis
    Height,
    /// z axis
    Width,
}

impl Axis {
    /// All axes in x, y, z order
    pub const ALL: [Axis; 3] = [Axis::Length, Axis::Height, Axis::Width];

    /// Component index in a `Vec3`
    pub fn index(self) -> usize {
        match self {
            Axis::Length => 0,
            Axis::Height => 1,
            Axis::Width => 2,
        }
    }

    /// Unit vector along this axis
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::Length => Vec3::X,
            Axis::Height => Vec3::Y,
            Axis::Width => Vec3::Z,
        }
    }

    /// The other two axes, in ascending index order
    pub fn others(self) -> [Axis; 2] {
        match self {
            Axis::Length => [Axis::Height, Axis::Width],
            Axis::Height => [Axis::Length, Axis::Width],
            Axis::Width => [Axis::Length, Axis::Height],
        }
    }
}

/// Face of the prism, named by the axis it is perpendicular to and the side
/// of the origin it sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    WidthMin,
    LengthMax,
    LengthMin,
    WidthMax,
    HeightMin,
    HeightMax,
}

/// Vertex indices per face, in [`Face::ALL`] order.
///
/// Every quad winds counter-clockwise when seen from outside the prism, so
/// `cross(v1 - v0, v2 - v0)` points outward for all six faces.
const FACE_INDICES: [[usize; 4]; 6] = [
    [0, 3, 2, 1],
    [1, 2, 6, 5],
    [4, 7, 3, 0],
    [5, 6, 7, 4],
    [4, 0, 1, 5],
    [3, 7, 6, 2],
];

impl Face {
    /// All faces in index order
    pub const ALL: [Face; 6] = [
        Face::WidthMin,
        Face::LengthMax,
        Face::LengthMin,
        Face::WidthMax,
        Face::HeightMin,
        Face::HeightMax,
    ];

    /// Position of this face in [`Face::ALL`]
    pub fn index(self) -> usize {
        match self {
            Face::WidthMin => 0,
            Face::LengthMax => 1,
            Face::LengthMin => 2,
            Face::WidthMax => 3,
            Face::HeightMin => 4,
            Face::HeightMax => 5,
        }
    }

    /// Ordered vertex indices of this face
    pub fn indices(self) -> [usize; 4] {
        FACE_INDICES[self.index()]
    }

    /// Axis the face is perpendicular to
    pub fn axis(self) -> Axis {
        match self {
            Face::LengthMin | Face::LengthMax => Axis::Length,
            Face::HeightMin | Face::HeightMax => Axis::Height,
            Face::WidthMin | Face::WidthMax => Axis::Width,
        }
    }

    /// Sign of the outward direction along [`Face::axis`]
    pub fn sign(self) -> f32 {
        match self {
            Face::LengthMax | Face::HeightMax | Face::WidthMax => 1.0,
            Face::LengthMin | Face::HeightMin | Face::WidthMin => -1.0,
        }
    }

    /// The face on the other side of the prism
    pub fn opposite(self) -> Face {
        match self {
            Face::WidthMin => Face::WidthMax,
            Face::WidthMax => Face::WidthMin,
            Face::LengthMin => Face::LengthMax,
            Face::LengthMax => Face::LengthMin,
            Face::HeightMin => Face::HeightMax,
            Face::HeightMax => Face::HeightMin,
        }
    }
}

/// Axis-aligned rectangular solid centered on the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prism {
    pub height: f32,
    pub length: f32,
    pub width: f32,
}

impl Default for Prism {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT, DEFAULT_LENGTH, DEFAULT_WIDTH)
    }
}

impl Prism {
    /// Create a prism from its height, length and width
    pub fn new(height: f32, length: f32, width: f32) -> Self {
        Self {
            height,
            length,
            width,
        }
    }

    /// Full extents as (length, height, width) = (x, y, z)
    pub fn extents(&self) -> Vec3 {
        Vec3::new(self.length, self.height, self.width)
    }

    /// Dimension along an axis
    pub fn dimension(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Length => self.length,
            Axis::Height => self.height,
            Axis::Width => self.width,
        }
    }

    /// Largest of the three dimensions
    pub fn max_dimension(&self) -> f32 {
        self.height.max(self.length).max(self.width)
    }

    /// The eight corners.
    ///
    /// Indices 0..4 lie on the `-width/2` plane and 4..8 on `+width/2`, each
    /// ring going (-x,-y), (+x,-y), (+x,+y), (-x,+y).
    pub fn vertices(&self) -> [Vec3; 8] {
        let hx = self.length / 2.0;
        let hy = self.height / 2.0;
        let hz = self.width / 2.0;

        [
            Vec3::new(-hx, -hy, -hz),
            Vec3::new(hx, -hy, -hz),
            Vec3::new(hx, hy, -hz),
            Vec3::new(-hx, hy, -hz),
            Vec3::new(-hx, -hy, hz),
            Vec3::new(hx, -hy, hz),
            Vec3::new(hx, hy, hz),
            Vec3::new(-hx, hy, hz),
        ]
    }

    /// Corner positions of one face in winding order
    pub fn face_corners(&self, face: Face) -> [Vec3; 4] {
        let vertices = self.vertices();
        face.indices().map(|i| vertices[i])
    }

    /// Outward face normal (not normalized), from the first three corners
    pub fn face_normal(&self, face: Face) -> Vec3 {
        let [v0, v1, v2, _] = self.face_corners(face);
        (v1 - v0).cross(v2 - v0)
    }

    /// Center point of a face
    pub fn face_center(&self, face: Face) -> Vec3 {
        let corners = self.face_corners(face);
        corners.iter().copied().sum::<Vec3>() / 4.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vertex_and_face_counts() {
        let prism = Prism::new(5.0, 1.0, 10.0);
        assert_eq!(prism.vertices().len(), 8);
        assert_eq!(Face::ALL.len(), 6);
        for (i, face) in Face::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
        }
    }

    #[test]
    fn test_dimensions_round_trip() {
        let prism = Prism::new(5.0, 1.0, 10.0);
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        for v in prism.vertices() {
            min = min.min(v);
            max = max.max(v);
        }
        let size = max - min;
        assert_eq!(size.x, prism.length);
        assert_eq!(size.y, prism.height);
        assert_eq!(size.z, prism.width);
    }

    #[test]
    fn test_normals_point_outward() {
        let prism = Prism::new(2.0, 3.0, 7.0);
        for face in Face::ALL {
            let normal = prism.face_normal(face).normalize();
            let expected = face.axis().unit() * face.sign();
            assert_relative_eq!(normal.x, expected.x, epsilon = 1e-6);
            assert_relative_eq!(normal.y, expected.y, epsilon = 1e-6);
            assert_relative_eq!(normal.z, expected.z, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_faces_are_planar() {
        let prism = Prism::new(2.0, 3.0, 7.0);
        for face in Face::ALL {
            let axis = face.axis().index();
            let plane = face.sign() * prism.extents()[axis] / 2.0;
            for corner in prism.face_corners(face) {
                assert_eq!(corner[axis], plane, "{face:?} corner off its plane");
            }
        }
    }

    #[test]
    fn test_each_face_uses_four_distinct_vertices() {
        for face in Face::ALL {
            let mut indices = face.indices();
            indices.sort_unstable();
            assert!(indices.windows(2).all(|w| w[0] != w[1]));
            assert_eq!(face.opposite().opposite(), face);
        }
    }

    #[test]
    fn test_face_center() {
        let prism = Prism::new(4.0, 2.0, 6.0);
        let center = prism.face_center(Face::WidthMin);
        assert_eq!(center, Vec3::new(0.0, 0.0, -3.0));
        assert_eq!(prism.max_dimension(), 6.0);
    }
}
