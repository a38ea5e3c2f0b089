//! Face picking
//!
//! Casts a [`Ray`] against the six quads of a [`Prism`] and decides which
//! face sits under the cursor. Each quad is split into two triangles and
//! tested with the Möller–Trumbore algorithm. Faces turned away from the
//! ray are culled before any triangle test runs.

use glam::Vec3;

use crate::constants::PARALLEL_EPSILON;
use crate::prism::{Face, Prism};
use crate::ray::Ray;

/// Barycentric coordinates and ray parameter of a triangle hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    pub u: f32,
    pub v: f32,
    pub distance: f32,
}

/// Ray-triangle intersection test.
///
/// # Algorithm
///
/// Möller–Trumbore solves `o + t·d = v0 + u·e1 + v·e2` directly for the
/// barycentric coordinates `(u, v)` and the ray parameter `t`:
///
/// ```text
/// e1 = v1 - v0        e2 = v2 - v0
/// p  = d × e2         det = e1 · p
/// s  = o - v0         u = (s · p) / det
/// q  = s × e1         v = (d · q) / det
///                     t = (e2 · q) / det
/// ```
///
/// The ray is treated as parallel to the triangle plane when
/// `|det| < PARALLEL_EPSILON`. Points outside the triangle are rejected when
/// `u ∉ [0, 1]`, `v < 0` or `u + v > 1`.
///
/// # Returns
///
/// * `Some(hit)` - The hit with its ray parameter. The parameter is measured
///   in units of `ray.direction`, so it may be negative when the triangle is
///   behind the origin.
/// * `None` - If the ray misses the triangle or runs parallel to it.
pub fn intersect_triangle(ray: &Ray, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<TriangleHit> {
    let e1 = v1 - v0;
    let e2 = v2 - v0;
    let p = ray.direction.cross(e2);
    let det = e1.dot(p);

    if det.abs() < PARALLEL_EPSILON {
        return None;
    }

    let s = ray.origin - v0;
    let u = s.dot(p) / det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(e1);
    let v = ray.direction.dot(q) / det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    Some(TriangleHit {
        u,
        v,
        distance: e2.dot(q) / det,
    })
}

/// Test a quad given by its four corners in winding order.
///
/// The quad is skipped when its normal does not point against the ray.
/// Otherwise triangles `(0, 1, 2)` and `(2, 3, 0)` are tested and the
/// nearer hit distance is returned.
pub fn intersect_face(ray: &Ray, corners: [Vec3; 4]) -> Option<f32> {
    let [c0, c1, c2, c3] = corners;
    let normal = (c1 - c0).cross(c2 - c0);
    if normal.dot(ray.direction) >= 0.0 {
        return None;
    }

    let first = intersect_triangle(ray, c0, c1, c2).map(|hit| hit.distance);
    let second = intersect_triangle(ray, c2, c3, c0).map(|hit| hit.distance);

    match (first, second) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// Result of picking one ray against a prism
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FaceSelection {
    candidates: [Option<f32>; 6],
    highlighted: Option<Face>,
    hit_point: Option<Vec3>,
}

impl FaceSelection {
    /// Selection with nothing hit
    pub fn none() -> Self {
        Self::default()
    }

    /// The face under the cursor, if any
    pub fn highlighted(&self) -> Option<Face> {
        self.highlighted
    }

    pub fn is_highlighted(&self, face: Face) -> bool {
        self.highlighted == Some(face)
    }

    /// Raw hit distance of every front-facing face the ray crossed, indexed
    /// by [`Face::index`]
    pub fn candidates(&self) -> &[Option<f32>; 6] {
        &self.candidates
    }

    /// Per-face highlight flags in [`Face::ALL`] order
    pub fn flags(&self) -> [bool; 6] {
        Face::ALL.map(|face| self.is_highlighted(face))
    }

    /// World-space point where the ray meets the highlighted face
    pub fn hit_point(&self) -> Option<Vec3> {
        self.hit_point
    }
}

/// Pick the face of `prism` under `ray`.
///
/// Every face is tested. The highlighted face is the candidate with the
/// smallest positive distance, so at most one face is ever highlighted.
pub fn select_faces(ray: &Ray, prism: &Prism) -> FaceSelection {
    let mut selection = FaceSelection::none();
    let mut nearest: Option<(Face, f32)> = None;

    for face in Face::ALL {
        let Some(distance) = intersect_face(ray, prism.face_corners(face)) else {
            continue;
        };
        selection.candidates[face.index()] = Some(distance);

        if distance > 0.0 && nearest.is_none_or(|(_, best)| distance < best) {
            nearest = Some((face, distance));
        }
    }

    if let Some((face, distance)) = nearest {
        selection.highlighted = Some(face);
        selection.hit_point = Some(ray.at(distance));
    }

    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ray::Viewport;
    use approx::assert_relative_eq;
    use glam::{Mat4, Vec2};

    fn reference_prism() -> Prism {
        Prism::new(5.0, 1.0, 10.0)
    }

    #[test]
    fn test_ray_along_width_highlights_near_face() {
        let prism = reference_prism();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -100.0), Vec3::Z);

        let selection = select_faces(&ray, &prism);

        assert_eq!(selection.highlighted(), Some(Face::WidthMin));
        assert_eq!(selection.flags(), [true, false, false, false, false, false]);
        assert_eq!(selection.candidates()[Face::WidthMin.index()], Some(95.0));
        assert_eq!(selection.candidates()[Face::WidthMax.index()], None);
        assert_eq!(selection.hit_point(), Some(Vec3::new(0.0, 0.0, -5.0)));
    }

    #[test]
    fn test_triangle_hit_coordinates() {
        let prism = reference_prism();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -100.0), Vec3::Z);
        let [c0, c1, c2, _] = prism.face_corners(Face::WidthMin);

        let hit = intersect_triangle(&ray, c0, c1, c2).unwrap();
        assert_eq!(hit.u, 0.0);
        assert_eq!(hit.v, 0.5);
        assert_eq!(hit.distance, 95.0);
    }

    #[test]
    fn test_axis_rays_only_hit_near_face() {
        let prism = Prism::new(2.0, 4.0, 8.0);
        for face in Face::ALL {
            let outward = face.axis().unit() * face.sign();
            let origin = prism.face_center(face) + outward * 50.0;
            // Nudge off the quad diagonal.
            let offset = face.axis().others()[0].unit() * 0.25;
            let ray = Ray::new(origin + offset, -outward);

            let selection = select_faces(&ray, &prism);
            assert_eq!(selection.highlighted(), Some(face), "{face:?}");
            assert!(!selection.is_highlighted(face.opposite()));
            for other in Face::ALL {
                if other != face {
                    assert_eq!(selection.candidates()[other.index()], None, "{other:?}");
                }
            }
        }
    }

    #[test]
    fn test_face_center_hits() {
        let prism = Prism::new(2.0, 4.0, 8.0);
        for face in Face::ALL {
            let outward = face.axis().unit() * face.sign();
            let center = prism.face_center(face);
            let ray = Ray::new(center + outward * 20.0, -outward);

            let distance = intersect_face(&ray, prism.face_corners(face));
            assert_eq!(distance, Some(20.0), "{face:?}");
        }
    }

    #[test]
    fn test_ray_outside_bounds_misses() {
        let prism = reference_prism();
        let ray = Ray::new(Vec3::new(3.0, 0.0, -100.0), Vec3::Z);
        let selection = select_faces(&ray, &prism);

        assert_eq!(selection.highlighted(), None);
        assert_eq!(selection.hit_point(), None);
        assert!(selection.candidates().iter().all(Option::is_none));

        let above = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::X);
        assert_eq!(select_faces(&above, &prism).highlighted(), None);
    }

    #[test]
    fn test_back_faces_are_culled() {
        let prism = reference_prism();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 100.0), Vec3::Z);
        let corners = prism.face_corners(Face::WidthMax);
        assert_eq!(intersect_face(&ray, corners), None);
    }

    #[test]
    fn test_parallel_ray_misses_triangle() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::X);
        let hit = intersect_triangle(&ray, Vec3::ZERO, Vec3::X, Vec3::Y);
        assert!(hit.is_none());
    }

    #[test]
    fn test_hit_point_is_scale_invariant() {
        let v0 = Vec3::new(-1.0, -1.0, 0.0);
        let v1 = Vec3::new(1.0, -1.0, 0.0);
        let v2 = Vec3::new(0.0, 1.0, 0.0);
        let origin = Vec3::new(0.1, 0.2, 5.0);
        let direction = Vec3::new(0.05, -0.1, -1.0);

        let unit = Ray {
            origin,
            direction,
        };
        let scaled = Ray {
            origin,
            direction: direction * 3.5,
        };

        let a = intersect_triangle(&unit, v0, v1, v2).unwrap();
        let b = intersect_triangle(&scaled, v0, v1, v2).unwrap();

        assert_relative_eq!(a.u, b.u, epsilon = 1e-5);
        assert_relative_eq!(a.v, b.v, epsilon = 1e-5);
        let pa = unit.origin + unit.direction * a.distance;
        let pb = scaled.origin + scaled.direction * b.distance;
        assert_relative_eq!(pa.x, pb.x, epsilon = 1e-5);
        assert_relative_eq!(pa.y, pb.y, epsilon = 1e-5);
        assert_relative_eq!(pa.z, pb.z, epsilon = 1e-5);
    }

    #[test]
    fn test_origin_past_face_is_not_highlighted() {
        let prism = reference_prism();
        // Starts inside the prism, so the WidthMin plane is behind it and
        // every other face is culled or behind as well.
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::Z);
        let selection = select_faces(&ray, &prism);

        assert_eq!(selection.candidates()[Face::WidthMin.index()], Some(-5.0));
        assert_eq!(selection.highlighted(), None);
    }

    #[test]
    fn test_screen_ray_picks_face_toward_camera() {
        let prism = reference_prism();
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -50.0));
        let proj = Mat4::perspective_rh(45.0_f32.to_radians(), 1.5, 0.1, 1000.0);
        let viewport = Viewport::from_size(1200.0, 800.0);

        let ray = Ray::from_screen(Vec2::new(605.0, 390.0), viewport, view, proj);
        let selection = select_faces(&ray, &prism);
        assert_eq!(selection.highlighted(), Some(Face::WidthMax));

        let hit = selection.hit_point().unwrap();
        assert_relative_eq!(hit.z, 5.0, epsilon = 1e-3);
    }
}
