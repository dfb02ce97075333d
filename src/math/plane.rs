//! Infinite planes in point + normal form.

use super::vec3::Vec3;

/// A plane defined by a point on the plane and its normal vector.
/// The normal points toward the "inside" (kept) half-space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl Plane {
    /// Creates a plane, normalizing `normal`.
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self {
            point,
            normal: normal.normalize(),
        }
    }

    /// Returns the signed distance from a point to this plane.
    /// Positive = inside (same side as normal), Negative = outside.
    pub fn signed_distance(&self, position: Vec3) -> f32 {
        self.normal.dot(position) - self.normal.dot(self.point)
    }

    /// Returns the point where the line through `start` and `end` crosses the
    /// plane.
    ///
    /// The result is only meaningful when the segment is not parallel to the
    /// plane; a parallel segment divides by zero.
    pub fn intersect_line(&self, start: Vec3, end: Vec3) -> Vec3 {
        let normal = self.normal.normalize();
        let plane_d = -normal.dot(self.point);
        let ad = start.dot(normal);
        let bd = end.dot(normal);
        let t = (-plane_d - ad) / (bd - ad);
        start + (end - start) * t
    }
}
