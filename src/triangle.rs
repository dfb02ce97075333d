use crate::colors::Color;
use crate::math::{Mat4, Vec3};

/// Three corners plus the flat colors decided for them.
///
/// The colors are computed once in world space and then carried unchanged
/// through every later transform and clip: whatever produces a new triangle
/// from this one copies `fill` and `wire` onto it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Vec3; 3],
    pub fill: Color,
    pub wire: Color,
}

impl Triangle {
    pub fn new(points: [Vec3; 3]) -> Self {
        Self {
            points,
            fill: Color::WHITE,
            wire: Color::BLACK,
        }
    }

    pub fn with_colors(points: [Vec3; 3], fill: Color, wire: Color) -> Self {
        Self { points, fill, wire }
    }

    /// Returns a triangle with new corners and this triangle's colors.
    pub fn with_points(&self, points: [Vec3; 3]) -> Self {
        Self { points, ..*self }
    }

    /// Transforms every corner by `matrix`, keeping the colors.
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        self.with_points(self.points.map(|p| matrix.transform(p)))
    }

    /// Divides every corner by its own `w`.
    pub fn perspective_divided(&self) -> Self {
        self.with_points(self.points.map(|p| p.perspective_divide()))
    }

    /// Unit face normal from the winding `p0 -> p1 -> p2`.
    ///
    /// Degenerate triangles yield NaN.
    pub fn normal(&self) -> Vec3 {
        let [p0, p1, p2] = self.points;
        (p1 - p0).cross(p2 - p0).normalize()
    }

    pub fn centroid(&self) -> Vec3 {
        let [p0, p1, p2] = self.points;
        Vec3::new(
            (p0.x + p1.x + p2.x) / 3.0,
            (p0.y + p1.y + p2.y) / 3.0,
            (p0.z + p1.z + p2.z) / 3.0,
        )
    }

    /// Mean `z` of the corners. After projection this is the normalized depth
    /// used for back-to-front ordering.
    pub fn mean_depth(&self) -> f32 {
        let [p0, p1, p2] = self.points;
        (p0.z + p1.z + p2.z) / 3.0
    }

    /// Unsigned area.
    pub fn area(&self) -> f32 {
        let [p0, p1, p2] = self.points;
        0.5 * (p1 - p0).cross(p2 - p0).magnitude()
    }
}
