//! The per-frame geometry pipeline.
//!
//! ```text
//! local ─world─▶ world ─cull, shade─▶ world ─view─▶ camera ─near clip─▶ camera
//!       ─project, divide─▶ normalized ─viewport─▶ screen ─screen clip─▶ screen ─sort─▶ out
//! ```
//!
//! Every stage works on whole [`Triangle`]s. Colors are decided once, in
//! world space, and then ride along through every later transform and clip.

use crate::camera::CoordinateSystem;
use crate::clipping::{clip_triangle, near_plane, ScreenClipper};
use crate::light::DayCycle;
use crate::math::{mat4::Mat4, plane::Plane};
use crate::mesh::Mesh;
use crate::projection::{Projection, Viewport};
use crate::shading::TerrainPalette;
use crate::triangle::Triangle;

/// Matrices and clip planes that only change on resize.
#[derive(Debug, Clone)]
pub struct Pipeline {
    projection: Projection,
    viewport: Viewport,
    projection_matrix: Mat4,
    screen_matrix: Mat4,
    near_plane: Plane,
    screen_clipper: ScreenClipper,
    palette: TerrainPalette,
}

impl Pipeline {
    pub fn new(projection: Projection, viewport: Viewport, palette: TerrainPalette) -> Self {
        Self {
            projection_matrix: projection.matrix(),
            screen_matrix: viewport.matrix(),
            near_plane: near_plane(projection.near()),
            screen_clipper: ScreenClipper::new(viewport.width as f32, viewport.height as f32),
            projection,
            viewport,
            palette,
        }
    }

    /// Rebuilds everything that depends on the output size.
    pub fn resize(&mut self, viewport: Viewport) {
        self.projection.set_aspect_ratio(viewport.aspect_ratio());
        *self = Self::new(self.projection, viewport, self.palette);
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn palette(&self) -> &TerrainPalette {
        &self.palette
    }

    /// Runs one frame: returns the visible screen-space triangles ordered
    /// back to front.
    pub fn process(
        &self,
        mesh: &Mesh,
        world: &Mat4,
        camera: &CoordinateSystem,
        light: &DayCycle,
    ) -> Vec<Triangle> {
        let view = camera.world_to_camera();
        let mut out = Vec::with_capacity(mesh.len());

        for local in mesh.triangles() {
            let Some(shaded) = self.shade(local.transformed(world), camera, light) else {
                continue;
            };

            let in_camera = shaded.transformed(&view);
            if !self.within_depth_range(&in_camera) {
                continue;
            }

            for clipped in clip_triangle(&self.near_plane, &in_camera) {
                let screen = self.to_screen(&clipped);
                self.screen_clipper.clip_into(screen, &mut out);
            }
        }

        sort_back_to_front(&mut out);
        out
    }

    /// Back-face culls a world-space triangle and assigns its colors.
    ///
    /// Returns `None` when the face points away from the camera. A face seen
    /// exactly edge-on is culled too.
    pub fn shade(
        &self,
        world: Triangle,
        camera: &CoordinateSystem,
        light: &DayCycle,
    ) -> Option<Triangle> {
        let normal = world.normal();
        let facing = normal.dot(camera.o - world.points[0]) > 0.0;
        if !facing {
            return None;
        }

        let (fill, wire) = self.palette.shade(world.centroid(), normal, light);
        Some(Triangle { fill, wire, ..world })
    }

    /// Coarse depth rejection in camera space: keeps triangles with at least
    /// one corner nearer than the far plane and one beyond the near plane.
    pub fn within_depth_range(&self, triangle: &Triangle) -> bool {
        let near = self.projection.near();
        let far = self.projection.far();
        triangle.points.iter().any(|p| p.x < far) && triangle.points.iter().any(|p| p.x > near)
    }

    /// Camera space to screen pixels, including the perspective divide.
    pub fn to_screen(&self, triangle: &Triangle) -> Triangle {
        triangle
            .transformed(&self.projection_matrix)
            .perspective_divided()
            .transformed(&self.screen_matrix)
    }
}

/// Painter's order: largest mean depth first.
pub fn sort_back_to_front(triangles: &mut [Triangle]) {
    triangles.sort_by(|a, b| b.mean_depth().total_cmp(&a.mean_depth()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::Color;
    use crate::math::vec3::Vec3;
    use approx::assert_relative_eq;

    fn pipeline() -> Pipeline {
        let viewport = Viewport::new(640, 480);
        Pipeline::new(
            Projection::new(60.0, viewport.aspect_ratio(), 0.1, 1000.0),
            viewport,
            TerrainPalette::default(),
        )
    }

    fn camera() -> CoordinateSystem {
        CoordinateSystem::look_at(Vec3::ZERO, Vec3::X, Vec3::Z)
    }

    /// A triangle facing the origin from `distance` units down +X.
    fn facing_triangle(distance: f32) -> Triangle {
        Triangle::new([
            Vec3::new(distance, 1.0, -1.0),
            Vec3::new(distance, -1.0, -1.0),
            Vec3::new(distance, 0.0, 1.0),
        ])
    }

    #[test]
    fn shade_culls_back_faces() {
        let front = facing_triangle(5.0);
        let back = Triangle::new([front.points[1], front.points[0], front.points[2]]);

        let p = pipeline();
        assert!(p.shade(front, &camera(), &DayCycle::default()).is_some());
        assert!(p.shade(back, &camera(), &DayCycle::default()).is_none());
    }

    #[test]
    fn shade_culls_edge_on_faces() {
        let edge_on = Triangle::new([
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 1.0),
        ]);
        assert!(pipeline()
            .shade(edge_on, &camera(), &DayCycle::default())
            .is_none());
    }

    #[test]
    fn shade_colors_by_height_and_light() {
        // Facing -X, edge-on to a light travelling straight down.
        let shaded = pipeline()
            .shade(facing_triangle(5.0), &camera(), &DayCycle::default())
            .unwrap();
        // Centroid height is -1/3: mountain band, half intensity.
        assert_eq!(shaded.fill, Color::rgb(63, 65, 67));
        assert_eq!(shaded.wire, Color::BLACK);
    }

    #[test]
    fn depth_range_rejects_beyond_far_and_behind_near() {
        let p = pipeline();
        assert!(p.within_depth_range(&facing_triangle(5.0)));
        assert!(!p.within_depth_range(&facing_triangle(2000.0)));
        assert!(!p.within_depth_range(&facing_triangle(-3.0)));
        assert!(!p.within_depth_range(&facing_triangle(0.1)));
    }

    #[test]
    fn sort_orders_by_descending_mean_depth() {
        let at = |z: f32| Triangle::new([Vec3::new(0.0, 0.0, z); 3]);
        let mut triangles = vec![at(0.2), at(0.9), at(0.5)];
        sort_back_to_front(&mut triangles);
        let depths: Vec<f32> = triangles.iter().map(Triangle::mean_depth).collect();
        assert!(depths[0] > depths[1] && depths[1] > depths[2], "{depths:?}");
        assert_relative_eq!(depths[0], 0.9, epsilon = 1e-6);
    }

    #[test]
    fn sort_tolerates_nan_depths() {
        let at = |z: f32| Triangle::new([Vec3::new(0.0, 0.0, z); 3]);
        let mut triangles = vec![at(0.2), at(f32::NAN), at(0.5)];
        sort_back_to_front(&mut triangles);
        assert_eq!(triangles.len(), 3);
    }

    #[test]
    fn resize_rebuilds_screen_clip() {
        let mut p = pipeline();
        p.resize(Viewport::new(100, 50));
        assert_eq!(p.viewport(), Viewport::new(100, 50));
        assert_eq!(p.projection().aspect_ratio(), 2.0);

        let frame = p.process(
            &Mesh::new(vec![facing_triangle(5.0)]),
            &Mat4::identity(),
            &camera(),
            &DayCycle::default(),
        );
        assert!(!frame.is_empty());
        for t in &frame {
            for v in &t.points {
                assert!(v.x >= -1e-3 && v.x <= 100.0 + 1e-3);
                assert!(v.y >= -1e-3 && v.y <= 50.0 + 1e-3);
            }
        }
    }
}
