//! Triangle clipping against planes.
//!
//! [`clip_triangle`] splits one triangle against one plane into zero, one or
//! two triangles. The pipeline runs it twice:
//!
//! - once in camera space against the near plane (see [`near_plane`]), before
//!   the perspective divide bends depth out of linear proportion;
//! - once in screen space against the five planes of the viewport volume,
//!   through the FIFO worklist in [`ScreenClipper`].
//!
//! A corner whose signed distance is `>= 0` is inside. There is no tolerance
//! band, so geometry lying exactly on a plane is kept.

use std::collections::VecDeque;

use crate::math::{Plane, Vec3};
use crate::triangle::Triangle;

/// Outcome of clipping one triangle against one plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Clipped {
    /// Every corner was outside.
    Culled,
    /// Every corner was inside; holds a copy of the input.
    Whole(Triangle),
    /// One corner was inside; the remainder is a smaller triangle.
    Trimmed(Triangle),
    /// Two corners were inside; the remaining quad is emitted as two
    /// triangles sharing a diagonal.
    Split(Triangle, Triangle),
}

impl Clipped {
    /// Number of triangles produced (0, 1 or 2).
    pub fn len(&self) -> usize {
        match self {
            Clipped::Culled => 0,
            Clipped::Whole(_) | Clipped::Trimmed(_) => 1,
            Clipped::Split(..) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Clipped::Culled)
    }
}

impl IntoIterator for Clipped {
    type Item = Triangle;
    type IntoIter = std::iter::Flatten<std::array::IntoIter<Option<Triangle>, 2>>;

    fn into_iter(self) -> Self::IntoIter {
        let pair = match self {
            Clipped::Culled => [None, None],
            Clipped::Whole(t) | Clipped::Trimmed(t) => [Some(t), None],
            Clipped::Split(a, b) => [Some(a), Some(b)],
        };
        pair.into_iter().flatten()
    }
}

/// Clips `triangle` against `plane`, keeping the part on the normal's side.
///
/// New corners are placed where the triangle's edges cross the plane. The
/// fill and wire colors are copied verbatim onto every output.
pub fn clip_triangle(plane: &Plane, triangle: &Triangle) -> Clipped {
    let plane = Plane::new(plane.point, plane.normal);

    let mut inside = [Vec3::ZERO; 3];
    let mut outside = [Vec3::ZERO; 3];
    let mut inside_count = 0;
    let mut outside_count = 0;

    for &point in &triangle.points {
        if plane.signed_distance(point) >= 0.0 {
            inside[inside_count] = point;
            inside_count += 1;
        } else {
            outside[outside_count] = point;
            outside_count += 1;
        }
    }

    match inside_count {
        0 => Clipped::Culled,
        1 => {
            let kept = inside[0];
            Clipped::Trimmed(triangle.with_points([
                kept,
                plane.intersect_line(kept, outside[0]),
                plane.intersect_line(kept, outside[1]),
            ]))
        }
        2 => {
            let shared = plane.intersect_line(inside[0], outside[0]);
            let first = triangle.with_points([inside[0], inside[1], shared]);
            let second = triangle.with_points([
                inside[1],
                shared,
                plane.intersect_line(inside[1], outside[0]),
            ]);
            Clipped::Split(first, second)
        }
        _ => Clipped::Whole(*triangle),
    }
}

/// The camera-space near plane: `x = near`, keeping everything further
/// forward.
pub fn near_plane(near: f32) -> Plane {
    Plane::new(Vec3::new(near, 0.0, 0.0), Vec3::X)
}

/// Clips screen-space triangles to the viewport volume.
///
/// The volume is `0 <= x <= width`, `0 <= y <= height` and depth `z <= 1`.
/// Planes are applied in a fixed order: left, right, top, bottom, back.
#[derive(Clone, Debug)]
pub struct ScreenClipper {
    planes: [Plane; 5],
}

impl ScreenClipper {
    pub fn new(width: f32, height: f32) -> Self {
        let top_left = Vec3::new(0.0, 0.0, 0.0);
        let bottom_right_back = Vec3::new(width, height, 1.0);

        Self {
            planes: [
                Plane::new(top_left, Vec3::new(1.0, 0.0, 0.0)),
                Plane::new(bottom_right_back, Vec3::new(-1.0, 0.0, 0.0)),
                Plane::new(top_left, Vec3::new(0.0, 1.0, 0.0)),
                Plane::new(bottom_right_back, Vec3::new(0.0, -1.0, 0.0)),
                Plane::new(bottom_right_back, Vec3::new(0.0, 0.0, -1.0)),
            ],
        }
    }

    /// Clips one triangle against every plane and appends the survivors to
    /// `out`.
    ///
    /// Works through a FIFO queue: for each plane, every triangle pending at
    /// the start of that pass is popped once and its 0-2 pieces pushed back.
    pub fn clip_into(&self, triangle: Triangle, out: &mut Vec<Triangle>) {
        let mut queue = VecDeque::with_capacity(8);
        queue.push_back(triangle);

        for plane in &self.planes {
            for _ in 0..queue.len() {
                let Some(pending) = queue.pop_front() else {
                    break;
                };
                queue.extend(clip_triangle(plane, &pending));
            }
            if queue.is_empty() {
                break;
            }
        }

        out.extend(queue);
    }

    /// Clips one triangle, returning the surviving pieces.
    pub fn clip(&self, triangle: Triangle) -> Vec<Triangle> {
        let mut out = Vec::new();
        self.clip_into(triangle, &mut out);
        out
    }
}
