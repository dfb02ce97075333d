//! Scanline-based triangle rasterization.
//!
//! Triangles are filled one horizontal line at a time using the classic
//! flat-top/flat-bottom decomposition:
//!
//! 1. **Sort vertices** by Y coordinate (top to bottom in screen space)
//! 2. **Split** at the middle vertex's height into a flat-bottom and a
//!    flat-top triangle
//! 3. **Fill** each row between the two edges using inverse slopes
//!    (`dx / dy`)
//!
//! ```text
//!        v0                   v0
//!        /\                   /\
//!       /  \                 /  \
//!      /    \       =>      /----\<- split at v1.y
//!     /      \             v1   split
//!    /________\             \    /
//!   v1        v2             \  /
//!                             \/
//!                             v2
//! ```

use super::{FrameBuffer, Rasterizer};
use crate::colors::Color;
use crate::math::vec3::Vec3;
use crate::triangle::Triangle;

/// Scanline-based triangle rasterizer.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Point on the long edge `p0 -> p2` at the height of `p1`.
    /// Assumes the points are sorted by Y already.
    fn split_point(p0: Vec3, p1: Vec3, p2: Vec3) -> Vec3 {
        let t = (p1.y - p0.y) / (p2.y - p0.y);
        Vec3::new(p0.x + (p2.x - p0.x) * t, p1.y, p0.z + (p2.z - p0.z) * t)
    }

    fn sort_vertices(v0: &mut Vec3, v1: &mut Vec3, v2: &mut Vec3) {
        if v1.y < v0.y {
            std::mem::swap(v0, v1);
        }
        if v2.y < v1.y {
            std::mem::swap(v1, v2);
        }
        if v1.y < v0.y {
            std::mem::swap(v0, v1);
        }
    }

    /// `v0` on top, `v1` and `v2` sharing the bottom row.
    fn fill_flat_bottom(v0: Vec3, v1: Vec3, v2: Vec3, buffer: &mut FrameBuffer, color: Color) {
        let height = v1.y - v0.y;
        if height < f32::EPSILON {
            return;
        }
        let inv_slope_1 = (v1.x - v0.x) / height;
        let inv_slope_2 = (v2.x - v0.x) / height;

        for y in v0.y.ceil() as i32..=v1.y.floor() as i32 {
            let dy = y as f32 - v0.y;
            let x1 = v0.x + inv_slope_1 * dy;
            let x2 = v0.x + inv_slope_2 * dy;
            Self::fill_span(y, x1, x2, buffer, color);
        }
    }

    /// `v0` and `v1` sharing the top row, `v2` at the bottom.
    fn fill_flat_top(v0: Vec3, v1: Vec3, v2: Vec3, buffer: &mut FrameBuffer, color: Color) {
        let height = v2.y - v0.y;
        if height < f32::EPSILON {
            return;
        }
        let inv_slope_1 = (v2.x - v0.x) / height;
        let inv_slope_2 = (v2.x - v1.x) / height;

        for y in v0.y.ceil() as i32..=v2.y.floor() as i32 {
            let dy = y as f32 - v0.y;
            let x1 = v0.x + inv_slope_1 * dy;
            let x2 = v1.x + inv_slope_2 * dy;
            Self::fill_span(y, x1, x2, buffer, color);
        }
    }

    #[inline]
    fn fill_span(y: i32, x1: f32, x2: f32, buffer: &mut FrameBuffer, color: Color) {
        // Don't assume which is left/right
        let x_left = x1.min(x2).ceil() as i32;
        let x_right = x1.max(x2).floor() as i32;
        buffer.fill_scanline(y, x_left, x_right, color);
    }
}

impl Rasterizer for ScanlineRasterizer {
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer, color: Color) {
        let [mut v0, mut v1, mut v2] = triangle.points;
        Self::sort_vertices(&mut v0, &mut v1, &mut v2);

        if (v1.y - v2.y).abs() < f32::EPSILON {
            Self::fill_flat_bottom(v0, v1, v2, buffer, color);
        } else if (v0.y - v1.y).abs() < f32::EPSILON {
            Self::fill_flat_top(v0, v1, v2, buffer, color);
        } else {
            let split = Self::split_point(v0, v1, v2);
            Self::fill_flat_bottom(v0, v1, split, buffer, color);
            Self::fill_flat_top(v1, split, v2, buffer, color);
        }
    }
}
