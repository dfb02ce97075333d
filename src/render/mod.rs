//! Pixel output: the frame buffer and triangle fill.
//!
//! The geometry pipeline never touches pixels. It hands sorted screen-space
//! triangles to a [`Rasterizer`] and the line primitives on [`FrameBuffer`].

mod framebuffer;
mod scanline;

pub use framebuffer::FrameBuffer;
pub use scanline::ScanlineRasterizer;

use crate::colors::Color;
use crate::triangle::Triangle;

/// Trait for triangle fill algorithms.
///
/// Implementors define how a screen-space triangle is filled into a pixel
/// buffer, so the fill strategy can be swapped for testing and benchmarking.
pub trait Rasterizer {
    /// Fill a triangle into the frame buffer with one flat color.
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer, color: Color);
}

/// What to draw for each triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Filled only
    #[default]
    Filled,
    /// Outlines only
    Wireframe,
    /// Filled, then outlined
    FilledWireframe,
}

impl RenderMode {
    /// Picks a mode from independent fill/wireframe switches. With both off
    /// the mesh would be invisible, so that falls back to [`RenderMode::Filled`].
    pub fn from_flags(fill: bool, wireframe: bool) -> Self {
        match (fill, wireframe) {
            (true, true) => RenderMode::FilledWireframe,
            (false, true) => RenderMode::Wireframe,
            _ => RenderMode::Filled,
        }
    }

    pub fn draws_fill(self) -> bool {
        matches!(self, RenderMode::Filled | RenderMode::FilledWireframe)
    }

    pub fn draws_wireframe(self) -> bool {
        matches!(self, RenderMode::Wireframe | RenderMode::FilledWireframe)
    }
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Filled => write!(f, "Filled"),
            RenderMode::Wireframe => write!(f, "Wireframe"),
            RenderMode::FilledWireframe => write!(f, "FilledWireframe"),
        }
    }
}

/// Draws a frame's triangles in the given order, fill before outline.
pub fn draw_triangles(
    triangles: &[Triangle],
    rasterizer: &impl Rasterizer,
    buffer: &mut FrameBuffer,
    mode: RenderMode,
) {
    for triangle in triangles {
        if mode.draws_fill() {
            rasterizer.fill_triangle(triangle, buffer, triangle.fill);
        }
        if mode.draws_wireframe() {
            buffer.draw_triangle_wireframe(triangle, triangle.wire);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec3::Vec3;

    #[test]
    fn flags_map_to_modes() {
        assert_eq!(RenderMode::from_flags(true, false), RenderMode::Filled);
        assert_eq!(RenderMode::from_flags(false, true), RenderMode::Wireframe);
        assert_eq!(RenderMode::from_flags(true, true), RenderMode::FilledWireframe);
        assert_eq!(RenderMode::from_flags(false, false), RenderMode::Filled);
    }

    #[test]
    fn later_triangles_paint_over_earlier_ones() {
        let square = |color: Color| {
            Triangle::with_colors(
                [
                    Vec3::new(0.0, 0.0, 0.0),
                    Vec3::new(9.0, 0.0, 0.0),
                    Vec3::new(0.0, 9.0, 0.0),
                ],
                color,
                Color::WHITE,
            )
        };
        let far = square(Color::rgb(10, 10, 10));
        let near = square(Color::rgb(200, 0, 0));

        let mut buffer = FrameBuffer::new(10, 10);
        draw_triangles(&[far, near], &ScanlineRasterizer::new(), &mut buffer, RenderMode::Filled);
        assert_eq!(buffer.get_pixel(1, 1), Some(near.fill.to_argb()));
    }

    #[test]
    fn wireframe_uses_wire_color() {
        let triangle = Triangle::with_colors(
            [
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(8.0, 1.0, 0.0),
                Vec3::new(1.0, 8.0, 0.0),
            ],
            Color::rgb(0, 0, 255),
            Color::rgb(0, 255, 0),
        );
        let mut buffer = FrameBuffer::new(10, 10);
        draw_triangles(
            &[triangle],
            &ScanlineRasterizer::new(),
            &mut buffer,
            RenderMode::FilledWireframe,
        );
        assert_eq!(buffer.get_pixel(1, 1), Some(triangle.wire.to_argb()));
        assert_eq!(buffer.get_pixel(3, 3), Some(triangle.fill.to_argb()));
    }
}
