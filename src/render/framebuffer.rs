//! Owning ARGB8888 pixel buffer and line primitives.

use crate::colors::Color;
use crate::triangle::Triangle;

/// A `width * height` grid of packed ARGB8888 pixels, row-major from the
/// top-left corner.
///
/// Every write is bounds-checked; out-of-range pixels are silently dropped.
pub struct FrameBuffer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            color_buffer: vec![Color::BLACK.to_argb(); (width * height) as usize],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.color_buffer = vec![Color::BLACK.to_argb(); (width * height) as usize];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        self.color_buffer.fill(color.to_argb());
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.color_buffer[(y as u32 * self.width + x as u32) as usize] = color.to_argb();
        }
    }

    /// Get the packed color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// Fills the inclusive span `x_left..=x_right` on row `y`, clamped to the
    /// buffer.
    #[inline]
    pub fn fill_scanline(&mut self, y: i32, x_left: i32, x_right: i32, color: Color) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let x_start = x_left.max(0);
        let x_end = x_right.min(self.width as i32 - 1);
        if x_start > x_end {
            return;
        }

        let row = (y as u32 * self.width) as usize;
        self.color_buffer[row + x_start as usize..=row + x_end as usize].fill(color.to_argb());
    }

    /// Outlines a screen-space triangle.
    pub fn draw_triangle_wireframe(&mut self, triangle: &Triangle, color: Color) {
        let [p0, p1, p2] = triangle.points.map(|p| (p.x as i32, p.y as i32));
        self.draw_line(p0, p1, color);
        self.draw_line(p1, p2, color);
        self.draw_line(p2, p0, color);
    }

    /// Draws a line between two points using Bresenham's line algorithm.
    ///
    /// Only integer arithmetic is used: an error term tracks the distance
    /// between the ideal line and the current pixel, and each step along the
    /// major axis also steps the minor axis once the error crosses zero.
    pub fn draw_line(&mut self, (x0, y0): (i32, i32), (x1, y1): (i32, i32), color: Color) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let step_x = if x0 < x1 { 1 } else { -1 };
        let step_y = if y0 < y1 { 1 } else { -1 };

        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.set_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += step_x;
            }
            if e2 <= dx {
                err += dx;
                y += step_y;
            }
        }
    }

    /// Returns the pixels as raw bytes (ARGB8888, native endian) for upload
    /// to a streaming texture.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and a stricter alignment than u8, and the
        // byte length is exactly the length of the u32 buffer times four.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Bytes per row, for texture uploads.
    pub fn pitch(&self) -> usize {
        self.width as usize * 4
    }
}
