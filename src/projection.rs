//! Perspective projection parameters.
//!
//! The [`Projection`] struct is the single source of truth for the lens
//! (FOV, aspect ratio, near/far planes). [`Viewport`] maps the normalized
//! result onto pixels. Both are rebuilt only at startup and on resize.
//!
//! # Spaces
//!
//! Camera space has +X forward, +Y left and +Z up (see
//! [`CoordinateSystem`](crate::camera::CoordinateSystem)). The projection
//! matrix turns that into:
//! - x: screen right, `[-1, 1]` across the horizontal FOV
//! - y: screen down, `[-1, 1]` scaled by the aspect ratio
//! - z: depth, `0` at the near plane and `1` at the far plane
//! - w: the camera-space forward distance, for the perspective divide

use crate::math::mat4::Mat4;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Horizontal field of view in degrees.
    fov_deg: f32,
    /// Aspect ratio (width / height).
    aspect_ratio: f32,
    /// Near clipping plane distance.
    near: f32,
    /// Far clipping plane distance.
    far: f32,
}

impl Projection {
    /// Creates a new projection with the given parameters.
    ///
    /// # Arguments
    /// * `fov_deg` - Horizontal field of view in degrees
    /// * `aspect_ratio` - Width divided by height
    /// * `near` - Near clipping plane distance (must be > 0)
    /// * `far` - Far clipping plane distance (must be > near)
    pub fn new(fov_deg: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        Self {
            fov_deg,
            aspect_ratio,
            near,
            far,
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    /// Updates the aspect ratio (typically called on window resize).
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Camera space to normalized projection space.
    ///
    /// ```text
    /// |   0    -1/t       0          0      |
    /// |   0     0     -aspect/t      0      |
    /// | f/(f-n) 0         0      -f*n/(f-n) |
    /// |   1     0         0          0      |
    /// ```
    ///
    /// with `t = tan(fov / 2)`. The result still needs a divide by `w`.
    pub fn matrix(&self) -> Mat4 {
        let t = (0.5 * self.fov_deg).to_radians().tan();
        let depth = self.far / (self.far - self.near);

        let mut m = Mat4::ZERO;
        m.set(0, 1, -1.0 / t);
        m.set(1, 2, -self.aspect_ratio / t);
        m.set(2, 0, depth);
        m.set(2, 3, -depth * self.near);
        m.set(3, 0, 1.0);
        m
    }
}

/// Pixel dimensions of the render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Normalized projection space to screen pixels.
    ///
    /// `x` and `y` go from `[-1, 1]` to `[0, width]` and `[0, height]`. Depth
    /// and `w` pass through.
    pub fn matrix(&self) -> Mat4 {
        let half_w = 0.5 * self.width as f32;
        let half_h = 0.5 * self.height as f32;
        Mat4::new([
            [half_w, 0.0, 0.0, half_w],
            [0.0, half_h, 0.0, half_h],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}
