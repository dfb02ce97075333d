//! 4x4 transformation matrix.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `Mat4 * Vec3`
//! - Translation is stored in the **last column**
//! - `A * B * v` applies B first, then A
//! - [`Mat4::concatenate`] takes its arguments in *execution* order instead:
//!   `Mat4::concatenate(a, b)` applies `a` first, then `b`
//!
//! A default-constructed matrix is all zeros, not identity.
//!
//! # Example
//! ```ignore
//! let world = Mat4::concatenate(Mat4::rotation_z(angle), Mat4::translation(0.0, 0.0, 5.0));
//! let result = world * vertex; // rotated, then moved
//! ```

use std::ops::Mul;

use super::vec3::Vec3;

/// 4x4 matrix stored as `data[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Mat4 {
    pub const ZERO: Self = Mat4 {
        data: [[0.0; 4]; 4],
    };

    pub fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix.
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the X axis (+Y turns towards +Z).
    pub fn rotation_x(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Y axis (+Z turns towards +X).
    pub fn rotation_y(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Z axis (+X turns towards +Y).
    pub fn rotation_z(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation of `angle` radians around an arbitrary unit `axis`
    /// (Rodrigues' rotation formula).
    ///
    /// The axis is expected to be normalized already.
    pub fn rotation_axis(angle: f32, axis: Vec3) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        let k = 1.0 - c;
        let Vec3 { x, y, z, .. } = axis;
        Mat4::new([
            [c + x * x * k, x * y * k - z * s, x * z * k + y * s, 0.0],
            [y * x * k + z * s, c + y * y * k, y * z * k - x * s, 0.0],
            [z * x * k - y * s, z * y * k + x * s, c + z * z * k, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Algebraic product `a * b`: the result applies `b` first, then `a`.
    pub fn multiply(a: &Mat4, b: &Mat4) -> Self {
        let mut result = [[0.0f32; 4]; 4];

        for (row, out) in result.iter_mut().enumerate() {
            for (col, cell) in out.iter_mut().enumerate() {
                *cell = a.data[row][0] * b.data[0][col]
                    + a.data[row][1] * b.data[1][col]
                    + a.data[row][2] * b.data[2][col]
                    + a.data[row][3] * b.data[3][col];
            }
        }

        Mat4::new(result)
    }

    /// Chains two transforms in the order they should run: `first`, then `then`.
    ///
    /// Equivalent to `then * first`.
    pub fn concatenate(first: Mat4, then: Mat4) -> Self {
        Mat4::multiply(&then, &first)
    }

    /// Transforms a homogeneous vector with the full 4x4 multiply.
    ///
    /// No perspective divide is applied; the resulting `w` is returned as-is.
    pub fn transform(&self, v: Vec3) -> Vec3 {
        let m = &self.data;
        Vec3::with_w(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z + m[0][3] * v.w,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z + m[1][3] * v.w,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z + m[2][3] * v.w,
            m[3][0] * v.x + m[3][1] * v.y + m[3][2] * v.z + m[3][3] * v.w,
        )
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }

    /// Set element at [row][col].
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row][col] = value;
    }
}

/// Matrix multiplication: Mat4 * Mat4.
///
/// `A * B * v` applies B first, then A.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        Mat4::multiply(&self, &rhs)
    }
}

/// Transform a homogeneous vector: Mat4 * Vec3 (column vector, `w` included).
impl Mul<Vec3> for Mat4 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Self::Output {
        self.transform(v)
    }
}
