//! World placement of the mesh.
//!
//! Provides a [`Transform`] with a fluent API for translation, rotation
//! (Euler angles) and a constant per-axis spin that advances the rotation
//! every frame.

use crate::math::{mat4::Mat4, vec3::Vec3};

/// Translation, accumulated rotation and spin rate.
///
/// Mutating methods return `&mut Self` for chaining:
///
/// ```ignore
/// transform
///     .set_translation(Vec3::new(0.0, 0.0, 5.0))
///     .set_spin(Vec3::new(0.4, 0.0, 0.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    translation: Vec3,
    rotation: Vec3, // Euler angles in radians around X, Y, Z
    spin: Vec3,     // radians per second around X, Y, Z
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            spin: Vec3::ZERO,
        }
    }
}

impl Transform {
    /// Create a transform at the origin with no rotation and no spin.
    pub fn new() -> Self {
        Self::default()
    }

    // ============ Translation ============

    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    pub fn set_translation(&mut self, translation: Vec3) -> &mut Self {
        self.translation = translation;
        self
    }

    // ============ Rotation ============

    /// Get the rotation (Euler angles in radians).
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Vec3) -> &mut Self {
        self.rotation = rotation;
        self
    }

    /// Add a delta rotation (Euler angles in radians).
    pub fn rotate(&mut self, delta: Vec3) -> &mut Self {
        self.rotation = self.rotation + delta;
        self
    }

    // ============ Spin ============

    /// Get the spin rate (radians per second per axis).
    pub fn spin(&self) -> Vec3 {
        self.spin
    }

    pub fn set_spin(&mut self, spin: Vec3) -> &mut Self {
        self.spin = spin;
        self
    }

    /// Advance the rotation by `spin * delta_time`.
    pub fn advance(&mut self, delta_time: f32) -> &mut Self {
        self.rotate(self.spin * delta_time)
    }

    // ============ Matrix Generation ============

    /// Generate the local-to-world matrix.
    ///
    /// Order: rotate around X, then Y, then Z, then translate.
    pub fn to_matrix(&self) -> Mat4 {
        let Vec3 { x, y, z, .. } = self.rotation;
        let rotation = Mat4::concatenate(
            Mat4::concatenate(Mat4::rotation_x(x), Mat4::rotation_y(y)),
            Mat4::rotation_z(z),
        );
        Mat4::concatenate(
            rotation,
            Mat4::translation(self.translation.x, self.translation.y, self.translation.z),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_default() {
        let t = Transform::default();
        assert_eq!(t.translation(), Vec3::ZERO);
        assert_eq!(t.rotation(), Vec3::ZERO);
        assert_eq!(t.spin(), Vec3::ZERO);
    }

    #[test]
    fn test_to_matrix_identity() {
        assert_eq!(Transform::default().to_matrix(), Mat4::identity());
    }

    #[test]
    fn test_advance_accumulates_spin() {
        let mut t = Transform::new();
        t.set_spin(Vec3::new(0.4, 1.0, -2.0)).advance(0.5).advance(0.5);
        assert_relative_eq!(t.rotation().x, 0.4);
        assert_relative_eq!(t.rotation().y, 1.0);
        assert_relative_eq!(t.rotation().z, -2.0);
    }

    #[test]
    fn test_rotation_runs_before_translation() {
        let mut t = Transform::new();
        t.set_rotation(Vec3::new(0.0, 0.0, FRAC_PI_2))
            .set_translation(Vec3::new(10.0, 0.0, 0.0));

        let p = t.to_matrix() * Vec3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(p.x, 10.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_x_rotation_runs_before_z() {
        let mut t = Transform::new();
        t.set_rotation(Vec3::new(FRAC_PI_2, 0.0, FRAC_PI_2));

        // X turns +Y into +Z, which Z then leaves alone.
        let p = t.to_matrix() * Vec3::Y;
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, 1.0, epsilon = 1e-5);
    }
}
