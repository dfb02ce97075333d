//! Sun light and day/night cycle.

use crate::colors::Color;
use crate::math::{mat4::Mat4, vec3::Vec3};

/// A directional light that sweeps around the X axis at a constant rate.
///
/// All rays are parallel, like sunlight. The direction is the way the light
/// *travels* (from the sun toward the ground), so a surface facing the sun has
/// a normal opposite to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayCycle {
    /// Unit direction the light is travelling.
    pub direction: Vec3,
    /// Angular speed of the sun in radians per second.
    pub cycle_rate: f32,
    /// Direction at which the sky is brightest.
    pub midday: Vec3,
    pub day: Color,
    pub night: Color,
}

impl Default for DayCycle {
    fn default() -> Self {
        Self {
            direction: Vec3::new(0.0, 0.0, -1.0),
            cycle_rate: 0.25,
            midday: Vec3::new(0.0, 0.0, -1.0),
            day: Color::rgb(135, 206, 235),
            night: Color::rgb(0, 0, 49),
        }
    }
}

impl DayCycle {
    /// Create a cycle starting at `direction`; the direction is normalized.
    pub fn new(direction: Vec3, cycle_rate: f32) -> Self {
        Self {
            direction: direction.normalize(),
            cycle_rate,
            ..Self::default()
        }
    }

    /// Rotate the light by `cycle_rate * delta_time` around the X axis.
    pub fn advance(&mut self, delta_time: f32) {
        self.direction = Mat4::rotation_x(self.cycle_rate * delta_time).transform(self.direction);
    }

    /// Brightness of the sky in `[0, 1]`: 1 when the light matches `midday`,
    /// 0 when it points the opposite way.
    pub fn daylight(&self) -> f32 {
        0.5 * (self.direction.dot(self.midday) + 1.0)
    }

    /// Background color for the current light direction.
    pub fn sky_color(&self) -> Color {
        self.night.lerp(self.day, self.daylight())
    }

    /// Flat-shading intensity for a unit surface normal.
    ///
    /// Returns `0.5 * (1 - light·normal)`: 1 for a surface facing straight at
    /// the sun, 0.5 for one edge-on, 0 for one facing straight away.
    pub fn intensity(&self, normal: Vec3) -> f32 {
        0.5 * (1.0 - self.direction.dot(normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    #[test]
    fn test_direct_illumination() {
        let light = DayCycle::default();
        assert_relative_eq!(light.intensity(Vec3::Z), 1.0);
    }

    #[test]
    fn test_no_illumination() {
        let light = DayCycle::default();
        assert_relative_eq!(light.intensity(-Vec3::Z), 0.0);
    }

    #[test]
    fn test_grazing_illumination() {
        let light = DayCycle::default();
        assert_relative_eq!(light.intensity(Vec3::X), 0.5);
    }

    #[test]
    fn test_sky_is_day_at_midday() {
        let light = DayCycle::default();
        assert_eq!(light.sky_color(), light.day);
    }

    #[test]
    fn test_half_cycle_reaches_midnight() {
        let mut light = DayCycle::default();
        light.advance(PI / light.cycle_rate);

        assert_relative_eq!(light.direction.z, 1.0, epsilon = 1e-5);
        assert_relative_eq!(light.daylight(), 0.0, epsilon = 1e-5);
        assert_eq!(light.sky_color(), light.night);
    }

    #[test]
    fn test_advance_keeps_unit_length() {
        let mut light = DayCycle::new(Vec3::new(0.0, 1.0, -1.0), 0.25);
        for _ in 0..100 {
            light.advance(1.0 / 60.0);
        }
        assert_relative_eq!(light.direction.magnitude(), 1.0, epsilon = 1e-4);
        assert_relative_eq!(light.direction.x, 0.0);
    }
}
