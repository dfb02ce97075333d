//! Height-banded terrain colors and flat shading.

use crate::colors::Color;
use crate::light::DayCycle;
use crate::math::vec3::Vec3;

/// Picks a base color from a world-space height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainPalette {
    pub grass: Color,
    pub mountain: Color,
    pub snow: Color,
    /// Heights above this are mountain.
    pub mountain_above: f32,
    /// Heights above this are snow.
    pub snow_above: f32,
}

impl Default for TerrainPalette {
    fn default() -> Self {
        Self {
            grass: Color::rgb(126, 200, 80),
            mountain: Color::rgb(127, 131, 134),
            snow: Color::rgb(255, 255, 255),
            mountain_above: -10.0,
            snow_above: 5.0,
        }
    }
}

impl TerrainPalette {
    /// Base color for a face whose centroid sits at height `z`.
    ///
    /// Both thresholds are strict: a face exactly at `snow_above` is still
    /// mountain.
    pub fn base_color(&self, z: f32) -> Color {
        if z > self.snow_above {
            self.snow
        } else if z > self.mountain_above {
            self.mountain
        } else {
            self.grass
        }
    }

    /// Fill and wire colors for a world-space face.
    ///
    /// The fill is the height color scaled by the light intensity. The wire is
    /// black on lit faces (`intensity >= 0.5`) and white on shadowed ones so
    /// the outline stays visible either way.
    pub fn shade(&self, centroid: Vec3, normal: Vec3, light: &DayCycle) -> (Color, Color) {
        let intensity = light.intensity(normal);
        let fill = self.base_color(centroid.z).scaled(intensity);
        let wire = if intensity >= 0.5 {
            Color::BLACK
        } else {
            Color::WHITE
        };
        (fill, wire)
    }
}
