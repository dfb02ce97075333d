//! Flat RGB colors and ARGB8888 packing.

use serde::Deserialize;

/// An opaque 8-bit-per-channel color.
///
/// Deserializes from a `[r, g, b]` array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Multiplies every channel by `factor`, truncating towards zero.
    ///
    /// Factors outside `[0, 1]` saturate at the channel bounds.
    pub fn scaled(self, factor: f32) -> Self {
        let scale = |c: u8| (c as f32 * factor) as u8;
        Self::rgb(scale(self.r), scale(self.g), scale(self.b))
    }

    /// Linearly interpolates from `self` (t = 0) to `other` (t = 1).
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let mix = |a: u8, b: u8| (a as f32 + t * (b as f32 - a as f32)) as u8;
        Self::rgb(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }

    /// Packs the color as opaque ARGB8888.
    pub const fn to_argb(self) -> u32 {
        0xFF00_0000 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_as_opaque_argb() {
        assert_eq!(Color::rgb(0x12, 0x34, 0x56).to_argb(), 0xFF12_3456);
        assert_eq!(Color::BLACK.to_argb(), 0xFF00_0000);
    }

    #[test]
    fn lerp_hits_endpoints() {
        let night = Color::rgb(0, 0, 49);
        let day = Color::rgb(135, 206, 235);
        assert_eq!(night.lerp(day, 0.0), night);
        assert_eq!(night.lerp(day, 1.0), day);
        assert_eq!(night.lerp(day, 0.5), Color::rgb(67, 103, 142));
    }

    #[test]
    fn scaled_truncates() {
        assert_eq!(Color::rgb(255, 100, 3).scaled(0.5), Color::rgb(127, 50, 1));
        assert_eq!(Color::WHITE.scaled(0.0), Color::BLACK);
    }
}
