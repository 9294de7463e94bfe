/// An sRGB color, stored as normalized floats like the hex literals it is usually built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a `0xRRGGBB` literal.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self::new(channel(16), channel(8), channel(0))
    }

    pub fn to_hex(self) -> u32 {
        let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// Converts to linear space for lighting, scaled by `intensity`.
    pub fn to_linear(self, intensity: f32) -> [f32; 3] {
        let decode = |value: f32| {
            if value <= 0.04045 {
                value / 12.92
            } else {
                ((value + 0.055) / 1.055).powf(2.4)
            }
        };

        [
            decode(self.r) * intensity,
            decode(self.g) * intensity,
            decode(self.b) * intensity,
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_channels_are_split_in_rgb_order() {
        let color = Color::from_hex(0xffff77);
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 1.0);
        assert!((color.b - 0x77 as f32 / 255.0).abs() < 1e-6);
        assert_eq!(color.to_hex(), 0xffff77);
    }

    #[test]
    fn linear_conversion_keeps_black_and_white() {
        assert_eq!(Color::BLACK.to_linear(1.0), [0.0, 0.0, 0.0]);
        let white = Color::WHITE.to_linear(2.0);
        for channel in white {
            assert!((channel - 2.0).abs() < 1e-5);
        }
        let gray = Color::from_hex(0x555555).to_linear(1.0);
        assert!(gray[0] < 0x55 as f32 / 255.0);
    }
}
