use crate::primitives::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub color: Color,
    pub intensity: f32,
    /// Cut-off range; zero means the light reaches infinitely far.
    pub distance: f32,
    pub decay: f32,
}

impl PointLight {
    pub fn new(color: Color, intensity: f32, distance: f32) -> Self {
        Self {
            color,
            intensity,
            distance,
            decay: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

impl AmbientLight {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            intensity: 1.0,
        }
    }
}
