use crate::primitives::{BoxGeometry, Color};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongMaterial {
    pub color: Color,
    pub specular: Color,
    pub emissive: Color,
    pub shininess: f32,
}

impl PhongMaterial {
    pub fn new(color: Color, specular: Color, emissive: Color, shininess: f32) -> Self {
        Self {
            color,
            specular,
            emissive,
            shininess,
        }
    }
}

impl Default for PhongMaterial {
    fn default() -> Self {
        Self::new(Color::WHITE, Color::from_hex(0x111111), Color::BLACK, 30.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub geometry: BoxGeometry,
    pub material: PhongMaterial,
}

impl Mesh {
    pub fn new(geometry: BoxGeometry, material: PhongMaterial) -> Self {
        Self { geometry, material }
    }
}
