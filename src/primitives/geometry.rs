use glam::Vec3;

/// Axis-aligned box centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxGeometry {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl BoxGeometry {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub fn cube(size: f32) -> Self {
        Self::new(size, size, size)
    }

    pub fn dimensions(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth)
    }
}
