use glam::Vec3;

use crate::primitives::Color;
use crate::scene_graph::ObjectId;

/// Visual aid for the coordinate axes: one bar per axis, starting at the object's origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisHelper {
    pub length: f32,
    pub thickness: f32,
}

impl AxisHelper {
    pub fn new(length: f32) -> Self {
        Self {
            length,
            thickness: length * 0.005,
        }
    }

    /// Direction and color of each bar, X red, Y green, Z blue.
    pub fn axes(&self) -> [(Vec3, Color); 3] {
        [
            (Vec3::X, Color::from_hex(0xff0000)),
            (Vec3::Y, Color::from_hex(0x00ff00)),
            (Vec3::Z, Color::from_hex(0x0000ff)),
        ]
    }
}

impl Default for AxisHelper {
    fn default() -> Self {
        Self::new(10.0)
    }
}

/// Marks the position of a point light. The light is referenced, not owned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLightHelper {
    pub light: ObjectId,
    pub sphere_size: f32,
}

impl PointLightHelper {
    pub fn new(light: ObjectId, sphere_size: f32) -> Self {
        Self { light, sphere_size }
    }
}
