use glam::{Mat4, Quat, Vec3};
use std::cell::Cell;

/// Local translation/rotation/scale of an object with a lazily rebuilt matrix.
#[derive(Debug, Clone)]
pub struct Transform {
    translation: Vec3,
    rotation: Quat,
    scale: f32,

    matrix: Cell<Mat4>,
    dirty: Cell<bool>,
}

impl Transform {
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Quat::IDENTITY,
            scale: 1.0,
            matrix: Cell::new(Mat4::IDENTITY),
            dirty: Cell::new(true),
        }
    }

    /// Returns the cached matrix, rebuilding it first if a component changed.
    pub fn matrix(&self) -> Mat4 {
        if self.dirty.get() {
            self.refresh();
        }

        self.matrix.get()
    }

    pub fn refresh(&self) {
        let matrix = Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.rotation,
            self.translation,
        );

        self.matrix.set(matrix);
        self.dirty.set(false);
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    pub fn set_translation(&mut self, translation: Vec3) {
        self.translation = translation;
        self.dirty.set(true);
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
        self.dirty.set(true);
    }

    #[allow(dead_code)]
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    #[allow(dead_code)]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::from_translation(Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn matrix_follows_translation_changes() {
        let mut transform = Transform::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(transform.matrix().w_axis.truncate(), Vec3::new(1.0, 2.0, 3.0));
        assert!(!transform.is_dirty());

        transform.set_translation(Vec3::new(-4.0, 0.0, 0.5));
        assert!(transform.is_dirty());
        assert_eq!(transform.matrix().w_axis.truncate(), Vec3::new(-4.0, 0.0, 0.5));
    }

    #[test]
    fn rotation_is_applied_before_translation() {
        let mut transform = Transform::from_translation(Vec3::new(0.0, 2.0, 0.0));
        transform.set_rotation(Quat::from_rotation_x(-FRAC_PI_2));

        // Local +Y ends up pointing at -Z after -90 degrees about X.
        let tip = transform.matrix().transform_point3(Vec3::Y);
        assert!((tip - Vec3::new(0.0, 2.0, -1.0)).length() < 1e-5);
    }
}
