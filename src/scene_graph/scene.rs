use std::fmt;

use glam::Vec3;
use id_arena::Arena;

use crate::scene_graph::object3d::{Object3D, ObjectId, ObjectKind};

/// Object store plus the list of objects currently attached to the scene.
///
/// Allocating an object does not make it visible; only attached objects are drawn.
/// Detached objects stay allocated so they can be attached again later.
pub struct Scene {
    pub objects: Arena<Object3D>,
    attached: Vec<ObjectId>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Arena::new(),
            attached: Vec::new(),
        }
    }

    pub fn alloc_object(&mut self, object: Object3D) -> ObjectId {
        self.objects.alloc(object)
    }

    /// Attaches an object. Attaching an already attached object moves it to the end
    /// of the draw order instead of duplicating it.
    pub fn add(&mut self, id: ObjectId) {
        if self.objects.get(id).is_none() {
            log::warn!("Tried to attach unknown object {:?}", id);
            return;
        }

        self.attached.retain(|&attached| attached != id);
        self.attached.push(id);
    }

    /// Detaches an object. Detaching something that is not attached does nothing.
    pub fn remove(&mut self, id: ObjectId) {
        self.attached.retain(|&attached| attached != id);
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.attached.contains(&id)
    }

    pub fn attached(&self) -> impl Iterator<Item = (ObjectId, &Object3D)> + '_ {
        self.attached
            .iter()
            .filter_map(move |&id| self.objects.get(id).map(|object| (id, object)))
    }

    pub fn get_object(&self, id: ObjectId) -> Option<&Object3D> {
        self.objects.get(id)
    }

    /// Swaps the object stored under `id`, keeping its id and attachment. Returns false for unknown ids.
    pub fn replace_object(&mut self, id: ObjectId, object: Object3D) -> bool {
        match self.objects.get_mut(id) {
            Some(slot) => {
                *slot = object;
                true
            }
            None => false,
        }
    }

    pub fn set_object_translation(&mut self, object_id: ObjectId, translation: Vec3) {
        if let Some(object) = self.objects.get_mut(object_id) {
            object.transform.set_translation(translation);
        }
    }

    pub fn stats(&self) -> SceneStats {
        let mut stats = SceneStats {
            allocated: self.objects.len(),
            ..SceneStats::default()
        };

        for (_, object) in self.attached() {
            match object.kind {
                ObjectKind::AxisHelper(_) => stats.axis_helpers += 1,
                ObjectKind::Mesh(_) => stats.meshes += 1,
                ObjectKind::PointLight(_) => stats.point_lights += 1,
                ObjectKind::PointLightHelper(_) => stats.point_light_helpers += 1,
                ObjectKind::AmbientLight(_) => stats.ambient_lights += 1,
            }
        }

        stats
    }

    /// Rebuilds every matrix whose transform changed this frame, so rendering reads fresh values.
    pub fn late_update(&mut self) {
        for (_, object) in self.objects.iter() {
            if object.transform.is_dirty() {
                object.transform.refresh();
            }
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts of attached objects by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneStats {
    pub allocated: usize,
    pub axis_helpers: usize,
    pub meshes: usize,
    pub point_lights: usize,
    pub point_light_helpers: usize,
    pub ambient_lights: usize,
}

impl fmt::Display for SceneStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} allocated, attached: {} mesh(es), {} axis helper(s), {} point light(s), {} light helper(s), {} ambient light(s)",
            self.allocated,
            self.meshes,
            self.axis_helpers,
            self.point_lights,
            self.point_light_helpers,
            self.ambient_lights,
        )
    }
}
