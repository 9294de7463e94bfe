use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

use crate::primitives::{
    AmbientLight, AxisHelper, BoxGeometry, Color, Mesh, PhongMaterial, PointLight,
    PointLightHelper,
};
use crate::scene_graph::{Object3D, ObjectId, Scene};

const BOX_COLOR: u32 = 0xffff77;
const BOX_SPECULAR: u32 = 0x000000;
const BOX_EMISSIVE: u32 = 0x000000;
const BOX_SHININESS: f32 = 90.0;
const PRIMARY_BOX_DISPLACEMENT: Vec3 = Vec3::new(0.0, 2.0, 0.0);

const POINT_LIGHT_COLOR: u32 = 0xffffff;
const POINT_LIGHT_INTENSITY: f32 = 500.0;
const POINT_LIGHT_POSITION: Vec3 = Vec3::new(0.0, 20.0, 0.0);
const POINT_LIGHT_HELPER_SIZE: f32 = 0.5;
const AMBIENT_LIGHT_COLOR: u32 = 0x555555;

/// Inputs of [`SceneContentManager::build_box_generic`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxParams {
    pub color: Color,
    pub specular: Color,
    pub emissive: Color,
    pub shininess: f32,
    pub size: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl BoxParams {
    /// The yellow box material shared by both boxes, placed at `position`.
    pub fn yellow(size: f32, position: Vec3) -> Self {
        Self {
            color: Color::from_hex(BOX_COLOR),
            specular: Color::from_hex(BOX_SPECULAR),
            emissive: Color::from_hex(BOX_EMISSIVE),
            shininess: BOX_SHININESS,
            size,
            x: position.x,
            y: position.y,
            z: position.z,
        }
    }
}

/// Everything built for one box. Only `mesh` lives in the scene arena.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxComposite {
    pub material: PhongMaterial,
    pub geometry: BoxGeometry,
    pub displacement: Vec3,
    pub mesh: ObjectId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxVisibility {
    Shown,
    Hidden,
}

impl From<bool> for BoxVisibility {
    fn from(enabled: bool) -> Self {
        if enabled {
            BoxVisibility::Shown
        } else {
            BoxVisibility::Hidden
        }
    }
}

/// Builds the demo contents and keeps the box meshes in sync with the control panel.
///
/// The host's scene is passed into every hook. `init` must run before the first
/// `update`; an early `update` only logs a warning.
pub struct SceneContentManager {
    axis_helper: Option<ObjectId>,
    primary_box: Option<BoxComposite>,
    secondary_box: Option<BoxComposite>,
    box_size: f32,
    box_enabled: bool,
    last_box_visibility: Option<BoxVisibility>,
    warned_uninitialized: bool,
}

impl SceneContentManager {
    pub fn new() -> Self {
        Self {
            axis_helper: None,
            primary_box: None,
            secondary_box: None,
            box_size: 1.0,
            box_enabled: true,
            last_box_visibility: None,
            warned_uninitialized: false,
        }
    }

    pub fn init(&mut self, scene: &mut Scene) {
        if self.axis_helper.is_none() {
            let axis = scene.alloc_object(Object3D::new("Axis", AxisHelper::default()));
            scene.add(axis);
            self.axis_helper = Some(axis);
        }

        // Lights are added on every call, unlike the axis helper.
        let point_light = scene.alloc_object(
            Object3D::new(
                "Point light",
                PointLight::new(Color::from_hex(POINT_LIGHT_COLOR), POINT_LIGHT_INTENSITY, 0.0),
            )
            .with_translation(POINT_LIGHT_POSITION),
        );
        scene.add(point_light);

        let point_light_helper = scene.alloc_object(Object3D::new(
            "Point light helper",
            PointLightHelper::new(point_light, POINT_LIGHT_HELPER_SIZE),
        ));
        scene.add(point_light_helper);

        let ambient_light = scene.alloc_object(Object3D::new(
            "Ambient light",
            AmbientLight::new(Color::from_hex(AMBIENT_LIGHT_COLOR)),
        ));
        scene.add(ambient_light);

        self.build_box(scene);
        self.secondary_box = Some(Self::build_box_generic(
            scene,
            &BoxParams::yellow(1.0, Vec3::ZERO),
        ));

        log::info!("Contents initialized: {}", scene.stats());
    }

    /// Builds the primary box from the current `box_size` at its default displacement.
    pub fn build_box(&mut self, scene: &mut Scene) {
        let params = BoxParams::yellow(self.box_size, PRIMARY_BOX_DISPLACEMENT);
        self.primary_box = Some(Self::build_box_generic(scene, &params));
    }

    /// Builds a box composite. The mesh is allocated in `scene` but left detached.
    pub fn build_box_generic(scene: &mut Scene, params: &BoxParams) -> BoxComposite {
        let material = Self::build_box_material(
            params.color,
            params.specular,
            params.emissive,
            params.shininess,
        );
        let geometry = Self::build_box_geometry(params.size);
        let displacement = Self::build_box_displacement(params.x, params.y, params.z);
        let mesh = Self::build_box_mesh(scene, geometry, material, displacement);

        log::debug!(
            "Built box #{:06x} of size {} at {}",
            material.color.to_hex(),
            params.size,
            displacement
        );

        BoxComposite {
            material,
            geometry,
            displacement,
            mesh,
        }
    }

    pub fn build_box_material(
        color: Color,
        specular: Color,
        emissive: Color,
        shininess: f32,
    ) -> PhongMaterial {
        PhongMaterial::new(color, specular, emissive, shininess)
    }

    pub fn build_box_geometry(size: f32) -> BoxGeometry {
        BoxGeometry::cube(size)
    }

    pub fn build_box_displacement(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3::new(x, y, z)
    }

    pub fn build_box_mesh(
        scene: &mut Scene,
        geometry: BoxGeometry,
        material: PhongMaterial,
        displacement: Vec3,
    ) -> ObjectId {
        scene.alloc_object(Self::box_mesh_object(geometry, material, displacement))
    }

    fn box_mesh_object(
        geometry: BoxGeometry,
        material: PhongMaterial,
        displacement: Vec3,
    ) -> Object3D {
        let mut object = Object3D::new("Box", Mesh::new(geometry, material));
        object.transform.set_rotation(Quat::from_rotation_x(-FRAC_PI_2));
        object.transform.set_translation(displacement);
        object
    }

    /// Replaces the primary box after a size change. It is re-attached by the next `update`.
    ///
    /// The new mesh reuses the old mesh's arena slot, so repeated rebuilds do not grow the scene.
    pub fn rebuild_box(&mut self, scene: &mut Scene) {
        match self.primary_box {
            Some(primary) => {
                scene.remove(primary.mesh);

                let params = BoxParams::yellow(self.box_size, PRIMARY_BOX_DISPLACEMENT);
                let material = Self::build_box_material(
                    params.color,
                    params.specular,
                    params.emissive,
                    params.shininess,
                );
                let geometry = Self::build_box_geometry(params.size);
                let displacement = Self::build_box_displacement(params.x, params.y, params.z);
                let object = Self::box_mesh_object(geometry, material, displacement);

                let mesh = if scene.replace_object(primary.mesh, object.clone()) {
                    primary.mesh
                } else {
                    scene.alloc_object(object)
                };

                self.primary_box = Some(BoxComposite {
                    material,
                    geometry,
                    displacement,
                    mesh,
                });
            }
            None => self.build_box(scene),
        }

        self.last_box_visibility = None;
    }

    pub fn update_box_if_required(&mut self, scene: &mut Scene) {
        // Nothing to show or hide yet; leave the state unapplied so `init` is picked up.
        if self.primary_box.is_none() {
            return;
        }

        let desired = BoxVisibility::from(self.box_enabled);
        if self.last_box_visibility == Some(desired) {
            return;
        }

        match desired {
            BoxVisibility::Shown => {
                for composite in [&self.primary_box, &self.secondary_box].into_iter().flatten() {
                    scene.add(composite.mesh);
                }
            }
            BoxVisibility::Hidden => {
                // Only the primary box is hidden; the secondary box stays attached.
                if let Some(primary) = &self.primary_box {
                    scene.remove(primary.mesh);
                }
            }
        }

        log::debug!(
            "Box visibility {:?} -> {:?}",
            self.last_box_visibility,
            desired
        );
        self.last_box_visibility = Some(desired);
    }

    pub fn update(&mut self, scene: &mut Scene) {
        self.update_box_if_required(scene);

        let Some(primary) = &self.primary_box else {
            if !self.warned_uninitialized {
                log::warn!("Contents updated before init, skipping box placement");
                self.warned_uninitialized = true;
            }
            return;
        };

        scene.set_object_translation(primary.mesh, primary.displacement);
    }

    pub fn box_enabled(&self) -> bool {
        self.box_enabled
    }

    pub fn set_box_enabled(&mut self, enabled: bool) {
        self.box_enabled = enabled;
    }

    pub fn box_size(&self) -> f32 {
        self.box_size
    }

    /// Takes effect on the next [`Self::rebuild_box`].
    pub fn set_box_size(&mut self, size: f32) {
        self.box_size = size;
    }

    pub fn displacement_mut(&mut self) -> Option<&mut Vec3> {
        self.primary_box
            .as_mut()
            .map(|primary| &mut primary.displacement)
    }

    pub fn primary_box(&self) -> Option<&BoxComposite> {
        self.primary_box.as_ref()
    }

    #[allow(dead_code)]
    pub fn secondary_box(&self) -> Option<&BoxComposite> {
        self.secondary_box.as_ref()
    }

    #[allow(dead_code)]
    pub fn axis_helper(&self) -> Option<ObjectId> {
        self.axis_helper
    }

    pub fn last_box_visibility(&self) -> Option<BoxVisibility> {
        self.last_box_visibility
    }
}

impl Default for SceneContentManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene_graph::{scene::SceneStats, ObjectKind};

    fn initialized() -> (SceneContentManager, Scene) {
        let mut scene = Scene::new();
        let mut contents = SceneContentManager::new();
        contents.init(&mut scene);
        (contents, scene)
    }

    fn primary_mesh(contents: &SceneContentManager) -> ObjectId {
        contents.primary_box().unwrap().mesh
    }

    fn secondary_mesh(contents: &SceneContentManager) -> ObjectId {
        contents.secondary_box().unwrap().mesh
    }

    #[test]
    fn init_attaches_helpers_and_lights_and_builds_two_boxes() {
        let (contents, scene) = initialized();

        assert_eq!(
            scene.stats(),
            SceneStats {
                allocated: 6,
                axis_helpers: 1,
                meshes: 0,
                point_lights: 1,
                point_light_helpers: 1,
                ambient_lights: 1,
            }
        );

        let primary = contents.primary_box().unwrap();
        let secondary = contents.secondary_box().unwrap();
        assert_ne!(primary.mesh, secondary.mesh);
        assert!(scene.get_object(primary.mesh).unwrap().as_mesh().is_some());
        assert!(scene.get_object(secondary.mesh).unwrap().as_mesh().is_some());
        assert!(contents.axis_helper().is_some());
        assert_eq!(contents.last_box_visibility(), None);
    }

    #[test]
    fn boxes_use_the_yellow_material() {
        let (contents, scene) = initialized();
        let primary = contents.primary_box().unwrap();
        let secondary = contents.secondary_box().unwrap();

        let expected = PhongMaterial::new(
            Color::from_hex(0xffff77),
            Color::BLACK,
            Color::BLACK,
            90.0,
        );
        assert_eq!(primary.material, expected);
        assert_eq!(secondary.material, expected);
        assert_eq!(primary.geometry, BoxGeometry::cube(1.0));
        assert_eq!(primary.displacement, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(secondary.displacement, Vec3::ZERO);

        let mesh = scene.get_object(primary.mesh).unwrap();
        assert_eq!(mesh.as_mesh().unwrap().material, expected);
        assert_eq!(mesh.transform.translation(), Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn point_light_helper_references_the_point_light() {
        let (_contents, scene) = initialized();

        let (light_id, light) = scene
            .attached()
            .find(|(_, object)| matches!(object.kind, ObjectKind::PointLight(_)))
            .unwrap();
        assert_eq!(light.transform.translation(), Vec3::new(0.0, 20.0, 0.0));

        let helper = scene
            .attached()
            .find_map(|(_, object)| match &object.kind {
                ObjectKind::PointLightHelper(helper) => Some(*helper),
                _ => None,
            })
            .unwrap();
        assert_eq!(helper.light, light_id);
        assert_eq!(helper.sphere_size, 0.5);
    }

    #[test]
    fn repeated_init_keeps_one_axis_but_duplicates_lights() {
        let (mut contents, mut scene) = initialized();
        let axis = contents.axis_helper();

        contents.init(&mut scene);

        let stats = scene.stats();
        assert_eq!(contents.axis_helper(), axis);
        assert_eq!(stats.axis_helpers, 1);
        assert_eq!(stats.point_lights, 2);
        assert_eq!(stats.point_light_helpers, 2);
        assert_eq!(stats.ambient_lights, 2);
    }

    #[test]
    fn build_box_generic_leaves_mesh_detached() {
        let mut scene = Scene::new();
        let params = BoxParams {
            color: Color::from_hex(0x336699),
            specular: Color::from_hex(0x777777),
            emissive: Color::BLACK,
            shininess: 30.0,
            size: 3.0,
            x: 1.0,
            y: -2.0,
            z: 4.5,
        };

        let composite = SceneContentManager::build_box_generic(&mut scene, &params);

        assert!(!scene.contains(composite.mesh));
        assert_eq!(composite.geometry, BoxGeometry::cube(3.0));
        assert_eq!(composite.displacement, Vec3::new(1.0, -2.0, 4.5));
        assert_eq!(composite.material.shininess, 30.0);

        let mesh = scene.get_object(composite.mesh).unwrap();
        assert_eq!(mesh.transform.translation(), Vec3::new(1.0, -2.0, 4.5));
        let rotated_up = mesh.transform.rotation() * Vec3::Y;
        assert!((rotated_up - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn first_update_attaches_both_boxes() {
        let (mut contents, mut scene) = initialized();

        contents.update(&mut scene);

        assert!(scene.contains(primary_mesh(&contents)));
        assert!(scene.contains(secondary_mesh(&contents)));
        assert_eq!(contents.last_box_visibility(), Some(BoxVisibility::Shown));
    }

    #[test]
    fn hiding_detaches_only_the_primary_box() {
        let (mut contents, mut scene) = initialized();
        contents.update(&mut scene);

        contents.set_box_enabled(false);
        contents.update(&mut scene);

        assert!(!scene.contains(primary_mesh(&contents)));
        assert!(scene.contains(secondary_mesh(&contents)));
        assert_eq!(contents.last_box_visibility(), Some(BoxVisibility::Hidden));

        contents.set_box_enabled(true);
        contents.update(&mut scene);
        assert!(scene.contains(primary_mesh(&contents)));
        assert_eq!(scene.stats().meshes, 2);
    }

    #[test]
    fn repeated_update_is_idempotent() {
        let (mut contents, mut scene) = initialized();
        contents.update(&mut scene);

        let before: Vec<ObjectId> = scene.attached().map(|(id, _)| id).collect();
        let visibility = contents.last_box_visibility();

        contents.update(&mut scene);

        let after: Vec<ObjectId> = scene.attached().map(|(id, _)| id).collect();
        assert_eq!(before, after);
        assert_eq!(contents.last_box_visibility(), visibility);
    }

    #[test]
    fn rebuild_replaces_primary_box_and_forces_reevaluation() {
        let (mut contents, mut scene) = initialized();
        contents.update(&mut scene);
        let old_mesh = primary_mesh(&contents);

        contents.set_box_size(3.5);
        contents.rebuild_box(&mut scene);

        let new_mesh = primary_mesh(&contents);
        assert_eq!(old_mesh, new_mesh);
        assert!(!scene.contains(new_mesh));
        assert_eq!(contents.primary_box().unwrap().geometry, BoxGeometry::cube(3.5));
        let rebuilt = scene.get_object(new_mesh).unwrap().as_mesh().unwrap();
        assert_eq!(rebuilt.geometry, BoxGeometry::cube(3.5));
        assert_eq!(contents.last_box_visibility(), None);

        contents.update(&mut scene);
        assert!(scene.contains(new_mesh));
        assert_eq!(scene.stats().meshes, 2);
        assert_eq!(contents.last_box_visibility(), Some(BoxVisibility::Shown));
    }

    #[test]
    fn repeated_rebuilds_reuse_the_mesh_slot() {
        let (mut contents, mut scene) = initialized();
        contents.update(&mut scene);
        let allocated = scene.stats().allocated;

        for size in [2.0, 3.0, 4.0] {
            contents.set_box_size(size);
            contents.rebuild_box(&mut scene);
            contents.update(&mut scene);
        }

        assert_eq!(scene.stats().allocated, allocated);
        assert_eq!(scene.stats().meshes, 2);
    }

    #[test]
    fn rebuild_before_init_builds_a_fresh_box() {
        let mut scene = Scene::new();
        let mut contents = SceneContentManager::new();

        contents.rebuild_box(&mut scene);

        assert!(contents.primary_box().is_some());
        assert_eq!(scene.stats().allocated, 1);
    }

    #[test]
    fn rebuild_with_larger_size_waits_for_next_update() {
        let mut scene = Scene::new();
        let mut contents = SceneContentManager::new();
        contents.set_box_size(2.0);
        contents.init(&mut scene);

        contents.rebuild_box(&mut scene);

        let primary = *contents.primary_box().unwrap();
        assert_eq!(primary.geometry.dimensions(), Vec3::splat(2.0));
        assert!(!scene.contains(primary.mesh));

        contents.update(&mut scene);
        assert!(scene.contains(primary.mesh));
    }

    #[test]
    fn update_writes_displacement_onto_primary_mesh() {
        let (mut contents, mut scene) = initialized();
        let mesh = primary_mesh(&contents);

        scene.set_object_translation(mesh, Vec3::new(100.0, 100.0, 100.0));
        *contents.displacement_mut().unwrap() = Vec3::new(-1.5, 0.25, 7.0);
        contents.update(&mut scene);

        let transform = &scene.get_object(mesh).unwrap().transform;
        assert_eq!(transform.translation(), Vec3::new(-1.5, 0.25, 7.0));
    }

    #[test]
    fn rebuild_resets_displacement() {
        let (mut contents, mut scene) = initialized();
        *contents.displacement_mut().unwrap() = Vec3::new(5.0, 5.0, 5.0);

        contents.rebuild_box(&mut scene);
        contents.update(&mut scene);

        let transform = &scene.get_object(primary_mesh(&contents)).unwrap().transform;
        assert_eq!(transform.translation(), Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn update_before_init_is_tolerated() {
        let mut scene = Scene::new();
        let mut contents = SceneContentManager::new();

        contents.update(&mut scene);
        contents.update(&mut scene);

        assert_eq!(scene.attached().count(), 0);
        assert_eq!(contents.last_box_visibility(), None);
        assert!(contents.displacement_mut().is_none());
    }

    #[test]
    fn late_init_still_attaches_boxes() {
        let mut scene = Scene::new();
        let mut contents = SceneContentManager::new();

        contents.update(&mut scene);
        contents.init(&mut scene);
        contents.update(&mut scene);

        assert!(scene.contains(primary_mesh(&contents)));
        assert!(scene.contains(secondary_mesh(&contents)));
        assert_eq!(contents.last_box_visibility(), Some(BoxVisibility::Shown));
    }

    #[test]
    fn starting_hidden_never_attaches_primary_box() {
        let mut scene = Scene::new();
        let mut contents = SceneContentManager::new();
        contents.set_box_enabled(false);
        contents.init(&mut scene);

        contents.update(&mut scene);

        assert!(!scene.contains(primary_mesh(&contents)));
        assert!(!scene.contains(secondary_mesh(&contents)));
        assert_eq!(contents.last_box_visibility(), Some(BoxVisibility::Hidden));
    }
}
