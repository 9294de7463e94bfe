use glam::{Mat4, Quat, Vec3};

use crate::primitives::{AxisHelper, Color, PhongMaterial};
use crate::scene_graph::{ObjectKind, Scene};

/// Per-instance data for the cube pipeline: model matrix plus a Phong material.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub model: Mat4,
    pub color: [f32; 4],
    /// RGB specular, shininess in `w`.
    pub specular: [f32; 4],
    pub emissive: [f32; 4],
}

impl InstanceData {
    const ATTRIBUTES: [wgpu::VertexAttribute; 7] = wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
        7 => Float32x4,
        8 => Float32x4,
    ];

    pub fn new(model: Mat4, material: &PhongMaterial) -> Self {
        let [sr, sg, sb] = material.specular.to_linear(1.0);

        Self {
            model,
            color: rgba(material.color.to_linear(1.0)),
            specular: [sr, sg, sb, material.shininess],
            emissive: rgba(material.emissive.to_linear(1.0)),
        }
    }

    /// Unlit instance used for helpers.
    pub fn emissive(model: Mat4, color: Color) -> Self {
        Self::new(
            model,
            &PhongMaterial::new(Color::BLACK, Color::BLACK, color, 1.0),
        )
    }

    pub fn descriptor() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceData>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

fn rgba([r, g, b]: [f32; 3]) -> [f32; 4] {
    [r, g, b, 1.0]
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightsUniform {
    pub ambient: [f32; 4],
    pub point_position: [f32; 4],
    /// Linear color premultiplied by intensity.
    pub point_color: [f32; 4],
    /// `x` cut-off distance, `y` decay, `z` 1.0 when a point light is attached.
    pub point_params: [f32; 4],
}

/// Everything the scene pass needs for one frame, gathered from attached objects.
#[derive(Debug, Default)]
pub struct DrawList {
    pub instances: Vec<InstanceData>,
    pub lights: LightsUniform,
}

impl DrawList {
    pub fn gather(scene: &Scene) -> Self {
        let mut draw_list = DrawList::default();
        let mut has_point_light = false;

        for (_, object) in scene.attached() {
            let world = object.transform.matrix();

            match &object.kind {
                ObjectKind::Mesh(mesh) => {
                    let model = world * Mat4::from_scale(mesh.geometry.dimensions());
                    draw_list
                        .instances
                        .push(InstanceData::new(model, &mesh.material));
                }
                ObjectKind::AxisHelper(helper) => {
                    draw_list.instances.extend(axis_bars(world, helper));
                }
                ObjectKind::PointLightHelper(helper) => {
                    let Some(light) = scene.get_object(helper.light) else {
                        continue;
                    };
                    let ObjectKind::PointLight(point_light) = &light.kind else {
                        continue;
                    };

                    let position = light.transform.matrix().w_axis.truncate();
                    let model = Mat4::from_scale_rotation_translation(
                        Vec3::splat(helper.sphere_size),
                        Quat::IDENTITY,
                        position,
                    );
                    draw_list
                        .instances
                        .push(InstanceData::emissive(model, point_light.color));
                }
                ObjectKind::PointLight(light) => {
                    if has_point_light {
                        log::trace!("Ignoring extra point light {}", object.name);
                        continue;
                    }
                    has_point_light = true;

                    draw_list.lights.point_position = world.w_axis.to_array();
                    draw_list.lights.point_color = rgba(light.color.to_linear(light.intensity));
                    draw_list.lights.point_params = [light.distance, light.decay, 1.0, 0.0];
                }
                ObjectKind::AmbientLight(light) => {
                    let [r, g, b] = light.color.to_linear(light.intensity);
                    let ambient = &mut draw_list.lights.ambient;
                    ambient[0] += r;
                    ambient[1] += g;
                    ambient[2] += b;
                }
            }
        }

        draw_list
    }
}

/// One thin box per axis, running from the origin to `length` along that axis.
fn axis_bars(world: Mat4, helper: &AxisHelper) -> impl Iterator<Item = InstanceData> + '_ {
    helper.axes().into_iter().map(move |(direction, color)| {
        let scale = Vec3::splat(helper.thickness) + direction * (helper.length - helper.thickness);
        let offset = direction * helper.length * 0.5;
        let model = world * Mat4::from_scale_rotation_translation(scale, Quat::IDENTITY, offset);
        InstanceData::emissive(model, color)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contents::SceneContentManager;

    fn gathered_after_first_frame() -> DrawList {
        let mut scene = Scene::new();
        let mut contents = SceneContentManager::new();
        contents.init(&mut scene);
        contents.update(&mut scene);
        scene.late_update();

        DrawList::gather(&scene)
    }

    #[test]
    fn draws_axis_bars_light_marker_and_boxes() {
        let draw_list = gathered_after_first_frame();

        // 3 axis bars, 1 light marker, 2 boxes
        assert_eq!(draw_list.instances.len(), 6);
    }

    #[test]
    fn lights_come_from_attached_objects() {
        let lights = gathered_after_first_frame().lights;

        assert_eq!(lights.point_position, [0.0, 20.0, 0.0, 1.0]);
        assert_eq!(lights.point_params, [0.0, 2.0, 1.0, 0.0]);
        assert!((lights.point_color[0] - 500.0).abs() < 1e-3);
        assert!(lights.ambient[0] > 0.0 && lights.ambient[0] < 0.2);
    }

    #[test]
    fn box_instance_is_scaled_by_geometry() {
        let mut scene = Scene::new();
        let mut contents = SceneContentManager::new();
        contents.set_box_size(2.0);
        contents.set_box_enabled(false);
        contents.init(&mut scene);
        contents.rebuild_box(&mut scene);
        contents.set_box_enabled(true);
        contents.update(&mut scene);
        scene.late_update();

        let draw_list = DrawList::gather(&scene);
        let primary = draw_list
            .instances
            .iter()
            .find(|instance| instance.model.w_axis.truncate() == Vec3::new(0.0, 2.0, 0.0))
            .unwrap();

        let (scale, _, _) = primary.model.to_scale_rotation_translation();
        assert!((scale - Vec3::splat(2.0)).length() < 1e-4);
    }

    #[test]
    fn empty_scene_has_no_lights() {
        let draw_list = DrawList::gather(&Scene::new());

        assert!(draw_list.instances.is_empty());
        assert_eq!(draw_list.lights, LightsUniform::default());
    }
}
