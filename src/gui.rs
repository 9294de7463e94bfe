use glam::Vec3;

use crate::demo::DemoState;

const BOX_SIZE_RANGE: (f32, f32) = (0.1, 10.0);

/// Control surface for the contents. Size changes rebuild the box once the slider is released.
pub fn draw_contents_panel(ui: &imgui::Ui, state: &mut DemoState) {
    ui.window("Contents")
        .size([320.0, 220.0], imgui::Condition::FirstUseEver)
        .build(|| {
            let contents = &mut state.contents;

            let mut enabled = contents.box_enabled();
            if ui.checkbox("Box enabled", &mut enabled) {
                contents.set_box_enabled(enabled);
            }

            let mut size = contents.box_size();
            if ui.slider("Box size", BOX_SIZE_RANGE.0, BOX_SIZE_RANGE.1, &mut size) {
                contents.set_box_size(size);
            }
            if ui.is_item_deactivated_after_edit() {
                contents.rebuild_box(&mut state.scene);
            }

            if let Some(displacement) = contents.displacement_mut() {
                let mut values = displacement.to_array();
                if imgui::Drag::new("Box displacement")
                    .speed(0.05)
                    .build_array(ui, &mut values)
                {
                    *displacement = Vec3::from_array(values);
                }
            }

            if let Some(primary) = contents.primary_box() {
                let membership = if state.scene.contains(primary.mesh) {
                    "attached"
                } else {
                    "detached"
                };
                ui.text(format!(
                    "Built size: {} ({})",
                    primary.geometry.width, membership
                ));
            }
            ui.text(format!("Applied: {:?}", contents.last_box_visibility()));

            ui.separator();

            let stats = state.scene.stats();
            ui.text(format!("Frame: {}", state.frame));
            ui.text(format!("Objects allocated: {}", stats.allocated));
            ui.text(format!("Meshes attached: {}", stats.meshes));
            ui.text(format!(
                "Lights attached: {} point, {} ambient",
                stats.point_lights, stats.ambient_lights
            ));

            if ui.collapsing_header("Attached objects", imgui::TreeNodeFlags::empty()) {
                for (id, object) in state.scene.attached() {
                    ui.text(format!("#{} {} ({})", id.index(), object.name, object.kind.label()));
                }
            }
        });
}
