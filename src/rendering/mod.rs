pub mod cube;
pub mod draw_list;
pub mod imgui_renderer;
pub mod renderer;
pub mod scene_pass;
pub mod texture;
