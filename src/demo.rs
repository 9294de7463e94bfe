use crate::{
    camera::Camera, config::DemoConfig, contents::SceneContentManager, scene_graph::Scene,
};

pub struct DemoState {
    pub camera: Camera,
    pub start_time: std::time::Instant,
    pub scene: Scene,
    pub contents: SceneContentManager,
    pub frame: u64,
}

impl DemoState {
    /// Creates the scene and runs the contents' one-time setup.
    pub fn new(config: &DemoConfig) -> Self {
        let mut scene = Scene::new();

        let mut contents = SceneContentManager::new();
        contents.set_box_size(config.box_size);
        contents.set_box_enabled(config.box_enabled);
        contents.init(&mut scene);

        Self {
            camera: Camera::default(),
            start_time: std::time::Instant::now(),
            scene,
            contents,
            frame: 0,
        }
    }

    pub fn update(&mut self) {
        self.contents.update(&mut self.scene);
        self.frame += 1;
    }
}
