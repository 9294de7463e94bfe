use std::sync::Arc;

use anyhow::Context;
use winit::{dpi::PhysicalSize, window::Window};

use crate::{
    camera::CameraUniform,
    demo::DemoState,
    rendering::{
        draw_list::DrawList, imgui_renderer::ImguiRendererState, scene_pass::ScenePass,
        texture::DepthTexture,
    },
};

pub struct Renderer {
    pub window: Arc<Window>,
    pub size: PhysicalSize<u32>,

    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,

    depth_texture: DepthTexture,
    camera_uniform: CameraUniform,
    camera_buffer: wgpu::Buffer,

    scene_pass: ScenePass,
    imgui_renderer: ImguiRendererState,
}

impl Renderer {
    pub async fn new(
        window: Arc<Window>,
        demo_state: &DemoState,
        imgui_context: &mut imgui::Context,
    ) -> anyhow::Result<Renderer> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .context("Failed to create surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("No suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                label: None,
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .context("Failed to create device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        let depth_texture = DepthTexture::new(&device, size);

        let mut camera_uniform = CameraUniform::default();
        camera_uniform.update(size, &demo_state.camera);
        let camera_buffer = camera_uniform.create_buffer(&device);

        let scene_pass = ScenePass::new(&device, surface_format, &camera_buffer);
        let imgui_renderer =
            ImguiRendererState::new(&device, &queue, surface_format, imgui_context);

        log::info!(
            "Renderer ready: {} ({:?}), surface format {:?}",
            adapter.get_info().name,
            adapter.get_info().backend,
            surface_format
        );

        Ok(Self {
            window,
            size,
            surface,
            device,
            queue,
            surface_config,
            depth_texture,
            camera_uniform,
            camera_buffer,
            scene_pass,
            imgui_renderer,
        })
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.surface_config.width = new_size.width;
            self.surface_config.height = new_size.height;
            self.surface.configure(&self.device, &self.surface_config);
            self.depth_texture = DepthTexture::new(&self.device, new_size);
        }
    }

    pub fn render(
        &mut self,
        demo_state: &DemoState,
        imgui_context: &mut imgui::Context,
    ) -> Result<(), wgpu::SurfaceError> {
        self.camera_uniform.update(self.size, &demo_state.camera);
        self.camera_uniform
            .update_buffer(&self.queue, &self.camera_buffer);

        let draw_list = DrawList::gather(&demo_state.scene);

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.scene_pass.render(
            &self.queue,
            &mut encoder,
            &view,
            self.depth_texture.view(),
            &draw_list,
        );

        self.imgui_renderer.render(
            &self.device,
            &self.queue,
            &mut encoder,
            &view,
            imgui_context,
        );

        self.queue.submit([encoder.finish()]);
        output.present();

        Ok(())
    }
}
