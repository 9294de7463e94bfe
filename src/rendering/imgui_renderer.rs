use imgui_wgpu::RendererConfig;

/// Draws the imgui overlay on top of an already rendered frame.
pub struct ImguiRendererState {
    renderer: imgui_wgpu::Renderer,
}

impl ImguiRendererState {
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        texture_format: wgpu::TextureFormat,
        context: &mut imgui::Context,
    ) -> Self {
        let renderer_config = RendererConfig {
            texture_format,
            ..Default::default()
        };

        Self {
            renderer: imgui_wgpu::Renderer::new(context, device, queue, renderer_config),
        }
    }

    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        context: &mut imgui::Context,
    ) {
        let draw_data = context.render();

        // imgui-rs crashes when asked to render a frame without draw lists
        // https://github.com/imgui-rs/imgui-rs/issues/325
        if draw_data.draw_lists_count() == 0 {
            return;
        }

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Imgui pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if let Err(err) = self
            .renderer
            .render(draw_data, queue, device, &mut render_pass)
        {
            log::error!("Failed to render imgui overlay: {:?}", err);
        }
    }
}
