use std::{sync::Arc, time::Instant};

use anyhow::Context;
use imgui::{FontConfig, FontSource};
use imgui_winit_support::WinitPlatform;
use winit::{
    application::ApplicationHandler,
    event::{Event, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use crate::{demo::DemoState, engine, rendering::renderer::Renderer};

struct ImguiState {
    context: imgui::Context,
    platform: WinitPlatform,
}

struct App {
    renderer: Option<Renderer>,
    demo_state: DemoState,
    imgui: Option<ImguiState>,
    last_frame: Instant,
}

impl App {
    fn from_demo_state(demo_state: DemoState) -> Self {
        Self {
            renderer: None,
            demo_state,
            imgui: None,
            last_frame: Instant::now(),
        }
    }

    fn setup_imgui(window: &Window) -> ImguiState {
        let mut context = imgui::Context::create();
        let mut platform = WinitPlatform::new(&mut context);
        platform.attach_window(
            context.io_mut(),
            window,
            imgui_winit_support::HiDpiMode::Default,
        );

        context.fonts().add_font(&[FontSource::DefaultFontData {
            config: Some(FontConfig {
                oversample_h: 1,
                pixel_snap_h: true,
                size_pixels: 14.0,
                ..Default::default()
            }),
        }]);

        // The published imgui build mishandles its ini file
        context.set_ini_filename(None);

        ImguiState { context, platform }
    }

    fn create_renderer(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let window_attributes = Window::default_attributes().with_title("Box contents");
        let window = event_loop
            .create_window(window_attributes)
            .context("Failed to create window")?;

        let mut imgui = Self::setup_imgui(&window);
        let renderer = pollster::block_on(Renderer::new(
            Arc::new(window),
            &self.demo_state,
            &mut imgui.context,
        ))?;

        renderer.window.request_redraw();
        self.renderer = Some(renderer);
        self.imgui = Some(imgui);

        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(renderer), Some(imgui)) = (self.renderer.as_mut(), self.imgui.as_mut()) else {
            return;
        };

        let now = Instant::now();
        imgui
            .context
            .io_mut()
            .update_delta_time(now - self.last_frame);
        self.last_frame = now;

        renderer.window.request_redraw();

        if let Err(err) = imgui
            .platform
            .prepare_frame(imgui.context.io_mut(), &renderer.window)
        {
            log::error!("Failed to prepare imgui frame: {:?}", err);
            return;
        }

        let ui = imgui.context.new_frame();
        if let Err(err) = engine::update(&mut self.demo_state, ui) {
            log::error!("Error during engine::update: {:?}", err);
            event_loop.exit();
            return;
        }

        match renderer.render(&self.demo_state, &mut imgui.context) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.resize(renderer.size);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory");
                event_loop.exit();
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Timeout");
            }
            Err(other) => {
                log::error!("Unexpected error: {:?}", other);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_some() {
            return;
        }

        if let Err(err) = self.create_renderer(event_loop) {
            log::error!("Failed to start renderer: {:?}", err);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(*new_size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => (),
        }

        if let (Some(renderer), Some(imgui)) = (self.renderer.as_ref(), self.imgui.as_mut()) {
            imgui.platform.handle_event::<()>(
                imgui.context.io_mut(),
                &renderer.window,
                &Event::WindowEvent { window_id, event },
            );
        }
    }
}

pub async fn run(demo_state: DemoState) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::from_demo_state(demo_state);
    event_loop.run_app(&mut app)?;

    log::info!("Window closed after {} frame(s)", app.demo_state.frame);

    Ok(())
}
