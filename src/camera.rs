use glam::{Mat4, Vec2, Vec3};
use wgpu::util::DeviceExt;

#[derive(Debug, Clone)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov: f32,
}

impl Camera {
    pub fn get_vp_matrix(&self, resolution: Vec2) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let aspect = resolution.x / resolution.y.max(1.0);
        let projection = Mat4::perspective_rh(self.fov.to_radians(), aspect, 0.1, 1000.0);
        projection * view
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(10.0, 10.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: 75.0,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Default)]
pub struct CameraUniform {
    view_proj: Mat4,
    eye: [f32; 4],
}

impl CameraUniform {
    pub fn update(&mut self, resolution: winit::dpi::PhysicalSize<u32>, camera: &Camera) {
        self.view_proj =
            camera.get_vp_matrix(Vec2::new(resolution.width as f32, resolution.height as f32));
        self.eye = camera.eye.extend(1.0).to_array();
    }

    pub fn create_buffer(&self, device: &wgpu::Device) -> wgpu::Buffer {
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Uniform Buffer"),
            contents: bytemuck::cast_slice(&[*self]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        })
    }

    pub fn update_buffer(&self, queue: &wgpu::Queue, buffer: &wgpu::Buffer) {
        queue.write_buffer(buffer, 0, bytemuck::cast_slice(&[*self]));
    }
}
