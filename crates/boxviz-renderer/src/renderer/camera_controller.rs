//! Camera state and its GPU uniform buffer

use wgpu::util::DeviceExt;

use crate::camera::Camera;
use crate::config::CameraConfig;

/// Owns the camera, its uniform buffer and the bind group layout every
/// sub-renderer binds at slot 0.
pub struct CameraController {
    camera: Camera,
    buffer: wgpu::Buffer,
    bind_group_layout: wgpu::BindGroupLayout,
    config: CameraConfig,
}

impl CameraController {
    /// Create the controller for a target of the given size.
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let camera = Camera::new(width.max(1) as f32 / height.max(1) as f32);

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera.uniform()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Camera Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        Self {
            camera,
            buffer,
            bind_group_layout,
            config: CameraConfig::default(),
        }
    }

    /// Get a reference to the camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Get a mutable reference to the camera.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Camera uniform buffer
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Layout of the camera bind group
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    /// Upload the current camera matrices.
    pub fn update(&self, queue: &wgpu::Queue) {
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.camera.uniform()]));
    }

    /// Update the aspect ratio after a resize.
    pub fn update_aspect(&mut self, width: u32, height: u32) {
        self.camera
            .update_aspect(width.max(1) as f32 / height.max(1) as f32);
    }

    /// Orbit by a pointer drag of `dx`, `dy` points.
    pub fn drag(&mut self, dx: f32, dy: f32) {
        self.camera.drag(dx, dy, &self.config);
    }

    /// Zoom by scroll notches.
    pub fn scroll(&mut self, notches: f32) {
        self.camera.scroll(notches, &self.config);
    }

    /// Apply camera settings. Resets the zoom offset to `initial_zoom`.
    pub fn apply_config(&mut self, config: &CameraConfig) {
        self.camera.apply_config(config);
        self.config = config.clone();
    }
}
