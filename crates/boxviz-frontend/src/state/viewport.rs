//! Viewport rendering state

use boxviz_core::{FaceSelection, Scene, Viewport, select_faces};
use boxviz_renderer::Renderer;

/// Render texture for viewport
struct RenderTexture {
    #[allow(dead_code)]
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    egui_texture_id: egui::TextureId,
    width: u32,
    height: u32,
}

/// GPU handles, the renderer and the offscreen texture egui displays
pub struct ViewportState {
    pub renderer: Renderer,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    render_texture: Option<RenderTexture>,
}

impl ViewportState {
    /// Create a new viewport state
    pub fn new(device: wgpu::Device, queue: wgpu::Queue, format: wgpu::TextureFormat) -> Self {
        let renderer = Renderer::new(&device, format, 1200, 800);
        Self {
            renderer,
            device,
            queue,
            render_texture: None,
        }
    }

    /// Ensure the render texture matches the requested size
    pub fn ensure_texture(
        &mut self,
        width: u32,
        height: u32,
        egui_renderer: &mut egui_wgpu::Renderer,
    ) -> egui::TextureId {
        let width = width.max(1);
        let height = height.max(1);

        if let Some(rt) = &self.render_texture
            && rt.width == width
            && rt.height == height
        {
            return rt.egui_texture_id;
        }

        if let Some(old) = self.render_texture.take() {
            egui_renderer.free_texture(&old.egui_texture_id);
        }

        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Viewport Render Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: self.renderer.format(),
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let egui_texture_id =
            egui_renderer.register_native_texture(&self.device, &view, wgpu::FilterMode::Linear);

        self.renderer.resize(&self.device, width, height);
        tracing::debug!("Viewport texture resized to {}x{}", width, height);

        self.render_texture = Some(RenderTexture {
            texture,
            view,
            egui_texture_id,
            width,
            height,
        });

        egui_texture_id
    }

    /// Sync the scene, pick the face under `pointer` and upload face colors.
    ///
    /// `pointer` is relative to the top-left of `viewport`.
    pub fn prepare(
        &mut self,
        scene: &Scene,
        pointer: Option<glam::Vec2>,
        viewport: Viewport,
    ) -> FaceSelection {
        self.renderer.set_scene(&self.device, scene);

        let selection = pointer
            .map(|pos| {
                let ray = self.renderer.camera().screen_to_ray(pos, viewport);
                select_faces(&ray, &scene.prism)
            })
            .unwrap_or_default();

        self.renderer.update_faces(&self.queue, scene, &selection);
        selection
    }

    /// Render the 3D scene to the texture
    pub fn render(&mut self) {
        let Some(ref rt) = self.render_texture else {
            return;
        };

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Viewport Render Encoder"),
            });

        self.renderer.render(&mut encoder, &rt.view, &self.queue);

        self.queue.submit(std::iter::once(encoder.finish()));
    }
}
