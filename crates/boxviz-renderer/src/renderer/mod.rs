//! Main renderer combining the sub-renderers.
//!
//! The renderer is composed of:
//! - [`CameraController`]: camera, uniform buffer and bind group layout
//! - [`FaceRenderer`]: face fills, rewritten every frame
//! - [`WireframeRenderer`]: subdivision lines, rebuilt when the scene changes

mod camera_controller;
mod gpu_resources;
mod render_pass;

pub use camera_controller::CameraController;

use boxviz_core::{FaceSelection, Scene};

use crate::camera::Camera;
use crate::config::{CameraConfig, MeshConfig, RendererConfig, ViewportConfig};
use crate::constants::viewport::{CLEAR_COLOR, DEPTH_FORMAT, SAMPLE_COUNT};
use crate::sub_renderers::{FaceColors, FaceRenderer, WireframeRenderer};

/// Main renderer.
pub struct Renderer {
    camera_controller: CameraController,

    // Depth/MSAA resources
    #[allow(dead_code)] // Held for GPU resource lifetime
    depth_texture: wgpu::Texture,
    depth_view: wgpu::TextureView,
    #[allow(dead_code)]
    msaa_texture: Option<wgpu::Texture>,
    msaa_view: Option<wgpu::TextureView>,

    face_renderer: FaceRenderer,
    wireframe_renderer: WireframeRenderer,

    /// Scene the wireframe buffer was last built from
    built_scene: Option<Scene>,
    mesh_config: MeshConfig,
    clear_color: wgpu::Color,

    format: wgpu::TextureFormat,
}

impl Renderer {
    /// Creates a new renderer for a color target of the given format and size.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let camera_controller = CameraController::new(device, width, height);

        let (depth_texture, depth_view) =
            gpu_resources::create_depth_texture(device, width, height);
        let (msaa_texture, msaa_view) =
            match gpu_resources::create_msaa_texture(device, format, width, height) {
                Some((tex, view)) => (Some(tex), Some(view)),
                None => (None, None),
            };

        let face_renderer = FaceRenderer::new(
            device,
            format,
            DEPTH_FORMAT,
            camera_controller.bind_group_layout(),
            camera_controller.buffer(),
        );

        let wireframe_renderer = WireframeRenderer::new(
            device,
            format,
            DEPTH_FORMAT,
            camera_controller.bind_group_layout(),
            camera_controller.buffer(),
        );

        tracing::info!(
            "Renderer created: {}x{}, format {:?}, {}x MSAA",
            width,
            height,
            format,
            SAMPLE_COUNT
        );

        Self {
            camera_controller,
            depth_texture,
            depth_view,
            msaa_texture,
            msaa_view,
            face_renderer,
            wireframe_renderer,
            built_scene: None,
            mesh_config: MeshConfig::default(),
            clear_color: CLEAR_COLOR,
            format,
        }
    }

    // ========== Camera accessors ==========

    /// Get a reference to the camera.
    pub fn camera(&self) -> &Camera {
        self.camera_controller.camera()
    }

    /// Get the camera controller for drag and scroll input.
    pub fn camera_controller_mut(&mut self) -> &mut CameraController {
        &mut self.camera_controller
    }

    /// Resizes the renderer's textures for a new viewport size.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.camera_controller.update_aspect(width, height);

        let (depth_texture, depth_view) =
            gpu_resources::create_depth_texture(device, width, height);
        self.depth_texture = depth_texture;
        self.depth_view = depth_view;

        let (msaa_texture, msaa_view) =
            match gpu_resources::create_msaa_texture(device, self.format, width, height) {
                Some((tex, view)) => (Some(tex), Some(view)),
                None => (None, None),
            };
        self.msaa_texture = msaa_texture;
        self.msaa_view = msaa_view;
    }

    /// Returns the texture format used by the renderer.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    // ========== Scene ==========

    /// Track the scene being drawn.
    ///
    /// The camera extent follows the largest prism dimension. The wireframe
    /// is rebuilt only when the scene differs from the last one.
    pub fn set_scene(&mut self, device: &wgpu::Device, scene: &Scene) {
        self.camera_controller
            .camera_mut()
            .set_extent(scene.prism.max_dimension());

        if self.built_scene.as_ref() == Some(scene) {
            return;
        }

        self.wireframe_renderer.rebuild(
            device,
            &scene.prism,
            &scene.subdivisions,
            self.mesh_config.line_color,
        );
        self.built_scene = Some(*scene);
    }

    /// Write this frame's face positions and highlight colors.
    pub fn update_faces(&self, queue: &wgpu::Queue, scene: &Scene, selection: &FaceSelection) {
        let colors = FaceColors {
            face: self.mesh_config.face_color,
            highlight: self.mesh_config.highlight_color,
        };
        self.face_renderer
            .update(queue, &scene.prism, selection.highlighted(), colors);
    }

    /// Render the scene.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        queue: &wgpu::Queue,
    ) {
        self.camera_controller.update(queue);

        let params = render_pass::MainPassParams {
            face_renderer: &self.face_renderer,
            wireframe_renderer: &self.wireframe_renderer,
            depth_view: &self.depth_view,
            msaa_view: self.msaa_view.as_ref(),
            clear_color: self.clear_color,
        };
        render_pass::render_main_pass(encoder, view, &params);
    }

    // ========== Configuration Methods ==========

    /// Apply a full renderer configuration.
    pub fn apply_config(&mut self, config: &RendererConfig) {
        self.apply_viewport_config(&config.viewport);
        self.apply_camera_config(&config.camera);
        self.apply_mesh_config(&config.mesh);
    }

    /// Apply camera configuration.
    pub fn apply_camera_config(&mut self, config: &CameraConfig) {
        self.camera_controller.apply_config(config);
    }

    /// Apply viewport configuration.
    pub fn apply_viewport_config(&mut self, config: &ViewportConfig) {
        self.clear_color = wgpu::Color {
            r: config.background_color[0] as f64,
            g: config.background_color[1] as f64,
            b: config.background_color[2] as f64,
            a: config.background_color[3] as f64,
        };
    }

    /// Apply mesh colors. The wireframe picks up a new line color on its
    /// next rebuild.
    pub fn apply_mesh_config(&mut self, config: &MeshConfig) {
        if config.line_color != self.mesh_config.line_color {
            self.built_scene = None;
        }
        self.mesh_config = config.clone();
    }
}
