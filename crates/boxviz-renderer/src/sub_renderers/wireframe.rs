//! Subdivision wireframe renderer

use boxviz_core::{LineSegment, Prism, Subdivisions, grid_lines};
use wgpu::util::DeviceExt;

use crate::pipeline::{PipelineConfig, create_camera_bind_group};
use crate::vertex::PositionColorVertex;

/// Wireframe renderer
///
/// The vertex buffer only changes through [`WireframeRenderer::rebuild`].
pub struct WireframeRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: Option<wgpu::Buffer>,
    vertex_count: u32,
    bind_group: wgpu::BindGroup,
}

impl WireframeRenderer {
    /// Creates a new wireframe renderer with no lines.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
        camera_buffer: &wgpu::Buffer,
    ) -> Self {
        let bind_group =
            create_camera_bind_group(device, camera_bind_group_layout, camera_buffer, "Wireframe");

        let pipeline = PipelineConfig::new(
            "Wireframe",
            include_str!("../shaders/line.wgsl"),
            format,
            depth_format,
            &[camera_bind_group_layout],
        )
        .with_vertex_layouts(vec![PositionColorVertex::layout()])
        .with_topology(wgpu::PrimitiveTopology::LineList)
        .with_depth(true, wgpu::CompareFunction::LessEqual)
        .build(device);

        Self {
            pipeline,
            vertex_buffer: None,
            vertex_count: 0,
            bind_group,
        }
    }

    /// Renders the wireframe.
    pub fn render<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        let Some(vertex_buffer) = &self.vertex_buffer else {
            return;
        };
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        render_pass.draw(0..self.vertex_count, 0..1);
    }

    /// Rebuild the line buffer for a new prism or subdivision count
    pub fn rebuild(
        &mut self,
        device: &wgpu::Device,
        prism: &Prism,
        subdivisions: &Subdivisions,
        line_color: [f32; 3],
    ) {
        let lines = grid_lines(prism, subdivisions);
        let vertices = line_vertices(&lines, line_color);
        self.vertex_count = vertices.len() as u32;

        tracing::debug!(
            "Rebuilding wireframe: {} lines for {:?}",
            lines.len(),
            subdivisions
        );

        self.vertex_buffer = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Wireframe Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        }));
    }
}

/// Two vertices per segment, all in one color
pub fn line_vertices(lines: &[LineSegment], color: [f32; 3]) -> Vec<PositionColorVertex> {
    lines
        .iter()
        .flat_map(|line| {
            [
                PositionColorVertex::new(line.start, color),
                PositionColorVertex::new(line.end, color),
            ]
        })
        .collect()
}
