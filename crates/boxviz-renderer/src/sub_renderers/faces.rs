//! Filled prism faces
//!
//! The six quads are drawn from a fixed 24-vertex buffer that is rewritten
//! every frame with fresh positions and per-face colors. Indices never
//! change. Faces carry a depth bias so wireframe lines lying on them win the
//! depth test.

use boxviz_core::{Face, Prism};
use wgpu::util::DeviceExt;

use crate::constants::faces::{DEPTH_BIAS, DEPTH_BIAS_SLOPE_SCALE, INDEX_COUNT, VERTEX_COUNT};
use crate::pipeline::{PipelineConfig, create_camera_bind_group};
use crate::vertex::PositionColorVertex;

/// Per-face fill colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceColors {
    /// Color of faces not under the cursor
    pub face: [f32; 3],
    /// Color of the highlighted face
    pub highlight: [f32; 3],
}

/// Face fill renderer
pub struct FaceRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl FaceRenderer {
    /// Creates a new face renderer.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
        camera_buffer: &wgpu::Buffer,
    ) -> Self {
        let bind_group =
            create_camera_bind_group(device, camera_bind_group_layout, camera_buffer, "Face");

        let pipeline = PipelineConfig::new(
            "Face",
            include_str!("../shaders/face.wgsl"),
            format,
            depth_format,
            &[camera_bind_group_layout],
        )
        .with_vertex_layouts(vec![PositionColorVertex::layout()])
        .with_depth_bias(DEPTH_BIAS, DEPTH_BIAS_SLOPE_SCALE)
        .build(device);

        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Face Vertex Buffer"),
            size: (VERTEX_COUNT * std::mem::size_of::<PositionColorVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Face Index Buffer"),
            contents: bytemuck::cast_slice(&face_indices()),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            bind_group,
        }
    }

    /// Upload positions and colors for this frame.
    pub fn update(
        &self,
        queue: &wgpu::Queue,
        prism: &Prism,
        highlighted: Option<Face>,
        colors: FaceColors,
    ) {
        let vertices = face_vertices(prism, highlighted, colors);
        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
    }

    /// Renders the faces.
    pub fn render<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        render_pass.draw_indexed(0..INDEX_COUNT as u32, 0, 0..1);
    }
}

/// Four vertices per face in [`Face::ALL`] order, colored by highlight state
pub fn face_vertices(
    prism: &Prism,
    highlighted: Option<Face>,
    colors: FaceColors,
) -> [PositionColorVertex; VERTEX_COUNT] {
    let mut vertices = [PositionColorVertex::new(glam::Vec3::ZERO, colors.face); VERTEX_COUNT];

    for face in Face::ALL {
        let color = if highlighted == Some(face) {
            colors.highlight
        } else {
            colors.face
        };
        let base = face.index() * 4;
        for (i, corner) in prism.face_corners(face).into_iter().enumerate() {
            vertices[base + i] = PositionColorVertex::new(corner, color);
        }
    }

    vertices
}

/// Triangles `(0, 1, 2)` and `(2, 3, 0)` of every face quad
pub fn face_indices() -> [u16; INDEX_COUNT] {
    let mut indices = [0u16; INDEX_COUNT];
    for (face, chunk) in indices.chunks_exact_mut(6).enumerate() {
        let base = (face * 4) as u16;
        chunk.copy_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: FaceColors = FaceColors {
        face: [0.5, 0.5, 0.5],
        highlight: [0.0, 0.0, 1.0],
    };

    #[test]
    fn test_only_highlighted_face_changes_color() {
        let prism = Prism::new(5.0, 1.0, 10.0);
        let vertices = face_vertices(&prism, Some(Face::LengthMin), COLORS);

        for face in Face::ALL {
            let expected = if face == Face::LengthMin {
                COLORS.highlight
            } else {
                COLORS.face
            };
            for v in &vertices[face.index() * 4..face.index() * 4 + 4] {
                assert_eq!(v.color, expected, "{face:?}");
            }
        }
    }

    #[test]
    fn test_vertices_follow_face_corners() {
        let prism = Prism::new(2.0, 3.0, 4.0);
        let vertices = face_vertices(&prism, None, COLORS);
        let corners = prism.face_corners(Face::HeightMax);
        let base = Face::HeightMax.index() * 4;
        for (vertex, corner) in vertices[base..base + 4].iter().zip(corners) {
            assert_eq!(vertex.position, corner.to_array());
        }
    }

    #[test]
    fn test_indices_split_quads() {
        let indices = face_indices();
        assert_eq!(&indices[..6], &[0, 1, 2, 2, 3, 0]);
        assert_eq!(&indices[30..], &[20, 21, 22, 22, 23, 20]);
        assert!(indices.iter().all(|&i| (i as usize) < VERTEX_COUNT));
    }
}
